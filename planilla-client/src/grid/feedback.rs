//! Error/message sink a grid reports load failures to

use std::sync::{PoisonError, RwLock};

/// Receives the error flag and message shown above a grid
pub trait GridFeedback: Send + Sync {
    fn set_error(&self, error: bool);
    fn set_message(&self, message: String);
}

/// In-memory feedback holder for screens without their own state container
#[derive(Debug, Default)]
pub struct FeedbackState {
    inner: RwLock<(bool, String)>,
}

impl FeedbackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_error(&self) -> bool {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).0
    }

    pub fn message(&self) -> String {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .1
            .clone()
    }
}

impl GridFeedback for FeedbackState {
    fn set_error(&self, error: bool) {
        self.inner.write().unwrap_or_else(PoisonError::into_inner).0 = error;
    }

    fn set_message(&self, message: String) {
        self.inner.write().unwrap_or_else(PoisonError::into_inner).1 = message;
    }
}
