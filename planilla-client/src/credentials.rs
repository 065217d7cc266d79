//! Credential lookup shared by the transport and the grid
//!
//! Both read the bearer token from the same place: the `access_token`
//! cookie. A missing token is not an error; the request just goes out
//! without an `Authorization` header.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;

/// Cookie holding the bearer token
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Source of the bearer token attached to outgoing requests
pub trait CredentialSource: Send + Sync + fmt::Debug {
    /// Current token, if any
    fn access_token(&self) -> Option<String>;
}

impl<T: CredentialSource + ?Sized> CredentialSource for Arc<T> {
    fn access_token(&self) -> Option<String> {
        (**self).access_token()
    }
}

/// Build the `Authorization` header value, if a token is available
pub fn bearer_header(source: &dyn CredentialSource) -> Option<String> {
    source
        .access_token()
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {}", t))
}

/// Client-side cookie jar
///
/// The token is only ever read from here; whoever logs the user in writes it.
#[derive(Debug, Default)]
pub struct CookieStore {
    cookies: DashMap<String, String>,
}

impl CookieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `Cookie` header (`a=1; access_token=xyz`)
    ///
    /// Malformed pairs are skipped.
    pub fn from_header(header: &str) -> Self {
        let store = Self::new();
        for pair in header.split(';') {
            if let Some((name, value)) = pair.trim().split_once('=') {
                let name = name.trim();
                if !name.is_empty() {
                    store.set(name, value.trim());
                }
            }
        }
        store
    }

    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        self.cookies.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.cookies.get(name).map(|v| v.value().clone())
    }

    pub fn remove(&self, name: &str) -> Option<String> {
        self.cookies.remove(name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl CredentialSource for CookieStore {
    fn access_token(&self) -> Option<String> {
        self.get(ACCESS_TOKEN_COOKIE)
    }
}

/// Fixed token, for scripts and tests
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl CredentialSource for StaticToken {
    fn access_token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// No credentials at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialSource for NoCredentials {
    fn access_token(&self) -> Option<String> {
        None
    }
}
