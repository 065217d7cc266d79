//! Server-side grid configuration
//!
//! A [`GridConfig`] describes one list screen: where its rows come from, how
//! its cells render and what happens when a row is picked. On every page,
//! search or filter change the grid calls [`GridConfig::fetch`], which posts
//! paging and search state together with the screen's transaction and
//! routes the answer through [`GridConfig::data_src`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use reqwest::Method;
use serde_json::{Map, Value, json};
use shared::error::messages;
use shared::{Acceso, CommonRequestData, User};
use tracing::{debug, warn};

use super::feedback::GridFeedback;
use super::render::{CellRenderer, RenderMode};
use super::state::{GridState, GridStateStore, SortDirection, state_key};
use crate::classifier::{is_truthy, status_of};
use crate::handoff::{HandoffStore, Screen};
use crate::transport::ApiClient;

/// Rows per page when nothing else was saved
pub const DEFAULT_PAGE_LENGTH: u64 = 10;

/// Search-pane layout used when a screen does not pick one
pub const DEFAULT_SEARCH_PANES_LAYOUT: &str = "columns-3";

/// Normalizes a selected row before it is handed on
pub type RowFormatter = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// Receives the selected, formatted row
pub type RowCallback = Arc<dyn Fn(&Value) + Send + Sync>;

/// Column definition
#[derive(Clone)]
pub struct GridColumn {
    /// Row field shown in the column
    pub data: String,
    pub title: String,
    pub render: Option<CellRenderer>,
}

impl GridColumn {
    pub fn new(data: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            title: title.into(),
            render: None,
        }
    }

    pub fn with_render(mut self, render: CellRenderer) -> Self {
        self.render = Some(render);
        self
    }

    pub fn render(&self, value: &Value, mode: RenderMode, row: &Value) -> Value {
        match &self.render {
            Some(render) => render(value, mode, row),
            None => value.clone(),
        }
    }
}

impl fmt::Debug for GridColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridColumn")
            .field("data", &self.data)
            .field("title", &self.title)
            .field("render", &self.render.is_some())
            .finish()
    }
}

/// Paging and search state of one draw
#[derive(Debug, Clone, PartialEq)]
pub struct GridRequest {
    /// Draw counter echoed back by the backend
    pub draw: u64,
    pub start: u64,
    pub length: u64,
    pub search: String,
    pub search_regex: bool,
    /// `(column index, direction)` pairs in priority order
    pub order: Vec<(usize, SortDirection)>,
    /// Search-pane selections by column index
    pub search_panes: BTreeMap<usize, Vec<Value>>,
}

impl Default for GridRequest {
    fn default() -> Self {
        Self {
            draw: 1,
            start: 0,
            length: DEFAULT_PAGE_LENGTH,
            search: String::new(),
            search_regex: false,
            order: Vec::new(),
            search_panes: BTreeMap::new(),
        }
    }
}

impl GridRequest {
    pub fn page(start: u64, length: u64) -> Self {
        Self {
            start,
            length,
            ..Default::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Append a sort column
    pub fn with_order(mut self, column: usize, direction: SortDirection) -> Self {
        self.order.push((column, direction));
        self
    }

    pub fn with_pane(mut self, column: usize, values: Vec<Value>) -> Self {
        self.search_panes.insert(column, values);
        self
    }

    /// Resume from saved UI state
    pub fn from_state(state: &GridState) -> Self {
        Self {
            draw: 1,
            start: state.start,
            length: if state.length == 0 {
                DEFAULT_PAGE_LENGTH
            } else {
                state.length
            },
            search: state.search.clone(),
            search_regex: false,
            order: state.order.clone(),
            search_panes: state.search_panes.clone(),
        }
    }

    fn to_state(&self) -> GridState {
        GridState {
            start: self.start,
            length: self.length,
            search: self.search.clone(),
            order: self.order.clone(),
            search_panes: self.search_panes.clone(),
        }
    }
}

/// Configuration of one server-side grid
pub struct GridConfig {
    table_id: String,
    endpoint: String,
    method: Method,
    user: Option<User>,
    payload: Map<String, Value>,
    acceso: Acceso,
    search_panes_layout: String,
    filterable_columns: Vec<usize>,
    columns: Vec<GridColumn>,
    row_formatter: Option<RowFormatter>,
    on_row_selected: Option<RowCallback>,
    feedback: Arc<dyn GridFeedback>,
    api: Arc<dyn ApiClient>,
    common: CommonRequestData,
    state_store: Option<Arc<GridStateStore>>,
}

impl GridConfig {
    pub fn new(
        table_id: impl Into<String>,
        endpoint: impl Into<String>,
        api: Arc<dyn ApiClient>,
        common: CommonRequestData,
        feedback: Arc<dyn GridFeedback>,
    ) -> Self {
        Self {
            table_id: table_id.into(),
            endpoint: endpoint.into(),
            method: Method::POST,
            user: None,
            payload: Map::new(),
            acceso: Acceso::default(),
            search_panes_layout: DEFAULT_SEARCH_PANES_LAYOUT.to_string(),
            filterable_columns: Vec::new(),
            columns: Vec::new(),
            row_formatter: None,
            on_row_selected: None,
            feedback,
            api,
            common,
            state_store: None,
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_user(mut self, user: Option<User>) -> Self {
        self.user = user;
        self
    }

    /// Entity payload sent inside `transaccion` next to `user` and `acceso`
    pub fn with_payload(mut self, key: impl Into<String>, payload: Value) -> Self {
        self.payload.insert(key.into(), payload);
        self
    }

    pub fn with_acceso(mut self, acceso: Acceso) -> Self {
        self.acceso = acceso;
        self
    }

    pub fn with_search_panes_layout(mut self, layout: impl Into<String>) -> Self {
        self.search_panes_layout = layout.into();
        self
    }

    /// Column indices that get a search pane
    pub fn with_filterable_columns(mut self, columns: impl IntoIterator<Item = usize>) -> Self {
        self.filterable_columns = columns.into_iter().collect();
        self
    }

    pub fn with_column(mut self, column: GridColumn) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_columns(mut self, columns: impl IntoIterator<Item = GridColumn>) -> Self {
        self.columns.extend(columns);
        self
    }

    pub fn with_row_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.row_formatter = Some(Arc::new(formatter));
        self
    }

    pub fn on_row_selected<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.on_row_selected = Some(Arc::new(callback));
        self
    }

    /// Hand the selected row to an edit screen
    pub fn hand_off_to(self, store: Arc<HandoffStore>, screen: Screen) -> Self {
        self.on_row_selected(move |row| store.put(screen, row.clone()))
    }

    /// Persist paging and search state between fetches
    pub fn with_state_store(mut self, store: Arc<GridStateStore>) -> Self {
        self.state_store = Some(store);
        self
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn columns(&self) -> &[GridColumn] {
        &self.columns
    }

    /// Storage key of this table's UI state
    pub fn state_key(&self) -> String {
        state_key(&self.table_id)
    }

    /// Request for the first draw: saved state if any, else page one
    pub fn initial_request(&self) -> GridRequest {
        self.state_store
            .as_ref()
            .and_then(|store| store.load(&self.table_id))
            .map(|state| GridRequest::from_state(&state))
            .unwrap_or_default()
    }

    /// Options handed to the grid widget itself
    pub fn widget_options(&self) -> Value {
        let columns: Vec<Value> = self
            .columns
            .iter()
            .map(|c| json!({"data": c.data, "title": c.title}))
            .collect();
        json!({
            "serverSide": true,
            "processing": true,
            "stateSave": true,
            "stateKey": self.state_key(),
            "pageLength": DEFAULT_PAGE_LENGTH,
            "ajax": {"url": self.endpoint, "type": self.method.as_str()},
            "searchPanes": {
                "layout": self.search_panes_layout,
                "columns": self.filterable_columns,
            },
            "columns": columns,
        })
    }

    fn transaccion(&self) -> Value {
        let mut transaccion = self.payload.clone();
        if let Some(user) = &self.user {
            transaccion.insert("user".into(), json!(user));
        }
        transaccion.insert("acceso".into(), json!(self.acceso));
        Value::Object(transaccion)
    }

    /// Pane selections keyed by column field, filterable columns only
    fn search_panes(&self, request: &GridRequest) -> Map<String, Value> {
        request
            .search_panes
            .iter()
            .filter(|(index, _)| self.filterable_columns.contains(index))
            .map(|(index, values)| {
                let key = self
                    .columns
                    .get(*index)
                    .map(|c| c.data.clone())
                    .unwrap_or_else(|| index.to_string());
                (key, Value::Array(values.clone()))
            })
            .collect()
    }

    /// Body posted for one draw
    pub fn build_request(&self, request: &GridRequest) -> Value {
        let order: Vec<Value> = request
            .order
            .iter()
            .map(|(column, dir)| json!({"column": column, "dir": dir}))
            .collect();
        json!({
            "token_access": self.common.token_access,
            "database": self.common.database,
            "sqlQuery": self.common.sql_query,
            "type": self.common.tipo,
            "draw": request.draw,
            "start": request.start,
            "length": request.length,
            "search": {"value": request.search, "regex": request.search_regex},
            "order": order,
            "searchPanes": self.search_panes(request),
            "transaccion": self.transaccion(),
        })
    }

    /// Fetch one page of rows
    ///
    /// Failures are reported through the feedback sink and yield no rows.
    pub async fn fetch(&self, request: &GridRequest) -> Vec<Value> {
        if self.user.is_none() {
            warn!(table = %self.table_id, "No authenticated user, grid not loaded");
            self.report(messages::NOT_AUTHENTICATED.to_string());
            return Vec::new();
        }

        if let Some(store) = &self.state_store {
            store.save(&self.table_id, request.to_state());
        }

        let body = self.build_request(request);
        debug!(table = %self.table_id, endpoint = %self.endpoint, start = request.start, "Fetching grid page");
        match self
            .api
            .request(self.method.clone(), &self.endpoint, &body, true)
            .await
        {
            Ok(response) => self.data_src(&response),
            Err(err) => {
                let mut failure = match err.details {
                    Some(Value::Object(map)) => map,
                    _ => Map::new(),
                };
                failure.insert("success".into(), Value::Bool(false));
                if status_of(failure.get("respuesta").and_then(|r| r.get("status"))).is_none() {
                    failure.entry("status").or_insert(json!(err.status));
                }
                failure.entry("message").or_insert(json!(err.message));
                self.data_src(&Value::Object(failure))
            }
        }
    }

    /// Route a grid response to rows or to the feedback sink
    pub fn data_src(&self, response: &Value) -> Vec<Value> {
        if response.get("success").is_some_and(is_truthy) {
            self.feedback.set_error(false);
            self.feedback.set_message(String::new());
            return response
                .get("array")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
        }

        let status = status_of(response.get("status"))
            .or_else(|| status_of(response.pointer("/respuesta/status")));
        let message = match status {
            Some(403) => backend_detail(response).unwrap_or_else(|| self.acceso.denied_message()),
            // Fixed wording; backend detail is only surfaced for 403
            Some(500) => messages::INTERNAL_SERVER_ERROR.to_string(),
            Some(404) => messages::NOT_FOUND.to_string(),
            _ => response
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .unwrap_or(messages::LOAD_ERROR)
                .to_string(),
        };
        warn!(table = %self.table_id, status = ?status, reason = %message, "Grid load failed");
        self.report(message);
        Vec::new()
    }

    fn report(&self, message: String) {
        self.feedback.set_error(true);
        self.feedback.set_message(message);
    }

    /// Render one cell of column `column`
    pub fn render_cell(&self, column: usize, value: &Value, mode: RenderMode, row: &Value) -> Value {
        match self.columns.get(column) {
            Some(col) => col.render(value, mode, row),
            None => value.clone(),
        }
    }

    /// Render every column of a row
    pub fn render_row(&self, row: &Value, mode: RenderMode) -> Vec<Value> {
        self.columns
            .iter()
            .map(|col| {
                let value = row.get(&col.data).unwrap_or(&Value::Null);
                col.render(value, mode, row)
            })
            .collect()
    }

    /// Handle a selection change
    ///
    /// Only a single selected row is handed on: it is formatted, then passed
    /// to the row-selected callback. Returns the formatted row.
    pub fn select_rows(&self, rows: &[Value]) -> Option<Value> {
        let [row] = rows else {
            return None;
        };
        let formatted = match &self.row_formatter {
            Some(format) => format(row),
            None => row.clone(),
        };
        if let Some(callback) = &self.on_row_selected {
            callback(&formatted);
        }
        Some(formatted)
    }
}

impl fmt::Debug for GridConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridConfig")
            .field("table_id", &self.table_id)
            .field("endpoint", &self.endpoint)
            .field("method", &self.method)
            .field("columns", &self.columns)
            .field("filterable_columns", &self.filterable_columns)
            .finish_non_exhaustive()
    }
}

/// Backend-supplied detail of a rejected grid request
fn backend_detail(response: &Value) -> Option<String> {
    ["/respuesta/error/details", "/error/details"]
        .iter()
        .find_map(|path| response.pointer(path).and_then(Value::as_str))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
