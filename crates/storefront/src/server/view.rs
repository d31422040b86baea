//! View models handed to the external template renderer.
//!
//! A view is the template name plus its locals, sent as JSON:
//!
//! ```text
//! {"view": "shop/index", "locals": {"login": false, "categories": [...], ...}}
//! ```

use axum::{
    http::{header::LOCATION, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};

use super::context::RequestContext;

/// A template name and the locals it is rendered with.
#[derive(Debug, Clone, Serialize)]
pub struct View {
    pub view: &'static str,
    pub locals: Map<String, Value>,
}

impl View {
    /// A view whose locals start from the request context.
    pub fn new(template: &'static str, context: &RequestContext) -> Self {
        let locals = match serde_json::to_value(context) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        Self {
            view: template,
            locals,
        }
    }

    /// A view with no request context, only explicit locals.
    pub fn bare(template: &'static str) -> Self {
        Self {
            view: template,
            locals: Map::new(),
        }
    }

    /// Add one local.
    pub fn with(mut self, key: &str, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.locals.insert(key.to_owned(), value);
        self
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// `302 Found` to a fixed location.
pub fn redirect(to: &'static str) -> Response {
    (StatusCode::FOUND, [(LOCATION, HeaderValue::from_static(to))]).into_response()
}
