//! Transport-agnostic request routing.
//!
//! [`RequestRouter::dispatch`] maps one [`ApiRequest`] onto a catalog
//! operation and always produces an [`ApiResponse`]. It never fails: every
//! error becomes a status code and a `{"message": ...}` body here, so the
//! HTTP layer in [`crate::server`] only moves bytes.
//!
//! ## Routes
//!
//! Branches are checked in order and the first match wins:
//!
//! - `OPTIONS *` → 204, empty body
//! - path outside the prefix → 404 `{"message": "Not Found"}`
//! - `GET {prefix}?search=...` → list
//! - `POST {prefix}` → create, 201 with a `Location` pointer
//! - `GET|PATCH|DELETE {prefix}/{id}` → get, update, delete
//! - anything else under the prefix → 200 with a `null` body

use crate::api::{CatalogApi, GameFilter};
use crate::error::{CatalogError, Result};
use crate::model::GameInput;
use crate::store::CollectionStore;
use serde::Serialize;
use serde_json::{json, Value};
use std::str::FromStr;
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
    Options,
    Other,
}

impl FromStr for Method {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PATCH" => Method::Patch,
            "DELETE" => Method::Delete,
            "OPTIONS" => Method::Options,
            _ => Method::Other,
        })
    }
}

/// An inbound request with its body already buffered.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub body: Vec<u8>,
}

impl ApiRequest {
    /// Build a request from a method and a request target such as
    /// `/api/games?search=zelda`.
    pub fn new(method: Method, target: &str) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path.to_string(), Some(query.to_string())),
            None => (target.to_string(), None),
        };
        Self {
            method,
            path,
            query,
            body: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_json(self, value: &Value) -> Self {
        let body = value.to_string();
        self.with_body(body)
    }

    /// Last value of the query parameter `name`, percent-decoded.
    pub fn query_param(&self, name: &str) -> Option<String> {
        let query = self.query.as_deref()?;
        url::form_urlencoded::parse(query.as_bytes())
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
            .last()
    }
}

/// The outcome of a dispatch. `body: None` means no payload at all.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub location: Option<String>,
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn ok(body: Value) -> Self {
        Self {
            status: 200,
            location: None,
            body: Some(body),
        }
    }

    pub fn created(body: Value, location: String) -> Self {
        Self {
            status: 201,
            location: Some(location),
            body: Some(body),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: 204,
            location: None,
            body: None,
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self {
            status: 404,
            location: None,
            body: Some(json!({ "message": message })),
        }
    }

    pub fn from_error(err: CatalogError) -> Self {
        match err.status_code() {
            404 => Self::not_found("Game Not Found"),
            status => {
                error!(error = %err, "request failed");
                Self {
                    status,
                    location: None,
                    body: Some(json!({ "message": "Server Error" })),
                }
            }
        }
    }

    /// The body as it goes on the wire. Empty for bodiless responses.
    pub fn body_bytes(&self) -> Vec<u8> {
        self.body
            .as_ref()
            .map(|v| v.to_string().into_bytes())
            .unwrap_or_default()
    }
}

impl From<CatalogError> for ApiResponse {
    fn from(err: CatalogError) -> Self {
        Self::from_error(err)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Route<'a> {
    Collection,
    Item(&'a str),
}

pub struct RequestRouter<S: CollectionStore> {
    api: CatalogApi<S>,
    prefix: String,
}

impl<S: CollectionStore> RequestRouter<S> {
    /// `prefix` must already be normalized (see [`crate::config::normalize_prefix`]).
    pub fn new(api: CatalogApi<S>, prefix: impl Into<String>) -> Self {
        Self {
            api,
            prefix: prefix.into(),
        }
    }

    pub fn api(&self) -> &CatalogApi<S> {
        &self.api
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn dispatch(&self, req: &ApiRequest) -> ApiResponse {
        let response = if req.method == Method::Options {
            ApiResponse::no_content()
        } else {
            match self.resolve(&req.path) {
                None => ApiResponse::not_found("Not Found"),
                Some(route) => self.handle(route, req).unwrap_or_else(ApiResponse::from_error),
            }
        };
        debug!(method = ?req.method, path = %req.path, status = response.status, "dispatched");
        response
    }

    fn resolve<'a>(&self, path: &'a str) -> Option<Route<'a>> {
        let rest = path.strip_prefix(self.prefix.as_str())?;
        match rest {
            "" | "/" => Some(Route::Collection),
            _ => rest.strip_prefix('/').map(Route::Item),
        }
    }

    fn handle(&self, route: Route<'_>, req: &ApiRequest) -> Result<ApiResponse> {
        match (route, req.method) {
            (Route::Collection, Method::Get) => {
                let filter = GameFilter {
                    search: req.query_param("search"),
                };
                Ok(ApiResponse::ok(to_json(&self.api.list_games(&filter)?)?))
            }
            (Route::Collection, Method::Post) => {
                let game = self.api.create_game(decode_body(&req.body)?)?;
                let location = format!("{}/{}", self.prefix, game.id);
                Ok(ApiResponse::created(to_json(&game)?, location))
            }
            (Route::Item(id), Method::Get) => Ok(ApiResponse::ok(to_json(&self.api.get_game(id)?)?)),
            (Route::Item(id), Method::Patch) => {
                let game = self.api.update_game(id, decode_body(&req.body)?)?;
                Ok(ApiResponse::ok(to_json(&game)?))
            }
            (Route::Item(id), Method::Delete) => {
                self.api.delete_game(id)?;
                Ok(ApiResponse::ok(json!({})))
            }
            // Unmatched method under the prefix: empty success, kept for compatibility
            _ => Ok(ApiResponse::ok(Value::Null)),
        }
    }
}

/// Request bodies must be JSON objects. Arrays would otherwise fill
/// `GameInput` fields positionally.
fn decode_body(body: &[u8]) -> Result<GameInput> {
    let value: Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(CatalogError::Decode(serde::de::Error::custom(
            "request body must be a JSON object",
        )));
    }
    Ok(serde_json::from_value(value)?)
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}
