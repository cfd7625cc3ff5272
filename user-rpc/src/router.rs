// Request Router
// Maps an HTTP verb and path onto a handler action and binds form input

use crate::action::ActionResult;
use crate::error::RpcResult;
use crate::handlers::UserHandler;

use std::collections::HashMap;
use tracing::debug;
use user_service::{Bound, User, UserStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn parse(method: &str) -> Option<Self> {
        match method.to_ascii_uppercase().as_str() {
            "GET" => Some(Method::Get),
            "POST" => Some(Method::Post),
            _ => None,
        }
    }
}

/// An incoming request with its form fields already decoded
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub form: HashMap<String, String>,
}

impl Request {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            form: HashMap::new(),
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            form: HashMap::new(),
        }
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Index,
    Details(u64),
    CreateForm,
    Create,
    EditForm(u64),
    Edit(u64),
    DeleteConfirm(u64),
    Delete(u64),
}

impl Route {
    /// Resolve `method` and `path`. Trailing slashes are ignored; unknown
    /// paths resolve to `None`, as do ids that are not plain ASCII digits
    /// (so `/users/+1` is rejected rather than read as 1).
    pub fn parse(method: Method, path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

        match (method, segments.as_slice()) {
            (Method::Get, ["users"]) => Some(Route::Index),
            (Method::Get, ["users", "new"]) => Some(Route::CreateForm),
            (Method::Post, ["users", "new"]) => Some(Route::Create),
            (Method::Get, ["users", id]) => parse_id(id).map(Route::Details),
            (Method::Get, ["users", id, "edit"]) => parse_id(id).map(Route::EditForm),
            (Method::Post, ["users", id, "edit"]) => parse_id(id).map(Route::Edit),
            (Method::Get, ["users", id, "delete"]) => parse_id(id).map(Route::DeleteConfirm),
            (Method::Post, ["users", id, "delete"]) => parse_id(id).map(Route::Delete),
            _ => None,
        }
    }
}

fn parse_id(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Bind `id`, `name` and `email` form fields into a validated candidate.
///
/// Name and email are bound exactly as submitted so a rejected candidate is
/// redisplayed unchanged. Missing fields bind as empty; an `id` that is
/// present but not a number is recorded as a validation error and binds as 0.
pub fn bind_user(form: &HashMap<String, String>) -> Bound<User> {
    let raw = |key: &str| form.get(key).cloned().unwrap_or_default();

    let id = match form.get("id").map(|v| v.trim()) {
        None | Some("") => Some(0),
        Some(value) => parse_id(value),
    };

    let mut bound = Bound::user(User::new(id.unwrap_or(0), raw("name"), raw("email")));
    if id.is_none() {
        bound.add_error("Id", "must be a number");
    }
    bound
}

/// Route `request` to the matching action on `handler`
pub fn dispatch<S: UserStore>(
    handler: &mut UserHandler<S>,
    request: &Request,
) -> RpcResult<ActionResult> {
    let Some(route) = Route::parse(request.method, &request.path) else {
        debug!(method = ?request.method, path = %request.path, "no route");
        return Ok(ActionResult::NotFound);
    };
    debug!(?route, "dispatching");

    match route {
        Route::Index => handler.index(),
        Route::Details(id) => handler.details(id),
        Route::CreateForm => handler.create_form(),
        Route::Create => handler.create(bind_user(&request.form)),
        Route::EditForm(id) => handler.edit_form(id),
        Route::Edit(id) => handler.edit(id, bind_user(&request.form)),
        Route::DeleteConfirm(id) => handler.delete_confirm(id),
        Route::Delete(id) => handler.delete(id),
    }
}
