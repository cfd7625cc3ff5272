// Action Results
// Outcome of a handler action: render a view, redirect, or not found

use user_service::{User, ValidationErrors};

/// Path of the user list, the target of every successful mutation
pub const INDEX_PATH: &str = "/users";

/// Data handed to a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewModel {
    Users(Vec<User>),
    User(User),
    /// Input form, either blank or redisplaying a rejected candidate
    Form {
        candidate: User,
        errors: ValidationErrors,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    View { name: &'static str, model: ViewModel },
    Redirect { location: &'static str },
    NotFound,
}

impl ActionResult {
    pub fn view(name: &'static str, model: ViewModel) -> Self {
        ActionResult::View { name, model }
    }

    pub fn redirect_to_index() -> Self {
        ActionResult::Redirect {
            location: INDEX_PATH,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ActionResult::NotFound)
    }

    /// Model of a rendered view, if any
    pub fn model(&self) -> Option<&ViewModel> {
        match self {
            ActionResult::View { model, .. } => Some(model),
            _ => None,
        }
    }

    /// HTTP status code this result is answered with
    pub fn status_code(&self) -> u16 {
        match self {
            ActionResult::View { .. } => 200,
            ActionResult::Redirect { .. } => 303,
            ActionResult::NotFound => 404,
        }
    }

    /// `Location` header for redirects
    pub fn location(&self) -> Option<&'static str> {
        match self {
            ActionResult::Redirect { location } => Some(location),
            _ => None,
        }
    }
}
