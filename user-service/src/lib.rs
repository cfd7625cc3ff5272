// User Service Library
// Domain model, validation, storage and operations for the user directory

pub mod config;
pub mod error;
pub mod grpc;
pub mod models;
pub mod services;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use config::ServiceConfig;
pub use error::{ServiceError, ServiceResult};
pub use models::User;
pub use services::UserService;
pub use store::{InMemoryUserStore, UserStore};
pub use validation::{validate, Bound, FieldError, ValidationErrors};
