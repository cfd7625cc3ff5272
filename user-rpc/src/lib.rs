pub mod action;
pub mod api;
pub mod error;
pub mod grpc;
pub mod handlers;
pub mod router;

pub use action::{ActionResult, ViewModel, INDEX_PATH};
pub use api::RpcServer;
pub use error::{RpcError, RpcResult};
pub use grpc::{serve, serve_listener, UserDirectoryService};
pub use handlers::UserHandler;
pub use router::{Method, Request, Route};

// Re-export types needed by clients
pub use user_service::{Bound, User};
pub use user_service;
