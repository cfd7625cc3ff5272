use crate::action::ActionResult;
use crate::error::RpcResult;
use crate::handlers::UserHandler;
use crate::router::{self, Request};
use user_service::{InMemoryUserStore, User, UserStore};

pub struct RpcServer<S: UserStore = InMemoryUserStore> {
    user_handler: UserHandler<S>,
}

impl RpcServer<InMemoryUserStore> {
    pub fn new() -> Self {
        Self {
            user_handler: UserHandler::new(),
        }
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            user_handler: UserHandler::with_users(users),
        }
    }
}

impl<S: UserStore> RpcServer<S> {
    /// Route a request to its action
    pub fn dispatch(&mut self, request: &Request) -> RpcResult<ActionResult> {
        router::dispatch(&mut self.user_handler, request)
    }

    pub fn user_handler(&self) -> &UserHandler<S> {
        &self.user_handler
    }

    pub fn user_handler_mut(&mut self) -> &mut UserHandler<S> {
        &mut self.user_handler
    }
}

impl Default for RpcServer<InMemoryUserStore> {
    fn default() -> Self {
        Self::new()
    }
}
