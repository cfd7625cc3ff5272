use crate::action::{ActionResult, ViewModel};
use crate::error::RpcResult;
use user_service::{Bound, InMemoryUserStore, ServiceError, User, UserService, UserStore};

pub struct UserHandler<S: UserStore = InMemoryUserStore> {
    service: UserService<S>,
}

impl UserHandler<InMemoryUserStore> {
    pub fn new() -> Self {
        Self {
            service: UserService::new(),
        }
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            service: UserService::with_users(users),
        }
    }
}

impl<S: UserStore> UserHandler<S> {
    pub fn with_service(service: UserService<S>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &UserService<S> {
        &self.service
    }

    /// GET list of every user
    pub fn index(&self) -> RpcResult<ActionResult> {
        Ok(ActionResult::view(
            "Index",
            ViewModel::Users(self.service.list_users()),
        ))
    }

    pub fn details(&self, id: u64) -> RpcResult<ActionResult> {
        self.show("Details", id)
    }

    /// Blank create form, no side effects
    pub fn create_form(&self) -> RpcResult<ActionResult> {
        Ok(ActionResult::view(
            "Create",
            ViewModel::Form {
                candidate: User::default(),
                errors: Default::default(),
            },
        ))
    }

    pub fn create(&mut self, bound: Bound<User>) -> RpcResult<ActionResult> {
        match self.service.create_user(bound) {
            Ok(_) => Ok(ActionResult::redirect_to_index()),
            Err(err) => Self::recover("Create", err),
        }
    }

    pub fn edit_form(&self, id: u64) -> RpcResult<ActionResult> {
        self.show("Edit", id)
    }

    /// Invalid input is redisplayed even when `id` does not exist; a valid
    /// update of a missing id is not found.
    pub fn edit(&mut self, id: u64, bound: Bound<User>) -> RpcResult<ActionResult> {
        match self.service.update_user(id, bound) {
            Ok(_) => Ok(ActionResult::redirect_to_index()),
            Err(err) => Self::recover("Edit", err),
        }
    }

    pub fn delete_confirm(&self, id: u64) -> RpcResult<ActionResult> {
        self.show("Delete", id)
    }

    pub fn delete(&mut self, id: u64) -> RpcResult<ActionResult> {
        match self.service.delete_user(id) {
            Ok(_) => Ok(ActionResult::redirect_to_index()),
            Err(err) => Self::recover("Delete", err),
        }
    }

    fn show(&self, view: &'static str, id: u64) -> RpcResult<ActionResult> {
        match self.service.get_user(id) {
            Ok(user) => Ok(ActionResult::view(view, ViewModel::User(user))),
            Err(err) => Self::recover(view, err),
        }
    }

    /// Turn the two expected failures into results; anything else propagates
    fn recover(view: &'static str, err: ServiceError) -> RpcResult<ActionResult> {
        match err {
            ServiceError::NotFound(_) => Ok(ActionResult::NotFound),
            ServiceError::Validation { candidate, errors } => Ok(ActionResult::view(
                view,
                ViewModel::Form { candidate, errors },
            )),
            other => Err(other.into()),
        }
    }
}

impl Default for UserHandler<InMemoryUserStore> {
    fn default() -> Self {
        Self::new()
    }
}
