use crate::error::{ServiceError, ServiceResult};
use crate::models::User;
use crate::store::{InMemoryUserStore, UserStore};
use crate::validation::Bound;
use tracing::{debug, warn};

pub struct UserService<S: UserStore = InMemoryUserStore> {
    store: S,
}

impl UserService<InMemoryUserStore> {
    pub fn new() -> Self {
        Self::with_store(InMemoryUserStore::new())
    }

    /// Service over an in-memory store seeded with `users`
    pub fn with_users(users: Vec<User>) -> Self {
        Self::with_store(InMemoryUserStore::from_users(users))
    }
}

impl<S: UserStore> UserService<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list_users(&self) -> Vec<User> {
        self.store.all()
    }

    pub fn get_user(&self, id: u64) -> ServiceResult<User> {
        self.store.find(id).ok_or_else(|| {
            debug!(id, "user not found");
            ServiceError::NotFound(id)
        })
    }

    /// Append a validated candidate as-is, including whatever id it carries
    pub fn create_user(&mut self, bound: Bound<User>) -> ServiceResult<User> {
        let (candidate, validation) = bound.into_parts();
        if let Err(errors) = validation {
            warn!(%errors, "rejected user create");
            return Err(ServiceError::Validation { candidate, errors });
        }

        self.store.append(candidate.clone());
        debug!(id = candidate.id, total = self.store.len(), "user created");
        Ok(candidate)
    }

    /// Overwrite name and email of the user with `id`. The stored id wins
    /// over any id carried by the candidate.
    pub fn update_user(&mut self, id: u64, bound: Bound<User>) -> ServiceResult<User> {
        let (candidate, validation) = bound.into_parts();
        if let Err(errors) = validation {
            warn!(id, %errors, "rejected user update");
            return Err(ServiceError::Validation { candidate, errors });
        }

        if !self.store.replace(id, candidate.name, candidate.email) {
            warn!(id, "update target not found");
            return Err(ServiceError::NotFound(id));
        }
        debug!(id, "user updated");
        self.get_user(id)
    }

    pub fn delete_user(&mut self, id: u64) -> ServiceResult<User> {
        match self.store.remove(id) {
            Some(user) => {
                debug!(id, remaining = self.store.len(), "user deleted");
                Ok(user)
            }
            None => {
                warn!(id, "delete target not found");
                Err(ServiceError::NotFound(id))
            }
        }
    }
}

impl Default for UserService<InMemoryUserStore> {
    fn default() -> Self {
        Self::new()
    }
}
