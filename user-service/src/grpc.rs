use crate::error::ServiceError;
use crate::models::User;

pub mod proto {
    tonic::include_proto!("users");
}

// Convert from proto to domain models
impl From<proto::User> for User {
    fn from(u: proto::User) -> Self {
        User {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

// Convert from domain models to proto
impl From<User> for proto::User {
    fn from(u: User) -> Self {
        proto::User {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

impl From<Vec<User>> for proto::ListUsersResponse {
    fn from(users: Vec<User>) -> Self {
        proto::ListUsersResponse {
            users: users.into_iter().map(proto::User::from).collect(),
        }
    }
}

impl From<ServiceError> for tonic::Status {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => tonic::Status::not_found(err.to_string()),
            ServiceError::Validation { ref errors, .. } => {
                tonic::Status::invalid_argument(errors.to_string())
            }
            ServiceError::Config(_) | ServiceError::Io(_) | ServiceError::Yaml(_) => {
                tonic::Status::internal(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrors;

    #[test]
    fn test_user_conversion() {
        let user = User::new(1, "John Doe", "john@example.com");
        let wire: proto::User = user.clone().into();
        assert_eq!(wire.name, "John Doe");
        assert_eq!(User::from(wire), user);
    }

    #[test]
    fn test_status_codes() {
        let status: tonic::Status = ServiceError::NotFound(1).into();
        assert_eq!(status.code(), tonic::Code::NotFound);

        let mut errors = ValidationErrors::new();
        errors.add("Name", "Required");
        let status: tonic::Status = ServiceError::Validation {
            candidate: User::default(),
            errors,
        }
        .into();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert_eq!(status.message(), "Name: Required");
    }
}
