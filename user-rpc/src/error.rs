use std::fmt;
use user_service::ServiceError;

pub type RpcResult<T> = Result<T, RpcError>;

#[derive(Debug)]
pub enum RpcError {
    Service(ServiceError),
    Transport(String),
}

impl RpcError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RpcError::Service(err) if err.is_not_found())
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcError::Service(err) => write!(f, "{}", err),
            RpcError::Transport(msg) => write!(f, "Transport error: {}", msg),
        }
    }
}

impl std::error::Error for RpcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RpcError::Service(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ServiceError> for RpcError {
    fn from(err: ServiceError) -> Self {
        RpcError::Service(err)
    }
}

impl From<tonic::transport::Error> for RpcError {
    fn from(err: tonic::transport::Error) -> Self {
        RpcError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_passes_through() {
        let err: RpcError = ServiceError::NotFound(3).into();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found: user with id 3");
    }

    #[test]
    fn test_transport_error_display() {
        let err = RpcError::Transport("connection refused".to_string());
        assert!(!err.is_not_found());
        assert!(std::error::Error::source(&err).is_none());
        assert_eq!(err.to_string(), "Transport error: connection refused");
    }
}
