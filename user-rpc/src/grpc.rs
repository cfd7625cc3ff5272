// gRPC Server
// Serves the user directory over tonic, one request at a time

use crate::error::{RpcError, RpcResult};

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::{transport::Server, Request, Response, Status};
use tracing::{debug, info};
use user_service::grpc::proto::{
    self,
    user_directory_server::{UserDirectory, UserDirectoryServer},
    CreateUserRequest, DeleteUserRequest, GetUserRequest, ListUsersRequest, ListUsersResponse,
    UpdateUserRequest,
};
use user_service::{Bound, InMemoryUserStore, User, UserService, UserStore};

pub struct UserDirectoryService<S: UserStore = InMemoryUserStore> {
    service: Arc<Mutex<UserService<S>>>,
}

impl<S: UserStore> UserDirectoryService<S> {
    pub fn new(service: UserService<S>) -> Self {
        Self {
            service: Arc::new(Mutex::new(service)),
        }
    }

    /// Shared handle to the underlying service
    pub fn service(&self) -> Arc<Mutex<UserService<S>>> {
        Arc::clone(&self.service)
    }
}

fn required_user(user: Option<proto::User>) -> Result<Bound<User>, Status> {
    user.map(|u| Bound::user(u.into()))
        .ok_or_else(|| Status::invalid_argument("user is required"))
}

#[tonic::async_trait]
impl<S: UserStore + 'static> UserDirectory for UserDirectoryService<S> {
    async fn list_users(
        &self,
        _request: Request<ListUsersRequest>,
    ) -> Result<Response<ListUsersResponse>, Status> {
        let users = self.service.lock().await.list_users();
        debug!(count = users.len(), "ListUsers");
        Ok(Response::new(users.into()))
    }

    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<proto::User>, Status> {
        let id = request.into_inner().id;
        let user = self.service.lock().await.get_user(id)?;
        Ok(Response::new(user.into()))
    }

    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<proto::User>, Status> {
        let bound = required_user(request.into_inner().user)?;
        let user = self.service.lock().await.create_user(bound)?;
        Ok(Response::new(user.into()))
    }

    async fn update_user(
        &self,
        request: Request<UpdateUserRequest>,
    ) -> Result<Response<proto::User>, Status> {
        let req = request.into_inner();
        let bound = required_user(req.user)?;
        let user = self.service.lock().await.update_user(req.id, bound)?;
        Ok(Response::new(user.into()))
    }

    async fn delete_user(
        &self,
        request: Request<DeleteUserRequest>,
    ) -> Result<Response<proto::User>, Status> {
        let id = request.into_inner().id;
        let user = self.service.lock().await.delete_user(id)?;
        Ok(Response::new(user.into()))
    }
}

/// Bind `addr` and serve until the transport fails
pub async fn serve<S: UserStore + 'static>(
    addr: SocketAddr,
    service: UserService<S>,
) -> RpcResult<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| RpcError::Transport(format!("cannot bind {}: {}", addr, e)))?;
    serve_listener(listener, service).await
}

/// Serve on an already bound listener, e.g. one bound to port 0
pub async fn serve_listener<S: UserStore + 'static>(
    listener: TcpListener,
    service: UserService<S>,
) -> RpcResult<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "user directory listening");
    }
    Server::builder()
        .add_service(UserDirectoryServer::new(UserDirectoryService::new(service)))
        .serve_with_incoming(TcpListenerStream::new(listener))
        .await
        .map_err(RpcError::from)
}
