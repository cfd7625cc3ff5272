use crate::output;

use clap::{Args, Subcommand};
use color_eyre::Result;
use tonic::transport::Channel;
use tonic::{Code, Status};
use tracing::debug;

use user_service::grpc::proto::{
    user_directory_client::UserDirectoryClient, CreateUserRequest, DeleteUserRequest,
    GetUserRequest, ListUsersRequest, UpdateUserRequest,
};
use user_service::User;

pub const DEFAULT_SERVER_URL: &str = "http://[::1]:50061";

/// Connection options shared by every client command
#[derive(Args, Debug)]
pub struct ClientArgs {
    /// Server URL
    #[arg(long, value_name = "URL", env = "USERSCTL_ADDR", default_value = DEFAULT_SERVER_URL)]
    pub addr: String,
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// List all users in order
    List {
        #[command(flatten)]
        client: ClientArgs,
    },

    /// Show a single user
    Get {
        id: u64,
        #[command(flatten)]
        client: ClientArgs,
    },

    /// Add a user
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        /// Id to store the user under (not checked for uniqueness)
        #[arg(long, default_value_t = 0)]
        id: u64,
        #[command(flatten)]
        client: ClientArgs,
    },

    /// Replace a user's name and email
    Update {
        id: u64,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[command(flatten)]
        client: ClientArgs,
    },

    /// Remove a user
    Delete {
        id: u64,
        #[command(flatten)]
        client: ClientArgs,
    },
}

impl UserCommand {
    fn client(&self) -> &ClientArgs {
        match self {
            UserCommand::List { client }
            | UserCommand::Get { client, .. }
            | UserCommand::Create { client, .. }
            | UserCommand::Update { client, .. }
            | UserCommand::Delete { client, .. } => client,
        }
    }
}

/// What the server answered for a command
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Listed(Vec<User>),
    Shown(User),
    Created(User),
    Updated(User),
    Deleted(User),
}

/// Run `command` against its server. Connection failures and error statuses
/// come back as the message to show the user.
pub async fn request(command: UserCommand) -> std::result::Result<Outcome, String> {
    let addr = command.client().addr.clone();
    debug!(%addr, ?command, "connecting");

    let mut client = UserDirectoryClient::<Channel>::connect(addr.clone())
        .await
        .map_err(|e| format!("cannot reach {}: {}", addr, e))?;

    let outcome = match command {
        UserCommand::List { .. } => {
            let response = client.list_users(ListUsersRequest {}).await;
            Outcome::Listed(
                response
                    .map_err(|s| describe(&s))?
                    .into_inner()
                    .users
                    .into_iter()
                    .map(User::from)
                    .collect(),
            )
        }

        UserCommand::Get { id, .. } => {
            let response = client.get_user(GetUserRequest { id }).await;
            Outcome::Shown(response.map_err(|s| describe(&s))?.into_inner().into())
        }

        UserCommand::Create {
            name, email, id, ..
        } => {
            let response = client
                .create_user(CreateUserRequest {
                    user: Some(User::new(id, name, email).into()),
                })
                .await;
            Outcome::Created(response.map_err(|s| describe(&s))?.into_inner().into())
        }

        UserCommand::Update {
            id, name, email, ..
        } => {
            let response = client
                .update_user(UpdateUserRequest {
                    id,
                    user: Some(User::new(id, name, email).into()),
                })
                .await;
            Outcome::Updated(response.map_err(|s| describe(&s))?.into_inner().into())
        }

        UserCommand::Delete { id, .. } => {
            let response = client.delete_user(DeleteUserRequest { id }).await;
            Outcome::Deleted(response.map_err(|s| describe(&s))?.into_inner().into())
        }
    };
    Ok(outcome)
}

fn render(outcome: &Outcome) {
    match outcome {
        Outcome::Listed(users) if users.is_empty() => output::dim("  No users"),
        Outcome::Listed(users) => {
            output::user_header();
            for user in users {
                output::user_row(user);
            }
        }
        Outcome::Shown(user) => {
            output::user_header();
            output::user_row(user);
        }
        Outcome::Created(user) => {
            output::success(&format!("Created user {} ({})", user.id, user.name))
        }
        Outcome::Updated(user) => {
            output::success(&format!("Updated user {} ({})", user.id, user.name))
        }
        Outcome::Deleted(user) => {
            output::success(&format!("Deleted user {} ({})", user.id, user.name))
        }
    }
}

pub async fn execute(command: UserCommand) -> Result<()> {
    match request(command).await {
        Ok(outcome) => render(&outcome),
        Err(message) => {
            output::error(&message);
            std::process::exit(1);
        }
    }
    Ok(())
}

fn describe(status: &Status) -> String {
    match status.code() {
        Code::NotFound => status.message().to_string(),
        Code::InvalidArgument => format!("invalid user: {}", status.message()),
        _ => format!("request failed: {}", status),
    }
}
