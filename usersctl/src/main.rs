mod commands;
mod output;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use commands::serve::ServeArgs;
use commands::users::UserCommand;

/// Serve and manage an in-memory user directory
#[derive(Parser, Debug)]
#[command(name = "usersctl", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the gRPC server
    Serve(ServeArgs),

    #[command(flatten)]
    User(UserCommand),
}

fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => {
            let config = commands::serve::load_config(&args)?;
            init_tracing(&config.log_level);
            commands::serve::execute(config).await
        }
        Command::User(command) => {
            init_tracing("warn");
            commands::users::execute(command).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create() {
        let cli = Cli::try_parse_from([
            "usersctl", "create", "--name", "John Doe", "--email", "john@example.com",
        ])
        .unwrap();
        match cli.command {
            Command::User(UserCommand::Create {
                name,
                email,
                id,
                client,
            }) => {
                assert_eq!(name, "John Doe");
                assert_eq!(email, "john@example.com");
                assert_eq!(id, 0);
                assert_eq!(client.addr, commands::users::DEFAULT_SERVER_URL);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_serve_addr_override() {
        let cli = Cli::try_parse_from(["usersctl", "serve", "--addr", "127.0.0.1:7000"]).unwrap();
        let Command::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.addr.as_deref(), Some("127.0.0.1:7000"));
    }

    #[test]
    fn test_parse_list_addr() {
        let cli =
            Cli::try_parse_from(["usersctl", "list", "--addr", "http://127.0.0.1:7000"]).unwrap();
        match cli.command {
            Command::User(UserCommand::List { client }) => {
                assert_eq!(client.addr, "http://127.0.0.1:7000");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
