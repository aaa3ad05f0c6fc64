use anyhow::Context;
use clap::{Parser, Subcommand};
use courses_kernel::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "courses-cli", version, about = "Run and inspect the courses service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP API until interrupted
    Serve {
        /// Override `server.host`
        #[arg(long)]
        host: Option<String>,
        /// Override `server.port`
        #[arg(long)]
        port: Option<u16>,
    },
    /// MongoDB bootstrap commands
    Db {
        #[command(subcommand)]
        command: DbCommand,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommand {
    /// Connect with the configured timeout and ping the server
    Ping,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load().with_context(|| "failed to load courses settings")?;
    courses_telemetry::init(&settings.telemetry)?;

    match cli.command {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                settings.server.host = host;
            }
            if let Some(port) = port {
                settings.server.port = port;
            }
            tracing::info!(
                env = ?settings.environment,
                address = %settings.server.bind_address(),
                "courses-cli serve starting"
            );
            courses_app::bootstrap::run(settings).await
        }
        Command::Db {
            command: DbCommand::Ping,
        } => {
            let config = courses_db::MongoConfig::from_settings(&settings.database)?;
            let handle = courses_db::connect(&config).await?;
            println!(
                "MongoDB reachable; collection {}.{} is ready",
                config.database,
                handle.collection().name()
            );
            Ok(())
        }
    }
}
