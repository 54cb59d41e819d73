/// Keepsake - terminal shell for client albums
use clap::{Parser, Subcommand};
use keepsake_cli::{
    commands,
    config::AppConfig,
    preview::{parse_track_seconds, PreviewOptions},
};
use keepsake_core::ClientId;
use keepsake_gallery::FilterKind;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "keepsake")]
#[command(about = "Browse and preview Keepsake client albums", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "KEEPSAKE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a client's photos and videos
    Gallery {
        /// Client id
        client: String,
        /// Restrict to one kind: all, photo or video
        #[arg(short, long, default_value = "all")]
        filter: FilterKind,
        /// Case-insensitive name filter
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Print a client's audio playlist
    Playlist {
        /// Client id
        client: String,
    },
    /// Play the audio playlist on a simulated device
    Preview {
        /// Client id
        client: String,
        /// How long to run the preview
        #[arg(long, default_value_t = 10)]
        seconds: u64,
        /// Simulated length of every track
        #[arg(long, default_value_t = 3.0, value_parser = parse_track_seconds)]
        track_seconds: f64,
    },
    /// Store credentials for authenticated requests
    Login {
        #[arg(short, long)]
        token: String,
        #[arg(short, long)]
        role: String,
    },
    /// Forget stored credentials
    Logout,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "keepsake=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;

    let output = match cli.command {
        Commands::Gallery {
            client,
            filter,
            search,
        } => {
            let auth = commands::auth_session(&config)?;
            let backend = commands::connect(&config, &auth)?;
            commands::gallery(&config, &backend, ClientId::new(client), filter, search).await?
        }
        Commands::Playlist { client } => {
            let auth = commands::auth_session(&config)?;
            let backend = commands::connect(&config, &auth)?;
            commands::playlist(&backend, ClientId::new(client)).await?
        }
        Commands::Preview {
            client,
            seconds,
            track_seconds,
        } => {
            let auth = commands::auth_session(&config)?;
            let backend = commands::connect(&config, &auth)?;
            let options = PreviewOptions {
                total: Duration::from_secs(seconds),
                ..PreviewOptions::default()
            };
            commands::preview(
                &config,
                &backend,
                ClientId::new(client),
                track_seconds,
                options,
            )
            .await?
        }
        Commands::Login { token, role } => commands::login(&config, &token, &role)?,
        Commands::Logout => commands::logout(&config)?,
    };

    print!("{output}");
    Ok(())
}
