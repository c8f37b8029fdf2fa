use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brooder::{api, storage::LocalBlobStore};
use brooder_core::db::{self, seed, Database};

#[derive(Parser)]
#[command(name = "brooder")]
#[command(about = "Brood-to-coop care tracker for new chicken keepers")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the Brooder server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Data directory (database + photo blobs); defaults to the
        /// platform data dir
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
    /// Load the built-in task curriculum, replacing any existing catalog
    Seed {
        /// Data directory; defaults to the platform data dir
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "brooder=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { port, data_dir }) => serve(port, data_dir).await,
        Some(Commands::Seed { data_dir }) => {
            let db = open_database(data_dir.clone())?;
            db.migrate()?;
            let count = seed::load_catalog(&db)?;
            tracing::info!("loaded {} curriculum tasks", count);
            Ok(())
        }
        None => serve(3000, None).await,
    }
}

fn open_database(data_dir: Option<PathBuf>) -> anyhow::Result<Database> {
    let data_dir = match data_dir {
        Some(dir) => dir,
        None => db::default_data_dir()?,
    };
    Ok(Database::open(data_dir.join("brooder.db"))?)
}

async fn serve(port: u16, data_dir: Option<PathBuf>) -> anyhow::Result<()> {
    tracing::info!("Starting Brooder server on port {}", port);

    let data_dir = match data_dir {
        Some(dir) => dir,
        None => db::default_data_dir()?,
    };

    let db = Database::open(data_dir.join("brooder.db"))?;
    db.migrate()?;

    // First run: load the curriculum so the week views aren't empty.
    if db.task_count()? == 0 {
        let count = seed::load_catalog(&db)?;
        tracing::info!("loaded {} curriculum tasks", count);
    }

    let media_dir = data_dir.join("media");
    let storage = Arc::new(LocalBlobStore::new(&media_dir));

    let app = api::create_router(db, storage)
        .nest_service("/media", ServeDir::new(media_dir));

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Brooder server listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}
