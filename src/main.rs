use std::sync::Arc;

use clap::Parser;
use mathviz::dataset::DatasetStore;
use mathviz::AppState;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the dataset file: a JSON mapping of id to record, or the
    /// legacy `test_data = {...}` script form.
    #[arg(short, long, env, default_value = "data/questions.json")]
    dataset: std::path::PathBuf,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,axum=debug,mathviz=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let state = AppState {
        dataset: Arc::new(DatasetStore::new(args.dataset)),
    };
    let router = mathviz::router(state);

    let address = args.address.parse::<std::net::SocketAddr>()?;
    tracing::info!("listening on {address}");
    let listener = tokio::net::TcpListener::bind(address).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
