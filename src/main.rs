use std::process::ExitCode;

use finboard::config::Config;
use finboard::error::AppResult;
use finboard::models::StoreSnapshot;
use finboard::params::ViewParams;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let config = Config::from_env()?.with_args(std::env::args().skip(1));
    tracing::info!(
        "finboard {} reading {}",
        finboard::VERSION,
        config.data_path.display()
    );

    let snapshot = StoreSnapshot::load(&config.data_path)?;
    let mut state = ViewParams::from_query(&config.query)?.into_state()?;
    tracing::info!(
        "Loaded {} transactions, showing {} view",
        snapshot.transactions.len(),
        state.kind()
    );

    let view = state.derive(&snapshot);
    let json = if config.pretty {
        serde_json::to_string_pretty(&view)?
    } else {
        serde_json::to_string(&view)?
    };
    println!("{}", json);

    Ok(())
}
