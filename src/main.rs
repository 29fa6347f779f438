use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ctb2strava_rs::config::{Config, ExportState};
use ctb2strava_rs::error::AppError;
use ctb2strava_rs::pipeline::export::Exporter;
use ctb2strava_rs::services::elevation::OpenTopoData;
use ctb2strava_rs::services::files::GpxDirectory;
use ctb2strava_rs::services::strava::StravaClient;
use ctb2strava_rs::services::timezone::Timezones;
use ctb2strava_rs::services::SessionSource;
use ctb2strava_rs::types::backup::Backup;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Create activities on Strava from Climbing Tracker backups
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// State file holding Strava credentials and the last export checkpoint
    state_file: PathBuf,

    /// Climbing Tracker backup file
    backup_file: PathBuf,

    /// Write GPX files into this directory instead of uploading
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ctb2strava_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Export failed: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::from_env();
    let mut state = ExportState::load(&cli.state_file)?;
    let backup = Backup::load(&cli.backup_file)?;

    let sessions = SessionSource::sessions_after(&backup, state.last_export.as_deref())?;
    if sessions.is_empty() {
        tracing::info!("No session found");
        return Ok(());
    }
    tracing::info!(
        "Found {} new sessions in {}",
        sessions.len(),
        cli.backup_file.display()
    );

    let elevation = OpenTopoData::new(&config);
    let timezones = Timezones::from_config(&config)?;

    let checkpoint = match &cli.output_dir {
        Some(dir) => {
            let sink = GpxDirectory::new(dir);
            Exporter::new(&elevation, &timezones, &sink)
                .run(&sessions)
                .await?
        }
        None => {
            let strava = StravaClient::authorize(&config, &state.credentials()?).await?;
            let checkpoint = Exporter::new(&elevation, &timezones, &strava)
                .run(&sessions)
                .await?;
            state.refresh_token = Some(strava.refresh_token().to_string());
            checkpoint
        }
    };

    if let Some(checkpoint) = checkpoint {
        tracing::info!("Advancing checkpoint to {}", checkpoint);
        state.last_export = Some(checkpoint);
    }
    state.save(&cli.state_file)?;

    Ok(())
}
