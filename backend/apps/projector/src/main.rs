//! Projector Entry Point
//!
//! Replays an NDJSON dump of event records into the in-memory projections of
//! the project, company and user contexts and logs what happened.
//! Uses `anyhow` for startup errors; record errors stay in the context error
//! types and are logged where they occur.

mod codes;
mod config;
mod replay;

use anyhow::Context;
use tokio::fs::File;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::ProjectorConfig;
use replay::Replay;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "projector=info,project=info,company=info,user=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base = if cfg!(debug_assertions) {
        ProjectorConfig::development()
    } else {
        ProjectorConfig::default()
    };
    let config = ProjectorConfig::from_env(base)?;

    // Unusable code tables must stop us before the first record
    codes::verify_stored_codes()?;

    tracing::info!(
        input = %config.input.display(),
        strict = config.strict,
        system_user = ?config.system_user,
        "Starting replay"
    );

    let file = File::open(&config.input)
        .await
        .with_context(|| format!("cannot open {}", config.input.display()))?;

    let replay = Replay::new(&config);
    let summary = replay.run(BufReader::new(file)).await?;

    let (projects, project_children) = replay.projects.counts().await;
    let (companies, employees) = replay.companies.counts().await;
    let (users, deleted_users) = replay.users.counts().await;

    tracing::info!(
        created = summary.outcome("created"),
        updated = summary.outcome("updated"),
        ignored = summary.outcome("ignored"),
        deleted = summary.outcome("deleted"),
        missing = summary.outcome("missing"),
        failed = summary.failed,
        skipped = summary.skipped,
        "Replay finished"
    );
    tracing::info!(
        projects,
        project_children,
        companies,
        employees,
        users,
        deleted_users,
        "Projections"
    );

    if summary.failed > 0 {
        tracing::warn!(failed = summary.failed, "Some records were not projected");
    }

    Ok(())
}
