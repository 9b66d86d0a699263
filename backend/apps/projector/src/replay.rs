//! Record Replay
//!
//! Feeds NDJSON lines of `{"key": ..., "value": ...}` through the projector of
//! the context owning the key's aggregate type. A missing or `null` value is a
//! tombstone.

use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use company::{CompanyProjector, InMemoryCompanyRepository};
use kernel::id::UserId;
use kernel::messages::AggregateEventMessageKey;
use kernel::projection::Projection;
use project::{InMemoryProjectionRepository, ProjectProjector};
use user::{InMemoryUserRepository, UserProjector};

use crate::config::ProjectorConfig;

#[derive(Debug, Deserialize)]
struct RecordLine {
    key: AggregateEventMessageKey,
    #[serde(default)]
    value: Option<serde_json::Value>,
}

/// Tally of one replay
#[derive(Debug, Default)]
pub struct Summary {
    pub outcomes: BTreeMap<&'static str, usize>,
    pub failed: usize,
    /// Records of aggregate types no context handles
    pub skipped: usize,
}

impl Summary {
    fn count(&mut self, projection: Projection) {
        *self.outcomes.entry(projection.as_str()).or_default() += 1;
    }

    pub fn outcome(&self, label: &str) -> usize {
        self.outcomes.get(label).copied().unwrap_or_default()
    }
}

/// The three context projectors over in-memory repositories
pub struct Replay {
    pub projects: Arc<InMemoryProjectionRepository>,
    pub companies: Arc<InMemoryCompanyRepository>,
    pub users: Arc<InMemoryUserRepository>,
    project: ProjectProjector<InMemoryProjectionRepository>,
    company: CompanyProjector<InMemoryCompanyRepository>,
    user: UserProjector<InMemoryUserRepository>,
    strict: bool,
}

impl Replay {
    pub fn new(config: &ProjectorConfig) -> Self {
        let projects = Arc::new(InMemoryProjectionRepository::new());
        let companies = Arc::new(InMemoryCompanyRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());

        let mut user = UserProjector::new(Arc::clone(&users));
        if let Some(system_user) = config.system_user {
            user = user.with_system_user(system_user);
        }

        Self {
            project: ProjectProjector::new(Arc::clone(&projects)),
            company: CompanyProjector::new(Arc::clone(&companies)),
            user,
            projects,
            companies,
            users,
            strict: config.strict,
        }
    }

    /// Replay every line of `input`. Blank lines are skipped.
    ///
    /// In strict mode the first failing line aborts the replay.
    pub async fn run<I>(&self, input: I) -> anyhow::Result<Summary>
    where
        I: AsyncBufRead + Unpin,
    {
        let mut summary = Summary::default();
        let mut lines = input.lines();
        let mut number = 0usize;

        while let Some(line) = lines.next_line().await? {
            number += 1;
            if line.trim().is_empty() {
                continue;
            }

            match self.apply_line(&line).await {
                Ok(Some(projection)) => summary.count(projection),
                Ok(None) => summary.skipped += 1,
                Err(e) if self.strict => return Err(e.context(format!("line {number}"))),
                Err(e) => {
                    tracing::warn!(line = number, error = %e, "Record not projected");
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Project one line; `None` when no context owns the aggregate type.
    pub async fn apply_line(&self, line: &str) -> anyhow::Result<Option<Projection>> {
        let RecordLine { key, value } =
            serde_json::from_str(line).context("malformed record line")?;

        let projection = if project::application::handles_message(&key) {
            self.project
                .handle(&key, value)
                .await
                .inspect_err(|e| e.log())?
        } else if company::handles_message(&key) {
            self.company
                .handle(&key, value)
                .await
                .inspect_err(|e| e.log())?
        } else if user::handles_message(&key) {
            let projection = self
                .user
                .handle(&key, value)
                .await
                .inspect_err(|e| e.log())?;
            if matches!(projection, Projection::Deleted { .. } | Projection::Missing) {
                self.on_user_deleted(key.aggregate_identifier.to_id()?).await?;
            }
            projection
        } else {
            tracing::debug!(aggregate_type = key.aggregate_type(), "No context for record");
            return Ok(None);
        };

        tracing::debug!(
            aggregate_type = key.aggregate_type(),
            identifier = %key.aggregate_identifier.identifier,
            outcome = %projection,
            "Record projected"
        );
        Ok(Some(projection))
    }

    async fn on_user_deleted(&self, user: UserId) -> anyhow::Result<()> {
        let employment = self
            .company
            .on_user_deleted(user)
            .await
            .inspect_err(|e| e.log())?;
        if employment.is_change() {
            tracing::info!(%user, "Employee of deleted user removed");
        }
        Ok(())
    }
}
