//! Projector Configuration

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use kernel::id::UserId;

#[derive(Debug, Clone)]
pub struct ProjectorConfig {
    /// NDJSON file of `{"key": ..., "value": ...}` lines
    pub input: PathBuf,
    /// Abort on the first line that cannot be projected
    pub strict: bool,
    /// User that deletions must never anonymize
    pub system_user: Option<UserId>,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("events.ndjson"),
            strict: false,
            system_user: None,
        }
    }
}

impl ProjectorConfig {
    /// Fail fast while developing
    pub fn development() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Read `PROJECTOR_INPUT`, `PROJECTOR_STRICT` and `PROJECTOR_SYSTEM_USER`
    /// on top of `base`. A command line argument overrides the input file.
    pub fn from_env(base: Self) -> anyhow::Result<Self> {
        let mut config = base;

        if let Some(input) = env::args_os().nth(1).or_else(|| env::var_os("PROJECTOR_INPUT")) {
            config.input = PathBuf::from(input);
        }

        if let Ok(strict) = env::var("PROJECTOR_STRICT") {
            config.strict = parse_flag(&strict)
                .with_context(|| format!("PROJECTOR_STRICT must be a boolean, got '{strict}'"))?;
        }

        if let Ok(system_user) = env::var("PROJECTOR_SYSTEM_USER") {
            config.system_user = Some(
                system_user
                    .parse()
                    .context("PROJECTOR_SYSTEM_USER must be a user identifier")?,
            );
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
