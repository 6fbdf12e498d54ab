//! Runtime configuration, read from the command line and environment.

use anyhow::{Context, bail};

pub const DAYS_VAR: &str = "GILDED_ROSE_DAYS";
pub const OUTPUT_VAR: &str = "GILDED_ROSE_OUTPUT";

pub const DEFAULT_DAYS: u32 = 2;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("unknown output format '{other}' (expected 'text' or 'json')"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of days to print, starting with day 0.
    pub days: u32,
    pub output: OutputFormat,
}

impl SimulationConfig {
    /// Positional `DAYS` argument first, then `GILDED_ROSE_DAYS`, then the
    /// default.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_sources(
            std::env::args().nth(1),
            std::env::var(DAYS_VAR).ok(),
            std::env::var(OUTPUT_VAR).ok(),
        )
    }

    pub fn from_sources(
        arg_days: Option<String>,
        env_days: Option<String>,
        env_output: Option<String>,
    ) -> anyhow::Result<Self> {
        let days = match (arg_days, env_days) {
            (Some(arg), _) => parse_days(&arg).context("invalid DAYS argument")?,
            (None, Some(env)) => parse_days(&env).with_context(|| format!("invalid {DAYS_VAR}"))?,
            (None, None) => {
                tracing::info!("no day count given; simulating {DEFAULT_DAYS} days");
                DEFAULT_DAYS
            }
        };

        let output = match env_output {
            Some(value) => value
                .parse::<OutputFormat>()
                .with_context(|| format!("invalid {OUTPUT_VAR}"))?,
            None => OutputFormat::default(),
        };

        Ok(Self { days, output })
    }
}

fn parse_days(value: &str) -> anyhow::Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .with_context(|| format!("'{value}' is not a non-negative day count"))
}
