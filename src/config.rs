//! Runtime Configuration
//!
//! Settings are read from command-line flags first, falling back to environment
//! variables and then to built-in defaults.
//!
//! | Flag        | Environment                | Default          |
//! |-------------|----------------------------|------------------|
//! | `--bind`    | `SUGGEST_BIND`             | `127.0.0.1:8080` |
//! | `--catalog` | `SUGGEST_CATALOG`          | none             |
//! |             | `SUGGEST_TOP_K`            | `8`              |
//! |             | `SUGGEST_CANDIDATE_LIMIT`  | `50`             |
//! |             | `SUGGEST_MIN_QUERY_LEN`    | `2`              |
//! |             | `SUGGEST_PREFIX_BONUS`     | `200`            |
//! |             | `SUGGEST_CONTAINS_BONUS`   | `150`            |
//! |             | `SUGGEST_AUTHOR_BONUS`     | `60`             |

use crate::suggest::types::ScoringWeights;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Limits applied around a single suggestion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestLimits {
    /// Maximum number of suggestions returned.
    pub top_k: usize,
    /// Maximum number of coarse matches handed to the ranker.
    pub candidate_limit: usize,
    /// Trimmed queries shorter than this (in characters) yield no suggestions.
    pub min_query_len: usize,
}

impl Default for SuggestLimits {
    fn default() -> Self {
        Self {
            top_k: 8,
            candidate_limit: 50,
            min_query_len: 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub catalog_path: Option<PathBuf>,
    pub limits: SuggestLimits,
    pub weights: ScoringWeights,
}

impl ServerConfig {
    /// Reads the process arguments and environment.
    pub fn from_env() -> Result<Self> {
        Self::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Builds a config from explicit arguments (without the program name) and an
    /// environment lookup.
    pub fn parse<I, F>(args: I, env: F) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let args: Vec<String> = args.into_iter().collect();

        let mut bind_arg: Option<String> = None;
        let mut catalog_arg: Option<String> = None;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    bind_arg = Some(args.get(i + 1).context("--bind requires a value")?.clone());
                    i += 2;
                }
                "--catalog" => {
                    catalog_arg = Some(
                        args.get(i + 1)
                            .context("--catalog requires a value")?
                            .clone(),
                    );
                    i += 2;
                }
                other => {
                    tracing::warn!("Ignoring unknown argument: {}", other);
                    i += 1;
                }
            }
        }

        let bind = bind_arg
            .or_else(|| env("SUGGEST_BIND"))
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr: SocketAddr = bind
            .parse()
            .with_context(|| format!("invalid bind address: {}", bind))?;

        let catalog_path = catalog_arg
            .or_else(|| env("SUGGEST_CATALOG"))
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let defaults = SuggestLimits::default();
        let limits = SuggestLimits {
            top_k: env_or(&env, "SUGGEST_TOP_K", defaults.top_k)?,
            candidate_limit: env_or(&env, "SUGGEST_CANDIDATE_LIMIT", defaults.candidate_limit)?,
            min_query_len: env_or(&env, "SUGGEST_MIN_QUERY_LEN", defaults.min_query_len)?,
        };
        if limits.top_k == 0 {
            anyhow::bail!("SUGGEST_TOP_K must be greater than zero");
        }

        let weights = ScoringWeights::default();
        let weights = ScoringWeights {
            prefix_bonus: env_or(&env, "SUGGEST_PREFIX_BONUS", weights.prefix_bonus)?,
            contains_bonus: env_or(&env, "SUGGEST_CONTAINS_BONUS", weights.contains_bonus)?,
            author_bonus: env_or(&env, "SUGGEST_AUTHOR_BONUS", weights.author_bonus)?,
        };

        Ok(Self {
            bind_addr,
            catalog_path,
            limits,
            weights,
        })
    }
}

fn env_or<T, F>(env: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match env(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {}: {:?}", key, raw)),
        None => Ok(default),
    }
}
