// ABOUTME: Logging configuration and structured logging setup
// ABOUTME: Configures log levels, formatters, and output destinations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 YouMatter Wellness

//! Structured logging setup for embedders of the core
//!
//! The engines emit `tracing` events; this module offers a subscriber
//! initialization helper so binaries embedding the crate get consistent
//! output. Libraries composing their own subscriber stack can ignore it.

use std::env;

use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::errors::{AppError, AppResult};

/// Output format for log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable output for development
    #[default]
    Pretty,
    /// Compact single-line output
    Compact,
    /// JSON output for log aggregation
    Json,
}

impl LogFormat {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax), e.g. `info` or `youmatter_core=debug`
    pub filter: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Build configuration from `RUST_LOG` and `YOUMATTER_LOG_FORMAT`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            filter: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned()),
            format: LogFormat::from_str_or_default(
                &env::var("YOUMATTER_LOG_FORMAT").unwrap_or_default(),
            ),
        }
    }

    /// Install a global subscriber with this configuration
    ///
    /// Fails if a global subscriber is already set.
    pub fn init(&self) -> AppResult<()> {
        let filter = EnvFilter::try_new(&self.filter)
            .map_err(|e| AppError::config(format!("invalid log filter: {e}")))?;

        let registry = tracing_subscriber::registry().with(filter);
        let result = match self.format {
            LogFormat::Pretty => registry.with(fmt::layer()).try_init(),
            LogFormat::Compact => {
                let layer = fmt::layer().compact().with_target(false);
                registry.with(layer).try_init()
            }
            LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        };
        result.map_err(|e| AppError::config(format!("failed to install subscriber: {e}")))?;

        info!(filter = %self.filter, "logging initialized");
        Ok(())
    }
}

/// Initialize logging from the environment
pub fn init_from_env() -> AppResult<()> {
    LoggingConfig::from_env().init()
}
