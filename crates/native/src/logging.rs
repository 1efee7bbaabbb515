// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Logging setup for the native library
//!
//! The library is loaded into a Dart process that has no Rust subscriber of its
//! own, so it installs one on request. Configuration comes from the environment:
//!
//! - `CBLDART_LOG`: an `EnvFilter` directive, `warn` by default
//! - `CBLDART_LOG_FORMAT`: `pretty` (default) or `json`

use std::{env, str::FromStr};

use tracing_subscriber::{EnvFilter, filter::ParseError};

pub const LOG_FILTER_ENV: &str = "CBLDART_LOG";
pub const LOG_FORMAT_ENV: &str = "CBLDART_LOG_FORMAT";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, thiserror::Error)]
pub enum LogError {
	#[error("invalid log filter `{filter}`: {source}")]
	InvalidFilter {
		filter: String,
		#[source]
		source: ParseError,
	},

	#[error("unknown log format `{0}`, expected `pretty` or `json`")]
	UnknownFormat(String),

	#[error("a global tracing subscriber is already installed")]
	AlreadyInitialized,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
	#[default]
	Pretty,
	Json,
}

impl FromStr for LogFormat {
	type Err = LogError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"pretty" | "" => Ok(Self::Pretty),
			"json" => Ok(Self::Json),
			_ => Err(LogError::UnknownFormat(s.to_string())),
		}
	}
}

/// Configuration of the global tracing subscriber
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
	filter: String,
	format: LogFormat,
}

impl Default for LogConfig {
	fn default() -> Self {
		Self {
			filter: DEFAULT_LOG_FILTER.to_string(),
			format: LogFormat::default(),
		}
	}
}

impl LogConfig {
	pub fn new() -> Self {
		Self::default()
	}

	/// Read `CBLDART_LOG` and `CBLDART_LOG_FORMAT`, falling back to defaults
	///
	/// An unknown format falls back to `pretty` instead of failing, since the
	/// caller has no way to report the problem before logging is up.
	pub fn from_env() -> Self {
		Self::from_lookup(|key| env::var(key).ok())
	}

	pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		let mut config = Self::default();
		if let Some(filter) = lookup(LOG_FILTER_ENV) {
			config = config.with_filter(filter);
		}
		if let Some(format) = lookup(LOG_FORMAT_ENV) {
			config = config.with_format(format.parse().unwrap_or_default());
		}
		config
	}

	pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
		self.filter = filter.into();
		self
	}

	pub fn with_format(mut self, format: LogFormat) -> Self {
		self.format = format;
		self
	}

	pub fn filter(&self) -> &str {
		&self.filter
	}

	pub fn format(&self) -> LogFormat {
		self.format
	}

	/// Build the `EnvFilter` this config describes
	pub fn env_filter(&self) -> Result<EnvFilter, LogError> {
		EnvFilter::try_new(&self.filter).map_err(|source| LogError::InvalidFilter {
			filter: self.filter.clone(),
			source,
		})
	}

	/// Install the global subscriber
	pub fn init(self) -> Result<(), LogError> {
		let filter = self.env_filter()?;

		match self.format {
			LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
			LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).try_init(),
		}
		.map_err(|_| LogError::AlreadyInitialized)
	}
}
