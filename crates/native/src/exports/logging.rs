// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![allow(non_snake_case)]

use std::sync::OnceLock;

use cbl_dart_abi::EDITION;
use tracing::{info, warn};

use crate::logging::LogConfig;

static LOGGING: OnceLock<bool> = OnceLock::new();

/// Installs the library's tracing subscriber, configured from the environment
///
/// Only the first call does any work; later calls return its result. Returns
/// `false` when the filter is invalid or another subscriber is already installed.
#[unsafe(no_mangle)]
pub extern "C" fn CBLDart_InitLogging() -> bool {
	*LOGGING.get_or_init(|| match LogConfig::from_env().init() {
		Ok(()) => {
			info!(edition = %EDITION, "cbl-dart native library loaded");
			true
		}
		Err(err) => {
			warn!(%err, "cbl-dart native logging not installed");
			false
		}
	})
}
