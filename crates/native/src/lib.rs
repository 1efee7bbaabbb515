// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Native side of the Couchbase Lite Dart bindings
//!
//! Exposes the `CBLDart_*` C symbols the Dart package binds to with `dart:ffi`.
//! The marshaling itself lives in [`cbl_dart_abi`]; this crate only adapts it to
//! raw pointers and sets up logging.

// #![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod exports;
pub mod logging;

pub use exports::*;
pub use logging::{LogConfig, LogError, LogFormat};
