// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! C ABI definitions for the Couchbase Lite Dart bindings
//!
//! This crate provides the FFI-safe types exchanged between the Dart VM and the
//! Couchbase Lite C library: the Dart VM's `Dart_CObject` tagged union, Fleece's
//! `FLSlice`/`FLString` byte views, and the vendored Couchbase Lite edition metadata.
//! It also implements the marshaling between them. Every writer replaces a whole
//! `CObject` so the type tag and its payload always agree.

// #![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod dart;
pub mod edition;
pub mod error;
pub mod fleece;
pub mod marshal;

pub use dart::{CObject, CObjectType, CObjectView, HandleFinalizer, Port, TypedDataType};
pub use edition::{EDITION, Edition, EditionFFI};
pub use error::{AbiError, Result};
pub use fleece::{FLSlice, FLString};
