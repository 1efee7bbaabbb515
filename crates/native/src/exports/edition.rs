// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![allow(non_snake_case)]

use cbl_dart_abi::{EDITION, EditionFFI};

/// Returns the Couchbase Lite edition the library was built against
///
/// The returned strings point at static data and must not be freed.
#[unsafe(no_mangle)]
pub extern "C" fn CBLDart_Edition() -> EditionFFI {
	EDITION.to_ffi()
}
