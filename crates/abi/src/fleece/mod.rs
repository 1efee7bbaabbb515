// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! FFI-safe Fleece byte views

mod slice;

pub use slice::*;
