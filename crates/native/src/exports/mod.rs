// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! `extern "C"` entry points

mod edition;
mod logging;
mod object;

pub use edition::*;
pub use logging::*;
pub use object::*;
