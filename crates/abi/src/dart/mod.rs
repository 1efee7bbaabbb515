// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! FFI-safe Dart VM object types

mod code;
mod object;
mod view;

pub use code::*;
pub use object::{CObject, HandleFinalizer, Port};
pub(crate) use object::{ArrayFFI, CObjectValue, NativePointerFFI, TypedDataFFI, noop_finalizer};
pub use view::*;
