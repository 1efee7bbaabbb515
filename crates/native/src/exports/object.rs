// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! `Dart_CObject` helpers exported to the Dart package
//!
//! Output slots may point at uninitialised memory, so setters write the whole
//! `CObject` with `ptr::write` and never read it first.

#![allow(non_snake_case)]

use core::ffi::c_void;

use cbl_dart_abi::{CObject, FLString};
use tracing::trace;

/// Returns the value of `object`, which must be a `kInt32` or `kInt64`, as an `int64_t`
///
/// # Safety
/// - `object` must be non-null and point to an initialised `Dart_CObject`
/// - A non-integer `object` aborts the process
#[unsafe(no_mangle)]
pub unsafe extern "C" fn CBLDart_CObject_getIntValueAsInt64(object: *mut CObject) -> i64 {
	debug_assert!(!object.is_null(), "CBLDart_CObject_getIntValueAsInt64 called with null object");
	// SAFETY: Caller guarantees object is valid
	unsafe { (*object).int_value_as_i64() }
}

/// Turns `object` into an empty `kArray`
///
/// # Safety
/// `object` must be non-null, writable and not read concurrently.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn CBLDart_CObject_SetEmptyArray(object: *mut CObject) {
	debug_assert!(!object.is_null(), "CBLDart_CObject_SetEmptyArray called with null object");
	trace!("CObject <- empty array");
	// SAFETY: Caller guarantees object is writable
	unsafe { object.write(CObject::empty_array()) }
}

/// Turns `object` into a `kNativePointer` holding `pointer`, or `kNull` when `pointer` is null
///
/// Ownership of the pointee is not transferred.
///
/// # Safety
/// `object` must be non-null, writable and not read concurrently.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn CBLDart_CObject_SetPointer(object: *mut CObject, pointer: *const c_void) {
	debug_assert!(!object.is_null(), "CBLDart_CObject_SetPointer called with null object");
	trace!(?pointer, "CObject <- pointer");
	// SAFETY: Caller guarantees object is writable
	unsafe { object.write(CObject::pointer(pointer)) }
}

/// Turns `object` into a `Uint8` `kTypedData` viewing `string`, or `kNull` when `string` is null
///
/// The bytes are not copied.
///
/// # Safety
/// - `object` must be non-null, writable and not read concurrently
/// - `string.buf` must stay valid until the VM has consumed `object`
/// - `string.buf` may only be null when `string.size` is zero
#[unsafe(no_mangle)]
pub unsafe extern "C" fn CBLDart_CObject_SetFLString(object: *mut CObject, string: FLString) {
	debug_assert!(!object.is_null(), "CBLDart_CObject_SetFLString called with null object");
	trace!(size = string.size, "CObject <- FLString");
	// SAFETY: Caller guarantees object is writable
	unsafe { object.write(CObject::fl_string(string)) }
}
