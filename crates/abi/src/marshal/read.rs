// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::ffi::c_void;

use tracing::error;

use crate::{
	dart::{CObject, CObjectType, CObjectView, TypedDataType},
	fleece::FLString,
};

impl CObject {
	/// Get the value of an `kInt32` or `kInt64` slot widened to `i64`
	///
	/// `kInt32` values are sign-extended.
	///
	/// # Panics
	/// Panics if the slot holds any other variant. Callers are expected to have
	/// checked the tag already; reaching this through an `extern "C"` export
	/// aborts the process.
	pub fn int_value_as_i64(&self) -> i64 {
		match self.try_int_value_as_i64() {
			Some(value) => value,
			None => {
				error!(tag = self.tag, "Dart_CObject is neither kInt32 nor kInt64");
				panic!("expected a kInt32 or kInt64 Dart_CObject, found tag {}", self.tag);
			}
		}
	}

	/// Like [`CObject::int_value_as_i64`], returning `None` for non-integer slots
	pub fn try_int_value_as_i64(&self) -> Option<i64> {
		match self.object_type() {
			// SAFETY: the tag selects the union field
			Ok(CObjectType::Int32) => Some(i64::from(unsafe { self.value.as_int32 })),
			Ok(CObjectType::Int64) => Some(unsafe { self.value.as_int64 }),
			_ => None,
		}
	}

	/// Get the address stored in a `kNativePointer` slot
	pub fn pointer_value(&self) -> Option<*const c_void> {
		match self.view() {
			Ok(CObjectView::NativePointer {
				ptr,
				..
			}) => Some(ptr),
			_ => None,
		}
	}

	/// Get the byte range referenced by a `Uint8` typed data slot
	///
	/// Returns the same pointer and length that were written, for both internal
	/// and external typed data.
	pub fn fl_string_value(&self) -> Option<FLString> {
		match self.view() {
			Ok(CObjectView::TypedData {
				ty: TypedDataType::Uint8,
				length,
				values,
			}) => Some(FLString {
				buf: values.cast(),
				size: length,
			}),
			Ok(CObjectView::ExternalTypedData {
				ty: TypedDataType::Uint8,
				length,
				data,
				..
			}) => Some(FLString {
				buf: data.cast_const().cast(),
				size: length,
			}),
			_ => None,
		}
	}

	/// Get the element slots of a `kArray` slot
	///
	/// Returns an empty slice for any other variant and for the empty array.
	///
	/// # Safety
	/// The element pointer written into the slot must still be valid for
	/// `length` entries for `'a`.
	pub unsafe fn array_elements<'a>(&self) -> &'a [*mut CObject] {
		match self.view() {
			Ok(CObjectView::Array {
				length,
				values,
			}) if length > 0 && !values.is_null() => {
				// SAFETY: Caller must ensure the element array is still alive
				unsafe { core::slice::from_raw_parts(values.cast_const(), length) }
			}
			_ => &[],
		}
	}
}
