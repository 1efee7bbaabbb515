// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::ffi::c_void;

use crate::{
	dart::{ArrayFFI, CObject, CObjectType, CObjectValue, NativePointerFFI, TypedDataFFI, TypedDataType, noop_finalizer},
	fleece::FLString,
};

// ============================================================================
// Constructors
// ============================================================================

impl CObject {
	/// A `kNull` slot
	pub const fn null() -> Self {
		Self::from_parts(
			CObjectType::Null,
			CObjectValue {
				as_int64: 0,
			},
		)
	}

	/// A `kBool` slot
	pub const fn bool(value: bool) -> Self {
		Self::from_parts(
			CObjectType::Bool,
			CObjectValue {
				as_bool: value as u8,
			},
		)
	}

	/// A `kInt32` slot
	pub const fn int32(value: i32) -> Self {
		Self::from_parts(
			CObjectType::Int32,
			CObjectValue {
				as_int32: value,
			},
		)
	}

	/// A `kInt64` slot
	pub const fn int64(value: i64) -> Self {
		Self::from_parts(
			CObjectType::Int64,
			CObjectValue {
				as_int64: value,
			},
		)
	}

	/// A `kDouble` slot
	pub const fn double(value: f64) -> Self {
		Self::from_parts(
			CObjectType::Double,
			CObjectValue {
				as_double: value,
			},
		)
	}

	/// A `kArray` slot with no elements
	///
	/// The element pointer is null, so the VM has nothing to traverse.
	pub const fn empty_array() -> Self {
		Self::from_parts(
			CObjectType::Array,
			CObjectValue {
				as_array: ArrayFFI {
					length: 0,
					values: core::ptr::null_mut(),
				},
			},
		)
	}

	/// A `kArray` slot over caller-owned element slots
	///
	/// The slot stores `values.as_mut_ptr()`. The slice and every element it
	/// points to must outlive the VM's consumption of this slot. An empty slice
	/// produces [`CObject::empty_array`].
	pub fn array(values: &mut [*mut CObject]) -> Self {
		if values.is_empty() {
			return Self::empty_array();
		}

		Self::from_parts(
			CObjectType::Array,
			CObjectValue {
				as_array: ArrayFFI {
					length: values.len() as isize,
					values: values.as_mut_ptr(),
				},
			},
		)
	}

	/// A `kNativePointer` slot carrying `pointer`'s address
	///
	/// Only the address is encoded. The attached finalizer does nothing, so the VM
	/// never frees the pointee and ownership stays where it was. A null pointer
	/// produces a `kNull` slot.
	pub fn pointer(pointer: *const c_void) -> Self {
		if pointer.is_null() {
			return Self::null();
		}

		Self::from_parts(
			CObjectType::NativePointer,
			CObjectValue {
				as_native_pointer: NativePointerFFI {
					ptr: pointer.expose_provenance() as isize,
					size: 0,
					callback: Some(noop_finalizer),
				},
			},
		)
	}

	/// A `kTypedData` slot of `Uint8` elements viewing `string`'s bytes
	///
	/// The bytes are not copied: the slot references exactly `string.buf` and
	/// `string.size`. A null string produces a `kNull` slot. A null `buf` with a
	/// non-zero `size` is a caller bug.
	pub fn fl_string(string: FLString) -> Self {
		if string.buf.is_null() {
			debug_assert!(string.size == 0, "null FLString with non-zero size {}", string.size);
			return Self::null();
		}

		Self::from_parts(
			CObjectType::TypedData,
			CObjectValue {
				as_typed_data: TypedDataFFI {
					ty: TypedDataType::Uint8.raw(),
					length: string.size as isize,
					values: string.buf.cast(),
				},
			},
		)
	}
}

// ============================================================================
// In-place setters
// ============================================================================

impl CObject {
	pub fn set_null(&mut self) {
		*self = Self::null();
	}

	pub fn set_bool(&mut self, value: bool) {
		*self = Self::bool(value);
	}

	pub fn set_int32(&mut self, value: i32) {
		*self = Self::int32(value);
	}

	pub fn set_int64(&mut self, value: i64) {
		*self = Self::int64(value);
	}

	pub fn set_double(&mut self, value: f64) {
		*self = Self::double(value);
	}

	/// Overwrite the slot with a zero-length array
	pub fn set_empty_array(&mut self) {
		*self = Self::empty_array();
	}

	/// Overwrite the slot with an array, see [`CObject::array`]
	pub fn set_array(&mut self, values: &mut [*mut CObject]) {
		*self = Self::array(values);
	}

	/// Overwrite the slot with a native pointer, see [`CObject::pointer`]
	pub fn set_pointer(&mut self, pointer: *const c_void) {
		*self = Self::pointer(pointer);
	}

	/// Overwrite the slot with a string view, see [`CObject::fl_string`]
	pub fn set_fl_string(&mut self, string: FLString) {
		*self = Self::fl_string(string);
	}
}
