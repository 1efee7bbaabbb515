// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::ffi::{c_char, c_void};
use std::fmt::{self, Debug, Formatter};

use super::CObjectType;
use crate::error::Result;

/// Dart port identifier (maps to `Dart_Port`)
pub type Port = i64;

/// Finalizer the VM invokes when it drops a native resource (maps to `Dart_HandleFinalizer`)
pub type HandleFinalizer = Option<unsafe extern "C" fn(isolate_callback_data: *mut c_void, peer: *mut c_void)>;

/// FFI-safe Dart object slot (maps to `Dart_CObject`)
///
/// A C `int` type tag followed by a union payload, laid out exactly like the VM's
/// struct so a `*mut CObject` can be handed to `Dart_PostCObject` directly.
///
/// The tag is kept raw and the payload is private. Slots are only written through
/// the constructors and setters in [`crate::marshal`], each of which replaces the
/// whole slot, so the tag always describes the payload that was written.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct CObject {
	pub(crate) tag: i32,
	pub(crate) value: CObjectValue,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub(crate) union CObjectValue {
	/// C `bool`, kept as a byte so a foreign write of any value is readable
	pub(crate) as_bool: u8,
	pub(crate) as_int32: i32,
	pub(crate) as_int64: i64,
	pub(crate) as_double: f64,
	pub(crate) as_string: *const c_char,
	pub(crate) as_send_port: SendPortFFI,
	pub(crate) as_capability: CapabilityFFI,
	pub(crate) as_array: ArrayFFI,
	pub(crate) as_typed_data: TypedDataFFI,
	pub(crate) as_external_typed_data: ExternalTypedDataFFI,
	pub(crate) as_native_pointer: NativePointerFFI,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct SendPortFFI {
	pub(crate) id: Port,
	pub(crate) origin_id: Port,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct CapabilityFFI {
	pub(crate) id: i64,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArrayFFI {
	/// Number of elements
	pub(crate) length: isize,
	/// Pointer to `length` element slots, null when empty
	pub(crate) values: *mut *mut CObject,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct TypedDataFFI {
	/// Raw `Dart_TypedData_Type`
	pub(crate) ty: i32,
	/// Number of elements (bytes for `Uint8`)
	pub(crate) length: isize,
	pub(crate) values: *const u8,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct ExternalTypedDataFFI {
	/// Raw `Dart_TypedData_Type`
	pub(crate) ty: i32,
	/// Number of elements
	pub(crate) length: isize,
	pub(crate) data: *mut u8,
	pub(crate) peer: *mut c_void,
	pub(crate) callback: HandleFinalizer,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct NativePointerFFI {
	/// Address as `intptr_t`
	pub(crate) ptr: isize,
	/// Size hint reported to the VM for external allocation accounting
	pub(crate) size: isize,
	pub(crate) callback: HandleFinalizer,
}

impl CObject {
	pub(crate) const fn from_parts(ty: CObjectType, value: CObjectValue) -> Self {
		Self {
			tag: ty.raw(),
			value,
		}
	}

	/// The raw `Dart_CObject_Type` tag as written
	pub const fn raw_type(&self) -> i32 {
		self.tag
	}

	/// Decode the type tag
	pub const fn object_type(&self) -> Result<CObjectType> {
		CObjectType::from_raw(self.tag)
	}

	/// Check if the slot holds the given variant
	pub const fn is(&self, ty: CObjectType) -> bool {
		self.tag == ty.raw()
	}

	/// Get the finalizer a native pointer or external typed data slot carries
	pub fn finalizer(&self) -> Option<HandleFinalizer> {
		match self.object_type() {
			// SAFETY: the tag selects the union field
			Ok(CObjectType::NativePointer) => Some(unsafe { self.value.as_native_pointer.callback }),
			Ok(CObjectType::ExternalTypedData | CObjectType::UnmodifiableExternalTypedData) => {
				Some(unsafe { self.value.as_external_typed_data.callback })
			}
			_ => None,
		}
	}
}

impl Default for CObject {
	fn default() -> Self {
		Self::null()
	}
}

impl Debug for CObject {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self.view() {
			Ok(view) => f.debug_tuple("CObject").field(&view).finish(),
			Err(err) => f.debug_struct("CObject").field("tag", &self.tag).field("error", &err).finish(),
		}
	}
}

/// Finalizer attached to slots whose pointee the VM must never free
pub(crate) unsafe extern "C" fn noop_finalizer(_isolate_callback_data: *mut c_void, _peer: *mut c_void) {}
