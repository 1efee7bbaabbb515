// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::ffi::{c_char, c_void};

use super::{CObject, CObjectType, Port, TypedDataType};
use crate::error::{AbiError, Result};

/// Decoded, read-only view of a [`CObject`]
///
/// Produced by [`CObject::view`] after checking the tag. Pointers are copied out
/// as they are. Nothing is dereferenced, so building a view is always safe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CObjectView {
	Null,
	Bool(bool),
	Int32(i32),
	Int64(i64),
	Double(f64),
	/// NUL-terminated UTF-8 owned by the writer
	String(*const c_char),
	Array {
		length: usize,
		values: *mut *mut CObject,
	},
	TypedData {
		ty: TypedDataType,
		length: usize,
		values: *const u8,
	},
	ExternalTypedData {
		ty: TypedDataType,
		length: usize,
		data: *mut u8,
		peer: *mut c_void,
		unmodifiable: bool,
	},
	SendPort {
		id: Port,
		origin_id: Port,
	},
	Capability(i64),
	NativePointer {
		ptr: *const c_void,
		size: usize,
	},
	Unsupported,
}

impl CObjectView {
	pub fn object_type(&self) -> CObjectType {
		match self {
			Self::Null => CObjectType::Null,
			Self::Bool(_) => CObjectType::Bool,
			Self::Int32(_) => CObjectType::Int32,
			Self::Int64(_) => CObjectType::Int64,
			Self::Double(_) => CObjectType::Double,
			Self::String(_) => CObjectType::String,
			Self::Array {
				..
			} => CObjectType::Array,
			Self::TypedData {
				..
			} => CObjectType::TypedData,
			Self::ExternalTypedData {
				unmodifiable: false,
				..
			} => CObjectType::ExternalTypedData,
			Self::ExternalTypedData {
				unmodifiable: true,
				..
			} => CObjectType::UnmodifiableExternalTypedData,
			Self::SendPort {
				..
			} => CObjectType::SendPort,
			Self::Capability(_) => CObjectType::Capability,
			Self::NativePointer {
				..
			} => CObjectType::NativePointer,
			Self::Unsupported => CObjectType::Unsupported,
		}
	}
}

fn checked_length(kind: CObjectType, length: isize) -> Result<usize> {
	usize::try_from(length).map_err(|_| AbiError::NegativeLength {
		kind,
		length,
	})
}

impl CObject {
	/// Decode the slot according to its type tag
	pub fn view(&self) -> Result<CObjectView> {
		let kind = self.object_type()?;

		// SAFETY: every arm reads the union field selected by the tag
		let view = unsafe {
			match kind {
				CObjectType::Null => CObjectView::Null,
				CObjectType::Bool => CObjectView::Bool(self.value.as_bool != 0),
				CObjectType::Int32 => CObjectView::Int32(self.value.as_int32),
				CObjectType::Int64 => CObjectView::Int64(self.value.as_int64),
				CObjectType::Double => CObjectView::Double(self.value.as_double),
				CObjectType::String => CObjectView::String(self.value.as_string),
				CObjectType::Array => {
					let array = self.value.as_array;
					CObjectView::Array {
						length: checked_length(kind, array.length)?,
						values: array.values,
					}
				}
				CObjectType::TypedData => {
					let typed = self.value.as_typed_data;
					CObjectView::TypedData {
						ty: TypedDataType::from_raw(typed.ty)?,
						length: checked_length(kind, typed.length)?,
						values: typed.values,
					}
				}
				CObjectType::ExternalTypedData | CObjectType::UnmodifiableExternalTypedData => {
					let external = self.value.as_external_typed_data;
					CObjectView::ExternalTypedData {
						ty: TypedDataType::from_raw(external.ty)?,
						length: checked_length(kind, external.length)?,
						data: external.data,
						peer: external.peer,
						unmodifiable: kind == CObjectType::UnmodifiableExternalTypedData,
					}
				}
				CObjectType::SendPort => {
					let port = self.value.as_send_port;
					CObjectView::SendPort {
						id: port.id,
						origin_id: port.origin_id,
					}
				}
				CObjectType::Capability => CObjectView::Capability(self.value.as_capability.id),
				CObjectType::NativePointer => {
					let native = self.value.as_native_pointer;
					CObjectView::NativePointer {
						ptr: std::ptr::with_exposed_provenance(native.ptr as usize),
						size: checked_length(kind, native.size)?,
					}
				}
				CObjectType::Unsupported => CObjectView::Unsupported,
			}
		};

		Ok(view)
	}
}
