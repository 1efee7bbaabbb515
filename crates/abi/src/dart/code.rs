// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use crate::error::{AbiError, Result};

/// Type tag of a `Dart_CObject` (maps to `Dart_CObject_Type`)
///
/// The tag is stored in a [`CObject`](super::CObject) as a raw `i32`, because the VM
/// or a newer SDK may write values this enum does not list. Use
/// [`CObjectType::from_raw`] to decode it.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CObjectType {
	Null = 0,
	Bool = 1,
	Int32 = 2,
	Int64 = 3,
	Double = 4,
	String = 5,
	Array = 6,
	TypedData = 7,
	ExternalTypedData = 8,
	SendPort = 9,
	Capability = 10,
	NativePointer = 11,
	Unsupported = 12,
	UnmodifiableExternalTypedData = 13,
}

impl CObjectType {
	/// Decode a raw `Dart_CObject_Type` value
	pub const fn from_raw(raw: i32) -> Result<Self> {
		Ok(match raw {
			0 => Self::Null,
			1 => Self::Bool,
			2 => Self::Int32,
			3 => Self::Int64,
			4 => Self::Double,
			5 => Self::String,
			6 => Self::Array,
			7 => Self::TypedData,
			8 => Self::ExternalTypedData,
			9 => Self::SendPort,
			10 => Self::Capability,
			11 => Self::NativePointer,
			12 => Self::Unsupported,
			13 => Self::UnmodifiableExternalTypedData,
			_ => return Err(AbiError::UnknownObjectType(raw)),
		})
	}

	/// The raw `Dart_CObject_Type` value
	pub const fn raw(self) -> i32 {
		self as i32
	}

	pub const fn is_integer(self) -> bool {
		matches!(self, Self::Int32 | Self::Int64)
	}
}

impl Display for CObjectType {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Null => "kNull",
			Self::Bool => "kBool",
			Self::Int32 => "kInt32",
			Self::Int64 => "kInt64",
			Self::Double => "kDouble",
			Self::String => "kString",
			Self::Array => "kArray",
			Self::TypedData => "kTypedData",
			Self::ExternalTypedData => "kExternalTypedData",
			Self::SendPort => "kSendPort",
			Self::Capability => "kCapability",
			Self::NativePointer => "kNativePointer",
			Self::Unsupported => "kUnsupported",
			Self::UnmodifiableExternalTypedData => "kUnmodifiableExternalTypedData",
		};
		f.write_str(name)
	}
}

/// Element type of a typed data payload (maps to `Dart_TypedData_Type`)
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypedDataType {
	ByteData = 0,
	Int8 = 1,
	Uint8 = 2,
	Uint8Clamped = 3,
	Int16 = 4,
	Uint16 = 5,
	Int32 = 6,
	Uint32 = 7,
	Int64 = 8,
	Uint64 = 9,
	Float32 = 10,
	Float64 = 11,
	Int32x4 = 12,
	Float32x4 = 13,
	Float64x2 = 14,
}

impl TypedDataType {
	/// Decode a raw `Dart_TypedData_Type` value
	pub const fn from_raw(raw: i32) -> Result<Self> {
		Ok(match raw {
			0 => Self::ByteData,
			1 => Self::Int8,
			2 => Self::Uint8,
			3 => Self::Uint8Clamped,
			4 => Self::Int16,
			5 => Self::Uint16,
			6 => Self::Int32,
			7 => Self::Uint32,
			8 => Self::Int64,
			9 => Self::Uint64,
			10 => Self::Float32,
			11 => Self::Float64,
			12 => Self::Int32x4,
			13 => Self::Float32x4,
			14 => Self::Float64x2,
			_ => return Err(AbiError::UnknownTypedDataType(raw)),
		})
	}

	/// The raw `Dart_TypedData_Type` value
	pub const fn raw(self) -> i32 {
		self as i32
	}

	/// Size in bytes of a single element
	pub const fn element_size(self) -> usize {
		match self {
			Self::ByteData | Self::Int8 | Self::Uint8 | Self::Uint8Clamped => 1,
			Self::Int16 | Self::Uint16 => 2,
			Self::Int32 | Self::Uint32 | Self::Float32 => 4,
			Self::Int64 | Self::Uint64 | Self::Float64 => 8,
			Self::Int32x4 | Self::Float32x4 | Self::Float64x2 => 16,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_object_type_round_trips_every_known_tag() {
		for raw in 0..=13 {
			let ty = CObjectType::from_raw(raw).unwrap();
			assert_eq!(ty.raw(), raw);
		}
	}

	#[test]
	fn test_object_type_rejects_unknown_tag() {
		assert_eq!(CObjectType::from_raw(14), Err(AbiError::UnknownObjectType(14)));
		assert_eq!(CObjectType::from_raw(-1), Err(AbiError::UnknownObjectType(-1)));
	}

	#[test]
	fn test_only_int32_and_int64_are_integers() {
		assert!(CObjectType::Int32.is_integer());
		assert!(CObjectType::Int64.is_integer());
		assert!(!CObjectType::Double.is_integer());
		assert!(!CObjectType::NativePointer.is_integer());
	}

	#[test]
	fn test_typed_data_type_rejects_invalid_code() {
		// 15 is kInvalid in the VM headers
		assert_eq!(TypedDataType::from_raw(15), Err(AbiError::UnknownTypedDataType(15)));
		assert_eq!(TypedDataType::from_raw(2), Ok(TypedDataType::Uint8));
	}

	#[test]
	fn test_element_size() {
		assert_eq!(TypedDataType::Uint8.element_size(), 1);
		assert_eq!(TypedDataType::Float64.element_size(), 8);
		assert_eq!(TypedDataType::Float64x2.element_size(), 16);
	}

	#[test]
	fn test_display_uses_vm_names() {
		assert_eq!(CObjectType::NativePointer.to_string(), "kNativePointer");
		assert_eq!(CObjectType::Array.to_string(), "kArray");
	}
}
