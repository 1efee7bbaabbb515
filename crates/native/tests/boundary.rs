// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::ffi::c_void;
use std::mem::MaybeUninit;

use cbl_dart_abi::{CObject, CObjectType, CObjectView, FLString, TypedDataType, edition};
use cbl_dart_native::{
	CBLDart_CObject_SetEmptyArray, CBLDart_CObject_SetFLString, CBLDart_CObject_SetPointer,
	CBLDart_CObject_getIntValueAsInt64, CBLDart_Edition, CBLDart_InitLogging,
};

/// A slot the way the Dart side hands it over: allocated, never written
fn uninit_slot() -> MaybeUninit<CObject> {
	MaybeUninit::uninit()
}

#[test]
fn test_get_int_value_widens_int32() {
	for value in [i32::MIN, -2, 0, 2, i32::MAX] {
		let mut object = CObject::int32(value);
		let got = unsafe { CBLDart_CObject_getIntValueAsInt64(&raw mut object) };
		assert_eq!(got, i64::from(value));
	}
}

#[test]
fn test_get_int_value_passes_int64_through() {
	for value in [i64::MIN, -1, 0, 1 << 40, i64::MAX] {
		let mut object = CObject::int64(value);
		let got = unsafe { CBLDart_CObject_getIntValueAsInt64(&raw mut object) };
		assert_eq!(got, value);
	}
}

#[test]
fn test_set_empty_array_on_uninitialised_slot() {
	let mut slot = uninit_slot();
	unsafe { CBLDart_CObject_SetEmptyArray(slot.as_mut_ptr()) };
	let object = unsafe { slot.assume_init() };

	assert_eq!(object.object_type(), Ok(CObjectType::Array));
	assert_eq!(
		object.view(),
		Ok(CObjectView::Array {
			length: 0,
			values: std::ptr::null_mut(),
		})
	);
}

#[test]
fn test_set_empty_array_replaces_existing_value() {
	let mut object = CObject::int64(5);
	unsafe { CBLDart_CObject_SetEmptyArray(&raw mut object) };
	assert!(object.is(CObjectType::Array));
	assert_eq!(object.try_int_value_as_i64(), None);
}

#[test]
fn test_set_pointer_example_address() {
	let address = std::ptr::without_provenance::<c_void>(0x1000);

	let mut slot = uninit_slot();
	unsafe { CBLDart_CObject_SetPointer(slot.as_mut_ptr(), address) };
	let object = unsafe { slot.assume_init() };

	assert!(object.is(CObjectType::NativePointer));
	assert!(!object.object_type().unwrap().is_integer());
	assert_ne!(object.object_type(), Ok(CObjectType::Array));
	assert_eq!(object.pointer_value().map(|p| p.addr()), Some(0x1000));
}

#[test]
fn test_set_pointer_does_not_take_ownership() {
	let owned = Box::new([1u8, 2, 3]);
	let address: *const c_void = (&raw const *owned).cast();

	let mut object = CObject::null();
	unsafe { CBLDart_CObject_SetPointer(&raw mut object, address) };

	assert_eq!(object.pointer_value(), Some(address));
	// still ours to use and drop
	assert_eq!(*owned, [1, 2, 3]);
	drop(owned);
}

#[test]
fn test_set_null_pointer_writes_null() {
	let mut object = CObject::int32(9);
	unsafe { CBLDart_CObject_SetPointer(&raw mut object, std::ptr::null()) };
	assert!(object.is(CObjectType::Null));
}

#[test]
fn test_set_fl_string_references_original_bytes() {
	let bytes = b"{\"type\":\"doc\",\"_id\":\"a\"}".to_vec();
	let string = FLString::from_bytes(&bytes);

	let mut slot = uninit_slot();
	unsafe { CBLDart_CObject_SetFLString(slot.as_mut_ptr(), string) };
	let object = unsafe { slot.assume_init() };

	assert_eq!(
		object.view(),
		Ok(CObjectView::TypedData {
			ty: TypedDataType::Uint8,
			length: bytes.len(),
			values: bytes.as_ptr(),
		})
	);

	let decoded = object.fl_string_value().unwrap();
	assert_eq!(decoded.buf, string.buf);
	assert_eq!(decoded.size, bytes.len());
}

#[test]
fn test_set_null_fl_string_writes_null() {
	let mut object = CObject::int32(1);
	unsafe { CBLDart_CObject_SetFLString(&raw mut object, FLString::empty()) };
	assert!(object.is(CObjectType::Null));
}

#[test]
fn test_edition_export() {
	let ffi = CBLDart_Edition();
	assert_eq!(ffi.version_number, edition::CBLITE_VERSION_NUMBER);
	assert_eq!(ffi.build_number, edition::CBLITE_BUILD_NUMBER);
	assert_eq!(ffi.enterprise, edition::COUCHBASE_ENTERPRISE);
	assert_eq!(unsafe { ffi.version.as_str() }, Ok(edition::CBLITE_VERSION));
	assert_eq!(unsafe { ffi.build_timestamp.as_str() }, Ok(edition::CBLITE_BUILD_TIMESTAMP));
}

#[test]
fn test_init_logging_is_idempotent() {
	let first = CBLDart_InitLogging();
	assert_eq!(CBLDart_InitLogging(), first);
}
