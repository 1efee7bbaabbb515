// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::ffi::c_void;
use std::str::Utf8Error;

/// FFI-safe view of a byte range owned by someone else (maps to Fleece `FLSlice`)
///
/// The view never owns `buf`. Whoever handed it out keeps the bytes alive, and
/// nothing in this crate copies them or extends their lifetime.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FLSlice {
	/// Pointer to the first byte, null for `kFLSliceNull`
	pub buf: *const c_void,
	/// Number of bytes
	pub size: usize,
}

/// A slice holding UTF-8 text (maps to Fleece `FLString`)
pub type FLString = FLSlice;

impl FLSlice {
	/// The null slice
	pub const fn empty() -> Self {
		Self {
			buf: core::ptr::null(),
			size: 0,
		}
	}

	/// Borrow a byte slice
	pub const fn from_bytes(data: &[u8]) -> Self {
		Self {
			buf: data.as_ptr().cast(),
			size: data.len(),
		}
	}

	/// Check if this is the null slice
	pub fn is_null(&self) -> bool {
		self.buf.is_null()
	}

	/// Check if the slice has no bytes (null or zero-sized)
	pub fn is_empty(&self) -> bool {
		self.size == 0 || self.buf.is_null()
	}

	/// Get the slice as bytes
	///
	/// # Safety
	/// `buf` must point to `size` readable bytes that stay valid and unmodified
	/// for `'a`.
	pub unsafe fn as_bytes<'a>(&self) -> &'a [u8] {
		if self.is_empty() {
			&[]
		} else {
			// SAFETY: Caller must ensure pointer validity and lifetime
			unsafe { core::slice::from_raw_parts(self.buf.cast::<u8>(), self.size) }
		}
	}

	/// Get the slice as UTF-8 text
	///
	/// # Safety
	/// Same requirements as [`FLSlice::as_bytes`].
	pub unsafe fn as_str<'a>(&self) -> Result<&'a str, Utf8Error> {
		// SAFETY: forwarded to the caller
		std::str::from_utf8(unsafe { self.as_bytes() })
	}
}

impl Default for FLSlice {
	fn default() -> Self {
		Self::empty()
	}
}

impl From<&[u8]> for FLSlice {
	fn from(data: &[u8]) -> Self {
		Self::from_bytes(data)
	}
}

impl From<&str> for FLSlice {
	fn from(text: &str) -> Self {
		Self::from_bytes(text.as_bytes())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_is_null() {
		let slice = FLSlice::empty();
		assert!(slice.is_null());
		assert!(slice.is_empty());
		assert_eq!(unsafe { slice.as_bytes() }, &[] as &[u8]);
	}

	#[test]
	fn test_borrows_without_copying() {
		let data = vec![1u8, 2, 3, 4];
		let slice = FLSlice::from(data.as_slice());

		assert_eq!(slice.buf, data.as_ptr().cast());
		assert_eq!(slice.size, 4);
		assert_eq!(unsafe { slice.as_bytes() }, &[1, 2, 3, 4]);
	}

	#[test]
	fn test_zero_length_slice_is_empty_but_not_null() {
		let data: [u8; 0] = [];
		let slice = FLSlice::from_bytes(&data);
		assert!(!slice.is_null());
		assert!(slice.is_empty());
	}

	#[test]
	fn test_as_str() {
		let slice = FLString::from("couchbase");
		assert_eq!(unsafe { slice.as_str() }, Ok("couchbase"));

		let invalid = [0xffu8, 0xfe];
		let slice = FLString::from_bytes(&invalid);
		assert!(unsafe { slice.as_str() }.is_err());
	}
}
