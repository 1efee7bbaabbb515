// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Build metadata of the vendored Couchbase Lite C library (`CBL_Edition.h`)

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::fleece::FLString;

pub const CBLITE_VERSION: &str = "3.2.0";
pub const CBLITE_VERSION_NUMBER: u32 = 3002000;
pub const CBLITE_BUILD_NUMBER: u32 = 63;
pub const CBLITE_SOURCE_ID: &str = "42c42c4+bc179d9";
pub const CBLITE_BUILD_TIMESTAMP: &str = "2024-07-20T02:48:21Z";

/// Whether the library was built as Enterprise Edition (`COUCHBASE_ENTERPRISE`)
pub const COUCHBASE_ENTERPRISE: bool = cfg!(feature = "enterprise");

/// The edition this crate was compiled against
pub const EDITION: Edition = Edition {
	version: CBLITE_VERSION,
	version_number: CBLITE_VERSION_NUMBER,
	build_number: CBLITE_BUILD_NUMBER,
	source_id: CBLITE_SOURCE_ID,
	build_timestamp: CBLITE_BUILD_TIMESTAMP,
	enterprise: COUCHBASE_ENTERPRISE,
};

/// Read-only Couchbase Lite build metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edition {
	/// Semantic version, e.g. `3.2.0`
	pub version: &'static str,
	/// `major * 1_000_000 + minor * 1_000 + patch`
	pub version_number: u32,
	pub build_number: u32,
	/// Short source-control hashes of the library and its core
	pub source_id: &'static str,
	/// ISO-8601 build time
	pub build_timestamp: &'static str,
	pub enterprise: bool,
}

impl Edition {
	pub const fn major(&self) -> u32 {
		self.version_number / 1_000_000
	}

	pub const fn minor(&self) -> u32 {
		self.version_number / 1_000 % 1_000
	}

	pub const fn patch(&self) -> u32 {
		self.version_number % 1_000
	}

	/// `CE` or `EE`
	pub const fn edition_code(&self) -> &'static str {
		if self.enterprise { "EE" } else { "CE" }
	}

	/// FFI representation with strings pointing at static data
	pub fn to_ffi(&self) -> EditionFFI {
		EditionFFI {
			version: FLString::from(self.version),
			version_number: self.version_number,
			build_number: self.build_number,
			source_id: FLString::from(self.source_id),
			build_timestamp: FLString::from(self.build_timestamp),
			enterprise: self.enterprise,
		}
	}
}

impl Display for Edition {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}-{} ({}) {}", self.version, self.build_number, self.source_id, self.edition_code())
	}
}

/// FFI-safe edition metadata
///
/// All strings reference `'static` data and are never freed.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct EditionFFI {
	pub version: FLString,
	pub version_number: u32,
	pub build_number: u32,
	pub source_id: FLString,
	pub build_timestamp: FLString,
	pub enterprise: bool,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_version_number_matches_version_string() {
		let expected = format!("{}.{}.{}", EDITION.major(), EDITION.minor(), EDITION.patch());
		assert_eq!(expected, EDITION.version);
	}

	#[test]
	fn test_display() {
		let edition = Edition {
			enterprise: false,
			..EDITION
		};
		assert_eq!(edition.to_string(), "3.2.0-63 (42c42c4+bc179d9) CE");

		let edition = Edition {
			enterprise: true,
			..EDITION
		};
		assert_eq!(edition.to_string(), "3.2.0-63 (42c42c4+bc179d9) EE");
	}

	#[test]
	fn test_enterprise_follows_feature() {
		assert_eq!(EDITION.enterprise, cfg!(feature = "enterprise"));
	}

	#[test]
	fn test_serialize() {
		let json = serde_json::to_value(EDITION).unwrap();
		assert_eq!(json["version"], "3.2.0");
		assert_eq!(json["version_number"], 3002000);
		assert_eq!(json["build_number"], 63);
		assert_eq!(json["source_id"], "42c42c4+bc179d9");
		assert_eq!(json["build_timestamp"], "2024-07-20T02:48:21Z");
	}

	#[test]
	fn test_to_ffi_references_static_strings() {
		let ffi = EDITION.to_ffi();
		assert_eq!(unsafe { ffi.version.as_str() }, Ok("3.2.0"));
		assert_eq!(unsafe { ffi.source_id.as_str() }, Ok(CBLITE_SOURCE_ID));
		assert_eq!(ffi.build_timestamp.size, CBLITE_BUILD_TIMESTAMP.len());
		assert_eq!(ffi.version_number, CBLITE_VERSION_NUMBER);
	}
}
