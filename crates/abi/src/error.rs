// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::dart::CObjectType;

/// Errors raised while decoding a `Dart_CObject` written by foreign code.
///
/// Writing a slot never fails. Reading one can, because the tag and length
/// fields are plain integers that the other side of the boundary is free to fill
/// with values this crate does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AbiError {
	#[error("unknown Dart_CObject type tag {0}")]
	UnknownObjectType(i32),

	#[error("unknown Dart_TypedData type code {0}")]
	UnknownTypedDataType(i32),

	#[error("negative length {length} in {kind} payload")]
	NegativeLength {
		kind: CObjectType,
		length: isize,
	},
}

pub type Result<T> = std::result::Result<T, AbiError>;
