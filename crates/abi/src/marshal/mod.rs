// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Marshaling between `Dart_CObject` slots and native values
//!
//! Writers build a complete [`CObject`](crate::CObject) and replace the target slot
//! in one assignment. Readers check the tag before touching the payload.
//!
//! Nothing here allocates or copies. Pointers and strings written into a slot stay
//! owned by the caller, who must keep them alive until the VM has consumed the
//! slot (for `Dart_PostCObject` that is the return of the call, because the VM
//! copies the message while posting).

mod read;
mod write;
