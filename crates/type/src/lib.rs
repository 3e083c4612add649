// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Semantic types, run-time values and the diagnostic error surface shared by
//! the reckon expression compiler and its hosts.

pub mod error;
pub mod fragment;
pub mod value;

pub use error::{Diagnostic, Error, IntoDiagnostic};
pub use fragment::Fragment;
pub use value::{
	Blob, Decimal, FromValue, GetType, IntoValue, MemberDescriptor, Object, ObjectType, Type, Value, ValueKey,
};

pub type Result<T> = std::result::Result<T, Error>;
