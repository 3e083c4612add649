// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::fragment::Fragment;

pub mod atom;
pub mod cast;
pub mod evaluate;
pub mod function;
pub mod internal;
pub mod operator;

pub use internal::{SourceLocation, internal, internal_at};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub fragment: Fragment,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	pub fn is_internal(&self) -> bool {
		self.code == internal::INTERNAL_ERROR_CODE
	}
}
