// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::{Deref, DerefMut},
};

pub mod diagnostic;
mod r#macro;
pub mod render;

pub use diagnostic::Diagnostic;
use render::DefaultRenderer;

use crate::fragment::Fragment;

/// Conversion of a domain error into the shared diagnostic representation.
pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Error {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.as_str())
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}

	/// Attaches `fragment` unless the diagnostic already carries a source
	/// location. Internal errors never receive one.
	pub fn with_fragment(mut self, fragment: &Fragment) -> Self {
		if self.0.is_internal() {
			return self;
		}
		if !self.0.fragment.is_located() && fragment.is_located() {
			self.0.fragment = fragment.clone();
		}
		self
	}

	pub fn is_internal(&self) -> bool {
		self.0.is_internal()
	}
}

impl std::error::Error for Error {}

impl<T: IntoDiagnostic> From<T> for Error {
	fn from(err: T) -> Self {
		Error(err.into_diagnostic())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::diagnostic::atom::unknown_atom;

	#[test]
	fn test_with_fragment_fills_missing_location() {
		let err = Error(unknown_atom(Fragment::internal("foo")));
		let located = err.with_fragment(&Fragment::statement("foo", 4, 1, 5, 3));
		assert_eq!(located.fragment, Fragment::statement("foo", 4, 1, 5, 3));
	}

	#[test]
	fn test_with_fragment_keeps_existing_location() {
		let original = Fragment::statement("foo", 0, 1, 1, 3);
		let err = Error(unknown_atom(original.clone()));
		let located = err.with_fragment(&Fragment::statement("bar", 10, 1, 11, 3));
		assert_eq!(located.fragment, original);
	}

	#[test]
	fn test_display_contains_code_and_location() {
		let err = Error(unknown_atom(Fragment::statement("foo", 4, 1, 5, 3)));
		let rendered = err.to_string();
		assert!(rendered.contains("ATOM_001"));
		assert!(rendered.contains("pos 4, line 1, col 5, length 3"));
	}
}
