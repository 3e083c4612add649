// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

pub const INTERNAL_ERROR_CODE: &str = "INTERNAL_ERROR";

/// Rust source position an internal error was raised from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceLocation {
	pub file: &'static str,
	pub line: u32,
	pub column: u32,
	pub module: &'static str,
}

impl SourceLocation {
	pub const UNKNOWN: SourceLocation = SourceLocation {
		file: "unknown",
		line: 0,
		column: 0,
		module: "unknown",
	};
}

impl Display for SourceLocation {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}:{}:{}", self.file, self.line, self.column)
	}
}

/// An internal error: a misconfigured runtime or a broken compiler
/// invariant, never a problem of the compiled expression. Carries no
/// fragment.
pub fn internal_at(reason: impl Into<String>, location: SourceLocation) -> Diagnostic {
	let incident = format!("{:x}-{}", chrono::Utc::now().timestamp_millis(), location.line);
	Diagnostic {
		code: INTERNAL_ERROR_CODE.to_string(),
		message: format!("Internal error: {}", reason.into()),
		fragment: Fragment::None,
		label: Some(format!("raised at {} in {}", location, location.module)),
		help: Some("Check the atoms and object types registered with the runtime".to_string()),
		notes: vec![
			format!("incident {}", incident),
			format!("reckon {} on {}/{}", env!("CARGO_PKG_VERSION"), std::env::consts::OS, std::env::consts::ARCH),
		],
		cause: None,
	}
}

pub fn internal(reason: impl Into<String>) -> Diagnostic {
	internal_at(reason, SourceLocation::UNKNOWN)
}

/// Builds an internal error diagnostic located at the call site.
#[macro_export]
macro_rules! internal_error {
	($($arg:tt)+) => {
		$crate::error::diagnostic::internal_at(
			format!($($arg)+),
			$crate::error::diagnostic::SourceLocation {
				file: file!(),
				line: line!(),
				column: column!(),
				module: module_path!(),
			},
		)
	};
}

#[macro_export]
macro_rules! internal_err {
	($($arg:tt)+) => {
		Err($crate::error::Error($crate::internal_error!($($arg)+)))
	};
}

#[macro_export]
macro_rules! return_internal_error {
	($($arg:tt)+) => {
		return Err($crate::error::Error($crate::internal_error!($($arg)+)))
	};
}
