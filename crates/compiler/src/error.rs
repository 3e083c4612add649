// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reckon_type::{Diagnostic, Fragment, IntoDiagnostic, Type};

/// Failures specific to the analyzer's special constructs and tree shape.
/// Type, atom and evaluation failures use the shared diagnostics of
/// `reckon_type::error::diagnostic`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompileError {
	#[error("malformed {term} node: {reason}")]
	Structure {
		term: String,
		reason: String,
		fragment: Fragment,
	},

	#[error("WHEN condition must be a non-nullable Boolean, got {actual}")]
	NonBooleanCondition {
		actual: Type,
		fragment: Fragment,
	},

	#[error("CASE test variable must not be a constant")]
	ConstantCaseVariable {
		fragment: Fragment,
	},

	#[error("WHEN value of a CASE with a test variable must be a constant")]
	NonConstantWhen {
		fragment: Fragment,
	},

	#[error("incompatible CASE branch types {left} and {right}")]
	IncompatibleCaseTypes {
		left: Type,
		right: Type,
		fragment: Fragment,
	},

	#[error("IN list items must be constants")]
	NonConstantInItem {
		fragment: Fragment,
	},

	#[error("IN requires a literal list of values")]
	ParameterizedIn {
		fragment: Fragment,
	},

	#[error("invalid escape sequence '{sequence}' in string literal")]
	InvalidEscape {
		sequence: String,
		fragment: Fragment,
	},

	#[error("expression nesting exceeds the maximum depth of {max}")]
	MaxDepthExceeded {
		max: usize,
		fragment: Fragment,
	},
}

impl IntoDiagnostic for CompileError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			CompileError::Structure {
				fragment,
				..
			} => Diagnostic {
				code: "COMPILE_001".to_string(),
				message,
				fragment,
				label: Some("unexpected tree shape".to_string()),
				help: Some("The syntax tree does not match the shape the analyzer expects".to_string()),
				notes: vec![],
				cause: None,
			},
			CompileError::NonBooleanCondition {
				fragment,
				..
			} => Diagnostic {
				code: "COMPILE_002".to_string(),
				message,
				fragment,
				label: Some("not a Boolean condition".to_string()),
				help: Some("Compare the value, or test nullable conditions with IS NOT NULL first".to_string()),
				notes: vec![],
				cause: None,
			},
			CompileError::ConstantCaseVariable {
				fragment,
			} => Diagnostic {
				code: "COMPILE_003".to_string(),
				message,
				fragment,
				label: Some("constant test variable".to_string()),
				help: Some("Use CASE WHEN conditions, or a parameter as the test variable".to_string()),
				notes: vec![],
				cause: None,
			},
			CompileError::NonConstantWhen {
				fragment,
			} => Diagnostic {
				code: "COMPILE_004".to_string(),
				message,
				fragment,
				label: Some("not a constant".to_string()),
				help: Some("Use CASE WHEN conditions to compare against computed values".to_string()),
				notes: vec![],
				cause: None,
			},
			CompileError::IncompatibleCaseTypes {
				fragment,
				..
			} => Diagnostic {
				code: "COMPILE_005".to_string(),
				message,
				fragment,
				label: Some("incompatible branch".to_string()),
				help: Some("All THEN and ELSE branches must convert to one common type".to_string()),
				notes: vec![],
				cause: None,
			},
			CompileError::NonConstantInItem {
				fragment,
			} => Diagnostic {
				code: "COMPILE_006".to_string(),
				message,
				fragment,
				label: Some("not a constant".to_string()),
				help: Some("Compare against computed values with = and OR".to_string()),
				notes: vec![],
				cause: None,
			},
			CompileError::ParameterizedIn {
				fragment,
			} => Diagnostic {
				code: "COMPILE_007".to_string(),
				message,
				fragment,
				label: Some("not a value list".to_string()),
				help: Some(
					"To test membership in a set supplied at run time, register a set-membership function and call it, e.g. contains(@set, value)"
						.to_string(),
				),
				notes: vec![],
				cause: None,
			},
			CompileError::InvalidEscape {
				fragment,
				..
			} => Diagnostic {
				code: "COMPILE_008".to_string(),
				message,
				fragment,
				label: Some("invalid escape".to_string()),
				help: Some(r#"Supported escapes are \n \r \t \0 \\ \' \" and \uXXXX"#.to_string()),
				notes: vec![],
				cause: None,
			},
			CompileError::MaxDepthExceeded {
				fragment,
				..
			} => Diagnostic {
				code: "COMPILE_009".to_string(),
				message,
				fragment,
				label: Some("nested too deeply".to_string()),
				help: Some("Simplify the expression or raise the runtime's max_depth".to_string()),
				notes: vec![],
				cause: None,
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use reckon_type::Error;

	use super::*;

	#[test]
	fn test_parameterized_in_points_at_membership_function() {
		let err = Error::from(CompileError::ParameterizedIn {
			fragment: Fragment::None,
		});
		assert_eq!(err.code, "COMPILE_007");
		assert!(err.help.as_ref().unwrap().contains("contains(@set, value)"));
	}

	#[test]
	fn test_message_carries_types() {
		let err = Error::from(CompileError::IncompatibleCaseTypes {
			left: Type::Utf8,
			right: Type::Int4,
			fragment: Fragment::None,
		});
		assert_eq!(err.message, "incompatible CASE branch types Utf8 and Int4");
	}

	#[test]
	fn test_invalid_escape_lists_supported_sequences() {
		let err = Error::from(CompileError::InvalidEscape {
			sequence: r"\q".to_string(),
			fragment: Fragment::None,
		});
		assert_eq!(err.code, "COMPILE_008");
		assert_eq!(err.help.as_deref(), Some(r#"Supported escapes are \n \r \t \0 \\ \' \" and \uXXXX"#));
	}
}
