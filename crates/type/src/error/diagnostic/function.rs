// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment, value::Type};

/// No function atom is registered under the name
pub fn unknown_function(function: Fragment) -> Diagnostic {
	let name = function.text().to_string();
	Diagnostic {
		code: "FUNCTION_001".to_string(),
		message: format!("Unknown function: {}", name),
		fragment: function,
		label: Some("no such function".to_string()),
		help: Some("Function atoms must be registered with the runtime before compiling".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Call-site argument count differs from the native signature
pub fn arity_mismatch(function: Fragment, expected: usize, actual: usize) -> Diagnostic {
	let name = function.text().to_string();
	Diagnostic {
		code: "FUNCTION_002".to_string(),
		message: format!("{} takes {} argument(s) but {} were supplied", name, expected, actual),
		fragment: function,
		label: Some("wrong number of arguments".to_string()),
		help: Some(format!("Call {} with exactly {} argument(s)", name, expected)),
		notes: vec![],
		cause: None,
	}
}

/// Argument at the 1-based `ordinal` cannot be adjusted to its parameter type
pub fn invalid_argument_type(argument: Fragment, ordinal: usize, expected: &Type, actual: &Type) -> Diagnostic {
	Diagnostic {
		code: "FUNCTION_003".to_string(),
		message: format!("Argument {} has type {} where {} is expected", ordinal, actual, expected),
		fragment: argument,
		label: Some(format!("expected {}", expected)),
		help: Some(format!("No implicit conversion from {} to {} exists", actual, expected)),
		notes: vec![],
		cause: None,
	}
}

/// A native function reported a failure
pub fn execution_failed(function: &str, reason: String) -> Diagnostic {
	Diagnostic {
		code: "FUNCTION_004".to_string(),
		message: format!("{} failed: {}", function, reason),
		fragment: Fragment::None,
		label: Some("function failed".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// Name resolves to an identifier atom, which takes no argument list
pub fn not_a_function(function: Fragment) -> Diagnostic {
	let name = function.text().to_string();
	Diagnostic {
		code: "FUNCTION_005".to_string(),
		message: format!("{} is not a function", name),
		fragment: function,
		label: Some("not callable".to_string()),
		help: Some(format!("{} is an identifier; reference it without parentheses", name)),
		notes: vec![],
		cause: None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_argument_ordinal_is_reported_as_given() {
		let diagnostic = invalid_argument_type(Fragment::internal("'x'"), 2, &Type::Int4, &Type::Utf8);
		assert_eq!(diagnostic.message, "Argument 2 has type Utf8 where Int4 is expected");
	}
}
