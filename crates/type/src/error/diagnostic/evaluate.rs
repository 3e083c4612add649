// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment, value::Type};

pub fn arithmetic_overflow(operator: &str, ty: &Type) -> Diagnostic {
	Diagnostic {
		code: "EVAL_001".to_string(),
		message: format!("Arithmetic overflow in '{}' on {}", operator, ty),
		fragment: Fragment::None,
		label: Some("value exceeds type bounds".to_string()),
		help: Some("Use a wider type for the operands".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn division_by_zero() -> Diagnostic {
	Diagnostic {
		code: "EVAL_002".to_string(),
		message: "Division by zero".to_string(),
		fragment: Fragment::None,
		label: Some("divisor is zero".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// Member read on a reference that holds no value
pub fn null_reference(member: &str) -> Diagnostic {
	Diagnostic {
		code: "EVAL_003".to_string(),
		message: format!("Cannot read member '{}' of a null reference", member),
		fragment: Fragment::None,
		label: Some("null reference".to_string()),
		help: Some("Test the value with IS NULL before reading members".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Presence-checked unwrap of an absent nullable value
pub fn missing_value(ty: &Type) -> Diagnostic {
	Diagnostic {
		code: "EVAL_004".to_string(),
		message: format!("Nullable value of type {} has no value", ty),
		fragment: Fragment::None,
		label: Some("absent value".to_string()),
		help: Some("Test the value with IS NULL before using it".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn argument_count(expected: usize, actual: usize) -> Diagnostic {
	Diagnostic {
		code: "EVAL_005".to_string(),
		message: format!("Compiled function expects {} arguments, got {}", expected, actual),
		fragment: Fragment::None,
		label: Some("wrong number of arguments".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// Operand value does not match the type the operation was compiled for
pub fn unexpected_value(expected: &Type, actual: String) -> Diagnostic {
	Diagnostic {
		code: "EVAL_006".to_string(),
		message: format!("Expected a value of type {}, got {}", expected, actual),
		fragment: Fragment::None,
		label: Some("unexpected value".to_string()),
		help: Some("Arguments must match the declared parameter types".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// An operation evaluated during compilation failed
pub fn fold_failed(fragment: Fragment, cause: Diagnostic) -> Diagnostic {
	Diagnostic {
		code: "EVAL_007".to_string(),
		message: format!("Constant evaluation failed: {}", cause.message),
		fragment,
		label: Some("evaluated at compile time".to_string()),
		help: Some("All operands are constants, so the expression was evaluated while compiling".to_string()),
		notes: vec![],
		cause: Some(Box::new(cause)),
	}
}

/// Object member read on an instance of a different host type
pub fn foreign_object(object_type: &str, member: &str) -> Diagnostic {
	Diagnostic {
		code: "EVAL_008".to_string(),
		message: format!("Member '{}' of {} read from an object of another host type", member, object_type),
		fragment: Fragment::None,
		label: Some("foreign object".to_string()),
		help: Some(format!("Pass an instance of the host type registered as {}", object_type)),
		notes: vec![],
		cause: None,
	}
}
