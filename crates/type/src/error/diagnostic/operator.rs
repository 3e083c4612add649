// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment, value::Type};

/// No operand category accepts the pair, or the category rejects the operator
pub fn binary_operator_not_applicable(fragment: Fragment, operator: &str, left: &Type, right: &Type) -> Diagnostic {
	let mut notes = vec![format!("Left operand is of type: {}", left), format!("Right operand is of type: {}", right)];
	if left.is_utf8() != right.is_utf8() {
		notes.push("Text operands are never converted implicitly; convert the other operand first".to_string());
	}
	if left.strip_nullable().is_number() && right.strip_nullable().is_number() {
		notes.push("Bitwise operators apply to integer types only".to_string());
	}

	Diagnostic {
		code: "OPERATOR_001".to_string(),
		message: format!("Cannot apply '{}' operator to {} and {}", operator, left, right),
		fragment,
		label: Some(format!("'{}' operator on incompatible types", operator)),
		help: Some("Consider converting operands to compatible types first".to_string()),
		notes,
		cause: None,
	}
}

pub fn unary_operator_not_applicable(fragment: Fragment, operator: &str, operand: &Type) -> Diagnostic {
	Diagnostic {
		code: "OPERATOR_002".to_string(),
		message: format!("Cannot apply '{}' operator to {}", operator, operand),
		fragment,
		label: Some(format!("'{}' operator on incompatible type", operator)),
		help: None,
		notes: vec![format!("Operand is of type: {}", operand)],
		cause: None,
	}
}

/// Both operands of a binary construct carry no value
pub fn void_operands(fragment: Fragment, operator: &str) -> Diagnostic {
	Diagnostic {
		code: "OPERATOR_003".to_string(),
		message: format!("Operation '{}' is undefined when both arguments are void", operator),
		fragment,
		label: Some("both operands are void".to_string()),
		help: Some("At least one operand must have a type other than void".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Operator token is not part of the operator vocabulary
pub fn unknown_operator(fragment: Fragment) -> Diagnostic {
	let operator = fragment.text().to_string();
	Diagnostic {
		code: "OPERATOR_004".to_string(),
		message: format!("Unknown operator: {}", operator),
		fragment,
		label: Some("unknown operator".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// Values of this type have no ordering, so a range test cannot apply
pub fn not_comparable(fragment: Fragment, ty: &Type) -> Diagnostic {
	Diagnostic {
		code: "OPERATOR_005".to_string(),
		message: format!("Values of type {} cannot be ordered", ty),
		fragment,
		label: Some("unordered type".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}
