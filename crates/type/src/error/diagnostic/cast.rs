// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment, value::Type};

/// Expression type cannot be adjusted to the required type
pub fn type_mismatch(fragment: Fragment, from: &Type, to: &Type) -> Diagnostic {
	let mut notes = vec![];
	if from.is_number() && to.is_number() {
		notes.push(format!(
			"Implicit conversion from {} to {} would lose information; only widening conversions are implicit",
			from, to
		));
	}
	if from.is_nullable() && !to.is_nullable() {
		notes.push(format!("{} may be absent; test it with IS NULL first", from));
	}

	Diagnostic {
		code: "CAST_001".to_string(),
		message: format!("Type mismatch: cannot convert {} to {}", from, to),
		fragment,
		label: Some(format!("expected {}", to)),
		help: Some(format!("Provide a value of type {}", to)),
		notes,
		cause: None,
	}
}

/// Number token carries a value of no recognized numeric kind
pub fn unsupported_literal(fragment: Fragment) -> Diagnostic {
	let text = fragment.text().to_string();
	Diagnostic {
		code: "CAST_002".to_string(),
		message: format!("Unsupported numeric literal: {}", text),
		fragment,
		label: Some("not a recognized numeric literal".to_string()),
		help: Some("Numeric literals must be integer, floating point or decimal values".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Value of one kind cannot be converted into the target kind
pub fn conversion_failed(from: &Type, to: &Type, value: String) -> Diagnostic {
	Diagnostic {
		code: "CAST_003".to_string(),
		message: format!("Cannot convert {} value {} to {}", from, value, to),
		fragment: Fragment::None,
		label: Some("conversion overflow".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}
