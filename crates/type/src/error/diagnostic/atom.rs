// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment, value::Type};

/// Identifier is neither a parameter, a context member nor a registered atom
pub fn unknown_atom(identifier: Fragment) -> Diagnostic {
	let name = identifier.text().to_string();
	Diagnostic {
		code: "ATOM_001".to_string(),
		message: format!("Unknown atom: {}", name),
		fragment: identifier,
		label: Some("unknown identifier".to_string()),
		help: Some("Check the spelling, or declare it as a parameter or register it as an atom".to_string()),
		notes: vec![
			"Identifiers resolve in order: parameters, context members, registered atoms, dynamic handlers"
				.to_string(),
		],
		cause: None,
	}
}

/// Dotted path segment does not name a member of the preceding type
pub fn unknown_member(member: Fragment, owner: &Type) -> Diagnostic {
	let name = member.text().to_string();
	Diagnostic {
		code: "ATOM_002".to_string(),
		message: format!("Unknown member '{}' on type {}", name, owner),
		fragment: member,
		label: Some("unknown member".to_string()),
		help: Some(format!("Type {} has no member named '{}'", owner, name)),
		notes: vec![],
		cause: None,
	}
}

/// Identifier atom expects the ambient context but none is declared
pub fn context_required(identifier: Fragment, expected: &Type) -> Diagnostic {
	let name = identifier.text().to_string();
	Diagnostic {
		code: "ATOM_003".to_string(),
		message: format!("Identifier {} requires a context of type {}", name, expected),
		fragment: identifier,
		label: Some("no context available".to_string()),
		help: Some(format!("Compile with a context parameter of type {}", expected)),
		notes: vec![],
		cause: None,
	}
}

/// Identifier atom expects a context the ambient context cannot be adjusted to
pub fn context_mismatch(identifier: Fragment, expected: &Type, actual: &Type) -> Diagnostic {
	let name = identifier.text().to_string();
	Diagnostic {
		code: "ATOM_004".to_string(),
		message: format!("Identifier {} requires a context of type {}, got {}", name, expected, actual),
		fragment: identifier,
		label: Some("incompatible context".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}
