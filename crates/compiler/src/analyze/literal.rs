// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reckon_type::{Error, Type, Value, error::diagnostic::cast::unsupported_literal};

use super::fragment_of;
use crate::{error::CompileError, expression::Expr, syntax::SyntaxNode};

fn numeric_type(value: &Value) -> Option<Type> {
	Some(match value {
		Value::Int1(_) => Type::Int1,
		Value::Int2(_) => Type::Int2,
		Value::Int4(_) => Type::Int4,
		Value::Int8(_) => Type::Int8,
		Value::Uint1(_) => Type::Uint1,
		Value::Uint2(_) => Type::Uint2,
		Value::Uint4(_) => Type::Uint4,
		Value::Uint8(_) => Type::Uint8,
		Value::Float4(_) => Type::Float4,
		Value::Float8(_) => Type::Float8,
		Value::Decimal(_) => Type::Decimal,
		_ => return None,
	})
}

/// Numeric literals arrive pre-parsed in the token value.
pub(super) fn number(node: &SyntaxNode) -> crate::Result<Expr> {
	let value = node.token.as_ref().and_then(|t| t.value.as_ref());
	match value.and_then(|v| numeric_type(v).map(|ty| (v, ty))) {
		Some((value, ty)) => Ok(Expr::constant(value.clone(), ty)),
		None => Err(Error(unsupported_literal(fragment_of(node)))),
	}
}

pub(super) fn string(node: &SyntaxNode) -> crate::Result<Expr> {
	let raw = match node.token.as_ref().and_then(|t| t.value.as_ref()) {
		Some(Value::Utf8(raw)) => raw.to_string(),
		_ => {
			let text = node.text();
			text.strip_prefix('\'').and_then(|t| t.strip_suffix('\'')).unwrap_or(text).to_string()
		}
	};
	let text = unescape(&raw).map_err(|sequence| -> Error {
		CompileError::InvalidEscape {
			sequence,
			fragment: node.fragment(),
		}
		.into()
	})?;
	Ok(Expr::constant(Value::utf8(text), Type::Utf8))
}

/// Interprets backslash escapes; the offending sequence on failure.
fn unescape(raw: &str) -> Result<String, String> {
	if !raw.contains('\\') {
		return Ok(raw.to_string());
	}

	let mut result = String::with_capacity(raw.len());
	let mut chars = raw.chars();
	while let Some(c) = chars.next() {
		if c != '\\' {
			result.push(c);
			continue;
		}
		match chars.next() {
			Some('n') => result.push('\n'),
			Some('r') => result.push('\r'),
			Some('t') => result.push('\t'),
			Some('0') => result.push('\0'),
			Some('\\') => result.push('\\'),
			Some('\'') => result.push('\''),
			Some('"') => result.push('"'),
			Some('u') => {
				let digits: String = chars.by_ref().take(4).collect();
				let decoded = (digits.len() == 4)
					.then(|| u32::from_str_radix(&digits, 16).ok())
					.flatten()
					.and_then(char::from_u32);
				match decoded {
					Some(c) => result.push(c),
					None => return Err(format!("\\u{}", digits)),
				}
			}
			Some(other) => return Err(format!("\\{}", other)),
			None => return Err("\\".to_string()),
		}
	}
	Ok(result)
}
