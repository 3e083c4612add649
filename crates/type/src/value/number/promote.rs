// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::Type;

/// The signed integer one step wider than `size` bytes; `Decimal` above 8.
pub fn next_signed(size: usize) -> Type {
	match size {
		1 => Type::Int2,
		2 => Type::Int4,
		4 => Type::Int8,
		_ => Type::Decimal,
	}
}

/// Common numeric kind two numeric operands are widened to, or `None` when
/// the kinds do not mix (floats with decimals, or non-numeric kinds).
pub fn promote(l: &Type, r: &Type) -> Option<Type> {
	if !l.is_number() || !r.is_number() {
		return None;
	}
	if l == r {
		return Some(l.clone());
	}

	if l.is_decimal() || r.is_decimal() {
		let other = if l.is_decimal() { r } else { l };
		return other.is_integer().then_some(Type::Decimal);
	}

	let ls = l.size()?;
	let rs = r.size()?;

	if l.is_integer() && r.is_integer() {
		if ls == rs {
			// same width, signedness differs
			return Some(next_signed(ls));
		}
		let (wide, narrow) = if ls > rs { (l, r) } else { (r, l) };
		if wide.is_unsigned_integer() && narrow.is_signed_integer() {
			return Some(next_signed(wide.size()?));
		}
		return Some(wide.clone());
	}

	if l.is_floating_point() && r.is_floating_point() {
		return Some(Type::Float8);
	}

	let (float, float_size, int_size) = if l.is_floating_point() { (l, ls, rs) } else { (r, rs, ls) };
	if float_size >= int_size {
		Some(float.clone())
	} else {
		Some(Type::Float8)
	}
}
