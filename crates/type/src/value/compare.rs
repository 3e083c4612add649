// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use crate::value::{Value, text};

/// Orders two values of the same kind. An absent value orders before every
/// present value; text orders ordinally ignoring case. Values of different
/// kinds, objects and unordered floats yield `None`.
pub fn compare(l: &Value, r: &Value) -> Option<Ordering> {
	match (l, r) {
		(Value::None, Value::None) => Some(Ordering::Equal),
		(Value::None, _) => Some(Ordering::Less),
		(_, Value::None) => Some(Ordering::Greater),
		(Value::Boolean(l), Value::Boolean(r)) => Some(l.cmp(r)),
		(Value::Int1(l), Value::Int1(r)) => Some(l.cmp(r)),
		(Value::Int2(l), Value::Int2(r)) => Some(l.cmp(r)),
		(Value::Int4(l), Value::Int4(r)) => Some(l.cmp(r)),
		(Value::Int8(l), Value::Int8(r)) => Some(l.cmp(r)),
		(Value::Uint1(l), Value::Uint1(r)) => Some(l.cmp(r)),
		(Value::Uint2(l), Value::Uint2(r)) => Some(l.cmp(r)),
		(Value::Uint4(l), Value::Uint4(r)) => Some(l.cmp(r)),
		(Value::Uint8(l), Value::Uint8(r)) => Some(l.cmp(r)),
		(Value::Float4(l), Value::Float4(r)) => l.partial_cmp(r),
		(Value::Float8(l), Value::Float8(r)) => l.partial_cmp(r),
		(Value::Decimal(l), Value::Decimal(r)) => Some(l.cmp(r)),
		(Value::Utf8(l), Value::Utf8(r)) => Some(text::compare_ignore_case(l, r)),
		(Value::DateTime(l), Value::DateTime(r)) => Some(l.cmp(r)),
		(Value::DateTimeOffset(l), Value::DateTimeOffset(r)) => Some(l.cmp(r)),
		(Value::Interval(l), Value::Interval(r)) => Some(l.cmp(r)),
		(Value::Uuid(l), Value::Uuid(r)) => Some(l.cmp(r)),
		(Value::Blob(l), Value::Blob(r)) => Some(l.cmp(r)),
		_ => None,
	}
}

/// Language-level equality: absent equals absent, text compares ignoring
/// case and objects compare by identity.
pub fn equals(l: &Value, r: &Value) -> bool {
	match (l, r) {
		(Value::Utf8(l), Value::Utf8(r)) => text::eq_ignore_case(l, r),
		(Value::Object(l), Value::Object(r)) => l == r,
		(Value::Float4(l), Value::Float4(r)) => l == r,
		(Value::Float8(l), Value::Float8(r)) => l == r,
		_ => compare(l, r) == Some(Ordering::Equal),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_none_orders_first() {
		assert_eq!(compare(&Value::None, &Value::Int4(i32::MIN)), Some(Ordering::Less));
		assert_eq!(compare(&Value::Int4(0), &Value::None), Some(Ordering::Greater));
		assert_eq!(compare(&Value::None, &Value::None), Some(Ordering::Equal));
	}

	#[test]
	fn test_text_ignores_case() {
		assert!(equals(&Value::utf8("aha"), &Value::utf8("AHA")));
		assert_eq!(compare(&Value::utf8("a"), &Value::utf8("B")), Some(Ordering::Less));
	}

	#[test]
	fn test_mixed_kinds_incomparable() {
		assert_eq!(compare(&Value::Int4(1), &Value::Int8(1)), None);
		assert!(!equals(&Value::Int4(1), &Value::Int8(1)));
	}

	#[test]
	fn test_nan_is_unequal() {
		assert!(!equals(&Value::Float8(f64::NAN), &Value::Float8(f64::NAN)));
		assert_eq!(compare(&Value::Float8(f64::NAN), &Value::Float8(1.0)), None);
	}

	#[test]
	fn test_absent_equals_absent() {
		assert!(equals(&Value::None, &Value::None));
		assert!(!equals(&Value::None, &Value::Int4(0)));
	}
}
