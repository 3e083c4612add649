// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta};

use crate::value::{Value, text};

/// Hashable projection of a [`Value`] whose equality agrees with
/// [`crate::value::equals`] for values of one kind: text keys are
/// case-folded, float keys compare by normalized bit pattern.
///
/// Objects have no key. NaN never equals itself under language equality, so
/// NaN has no key either.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKey {
	None,
	Boolean(bool),
	Int(i128),
	Float(u64),
	Decimal(BigDecimal),
	Text(String),
	DateTime(NaiveDateTime),
	DateTimeOffset(DateTime<FixedOffset>),
	Interval(TimeDelta),
	Uuid(uuid::Uuid),
	Blob(Vec<u8>),
}

impl ValueKey {
	pub fn of(value: &Value) -> Option<ValueKey> {
		Some(match value {
			Value::None => ValueKey::None,
			Value::Boolean(b) => ValueKey::Boolean(*b),
			Value::Int1(v) => ValueKey::Int(*v as i128),
			Value::Int2(v) => ValueKey::Int(*v as i128),
			Value::Int4(v) => ValueKey::Int(*v as i128),
			Value::Int8(v) => ValueKey::Int(*v as i128),
			Value::Uint1(v) => ValueKey::Int(*v as i128),
			Value::Uint2(v) => ValueKey::Int(*v as i128),
			Value::Uint4(v) => ValueKey::Int(*v as i128),
			Value::Uint8(v) => ValueKey::Int(*v as i128),
			Value::Float4(v) => return float_key(*v as f64),
			Value::Float8(v) => return float_key(*v),
			Value::Decimal(v) => ValueKey::Decimal(v.inner().normalized()),
			Value::Utf8(v) => ValueKey::Text(text::fold_case(v)),
			Value::DateTime(v) => ValueKey::DateTime(*v),
			Value::DateTimeOffset(v) => ValueKey::DateTimeOffset(*v),
			Value::Interval(v) => ValueKey::Interval(*v),
			Value::Uuid(v) => ValueKey::Uuid(*v),
			Value::Blob(v) => ValueKey::Blob(v.as_bytes().to_vec()),
			Value::Object(_) => return None,
		})
	}
}

fn float_key(value: f64) -> Option<ValueKey> {
	if value.is_nan() {
		return None;
	}
	// -0.0 == 0.0
	let value = if value == 0.0 { 0.0 } else { value };
	Some(ValueKey::Float(value.to_bits()))
}
