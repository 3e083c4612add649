// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, ToPrimitive};

use crate::value::{Decimal, Type, Value, equals};

enum Numeric {
	Int(i128),
	Float(f64),
	Decimal(BigDecimal),
}

fn numeric(value: &Value) -> Option<Numeric> {
	Some(match value {
		Value::Int1(v) => Numeric::Int(*v as i128),
		Value::Int2(v) => Numeric::Int(*v as i128),
		Value::Int4(v) => Numeric::Int(*v as i128),
		Value::Int8(v) => Numeric::Int(*v as i128),
		Value::Uint1(v) => Numeric::Int(*v as i128),
		Value::Uint2(v) => Numeric::Int(*v as i128),
		Value::Uint4(v) => Numeric::Int(*v as i128),
		Value::Uint8(v) => Numeric::Int(*v as i128),
		Value::Float4(v) => Numeric::Float(*v as f64),
		Value::Float8(v) => Numeric::Float(*v),
		Value::Decimal(v) => Numeric::Decimal(v.inner().clone()),
		_ => return None,
	})
}

fn integral(n: &Numeric) -> Option<i128> {
	match n {
		Numeric::Int(i) => Some(*i),
		Numeric::Float(f) => {
			if !f.is_finite() || f.fract() != 0.0 {
				return None;
			}
			f.to_i128()
		}
		Numeric::Decimal(d) => {
			if !d.is_integer() {
				return None;
			}
			d.to_i128()
		}
	}
}

fn float(n: &Numeric) -> Option<f64> {
	match n {
		Numeric::Int(i) => Some(*i as f64),
		Numeric::Float(f) => Some(*f),
		Numeric::Decimal(d) => d.to_f64(),
	}
}

/// Converts a numeric value to another numeric kind. Integer targets require
/// an integral source within range; float targets accept any finite source
/// and lose precision silently. Non-numeric values, a `None` value and
/// non-numeric targets yield `None`.
pub fn convert(value: &Value, target: &Type) -> Option<Value> {
	let n = numeric(value)?;
	Some(match target {
		Type::Int1 => Value::Int1(integral(&n)?.try_into().ok()?),
		Type::Int2 => Value::Int2(integral(&n)?.try_into().ok()?),
		Type::Int4 => Value::Int4(integral(&n)?.try_into().ok()?),
		Type::Int8 => Value::Int8(integral(&n)?.try_into().ok()?),
		Type::Uint1 => Value::Uint1(integral(&n)?.try_into().ok()?),
		Type::Uint2 => Value::Uint2(integral(&n)?.try_into().ok()?),
		Type::Uint4 => Value::Uint4(integral(&n)?.try_into().ok()?),
		Type::Uint8 => Value::Uint8(integral(&n)?.try_into().ok()?),
		Type::Float4 => {
			let f = float(&n)?;
			let narrowed = f as f32;
			if f.is_finite() && !narrowed.is_finite() {
				return None;
			}
			Value::Float4(narrowed)
		}
		Type::Float8 => Value::Float8(float(&n)?),
		Type::Decimal => Value::Decimal(Decimal::new(match n {
			Numeric::Int(i) => BigDecimal::from(i),
			Numeric::Float(f) => BigDecimal::from_f64(f)?,
			Numeric::Decimal(d) => d,
		})),
		_ => return None,
	})
}

/// Converts a constant only when the target represents it exactly: the
/// converted value must convert back to an equal value of the source kind.
pub fn narrow(value: &Value, source: &Type, target: &Type) -> Option<Value> {
	let converted = convert(value, target)?;
	let back = convert(&converted, source)?;
	equals(&back, value).then_some(converted)
}
