// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use reckon_type::{
	Error, Type, Value,
	error::diagnostic::{
		cast::conversion_failed,
		evaluate::{arithmetic_overflow, missing_value, unexpected_value},
	},
	internal_err,
	value::number::{SafeNeg, convert, next_signed},
};

use super::UnaryOp;
use crate::fold::Invoker;

/// Operand kind a source-level unary operator works on, nullability
/// stripped; also its result kind. `None` when the operator does not apply.
pub fn plan(op: &UnaryOp, operand: &Type) -> Option<Type> {
	let ty = operand.strip_nullable();
	match op {
		UnaryOp::Negate if ty.is_unsigned_integer() => ty.size().map(next_signed),
		UnaryOp::Negate | UnaryOp::Plus if ty.is_number() || ty.is_interval() => Some(ty.clone()),
		UnaryOp::Not if ty.is_bool() => Some(Type::Boolean),
		UnaryOp::BitNot if ty.is_integer() => Some(ty.clone()),
		_ => None,
	}
}

pub fn invoker(op: UnaryOp, operand: Type) -> Invoker {
	Arc::new(move |args: &[Value]| match args {
		[value] => evaluate(&op, &operand, value),
		_ => internal_err!("unary operator {} invoked with {} operands", op.symbol(), args.len()),
	})
}

pub fn evaluate(op: &UnaryOp, operand: &Type, value: &Value) -> crate::Result<Value> {
	match op {
		UnaryOp::IsNull => return Ok(Value::Boolean(value.is_none())),
		UnaryOp::HasValue => return Ok(Value::Boolean(value.is_some())),
		UnaryOp::Unwrap if value.is_none() => return Err(Error(missing_value(operand.strip_nullable()))),
		UnaryOp::Unwrap | UnaryOp::Wrap | UnaryOp::Plus => return Ok(value.clone()),
		_ => {}
	}

	if value.is_none() {
		return Ok(Value::None);
	}

	match op {
		UnaryOp::Negate => negate(operand, value),
		UnaryOp::Not => match value {
			Value::Boolean(b) => Ok(Value::Boolean(!b)),
			_ => Err(Error(unexpected_value(&Type::Boolean, value.kind().to_string()))),
		},
		UnaryOp::BitNot => match value {
			Value::Int1(v) => Ok(Value::Int1(!v)),
			Value::Int2(v) => Ok(Value::Int2(!v)),
			Value::Int4(v) => Ok(Value::Int4(!v)),
			Value::Int8(v) => Ok(Value::Int8(!v)),
			Value::Uint1(v) => Ok(Value::Uint1(!v)),
			Value::Uint2(v) => Ok(Value::Uint2(!v)),
			Value::Uint4(v) => Ok(Value::Uint4(!v)),
			Value::Uint8(v) => Ok(Value::Uint8(!v)),
			_ => Err(Error(unexpected_value(operand.strip_nullable(), value.kind().to_string()))),
		},
		UnaryOp::Convert(target) => convert(value, target).ok_or_else(|| {
			Error(conversion_failed(operand.strip_nullable(), target, value.to_string()))
		}),
		_ => internal_err!("unexpected unary operator {}", op.symbol()),
	}
}

fn negate(operand: &Type, value: &Value) -> crate::Result<Value> {
	let ty = operand.strip_nullable();
	let overflow = || Error(arithmetic_overflow("-", ty));
	match value {
		Value::Int1(v) => v.checked_neg().map(Value::Int1).ok_or_else(overflow),
		Value::Int2(v) => v.checked_neg().map(Value::Int2).ok_or_else(overflow),
		Value::Int4(v) => v.checked_neg().map(Value::Int4).ok_or_else(overflow),
		Value::Int8(v) => v.checked_neg().map(Value::Int8).ok_or_else(overflow),
		Value::Float4(v) => Ok(Value::Float4(-v)),
		Value::Float8(v) => Ok(Value::Float8(-v)),
		Value::Decimal(v) => SafeNeg::checked_neg(v).map(Value::Decimal).ok_or_else(overflow),
		Value::Interval(v) => v.checked_mul(-1).map(Value::Interval).ok_or_else(overflow),
		_ => Err(Error(unexpected_value(ty, value.kind().to_string()))),
	}
}

#[cfg(test)]
mod tests {
	use chrono::TimeDelta;

	use super::*;

	#[test]
	fn test_plan_negate_widens_unsigned() {
		assert_eq!(plan(&UnaryOp::Negate, &Type::Uint1), Some(Type::Int2));
		assert_eq!(plan(&UnaryOp::Negate, &Type::Uint4), Some(Type::Int8));
		assert_eq!(plan(&UnaryOp::Negate, &Type::Uint8), Some(Type::Decimal));
		assert_eq!(plan(&UnaryOp::Negate, &Type::nullable(Type::Int4)), Some(Type::Int4));
		assert_eq!(plan(&UnaryOp::Negate, &Type::Utf8), None);
	}

	#[test]
	fn test_plan_not_and_bitnot() {
		assert_eq!(plan(&UnaryOp::Not, &Type::Boolean), Some(Type::Boolean));
		assert_eq!(plan(&UnaryOp::Not, &Type::Int4), None);
		assert_eq!(plan(&UnaryOp::BitNot, &Type::Float8), None);
	}

	#[test]
	fn test_negate() {
		assert_eq!(evaluate(&UnaryOp::Negate, &Type::Int4, &Value::Int4(5)).unwrap(), Value::Int4(-5));
		assert_eq!(
			evaluate(&UnaryOp::Negate, &Type::Interval, &Value::Interval(TimeDelta::hours(2))).unwrap(),
			Value::Interval(TimeDelta::hours(-2))
		);
		let err = evaluate(&UnaryOp::Negate, &Type::Int1, &Value::Int1(i8::MIN)).unwrap_err();
		assert_eq!(err.code, "EVAL_001");
	}

	#[test]
	fn test_not_propagates_absence() {
		let ty = Type::nullable(Type::Boolean);
		assert_eq!(evaluate(&UnaryOp::Not, &ty, &Value::None).unwrap(), Value::None);
		assert_eq!(evaluate(&UnaryOp::Not, &ty, &Value::Boolean(true)).unwrap(), Value::Boolean(false));
	}

	#[test]
	fn test_presence() {
		let ty = Type::nullable(Type::Int4);
		assert_eq!(evaluate(&UnaryOp::IsNull, &ty, &Value::None).unwrap(), Value::Boolean(true));
		assert_eq!(evaluate(&UnaryOp::HasValue, &ty, &Value::Int4(1)).unwrap(), Value::Boolean(true));
		assert_eq!(evaluate(&UnaryOp::Unwrap, &ty, &Value::Int4(1)).unwrap(), Value::Int4(1));
		assert_eq!(evaluate(&UnaryOp::Unwrap, &ty, &Value::None).unwrap_err().code, "EVAL_004");
	}

	#[test]
	fn test_convert() {
		let op = UnaryOp::Convert(Type::Int8);
		assert_eq!(evaluate(&op, &Type::Uint4, &Value::Uint4(7)).unwrap(), Value::Int8(7));
		let op = UnaryOp::Convert(Type::Uint1);
		assert_eq!(evaluate(&op, &Type::Int4, &Value::Int4(-1)).unwrap_err().code, "CAST_003");
	}
}
