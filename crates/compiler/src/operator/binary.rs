// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use reckon_type::{
	Error, Type, Value,
	error::diagnostic::evaluate::{arithmetic_overflow, division_by_zero, unexpected_value},
	internal_err,
	value::{
		compare, equals,
		number::{SafeAdd, SafeDiv, SafeMul, SafeRemainder, SafeSub},
	},
};

use super::BinaryOp;
use crate::fold::Invoker;

/// Invoker evaluating `op` over operands of the given (adjusted) types.
pub fn invoker(op: BinaryOp, left: Type, right: Type) -> Invoker {
	Arc::new(move |args: &[Value]| match args {
		[l, r] => evaluate(op, &left, &right, l, r),
		_ => internal_err!("binary operator {} invoked with {} operands", op, args.len()),
	})
}

pub fn evaluate(op: BinaryOp, left: &Type, right: &Type, l: &Value, r: &Value) -> crate::Result<Value> {
	match op {
		BinaryOp::And | BinaryOp::Or | BinaryOp::Xor => logical(op, l, r),
		BinaryOp::Eq => Ok(Value::Boolean(equals(l, r))),
		BinaryOp::Ne => Ok(Value::Boolean(!equals(l, r))),
		BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => Ok(Value::Boolean(ordering(op, left, l, r))),
		_ => arithmetic(op, left, right, l, r),
	}
}

fn ordering(op: BinaryOp, ty: &Type, l: &Value, r: &Value) -> bool {
	// absent text orders first; every other absent operand compares false
	if !ty.is_utf8() && (l.is_none() || r.is_none()) {
		return false;
	}
	let Some(ordering) = compare(l, r) else {
		return false;
	};
	match op {
		BinaryOp::Lt => ordering.is_lt(),
		BinaryOp::Le => ordering.is_le(),
		BinaryOp::Gt => ordering.is_gt(),
		BinaryOp::Ge => ordering.is_ge(),
		_ => false,
	}
}

fn logical(op: BinaryOp, l: &Value, r: &Value) -> crate::Result<Value> {
	let (l, r) = (l.as_bool(), r.as_bool());
	Ok(match op {
		BinaryOp::And => match (l, r) {
			(Some(false), _) | (_, Some(false)) => Value::Boolean(false),
			(Some(true), Some(true)) => Value::Boolean(true),
			_ => Value::None,
		},
		BinaryOp::Or => match (l, r) {
			(Some(true), _) | (_, Some(true)) => Value::Boolean(true),
			(Some(false), Some(false)) => Value::Boolean(false),
			_ => Value::None,
		},
		BinaryOp::Xor => match (l, r) {
			(Some(l), Some(r)) => Value::Boolean(l ^ r),
			_ => Value::None,
		},
		_ => return internal_err!("{} is not a logical operator", op),
	})
}

macro_rules! integer {
	($op:expr, $ty:expr, $l:expr, $r:expr, $variant:ident) => {{
		let (l, r) = ($l, $r);
		let result = match $op {
			BinaryOp::Add => SafeAdd::checked_add(l, r),
			BinaryOp::Sub => SafeSub::checked_sub(l, r),
			BinaryOp::Mul => SafeMul::checked_mul(l, r),
			BinaryOp::Div | BinaryOp::Rem if *r == 0 => return Err(Error(division_by_zero())),
			BinaryOp::Div => SafeDiv::checked_div(l, r),
			BinaryOp::Rem => SafeRemainder::checked_rem(l, r),
			BinaryOp::BitAnd => Some(*l & *r),
			BinaryOp::BitOr => Some(*l | *r),
			BinaryOp::BitXor => Some(*l ^ *r),
			_ => return internal_err!("{} is not an integer operator", $op),
		};
		result.map(Value::$variant).ok_or_else(|| Error(arithmetic_overflow($op.symbol(), $ty)))
	}};
}

macro_rules! float {
	($op:expr, $ty:expr, $l:expr, $r:expr, $variant:ident) => {{
		let (l, r) = ($l, $r);
		let result = match $op {
			BinaryOp::Add => SafeAdd::checked_add(l, r),
			BinaryOp::Sub => SafeSub::checked_sub(l, r),
			BinaryOp::Mul => SafeMul::checked_mul(l, r),
			BinaryOp::Div => SafeDiv::checked_div(l, r),
			BinaryOp::Rem => SafeRemainder::checked_rem(l, r),
			_ => return internal_err!("{} is not a floating point operator", $op),
		};
		result.map(Value::$variant).ok_or_else(|| Error(arithmetic_overflow($op.symbol(), $ty)))
	}};
}

fn arithmetic(op: BinaryOp, left: &Type, right: &Type, l: &Value, r: &Value) -> crate::Result<Value> {
	let ty = left.strip_nullable();

	if ty.is_utf8() {
		if op != BinaryOp::Add {
			return internal_err!("{} is not a text operator", op);
		}
		let mut result = String::from(l.as_str().unwrap_or(""));
		result.push_str(r.as_str().unwrap_or(""));
		return Ok(Value::utf8(result));
	}

	if l.is_none() || r.is_none() {
		return Ok(Value::None);
	}

	let overflow = || Error(arithmetic_overflow(op.symbol(), ty));

	match (l, r) {
		(Value::Int1(l), Value::Int1(r)) => integer!(op, ty, l, r, Int1),
		(Value::Int2(l), Value::Int2(r)) => integer!(op, ty, l, r, Int2),
		(Value::Int4(l), Value::Int4(r)) => integer!(op, ty, l, r, Int4),
		(Value::Int8(l), Value::Int8(r)) => integer!(op, ty, l, r, Int8),
		(Value::Uint1(l), Value::Uint1(r)) => integer!(op, ty, l, r, Uint1),
		(Value::Uint2(l), Value::Uint2(r)) => integer!(op, ty, l, r, Uint2),
		(Value::Uint4(l), Value::Uint4(r)) => integer!(op, ty, l, r, Uint4),
		(Value::Uint8(l), Value::Uint8(r)) => integer!(op, ty, l, r, Uint8),
		(Value::Float4(l), Value::Float4(r)) => float!(op, ty, l, r, Float4),
		(Value::Float8(l), Value::Float8(r)) => float!(op, ty, l, r, Float8),
		(Value::Decimal(l), Value::Decimal(r)) => {
			let result = match op {
				BinaryOp::Add => l.checked_add(r),
				BinaryOp::Sub => l.checked_sub(r),
				BinaryOp::Mul => l.checked_mul(r),
				BinaryOp::Div | BinaryOp::Rem if r.is_zero() => return Err(Error(division_by_zero())),
				BinaryOp::Div => l.checked_div(r),
				BinaryOp::Rem => l.checked_rem(r),
				_ => return internal_err!("{} is not a decimal operator", op),
			};
			result.map(Value::Decimal).ok_or_else(overflow)
		}
		(Value::DateTime(l), Value::DateTime(r)) if op == BinaryOp::Sub => {
			Ok(Value::Interval(l.signed_duration_since(*r)))
		}
		(Value::DateTimeOffset(l), Value::DateTimeOffset(r)) if op == BinaryOp::Sub => {
			Ok(Value::Interval(l.signed_duration_since(*r)))
		}
		(Value::DateTime(l), Value::Interval(r)) => {
			let result = match op {
				BinaryOp::Add => l.checked_add_signed(*r),
				BinaryOp::Sub => l.checked_sub_signed(*r),
				_ => return internal_err!("{} is not a date time operator", op),
			};
			result.map(Value::DateTime).ok_or_else(overflow)
		}
		(Value::DateTimeOffset(l), Value::Interval(r)) => {
			let result = match op {
				BinaryOp::Add => l.checked_add_signed(*r),
				BinaryOp::Sub => l.checked_sub_signed(*r),
				_ => return internal_err!("{} is not a date time operator", op),
			};
			result.map(Value::DateTimeOffset).ok_or_else(overflow)
		}
		(Value::Interval(l), Value::DateTime(r)) if op == BinaryOp::Add => {
			r.checked_add_signed(*l).map(Value::DateTime).ok_or_else(|| Error(arithmetic_overflow(op.symbol(), right.strip_nullable())))
		}
		(Value::Interval(l), Value::DateTimeOffset(r)) if op == BinaryOp::Add => r
			.checked_add_signed(*l)
			.map(Value::DateTimeOffset)
			.ok_or_else(|| Error(arithmetic_overflow(op.symbol(), right.strip_nullable()))),
		(Value::Interval(l), Value::Interval(r)) => {
			let result = match op {
				BinaryOp::Add => l.checked_add(r),
				BinaryOp::Sub => l.checked_sub(r),
				_ => return internal_err!("{} is not an interval operator", op),
			};
			result.map(Value::Interval).ok_or_else(overflow)
		}
		_ => Err(Error(unexpected_value(ty, format!("{} {} {}", l.kind(), op, r.kind())))),
	}
}
