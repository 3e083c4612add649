// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Operator kinds, operand-category resolution and run-time evaluation.

pub mod binary;
pub mod unary;

use std::fmt::{Display, Formatter};

use reckon_type::{Type, value::number::promote};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
	Add,
	Sub,
	Mul,
	Div,
	Rem,
	Eq,
	Ne,
	Lt,
	Le,
	Gt,
	Ge,
	And,
	Or,
	Xor,
	BitAnd,
	BitOr,
	BitXor,
}

impl BinaryOp {
	pub fn from_symbol(symbol: &str) -> Option<Self> {
		Some(match symbol.to_ascii_lowercase().as_str() {
			"+" => BinaryOp::Add,
			"-" => BinaryOp::Sub,
			"*" => BinaryOp::Mul,
			"/" => BinaryOp::Div,
			"%" => BinaryOp::Rem,
			"=" | "==" => BinaryOp::Eq,
			"<>" | "!=" => BinaryOp::Ne,
			"<" => BinaryOp::Lt,
			"<=" => BinaryOp::Le,
			">" => BinaryOp::Gt,
			">=" => BinaryOp::Ge,
			"and" | "&&" => BinaryOp::And,
			"or" | "||" => BinaryOp::Or,
			"xor" => BinaryOp::Xor,
			"&" => BinaryOp::BitAnd,
			"|" => BinaryOp::BitOr,
			"^" => BinaryOp::BitXor,
			_ => return None,
		})
	}

	pub fn symbol(&self) -> &'static str {
		match self {
			BinaryOp::Add => "+",
			BinaryOp::Sub => "-",
			BinaryOp::Mul => "*",
			BinaryOp::Div => "/",
			BinaryOp::Rem => "%",
			BinaryOp::Eq => "=",
			BinaryOp::Ne => "<>",
			BinaryOp::Lt => "<",
			BinaryOp::Le => "<=",
			BinaryOp::Gt => ">",
			BinaryOp::Ge => ">=",
			BinaryOp::And => "AND",
			BinaryOp::Or => "OR",
			BinaryOp::Xor => "XOR",
			BinaryOp::BitAnd => "&",
			BinaryOp::BitOr => "|",
			BinaryOp::BitXor => "^",
		}
	}

	pub fn is_equality(&self) -> bool {
		matches!(self, BinaryOp::Eq | BinaryOp::Ne)
	}

	pub fn is_ordering(&self) -> bool {
		matches!(self, BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge)
	}

	pub fn is_comparison(&self) -> bool {
		self.is_equality() || self.is_ordering()
	}

	pub fn is_logical(&self) -> bool {
		matches!(self, BinaryOp::And | BinaryOp::Or | BinaryOp::Xor)
	}

	pub fn is_arithmetic(&self) -> bool {
		matches!(self, BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem)
	}

	pub fn is_bitwise(&self) -> bool {
		matches!(self, BinaryOp::BitAnd | BinaryOp::BitOr | BinaryOp::BitXor)
	}
}

impl Display for BinaryOp {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.symbol())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOp {
	Negate,
	Plus,
	Not,
	BitNot,
	/// True when the operand holds no value
	IsNull,
	/// True when the operand holds a value
	HasValue,
	/// Presence-checked read of a nullable's value
	Unwrap,
	/// Value to present nullable
	Wrap,
	/// Numeric conversion to the given kind
	Convert(Type),
}

impl UnaryOp {
	pub fn from_symbol(symbol: &str) -> Option<Self> {
		Some(match symbol.to_ascii_lowercase().as_str() {
			"-" => UnaryOp::Negate,
			"+" => UnaryOp::Plus,
			"not" | "!" => UnaryOp::Not,
			"~" => UnaryOp::BitNot,
			_ => return None,
		})
	}

	pub fn symbol(&self) -> &'static str {
		match self {
			UnaryOp::Negate => "-",
			UnaryOp::Plus => "+",
			UnaryOp::Not => "NOT",
			UnaryOp::BitNot => "~",
			UnaryOp::IsNull => "IS NULL",
			UnaryOp::HasValue => "IS NOT NULL",
			UnaryOp::Unwrap => "unwrap",
			UnaryOp::Wrap => "wrap",
			UnaryOp::Convert(_) => "convert",
		}
	}
}

/// Operand category of a binary operation, tried in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub enum Category {
	/// Two date times of one kind, or two intervals
	Temporal(Type),
	/// A date time and an interval
	DateInterval(Type),
	/// An interval and a date time
	IntervalDate(Type),
	Text,
	/// Two numbers, widened to the promoted kind
	Numeric(Type),
	Boolean,
	Uuid,
}

/// Resolves the category of two operand types, nullability stripped.
pub fn categorize(left: &Type, right: &Type) -> Option<Category> {
	let (l, r) = (left.strip_nullable(), right.strip_nullable());
	if l == r && (l.is_datetime() || l.is_interval()) {
		return Some(Category::Temporal(l.clone()));
	}
	if l.is_datetime() && r.is_interval() {
		return Some(Category::DateInterval(l.clone()));
	}
	if l.is_interval() && r.is_datetime() {
		return Some(Category::IntervalDate(r.clone()));
	}
	if l.is_utf8() && r.is_utf8() {
		return Some(Category::Text);
	}
	if let Some(promoted) = promote(l, r) {
		return Some(Category::Numeric(promoted));
	}
	if l.is_bool() && r.is_bool() {
		return Some(Category::Boolean);
	}
	if l.is_uuid() && r.is_uuid() {
		return Some(Category::Uuid);
	}
	None
}

/// Operand and result types of a binary operation within its category,
/// before nullable lifting.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryPlan {
	pub left: Type,
	pub right: Type,
	pub result: Type,
}

impl BinaryPlan {
	fn uniform(operand: Type, result: Type) -> Self {
		Self {
			left: operand.clone(),
			right: operand,
			result,
		}
	}
}

/// Plans `op` over a resolved category; `None` when the operator is not
/// legal within it.
pub fn plan(op: BinaryOp, category: &Category) -> Option<BinaryPlan> {
	use BinaryOp::*;

	match category {
		Category::Temporal(ty) => match op {
			_ if op.is_comparison() => Some(BinaryPlan::uniform(ty.clone(), Type::Boolean)),
			Sub => Some(BinaryPlan::uniform(ty.clone(), Type::Interval)),
			Add if ty.is_interval() => Some(BinaryPlan::uniform(Type::Interval, Type::Interval)),
			_ => None,
		},
		Category::DateInterval(ty) => match op {
			Add | Sub => Some(BinaryPlan {
				left: ty.clone(),
				right: Type::Interval,
				result: ty.clone(),
			}),
			_ => None,
		},
		Category::IntervalDate(ty) => match op {
			Add => Some(BinaryPlan {
				left: Type::Interval,
				right: ty.clone(),
				result: ty.clone(),
			}),
			_ => None,
		},
		Category::Text => match op {
			_ if op.is_comparison() => Some(BinaryPlan::uniform(Type::Utf8, Type::Boolean)),
			Add => Some(BinaryPlan::uniform(Type::Utf8, Type::Utf8)),
			_ => None,
		},
		Category::Numeric(ty) => match op {
			_ if op.is_comparison() => Some(BinaryPlan::uniform(ty.clone(), Type::Boolean)),
			_ if op.is_arithmetic() => Some(BinaryPlan::uniform(ty.clone(), ty.clone())),
			_ if op.is_bitwise() && ty.is_integer() => Some(BinaryPlan::uniform(ty.clone(), ty.clone())),
			_ => None,
		},
		// false orders before true
		Category::Boolean => match op {
			And | Or | Xor => Some(BinaryPlan::uniform(Type::Boolean, Type::Boolean)),
			_ if op.is_comparison() => Some(BinaryPlan::uniform(Type::Boolean, Type::Boolean)),
			_ => None,
		},
		Category::Uuid => match op {
			_ if op.is_comparison() => Some(BinaryPlan::uniform(Type::Uuid, Type::Boolean)),
			_ => None,
		},
	}
}

/// Result type after nullable lifting: comparisons stay Boolean, everything
/// else becomes nullable when an operand is nullable.
pub fn lift(op: BinaryOp, result: Type, nullable: bool) -> Type {
	if nullable && !op.is_comparison() {
		Type::nullable(result)
	} else {
		result
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_symbols_round_trip() {
		for op in [BinaryOp::Add, BinaryOp::Ne, BinaryOp::Ge, BinaryOp::And, BinaryOp::BitXor] {
			assert_eq!(BinaryOp::from_symbol(op.symbol()), Some(op));
		}
		assert_eq!(BinaryOp::from_symbol("!="), Some(BinaryOp::Ne));
		assert_eq!(UnaryOp::from_symbol("NOT"), Some(UnaryOp::Not));
		assert_eq!(BinaryOp::from_symbol("**"), None);
	}

	#[test]
	fn test_temporal_before_numeric() {
		assert_eq!(categorize(&Type::DateTime, &Type::DateTime), Some(Category::Temporal(Type::DateTime)));
		assert_eq!(
			categorize(&Type::DateTimeOffset, &Type::Interval),
			Some(Category::DateInterval(Type::DateTimeOffset))
		);
		assert_eq!(categorize(&Type::Interval, &Type::DateTime), Some(Category::IntervalDate(Type::DateTime)));
	}

	#[test]
	fn test_nullable_operands_categorize_on_inner_type() {
		assert_eq!(
			categorize(&Type::nullable(Type::Int4), &Type::Int8),
			Some(Category::Numeric(Type::Int8))
		);
	}

	#[test]
	fn test_mixed_datetime_kinds_do_not_mix() {
		assert_eq!(categorize(&Type::DateTime, &Type::DateTimeOffset), None);
		assert_eq!(categorize(&Type::Utf8, &Type::Int4), None);
		assert_eq!(categorize(&Type::Float8, &Type::Decimal), None);
	}

	#[test]
	fn test_plan_datetime_difference() {
		let plan = plan(BinaryOp::Sub, &Category::Temporal(Type::DateTime)).unwrap();
		assert_eq!(plan.result, Type::Interval);
		assert!(super::plan(BinaryOp::Add, &Category::Temporal(Type::DateTime)).is_none());
	}

	#[test]
	fn test_plan_orders_booleans_and_uuids() {
		for category in [Category::Boolean, Category::Uuid] {
			let plan = plan(BinaryOp::Ge, &category).unwrap();
			assert_eq!(plan.result, Type::Boolean);
			assert!(super::plan(BinaryOp::Add, &category).is_none());
		}
	}

	#[test]
	fn test_plan_interval_plus_date() {
		let plan = plan(BinaryOp::Add, &Category::IntervalDate(Type::DateTime)).unwrap();
		assert_eq!(plan.left, Type::Interval);
		assert_eq!(plan.right, Type::DateTime);
		assert_eq!(plan.result, Type::DateTime);
		assert!(super::plan(BinaryOp::Sub, &Category::IntervalDate(Type::DateTime)).is_none());
	}

	#[test]
	fn test_plan_bitwise_requires_integers() {
		assert!(plan(BinaryOp::BitAnd, &Category::Numeric(Type::Int4)).is_some());
		assert!(plan(BinaryOp::BitAnd, &Category::Numeric(Type::Float8)).is_none());
	}

	#[test]
	fn test_plan_text() {
		assert_eq!(plan(BinaryOp::Add, &Category::Text).unwrap().result, Type::Utf8);
		assert!(plan(BinaryOp::Mul, &Category::Text).is_none());
	}

	#[test]
	fn test_lift() {
		assert_eq!(lift(BinaryOp::Add, Type::Int4, true), Type::nullable(Type::Int4));
		assert_eq!(lift(BinaryOp::Lt, Type::Boolean, true), Type::Boolean);
		assert_eq!(lift(BinaryOp::And, Type::Boolean, true), Type::nullable(Type::Boolean));
		assert_eq!(lift(BinaryOp::Add, Type::Utf8, true), Type::Utf8);
	}
}
