// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The typed expression tree produced by the analyzer. Nodes are immutable
//! values; every node carries exactly one semantic type.

pub mod reduce;

use std::sync::Arc;

use reckon_type::{Type, Value};

use crate::{
	atom::NativeCallable,
	member::Member,
	operator::{BinaryOp, UnaryOp},
};

#[derive(Debug, Clone)]
pub struct Expr {
	pub kind: ExprKind,
	pub ty: Type,
}

#[derive(Debug, Clone)]
pub enum ExprKind {
	Constant(Value),
	/// Positional parameter slot
	Variable(usize),
	Member {
		base: Box<Expr>,
		member: Member,
	},
	Call {
		callable: Arc<dyn NativeCallable>,
		args: Vec<Expr>,
	},
	Conditional {
		condition: Box<Expr>,
		then: Box<Expr>,
		otherwise: Box<Expr>,
	},
	/// Multi-way branch on constant keys
	Switch {
		key: Box<Expr>,
		cases: Vec<SwitchCase>,
		default: Box<Expr>,
	},
	Binary {
		op: BinaryOp,
		left: Box<Expr>,
		right: Box<Expr>,
	},
	Unary {
		op: UnaryOp,
		operand: Box<Expr>,
	},
}

#[derive(Debug, Clone)]
pub struct SwitchCase {
	pub keys: Vec<Value>,
	pub body: Expr,
}

impl Expr {
	pub fn new(kind: ExprKind, ty: Type) -> Self {
		Self {
			kind,
			ty,
		}
	}

	pub fn constant(value: Value, ty: Type) -> Self {
		Self::new(ExprKind::Constant(value), ty)
	}

	pub fn boolean(value: bool) -> Self {
		Self::constant(Value::Boolean(value), Type::Boolean)
	}

	/// The void constant of a NULL literal
	pub fn void() -> Self {
		Self::constant(Value::None, Type::Void)
	}

	/// The default value of `ty` as a constant.
	pub fn default_of(ty: &Type) -> Self {
		Self::constant(Value::default_of(ty), ty.clone())
	}

	pub fn variable(slot: usize, ty: Type) -> Self {
		Self::new(ExprKind::Variable(slot), ty)
	}

	pub fn unary(op: UnaryOp, operand: Expr, ty: Type) -> Self {
		Self::new(
			ExprKind::Unary {
				op,
				operand: Box::new(operand),
			},
			ty,
		)
	}

	pub fn binary(op: BinaryOp, left: Expr, right: Expr, ty: Type) -> Self {
		Self::new(
			ExprKind::Binary {
				op,
				left: Box::new(left),
				right: Box::new(right),
			},
			ty,
		)
	}

	pub fn conditional(condition: Expr, then: Expr, otherwise: Expr) -> Self {
		let ty = then.ty.clone();
		Self::new(
			ExprKind::Conditional {
				condition: Box::new(condition),
				then: Box::new(then),
				otherwise: Box::new(otherwise),
			},
			ty,
		)
	}

	pub fn is_constant(&self) -> bool {
		matches!(self.kind, ExprKind::Constant(_))
	}

	pub fn as_constant(&self) -> Option<&Value> {
		match &self.kind {
			ExprKind::Constant(value) => Some(value),
			_ => None,
		}
	}

	pub fn is_void(&self) -> bool {
		self.ty.is_void()
	}

	/// The constant boolean this node folded to, if any.
	pub fn as_bool_constant(&self) -> Option<bool> {
		self.as_constant().and_then(Value::as_bool)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_conditional_takes_branch_type() {
		let expr = Expr::conditional(
			Expr::variable(0, Type::Boolean),
			Expr::constant(Value::Int4(1), Type::Int4),
			Expr::constant(Value::Int4(2), Type::Int4),
		);
		assert_eq!(expr.ty, Type::Int4);
		assert!(!expr.is_constant());
	}

	#[test]
	fn test_constants() {
		assert_eq!(Expr::boolean(true).as_bool_constant(), Some(true));
		assert!(Expr::void().is_void());
		assert_eq!(Expr::default_of(&Type::Int8).as_constant(), Some(&Value::Int8(0)));
		assert_eq!(Expr::default_of(&Type::Utf8).as_constant(), Some(&Value::None));
	}
}
