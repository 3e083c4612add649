// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Constant folding. Every operation the analyzer assembles goes through the
//! folder: when all operands are constants it is evaluated immediately and a
//! constant node takes its place, otherwise the run-time node is built.

mod cache;

use std::sync::Arc;

pub use cache::{FoldCache, Invoker, Operation};
use reckon_type::{Error, Fragment, Type, Value, error::diagnostic::evaluate::fold_failed};

use crate::{
	atom::NativeCallable,
	expression::{Expr, ExprKind},
	member::Member,
	operator::{BinaryOp, UnaryOp, binary, unary},
};

pub struct Folder<'a> {
	cache: &'a FoldCache,
}

impl<'a> Folder<'a> {
	pub fn new(cache: &'a FoldCache) -> Self {
		Self {
			cache,
		}
	}

	pub fn cache(&self) -> &'a FoldCache {
		self.cache
	}

	pub fn binary_invoker(&self, op: BinaryOp, left: &Type, right: &Type) -> Invoker {
		self.cache.get_or_create(Operation::Binary(op), &[left.clone(), right.clone()], || {
			binary::invoker(op, left.clone(), right.clone())
		})
	}

	pub fn unary_invoker(&self, op: &UnaryOp, operand: &Type) -> Invoker {
		self.cache.get_or_create(Operation::Unary(op.clone()), std::slice::from_ref(operand), || {
			unary::invoker(op.clone(), operand.clone())
		})
	}

	/// Object types compare by name only, so their members bypass the cache;
	/// two host types sharing a name must not share a reader.
	pub fn member_invoker(&self, owner: &Type, member: &Member) -> Invoker {
		let reader = || -> Invoker {
			let member = member.clone();
			Arc::new(move |args: &[Value]| member.read(args.first().unwrap_or(&Value::None)))
		};
		if owner.is_object() {
			return reader();
		}
		self.cache.get_or_create(Operation::Member(member.name().to_lowercase()), std::slice::from_ref(owner), reader)
	}

	pub fn binary(&self, op: BinaryOp, left: Expr, right: Expr, ty: Type) -> crate::Result<Expr> {
		if let (Some(l), Some(r)) = (left.as_constant(), right.as_constant()) {
			let invoker = self.binary_invoker(op, &left.ty, &right.ty);
			let value = invoker(&[l.clone(), r.clone()]).map_err(failed)?;
			return Ok(Expr::constant(value, ty));
		}
		Ok(Expr::binary(op, left, right, ty))
	}

	pub fn unary(&self, op: UnaryOp, operand: Expr, ty: Type) -> crate::Result<Expr> {
		if let Some(value) = operand.as_constant() {
			let invoker = self.unary_invoker(&op, &operand.ty);
			let value = invoker(std::slice::from_ref(value)).map_err(failed)?;
			return Ok(Expr::constant(value, ty));
		}
		Ok(Expr::unary(op, operand, ty))
	}

	pub fn member(&self, base: Expr, member: Member) -> crate::Result<Expr> {
		let ty = member.ty().clone();
		if let Some(value) = base.as_constant() {
			let invoker = self.member_invoker(&base.ty, &member);
			let value = invoker(std::slice::from_ref(value)).map_err(failed)?;
			return Ok(Expr::constant(value, ty));
		}
		Ok(Expr::new(
			ExprKind::Member {
				base: Box::new(base),
				member,
			},
			ty,
		))
	}

	/// Deterministic callables with constant arguments run exactly once,
	/// here.
	pub fn call(&self, callable: Arc<dyn NativeCallable>, args: Vec<Expr>) -> crate::Result<Expr> {
		let ty = callable.signature().returns.clone();
		if callable.is_deterministic() && args.iter().all(Expr::is_constant) {
			let values: Vec<Value> = args.iter().filter_map(|a| a.as_constant().cloned()).collect();
			let value = callable.invoke(&values).map_err(failed)?;
			return Ok(Expr::constant(value, ty));
		}
		Ok(Expr::new(
			ExprKind::Call {
				callable,
				args,
			},
			ty,
		))
	}

	/// A constant condition selects its branch.
	pub fn conditional(&self, condition: Expr, then: Expr, otherwise: Expr) -> Expr {
		match condition.as_bool_constant() {
			Some(true) => then,
			Some(false) => otherwise,
			None => Expr::conditional(condition, then, otherwise),
		}
	}
}

/// Wraps an evaluation failure during folding into a compile error; the
/// analyzer attaches the node location on the way out.
fn failed(err: Error) -> Error {
	if err.is_internal() {
		return err;
	}
	Error(fold_failed(Fragment::None, err.diagnostic()))
}
