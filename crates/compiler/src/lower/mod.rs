// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Lowering of typed expressions into nested native closures.
//!
//! Each node becomes one closure capturing its children and every piece of
//! static information (constants, invokers, switch tables), so evaluation
//! needs nothing but the positional arguments.

use std::{collections::HashMap, sync::Arc};

use reckon_type::{Value, ValueKey, internal_err};
use smallvec::SmallVec;
use tracing::instrument;

use crate::{
	atom::NativeCallable,
	expression::{Expr, ExprKind, SwitchCase},
	fold::Folder,
	member::Member,
	operator::{BinaryOp, UnaryOp},
};

type EvalFn = dyn Fn(&[Value]) -> crate::Result<Value> + Send + Sync;

/// A lowered expression, immutable and safe to share across threads.
#[derive(Clone)]
pub struct CompiledExpr(Arc<EvalFn>);

impl CompiledExpr {
	pub fn new(f: impl Fn(&[Value]) -> crate::Result<Value> + Send + Sync + 'static) -> Self {
		Self(Arc::new(f))
	}

	pub fn execute(&self, args: &[Value]) -> crate::Result<Value> {
		(self.0)(args)
	}
}

#[instrument(name = "lower", level = "trace", skip_all)]
pub fn lower(folder: &Folder<'_>, expr: Expr) -> CompiledExpr {
	lower_expr(folder, expr)
}

fn lower_expr(folder: &Folder<'_>, expr: Expr) -> CompiledExpr {
	let Expr {
		kind,
		ty,
	} = expr;

	match kind {
		ExprKind::Constant(value) => lower_constant(value),
		ExprKind::Variable(slot) => lower_variable(slot),
		ExprKind::Member {
			base,
			member,
		} => lower_member(folder, *base, member),
		ExprKind::Call {
			callable,
			args,
		} => lower_call(folder, callable, args),
		ExprKind::Conditional {
			condition,
			then,
			otherwise,
		} => lower_conditional(folder, *condition, *then, *otherwise),
		ExprKind::Switch {
			key,
			cases,
			default,
		} => lower_switch(folder, *key, cases, *default),
		ExprKind::Binary {
			op,
			left,
			right,
		} if (op == BinaryOp::And || op == BinaryOp::Or) && !ty.is_nullable() => {
			lower_short_circuit(folder, op, *left, *right)
		}
		ExprKind::Binary {
			op,
			left,
			right,
		} => lower_binary(folder, op, *left, *right),
		ExprKind::Unary {
			op: UnaryOp::Wrap,
			operand,
		} => lower_expr(folder, *operand),
		ExprKind::Unary {
			op,
			operand,
		} => lower_unary(folder, op, *operand),
	}
}

// ─────────────────────────────────────────────────────────────────────────────
// Leaves
// ─────────────────────────────────────────────────────────────────────────────

fn lower_constant(value: Value) -> CompiledExpr {
	CompiledExpr::new(move |_| Ok(value.clone()))
}

fn lower_variable(slot: usize) -> CompiledExpr {
	CompiledExpr::new(move |args| match args.get(slot) {
		Some(value) => Ok(value.clone()),
		None => internal_err!("parameter slot {} out of range for {} arguments", slot, args.len()),
	})
}

// ─────────────────────────────────────────────────────────────────────────────
// Member access and calls
// ─────────────────────────────────────────────────────────────────────────────

fn lower_member(folder: &Folder<'_>, base: Expr, member: Member) -> CompiledExpr {
	let invoker = folder.member_invoker(&base.ty, &member);
	let base = lower_expr(folder, base);
	CompiledExpr::new(move |args| {
		let value = base.execute(args)?;
		invoker(std::slice::from_ref(&value))
	})
}

fn lower_call(folder: &Folder<'_>, callable: Arc<dyn NativeCallable>, args: Vec<Expr>) -> CompiledExpr {
	let compiled: Vec<CompiledExpr> = args.into_iter().map(|arg| lower_expr(folder, arg)).collect();
	CompiledExpr::new(move |args| {
		let values = compiled.iter().map(|arg| arg.execute(args)).collect::<crate::Result<SmallVec<[Value; 4]>>>()?;
		callable.invoke(&values)
	})
}

// ─────────────────────────────────────────────────────────────────────────────
// Branching
// ─────────────────────────────────────────────────────────────────────────────

fn lower_conditional(folder: &Folder<'_>, condition: Expr, then: Expr, otherwise: Expr) -> CompiledExpr {
	let condition = lower_expr(folder, condition);
	let then = lower_expr(folder, then);
	let otherwise = lower_expr(folder, otherwise);
	CompiledExpr::new(move |args| match condition.execute(args)? {
		Value::Boolean(true) => then.execute(args),
		_ => otherwise.execute(args),
	})
}

fn lower_switch(folder: &Folder<'_>, key: Expr, cases: Vec<SwitchCase>, default: Expr) -> CompiledExpr {
	let key = lower_expr(folder, key);
	let default = lower_expr(folder, default);

	let mut table: HashMap<ValueKey, usize> = HashMap::new();
	let mut bodies = Vec::with_capacity(cases.len());
	for case in cases {
		for value in &case.keys {
			if let Some(k) = ValueKey::of(value) {
				// the first WHEN listing a key wins
				table.entry(k).or_insert(bodies.len());
			}
		}
		bodies.push(lower_expr(folder, case.body));
	}

	CompiledExpr::new(move |args| {
		let value = key.execute(args)?;
		match ValueKey::of(&value).and_then(|k| table.get(&k)) {
			Some(&index) => bodies[index].execute(args),
			None => default.execute(args),
		}
	})
}

// ─────────────────────────────────────────────────────────────────────────────
// Operators
// ─────────────────────────────────────────────────────────────────────────────

fn lower_short_circuit(folder: &Folder<'_>, op: BinaryOp, left: Expr, right: Expr) -> CompiledExpr {
	let left = lower_expr(folder, left);
	let right = lower_expr(folder, right);
	let decisive = op == BinaryOp::Or;
	CompiledExpr::new(move |args| {
		if left.execute(args)?.as_bool() == Some(decisive) {
			return Ok(Value::Boolean(decisive));
		}
		Ok(Value::Boolean(right.execute(args)?.as_bool() == Some(true)))
	})
}

fn lower_binary(folder: &Folder<'_>, op: BinaryOp, left: Expr, right: Expr) -> CompiledExpr {
	let invoker = folder.binary_invoker(op, &left.ty, &right.ty);
	let left = lower_expr(folder, left);
	let right = lower_expr(folder, right);
	CompiledExpr::new(move |args| {
		let operands = [left.execute(args)?, right.execute(args)?];
		invoker(&operands)
	})
}

fn lower_unary(folder: &Folder<'_>, op: UnaryOp, operand: Expr) -> CompiledExpr {
	let invoker = folder.unary_invoker(&op, &operand.ty);
	let operand = lower_expr(folder, operand);
	CompiledExpr::new(move |args| {
		let value = operand.execute(args)?;
		invoker(std::slice::from_ref(&value))
	})
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicUsize, Ordering};

	use reckon_type::Type;

	use super::*;
	use crate::{atom::NativeFunction, fold::FoldCache};

	fn int(value: i32) -> Expr {
		Expr::constant(Value::Int4(value), Type::Int4)
	}

	#[test]
	fn test_variable_and_binary() {
		let cache = FoldCache::new();
		let folder = Folder::new(&cache);
		let expr = Expr::binary(BinaryOp::Mul, Expr::variable(0, Type::Int4), int(3), Type::Int4);
		let compiled = lower(&folder, expr);
		assert_eq!(compiled.execute(&[Value::Int4(4)]).unwrap(), Value::Int4(12));
		assert_eq!(compiled.execute(&[Value::Int4(i32::MAX)]).unwrap_err().code, "EVAL_001");
	}

	#[test]
	fn test_short_circuit_skips_right() {
		let cache = FoldCache::new();
		let folder = Folder::new(&cache);
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = calls.clone();
		let probe: Arc<dyn NativeCallable> = Arc::new(
			NativeFunction::nullary("probe", move || {
				counter.fetch_add(1, Ordering::SeqCst);
				true
			})
			.non_deterministic(),
		);
		let right = Expr::new(
			ExprKind::Call {
				callable: probe,
				args: vec![],
			},
			Type::Boolean,
		);
		let expr = Expr::binary(BinaryOp::And, Expr::variable(0, Type::Boolean), right, Type::Boolean);
		let compiled = lower(&folder, expr);
		assert_eq!(compiled.execute(&[Value::Boolean(false)]).unwrap(), Value::Boolean(false));
		assert_eq!(calls.load(Ordering::SeqCst), 0);
		assert_eq!(compiled.execute(&[Value::Boolean(true)]).unwrap(), Value::Boolean(true));
		assert_eq!(calls.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn test_switch_first_key_wins() {
		let cache = FoldCache::new();
		let folder = Folder::new(&cache);
		let expr = Expr::new(
			ExprKind::Switch {
				key: Box::new(Expr::variable(0, Type::Utf8)),
				cases: vec![
					SwitchCase {
						keys: vec![Value::utf8("a"), Value::utf8("b")],
						body: int(1),
					},
					SwitchCase {
						keys: vec![Value::utf8("B")],
						body: int(2),
					},
				],
				default: Box::new(int(0)),
			},
			Type::Int4,
		);
		let compiled = lower(&folder, expr);
		assert_eq!(compiled.execute(&[Value::utf8("A")]).unwrap(), Value::Int4(1));
		assert_eq!(compiled.execute(&[Value::utf8("b")]).unwrap(), Value::Int4(1));
		assert_eq!(compiled.execute(&[Value::utf8("z")]).unwrap(), Value::Int4(0));
		assert_eq!(compiled.execute(&[Value::None]).unwrap(), Value::Int4(0));
	}

	#[test]
	fn test_missing_argument_is_internal() {
		let cache = FoldCache::new();
		let folder = Folder::new(&cache);
		let compiled = lower(&folder, Expr::variable(2, Type::Int4));
		assert!(compiled.execute(&[]).unwrap_err().is_internal());
	}
}
