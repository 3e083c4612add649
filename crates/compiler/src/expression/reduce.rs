// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reckon_type::value::equals;

use super::{Expr, ExprKind, SwitchCase};
use crate::{fold::Folder, operator::UnaryOp};

/// Final simplification before lowering: constant conditions and switch keys
/// select their branch, present-wrappers are dropped, and nodes whose operands
/// became constant are folded.
pub fn reduce(folder: &Folder<'_>, expr: Expr) -> crate::Result<Expr> {
	let Expr {
		kind,
		ty,
	} = expr;

	Ok(match kind {
		ExprKind::Constant(_) | ExprKind::Variable(_) => Expr::new(kind, ty),
		ExprKind::Member {
			base,
			member,
		} => folder.member(reduce(folder, *base)?, member)?,
		ExprKind::Call {
			callable,
			args,
		} => {
			let args = args.into_iter().map(|arg| reduce(folder, arg)).collect::<crate::Result<Vec<_>>>()?;
			folder.call(callable, args)?
		}
		ExprKind::Conditional {
			condition,
			then,
			otherwise,
		} => {
			let condition = reduce(folder, *condition)?;
			match condition.as_bool_constant() {
				Some(true) => reduce(folder, *then)?,
				Some(false) => reduce(folder, *otherwise)?,
				None => Expr::new(
					ExprKind::Conditional {
						condition: Box::new(condition),
						then: Box::new(reduce(folder, *then)?),
						otherwise: Box::new(reduce(folder, *otherwise)?),
					},
					ty,
				),
			}
		}
		ExprKind::Switch {
			key,
			cases,
			default,
		} => {
			let key = reduce(folder, *key)?;
			if let Some(value) = key.as_constant() {
				let selected = cases.into_iter().find(|case| case.keys.iter().any(|k| equals(k, value)));
				return match selected {
					Some(case) => reduce(folder, case.body),
					None => reduce(folder, *default),
				};
			}
			let cases = cases
				.into_iter()
				.map(|case| {
					Ok(SwitchCase {
						keys: case.keys,
						body: reduce(folder, case.body)?,
					})
				})
				.collect::<crate::Result<Vec<_>>>()?;
			Expr::new(
				ExprKind::Switch {
					key: Box::new(key),
					cases,
					default: Box::new(reduce(folder, *default)?),
				},
				ty,
			)
		}
		ExprKind::Binary {
			op,
			left,
			right,
		} => folder.binary(op, reduce(folder, *left)?, reduce(folder, *right)?, ty)?,
		ExprKind::Unary {
			op: UnaryOp::Wrap,
			operand,
		} => {
			let operand = reduce(folder, *operand)?;
			Expr::new(operand.kind, ty)
		}
		ExprKind::Unary {
			op,
			operand,
		} => folder.unary(op, reduce(folder, *operand)?, ty)?,
	})
}

#[cfg(test)]
mod tests {
	use reckon_type::{Type, Value};

	use super::*;
	use crate::{fold::FoldCache, operator::BinaryOp};

	#[test]
	fn test_constant_condition_collapses() {
		let cache = FoldCache::new();
		let folder = Folder::new(&cache);
		let condition = Expr::binary(
			BinaryOp::Lt,
			Expr::constant(Value::Int4(1), Type::Int4),
			Expr::constant(Value::Int4(2), Type::Int4),
			Type::Boolean,
		);
		let expr = Expr::conditional(condition, Expr::variable(0, Type::Int4), Expr::variable(1, Type::Int4));
		let reduced = reduce(&folder, expr).unwrap();
		assert!(matches!(reduced.kind, ExprKind::Variable(0)));
	}

	#[test]
	fn test_wrap_dropped() {
		let cache = FoldCache::new();
		let folder = Folder::new(&cache);
		let target = Type::nullable(Type::Int4);
		let expr = Expr::unary(UnaryOp::Wrap, Expr::variable(0, Type::Int4), target.clone());
		let reduced = reduce(&folder, expr).unwrap();
		assert!(matches!(reduced.kind, ExprKind::Variable(0)));
		assert_eq!(reduced.ty, target);
	}

	#[test]
	fn test_constant_switch_key_selects_case() {
		let cache = FoldCache::new();
		let folder = Folder::new(&cache);
		let expr = Expr::new(
			ExprKind::Switch {
				key: Box::new(Expr::constant(Value::utf8("B"), Type::Utf8)),
				cases: vec![
					SwitchCase {
						keys: vec![Value::utf8("a")],
						body: Expr::constant(Value::Int4(1), Type::Int4),
					},
					SwitchCase {
						keys: vec![Value::utf8("b")],
						body: Expr::constant(Value::Int4(2), Type::Int4),
					},
				],
				default: Box::new(Expr::constant(Value::Int4(0), Type::Int4)),
			},
			Type::Int4,
		);
		assert_eq!(reduce(&folder, expr).unwrap().as_constant(), Some(&Value::Int4(2)));
	}
}
