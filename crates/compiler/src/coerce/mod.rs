// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Return-type adjustment: converting an expression to a requested type along
//! the implicit conversions of the type lattice.

use reckon_type::{
	Type, Value,
	value::number::{narrow, promote},
};

use crate::{expression::Expr, fold::Folder, operator::UnaryOp};

/// Adjusts `expr` to `target`. `Ok(None)` means no implicit conversion
/// exists; callers report it as the type mismatch appropriate to their
/// construct. Errors only come from evaluating constants.
pub fn adjust(folder: &Folder<'_>, expr: Expr, target: &Type) -> crate::Result<Option<Expr>> {
	if expr.ty == *target {
		return Ok(Some(expr));
	}

	if expr.ty.is_void() {
		return Ok(Some(Expr::default_of(target)));
	}

	if let Type::Nullable(inner) = target {
		if expr.ty.is_nullable() {
			return adjust_nullable(folder, expr, inner, target);
		}
		let Some(adjusted) = adjust(folder, expr, inner)? else {
			return Ok(None);
		};
		return folder.unary(UnaryOp::Wrap, adjusted, target.clone()).map(Some);
	}

	if let Type::Nullable(inner) = &expr.ty {
		let inner = inner.as_ref().clone();
		let unwrapped = folder.unary(UnaryOp::Unwrap, expr, inner)?;
		return adjust(folder, unwrapped, target);
	}

	if expr.ty.is_number() && target.is_number() {
		if promote(&expr.ty, target).as_ref() == Some(target) {
			return folder.unary(UnaryOp::Convert(target.clone()), expr, target.clone()).map(Some);
		}
		if let Some(value) = expr.as_constant() {
			return Ok(narrow(value, &expr.ty, target).map(|value| Expr::constant(value, target.clone())));
		}
	}

	Ok(None)
}

/// `Nullable(U)` to `Nullable(T)`: absent stays absent, a present value is
/// adjusted and rewrapped.
fn adjust_nullable(folder: &Folder<'_>, expr: Expr, inner: &Type, target: &Type) -> crate::Result<Option<Expr>> {
	let source = expr.ty.strip_nullable().clone();

	if let Some(value) = expr.as_constant() {
		if value.is_none() {
			return Ok(Some(Expr::constant(Value::None, target.clone())));
		}
		let Some(adjusted) = adjust(folder, Expr::constant(value.clone(), source), inner)? else {
			return Ok(None);
		};
		return folder.unary(UnaryOp::Wrap, adjusted, target.clone()).map(Some);
	}

	let unwrapped = Expr::unary(UnaryOp::Unwrap, expr.clone(), source);
	let Some(adjusted) = adjust(folder, unwrapped, inner)? else {
		return Ok(None);
	};
	let present = folder.unary(UnaryOp::Wrap, adjusted, target.clone())?;
	let has_value = Expr::unary(UnaryOp::HasValue, expr, Type::Boolean);
	Ok(Some(Expr::conditional(has_value, present, Expr::constant(Value::None, target.clone()))))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		expression::ExprKind,
		fold::FoldCache,
		lower::lower,
	};

	fn run(expr: Expr, args: &[Value]) -> Value {
		let cache = FoldCache::new();
		let folder = Folder::new(&cache);
		lower(&folder, expr).execute(args).unwrap()
	}

	#[test]
	fn test_same_type_unchanged() {
		let cache = FoldCache::new();
		let folder = Folder::new(&cache);
		let expr = adjust(&folder, Expr::variable(0, Type::Int4), &Type::Int4).unwrap().unwrap();
		assert!(matches!(expr.kind, ExprKind::Variable(0)));
	}

	#[test]
	fn test_void_becomes_default() {
		let cache = FoldCache::new();
		let folder = Folder::new(&cache);
		let expr = adjust(&folder, Expr::void(), &Type::Int4).unwrap().unwrap();
		assert_eq!(expr.as_constant(), Some(&Value::Int4(0)));
		let expr = adjust(&folder, Expr::void(), &Type::Utf8).unwrap().unwrap();
		assert_eq!(expr.as_constant(), Some(&Value::None));
		assert_eq!(expr.ty, Type::Utf8);
	}

	#[test]
	fn test_widening() {
		let cache = FoldCache::new();
		let folder = Folder::new(&cache);
		let expr = adjust(&folder, Expr::variable(0, Type::Int2), &Type::Int8).unwrap().unwrap();
		assert_eq!(expr.ty, Type::Int8);
		assert_eq!(run(expr, &[Value::Int2(-3)]), Value::Int8(-3));
		assert!(adjust(&folder, Expr::variable(0, Type::Int8), &Type::Int4).unwrap().is_none());
		assert!(adjust(&folder, Expr::variable(0, Type::Float8), &Type::Decimal).unwrap().is_none());
	}

	#[test]
	fn test_constant_narrowing() {
		let cache = FoldCache::new();
		let folder = Folder::new(&cache);
		let expr = adjust(&folder, Expr::constant(Value::Int4(200), Type::Int4), &Type::Uint1).unwrap().unwrap();
		assert_eq!(expr.as_constant(), Some(&Value::Uint1(200)));
		assert!(adjust(&folder, Expr::constant(Value::Int4(300), Type::Int4), &Type::Uint1).unwrap().is_none());
	}

	#[test]
	fn test_wrap_into_nullable() {
		let cache = FoldCache::new();
		let folder = Folder::new(&cache);
		let target = Type::nullable(Type::Int8);
		let expr = adjust(&folder, Expr::constant(Value::Int4(5), Type::Int4), &target).unwrap().unwrap();
		assert_eq!(expr.ty, target);
		assert_eq!(expr.as_constant(), Some(&Value::Int8(5)));
	}

	#[test]
	fn test_nullable_to_nullable_preserves_absence() {
		let cache = FoldCache::new();
		let folder = Folder::new(&cache);
		let target = Type::nullable(Type::Int8);
		let expr = adjust(&folder, Expr::variable(0, Type::nullable(Type::Int4)), &target).unwrap().unwrap();
		assert_eq!(expr.ty, target);
		assert_eq!(run(expr.clone(), &[Value::None]), Value::None);
		assert_eq!(run(expr, &[Value::Int4(7)]), Value::Int8(7));
	}

	#[test]
	fn test_unwrap_nullable() {
		let cache = FoldCache::new();
		let folder = Folder::new(&cache);
		let expr = adjust(&folder, Expr::variable(0, Type::nullable(Type::Int4)), &Type::Int4).unwrap().unwrap();
		assert_eq!(run(expr, &[Value::Int4(7)]), Value::Int4(7));
	}

	#[test]
	fn test_no_conversion() {
		let cache = FoldCache::new();
		let folder = Folder::new(&cache);
		assert!(adjust(&folder, Expr::variable(0, Type::Utf8), &Type::Int4).unwrap().is_none());
		assert!(adjust(&folder, Expr::variable(0, Type::Boolean), &Type::nullable(Type::Int4)).unwrap().is_none());
	}
}
