// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reckon_type::{
	error::diagnostic::{cast::type_mismatch, operator::not_comparable},
	return_error,
};

use super::{Analyzer, fragment_of, negation, structure};
use crate::{
	expression::Expr,
	operator::{BinaryOp, UnaryOp},
	state::CompilerState,
	syntax::SyntaxNode,
};

impl Analyzer<'_> {
	/// `test [NOT] BETWEEN lower AND upper`, inclusive on both ends. Reversed
	/// bounds select nothing.
	pub(super) fn between(&self, node: &SyntaxNode, state: &mut CompilerState) -> crate::Result<Expr> {
		let (negated, operands) = negation(node);
		let [test_node, lower_node, upper_node] = operands.as_slice() else {
			return Err(structure(node, "expected test, lower and upper operands"));
		};

		let test = self.analyze(test_node, state)?;
		let ty = test.ty.strip_nullable().clone();
		if !ty.is_ordered() {
			return_error!(not_comparable(fragment_of(test_node), &test.ty));
		}

		let mut bound = |bound_node: &SyntaxNode| -> crate::Result<Expr> {
			let analyzed = self.analyze(bound_node, state)?;
			let actual = analyzed.ty.clone();
			match self.adjust(analyzed, &ty)? {
				Some(adjusted) => Ok(adjusted),
				None => Err(reckon_type::Error(type_mismatch(fragment_of(bound_node), &actual, &ty))),
			}
		};
		let lower = bound(lower_node)?;
		let upper = bound(upper_node)?;

		let fragment = node.fragment();
		let above = self.apply_binary(BinaryOp::Ge, test.clone(), lower, &fragment)?;
		let below = self.apply_binary(BinaryOp::Le, test, upper, &fragment)?;
		let within = self.apply_binary(BinaryOp::And, above, below, &fragment)?;

		match negated {
			true => self.apply_unary(UnaryOp::Not, within, &fragment),
			false => Ok(within),
		}
	}
}

#[cfg(test)]
mod tests {
	use reckon_type::{Type, Value};

	use super::*;
	use crate::{atom::AtomRegistry, config::CompilerConfig, fold::FoldCache, lower::lower, syntax::build::*};

	fn compile(node: &SyntaxNode, ty: Type) -> impl Fn(Value) -> Value + use<> {
		let atoms = AtomRegistry::new();
		crate::builtin::register(&atoms).unwrap();
		let cache = FoldCache::new();
		let config = CompilerConfig::default();
		let analyzer = Analyzer::new(&atoms, &cache, &config);
		let expr = analyzer.analyze(node, &mut CompilerState::new().with_parameter("@x", ty)).unwrap();
		let compiled = lower(analyzer.folder(), expr);
		move |value| compiled.execute(&[value]).unwrap()
	}

	fn analyze(node: &SyntaxNode) -> crate::Result<Expr> {
		let atoms = AtomRegistry::new();
		let cache = FoldCache::new();
		let config = CompilerConfig::default();
		Analyzer::new(&atoms, &cache, &config).analyze(node, &mut CompilerState::new())
	}

	#[test]
	fn test_inclusive_bounds() {
		let f = compile(&between(ident("@x"), number(1i32), number(5i32)), Type::Int4);
		for (x, expected) in [(0, false), (1, true), (2, true), (5, true), (6, false)] {
			assert_eq!(f(Value::Int4(x)), Value::Boolean(expected), "x = {}", x);
		}
	}

	#[test]
	fn test_not_between() {
		let f = compile(&not_between(ident("@x"), number(1i32), number(5i32)), Type::Int4);
		assert_eq!(f(Value::Int4(0)), Value::Boolean(true));
		assert_eq!(f(Value::Int4(3)), Value::Boolean(false));
	}

	#[test]
	fn test_reversed_bounds_select_nothing() {
		let f = compile(&between(ident("@x"), number(5i32), number(1i32)), Type::Int4);
		for x in 0..7 {
			assert_eq!(f(Value::Int4(x)), Value::Boolean(false));
		}
	}

	#[test]
	fn test_nullable_test_value() {
		let f = compile(&between(ident("@x"), number(1i32), number(5i32)), Type::nullable(Type::Int4));
		assert_eq!(f(Value::None), Value::Boolean(false));
		assert_eq!(f(Value::Int4(3)), Value::Boolean(true));
	}

	#[test]
	fn test_text_between() {
		let f = compile(&between(ident("@x"), string("b"), string("d")), Type::Utf8);
		assert_eq!(f(Value::utf8("C")), Value::Boolean(true));
		assert_eq!(f(Value::utf8("e")), Value::Boolean(false));
	}

	#[test]
	fn test_uuid_between() {
		let atoms = AtomRegistry::new();
		let cache = FoldCache::new();
		let config = CompilerConfig::default();
		let analyzer = Analyzer::new(&atoms, &cache, &config);
		let mut state = CompilerState::new()
			.with_parameter("@x", Type::Uuid)
			.with_parameter("@lo", Type::Uuid)
			.with_parameter("@hi", Type::Uuid);
		let expr = analyzer.analyze(&between(ident("@x"), ident("@lo"), ident("@hi")), &mut state).unwrap();
		let compiled = lower(analyzer.folder(), expr);

		let id = |n: u128| Value::Uuid(uuid::Uuid::from_u128(n));
		assert_eq!(compiled.execute(&[id(5), id(1), id(9)]).unwrap(), Value::Boolean(true));
		assert_eq!(compiled.execute(&[id(10), id(1), id(9)]).unwrap(), Value::Boolean(false));
	}

	#[test]
	fn test_boolean_between() {
		let f = compile(&between(ident("@x"), boolean(true), boolean(true)), Type::Boolean);
		assert_eq!(f(Value::Boolean(true)), Value::Boolean(true));
		assert_eq!(f(Value::Boolean(false)), Value::Boolean(false));
	}

	#[test]
	fn test_constant_folds() {
		let expr = analyze(&between(number(3i32), number(1i64), number(5i64))).unwrap();
		assert_eq!(expr.as_constant(), Some(&Value::Boolean(true)));
	}

	#[test]
	fn test_bound_mismatch() {
		let err = analyze(&between(number(3i32), string("a"), number(5i32))).unwrap_err();
		assert_eq!(err.code, "CAST_001");
	}

	#[test]
	fn test_unordered_test_value() {
		let atoms = AtomRegistry::new();
		let cache = FoldCache::new();
		let config = CompilerConfig::default();
		let mut state = CompilerState::new().with_parameter("@b", Type::Blob);
		let node = between(ident("@b"), number(1i32), number(2i32));
		let err = Analyzer::new(&atoms, &cache, &config).analyze(&node, &mut state).unwrap_err();
		assert_eq!(err.code, "OPERATOR_005");
	}
}
