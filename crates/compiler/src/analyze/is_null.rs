// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reckon_type::Type;

use super::{Analyzer, child, structure};
use crate::{
	expression::Expr,
	operator::UnaryOp,
	state::CompilerState,
	syntax::{SyntaxNode, term},
};

impl Analyzer<'_> {
	/// `x IS [NOT] NULL`. Only nullable, reference and void operands can be
	/// absent; any other operand makes the test a constant.
	pub(super) fn is_null(&self, node: &SyntaxNode, state: &mut CompilerState) -> crate::Result<Expr> {
		let negated = match node.children.len() {
			1 => false,
			2 if child(node, 1)?.is(term::NOT) => true,
			_ => return Err(structure(node, "expected an operand and an optional NOT")),
		};

		let operand = self.analyze(child(node, 0)?, state)?;
		if !operand.ty.admits_none() {
			return Ok(Expr::boolean(negated));
		}

		let op = match negated {
			true => UnaryOp::HasValue,
			false => UnaryOp::IsNull,
		};
		self.folder().unary(op, operand, Type::Boolean)
	}
}

#[cfg(test)]
mod tests {
	use reckon_type::Value;

	use super::*;
	use crate::{
		atom::AtomRegistry, config::CompilerConfig, expression::ExprKind, fold::FoldCache, syntax::build::*,
	};

	fn analyze(node: &SyntaxNode, state: &mut CompilerState) -> crate::Result<Expr> {
		let atoms = AtomRegistry::new();
		let cache = FoldCache::new();
		let config = CompilerConfig::default();
		Analyzer::new(&atoms, &cache, &config).analyze(node, state)
	}

	#[test]
	fn test_value_type_is_never_null() {
		let mut state = CompilerState::new().with_parameter("@n", Type::Int4);
		assert_eq!(analyze(&is_null(ident("@n")), &mut state).unwrap().as_constant(), Some(&Value::Boolean(false)));
		assert_eq!(analyze(&is_not_null(ident("@n")), &mut state).unwrap().as_constant(), Some(&Value::Boolean(true)));
	}

	#[test]
	fn test_nullable_checks_at_runtime() {
		let mut state = CompilerState::new().with_parameter("@n", Type::nullable(Type::Int4));
		let expr = analyze(&is_null(ident("@n")), &mut state).unwrap();
		assert!(matches!(expr.kind, ExprKind::Unary { op: UnaryOp::IsNull, .. }));
		let expr = analyze(&is_not_null(ident("@n")), &mut state).unwrap();
		assert!(matches!(expr.kind, ExprKind::Unary { op: UnaryOp::HasValue, .. }));
		assert_eq!(expr.ty, Type::Boolean);
	}

	#[test]
	fn test_reference_type_checks_at_runtime() {
		let mut state = CompilerState::new().with_parameter("@s", Type::Utf8);
		let expr = analyze(&is_null(ident("@s")), &mut state).unwrap();
		assert!(matches!(expr.kind, ExprKind::Unary { op: UnaryOp::IsNull, .. }));
	}

	#[test]
	fn test_void_and_literal_operands() {
		let mut state = CompilerState::new().with_parameter("null", Type::Void);
		let expr = analyze(&is_null(ident("null")), &mut state).unwrap();
		assert!(matches!(expr.kind, ExprKind::Unary { .. }));

		let expr = analyze(&is_null(string("x")), &mut state).unwrap();
		assert_eq!(expr.as_constant(), Some(&Value::Boolean(false)));
	}
}
