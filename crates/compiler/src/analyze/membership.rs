// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashSet, sync::Arc};

use reckon_type::{Error, Type, Value, ValueKey, error::diagnostic::cast::type_mismatch, internal_err};
use tracing::debug;

use super::{Analyzer, fragment_of, negation, structure};
use crate::{
	atom::{NativeCallable, Signature},
	error::CompileError,
	expression::Expr,
	operator::{BinaryOp, UnaryOp},
	state::CompilerState,
	syntax::{SyntaxNode, term},
};

/// Run-time membership test against a frozen set of keys.
struct SetMembership {
	signature: Signature,
	keys: HashSet<ValueKey>,
}

impl NativeCallable for SetMembership {
	fn name(&self) -> &str {
		"in"
	}

	fn signature(&self) -> &Signature {
		&self.signature
	}

	fn invoke(&self, args: &[Value]) -> crate::Result<Value> {
		match args {
			[value] => Ok(Value::Boolean(ValueKey::of(value).is_some_and(|key| self.keys.contains(&key)))),
			_ => internal_err!("set membership invoked with {} arguments", args.len()),
		}
	}
}

impl Analyzer<'_> {
	/// `test [NOT] IN (item, ...)`. Items are constants of the test's
	/// element type; absent items never match.
	pub(super) fn membership(&self, node: &SyntaxNode, state: &mut CompilerState) -> crate::Result<Expr> {
		let (negated, operands) = negation(node);
		let [test_node, list] = operands.as_slice() else {
			return Err(structure(node, "expected a test operand and a list"));
		};
		if !list.is(term::EXPRESSION_LIST) {
			return Err(CompileError::ParameterizedIn {
				fragment: fragment_of(list),
			}
			.into());
		}

		let test = self.analyze(test_node, state)?;
		if test.is_void() {
			return Ok(Expr::boolean(negated));
		}
		let element = test.ty.strip_nullable().clone();

		let mut seen = HashSet::new();
		let mut items = Vec::with_capacity(list.children.len());
		for item_node in &list.children {
			let item = self.analyze(item_node, state)?;
			if item.is_void() {
				continue;
			}
			let actual = item.ty.clone();
			let Some(item) = self.adjust(item, &element)? else {
				return Err(Error(type_mismatch(fragment_of(item_node), &actual, &element)));
			};
			let Some(value) = item.as_constant() else {
				return Err(CompileError::NonConstantInItem {
					fragment: item_node.fragment(),
				}
				.into());
			};
			if let Some(key) = ValueKey::of(value) {
				if seen.insert(key) {
					items.push(item);
				}
			}
		}

		let fragment = node.fragment();
		let threshold = match element.is_integer() {
			true => self.config().integer_in_list_threshold,
			false => self.config().in_list_threshold,
		};

		let matched = if items.is_empty() {
			Expr::boolean(false)
		} else if items.len() <= threshold || test.is_constant() {
			let mut items = items.into_iter();
			let mut chain = match items.next() {
				Some(first) => self.apply_binary(BinaryOp::Eq, test.clone(), first, &fragment)?,
				None => Expr::boolean(false),
			};
			for item in items {
				let equal = self.apply_binary(BinaryOp::Eq, test.clone(), item, &fragment)?;
				chain = self.apply_binary(BinaryOp::Or, chain, equal, &fragment)?;
			}
			chain
		} else {
			debug!(items = seen.len(), element = %element, "compiling IN list to set membership");
			let membership: Arc<dyn NativeCallable> = Arc::new(SetMembership {
				signature: Signature::new(vec![test.ty.clone()], Type::Boolean),
				keys: seen,
			});
			self.folder().call(membership, vec![test])?
		};

		match negated {
			true => self.apply_unary(UnaryOp::Not, matched, &fragment),
			false => Ok(matched),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		atom::AtomRegistry, config::CompilerConfig, expression::ExprKind, fold::FoldCache, lower::lower,
		syntax::build::*,
	};

	fn analyze_with(node: &SyntaxNode, state: &mut CompilerState) -> crate::Result<Expr> {
		let atoms = AtomRegistry::new();
		let cache = FoldCache::new();
		let config = CompilerConfig::default();
		Analyzer::new(&atoms, &cache, &config).analyze(node, state)
	}

	fn analyze(node: &SyntaxNode) -> crate::Result<Expr> {
		analyze_with(node, &mut CompilerState::new())
	}

	fn run(expr: Expr, value: Value) -> Value {
		let cache = FoldCache::new();
		lower(&crate::fold::Folder::new(&cache), expr).execute(&[value]).unwrap()
	}

	fn ints(values: impl IntoIterator<Item = i32>) -> Vec<SyntaxNode> {
		values.into_iter().map(number).collect()
	}

	#[test]
	fn test_constant_text_membership() {
		let expr = analyze(&in_list(string("aha"), vec![string("AHA"), string("zzz")])).unwrap();
		assert_eq!(expr.as_constant(), Some(&Value::Boolean(true)));
		let expr = analyze(&not_in_list(string("aha"), vec![string("AHA"), string("zzz")])).unwrap();
		assert_eq!(expr.as_constant(), Some(&Value::Boolean(false)));
	}

	#[test]
	fn test_empty_list() {
		let mut state = CompilerState::new().with_parameter("@x", Type::Int4);
		let expr = analyze_with(&in_list(ident("@x"), vec![]), &mut state).unwrap();
		assert_eq!(expr.as_constant(), Some(&Value::Boolean(false)));
		let expr = analyze_with(&not_in_list(ident("@x"), vec![]), &mut state).unwrap();
		assert_eq!(expr.as_constant(), Some(&Value::Boolean(true)));
	}

	#[test]
	fn test_short_list_is_an_equality_chain() {
		let mut state = CompilerState::new().with_parameter("@x", Type::Int4);
		let expr = analyze_with(&in_list(ident("@x"), ints([1, 2, 3])), &mut state).unwrap();
		assert!(matches!(expr.kind, ExprKind::Binary { op: BinaryOp::Or, .. }));
		assert_eq!(run(expr.clone(), Value::Int4(2)), Value::Boolean(true));
		assert_eq!(run(expr, Value::Int4(4)), Value::Boolean(false));
	}

	#[test]
	fn test_long_list_uses_a_set() {
		let mut state = CompilerState::new().with_parameter("@x", Type::Int8);
		let expr = analyze_with(&in_list(ident("@x"), ints(0..40)), &mut state).unwrap();
		assert!(matches!(expr.kind, ExprKind::Call { .. }));
		assert_eq!(run(expr.clone(), Value::Int8(39)), Value::Boolean(true));
		assert_eq!(run(expr, Value::Int8(40)), Value::Boolean(false));

		let expr = analyze_with(&not_in_list(ident("@x"), ints(0..40)), &mut state).unwrap();
		assert_eq!(run(expr.clone(), Value::Int8(39)), Value::Boolean(false));
		assert_eq!(run(expr, Value::Int8(40)), Value::Boolean(true));
	}

	#[test]
	fn test_text_threshold_is_lower() {
		let mut state = CompilerState::new().with_parameter("@s", Type::Utf8);
		let items = ["a", "b", "c", "d", "e", "f"].into_iter().map(string).collect();
		let expr = analyze_with(&in_list(ident("@s"), items), &mut state).unwrap();
		assert!(matches!(expr.kind, ExprKind::Call { .. }));
		assert_eq!(run(expr.clone(), Value::utf8("F")), Value::Boolean(true));
		assert_eq!(run(expr, Value::None), Value::Boolean(false));
	}

	#[test]
	fn test_duplicates_collapse() {
		let mut state = CompilerState::new().with_parameter("@s", Type::Utf8);
		let items = ["a", "A", "b", "B", "a", "c"].into_iter().map(string).collect();
		let expr = analyze_with(&in_list(ident("@s"), items), &mut state).unwrap();
		// three distinct keys stay under the text threshold
		assert!(matches!(expr.kind, ExprKind::Binary { .. }));
	}

	#[test]
	fn test_nullable_test_value() {
		let mut state = CompilerState::new().with_parameter("@x", Type::nullable(Type::Int4));
		let expr = analyze_with(&in_list(ident("@x"), ints([1, 2])), &mut state).unwrap();
		assert_eq!(expr.ty, Type::Boolean);
		assert_eq!(run(expr.clone(), Value::None), Value::Boolean(false));
		assert_eq!(run(expr, Value::Int4(1)), Value::Boolean(true));
	}

	#[test]
	fn test_items_narrow_to_element_type() {
		let mut state = CompilerState::new().with_parameter("@x", Type::Uint1);
		let expr = analyze_with(&in_list(ident("@x"), ints([1, 200])), &mut state).unwrap();
		assert_eq!(run(expr, Value::Uint1(200)), Value::Boolean(true));

		let err = analyze_with(&in_list(ident("@x"), ints([1, 300])), &mut state).unwrap_err();
		assert_eq!(err.code, "CAST_001");
	}

	#[test]
	fn test_non_constant_item() {
		let mut state = CompilerState::new().with_parameter("@x", Type::Int4).with_parameter("@y", Type::Int4);
		let err = analyze_with(&in_list(ident("@x"), vec![number(1i32), ident("@y")]), &mut state).unwrap_err();
		assert_eq!(err.code, "COMPILE_006");
	}

	#[test]
	fn test_parameterized_list_rejected() {
		let mut state = CompilerState::new().with_parameter("@x", Type::Int4).with_parameter("@set", Type::Utf8);
		let err = analyze_with(&in_expr(ident("@x"), false, ident("@set")), &mut state).unwrap_err();
		assert_eq!(err.code, "COMPILE_007");
	}
}
