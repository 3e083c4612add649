// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! `iif` and `coalesce`. Both are generators: their result type depends on
//! the argument types, and only the selected branch is evaluated.

use reckon_type::{
	Type,
	error::diagnostic::function::{arity_mismatch, invalid_argument_type},
	return_error,
};

use crate::{
	analyze::{Analyzer, fragment_of},
	atom::Atom,
	expression::Expr,
	member,
	operator::UnaryOp,
	state::CompilerState,
	syntax::SyntaxNode,
};

fn arguments(node: &SyntaxNode) -> (&SyntaxNode, &[SyntaxNode]) {
	match node.children.as_slice() {
		[name, arguments, ..] => (name, arguments.children.as_slice()),
		_ => (node, &[]),
	}
}

/// `iif(condition, then, otherwise)`
fn iif(analyzer: &Analyzer<'_>, node: &SyntaxNode, state: &mut CompilerState) -> crate::Result<Option<Expr>> {
	let (name, args) = arguments(node);
	let [condition, then, otherwise] = args else {
		return_error!(arity_mismatch(fragment_of(name), 3, args.len()));
	};

	let analyzed = analyzer.analyze(condition, state)?;
	if analyzed.ty != Type::Boolean {
		return_error!(invalid_argument_type(fragment_of(condition), 1, &Type::Boolean, &analyzed.ty));
	}
	let then = analyzer.analyze(then, state)?;
	let otherwise = analyzer.analyze(otherwise, state)?;
	let (then, otherwise) = analyzer.unify_branches(then, otherwise, &node.fragment())?;
	Ok(Some(analyzer.folder().conditional(analyzed, then, otherwise)))
}

/// `coalesce(a, b, ...)`: the first argument holding a value. An argument
/// that can never be absent ends the chain.
fn coalesce(analyzer: &Analyzer<'_>, node: &SyntaxNode, state: &mut CompilerState) -> crate::Result<Option<Expr>> {
	let (name, args) = arguments(node);
	if args.len() < 2 {
		return_error!(arity_mismatch(fragment_of(name), 2, args.len()));
	}

	let mut analyzed = Vec::with_capacity(args.len());
	for arg in args {
		analyzed.push(analyzer.analyze(arg, state)?);
	}

	let mut tail = analyzed.pop().unwrap_or_else(Expr::void);
	for arg in analyzed.into_iter().rev() {
		if arg.is_void() {
			continue;
		}
		if !arg.ty.admits_none() {
			tail = arg;
			continue;
		}

		let folder = analyzer.folder();
		let present = folder.unary(UnaryOp::HasValue, arg.clone(), Type::Boolean)?;
		match present.as_bool_constant() {
			Some(false) => continue,
			Some(true) | None => {}
		}
		let value = match &arg.ty {
			Type::Nullable(_) => match member::lookup(&arg.ty, "Value") {
				Some(member) => folder.member(arg, member)?,
				None => arg,
			},
			_ => arg,
		};
		let (value, rest) = analyzer.unify_branches(value, tail, &node.fragment())?;
		tail = folder.conditional(present, value, rest);
	}
	Ok(Some(tail))
}

pub(super) fn atoms() -> Vec<Atom> {
	vec![Atom::function_generator("iif", iif), Atom::function_generator("coalesce", coalesce)]
}

#[cfg(test)]
mod tests {
	use reckon_type::Value;

	use super::*;
	use crate::{Runtime, builtin::testing::eval, syntax::build::*};

	#[test]
	fn test_iif_selects_branch() {
		let tree = call("iif", vec![binary(number(1i32), "<", number(2i32)), string("yes"), string("no")]);
		assert_eq!(eval(&tree, Type::Utf8), Value::utf8("yes"));
	}

	#[test]
	fn test_iif_unifies_branches() {
		let runtime = Runtime::builder().build().unwrap();
		let state = CompilerState::new().with_parameter("@flag", Type::Boolean).returning(Type::Int8);
		let tree = call("iif", vec![ident("@flag"), number(1i32), number(5_000_000_000i64)]);
		let function = runtime.compile(&tree, state).unwrap();
		assert_eq!(function.call(&[Value::Boolean(true)]).unwrap(), Value::Int8(1));
		assert_eq!(function.call(&[Value::Boolean(false)]).unwrap(), Value::Int8(5_000_000_000));
	}

	#[test]
	fn test_iif_only_evaluates_selected_branch() {
		let runtime = Runtime::builder().build().unwrap();
		let state = CompilerState::new().with_parameter("@x", Type::Int4).returning(Type::Int4);
		let tree = call(
			"iif",
			vec![binary(ident("@x"), "=", number(0i32)), number(0i32), binary(number(100i32), "/", ident("@x"))],
		);
		let function = runtime.compile(&tree, state).unwrap();
		assert_eq!(function.call(&[Value::Int4(0)]).unwrap(), Value::Int4(0));
		assert_eq!(function.call(&[Value::Int4(4)]).unwrap(), Value::Int4(25));
	}

	#[test]
	fn test_iif_errors() {
		let runtime = Runtime::builder().build().unwrap();
		let compile = |tree: SyntaxNode| runtime.compile(&tree, CompilerState::new()).unwrap_err().code.clone();
		assert_eq!(compile(call("iif", vec![number(1i32), number(2i32)])), "FUNCTION_002");
		assert_eq!(compile(call("iif", vec![number(1i32), number(2i32), number(3i32)])), "FUNCTION_003");
		assert_eq!(compile(call("iif", vec![boolean(true), number(2i32), string("x")])), "COMPILE_005");
	}

	#[test]
	fn test_coalesce() {
		let runtime = Runtime::builder().build().unwrap();
		let state = CompilerState::new()
			.with_parameter("@a", Type::nullable(Type::Int4))
			.with_parameter("@b", Type::nullable(Type::Int4))
			.returning(Type::Int4);
		let tree = call("coalesce", vec![ident("@a"), null(), ident("@b"), number(-1i32)]);
		let function = runtime.compile(&tree, state).unwrap();
		assert_eq!(function.returns(), Some(&Type::Int4));
		assert_eq!(function.call(&[Value::Int4(1), Value::Int4(2)]).unwrap(), Value::Int4(1));
		assert_eq!(function.call(&[Value::None, Value::Int4(2)]).unwrap(), Value::Int4(2));
		assert_eq!(function.call(&[Value::None, Value::None]).unwrap(), Value::Int4(-1));
	}

	#[test]
	fn test_coalesce_text() {
		assert_eq!(eval(&call("coalesce", vec![null(), string("b")]), Type::Utf8), Value::utf8("b"));
		assert_eq!(eval(&call("coalesce", vec![string("a"), string("b")]), Type::Utf8), Value::utf8("a"));
	}

	#[test]
	fn test_coalesce_arity() {
		let runtime = Runtime::builder().build().unwrap();
		let err = runtime.compile(&call("coalesce", vec![number(1i32)]), CompilerState::new()).unwrap_err();
		assert_eq!(err.code, "FUNCTION_002");
	}
}
