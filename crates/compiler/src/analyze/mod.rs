// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The analyzer: a recursive walk from syntax nodes to typed expressions.
//!
//! Identifiers and calls resolve through the atom registry, operators and the
//! special constructs (CASE, IN, BETWEEN, IS NULL) have their own compilers,
//! and every operation is assembled through the constant folder. The first
//! error aborts the walk and leaves carrying the location of the innermost
//! node that has one.

mod between;
mod call;
mod case;
mod identifier;
mod is_null;
mod literal;
mod membership;
mod operator;

use reckon_type::{Error, Fragment, Type};

use crate::{
	atom::AtomRegistry,
	coerce,
	config::CompilerConfig,
	error::CompileError,
	expression::Expr,
	fold::{FoldCache, Folder},
	state::CompilerState,
	syntax::{SyntaxNode, term},
};

pub struct Analyzer<'a> {
	atoms: &'a AtomRegistry,
	folder: Folder<'a>,
	config: &'a CompilerConfig,
}

impl<'a> Analyzer<'a> {
	pub fn new(atoms: &'a AtomRegistry, cache: &'a FoldCache, config: &'a CompilerConfig) -> Self {
		Self {
			atoms,
			folder: Folder::new(cache),
			config,
		}
	}

	pub fn atoms(&self) -> &'a AtomRegistry {
		self.atoms
	}

	pub fn folder(&self) -> &Folder<'a> {
		&self.folder
	}

	pub fn config(&self) -> &'a CompilerConfig {
		self.config
	}

	/// Analyzes one node into a typed expression.
	pub fn analyze(&self, node: &SyntaxNode, state: &mut CompilerState) -> crate::Result<Expr> {
		state.enter(self.config.max_depth, || node.fragment())?;
		let result = self.dispatch(node, state);
		state.leave();
		result.map_err(|err| err.with_fragment(&node.fragment()))
	}

	/// Return-type adjustment of `expr` to `target`; `None` when no implicit
	/// conversion exists.
	pub fn adjust(&self, expr: Expr, target: &Type) -> crate::Result<Option<Expr>> {
		coerce::adjust(&self.folder, expr, target)
	}

	fn dispatch(&self, node: &SyntaxNode, state: &mut CompilerState) -> crate::Result<Expr> {
		match node.term.as_str() {
			term::NUMBER => literal::number(node),
			term::STRING => literal::string(node),
			term::IDENTIFIER => self.identifier(node, state),
			term::FUNCTION_CALL => self.call(node, state),
			term::UNARY_EXPR => self.unary(node, state),
			term::BINARY_EXPR => self.binary(node, state),
			term::PAREN_EXPR => {
				expect_children(node, 1)?;
				self.analyze(child(node, 0)?, state)
			}
			term::CASE_EXPR => self.case(node, state),
			term::BETWEEN_EXPR => self.between(node, state),
			term::IN_EXPR => self.membership(node, state),
			term::IS_NULL_EXPR => self.is_null(node, state),
			other => Err(structure(node, format!("unexpected term '{}'", other))),
		}
	}
}

pub(crate) fn structure(node: &SyntaxNode, reason: impl Into<String>) -> Error {
	CompileError::Structure {
		term: node.term.clone(),
		reason: reason.into(),
		fragment: node.fragment(),
	}
	.into()
}

pub(crate) fn child(node: &SyntaxNode, index: usize) -> crate::Result<&SyntaxNode> {
	node.child(index).ok_or_else(|| structure(node, format!("missing child {}", index)))
}

pub(crate) fn expect_children(node: &SyntaxNode, count: usize) -> crate::Result<()> {
	if node.children.len() != count {
		return Err(structure(node, format!("expected {} children, found {}", count, node.children.len())));
	}
	Ok(())
}

/// Splits the children of a node with an optional `not` leaf in second
/// position into the negation flag and the remaining operands.
pub(crate) fn negation(node: &SyntaxNode) -> (bool, Vec<&SyntaxNode>) {
	let negated = node.child(1).is_some_and(|c| c.is(term::NOT));
	let operands = node.children.iter().enumerate().filter(|(i, _)| !(negated && *i == 1)).map(|(_, c)| c).collect();
	(negated, operands)
}

/// Location of a node for diagnostics, falling back to its text.
pub(crate) fn fragment_of(node: &SyntaxNode) -> Fragment {
	match node.fragment() {
		Fragment::None => Fragment::internal(node.text()),
		fragment => fragment,
	}
}

#[cfg(test)]
mod tests {
	use reckon_type::Value;

	use super::*;
	use crate::syntax::build::*;

	fn analyze(node: &SyntaxNode) -> crate::Result<Expr> {
		let atoms = AtomRegistry::new();
		let cache = FoldCache::new();
		let config = CompilerConfig::default();
		Analyzer::new(&atoms, &cache, &config).analyze(node, &mut CompilerState::new())
	}

	#[test]
	fn test_paren_is_transparent() {
		let expr = analyze(&paren(number(3i32))).unwrap();
		assert_eq!(expr.as_constant(), Some(&Value::Int4(3)));
	}

	#[test]
	fn test_unknown_term_is_structural() {
		let node = SyntaxNode::branch("lambda", vec![]);
		assert_eq!(analyze(&node).unwrap_err().code, "COMPILE_001");
	}

	#[test]
	fn test_missing_child_is_structural() {
		let node = SyntaxNode::branch(term::BINARY_EXPR, vec![number(1i32)]);
		assert_eq!(analyze(&node).unwrap_err().code, "COMPILE_001");
	}

	#[test]
	fn test_depth_limit() {
		let atoms = AtomRegistry::new();
		let cache = FoldCache::new();
		let config = CompilerConfig {
			max_depth: 8,
			..CompilerConfig::default()
		};
		let mut node = number(1i32);
		for _ in 0..10 {
			node = paren(node);
		}
		let err = Analyzer::new(&atoms, &cache, &config).analyze(&node, &mut CompilerState::new()).unwrap_err();
		assert_eq!(err.code, "COMPILE_009");
	}

	#[test]
	fn test_error_takes_innermost_location() {
		let node = binary(number(1i32), "+", SyntaxNode::branch(term::IDENTIFIER, vec![name("nope").at(4, 1, 5)]));
		let err = analyze(&node).unwrap_err();
		assert_eq!(err.code, "ATOM_001");
		assert_eq!(err.fragment, Fragment::statement("nope", 4, 1, 5, 4));
	}

	#[test]
	fn test_negation_split() {
		let node = not_between(ident("a"), number(1i32), number(2i32));
		let (negated, operands) = negation(&node);
		assert!(negated);
		assert_eq!(operands.len(), 3);
		let node = in_list(ident("a"), vec![]);
		let (negated, operands) = negation(&node);
		assert!(!negated);
		assert_eq!(operands.len(), 2);
	}
}
