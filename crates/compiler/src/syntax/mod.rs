// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Syntax-tree input contract. Trees are produced by an external parser, or
//! programmatically through [`build`].

pub mod build;

use reckon_type::{Fragment, Value};

/// Term names of the nodes the analyzer understands.
pub mod term {
	pub const NUMBER: &str = "number";
	pub const STRING: &str = "string";
	pub const IDENTIFIER: &str = "identifier";
	pub const NAME: &str = "name";
	pub const FUNCTION_CALL: &str = "function_call";
	pub const ARGUMENT_LIST: &str = "argument_list";
	pub const UNARY_EXPR: &str = "unary_expr";
	pub const BINARY_EXPR: &str = "binary_expr";
	pub const OPERATOR: &str = "operator";
	pub const PAREN_EXPR: &str = "paren_expr";
	pub const CASE_EXPR: &str = "case_expr";
	pub const CASE_VARIABLE: &str = "case_variable";
	pub const WHEN_LIST: &str = "when_list";
	pub const WHEN_CLAUSE: &str = "when_clause";
	pub const ELSE_CLAUSE: &str = "else_clause";
	pub const EXPRESSION_LIST: &str = "expression_list";
	pub const BETWEEN_EXPR: &str = "between_expr";
	pub const IN_EXPR: &str = "in_expr";
	pub const IS_NULL_EXPR: &str = "is_null_expr";
	pub const NOT: &str = "not";
}

/// Leaf payload: the pre-parsed literal value (if any), the raw source text
/// and where it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
	pub value: Option<Value>,
	pub text: String,
	pub fragment: Fragment,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxNode {
	pub term: String,
	pub children: Vec<SyntaxNode>,
	pub token: Option<Token>,
}

impl SyntaxNode {
	pub fn leaf(term: impl Into<String>, token: Token) -> Self {
		Self {
			term: term.into(),
			children: Vec::new(),
			token: Some(token),
		}
	}

	pub fn branch(term: impl Into<String>, children: Vec<SyntaxNode>) -> Self {
		Self {
			term: term.into(),
			children,
			token: None,
		}
	}

	pub fn is(&self, term: &str) -> bool {
		self.term == term
	}

	pub fn child(&self, index: usize) -> Option<&SyntaxNode> {
		self.children.get(index)
	}

	/// Raw token text, empty for branches.
	pub fn text(&self) -> &str {
		self.token.as_ref().map(|t| t.text.as_str()).unwrap_or("")
	}

	/// Source location of the node: its own token's, else the first located
	/// descendant's in depth-first order.
	pub fn fragment(&self) -> Fragment {
		self.located().cloned().unwrap_or(Fragment::None)
	}

	fn located(&self) -> Option<&Fragment> {
		if let Some(token) = &self.token {
			if token.fragment.is_located() {
				return Some(&token.fragment);
			}
		}
		self.children.iter().find_map(SyntaxNode::located)
	}

	/// Attaches a statement location to this node's token. The length is
	/// the token text's length; branches are left unchanged.
	pub fn at(mut self, position: u32, line: u32, column: u32) -> Self {
		if let Some(token) = &mut self.token {
			let length = token.text.chars().count() as u32;
			token.fragment = Fragment::statement(token.text.as_str(), position, line, column, length);
		}
		self
	}
}

#[cfg(test)]
mod tests {
	use super::{build::*, *};

	#[test]
	fn test_fragment_of_leaf() {
		let node = number(1i32).at(4, 1, 5);
		assert_eq!(node.fragment(), Fragment::statement("1", 4, 1, 5, 1));
	}

	#[test]
	fn test_fragment_of_branch_is_first_located_descendant() {
		let node = binary(number(1i32), "+", number(2i32).at(4, 1, 5));
		assert_eq!(node.fragment(), Fragment::statement("2", 4, 1, 5, 1));
	}

	#[test]
	fn test_fragment_without_location() {
		assert_eq!(binary(number(1i32), "+", number(2i32)).fragment(), Fragment::None);
	}

	#[test]
	fn test_text() {
		assert_eq!(ident("a").child(0).unwrap().text(), "a");
		assert_eq!(paren(number(1i32)).text(), "");
	}
}
