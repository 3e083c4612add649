// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Programmatic construction of syntax trees in the shape the analyzer
//! expects. Nodes carry no source location until [`SyntaxNode::at`] is
//! applied to a leaf.

use reckon_type::{Fragment, Value};

use super::{SyntaxNode, Token, term};

fn token(value: Option<Value>, text: impl Into<String>) -> Token {
	Token {
		value,
		text: text.into(),
		fragment: Fragment::None,
	}
}

pub fn number(value: impl Into<Value>) -> SyntaxNode {
	let value = value.into();
	let text = value.to_string();
	SyntaxNode::leaf(term::NUMBER, token(Some(value), text))
}

/// A string literal; `raw` is the text between the quotes, escapes
/// unprocessed.
pub fn string(raw: &str) -> SyntaxNode {
	SyntaxNode::leaf(term::STRING, token(Some(Value::utf8(raw)), format!("'{}'", raw)))
}

pub fn name(text: &str) -> SyntaxNode {
	SyntaxNode::leaf(term::NAME, token(None, text))
}

/// A dotted identifier path such as `order.customer.name`.
pub fn ident(path: &str) -> SyntaxNode {
	SyntaxNode::branch(term::IDENTIFIER, path.split('.').map(name).collect())
}

pub fn null() -> SyntaxNode {
	ident("null")
}

pub fn boolean(value: bool) -> SyntaxNode {
	ident(if value { "true" } else { "false" })
}

pub fn call(function: &str, arguments: Vec<SyntaxNode>) -> SyntaxNode {
	SyntaxNode::branch(
		term::FUNCTION_CALL,
		vec![name(function), SyntaxNode::branch(term::ARGUMENT_LIST, arguments)],
	)
}

pub fn operator(symbol: &str) -> SyntaxNode {
	SyntaxNode::leaf(term::OPERATOR, token(None, symbol))
}

pub fn unary(symbol: &str, operand: SyntaxNode) -> SyntaxNode {
	SyntaxNode::branch(term::UNARY_EXPR, vec![operator(symbol), operand])
}

pub fn binary(left: SyntaxNode, symbol: &str, right: SyntaxNode) -> SyntaxNode {
	SyntaxNode::branch(term::BINARY_EXPR, vec![left, operator(symbol), right])
}

pub fn paren(inner: SyntaxNode) -> SyntaxNode {
	SyntaxNode::branch(term::PAREN_EXPR, vec![inner])
}

fn not() -> SyntaxNode {
	SyntaxNode::leaf(term::NOT, token(None, "NOT"))
}

pub fn list(items: Vec<SyntaxNode>) -> SyntaxNode {
	SyntaxNode::branch(term::EXPRESSION_LIST, items)
}

/// `WHEN value THEN then`
pub fn when(value: SyntaxNode, then: SyntaxNode) -> SyntaxNode {
	SyntaxNode::branch(term::WHEN_CLAUSE, vec![value, then])
}

/// `WHEN v1, v2, ... THEN then`
pub fn when_any(values: Vec<SyntaxNode>, then: SyntaxNode) -> SyntaxNode {
	SyntaxNode::branch(term::WHEN_CLAUSE, vec![list(values), then])
}

/// `CASE [variable] WHEN ... [ELSE otherwise] END`
pub fn case(variable: Option<SyntaxNode>, clauses: Vec<SyntaxNode>, otherwise: Option<SyntaxNode>) -> SyntaxNode {
	let mut children = Vec::with_capacity(3);
	if let Some(variable) = variable {
		children.push(SyntaxNode::branch(term::CASE_VARIABLE, vec![variable]));
	}
	children.push(SyntaxNode::branch(term::WHEN_LIST, clauses));
	if let Some(otherwise) = otherwise {
		children.push(SyntaxNode::branch(term::ELSE_CLAUSE, vec![otherwise]));
	}
	SyntaxNode::branch(term::CASE_EXPR, children)
}

fn with_not(mut children: Vec<SyntaxNode>, negated: bool) -> Vec<SyntaxNode> {
	if negated {
		children.insert(1, not());
	}
	children
}

pub fn between(test: SyntaxNode, lower: SyntaxNode, upper: SyntaxNode) -> SyntaxNode {
	SyntaxNode::branch(term::BETWEEN_EXPR, vec![test, lower, upper])
}

pub fn not_between(test: SyntaxNode, lower: SyntaxNode, upper: SyntaxNode) -> SyntaxNode {
	SyntaxNode::branch(term::BETWEEN_EXPR, with_not(vec![test, lower, upper], true))
}

/// `test [NOT] IN rhs`, where `rhs` is normally a [`list`].
pub fn in_expr(test: SyntaxNode, negated: bool, rhs: SyntaxNode) -> SyntaxNode {
	SyntaxNode::branch(term::IN_EXPR, with_not(vec![test, rhs], negated))
}

pub fn in_list(test: SyntaxNode, items: Vec<SyntaxNode>) -> SyntaxNode {
	in_expr(test, false, list(items))
}

pub fn not_in_list(test: SyntaxNode, items: Vec<SyntaxNode>) -> SyntaxNode {
	in_expr(test, true, list(items))
}

pub fn is_null(operand: SyntaxNode) -> SyntaxNode {
	SyntaxNode::branch(term::IS_NULL_EXPR, vec![operand])
}

pub fn is_not_null(operand: SyntaxNode) -> SyntaxNode {
	SyntaxNode::branch(term::IS_NULL_EXPR, vec![operand, not()])
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_ident_splits_segments() {
		let node = ident("order.customer.name");
		assert!(node.is(term::IDENTIFIER));
		let segments: Vec<_> = node.children.iter().map(SyntaxNode::text).collect();
		assert_eq!(segments, vec!["order", "customer", "name"]);
	}

	#[test]
	fn test_not_between_shape() {
		let node = not_between(ident("x"), number(1i32), number(5i32));
		assert_eq!(node.children.len(), 4);
		assert!(node.children[1].is(term::NOT));
	}

	#[test]
	fn test_case_shape() {
		let node = case(Some(ident("x")), vec![when(number(1i32), string("a"))], Some(string("c")));
		let terms: Vec<_> = node.children.iter().map(|c| c.term.as_str()).collect();
		assert_eq!(terms, vec![term::CASE_VARIABLE, term::WHEN_LIST, term::ELSE_CLAUSE]);
	}

	#[test]
	fn test_string_token() {
		let node = string("it\\'s");
		assert_eq!(node.text(), "'it\\'s'");
		assert_eq!(node.token.unwrap().value, Some(Value::utf8("it\\'s")));
	}
}
