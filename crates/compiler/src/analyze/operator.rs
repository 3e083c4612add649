// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reckon_type::{
	Error, Fragment, Type,
	error::diagnostic::operator::{
		binary_operator_not_applicable, unary_operator_not_applicable, unknown_operator, void_operands,
	},
	return_error,
};

use super::{Analyzer, child, expect_children, fragment_of};
use crate::{
	expression::Expr,
	operator::{BinaryOp, UnaryOp, categorize, lift, plan, unary},
	state::CompilerState,
	syntax::SyntaxNode,
};

impl Analyzer<'_> {
	pub(super) fn unary(&self, node: &SyntaxNode, state: &mut CompilerState) -> crate::Result<Expr> {
		expect_children(node, 2)?;
		let symbol = child(node, 0)?;
		let Some(op) = UnaryOp::from_symbol(symbol.text()) else {
			return_error!(unknown_operator(fragment_of(symbol)));
		};
		let operand = self.analyze(child(node, 1)?, state)?;
		self.apply_unary(op, operand, &fragment_of(symbol))
	}

	pub(super) fn binary(&self, node: &SyntaxNode, state: &mut CompilerState) -> crate::Result<Expr> {
		expect_children(node, 3)?;
		let left = self.analyze(child(node, 0)?, state)?;
		let symbol = child(node, 1)?;
		let Some(op) = BinaryOp::from_symbol(symbol.text()) else {
			return_error!(unknown_operator(fragment_of(symbol)));
		};
		let right = self.analyze(child(node, 2)?, state)?;
		self.apply_binary(op, left, right, &fragment_of(symbol))
	}

	/// Types and folds a source-level unary operator over an analyzed
	/// operand. A nullable operand lifts the result.
	pub fn apply_unary(&self, op: UnaryOp, operand: Expr, fragment: &Fragment) -> crate::Result<Expr> {
		let kind = match operand.is_void() {
			true => None,
			false => unary::plan(&op, &operand.ty),
		};
		let Some(kind) = kind else {
			return_error!(unary_operator_not_applicable(fragment.clone(), op.symbol(), &operand.ty));
		};

		let target = match operand.ty.is_nullable() {
			true => Type::nullable(kind),
			false => kind,
		};
		let actual = operand.ty.clone();
		let Some(operand) = self.adjust(operand, &target)? else {
			return_error!(unary_operator_not_applicable(fragment.clone(), op.symbol(), &actual));
		};
		self.folder().unary(op, operand, target)
	}

	/// Types and folds a binary operator over analyzed operands: a void side
	/// takes the default of the other side, both sides are widened to the
	/// operand kind of the operator's category, and nullable operands lift
	/// the result.
	pub fn apply_binary(&self, op: BinaryOp, left: Expr, right: Expr, fragment: &Fragment) -> crate::Result<Expr> {
		let (left, right) = match (left.is_void(), right.is_void()) {
			(true, true) => return_error!(void_operands(fragment.clone(), op.symbol())),
			(true, false) => (Expr::default_of(&right.ty), right),
			(false, true) => {
				let right = Expr::default_of(&left.ty);
				(left, right)
			}
			(false, false) => (left, right),
		};

		let not_applicable = |left: &Type, right: &Type| -> Error {
			Error(binary_operator_not_applicable(fragment.clone(), op.symbol(), left, right))
		};

		let Some(plan) = categorize(&left.ty, &right.ty).and_then(|category| plan(op, &category)) else {
			return Err(not_applicable(&left.ty, &right.ty));
		};

		let (left_ty, right_ty) = (left.ty.clone(), right.ty.clone());
		let nullable = left_ty.is_nullable() || right_ty.is_nullable();
		let left_target = operand_target(plan.left, &left_ty);
		let right_target = operand_target(plan.right, &right_ty);

		let Some(left) = self.adjust(left, &left_target)? else {
			return Err(not_applicable(&left_ty, &right_ty));
		};
		let Some(right) = self.adjust(right, &right_target)? else {
			return Err(not_applicable(&left_ty, &right_ty));
		};

		self.folder().binary(op, left, right, lift(op, plan.result, nullable))
	}
}

fn operand_target(kind: Type, actual: &Type) -> Type {
	match actual.is_nullable() {
		true => Type::nullable(kind),
		false => kind,
	}
}
