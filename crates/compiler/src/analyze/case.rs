// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reckon_type::{Error, Fragment, Type, error::diagnostic::cast::type_mismatch};
use tracing::trace;

use super::{Analyzer, child, expect_children, fragment_of, structure};
use crate::{
	error::CompileError,
	expression::{Expr, ExprKind, SwitchCase},
	state::CompilerState,
	syntax::{SyntaxNode, term},
};

/// Parsed shape of a CASE node.
struct CaseShape<'n> {
	variable: Option<&'n SyntaxNode>,
	clauses: Vec<(&'n SyntaxNode, &'n SyntaxNode)>,
	otherwise: Option<&'n SyntaxNode>,
}

fn shape(node: &SyntaxNode) -> crate::Result<CaseShape<'_>> {
	let mut children = node.children.iter().peekable();

	let variable = match children.peek().copied() {
		Some(c) if c.is(term::CASE_VARIABLE) => {
			children.next();
			expect_children(c, 1)?;
			Some(child(c, 0)?)
		}
		_ => None,
	};

	let Some(when_list) = children.next().filter(|c| c.is(term::WHEN_LIST)) else {
		return Err(structure(node, "expected a WHEN list"));
	};
	if when_list.children.is_empty() {
		return Err(structure(when_list, "CASE without WHEN clauses"));
	}
	let mut clauses = Vec::with_capacity(when_list.children.len());
	for clause in &when_list.children {
		if !clause.is(term::WHEN_CLAUSE) {
			return Err(structure(clause, "expected a WHEN clause"));
		}
		expect_children(clause, 2)?;
		clauses.push((child(clause, 0)?, child(clause, 1)?));
	}

	let otherwise = match children.next() {
		Some(c) if c.is(term::ELSE_CLAUSE) => {
			expect_children(c, 1)?;
			Some(child(c, 0)?)
		}
		Some(c) => return Err(structure(c, "expected an ELSE clause")),
		None => None,
	};
	if children.next().is_some() {
		return Err(structure(node, "unexpected children after ELSE"));
	}

	Ok(CaseShape {
		variable,
		clauses,
		otherwise,
	})
}

impl Analyzer<'_> {
	pub(super) fn case(&self, node: &SyntaxNode, state: &mut CompilerState) -> crate::Result<Expr> {
		let shape = shape(node)?;
		match shape.variable {
			Some(variable) => self.dispatch_case(variable, &shape, state),
			None => self.guard_case(&shape, state),
		}
	}

	/// Brings two branch results to a common type: `then` to the type of
	/// `tail` if possible, otherwise `tail` to the type of `then`.
	pub fn unify_branches(&self, then: Expr, tail: Expr, fragment: &Fragment) -> crate::Result<(Expr, Expr)> {
		let (then_ty, tail_ty) = (then.ty.clone(), tail.ty.clone());
		if then_ty == tail_ty {
			return Ok((then, tail));
		}
		if let Some(adjusted) = self.adjust(then.clone(), &tail_ty)? {
			return Ok((adjusted, tail));
		}
		if let Some(adjusted) = self.adjust(tail, &then_ty)? {
			return Ok((then, adjusted));
		}
		Err(CompileError::IncompatibleCaseTypes {
			left: then_ty,
			right: tail_ty,
			fragment: fragment.clone(),
		}
		.into())
	}

	/// `CASE WHEN c1 THEN r1 ... [ELSE e] END`, built right to left into
	/// nested conditionals.
	fn guard_case(&self, shape: &CaseShape<'_>, state: &mut CompilerState) -> crate::Result<Expr> {
		let mut branches = Vec::with_capacity(shape.clauses.len());
		for &(when, then) in &shape.clauses {
			if when.is(term::EXPRESSION_LIST) {
				return Err(structure(when, "a WHEN without CASE variable takes a single condition"));
			}
			let condition = self.analyze(when, state)?;
			if condition.ty != Type::Boolean {
				return Err(CompileError::NonBooleanCondition {
					actual: condition.ty,
					fragment: when.fragment(),
				}
				.into());
			}
			let result = self.analyze(then, state)?;
			branches.push((condition, result, then));
		}

		let mut tail = match shape.otherwise {
			Some(otherwise) => self.analyze(otherwise, state)?,
			None => Expr::void(),
		};
		for (condition, result, then) in branches.into_iter().rev() {
			let (result, rest) = self.unify_branches(result, tail, &then.fragment())?;
			tail = self.folder().conditional(condition, result, rest);
		}
		Ok(tail)
	}

	/// `CASE v WHEN k1 THEN r1 ... [ELSE e] END`, a multi-way branch on
	/// constant keys.
	fn dispatch_case(
		&self,
		variable_node: &SyntaxNode,
		shape: &CaseShape<'_>,
		state: &mut CompilerState,
	) -> crate::Result<Expr> {
		let variable = self.analyze(variable_node, state)?;
		if variable.is_constant() {
			return Err(CompileError::ConstantCaseVariable {
				fragment: variable_node.fragment(),
			}
			.into());
		}

		let mut branches = Vec::with_capacity(shape.clauses.len());
		for &(when, then) in &shape.clauses {
			let values: Vec<&SyntaxNode> = match when.is(term::EXPRESSION_LIST) {
				true => when.children.iter().collect(),
				false => vec![when],
			};
			let mut keys = Vec::with_capacity(values.len());
			for value_node in values {
				let value = self.analyze(value_node, state)?;
				let actual = value.ty.clone();
				let Some(value) = self.adjust(value, &variable.ty)? else {
					return Err(Error(type_mismatch(fragment_of(value_node), &actual, &variable.ty)));
				};
				match value.kind {
					ExprKind::Constant(key) => keys.push(key),
					_ => {
						return Err(CompileError::NonConstantWhen {
							fragment: value_node.fragment(),
						}
						.into());
					}
				}
			}
			branches.push((keys, self.analyze(then, state)?, then));
		}
		let otherwise = match shape.otherwise {
			Some(otherwise) => Some((self.analyze(otherwise, state)?, otherwise)),
			None => None,
		};

		let canonical = canonical_type(
			branches.iter().map(|(_, result, _)| &result.ty),
			otherwise.as_ref().map(|(expr, _)| &expr.ty),
		);
		trace!(ty = %canonical, branches = branches.len(), "unified CASE branch type");

		let mut cases = Vec::with_capacity(branches.len());
		for (keys, result, then) in branches {
			cases.push(SwitchCase {
				keys,
				body: self.to_canonical(result, &canonical, then)?,
			});
		}
		let default = match otherwise {
			Some((expr, node)) => self.to_canonical(expr, &canonical, node)?,
			None => Expr::default_of(&canonical),
		};

		Ok(Expr::new(
			ExprKind::Switch {
				key: Box::new(variable),
				cases,
				default: Box::new(default),
			},
			canonical,
		))
	}

	fn to_canonical(&self, expr: Expr, canonical: &Type, node: &SyntaxNode) -> crate::Result<Expr> {
		let actual = expr.ty.clone();
		match self.adjust(expr, canonical)? {
			Some(adjusted) => Ok(adjusted),
			None => Err(CompileError::IncompatibleCaseTypes {
				left: canonical.clone(),
				right: actual,
				fragment: node.fragment(),
			}
			.into()),
		}
	}
}

/// The first non-void THEN type, made nullable when some THEN is void.
/// Without a non-void THEN the ELSE type is used.
fn canonical_type<'t>(results: impl Iterator<Item = &'t Type>, otherwise: Option<&Type>) -> Type {
	let mut canonical = None;
	let mut has_void = false;
	for ty in results {
		match ty.is_void() {
			true => has_void = true,
			false if canonical.is_none() => canonical = Some(ty.clone()),
			false => {}
		}
	}
	match (canonical, has_void) {
		(Some(ty), true) => Type::nullable(ty),
		(Some(ty), false) => ty,
		(None, _) => otherwise.cloned().unwrap_or(Type::Void),
	}
}
