// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use reckon_type::{
	Error, Type,
	error::diagnostic::atom::{context_mismatch, context_required, unknown_atom, unknown_member},
	return_error, return_internal_error,
};
use tracing::trace;

use super::{Analyzer, fragment_of, structure};
use crate::{
	atom::{AtomBinding, AtomKind, NativeCallable},
	expression::Expr,
	member,
	state::CompilerState,
	syntax::SyntaxNode,
};

impl Analyzer<'_> {
	/// A dotted path: the root segment resolves through parameters, context
	/// members and atoms, every further segment is a member lookup.
	pub(super) fn identifier(&self, node: &SyntaxNode, state: &mut CompilerState) -> crate::Result<Expr> {
		let Some((root, path)) = node.children.split_first() else {
			return Err(structure(node, "identifier without segments"));
		};

		let mut expr = self.resolve_root(root, state)?;
		for segment in path {
			let Some(member) = member::lookup(&expr.ty, segment.text()) else {
				return_error!(unknown_member(fragment_of(segment), &expr.ty));
			};
			expr = self.folder().member(expr, member).map_err(|err| err.with_fragment(&segment.fragment()))?;
		}
		Ok(expr)
	}

	fn resolve_root(&self, root: &SyntaxNode, state: &mut CompilerState) -> crate::Result<Expr> {
		let name = root.text();

		if let Some((slot, parameter)) = state.parameter(name) {
			trace!(name, slot, "resolved parameter");
			return Ok(Expr::variable(slot, parameter.ty.clone()));
		}

		if let Some((slot, context)) = state.context() {
			let context = Type::Object(context.clone());
			if let Some(member) = member::lookup(&context, name) {
				trace!(name, "resolved context member");
				return self.folder().member(Expr::variable(slot, context), member);
			}
		}

		if let Some(atom) = self.atoms().get(name).filter(|atom| atom.kind() == AtomKind::Identifier) {
			match atom.binding() {
				AtomBinding::Native(callable) => {
					trace!(name, "resolved native identifier atom");
					return self.bind_identifier(root, callable.clone(), state);
				}
				AtomBinding::Generator(generator) => {
					if let Some(expr) = generator.generate(self, root, state)? {
						trace!(name, "resolved identifier generator");
						return Ok(expr);
					}
				}
			}
		}

		for handler in self.atoms().dynamic_handlers() {
			if let AtomBinding::Generator(generator) = handler.binding() {
				if let Some(expr) = generator.generate(self, root, state)? {
					trace!(name, handler = handler.name(), "resolved by dynamic handler");
					return Ok(expr);
				}
			}
		}

		Err(Error(unknown_atom(fragment_of(root))))
	}

	/// Native identifier atoms take no argument or the ambient context.
	fn bind_identifier(
		&self,
		root: &SyntaxNode,
		callable: Arc<dyn NativeCallable>,
		state: &CompilerState,
	) -> crate::Result<Expr> {
		let params = callable.signature().params.clone();
		match params.as_slice() {
			[] => self.folder().call(callable, vec![]),
			[expected] => {
				let Some((slot, context)) = state.context() else {
					return_error!(context_required(fragment_of(root), expected));
				};
				let actual = Type::Object(context.clone());
				let Some(argument) = self.adjust(Expr::variable(slot, actual.clone()), expected)? else {
					return_error!(context_mismatch(fragment_of(root), expected, &actual));
				};
				self.folder().call(callable, vec![argument])
			}
			_ => return_internal_error!(
				"identifier atom '{}' takes {} arguments, at most one is supported",
				callable.name(),
				params.len()
			),
		}
	}
}
