// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reckon_type::{
	error::diagnostic::function::{arity_mismatch, invalid_argument_type, not_a_function, unknown_function},
	return_error,
};
use tracing::trace;

use super::{Analyzer, child, expect_children, fragment_of};
use crate::{
	atom::{AtomBinding, AtomKind},
	expression::Expr,
	state::CompilerState,
	syntax::{SyntaxNode, term},
};

impl Analyzer<'_> {
	pub(super) fn call(&self, node: &SyntaxNode, state: &mut CompilerState) -> crate::Result<Expr> {
		expect_children(node, 2)?;
		let name = child(node, 0)?;
		let arguments = child(node, 1)?;
		if !arguments.is(term::ARGUMENT_LIST) {
			return Err(super::structure(node, "expected an argument list"));
		}

		let Some(atom) = self.atoms().get(name.text()) else {
			return_error!(unknown_function(fragment_of(name)));
		};
		if atom.kind() != AtomKind::Function {
			return_error!(not_a_function(fragment_of(name)));
		}

		match atom.binding() {
			AtomBinding::Native(callable) => {
				let signature = callable.signature();
				if signature.arity() != arguments.children.len() {
					return_error!(arity_mismatch(
						fragment_of(name),
						signature.arity(),
						arguments.children.len()
					));
				}

				let mut args = Vec::with_capacity(signature.arity());
				for (index, (argument, param)) in arguments.children.iter().zip(&signature.params).enumerate() {
					let analyzed = self.analyze(argument, state)?;
					let actual = analyzed.ty.clone();
					let Some(adjusted) = self.adjust(analyzed, param)? else {
						return_error!(invalid_argument_type(fragment_of(argument), index + 1, param, &actual));
					};
					args.push(adjusted);
				}

				trace!(function = callable.name(), arity = args.len(), "bound native call");
				self.folder().call(callable.clone(), args)
			}
			AtomBinding::Generator(generator) => match generator.generate(self, node, state)? {
				Some(expr) => Ok(expr),
				None => Err(reckon_type::Error(unknown_function(fragment_of(name)))),
			},
		}
	}
}
