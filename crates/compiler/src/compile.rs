// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Debug, Formatter};

use reckon_type::{
	Error, Type, Value,
	error::diagnostic::{cast::type_mismatch, evaluate::argument_count},
	return_error, return_internal_error,
};
use tracing::{debug, instrument};

use crate::{
	analyze::{Analyzer, fragment_of},
	atom::AtomRegistry,
	config::CompilerConfig,
	expression::{Expr, reduce::reduce},
	fold::FoldCache,
	lower::{CompiledExpr, lower},
	state::{CompilerState, Parameter},
	syntax::SyntaxNode,
};

/// A compiled expression bound to its signature. Cheap to clone and safe to
/// call from many threads at once.
#[derive(Clone)]
pub struct CompiledFunction {
	parameters: Vec<Parameter>,
	returns: Option<Type>,
	constant: Option<Value>,
	body: CompiledExpr,
}

impl CompiledFunction {
	/// Evaluates the expression with one value per declared parameter, in
	/// declaration order. Actions return [`Value::None`].
	pub fn call(&self, args: &[Value]) -> crate::Result<Value> {
		if args.len() != self.parameters.len() {
			return_error!(argument_count(self.parameters.len(), args.len()));
		}
		self.body.execute(args)
	}

	pub fn parameters(&self) -> &[Parameter] {
		&self.parameters
	}

	/// Declared return type; `None` for an action.
	pub fn returns(&self) -> Option<&Type> {
		self.returns.as_ref()
	}

	/// The result when the whole expression folded to a constant.
	pub fn as_constant(&self) -> Option<&Value> {
		self.constant.as_ref()
	}
}

impl Debug for CompiledFunction {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CompiledFunction")
			.field("parameters", &self.parameters)
			.field("returns", &self.returns)
			.field("constant", &self.constant)
			.finish()
	}
}

#[instrument(name = "compile", level = "trace", skip_all)]
pub(crate) fn compile(
	atoms: &AtomRegistry,
	cache: &FoldCache,
	config: &CompilerConfig,
	tree: &SyntaxNode,
	mut state: CompilerState,
) -> crate::Result<CompiledFunction> {
	let analyzer = Analyzer::new(atoms, cache, config);
	let expr = analyzer.analyze(tree, &mut state)?;
	let expr = reduce(analyzer.folder(), expr).map_err(|err| err.with_fragment(&tree.fragment()))?;

	let returns = state.returns().cloned();
	let (body, constant) = match &returns {
		Some(ty) => {
			let body = bind_return(&analyzer, tree, expr, ty)?;
			let constant = body.as_constant().cloned();
			(lower(analyzer.folder(), body), constant)
		}
		None => {
			let body = lower(analyzer.folder(), expr);
			let action = CompiledExpr::new(move |args| body.execute(args).map(|_| Value::None));
			(action, None)
		}
	};

	debug!(
		parameters = state.parameters().len(),
		returns = ?returns,
		constant = constant.is_some(),
		"compiled expression"
	);

	Ok(CompiledFunction {
		parameters: state.parameters().to_vec(),
		returns,
		constant,
		body,
	})
}

/// Adjusts the analyzed body to the declared return type.
fn bind_return(analyzer: &Analyzer<'_>, tree: &SyntaxNode, expr: Expr, ty: &Type) -> crate::Result<Expr> {
	let actual = expr.ty.clone();
	let Some(body) = analyzer.adjust(expr, ty).map_err(|err| err.with_fragment(&tree.fragment()))? else {
		return Err(Error(type_mismatch(fragment_of(tree), &actual, ty)));
	};
	if body.ty != *ty {
		return_internal_error!("compiled body has type {} but the signature returns {}", body.ty, ty);
	}
	Ok(body)
}
