// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod native;
mod registry;

use std::{
	fmt::{Debug, Formatter},
	sync::Arc,
};

pub(crate) use native::argument;
pub use native::{NativeCallable, NativeFunction, Signature};
pub use registry::AtomRegistry;

use crate::{analyze::Analyzer, expression::Expr, state::CompilerState, syntax::SyntaxNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomKind {
	/// Resolves a bare (possibly dotted) name
	Identifier,
	/// Resolves the name of a function call
	Function,
}

/// Builds a typed expression directly from the syntax tree. Identifier
/// generators receive the root name segment, function generators the whole
/// call node, and own the interpretation of its arguments.
///
/// Returning `None` declines the node: the analyzer continues resolution
/// for identifiers and reports an unknown function for calls.
pub trait Generator: Send + Sync {
	fn generate(
		&self,
		analyzer: &Analyzer<'_>,
		node: &SyntaxNode,
		state: &mut CompilerState,
	) -> crate::Result<Option<Expr>>;
}

impl<F> Generator for F
where
	F: Fn(&Analyzer<'_>, &SyntaxNode, &mut CompilerState) -> crate::Result<Option<Expr>> + Send + Sync,
{
	fn generate(
		&self,
		analyzer: &Analyzer<'_>,
		node: &SyntaxNode,
		state: &mut CompilerState,
	) -> crate::Result<Option<Expr>> {
		self(analyzer, node, state)
	}
}

#[derive(Clone)]
pub enum AtomBinding {
	Native(Arc<dyn NativeCallable>),
	Generator(Arc<dyn Generator>),
}

impl Debug for AtomBinding {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			AtomBinding::Native(callable) => write!(f, "Native({:?})", callable),
			AtomBinding::Generator(_) => f.write_str("Generator"),
		}
	}
}

/// A named entity the analyzer consults while resolving identifiers and
/// function calls. Names compare case-insensitively.
#[derive(Debug, Clone)]
pub struct Atom {
	name: String,
	kind: AtomKind,
	binding: AtomBinding,
}

impl Atom {
	pub fn new(name: impl Into<String>, kind: AtomKind, binding: AtomBinding) -> Self {
		Self {
			name: name.into(),
			kind,
			binding,
		}
	}

	/// Function atom bound to a native callable; the atom takes the
	/// callable's name.
	pub fn function(callable: impl NativeCallable + 'static) -> Self {
		let name = callable.name().to_string();
		Self::new(name, AtomKind::Function, AtomBinding::Native(Arc::new(callable)))
	}

	pub fn function_generator(name: impl Into<String>, generator: impl Generator + 'static) -> Self {
		Self::new(name, AtomKind::Function, AtomBinding::Generator(Arc::new(generator)))
	}

	/// Identifier atom bound to a native callable taking no argument or the
	/// ambient context.
	pub fn identifier(callable: impl NativeCallable + 'static) -> Self {
		let name = callable.name().to_string();
		Self::new(name, AtomKind::Identifier, AtomBinding::Native(Arc::new(callable)))
	}

	pub fn identifier_generator(name: impl Into<String>, generator: impl Generator + 'static) -> Self {
		Self::new(name, AtomKind::Identifier, AtomBinding::Generator(Arc::new(generator)))
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn kind(&self) -> AtomKind {
		self.kind
	}

	pub fn binding(&self) -> &AtomBinding {
		&self.binding
	}
}
