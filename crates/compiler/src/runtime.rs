// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{ops::Deref, sync::Arc};

use tracing::debug;

use crate::{
	analyze::Analyzer,
	atom::{Atom, AtomRegistry},
	builtin,
	compile::{CompiledFunction, compile},
	config::CompilerConfig,
	expression::Expr,
	fold::FoldCache,
	state::CompilerState,
	syntax::SyntaxNode,
};

/// Entry point for hosts: the atom registry, the invoker cache and the
/// compiler configuration, shared by every compile call.
#[derive(Clone)]
pub struct Runtime(Arc<RuntimeInner>);

impl Runtime {
	pub fn builder() -> RuntimeBuilder {
		RuntimeBuilder {
			atoms: Vec::new(),
			dynamic: Vec::new(),
			cache: None,
			config: CompilerConfig::default(),
			builtins: true,
		}
	}
}

impl Deref for Runtime {
	type Target = RuntimeInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

pub struct RuntimeInner {
	atoms: AtomRegistry,
	cache: Arc<FoldCache>,
	config: CompilerConfig,
}

impl RuntimeInner {
	/// Compiles a syntax tree against the parameters, context and return
	/// type declared in `state`.
	pub fn compile(&self, tree: &SyntaxNode, state: CompilerState) -> crate::Result<CompiledFunction> {
		compile(&self.atoms, &self.cache, &self.config, tree, state)
	}

	/// Analyzes a syntax tree into its typed expression without lowering it.
	pub fn analyze(&self, tree: &SyntaxNode, state: &mut CompilerState) -> crate::Result<Expr> {
		Analyzer::new(&self.atoms, &self.cache, &self.config).analyze(tree, state)
	}

	/// Atoms may still be registered after the runtime is built; they apply
	/// to later compile calls.
	pub fn atoms(&self) -> &AtomRegistry {
		&self.atoms
	}

	pub fn cache(&self) -> &Arc<FoldCache> {
		&self.cache
	}

	pub fn config(&self) -> &CompilerConfig {
		&self.config
	}
}

pub struct RuntimeBuilder {
	atoms: Vec<Atom>,
	dynamic: Vec<Atom>,
	cache: Option<Arc<FoldCache>>,
	config: CompilerConfig,
	builtins: bool,
}

impl RuntimeBuilder {
	pub fn with_atom(mut self, atom: Atom) -> Self {
		self.atoms.push(atom);
		self
	}

	/// Appends a fallback resolver for otherwise unresolved identifiers.
	pub fn with_dynamic_handler(mut self, atom: Atom) -> Self {
		self.dynamic.push(atom);
		self
	}

	/// Uses a private invoker cache instead of the process-wide one.
	pub fn with_cache(mut self, cache: Arc<FoldCache>) -> Self {
		self.cache = Some(cache);
		self
	}

	pub fn with_config(mut self, config: CompilerConfig) -> Self {
		self.config = config;
		self
	}

	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.config.max_depth = max_depth;
		self
	}

	pub fn with_in_list_thresholds(mut self, integer: usize, other: usize) -> Self {
		self.config.integer_in_list_threshold = integer;
		self.config.in_list_threshold = other;
		self
	}

	/// Starts from an empty registry: not even `null`, `true` and `false`
	/// resolve.
	pub fn without_builtins(mut self) -> Self {
		self.builtins = false;
		self
	}

	pub fn build(self) -> crate::Result<Runtime> {
		let atoms = AtomRegistry::new();
		if self.builtins {
			builtin::register(&atoms)?;
		}
		for atom in self.atoms {
			atoms.register(atom)?;
		}
		for atom in self.dynamic {
			atoms.register_dynamic(atom)?;
		}

		let cache = self.cache.unwrap_or_else(FoldCache::global);
		debug!(atoms = atoms.len(), config = ?self.config, "built runtime");

		Ok(Runtime(Arc::new(RuntimeInner {
			atoms,
			cache,
			config: self.config,
		})))
	}
}

#[cfg(test)]
mod tests {
	use reckon_type::{Type, Value};

	use super::*;
	use crate::{atom::NativeFunction, syntax::build::*};

	#[test]
	fn test_builtins_registered_by_default() {
		let runtime = Runtime::builder().build().unwrap();
		assert!(runtime.atoms().is_registered("null"));
		assert!(runtime.atoms().is_registered("len"));

		let runtime = Runtime::builder().without_builtins().build().unwrap();
		assert!(runtime.atoms().is_empty());
	}

	#[test]
	fn test_duplicate_atom_fails_build() {
		let len = Atom::function(NativeFunction::unary("len", |s: String| s.len() as i32));
		let Err(err) = Runtime::builder().with_atom(len).build() else {
			panic!("a second `len` atom must be rejected");
		};
		assert!(err.is_internal());
	}

	#[test]
	fn test_global_cache_shared() {
		let a = Runtime::builder().build().unwrap();
		let b = Runtime::builder().build().unwrap();
		assert!(Arc::ptr_eq(a.cache(), b.cache()));

		let private = Arc::new(FoldCache::new());
		let c = Runtime::builder().with_cache(private.clone()).build().unwrap();
		assert!(Arc::ptr_eq(c.cache(), &private));
	}

	#[test]
	fn test_compile_and_call() {
		let runtime = Runtime::builder()
			.with_atom(Atom::function(NativeFunction::binary("hypot", |a: f64, b: f64| a.hypot(b))))
			.build()
			.unwrap();
		let state = CompilerState::new().with_parameter("@a", Type::Float8).returning(Type::Float8);
		let function = runtime.compile(&call("hypot", vec![ident("@a"), number(4.0f64)]), state).unwrap();
		assert_eq!(function.call(&[Value::Float8(3.0)]).unwrap(), Value::Float8(5.0));
	}

	#[test]
	fn test_late_registration() {
		let runtime = Runtime::builder().build().unwrap();
		let tree = call("triple", vec![number(2i32)]);
		let err = runtime.compile(&tree, CompilerState::new().returning(Type::Int4)).unwrap_err();
		assert_eq!(err.code, "FUNCTION_001");

		runtime.atoms().register(Atom::function(NativeFunction::unary("triple", |x: i32| x * 3))).unwrap();
		let function = runtime.compile(&tree, CompilerState::new().returning(Type::Int4)).unwrap();
		assert_eq!(function.as_constant(), Some(&Value::Int4(6)));
	}

	#[test]
	fn test_config_applies() {
		let runtime = Runtime::builder().with_max_depth(4).build().unwrap();
		let mut tree = number(1i32);
		for _ in 0..6 {
			tree = paren(tree);
		}
		let err = runtime.compile(&tree, CompilerState::new().returning(Type::Int4)).unwrap_err();
		assert_eq!(err.code, "COMPILE_009");
	}
}
