// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The atom library installed into every runtime unless the builder opts
//! out: the `null`, `true` and `false` literals, clock readings, and the
//! common text, math, temporal and conditional functions.

mod clock;
mod conditional;
mod constant;
mod math;
mod temporal;
mod text;

use tracing::debug;

use crate::atom::{Atom, AtomRegistry};

pub fn atoms() -> Vec<Atom> {
	let mut atoms = Vec::new();
	atoms.extend(constant::atoms());
	atoms.extend(clock::atoms());
	atoms.extend(text::atoms());
	atoms.extend(math::atoms());
	atoms.extend(temporal::atoms());
	atoms.extend(conditional::atoms());
	atoms
}

pub fn register(registry: &AtomRegistry) -> crate::Result<()> {
	let atoms = atoms();
	debug!(count = atoms.len(), "registering builtin atoms");
	for atom in atoms {
		registry.register(atom)?;
	}
	Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
	use reckon_type::{Type, Value};

	use crate::{CompiledFunction, Runtime, state::CompilerState, syntax::SyntaxNode};

	pub fn compile(tree: &SyntaxNode, returns: Type) -> crate::Result<CompiledFunction> {
		let runtime = Runtime::builder().build()?;
		runtime.compile(tree, CompilerState::new().returning(returns))
	}

	/// Compiles a parameterless expression and evaluates it once.
	pub fn eval(tree: &SyntaxNode, returns: Type) -> Value {
		compile(tree, returns).unwrap().call(&[]).unwrap()
	}
}
