// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;
use reckon_type::return_internal_error;
use tracing::debug;

use super::{Atom, AtomBinding, AtomKind};

/// Statically registered atoms keyed by lower-cased name, plus the ordered,
/// append-only list of dynamic identifier handlers.
///
/// Writes are expected during setup; compilation only reads.
#[derive(Default)]
pub struct AtomRegistry {
	atoms: RwLock<HashMap<String, Arc<Atom>>>,
	dynamic: RwLock<Vec<Arc<Atom>>>,
}

impl AtomRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn register(&self, atom: Atom) -> crate::Result<()> {
		let key = atom.name().to_lowercase();
		let mut atoms = self.atoms.write();
		if atoms.contains_key(&key) {
			return_internal_error!("atom '{}' is already registered", atom.name());
		}
		debug!(name = atom.name(), kind = ?atom.kind(), "registered atom");
		atoms.insert(key, Arc::new(atom));
		Ok(())
	}

	/// Appends a fallback resolver for identifiers no other rule resolves.
	/// Handlers must be identifier atoms bound to a generator.
	pub fn register_dynamic(&self, atom: Atom) -> crate::Result<()> {
		if atom.kind() != AtomKind::Identifier || !matches!(atom.binding(), AtomBinding::Generator(_)) {
			return_internal_error!(
				"dynamic handler '{}' must be an identifier atom bound to a generator",
				atom.name()
			);
		}
		debug!(name = atom.name(), "registered dynamic handler");
		self.dynamic.write().push(Arc::new(atom));
		Ok(())
	}

	pub fn is_registered(&self, name: &str) -> bool {
		self.atoms.read().contains_key(&name.to_lowercase())
	}

	pub fn get(&self, name: &str) -> Option<Arc<Atom>> {
		self.atoms.read().get(&name.to_lowercase()).cloned()
	}

	/// Snapshot of the dynamic handlers in registration order.
	pub fn dynamic_handlers(&self) -> Vec<Arc<Atom>> {
		self.dynamic.read().clone()
	}

	pub fn len(&self) -> usize {
		self.atoms.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.atoms.read().is_empty()
	}
}
