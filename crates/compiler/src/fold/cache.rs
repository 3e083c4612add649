// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use dashmap::{DashMap, mapref::entry::Entry};
use once_cell::sync::Lazy;
use reckon_type::{Type, Value};
use smallvec::SmallVec;
use tracing::debug;

use crate::operator::{BinaryOp, UnaryOp};

/// A compiled evaluation of one operation over fixed operand types.
pub type Invoker = Arc<dyn Fn(&[Value]) -> crate::Result<Value> + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
	Binary(BinaryOp),
	Unary(UnaryOp),
	/// Member read, keyed by the lower-cased member name
	Member(String),
}

type Key = (Operation, SmallVec<[Type; 2]>);

static GLOBAL: Lazy<Arc<FoldCache>> = Lazy::new(|| Arc::new(FoldCache::new()));

/// Memoized invokers keyed by `(operation, operand types)`, shared by
/// compile-time folding and the lowered run-time closures.
///
/// Safe for concurrent get-or-create; entries are never evicted.
#[derive(Default)]
pub struct FoldCache {
	invokers: DashMap<Key, Invoker>,
}

impl FoldCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// The process-wide cache used by runtimes that are not given their own.
	pub fn global() -> Arc<FoldCache> {
		GLOBAL.clone()
	}

	pub fn get_or_create(&self, operation: Operation, operands: &[Type], create: impl FnOnce() -> Invoker) -> Invoker {
		let key: Key = (operation, operands.iter().cloned().collect());
		if let Some(invoker) = self.invokers.get(&key) {
			return invoker.value().clone();
		}

		match self.invokers.entry(key) {
			Entry::Occupied(entry) => entry.get().clone(),
			Entry::Vacant(entry) => {
				debug!(operation = ?entry.key().0, operands = ?entry.key().1, "creating invoker");
				entry.insert(create()).value().clone()
			}
		}
	}

	pub fn len(&self) -> usize {
		self.invokers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.invokers.is_empty()
	}
}
