// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Tunables of the analyzer, set through the runtime builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
	/// Largest IN list over an integer-like element type compiled into a
	/// chain of equality tests; longer lists use a precomputed set.
	pub integer_in_list_threshold: usize,
	/// Same as `integer_in_list_threshold`, for all other element types.
	pub in_list_threshold: usize,
	/// Deepest syntax tree the analyzer accepts.
	pub max_depth: usize,
}

impl Default for CompilerConfig {
	fn default() -> Self {
		Self {
			integer_in_list_threshold: 15,
			in_list_threshold: 5,
			max_depth: 256,
		}
	}
}
