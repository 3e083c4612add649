// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Ordinal case-insensitive text comparison. Characters are compared by their
//! simple upper-case mapping, without any culture specific collation.

use std::cmp::Ordering;

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
	s.chars().flat_map(char::to_uppercase)
}

pub fn compare_ignore_case(l: &str, r: &str) -> Ordering {
	folded(l).cmp(folded(r))
}

pub fn eq_ignore_case(l: &str, r: &str) -> bool {
	folded(l).eq(folded(r))
}

/// Normal form for hashing: equal under [`eq_ignore_case`] gives equal keys.
pub fn fold_case(s: &str) -> String {
	folded(s).collect()
}

/// Ordinal case-insensitive search for `needle` inside `haystack`.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
	fold_case(haystack).contains(&fold_case(needle))
}

pub fn starts_with_ignore_case(haystack: &str, needle: &str) -> bool {
	fold_case(haystack).starts_with(&fold_case(needle))
}

pub fn ends_with_ignore_case(haystack: &str, needle: &str) -> bool {
	fold_case(haystack).ends_with(&fold_case(needle))
}
