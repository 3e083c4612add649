// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Text functions. A null string reads as the empty string, matching
//! concatenation.

use reckon_type::value::text::{contains_ignore_case, ends_with_ignore_case, starts_with_ignore_case};

use crate::atom::{Atom, NativeFunction};

fn len(s: Option<String>) -> i32 {
	s.map_or(0, |s| s.chars().count() as i32)
}

/// Characters `[start, start + length)`, clamped to the string; `start` is
/// zero based.
fn substring(s: Option<String>, start: i32, length: i32) -> Option<String> {
	let s = s?;
	let start = start.max(0) as usize;
	let length = length.max(0) as usize;
	Some(s.chars().skip(start).take(length).collect())
}

fn with_both(f: fn(&str, &str) -> bool) -> impl Fn(Option<String>, Option<String>) -> bool {
	move |haystack, needle| f(haystack.as_deref().unwrap_or(""), needle.as_deref().unwrap_or(""))
}

pub(super) fn atoms() -> Vec<Atom> {
	vec![
		Atom::function(NativeFunction::unary("len", len)),
		Atom::function(NativeFunction::unary("upper", |s: Option<String>| s.map(|s| s.to_uppercase()))),
		Atom::function(NativeFunction::unary("lower", |s: Option<String>| s.map(|s| s.to_lowercase()))),
		Atom::function(NativeFunction::unary("trim", |s: Option<String>| s.map(|s| s.trim().to_string()))),
		Atom::function(NativeFunction::ternary("substring", substring)),
		Atom::function(NativeFunction::binary("contains", with_both(contains_ignore_case))),
		Atom::function(NativeFunction::binary("startswith", with_both(starts_with_ignore_case))),
		Atom::function(NativeFunction::binary("endswith", with_both(ends_with_ignore_case))),
	]
}
