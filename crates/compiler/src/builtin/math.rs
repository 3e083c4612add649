// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::atom::{Atom, NativeFunction};

fn sqrt(x: f64) -> Result<f64, String> {
	if x < 0.0 {
		return Err(format!("square root of negative number {}", x));
	}
	Ok(x.sqrt())
}

pub(super) fn atoms() -> Vec<Atom> {
	vec![
		Atom::function(NativeFunction::unary("abs", f64::abs)),
		Atom::function(NativeFunction::unary("round", f64::round)),
		Atom::function(NativeFunction::unary("floor", f64::floor)),
		Atom::function(NativeFunction::unary("ceiling", f64::ceil)),
		Atom::function(NativeFunction::try_unary("sqrt", sqrt)),
		Atom::function(NativeFunction::binary("power", f64::powf)),
	]
}
