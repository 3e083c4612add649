// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{analyze::Analyzer, atom::Atom, expression::Expr, state::CompilerState, syntax::SyntaxNode};

fn null(_: &Analyzer<'_>, _: &SyntaxNode, _: &mut CompilerState) -> crate::Result<Option<Expr>> {
	Ok(Some(Expr::void()))
}

fn truth(_: &Analyzer<'_>, _: &SyntaxNode, _: &mut CompilerState) -> crate::Result<Option<Expr>> {
	Ok(Some(Expr::boolean(true)))
}

fn falsehood(_: &Analyzer<'_>, _: &SyntaxNode, _: &mut CompilerState) -> crate::Result<Option<Expr>> {
	Ok(Some(Expr::boolean(false)))
}

pub(super) fn atoms() -> Vec<Atom> {
	vec![
		Atom::identifier_generator("null", null),
		Atom::identifier_generator("true", truth),
		Atom::identifier_generator("false", falsehood),
	]
}
