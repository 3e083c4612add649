// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
	sync::Arc,
};

use serde::{Deserialize, Serialize};

macro_rules! statement_position {
	($name:ident) => {
		#[repr(transparent)]
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		pub struct $name(pub u32);

		impl Deref for $name {
			type Target = u32;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}

		impl PartialEq<u32> for $name {
			fn eq(&self, other: &u32) -> bool {
				self.0 == *other
			}
		}
	};
}

statement_position!(StatementPosition);
statement_position!(StatementLine);
statement_position!(StatementColumn);

/// Source location of a piece of an expression.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Fragment {
	/// No location information available
	#[default]
	None,

	/// Fragment of the compiled source text
	Statement {
		text: Arc<str>,
		position: StatementPosition,
		line: StatementLine,
		column: StatementColumn,
		length: u32,
	},

	/// Fragment produced by the compiler itself
	Internal {
		text: Arc<str>,
	},
}

impl Fragment {
	pub fn statement(text: impl Into<Arc<str>>, position: u32, line: u32, column: u32, length: u32) -> Self {
		Fragment::Statement {
			text: text.into(),
			position: StatementPosition(position),
			line: StatementLine(line),
			column: StatementColumn(column),
			length,
		}
	}

	pub fn internal(text: impl Into<Arc<str>>) -> Self {
		Fragment::Internal {
			text: text.into(),
		}
	}

	pub fn text(&self) -> &str {
		match self {
			Fragment::None => "",
			Fragment::Statement {
				text,
				..
			}
			| Fragment::Internal {
				text,
			} => text,
		}
	}

	pub fn is_none(&self) -> bool {
		matches!(self, Fragment::None)
	}

	/// True when the fragment points into the compiled source text.
	pub fn is_located(&self) -> bool {
		matches!(self, Fragment::Statement { .. })
	}

	pub fn position(&self) -> Option<StatementPosition> {
		match self {
			Fragment::Statement {
				position,
				..
			} => Some(*position),
			_ => None,
		}
	}

	pub fn line(&self) -> StatementLine {
		match self {
			Fragment::Statement {
				line,
				..
			} => *line,
			_ => StatementLine(1),
		}
	}

	pub fn column(&self) -> StatementColumn {
		match self {
			Fragment::Statement {
				column,
				..
			} => *column,
			_ => StatementColumn(0),
		}
	}

	pub fn length(&self) -> u32 {
		match self {
			Fragment::Statement {
				length,
				..
			} => *length,
			Fragment::Internal {
				text,
			} => text.len() as u32,
			Fragment::None => 0,
		}
	}
}

/// Renders the location part only: `pos P, line L, col C, length N`.
pub struct Location<'a>(pub &'a Fragment);

impl Display for Location<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.0 {
			Fragment::Statement {
				position,
				line,
				column,
				length,
				..
			} => write!(f, "pos {}, line {}, col {}, length {}", position.0, line.0, column.0, length),
			_ => Ok(()),
		}
	}
}

impl Display for Fragment {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Location(self).fmt(f)
	}
}
