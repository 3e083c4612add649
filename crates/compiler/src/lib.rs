// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Analyze-and-compile pipeline of the reckon expression language.
//!
//! A syntax tree produced by an external parser is type checked by the
//! [`analyze::Analyzer`] into a typed [`expression::Expr`], constant folded
//! along the way, lowered into nested native closures and handed back to the
//! host as a [`CompiledFunction`].
//!
//! ```ignore
//! let runtime = Runtime::builder().build()?;
//! let state = CompilerState::new().with_parameter("@x", Type::Int4).returning(Type::Boolean);
//! let function = runtime.compile(&tree, state)?;
//! assert_eq!(function.call(&[Value::Int4(3)])?, Value::Boolean(true));
//! ```

pub mod analyze;
pub mod atom;
pub mod builtin;
pub mod coerce;
mod compile;
pub mod config;
pub mod error;
pub mod expression;
pub mod fold;
pub mod lower;
pub mod member;
pub mod operator;
mod runtime;
pub mod state;
pub mod syntax;

pub use atom::{Atom, AtomBinding, AtomKind, Generator, NativeCallable, NativeFunction, Signature};
pub use compile::CompiledFunction;
pub use config::CompilerConfig;
pub use error::CompileError;
pub use expression::{Expr, ExprKind};
pub use fold::FoldCache;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeInner};
pub use state::CompilerState;
pub use syntax::{SyntaxNode, Token};

pub type Result<T> = reckon_type::Result<T>;
