// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	any::{Any, TypeId},
	collections::HashMap,
};

use reckon_type::{Fragment, ObjectType, Type};

use crate::error::CompileError;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
	pub name: String,
	pub ty: Type,
}

/// Context of one compile attempt: the declared parameters in positional
/// order, the ambient context, and the requested return type.
///
/// The ambient context is an ordinary parameter of object type whose members
/// also resolve as unqualified identifiers.
pub struct CompilerState {
	parameters: Vec<Parameter>,
	context: Option<usize>,
	returns: Option<Type>,
	extensions: HashMap<TypeId, Box<dyn Any + Send>>,
	depth: usize,
}

impl Default for CompilerState {
	fn default() -> Self {
		Self::new()
	}
}

impl CompilerState {
	/// A state compiling to an action with no parameters.
	pub fn new() -> Self {
		Self {
			parameters: Vec::new(),
			context: None,
			returns: None,
			extensions: HashMap::new(),
			depth: 0,
		}
	}

	pub fn with_parameter(mut self, name: impl Into<String>, ty: Type) -> Self {
		self.parameters.push(Parameter {
			name: name.into(),
			ty,
		});
		self
	}

	/// Declares the ambient context as the next positional parameter.
	pub fn with_context(mut self, name: impl Into<String>, ty: ObjectType) -> Self {
		self.context = Some(self.parameters.len());
		self.with_parameter(name, Type::Object(ty))
	}

	pub fn returning(mut self, ty: Type) -> Self {
		self.returns = Some(ty);
		self
	}

	pub fn parameters(&self) -> &[Parameter] {
		&self.parameters
	}

	/// Case-insensitive lookup of a declared parameter and its slot.
	pub fn parameter(&self, name: &str) -> Option<(usize, &Parameter)> {
		self.parameters.iter().enumerate().find(|(_, p)| p.name.eq_ignore_ascii_case(name))
	}

	/// Slot and type of the ambient context, if declared.
	pub fn context(&self) -> Option<(usize, &ObjectType)> {
		let slot = self.context?;
		match &self.parameters.get(slot)?.ty {
			Type::Object(ty) => Some((slot, ty)),
			_ => None,
		}
	}

	pub fn returns(&self) -> Option<&Type> {
		self.returns.as_ref()
	}

	/// Per-compile slot of type `T`, created on first use. Generators use it
	/// to memoize sub-expressions within one compile unit.
	pub fn extension<T: Any + Send + Default>(&mut self) -> &mut T {
		self.extensions
			.entry(TypeId::of::<T>())
			.or_insert_with(|| Box::new(T::default()) as Box<dyn Any + Send>)
			.downcast_mut::<T>()
			.expect("extension slot keyed by its own TypeId")
	}

	pub(crate) fn enter(&mut self, max_depth: usize, fragment: impl FnOnce() -> Fragment) -> crate::Result<()> {
		if self.depth >= max_depth {
			return Err(CompileError::MaxDepthExceeded {
				max: max_depth,
				fragment: fragment(),
			}
			.into());
		}
		self.depth += 1;
		Ok(())
	}

	pub(crate) fn leave(&mut self) {
		self.depth = self.depth.saturating_sub(1);
	}
}

#[cfg(test)]
mod tests {
	use reckon_type::Value;

	use super::*;

	#[test]
	fn test_parameter_lookup_ignores_case() {
		let state = CompilerState::new().with_parameter("@X", Type::Int4).with_parameter("@y", Type::Utf8);
		let (slot, parameter) = state.parameter("@x").unwrap();
		assert_eq!(slot, 0);
		assert_eq!(parameter.ty, Type::Int4);
		assert_eq!(state.parameter("@Y").unwrap().0, 1);
		assert!(state.parameter("@z").is_none());
	}

	#[test]
	fn test_context_is_a_parameter() {
		let ty = ObjectType::builder("Row").member("A", Type::Int4, |_: &u8| Value::Int4(1)).build().unwrap();
		let state = CompilerState::new().with_parameter("@x", Type::Int4).with_context("row", ty.clone());
		let (slot, context) = state.context().unwrap();
		assert_eq!(slot, 1);
		assert_eq!(context, &ty);
		assert_eq!(state.parameters().len(), 2);
	}

	#[test]
	fn test_extension_slot_persists() {
		let mut state = CompilerState::new();
		state.extension::<Vec<u32>>().push(7);
		assert_eq!(state.extension::<Vec<u32>>(), &vec![7]);
	}

	#[test]
	fn test_depth_limit() {
		let mut state = CompilerState::new();
		state.enter(1, || Fragment::None).unwrap();
		let err = state.enter(1, || Fragment::None).unwrap_err();
		assert_eq!(err.code, "COMPILE_009");
		state.leave();
		assert!(state.enter(1, || Fragment::None).is_ok());
	}
}
