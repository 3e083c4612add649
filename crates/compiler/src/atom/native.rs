// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Debug, Formatter},
	sync::Arc,
};

use reckon_type::{
	FromValue, GetType, IntoValue, Type, Value,
	error::diagnostic::{evaluate::unexpected_value, function::execution_failed},
};

/// Parameter and return types of a native callable.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
	pub params: Vec<Type>,
	pub returns: Type,
}

impl Signature {
	pub fn new(params: Vec<Type>, returns: Type) -> Self {
		Self {
			params,
			returns,
		}
	}

	pub fn arity(&self) -> usize {
		self.params.len()
	}
}

/// A host function with a fixed signature. Arguments passed to `invoke`
/// always conform to `signature().params`.
pub trait NativeCallable: Send + Sync {
	fn name(&self) -> &str;

	fn signature(&self) -> &Signature;

	fn invoke(&self, args: &[Value]) -> crate::Result<Value>;

	/// Deterministic callables are evaluated at compile time when every
	/// argument is a constant.
	fn is_deterministic(&self) -> bool {
		true
	}
}

impl Debug for dyn NativeCallable {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}(", self.name())?;
		for (idx, param) in self.signature().params.iter().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{}", param)?;
		}
		write!(f, ") -> {}", self.signature().returns)
	}
}

type NativeFn = Arc<dyn Fn(&[Value]) -> crate::Result<Value> + Send + Sync>;

/// Closure-backed [`NativeCallable`].
#[derive(Clone)]
pub struct NativeFunction {
	name: String,
	signature: Signature,
	deterministic: bool,
	function: NativeFn,
}

impl NativeFunction {
	pub fn new(
		name: impl Into<String>,
		params: Vec<Type>,
		returns: Type,
		function: impl Fn(&[Value]) -> crate::Result<Value> + Send + Sync + 'static,
	) -> Self {
		Self {
			name: name.into(),
			signature: Signature::new(params, returns),
			deterministic: true,
			function: Arc::new(function),
		}
	}

	/// Marks the function as returning different results for equal
	/// arguments; it is then never evaluated at compile time.
	pub fn non_deterministic(mut self) -> Self {
		self.deterministic = false;
		self
	}

	pub fn nullary<R, F>(name: impl Into<String>, function: F) -> Self
	where
		R: IntoValue + GetType,
		F: Fn() -> R + Send + Sync + 'static,
	{
		Self::new(name, vec![], R::get_type(), move |_| Ok(function().into_value()))
	}

	pub fn unary<A, R, F>(name: impl Into<String>, function: F) -> Self
	where
		A: FromValue + GetType,
		R: IntoValue + GetType,
		F: Fn(A) -> R + Send + Sync + 'static,
	{
		Self::new(name, vec![A::get_type()], R::get_type(), move |args| {
			let a = argument::<A>(args, 0)?;
			Ok(function(a).into_value())
		})
	}

	pub fn binary<A, B, R, F>(name: impl Into<String>, function: F) -> Self
	where
		A: FromValue + GetType,
		B: FromValue + GetType,
		R: IntoValue + GetType,
		F: Fn(A, B) -> R + Send + Sync + 'static,
	{
		Self::new(name, vec![A::get_type(), B::get_type()], R::get_type(), move |args| {
			let a = argument::<A>(args, 0)?;
			let b = argument::<B>(args, 1)?;
			Ok(function(a, b).into_value())
		})
	}

	pub fn ternary<A, B, C, R, F>(name: impl Into<String>, function: F) -> Self
	where
		A: FromValue + GetType,
		B: FromValue + GetType,
		C: FromValue + GetType,
		R: IntoValue + GetType,
		F: Fn(A, B, C) -> R + Send + Sync + 'static,
	{
		Self::new(name, vec![A::get_type(), B::get_type(), C::get_type()], R::get_type(), move |args| {
			let a = argument::<A>(args, 0)?;
			let b = argument::<B>(args, 1)?;
			let c = argument::<C>(args, 2)?;
			Ok(function(a, b, c).into_value())
		})
	}

	/// Like [`NativeFunction::unary`] for functions that may fail; the
	/// error text is reported as an execution failure of the function.
	pub fn try_unary<A, R, F>(name: impl Into<String>, function: F) -> Self
	where
		A: FromValue + GetType,
		R: IntoValue + GetType,
		F: Fn(A) -> Result<R, String> + Send + Sync + 'static,
	{
		let name = name.into();
		let reported = name.clone();
		Self::new(name, vec![A::get_type()], R::get_type(), move |args| {
			let a = argument::<A>(args, 0)?;
			function(a).map(IntoValue::into_value).map_err(|reason| {
				reckon_type::Error(execution_failed(&reported, reason))
			})
		})
	}
}

pub(crate) fn argument<T: FromValue + GetType>(args: &[Value], index: usize) -> crate::Result<T> {
	let value = args.get(index).unwrap_or(&Value::None);
	T::from_value(value).ok_or_else(|| reckon_type::Error(unexpected_value(&T::get_type(), value.kind().to_string())))
}

impl NativeCallable for NativeFunction {
	fn name(&self) -> &str {
		&self.name
	}

	fn signature(&self) -> &Signature {
		&self.signature
	}

	fn invoke(&self, args: &[Value]) -> crate::Result<Value> {
		(self.function)(args)
	}

	fn is_deterministic(&self) -> bool {
		self.deterministic
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_typed_signature() {
		let f = NativeFunction::binary("add", |a: i32, b: i64| a as i64 + b);
		assert_eq!(f.signature(), &Signature::new(vec![Type::Int4, Type::Int8], Type::Int8));
		assert_eq!(f.invoke(&[Value::Int4(1), Value::Int8(2)]).unwrap(), Value::Int8(3));
	}

	#[test]
	fn test_optional_argument() {
		let f = NativeFunction::unary("present", |a: Option<i32>| a.is_some());
		assert_eq!(f.signature().params, vec![Type::nullable(Type::Int4)]);
		assert_eq!(f.invoke(&[Value::None]).unwrap(), Value::Boolean(false));
	}

	#[test]
	fn test_mismatched_argument() {
		let f = NativeFunction::unary("neg", |a: i32| -a);
		let err = f.invoke(&[Value::utf8("x")]).unwrap_err();
		assert_eq!(err.code, "EVAL_006");
	}

	#[test]
	fn test_try_unary_failure() {
		let f = NativeFunction::try_unary("parse", |s: String| s.parse::<i32>().map_err(|e| e.to_string()));
		assert_eq!(f.invoke(&[Value::utf8("12")]).unwrap(), Value::Int4(12));
		assert_eq!(f.invoke(&[Value::utf8("x")]).unwrap_err().code, "FUNCTION_004");
	}

	#[test]
	fn test_non_deterministic() {
		let f = NativeFunction::nullary("tick", || 1i32).non_deterministic();
		assert!(!f.is_deterministic());
	}

	#[test]
	fn test_debug_renders_signature() {
		let f: Arc<dyn NativeCallable> = Arc::new(NativeFunction::binary("pow", |a: f64, b: f64| a.powf(b)));
		assert_eq!(format!("{:?}", f), "pow(Float8, Float8) -> Float8");
	}
}
