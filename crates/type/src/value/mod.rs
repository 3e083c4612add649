// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	sync::Arc,
};

use chrono::{FixedOffset, NaiveDateTime, TimeDelta};

mod blob;
mod compare;
mod decimal;
mod into;
mod key;
pub mod number;
mod object;
pub mod temporal;
pub mod text;
mod r#type;

pub use blob::Blob;
pub use compare::{compare, equals};
pub use decimal::Decimal;
pub use into::{FromValue, IntoValue};
pub use key::ValueKey;
pub use object::{MemberDescriptor, Object, ObjectDescriptor, ObjectType, ObjectTypeBuilder};
pub use r#type::{GetType, Type};

/// A run-time value of the expression language.
///
/// The variant of a non-absent value always matches the semantic type of the
/// expression that produced it; [`Value::None`] stands for every flavour of
/// absence: a null reference, an absent nullable and the void value.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
	/// No value
	#[default]
	None,
	Boolean(bool),
	Int1(i8),
	Int2(i16),
	Int4(i32),
	Int8(i64),
	Uint1(u8),
	Uint2(u16),
	Uint4(u32),
	Uint8(u64),
	Float4(f32),
	Float8(f64),
	Decimal(Decimal),
	Utf8(Arc<str>),
	DateTime(NaiveDateTime),
	DateTimeOffset(chrono::DateTime<FixedOffset>),
	Interval(TimeDelta),
	Uuid(uuid::Uuid),
	Blob(Blob),
	Object(Object),
}

impl Value {
	pub fn utf8(text: impl AsRef<str>) -> Self {
		Value::Utf8(Arc::from(text.as_ref()))
	}

	pub fn is_none(&self) -> bool {
		matches!(self, Value::None)
	}

	pub fn is_some(&self) -> bool {
		!self.is_none()
	}

	/// The default value of a type: zero, false, the epoch-like minimum for
	/// temporal types, the nil uuid, and no value for anything that admits
	/// absence.
	pub fn default_of(ty: &Type) -> Value {
		match ty {
			Type::Boolean => Value::Boolean(false),
			Type::Int1 => Value::Int1(0),
			Type::Int2 => Value::Int2(0),
			Type::Int4 => Value::Int4(0),
			Type::Int8 => Value::Int8(0),
			Type::Uint1 => Value::Uint1(0),
			Type::Uint2 => Value::Uint2(0),
			Type::Uint4 => Value::Uint4(0),
			Type::Uint8 => Value::Uint8(0),
			Type::Float4 => Value::Float4(0.0),
			Type::Float8 => Value::Float8(0.0),
			Type::Decimal => Value::Decimal(Decimal::zero()),
			Type::DateTime => Value::DateTime(NaiveDateTime::default()),
			Type::DateTimeOffset => Value::DateTimeOffset(temporal::default_offset_datetime()),
			Type::Interval => Value::Interval(TimeDelta::zero()),
			Type::Uuid => Value::Uuid(uuid::Uuid::nil()),
			Type::Utf8 | Type::Blob | Type::Object(_) | Type::Void | Type::Nullable(_) => Value::None,
		}
	}

	/// True when this value is a legal inhabitant of `ty`.
	pub fn conforms_to(&self, ty: &Type) -> bool {
		match (self, ty) {
			(Value::None, ty) => ty.admits_none(),
			(value, Type::Nullable(inner)) => value.conforms_to(inner),
			(Value::Boolean(_), Type::Boolean)
			| (Value::Int1(_), Type::Int1)
			| (Value::Int2(_), Type::Int2)
			| (Value::Int4(_), Type::Int4)
			| (Value::Int8(_), Type::Int8)
			| (Value::Uint1(_), Type::Uint1)
			| (Value::Uint2(_), Type::Uint2)
			| (Value::Uint4(_), Type::Uint4)
			| (Value::Uint8(_), Type::Uint8)
			| (Value::Float4(_), Type::Float4)
			| (Value::Float8(_), Type::Float8)
			| (Value::Decimal(_), Type::Decimal)
			| (Value::Utf8(_), Type::Utf8)
			| (Value::DateTime(_), Type::DateTime)
			| (Value::DateTimeOffset(_), Type::DateTimeOffset)
			| (Value::Interval(_), Type::Interval)
			| (Value::Uuid(_), Type::Uuid)
			| (Value::Blob(_), Type::Blob)
			| (Value::Object(_), Type::Object(_)) => true,
			_ => false,
		}
	}

	/// Short description of the variant, used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::None => "none",
			Value::Boolean(_) => "Boolean",
			Value::Int1(_) => "Int1",
			Value::Int2(_) => "Int2",
			Value::Int4(_) => "Int4",
			Value::Int8(_) => "Int8",
			Value::Uint1(_) => "Uint1",
			Value::Uint2(_) => "Uint2",
			Value::Uint4(_) => "Uint4",
			Value::Uint8(_) => "Uint8",
			Value::Float4(_) => "Float4",
			Value::Float8(_) => "Float8",
			Value::Decimal(_) => "Decimal",
			Value::Utf8(_) => "Utf8",
			Value::DateTime(_) => "DateTime",
			Value::DateTimeOffset(_) => "DateTimeOffset",
			Value::Interval(_) => "Interval",
			Value::Uuid(_) => "Uuid",
			Value::Blob(_) => "Blob",
			Value::Object(_) => "Object",
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Boolean(b) => Some(*b),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::Utf8(s) => Some(s),
			_ => None,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::None => f.write_str("none"),
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Int1(value) => Display::fmt(value, f),
			Value::Int2(value) => Display::fmt(value, f),
			Value::Int4(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Uint1(value) => Display::fmt(value, f),
			Value::Uint2(value) => Display::fmt(value, f),
			Value::Uint4(value) => Display::fmt(value, f),
			Value::Uint8(value) => Display::fmt(value, f),
			Value::Float4(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
			Value::Decimal(value) => Display::fmt(value, f),
			Value::Utf8(value) => Display::fmt(value, f),
			Value::DateTime(value) => Display::fmt(value, f),
			Value::DateTimeOffset(value) => Display::fmt(value, f),
			Value::Interval(value) => Display::fmt(value, f),
			Value::Uuid(value) => Display::fmt(value, f),
			Value::Blob(value) => Display::fmt(value, f),
			Value::Object(value) => Display::fmt(value, f),
		}
	}
}
