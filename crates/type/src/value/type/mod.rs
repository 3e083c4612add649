// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

mod get;

pub use get::GetType;

use crate::value::ObjectType;

/// All semantic types an expression can have
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
	Boolean,
	/// Signed integers, by byte width
	Int1,
	Int2,
	Int4,
	Int8,
	/// Unsigned integers, by byte width
	Uint1,
	Uint2,
	Uint4,
	Uint8,
	/// IEEE 754 single precision
	Float4,
	/// IEEE 754 double precision
	Float8,
	/// Arbitrary precision decimal, 16 bytes wide for widening purposes
	Decimal,
	/// Text; a reference type, so it may hold no value
	Utf8,
	/// Calendar date and wall clock time, no offset
	DateTime,
	/// Calendar date and wall clock time at a fixed UTC offset
	DateTimeOffset,
	/// Signed span of time
	Interval,
	Uuid,
	/// Bytes; a reference type
	Blob,
	/// Type of the NULL literal and of actions
	Void,
	/// A value type paired with a presence flag. Never nested, never wraps a
	/// reference type or void; construct through [`Type::nullable`].
	Nullable(Box<Type>),
	/// A host-defined object described by a member table, possibly null
	Object(ObjectType),
}

/// Every parameterless type, in declaration order.
const SCALARS: [Type; 19] = [
	Type::Boolean,
	Type::Int1,
	Type::Int2,
	Type::Int4,
	Type::Int8,
	Type::Uint1,
	Type::Uint2,
	Type::Uint4,
	Type::Uint8,
	Type::Float4,
	Type::Float8,
	Type::Decimal,
	Type::Utf8,
	Type::DateTime,
	Type::DateTimeOffset,
	Type::Interval,
	Type::Uuid,
	Type::Blob,
	Type::Void,
];

impl Type {
	/// Wraps `inner` into a nullable type, flattening nested wrappers.
	/// Reference types and void are already able to hold no value and are
	/// returned unchanged.
	pub fn nullable(inner: Type) -> Type {
		match inner {
			Type::Nullable(_) => inner,
			ty if ty.is_reference() || ty.is_void() => ty,
			ty => Type::Nullable(Box::new(ty)),
		}
	}

	pub fn is_nullable(&self) -> bool {
		matches!(self, Type::Nullable(_))
	}

	/// The inner type of a nullable wrapper, or the type itself.
	pub fn strip_nullable(&self) -> &Type {
		match self {
			Type::Nullable(inner) => inner,
			ty => ty,
		}
	}

	pub fn into_stripped(self) -> Type {
		match self {
			Type::Nullable(inner) => *inner,
			ty => ty,
		}
	}

	/// True when a value of this type may be null at run time without being
	/// wrapped into a nullable.
	pub fn is_reference(&self) -> bool {
		matches!(self, Type::Utf8 | Type::Blob | Type::Object(_))
	}

	/// True when values of this type can be absent at run time.
	pub fn admits_none(&self) -> bool {
		self.is_nullable() || self.is_reference() || self.is_void()
	}

	pub fn is_void(&self) -> bool {
		matches!(self, Type::Void)
	}

	pub fn is_bool(&self) -> bool {
		matches!(self, Type::Boolean)
	}

	pub fn is_number(&self) -> bool {
		self.is_integer() || self.is_floating_point() || self.is_decimal()
	}

	pub fn is_signed_integer(&self) -> bool {
		matches!(self, Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8)
	}

	pub fn is_unsigned_integer(&self) -> bool {
		matches!(self, Type::Uint1 | Type::Uint2 | Type::Uint4 | Type::Uint8)
	}

	pub fn is_integer(&self) -> bool {
		self.is_signed_integer() || self.is_unsigned_integer()
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Type::Float4 | Type::Float8)
	}

	pub fn is_decimal(&self) -> bool {
		matches!(self, Type::Decimal)
	}

	pub fn is_utf8(&self) -> bool {
		matches!(self, Type::Utf8)
	}

	/// Date-like types: a point in time, with or without offset.
	pub fn is_datetime(&self) -> bool {
		matches!(self, Type::DateTime | Type::DateTimeOffset)
	}

	pub fn is_interval(&self) -> bool {
		matches!(self, Type::Interval)
	}

	pub fn is_uuid(&self) -> bool {
		matches!(self, Type::Uuid)
	}

	pub fn is_blob(&self) -> bool {
		matches!(self, Type::Blob)
	}

	pub fn is_object(&self) -> bool {
		matches!(self, Type::Object(_))
	}

	/// Types whose values have a natural total order usable by range tests.
	pub fn is_ordered(&self) -> bool {
		self.is_number()
			|| self.is_bool()
			|| self.is_utf8()
			|| self.is_datetime()
			|| self.is_interval()
			|| self.is_uuid()
	}

	/// Canonical name of a parameterless type; `None` for nullable and
	/// object types.
	pub fn scalar_name(&self) -> Option<&'static str> {
		let name = match self {
			Type::Boolean => "Boolean",
			Type::Int1 => "Int1",
			Type::Int2 => "Int2",
			Type::Int4 => "Int4",
			Type::Int8 => "Int8",
			Type::Uint1 => "Uint1",
			Type::Uint2 => "Uint2",
			Type::Uint4 => "Uint4",
			Type::Uint8 => "Uint8",
			Type::Float4 => "Float4",
			Type::Float8 => "Float8",
			Type::Decimal => "Decimal",
			Type::Utf8 => "Utf8",
			Type::DateTime => "DateTime",
			Type::DateTimeOffset => "DateTimeOffset",
			Type::Interval => "Interval",
			Type::Uuid => "Uuid",
			Type::Blob => "Blob",
			Type::Void => "Void",
			Type::Nullable(_) | Type::Object(_) => return None,
		};
		Some(name)
	}

	/// Byte width of the numeric kinds; `None` for everything else.
	pub fn size(&self) -> Option<usize> {
		match self {
			Type::Int1 | Type::Uint1 => Some(1),
			Type::Int2 | Type::Uint2 => Some(2),
			Type::Int4 | Type::Uint4 | Type::Float4 => Some(4),
			Type::Int8 | Type::Uint8 | Type::Float8 => Some(8),
			Type::Decimal => Some(16),
			_ => None,
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Nullable(inner) => write!(f, "Nullable<{}>", inner),
			Type::Object(object) => f.write_str(object.name()),
			scalar => f.write_str(scalar.scalar_name().unwrap_or_default()),
		}
	}
}

impl FromStr for Type {
	type Err = ();

	/// Parses built-in type names case-insensitively; a trailing `?` marks a
	/// nullable type. Object types are host-defined and cannot be parsed.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if let Some(inner) = s.strip_suffix('?') {
			return inner.parse::<Type>().map(Type::nullable);
		}
		let canonical = match s.to_ascii_lowercase().as_str() {
			"bool" => "Boolean",
			"text" | "string" => "Utf8",
			"timespan" => "Interval",
			"guid" => "Uuid",
			_ => s,
		};
		SCALARS
			.iter()
			.find(|ty| ty.scalar_name().is_some_and(|name| name.eq_ignore_ascii_case(canonical)))
			.cloned()
			.ok_or(())
	}
}
