// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use chrono::{FixedOffset, NaiveDateTime, TimeDelta};

use crate::value::{Blob, Decimal, Type};

/// Static semantic type of a native Rust type.
pub trait GetType {
	fn get_type() -> Type;
}

macro_rules! impl_get_type {
	($($t:ty => $variant:ident),* $(,)?) => {
		$(
			impl GetType for $t {
				fn get_type() -> Type {
					Type::$variant
				}
			}
		)*
	};
}

impl_get_type!(
	bool => Boolean,
	i8 => Int1,
	i16 => Int2,
	i32 => Int4,
	i64 => Int8,
	u8 => Uint1,
	u16 => Uint2,
	u32 => Uint4,
	u64 => Uint8,
	f32 => Float4,
	f64 => Float8,
	Decimal => Decimal,
	String => Utf8,
	Arc<str> => Utf8,
	NaiveDateTime => DateTime,
	chrono::DateTime<FixedOffset> => DateTimeOffset,
	TimeDelta => Interval,
	uuid::Uuid => Uuid,
	Blob => Blob,
);

impl<T: GetType> GetType for Option<T> {
	fn get_type() -> Type {
		Type::nullable(T::get_type())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_primitive_types() {
		assert_eq!(i32::get_type(), Type::Int4);
		assert_eq!(u64::get_type(), Type::Uint8);
		assert_eq!(f32::get_type(), Type::Float4);
		assert_eq!(String::get_type(), Type::Utf8);
	}

	#[test]
	fn test_option_is_nullable() {
		assert_eq!(Option::<i16>::get_type(), Type::nullable(Type::Int2));
		assert_eq!(Option::<String>::get_type(), Type::Utf8);
	}
}
