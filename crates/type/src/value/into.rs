// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use chrono::{FixedOffset, NaiveDateTime, TimeDelta};

use crate::value::{Blob, Decimal, Value};

pub trait IntoValue {
	fn into_value(self) -> Value;
}

/// Extracts a native value. Returns `None` when the variant does not match;
/// `Option<T>` maps an absent value to `Some(None)`.
pub trait FromValue: Sized {
	fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_value_conversions {
	($($t:ty => $variant:ident),* $(,)?) => {
		$(
			impl IntoValue for $t {
				fn into_value(self) -> Value {
					Value::$variant(self.into())
				}
			}

			impl FromValue for $t {
				fn from_value(value: &Value) -> Option<Self> {
					match value {
						Value::$variant(v) => Some(v.clone().into()),
						_ => None,
					}
				}
			}

			impl From<$t> for Value {
				fn from(value: $t) -> Self {
					value.into_value()
				}
			}
		)*
	};
}

impl_value_conversions!(
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
	Arc<str> => Utf8,
	NaiveDateTime => DateTime,
	chrono::DateTime<FixedOffset> => DateTimeOffset,
	TimeDelta => Interval,
	uuid::Uuid => Uuid,
	Blob => Blob,
);

impl IntoValue for String {
	fn into_value(self) -> Value {
		Value::Utf8(Arc::from(self))
	}
}

impl FromValue for String {
	fn from_value(value: &Value) -> Option<Self> {
		value.as_str().map(str::to_string)
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		value.into_value()
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::utf8(value)
	}
}

impl IntoValue for Value {
	fn into_value(self) -> Value {
		self
	}
}

impl FromValue for Value {
	fn from_value(value: &Value) -> Option<Self> {
		Some(value.clone())
	}
}

impl<T: IntoValue> IntoValue for Option<T> {
	fn into_value(self) -> Value {
		match self {
			Some(value) => value.into_value(),
			None => Value::None,
		}
	}
}

impl<T: FromValue> FromValue for Option<T> {
	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::None => Some(None),
			value => T::from_value(value).map(Some),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_round_trip_primitive() {
		assert_eq!(42i32.into_value(), Value::Int4(42));
		assert_eq!(i32::from_value(&Value::Int4(42)), Some(42));
		assert_eq!(i32::from_value(&Value::Int8(42)), None);
	}

	#[test]
	fn test_string() {
		assert_eq!(Value::from("abc"), Value::utf8("abc"));
		assert_eq!(String::from_value(&Value::utf8("abc")), Some("abc".to_string()));
	}

	#[test]
	fn test_option() {
		assert_eq!(Option::<i32>::None.into_value(), Value::None);
		assert_eq!(Option::<i32>::from_value(&Value::None), Some(None));
		assert_eq!(Option::<i32>::from_value(&Value::Int4(1)), Some(Some(1)));
		assert_eq!(Option::<i32>::from_value(&Value::utf8("x")), None);
	}
}
