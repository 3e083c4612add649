// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Member tables for dotted-path resolution. Every type exposes a fixed set of
//! named, typed accessors; object types bring their own descriptor table.

use std::fmt::{Debug, Formatter};

use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike};
use reckon_type::{
	Error, MemberDescriptor, Type, Value,
	error::diagnostic::evaluate::{missing_value, null_reference, unexpected_value},
	value::temporal::{self, component, total},
};

type ReadFn = fn(&Value) -> crate::Result<Value>;

struct Builtin {
	name: &'static str,
	ty: Type,
	read: ReadFn,
}

#[derive(Clone)]
enum Read {
	Builtin(ReadFn),
	Object(MemberDescriptor),
	HasValue,
	Value(Type),
}

/// A resolved member of some owner type.
#[derive(Clone)]
pub struct Member {
	name: String,
	ty: Type,
	read: Read,
}

impl Member {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn ty(&self) -> &Type {
		&self.ty
	}

	/// Reads the member from a value of the owner type.
	pub fn read(&self, base: &Value) -> crate::Result<Value> {
		match &self.read {
			Read::HasValue => Ok(Value::Boolean(base.is_some())),
			Read::Value(ty) => match base {
				Value::None => Err(Error(missing_value(ty))),
				value => Ok(value.clone()),
			},
			Read::Builtin(_) | Read::Object(_) if base.is_none() => Err(Error(null_reference(&self.name))),
			Read::Builtin(read) => read(base),
			Read::Object(descriptor) => match base {
				Value::Object(object) => descriptor.read(object),
				value => Err(Error(unexpected_value(&self.ty, value.kind().to_string()))),
			},
		}
	}
}

impl Debug for Member {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}: {}", self.name, self.ty)
	}
}

/// Case-insensitive member lookup on `owner`.
pub fn lookup(owner: &Type, name: &str) -> Option<Member> {
	match owner {
		Type::Nullable(inner) => {
			if name.eq_ignore_ascii_case("HasValue") {
				Some(Member {
					name: "HasValue".to_string(),
					ty: Type::Boolean,
					read: Read::HasValue,
				})
			} else if name.eq_ignore_ascii_case("Value") {
				Some(Member {
					name: "Value".to_string(),
					ty: inner.as_ref().clone(),
					read: Read::Value(inner.as_ref().clone()),
				})
			} else {
				None
			}
		}
		Type::Object(object) => object.member(name).map(|descriptor| Member {
			name: descriptor.name().to_string(),
			ty: descriptor.ty().clone(),
			read: Read::Object(descriptor.clone()),
		}),
		Type::DateTime => find(&[CALENDAR], name),
		Type::DateTimeOffset => find(&[OFFSET, CALENDAR], name),
		Type::Interval => find(&[INTERVAL], name),
		Type::Utf8 | Type::Blob => find(&[LENGTH], name),
		_ => None,
	}
}

fn find(tables: &[&[Builtin]], name: &str) -> Option<Member> {
	tables.iter().flat_map(|table| table.iter()).find(|m| m.name.eq_ignore_ascii_case(name)).map(|m| Member {
		name: m.name.to_string(),
		ty: m.ty.clone(),
		read: Read::Builtin(m.read),
	})
}

fn mismatch(expected: Type, value: &Value) -> Error {
	Error(unexpected_value(&expected, value.kind().to_string()))
}

/// The local calendar reading of either date time kind.
fn local(value: &Value) -> crate::Result<NaiveDateTime> {
	match value {
		Value::DateTime(v) => Ok(*v),
		Value::DateTimeOffset(v) => Ok(v.naive_local()),
		value => Err(mismatch(Type::DateTime, value)),
	}
}

fn interval(value: &Value) -> crate::Result<&TimeDelta> {
	match value {
		Value::Interval(v) => Ok(v),
		value => Err(mismatch(Type::Interval, value)),
	}
}

static CALENDAR: &[Builtin] = &[
	Builtin {
		name: "Year",
		ty: Type::Int4,
		read: |v| Ok(Value::Int4(local(v)?.year())),
	},
	Builtin {
		name: "Month",
		ty: Type::Int4,
		read: |v| Ok(Value::Int4(local(v)?.month() as i32)),
	},
	Builtin {
		name: "Day",
		ty: Type::Int4,
		read: |v| Ok(Value::Int4(local(v)?.day() as i32)),
	},
	Builtin {
		name: "Hour",
		ty: Type::Int4,
		read: |v| Ok(Value::Int4(local(v)?.hour() as i32)),
	},
	Builtin {
		name: "Minute",
		ty: Type::Int4,
		read: |v| Ok(Value::Int4(local(v)?.minute() as i32)),
	},
	Builtin {
		name: "Second",
		ty: Type::Int4,
		read: |v| Ok(Value::Int4(local(v)?.second() as i32)),
	},
	Builtin {
		name: "Millisecond",
		ty: Type::Int4,
		read: |v| Ok(Value::Int4(temporal::millisecond(&local(v)?))),
	},
	Builtin {
		name: "DayOfWeek",
		ty: Type::Int4,
		read: |v| Ok(Value::Int4(temporal::day_of_week(&local(v)?))),
	},
	Builtin {
		name: "DayOfYear",
		ty: Type::Int4,
		read: |v| Ok(Value::Int4(temporal::day_of_year(&local(v)?))),
	},
	Builtin {
		name: "Date",
		ty: Type::DateTime,
		read: |v| Ok(Value::DateTime(temporal::truncate_to_date(&local(v)?))),
	},
];

static OFFSET: &[Builtin] = &[
	Builtin {
		name: "Offset",
		ty: Type::Interval,
		read: |v| match v {
			Value::DateTimeOffset(v) => Ok(Value::Interval(TimeDelta::seconds(v.offset().local_minus_utc() as i64))),
			value => Err(mismatch(Type::DateTimeOffset, value)),
		},
	},
	Builtin {
		name: "UtcDateTime",
		ty: Type::DateTime,
		read: |v| match v {
			Value::DateTimeOffset(v) => Ok(Value::DateTime(v.naive_utc())),
			value => Err(mismatch(Type::DateTimeOffset, value)),
		},
	},
	Builtin {
		name: "DateTime",
		ty: Type::DateTime,
		read: |v| Ok(Value::DateTime(local(v)?)),
	},
];

static INTERVAL: &[Builtin] = &[
	Builtin {
		name: "Days",
		ty: Type::Int4,
		read: |v| Ok(Value::Int4(component::days(interval(v)?))),
	},
	Builtin {
		name: "Hours",
		ty: Type::Int4,
		read: |v| Ok(Value::Int4(component::hours(interval(v)?))),
	},
	Builtin {
		name: "Minutes",
		ty: Type::Int4,
		read: |v| Ok(Value::Int4(component::minutes(interval(v)?))),
	},
	Builtin {
		name: "Seconds",
		ty: Type::Int4,
		read: |v| Ok(Value::Int4(component::seconds(interval(v)?))),
	},
	Builtin {
		name: "Milliseconds",
		ty: Type::Int4,
		read: |v| Ok(Value::Int4(component::milliseconds(interval(v)?))),
	},
	Builtin {
		name: "TotalDays",
		ty: Type::Float8,
		read: |v| Ok(Value::Float8(total::days(interval(v)?))),
	},
	Builtin {
		name: "TotalHours",
		ty: Type::Float8,
		read: |v| Ok(Value::Float8(total::hours(interval(v)?))),
	},
	Builtin {
		name: "TotalMinutes",
		ty: Type::Float8,
		read: |v| Ok(Value::Float8(total::minutes(interval(v)?))),
	},
	Builtin {
		name: "TotalSeconds",
		ty: Type::Float8,
		read: |v| Ok(Value::Float8(total::seconds(interval(v)?))),
	},
	Builtin {
		name: "TotalMilliseconds",
		ty: Type::Float8,
		read: |v| Ok(Value::Float8(total::milliseconds(interval(v)?))),
	},
];

static LENGTH: &[Builtin] = &[Builtin {
	name: "Length",
	ty: Type::Int4,
	read: |v| match v {
		Value::Utf8(s) => Ok(Value::Int4(s.chars().count() as i32)),
		Value::Blob(b) => Ok(Value::Int4(b.len() as i32)),
		value => Err(mismatch(Type::Utf8, value)),
	},
}];

#[cfg(test)]
mod tests {
	use chrono::{FixedOffset, TimeZone};
	use reckon_type::{Blob, Object, ObjectType};

	use super::*;

	#[test]
	fn test_datetime_members() {
		let value = Value::DateTime(temporal::date(2024, 2, 29).unwrap());
		assert_eq!(lookup(&Type::DateTime, "year").unwrap().read(&value).unwrap(), Value::Int4(2024));
		assert_eq!(lookup(&Type::DateTime, "DAYOFYEAR").unwrap().read(&value).unwrap(), Value::Int4(60));
		assert_eq!(lookup(&Type::DateTime, "Date").unwrap().ty(), &Type::DateTime);
		assert!(lookup(&Type::DateTime, "Offset").is_none());
	}

	#[test]
	fn test_offset_members() {
		let offset = FixedOffset::east_opt(2 * 3600).unwrap();
		let value = Value::DateTimeOffset(offset.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap());
		assert_eq!(
			lookup(&Type::DateTimeOffset, "offset").unwrap().read(&value).unwrap(),
			Value::Interval(TimeDelta::hours(2))
		);
		assert_eq!(lookup(&Type::DateTimeOffset, "hour").unwrap().read(&value).unwrap(), Value::Int4(1));
		let utc = lookup(&Type::DateTimeOffset, "UtcDateTime").unwrap().read(&value).unwrap();
		assert_eq!(utc, Value::DateTime(temporal::date(2023, 12, 31).unwrap() + TimeDelta::hours(23)));
	}

	#[test]
	fn test_interval_members() {
		let value = Value::Interval(TimeDelta::hours(36));
		assert_eq!(lookup(&Type::Interval, "Days").unwrap().read(&value).unwrap(), Value::Int4(1));
		assert_eq!(lookup(&Type::Interval, "hours").unwrap().read(&value).unwrap(), Value::Int4(12));
		assert_eq!(lookup(&Type::Interval, "TotalDays").unwrap().read(&value).unwrap(), Value::Float8(1.5));
	}

	#[test]
	fn test_length_of_null_reference() {
		let member = lookup(&Type::Utf8, "length").unwrap();
		assert_eq!(member.read(&Value::utf8("héllo")).unwrap(), Value::Int4(5));
		assert_eq!(member.read(&Value::None).unwrap_err().code, "EVAL_003");
		let member = lookup(&Type::Blob, "Length").unwrap();
		assert_eq!(member.read(&Value::Blob(Blob::new(vec![1, 2, 3]))).unwrap(), Value::Int4(3));
	}

	#[test]
	fn test_nullable_members() {
		let ty = Type::nullable(Type::Int4);
		assert_eq!(lookup(&ty, "hasvalue").unwrap().read(&Value::None).unwrap(), Value::Boolean(false));
		let value = lookup(&ty, "value").unwrap();
		assert_eq!(value.ty(), &Type::Int4);
		assert_eq!(value.read(&Value::Int4(3)).unwrap(), Value::Int4(3));
		assert_eq!(value.read(&Value::None).unwrap_err().code, "EVAL_004");
		assert!(lookup(&ty, "Year").is_none());
	}

	#[test]
	fn test_object_members() {
		struct Row {
			id: i64,
		}
		let ty = ObjectType::builder("Row").member("Id", Type::Int8, |row: &Row| Value::Int8(row.id)).build().unwrap();
		let member = lookup(&Type::Object(ty), "ID").unwrap();
		assert_eq!(member.name(), "Id");
		assert_eq!(member.read(&Value::Object(Object::new(Row { id: 9 }))).unwrap(), Value::Int8(9));
		assert_eq!(member.read(&Value::None).unwrap_err().code, "EVAL_003");
	}

	#[test]
	fn test_no_members_on_numbers() {
		assert!(lookup(&Type::Int4, "Length").is_none());
	}
}
