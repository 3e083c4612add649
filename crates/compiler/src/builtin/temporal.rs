// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reckon_type::{
	Error, Type, Value,
	error::diagnostic::function::execution_failed,
	value::temporal::{date, interval},
};

use crate::atom::{Atom, NativeFunction, argument};

/// `datetime(year, month, day)`: midnight of a calendar day.
fn datetime(args: &[Value]) -> crate::Result<Value> {
	let (year, month, day): (i32, i32, i32) = (argument(args, 0)?, argument(args, 1)?, argument(args, 2)?);
	let value = u32::try_from(month)
		.ok()
		.zip(u32::try_from(day).ok())
		.and_then(|(month, day)| date(year, month, day))
		.ok_or_else(|| Error(execution_failed("datetime", format!("{}-{}-{} is not a valid date", year, month, day))))?;
	Ok(Value::DateTime(value))
}

/// `timespan(days, hours, minutes, seconds)`. Components may be negative
/// or exceed their natural range.
fn timespan(args: &[Value]) -> crate::Result<Value> {
	let components =
		(0..4).map(|index| argument::<i32>(args, index).map(i64::from)).collect::<crate::Result<Vec<_>>>()?;
	interval(components[0], components[1], components[2], components[3])
		.map(Value::Interval)
		.ok_or_else(|| Error(execution_failed("timespan", "interval out of range".to_string())))
}

pub(super) fn atoms() -> Vec<Atom> {
	vec![
		Atom::function(NativeFunction::new("datetime", vec![Type::Int4; 3], Type::DateTime, datetime)),
		Atom::function(NativeFunction::new("timespan", vec![Type::Int4; 4], Type::Interval, timespan)),
	]
}
