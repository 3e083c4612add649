// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use chrono::{Local, Utc};
use reckon_type::value::temporal::truncate_to_date;
use uuid::Uuid;

use crate::atom::{Atom, NativeFunction};

pub(super) fn atoms() -> Vec<Atom> {
	vec![
		Atom::identifier(NativeFunction::nullary("now", || Local::now().naive_local()).non_deterministic()),
		Atom::identifier(
			NativeFunction::nullary("today", || truncate_to_date(&Local::now().naive_local())).non_deterministic(),
		),
		Atom::identifier(NativeFunction::nullary("utcnow", || Utc::now().naive_utc()).non_deterministic()),
		Atom::function(NativeFunction::nullary("newguid", Uuid::new_v4).non_deterministic()),
	]
}
