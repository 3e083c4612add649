// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod convert;
mod promote;
mod safe;

pub use convert::{convert, narrow};
pub use promote::{next_signed, promote};
pub use safe::{SafeAdd, SafeDiv, SafeMul, SafeNeg, SafeRemainder, SafeSub};
