// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
	str::FromStr,
};

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

/// Fixed-point decimal number backed by an arbitrary precision decimal.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Decimal(BigDecimal);

impl Decimal {
	pub fn new(value: BigDecimal) -> Self {
		Self(value)
	}

	pub fn zero() -> Self {
		Self(BigDecimal::zero())
	}

	pub fn inner(&self) -> &BigDecimal {
		&self.0
	}

	pub fn into_inner(self) -> BigDecimal {
		self.0
	}

	pub fn is_zero(&self) -> bool {
		self.0.is_zero()
	}

	pub fn is_integer(&self) -> bool {
		self.0.is_integer()
	}

	pub fn abs(&self) -> Self {
		Self(self.0.abs())
	}

	pub fn neg(&self) -> Self {
		Self(-self.0.clone())
	}

	pub fn checked_add(&self, other: &Self) -> Option<Self> {
		Some(Self(&self.0 + &other.0))
	}

	pub fn checked_sub(&self, other: &Self) -> Option<Self> {
		Some(Self(&self.0 - &other.0))
	}

	pub fn checked_mul(&self, other: &Self) -> Option<Self> {
		Some(Self(&self.0 * &other.0))
	}

	pub fn checked_div(&self, other: &Self) -> Option<Self> {
		if other.is_zero() {
			return None;
		}
		Some(Self(&self.0 / &other.0))
	}

	pub fn checked_rem(&self, other: &Self) -> Option<Self> {
		if other.is_zero() {
			return None;
		}
		Some(Self(&self.0 % &other.0))
	}

	/// Rounds half away from zero to `digits` fractional digits.
	pub fn round(&self, digits: i64) -> Self {
		Self(self.0.with_scale_round(digits, RoundingMode::HalfUp))
	}

	pub fn floor(&self) -> Self {
		Self(self.0.with_scale_round(0, RoundingMode::Floor))
	}

	pub fn ceiling(&self) -> Self {
		Self(self.0.with_scale_round(0, RoundingMode::Ceiling))
	}

	pub fn to_f64(&self) -> Option<f64> {
		self.0.to_f64()
	}

	pub fn to_i128(&self) -> Option<i128> {
		if !self.0.is_integer() {
			return None;
		}
		self.0.to_i128()
	}
}

impl Deref for Decimal {
	type Target = BigDecimal;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<BigDecimal> for Decimal {
	fn from(value: BigDecimal) -> Self {
		Self(value)
	}
}

impl From<i64> for Decimal {
	fn from(value: i64) -> Self {
		Self(BigDecimal::from(value))
	}
}

impl From<i128> for Decimal {
	fn from(value: i128) -> Self {
		Self(BigDecimal::from(value))
	}
}

impl FromStr for Decimal {
	type Err = bigdecimal::ParseBigDecimalError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		BigDecimal::from_str(s).map(Self)
	}
}

impl Display for Decimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0.normalized(), f)
	}
}
