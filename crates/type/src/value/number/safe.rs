// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Overflow-checked arithmetic. Integers report overflow and division by zero
//! as `None`; floats follow IEEE 754 and never fail; decimals only fail on
//! division by zero.

use crate::value::Decimal;

pub trait SafeAdd: Sized {
	fn checked_add(&self, r: &Self) -> Option<Self>;
}

pub trait SafeSub: Sized {
	fn checked_sub(&self, r: &Self) -> Option<Self>;
}

pub trait SafeMul: Sized {
	fn checked_mul(&self, r: &Self) -> Option<Self>;
}

pub trait SafeDiv: Sized {
	fn checked_div(&self, r: &Self) -> Option<Self>;
}

pub trait SafeRemainder: Sized {
	fn checked_rem(&self, r: &Self) -> Option<Self>;
}

pub trait SafeNeg: Sized {
	fn checked_neg(&self) -> Option<Self>;
}

macro_rules! impl_safe_integer {
    ($($t:ty),*) => {
        $(
            impl SafeAdd for $t {
                fn checked_add(&self, r: &Self) -> Option<Self> {
                    <$t>::checked_add(*self, *r)
                }
            }

            impl SafeSub for $t {
                fn checked_sub(&self, r: &Self) -> Option<Self> {
                    <$t>::checked_sub(*self, *r)
                }
            }

            impl SafeMul for $t {
                fn checked_mul(&self, r: &Self) -> Option<Self> {
                    <$t>::checked_mul(*self, *r)
                }
            }

            impl SafeDiv for $t {
                fn checked_div(&self, r: &Self) -> Option<Self> {
                    <$t>::checked_div(*self, *r)
                }
            }

            impl SafeRemainder for $t {
                fn checked_rem(&self, r: &Self) -> Option<Self> {
                    <$t>::checked_rem(*self, *r)
                }
            }

            impl SafeNeg for $t {
                fn checked_neg(&self) -> Option<Self> {
                    <$t>::checked_neg(*self)
                }
            }
        )*
    };
}

macro_rules! impl_safe_float {
    ($($t:ty),*) => {
        $(
            impl SafeAdd for $t {
                fn checked_add(&self, r: &Self) -> Option<Self> {
                    Some(*self + *r)
                }
            }

            impl SafeSub for $t {
                fn checked_sub(&self, r: &Self) -> Option<Self> {
                    Some(*self - *r)
                }
            }

            impl SafeMul for $t {
                fn checked_mul(&self, r: &Self) -> Option<Self> {
                    Some(*self * *r)
                }
            }

            impl SafeDiv for $t {
                fn checked_div(&self, r: &Self) -> Option<Self> {
                    Some(*self / *r)
                }
            }

            impl SafeRemainder for $t {
                fn checked_rem(&self, r: &Self) -> Option<Self> {
                    Some(*self % *r)
                }
            }

            impl SafeNeg for $t {
                fn checked_neg(&self) -> Option<Self> {
                    Some(-*self)
                }
            }
        )*
    };
}

impl_safe_integer!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_safe_float!(f32, f64);

impl SafeAdd for Decimal {
	fn checked_add(&self, r: &Self) -> Option<Self> {
		Decimal::checked_add(self, r)
	}
}

impl SafeSub for Decimal {
	fn checked_sub(&self, r: &Self) -> Option<Self> {
		Decimal::checked_sub(self, r)
	}
}

impl SafeMul for Decimal {
	fn checked_mul(&self, r: &Self) -> Option<Self> {
		Decimal::checked_mul(self, r)
	}
}

impl SafeDiv for Decimal {
	fn checked_div(&self, r: &Self) -> Option<Self> {
		Decimal::checked_div(self, r)
	}
}

impl SafeRemainder for Decimal {
	fn checked_rem(&self, r: &Self) -> Option<Self> {
		Decimal::checked_rem(self, r)
	}
}

impl SafeNeg for Decimal {
	fn checked_neg(&self) -> Option<Self> {
		Some(self.neg())
	}
}
