// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter, Write},
	ops::Deref,
	sync::Arc,
};

/// Immutable byte sequence. Cloning shares the underlying buffer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Blob(Arc<[u8]>);

impl Blob {
	pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
		Self(Arc::from(bytes.into()))
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn to_hex(&self) -> String {
		let mut out = String::with_capacity(2 + self.0.len() * 2);
		out.push_str("0x");
		for byte in self.0.iter() {
			let _ = write!(out, "{:02x}", byte);
		}
		out
	}
}

impl Deref for Blob {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<&[u8]> for Blob {
	fn from(bytes: &[u8]) -> Self {
		Self(Arc::from(bytes))
	}
}

impl From<Vec<u8>> for Blob {
	fn from(bytes: Vec<u8>) -> Self {
		Self::new(bytes)
	}
}

impl Display for Blob {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_hex())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_to_hex() {
		assert_eq!(Blob::new(b"Hello".to_vec()).to_hex(), "0x48656c6c6f");
		assert_eq!(Blob::new(Vec::new()).to_hex(), "0x");
	}

	#[test]
	fn test_len() {
		let blob = Blob::from(&[1u8, 2, 3][..]);
		assert_eq!(blob.len(), 3);
		assert!(!blob.is_empty());
	}
}
