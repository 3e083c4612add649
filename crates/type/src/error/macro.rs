// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Wraps a diagnostic into an `Error`.
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::error::Error($diagnostic)
	};
}

/// Wraps a diagnostic into an `Err(Error)`.
#[macro_export]
macro_rules! err {
	($diagnostic:expr) => {
		Err($crate::error::Error($diagnostic))
	};
}

/// Returns early with the given diagnostic.
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::error::Error($diagnostic))
	};
}

#[cfg(test)]
mod tests {
	use crate::{error::diagnostic::function::unknown_function, fragment::Fragment};

	#[test]
	fn test_error_macro() {
		let err = error!(unknown_function(Fragment::internal("nope")));
		assert_eq!(err.code, "FUNCTION_001");
	}

	#[test]
	fn test_return_error_macro() {
		fn fails() -> crate::Result<()> {
			return_error!(unknown_function(Fragment::internal("nope")));
		}

		let err = fails().unwrap_err();
		assert_eq!(err.code(), "FUNCTION_001");
	}

	#[test]
	fn test_err_macro() {
		let result: crate::Result<()> = err!(unknown_function(Fragment::internal("nope")));
		assert!(result.is_err());
	}
}
