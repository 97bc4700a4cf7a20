// Copyright 2025 ULDE Team

#[cfg(feature = "bail_panic")]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		panic!("{}", $err);
	};
}

#[cfg(not(feature = "bail_panic"))]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		return Err($err.into());
	};
}

#[macro_export]
macro_rules! ensure {
	($cond:expr, $err:expr) => {
		if !$cond {
			$crate::bail!($err);
		}
	};
}

#[cfg(test)]
mod tests {
	#[derive(Debug, PartialEq, Eq)]
	struct TooSmall(u32);

	impl std::fmt::Display for TooSmall {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			write!(f, "value {} is too small", self.0)
		}
	}

	fn check_at_least_ten(value: u32) -> Result<u32, TooSmall> {
		ensure!(value >= 10, TooSmall(value));
		Ok(value)
	}

	#[test]
	#[cfg(not(feature = "bail_panic"))]
	fn test_ensure_returns_error() {
		assert_eq!(check_at_least_ten(3), Err(TooSmall(3)));
		assert_eq!(check_at_least_ten(10), Ok(10));
	}

	#[test]
	#[cfg(feature = "bail_panic")]
	#[should_panic(expected = "value 3 is too small")]
	fn test_ensure_panics() {
		let _ = check_at_least_ten(3);
	}
}
