/*!
# GetArg: Errors.
*/

use std::num::ParseIntError;
use thiserror::Error;



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Error!
///
/// Lookups like [`ArgStore::get_int_arg`](crate::ArgStore::get_int_arg) never
/// fail; they fall back instead. This type is only returned by the checked
/// variants, for callers who would rather know.
pub enum GetArgError {
	/// # Invalid Integer.
	#[error("Invalid integer for {key:?}: {value:?}")]
	InvalidInt {
		/// # Canonical Key.
		key: String,

		/// # Raw Value.
		value: String,

		/// # Parse Error.
		#[source]
		source: ParseIntError,
	},
}

impl GetArgError {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::InvalidInt { .. } => "Invalid integer.",
		}
	}

	#[must_use]
	/// # Key.
	///
	/// Return the (canonical) key the error relates to.
	pub fn key(&self) -> &str {
		match self {
			Self::InvalidInt { key, .. } => key,
		}
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_display() {
		let source = "NaN".parse::<i64>().unwrap_err();
		let err = GetArgError::InvalidInt {
			key: "CBOX".to_owned(),
			value: "NaN".to_owned(),
			source,
		};

		assert_eq!(err.to_string(), r#"Invalid integer for "CBOX": "NaN""#);
		assert_eq!(err.as_str(), "Invalid integer.");
		assert_eq!(err.key(), "CBOX");
		assert!(std::error::Error::source(&err).is_some(), "Missing error source.");

		// The key is printed as stored, without any dashes added back.
		let err = GetArgError::InvalidInt {
			key: "-x".to_owned(),
			value: "abc".to_owned(),
			source: "abc".parse::<i64>().unwrap_err(),
		};
		assert_eq!(err.to_string(), r#"Invalid integer for "-x": "abc""#);
	}
}
