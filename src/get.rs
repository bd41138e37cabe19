/*!
# GetArg: Getters.

Typed lookups for [`ArgStore`]. Keys passed to these methods are normalized
the same way as parsed arguments, so `"-foo"`, `"--foo"`, and `"foo"` are all
equivalent.
*/

use crate::{
	ArgStore,
	canonical_key,
	GetArgError,
};
use tracing::debug;



/// ## Getters.
impl ArgStore {
	#[must_use]
	/// # Is Set?
	///
	/// Returns `true` if the key was passed at all, with or without a value.
	/// Negated forms are not considered.
	///
	/// ## Examples
	///
	/// ```
	/// use getarg::ArgStore;
	///
	/// let args = ArgStore::parse(["-CBOX"]);
	/// assert!(args.is_set("-CBOX"));
	/// assert!(! args.is_set("-bar"));
	/// ```
	pub fn is_set(&self, key: &str) -> bool {
		self.values.contains_key(canonical_key(key))
	}

	#[must_use]
	/// # Last Value.
	///
	/// Return the authoritative (most recent) value for a key, if present.
	fn last(&self, key: &str) -> Option<&str> {
		self.values.get(key).and_then(|v| v.last()).map(String::as_str)
	}

	#[must_use]
	/// # All Values.
	///
	/// Return every value passed for a repeatable key, in order. Keys passed
	/// without a value contribute an empty string.
	///
	/// ## Examples
	///
	/// ```
	/// use getarg::ArgStore;
	///
	/// let args = ArgStore::parse(["-connect=a", "--connect=b", "-seed"]);
	/// assert_eq!(args.get_all("-connect"), ["a", "b"]);
	/// assert_eq!(args.get_all("-seed"), [""]);
	/// assert!(args.get_all("-other").is_empty());
	/// ```
	pub fn get_all(&self, key: &str) -> &[String] {
		self.values.get(canonical_key(key)).map(Vec::as_slice).unwrap_or_default()
	}

	#[must_use]
	/// # Boolean.
	///
	/// Resolve a boolean key, honoring negated forms:
	///
	/// 1. If `-key` is present, it is `true` unless its value is exactly `0`.
	/// 2. Otherwise, if `-nokey` is present, it is `false` unless its value is exactly `0`.
	/// 3. Otherwise `default`.
	///
	/// The positive form always wins, regardless of argument order.
	///
	/// ## Examples
	///
	/// ```
	/// use getarg::ArgStore;
	///
	/// let args = ArgStore::parse(["-noCBOX", "-CBOX"]);
	/// assert!(args.get_bool_arg("-CBOX", false));
	///
	/// let args = ArgStore::parse(["--noCBOX=1"]);
	/// assert!(! args.get_bool_arg("-CBOX", true));
	///
	/// let args = ArgStore::parse(["-noCBOX=0"]);
	/// assert!(args.get_bool_arg("-CBOX", false));
	/// ```
	pub fn get_bool_arg(&self, key: &str, default: bool) -> bool {
		let key = canonical_key(key);
		resolve_bool(
			self.last(key),
			self.last(&format!("no{key}")),
			default,
		)
	}

	#[must_use]
	/// # String.
	///
	/// Return the value for `key` verbatim, or `default` if the key was not
	/// passed. Keys passed without a value resolve to an empty string, not
	/// the default.
	///
	/// Negated forms have no effect here.
	///
	/// ## Examples
	///
	/// ```
	/// use getarg::ArgStore;
	///
	/// let args = ArgStore::parse(["-CBOX=eleven", "-bar"]);
	/// assert_eq!(args.get_arg("-CBOX", ""), "eleven");
	/// assert_eq!(args.get_arg("-bar", "eleven"), "");
	/// assert_eq!(args.get_arg("-baz", "eleven"), "eleven");
	/// ```
	pub fn get_arg<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
		self.last(canonical_key(key)).unwrap_or(default)
	}

	#[must_use]
	/// # Integer.
	///
	/// Return the value for `key` parsed as a base-10 integer, or `default`
	/// if the key was not passed.
	///
	/// **Heads up:** if the key _was_ passed but its value cannot be parsed —
	/// it is empty, not a number, or only partly a number — this returns
	/// `0`, not `default`. This is surprising, but long-standing, behavior.
	/// Use [`ArgStore::try_get_int_arg`] if you'd rather find out.
	///
	/// ## Examples
	///
	/// ```
	/// use getarg::ArgStore;
	///
	/// let args = ArgStore::parse(["-CBOX=11", "-bar=NaN", "-baz"]);
	/// assert_eq!(args.get_int_arg("-CBOX", 0), 11);
	/// assert_eq!(args.get_int_arg("-bar", 1), 0);
	/// assert_eq!(args.get_int_arg("-baz", 11), 0);
	/// assert_eq!(args.get_int_arg("-foo", 11), 11);
	/// ```
	pub fn get_int_arg(&self, key: &str, default: i64) -> i64 {
		match self.try_get_int_arg(key) {
			Ok(v) => v.unwrap_or(default),
			Err(e) => {
				debug!(key = e.key(), error = %e, "Falling back to zero.");
				0
			},
		}
	}

	/// # Integer (Checked).
	///
	/// Same as [`ArgStore::get_int_arg`], but returns `None` if the key was
	/// not passed, and an error if its value could not be parsed.
	///
	/// ## Examples
	///
	/// ```
	/// use getarg::ArgStore;
	///
	/// let args = ArgStore::parse(["-CBOX=11", "-bar=NaN"]);
	/// assert_eq!(args.try_get_int_arg("-CBOX"), Ok(Some(11)));
	/// assert_eq!(args.try_get_int_arg("-foo"), Ok(None));
	/// assert!(args.try_get_int_arg("-bar").is_err());
	/// ```
	///
	/// ## Errors
	///
	/// Returns [`GetArgError::InvalidInt`] if the value is not a valid `i64`.
	pub fn try_get_int_arg(&self, key: &str) -> Result<Option<i64>, GetArgError> {
		let key = canonical_key(key);
		let Some(value) = self.last(key) else { return Ok(None); };
		value.parse::<i64>()
			.map(Some)
			.map_err(|source| GetArgError::InvalidInt {
				key: key.to_owned(),
				value: value.to_owned(),
				source,
			})
	}
}



#[must_use]
/// # Resolve Boolean.
///
/// This holds the negation policy used by [`ArgStore::get_bool_arg`], given
/// the positive and negated values (if present).
///
/// ## Examples
///
/// ```
/// use getarg::resolve_bool;
///
/// assert!(resolve_bool(Some(""), Some(""), false));  // -X -noX
/// assert!(! resolve_bool(Some("0"), Some("0"), true)); // -X=0 -noX=0
/// assert!(resolve_bool(None, Some("0"), false));     // -noX=0
/// assert!(resolve_bool(None, None, true));
/// ```
pub fn resolve_bool(positive: Option<&str>, negative: Option<&str>, default: bool) -> bool {
	match (positive, negative) {
		(Some(v), _) => v != "0",
		(None, Some(v)) => v == "0",
		(None, None) => default,
	}
}
