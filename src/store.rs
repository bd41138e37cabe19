/*!
# GetArg: Argument Store.
*/

use std::{
	collections::BTreeMap,
	ffi::OsStr,
};
use tracing::{
	debug,
	trace,
	warn,
};



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Argument Store.
///
/// `ArgStore` is a flat, read-only map of the dash-prefixed keys passed to a
/// program, along with any plain ("positional") arguments that came with
/// them. It does not know or care what keys your app supports; it simply
/// records what it was given so that the typed getters — [`ArgStore::get_bool_arg`],
/// [`ArgStore::get_arg`], [`ArgStore::get_int_arg`] — can answer questions
/// about it later.
///
/// ## Parsing Rules
///
/// * Arguments beginning with a dash are keys. Up to two leading dashes are stripped, so `-key` and `--key` are the same thing.
/// * Keys may carry a value after the first `=`, e.g. `-key=val`. Keys without one are recorded with an empty value.
/// * Keys can repeat. All values are kept, in order, but the last one wins for scalar lookups.
/// * Everything else is positional.
///
/// No validation is performed. Keys are whatever precedes the `=`, even if
/// that happens to be nothing at all.
///
/// Negated keys like `-nofoo` are recorded as-are (under `nofoo`); it is the
/// boolean getter that gives them meaning.
///
/// ## Examples
///
/// ```
/// use getarg::ArgStore;
///
/// let args = ArgStore::parse(["-verbose", "--threads=4", "-nocolor", "file.txt"]);
///
/// assert!(args.get_bool_arg("-verbose", false));
/// assert!(! args.get_bool_arg("-color", true));
/// assert_eq!(args.get_int_arg("-threads", 1), 4);
/// assert_eq!(args.get_arg("-output", "out.txt"), "out.txt");
/// assert_eq!(args.positional(), ["file.txt"]);
/// ```
pub struct ArgStore {
	/// # Keys and Values.
	pub(crate) values: BTreeMap<String, Vec<String>>,

	/// # Positional Arguments.
	pub(crate) positional: Vec<String>,
}

impl<S: AsRef<OsStr>> FromIterator<S> for ArgStore {
	fn from_iter<I: IntoIterator<Item=S>>(src: I) -> Self {
		let mut out = Self::default();
		for raw in src { out.push(raw.as_ref()); }

		debug!(
			keys = out.values.len(),
			positional = out.positional.len(),
			"Parsed arguments.",
		);

		out
	}
}

/// ## Instantiation.
impl ArgStore {
	#[must_use]
	/// # Parse.
	///
	/// Build a store from an arbitrary set of arguments. The program path, if
	/// any, should be stripped beforehand.
	///
	/// Arguments that are not valid UTF-8 are converted lossily.
	///
	/// ## Examples
	///
	/// ```
	/// use getarg::ArgStore;
	///
	/// // Single- and double-dash keys are equivalent.
	/// assert_eq!(
	///     ArgStore::parse(["--CBOX=1"]),
	///     ArgStore::parse(["-CBOX=1"]),
	/// );
	/// ```
	pub fn parse<I, S>(src: I) -> Self
	where I: IntoIterator<Item=S>, S: AsRef<OsStr> {
		src.into_iter().collect()
	}

	#[must_use]
	/// # From Env.
	///
	/// Build a store from [`std::env::args_os`], skipping the first (command
	/// path) entry.
	pub fn from_env() -> Self { std::env::args_os().skip(1).collect() }

	/// # Push Argument.
	///
	/// Classify and record a single raw argument.
	fn push(&mut self, raw: &OsStr) {
		let raw = raw.to_str().map_or_else(
			|| {
				let lossy = raw.to_string_lossy().into_owned();
				warn!(arg = %lossy, "Argument is not valid UTF-8.");
				lossy
			},
			str::to_owned,
		);

		if raw.starts_with('-') {
			let (k, v) = split_key(&raw);
			trace!(key = k, value = v, "Key.");
			self.values.entry(k.to_owned()).or_default().push(v.to_owned());
		}
		else {
			trace!(arg = %raw, "Positional.");
			self.positional.push(raw);
		}
	}
}

/// ## Builder Patterns.
impl ArgStore {
	#[must_use]
	/// # With Fallback.
	///
	/// Record `value` for `key`, but only if neither the key nor its negated
	/// form (`-nokey`) is already present. This is useful for deriving one
	/// setting from another before the store is handed off.
	///
	/// ## Examples
	///
	/// ```
	/// use getarg::ArgStore;
	///
	/// let args = ArgStore::parse(["-threads=4"])
	///     .with_fallback("-threads", "8")
	///     .with_fallback("-output", "out.txt");
	///
	/// assert_eq!(args.get_arg("-threads", ""), "4");
	/// assert_eq!(args.get_arg("-output", ""), "out.txt");
	/// ```
	pub fn with_fallback(mut self, key: &str, value: &str) -> Self {
		self.set_fallback(key, value);
		self
	}

	#[must_use]
	/// # With Boolean Fallback.
	///
	/// Same as [`ArgStore::with_fallback`], but records `1` or `0`.
	///
	/// ## Examples
	///
	/// ```
	/// use getarg::ArgStore;
	///
	/// let args = ArgStore::parse(["-listen=0"])
	///     .with_fallback_bool("-listen", true)
	///     .with_fallback_bool("-discover", false);
	///
	/// assert!(! args.get_bool_arg("-listen", true));
	/// assert!(! args.get_bool_arg("-discover", true));
	/// ```
	pub fn with_fallback_bool(mut self, key: &str, value: bool) -> Self {
		self.set_fallback_bool(key, value);
		self
	}

	/// # Set Fallback.
	///
	/// Same as [`ArgStore::with_fallback`], but in place, returning `true` if
	/// the value was recorded or `false` if the key (or its negation) was
	/// already present.
	///
	/// ## Examples
	///
	/// ```
	/// use getarg::ArgStore;
	///
	/// let mut args = ArgStore::parse(["-threads=4", "-nolisten"]);
	/// assert!(! args.set_fallback("-threads", "8"));
	/// assert!(! args.set_fallback("-listen", "1"));
	/// assert!(args.set_fallback("-output", "out.txt"));
	/// ```
	pub fn set_fallback(&mut self, key: &str, value: &str) -> bool {
		let key = canonical_key(key);
		if
			self.values.contains_key(key) ||
			self.values.contains_key(&format!("no{key}"))
		{
			return false;
		}

		trace!(key, value, "Fallback.");
		self.values.insert(key.to_owned(), vec![value.to_owned()]);
		true
	}

	/// # Set Boolean Fallback.
	///
	/// Same as [`ArgStore::set_fallback`], but records `1` or `0`.
	pub fn set_fallback_bool(&mut self, key: &str, value: bool) -> bool {
		self.set_fallback(key, if value { "1" } else { "0" })
	}
}

/// ## Introspection.
impl ArgStore {
	#[must_use]
	/// # Is Empty?
	///
	/// Returns `true` if there are neither keys nor positional arguments.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty() && self.positional.is_empty()
	}

	#[must_use]
	/// # Key Count.
	///
	/// Return the number of unique keys. (Repeats and positional arguments
	/// are not counted.)
	pub fn len(&self) -> usize { self.values.len() }

	/// # Keys.
	///
	/// Iterate over the unique (canonical) keys, in alphabetical order.
	pub fn keys(&self) -> impl Iterator<Item=&str> {
		self.values.keys().map(String::as_str)
	}

	#[must_use]
	/// # Positional Arguments.
	///
	/// Return the arguments that weren't keys, in the order received.
	pub fn positional(&self) -> &[String] { &self.positional }
}



#[must_use]
/// # Canonical Key.
///
/// Strip up to two leading dashes from a key. Anything beyond that is
/// considered part of the name.
///
/// ## Examples
///
/// ```
/// use getarg::canonical_key;
///
/// assert_eq!(canonical_key("-CBOX"), "CBOX");
/// assert_eq!(canonical_key("--CBOX"), "CBOX");
/// assert_eq!(canonical_key("CBOX"), "CBOX");
/// assert_eq!(canonical_key("---CBOX"), "-CBOX");
/// ```
pub fn canonical_key(raw: &str) -> &str {
	let raw = raw.strip_prefix('-').unwrap_or(raw);
	raw.strip_prefix('-').unwrap_or(raw)
}

/// # Split Key.
///
/// Separate a dash-prefixed argument into its canonical key and value (the
/// bit after the first `=`, or nothing).
fn split_key(raw: &str) -> (&str, &str) {
	let raw = canonical_key(raw);
	raw.split_once('=').unwrap_or((raw, ""))
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_canonical_key() {
		for (raw, expected) in [
			("", ""),
			("-", ""),
			("--", ""),
			("---", "-"),
			("a", "a"),
			("-a", "a"),
			("--a", "a"),
			("---a", "-a"),
			("-no-a", "no-a"),
			("a-", "a-"),
		] {
			assert_eq!(canonical_key(raw), expected, "Canonical key mismatch for {raw:?}.");
		}
	}

	#[test]
	fn t_split_key() {
		for (raw, expected) in [
			("-CBOX", ("CBOX", "")),
			("--CBOX", ("CBOX", "")),
			("-CBOX=", ("CBOX", "")),
			("-CBOX=11", ("CBOX", "11")),
			("--CBOX=verbose", ("CBOX", "verbose")),
			("-CBOX=a=b", ("CBOX", "a=b")),
			("-=val", ("", "val")),
			("--=", ("", "")),
			("-", ("", "")),
		] {
			assert_eq!(split_key(raw), expected, "Split mismatch for {raw:?}.");
		}
	}

	#[test]
	fn t_parse() {
		let args = ArgStore::parse([
			"-CBOX",
			"",
			"--bar=1",
			"/foo/bar",
			"-bar=2",
			"-noCBOX=0",
			"baz",
		]);

		assert_eq!(args.len(), 3);
		assert!(! args.is_empty());
		assert_eq!(args.keys().collect::<Vec<_>>(), ["CBOX", "bar", "noCBOX"]);
		assert_eq!(args.values.get("CBOX"), Some(&vec![String::new()]));
		assert_eq!(args.values.get("bar"), Some(&vec!["1".to_owned(), "2".to_owned()]));
		assert_eq!(args.values.get("noCBOX"), Some(&vec!["0".to_owned()]));
		assert_eq!(args.positional(), ["", "/foo/bar", "baz"]);

		// The same input should always produce the same store.
		assert_eq!(
			args,
			ArgStore::parse(["-CBOX", "", "--bar=1", "/foo/bar", "-bar=2", "-noCBOX=0", "baz"]),
		);

		// Nothing in, nothing out.
		let empty = ArgStore::parse(Vec::<String>::new());
		assert!(empty.is_empty());
		assert_eq!(empty, ArgStore::default());

		// Empty strings are still positional.
		let args = ArgStore::parse(["-a", "", "b"]);
		assert_eq!(args.positional(), ["", "b"]);
		assert!(! ArgStore::parse([""]).is_empty());
	}

	#[test]
	fn t_parse_dashes() {
		// One or two dashes, it doesn't matter.
		assert_eq!(ArgStore::parse(["--X=1"]), ArgStore::parse(["-X=1"]));
		assert_eq!(ArgStore::parse(["--X"]), ArgStore::parse(["-X"]));
		assert_ne!(ArgStore::parse(["---X"]), ArgStore::parse(["-X"]));

		// Malformed keys are kept best-effort.
		let args = ArgStore::parse(["-=oops", "--"]);
		assert_eq!(args.len(), 1);
		assert_eq!(args.values.get(""), Some(&vec!["oops".to_owned(), String::new()]));
		assert!(args.positional().is_empty());
	}

	#[cfg(unix)]
	#[test]
	fn t_parse_invalid_utf8() {
		use std::{
			ffi::OsString,
			os::unix::ffi::OsStringExt,
		};

		let args = ArgStore::parse([
			OsString::from("-key=val"),
			OsString::from_vec(vec![b'-', b'k', 0xFF, b'=', b'1']),
			OsString::from_vec(vec![b'f', 0xFE]),
		]);

		assert_eq!(args.values.get("key"), Some(&vec!["val".to_owned()]));
		assert_eq!(args.values.get("k\u{FFFD}"), Some(&vec!["1".to_owned()]));
		assert_eq!(args.positional(), ["f\u{FFFD}"]);
	}

	#[test]
	fn t_with_fallback() {
		let args = ArgStore::parse(["-a=1", "-noc"])
			.with_fallback("-a", "2")
			.with_fallback("--b", "3")
			.with_fallback_bool("c", true)
			.with_fallback_bool("-d", false);

		assert_eq!(args.values.get("a"), Some(&vec!["1".to_owned()]));
		assert_eq!(args.values.get("b"), Some(&vec!["3".to_owned()]));
		assert_eq!(args.values.get("d"), Some(&vec!["0".to_owned()]));

		// The negation was explicit, so should be left alone.
		assert!(! args.values.contains_key("c"));
		assert_eq!(args.len(), 4);
	}

	#[test]
	fn t_set_fallback() {
		let mut args = ArgStore::parse(["-a=1", "--nob"]);
		assert!(! args.set_fallback("-a", "2"), "Existing key was overridden.");
		assert!(! args.set_fallback_bool("-b", true), "Negated key was overridden.");
		assert!(args.set_fallback("--c", "3"), "Missing key was not set.");
		assert!(args.set_fallback_bool("d", false), "Missing key was not set.");

		// Once set, a second attempt is a no-op.
		assert!(! args.set_fallback("-c", "4"), "Fallback applied twice.");

		assert_eq!(args.values.get("a"), Some(&vec!["1".to_owned()]));
		assert!(! args.values.contains_key("b"));
		assert_eq!(args.values.get("c"), Some(&vec!["3".to_owned()]));
		assert_eq!(args.values.get("d"), Some(&vec!["0".to_owned()]));
	}
}
