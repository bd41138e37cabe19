/*!
# GetArg: Config.
*/

use crate::ArgStore;
use std::{
	ffi::OsStr,
	ops::Deref,
};
use tracing::debug;



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Argument Config.
///
/// This is a thin, explicitly-constructed owner for an [`ArgStore`], for apps
/// that want to hang on to their settings and occasionally start over (tests,
/// mostly).
///
/// It dereferences to [`ArgStore`], so all of the usual getters work directly.
///
/// ## Examples
///
/// ```
/// use getarg::ArgConfig;
///
/// let mut config = ArgConfig::new(["-CBOX", "-bar=12"]);
/// assert!(config.get_bool_arg("-CBOX", false));
/// assert_eq!(config.get_int_arg("-bar", 0), 12);
///
/// // Resetting replaces everything; nothing carries over.
/// config.reset(["-noCBOX"]);
/// assert!(! config.get_bool_arg("-CBOX", true));
/// assert_eq!(config.get_int_arg("-bar", 0), 0);
/// ```
pub struct ArgConfig {
	/// # Store.
	store: ArgStore,
}

impl Deref for ArgConfig {
	type Target = ArgStore;
	#[inline]
	fn deref(&self) -> &Self::Target { &self.store }
}

impl From<ArgStore> for ArgConfig {
	#[inline]
	fn from(store: ArgStore) -> Self { Self { store } }
}

impl ArgConfig {
	#[must_use]
	/// # New.
	///
	/// Parse `src` into a new config. See [`ArgStore::parse`] for details.
	pub fn new<I, S>(src: I) -> Self
	where I: IntoIterator<Item=S>, S: AsRef<OsStr> {
		Self { store: ArgStore::parse(src) }
	}

	#[must_use]
	/// # From Env.
	///
	/// Parse the environment's arguments, skipping the first (command path)
	/// entry.
	pub fn from_env() -> Self { Self { store: ArgStore::from_env() } }

	/// # Reset.
	///
	/// Throw out the current store and replace it with a freshly-parsed one.
	/// Nothing from the old store survives.
	pub fn reset<I, S>(&mut self, src: I)
	where I: IntoIterator<Item=S>, S: AsRef<OsStr> {
		let old = self.store.len();
		self.store = ArgStore::parse(src);
		debug!(old, new = self.store.len(), "Reset arguments.");
	}

	#[must_use]
	/// # Store.
	pub const fn store(&self) -> &ArgStore { &self.store }

	#[must_use]
	/// # Into Store.
	pub fn into_store(self) -> ArgStore { self.store }
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_reset() {
		let mut config = ArgConfig::new(["-CBOX=1", "-bar=12", "/foo/bar"]);
		assert!(config.get_bool_arg("-CBOX", false));
		assert_eq!(config.get_int_arg("-bar", 0), 12);
		assert_eq!(config.positional(), ["/foo/bar"]);

		// Stale entries must not leak across resets.
		config.reset(["--noCBOX=1"]);
		assert!(! config.get_bool_arg("-CBOX", true));
		assert!(! config.is_set("-bar"));
		assert_eq!(config.get_int_arg("-bar", 7), 7);
		assert!(config.positional().is_empty());
		assert_eq!(config.store(), &ArgStore::parse(["-noCBOX=1"]));

		// And all the way back to nothing.
		config.reset(Vec::<&str>::new());
		assert!(config.is_empty());
		assert_eq!(config, ArgConfig::default());
	}

	#[test]
	fn t_from_store() {
		let store = ArgStore::parse(["-a=1"]).with_fallback("-b", "2");
		let config = ArgConfig::from(store.clone());
		assert_eq!(config.get_arg("-b", ""), "2");
		assert_eq!(config.into_store(), store);
	}
}
