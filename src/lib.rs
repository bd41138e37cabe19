/*!
# GetArg

This crate provides a tiny, forgiving resolver for flat `-key=value`-style
process arguments called [`ArgStore`], along with typed, default-aware
getters for pulling booleans, strings, and integers back out of it.

It does not know anything about the keys your app expects. It performs some
basic normalization — `-key` and `--key` are the same thing, values follow the
first `=`, `-nokey` negates `-key` — and records whatever it finds. Validation
and help screens are left _entirely up to you_.

If that sounds terrible, just use [clap](https://crates.io/crates/clap) instead. Haha.



## Precedence

Boolean lookups honor negated keys, with the positive form _always_ winning,
regardless of argument order:

| Arguments | `get_bool_arg("-foo", default)` |
| --------- | ------------------------------- |
| (none) | `default` |
| `-foo` | `true` |
| `-foo=0` | `false` |
| `-foo=1`, `-foo=anything` | `true` |
| `-nofoo`, `-nofoo=1` | `false` |
| `-nofoo=0` | `true` |
| `-foo -nofoo`, `-nofoo -foo` | `true` |
| `-foo=0 -nofoo=0` | `false` |

String lookups return the value verbatim (an empty string if the key had no
value), or the default if the key was not passed at all.

Integer lookups are the same, except values that can't be parsed resolve to
`0`, _not_ the default. See [`ArgStore::get_int_arg`] for more information.



## Example

```
use getarg::ArgStore;

// Usually you'd want ArgStore::from_env(), but any set of strings will do.
let args = ArgStore::parse([
    "--threads=4",
    "-nocolor",
    "-output=out.txt",
    "/foo/bar",
]);

let threads = args.get_int_arg("-threads", 1);
let color = args.get_bool_arg("-color", true);
let output = args.get_arg("-output", "default.txt");

assert_eq!(threads, 4);
assert!(! color);
assert_eq!(output, "out.txt");
assert_eq!(args.positional(), ["/foo/bar"]);
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod config;
mod error;
mod get;
mod store;

pub use config::ArgConfig;
pub use error::GetArgError;
pub use get::resolve_bool;
pub use store::{
	ArgStore,
	canonical_key,
};
