/*!
# GetArg: Debug

This example parses any arbitrary arguments fed to it and displays the
resulting store. Set `RUST_LOG=trace` to watch it work.

Any keys named on the command line are also resolved as booleans, strings,
and integers, e.g.:
cargo run --example debug -- -CBOX=1 -noCBOX --bar=NaN /foo/bar
*/

use getarg::ArgStore;
use tracing_subscriber::{
	EnvFilter,
	fmt,
};

fn main() {
	fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let args = ArgStore::from_env();
	println!("\x1b[2m-----\x1b[0m\n{args:?}");

	let mut keys: Vec<&str> = args.keys()
		.map(|k| k.strip_prefix("no").unwrap_or(k))
		.collect();
	keys.sort_unstable();
	keys.dedup();

	for k in keys {
		println!(
			"\x1b[2m-----\x1b[0m\n\x1b[1m-{k}\x1b[0m\n  bool:   {}\n  string: {:?}\n  int:    {}",
			args.get_bool_arg(k, false),
			args.get_arg(k, ""),
			args.get_int_arg(k, 0),
		);
	}
	println!("\x1b[2m-----\x1b[0m");
}
