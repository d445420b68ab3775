/*!
# Rip Off: Splitter
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



use argyle::{
	Argue,
	ArgyleError,
	FLAG_HELP,
	FLAG_VERSION,
};
use dactyl::traits::BytesToUnsigned;
use fyi_msg::Msg;
use ripoff_core::{
	RipOffError,
	split_tracks,
};
use std::path::Path;



/// # Main.
///
/// This lets us bubble up startup errors so they can be pretty-printed.
fn main() {
	match _main() {
		Ok(()) => {},
		Err(RipOffError::Argue(ArgyleError::WantsVersion)) => {
			println!(concat!("Rip Off! v", env!("CARGO_PKG_VERSION")));
		},
		Err(RipOffError::Argue(ArgyleError::WantsHelp)) => {
			helper();
		},
		Err(e) => {
			Msg::from(e).eprint();
			std::process::exit(1);
		},
	}
}

/// # Actual Main.
///
/// Carve the stream into per-track WAVs in the working directory.
fn _main() -> Result<(), RipOffError> {
	let args = Argue::new(FLAG_HELP | FLAG_VERSION)?;

	let mut lengths: Vec<u32> = Vec::new();
	for v in args.args_os() {
		let v = v.as_encoded_bytes().trim_ascii();
		lengths.push(u32::btou(v).ok_or(RipOffError::CliParse("the track lengths"))?);
	}

	// Nothing to split is a valid, if pointless, request.
	if lengths.is_empty() { return Ok(()); }

	let stdin = std::io::stdin();
	split_tracks(&mut stdin.lock(), &lengths, Path::new("."))?;
	Ok(())
}

#[cold]
/// # Print Help.
fn helper() {
	println!(concat!(
		r"
   .--------.
  / .------. \     ", "\x1b[38;5;199mRip Off: Splitter\x1b[0;38;5;69m v", env!("CARGO_PKG_VERSION"), "\x1b[0m", r#"
 / /  .--.  \ \    Carve a raw CD audio stream
 | |  |()|  | |    into per-track WAV files.
 \ \  '--'  / /
  \ '------' /
   '--------'

USAGE:
    ripsplit [<SAMPLES>]... < disc.pcm

ARGUMENTS:
    <SAMPLES>         A track length in stereo samples, decimal, one per
                      track, in disc order.

INPUT:
    The disc audio arrives on STDIN as raw 16-bit little-endian stereo
    PCM, one track after the next, no headers.

OUTPUT:
    One fixed###.wav (16-bit/44.1kHz/stereo) per track, numbered from
    zero, written to the current working directory.

MISCELLANEOUS:
    -h, --help        Print help information to STDOUT and exit.
    -V, --version     Print version information to STDOUT and exit.
"#
	));
}
