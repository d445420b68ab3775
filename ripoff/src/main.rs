/*!
# Rip Off!
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
	ChecksumDb,
	DiscChecker,
	DiscLayout,
	RipOffError,
	ValueReader,
	write_results,
};
use std::io::Write;



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

#[expect(
	clippy::cast_possible_wrap,
	reason = "The schedule tail is signed on purpose.",
)]
/// # Actual Main.
///
/// Parse the checksum schedule, crunch the stream, report the matches.
fn _main() -> Result<(), RipOffError> {
	// The command line carries everything but the audio.
	let args = Argue::new(FLAG_HELP | FLAG_VERSION)?;
	let (pairs, sectors, db) = parse_args(&args)?;
	let layout = DiscLayout::new(&sectors)?;

	let writer = std::io::stdout();
	let mut handle = writer.lock();

	// The header: totals first, then the adjusted schedule. (The last two
	// entries — the trimmed final track and the sentinel — are signed so
	// degenerate wraps read sensibly.)
	let tracks = layout.tracks();
	let total = layout.total_samples();
	let _res = writeln!(&mut handle, "track count: {tracks}");
	let _res = writeln!(&mut handle, "entries per track: {pairs}");
	let _res = writeln!(&mut handle, "total_length: {total}");
	for (k, &len) in layout.lengths().iter().enumerate() {
		let _res = writeln!(&mut handle, "len({k}): {}", len as i32);
	}

	// Crunch the whole stream, one packed sample at a time, noting the
	// lead cursor's progress through the tracks as it goes.
	let mut chk = DiscChecker::new(layout);
	let _res = writeln!(&mut handle, "At track 0 ({}, 0)", u8::from(0 < tracks));

	let stdin = std::io::stdin();
	let mut src = ValueReader::new(stdin.lock());
	let mut di: u64 = 0;
	while di < total {
		let value = src.next_value()?;
		di += 1;
		if let Some(track) = chk.push(value) {
			let _res = writeln!(
				&mut handle,
				"At {di} track {track} ({}, {})",
				u8::from(track < tracks),
				u8::from(0 < track),
			);
		}
	}

	// And the results!
	write_results(&chk, &db, &mut handle)
		.map_err(|_| RipOffError::Write("STDOUT".to_owned()))?;
	let _res = handle.flush();

	Ok(())
}

/// # Parse Command Line.
///
/// Decode the raw arguments, then hand the numbers off to `parse_values`
/// for the actual grammar.
fn parse_args(args: &Argue) -> Result<(usize, Vec<u32>, ChecksumDb), RipOffError> {
	let mut vals: Vec<u32> = Vec::new();
	for v in args.args_os() {
		let v = v.as_encoded_bytes().trim_ascii();
		vals.push(u32::btou(v).ok_or(RipOffError::CliParse("the arguments"))?);
	}
	parse_values(&vals)
}

/// # Parse the Argument Grammar.
///
/// The grammar is positional and entirely decimal: the candidate-pair
/// count, then one block per track — a length in CD sectors, that many v1
/// checksums, and that many frame-450 checksums.
///
/// Returns the pair count, the per-track sector lengths, and the candidate
/// database.
fn parse_values(vals: &[u32]) -> Result<(usize, Vec<u32>, ChecksumDb), RipOffError> {
	let (&pairs, rest) = vals.split_first().ok_or(RipOffError::NoTracks)?;
	let pairs = usize::try_from(pairs).map_err(|_| RipOffError::Overflow)?;
	let chunk = pairs.checked_mul(2)
		.and_then(|v| v.checked_add(1))
		.ok_or(RipOffError::Overflow)?;

	if rest.is_empty() { return Err(RipOffError::NoTracks); }
	if rest.len() % chunk != 0 { return Err(RipOffError::ArgsChunk); }

	let tracks = rest.len() / chunk;
	let mut sectors = Vec::with_capacity(tracks);
	let mut data = Vec::with_capacity(tracks * pairs);
	for block in rest.chunks_exact(chunk) {
		sectors.push(block[0]);
		for j in 0..pairs {
			data.push((block[1 + j], block[1 + pairs + j]));
		}
	}

	Ok((pairs, sectors, ChecksumDb::new(pairs, data)))
}

#[cold]
/// # Print Help.
fn helper() {
	println!(concat!(
		r"
   .--------.
  / .------. \     ", "\x1b[38;5;199mRip Off!\x1b[0;38;5;69m v", env!("CARGO_PKG_VERSION"), "\x1b[0m", r#"
 / /  .--.  \ \    Offset-tolerant AccurateRip
 | |  |()|  | |    verification for raw CD audio.
 \ \  '--'  / /
  \ '------' /
   '--------'

USAGE:
    ripoff <PAIRS> [<LEN> <CRC>... <CRC450>...]... < disc.pcm

ARGUMENTS:
    <PAIRS>           The number of candidate checksum pairs supplied for
                      each track.
    <LEN>             A track length in CD sectors (588-sample blocks).
    <CRC>             A candidate v1 checksum, decimal.
    <CRC450>          A candidate frame-450 checksum, decimal.

    One <LEN> block is required per track, each carrying exactly <PAIRS>
    v1 checksums followed by <PAIRS> frame-450 checksums.

INPUT:
    The disc audio arrives on STDIN as raw 16-bit little-endian stereo
    PCM, one track after the next, no headers, no padding.

OUTPUT:
    A few schedule lines, then one line per track with the offset-zero
    v1, frame-450, and v2 checksums, then one line per candidate match
    at every other read offset within ±2939 samples.

MISCELLANEOUS:
    -h, --help        Print help information to STDOUT and exit.
    -V, --version     Print version information to STDOUT and exit.
"#
	));
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_grammar() {
		// Two tracks, one candidate pair each.
		let (pairs, sectors, db) = parse_values(&[1, 200, 11, 22, 300, 33, 44])
			.expect("Parse failed.");
		assert_eq!(pairs, 1, "Wrong pair count.");
		assert_eq!(sectors, &[200, 300], "Wrong sector lengths.");
		assert_eq!(db.pairs(0), &[(11, 22)], "Wrong track 0 pairs.");
		assert_eq!(db.pairs(1), &[(33, 44)], "Wrong track 1 pairs.");

		// Pairless tracks are fine too.
		let (pairs, sectors, db) = parse_values(&[0, 200, 300])
			.expect("Parse failed.");
		assert_eq!(pairs, 0, "Wrong pair count.");
		assert_eq!(sectors, &[200, 300], "Wrong sector lengths.");
		assert!(db.pairs(0).is_empty(), "No pairs were supplied.");
	}

	#[test]
	fn t_grammar_bad() {
		// Nothing at all, or a pair count with no track blocks.
		assert!(
			matches!(parse_values(&[]), Err(RipOffError::NoTracks)),
			"Empty arguments should fail.",
		);
		assert!(
			matches!(parse_values(&[1]), Err(RipOffError::NoTracks)),
			"A lone pair count should fail.",
		);

		// A block short one checksum.
		assert!(
			matches!(parse_values(&[1, 200, 11, 22, 300, 33]), Err(RipOffError::ArgsChunk)),
			"Misaligned blocks should fail.",
		);
	}
}
