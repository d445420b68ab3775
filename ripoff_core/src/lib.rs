/*!
# Rip Off: Library
*/

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
	unsafe_code,
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

#![expect(clippy::doc_markdown, reason = "`RipOff` makes this annoying.")]

mod chk;
mod db;
mod disc;
mod error;
mod frame;
mod reader;
mod report;
mod split;

pub use chk::DiscChecker;
pub use db::ChecksumDb;
pub use disc::DiscLayout;
pub use error::RipOffError;
pub(crate) use frame::FrameCrc;
pub use reader::ValueReader;
pub use report::write_results;
pub use split::split_tracks;



// Conversion
// ---------------

/// # Samples per sector.
pub const SAMPLES_PER_SECTOR: u32 = 588;

/// # Bytes Per Sample.
pub(crate) const BYTES_PER_SAMPLE: usize = 4;



// Offsets
// ---------------

/// # Check Radius (Samples).
///
/// AccurateRip tolerates drive read offsets of up to five sectors, less a
/// sample, in either direction.
pub const CHECK_RADIUS: u32 = 5 * SAMPLES_PER_SECTOR - 1;

/// # Offsets Per Track.
///
/// One checksum per signed offset in `-CHECK_RADIUS..=CHECK_RADIUS`.
pub const OFFSETS_PER_TRACK: u32 = 2 * CHECK_RADIUS + 1;
