/*!
# Rip Off: Errors
*/

#[cfg(feature = "bin")]
use argyle::ArgyleError;
use fyi_msg::Msg;
use std::{
	error::Error,
	fmt,
};



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Errors.
pub enum RipOffError {
	/// # Misaligned Argument Count.
	ArgsChunk,

	/// # CLI Parsing failure.
	CliParse(&'static str),

	/// # Premature End of Stream.
	Eof,

	/// # No Tracks.
	NoTracks,

	/// # Numbers can't be converted to the necessary types.
	Overflow,

	/// # Stream Read Failure.
	Read(String),

	/// # Writing to disk.
	Write(String),

	#[cfg(feature = "bin")]
	/// # Argyle Passthrough.
	Argue(ArgyleError),
}

impl Error for RipOffError {}

#[cfg(feature = "bin")]
impl From<ArgyleError> for RipOffError {
	#[inline]
	fn from(err: ArgyleError) -> Self { Self::Argue(err) }
}

impl From<RipOffError> for Msg {
	#[inline]
	fn from(src: RipOffError) -> Self { Self::error(src.to_string()) }
}

impl fmt::Display for RipOffError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ArgsChunk => f.write_str("Invalid number of arguments."),
			Self::CliParse(s) => write!(f, "Unable to parse {s}."),
			Self::Eof => f.write_str("Unexpected EOF."),
			Self::NoTracks => f.write_str("At least one track block is required."),
			Self::Overflow => f.write_str("The numbers are too big for this system architecture."),
			Self::Read(s) => write!(f, "Stream read error: {s}."),
			Self::Write(s) => write!(f, "Unable to write to {s}."),

			#[cfg(feature = "bin")]
			Self::Argue(e) => write!(f, "{e}"),
		}
	}
}
