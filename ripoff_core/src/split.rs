/*!
# Rip Off: Track Splitting
*/

use crate::{
	BYTES_PER_SAMPLE,
	RipOffError,
};
use hound::{
	SampleFormat,
	WavSpec,
	WavWriter,
};
use std::{
	io::{
		ErrorKind,
		Read,
	},
	path::{
		Path,
		PathBuf,
	},
};



/// # Chunk Size (Samples).
const BUF_SAMPLES: usize = 16 * 1024;



/// # Split a Stream Into Tracks.
///
/// Carve `lengths[k]` stereo samples per track off a raw 16-bit
/// little-endian PCM stream, writing each track to `fixed###.wav`
/// (16-bit/44.1kHz/stereo) under `dir`, and returning the paths written.
///
/// The stream is read strictly forward; anything after the last track is
/// left untouched.
///
/// ## Errors
///
/// Returns `Eof` if the stream runs dry mid-track, `Write` for WAV/file
/// failures, and `Read` for any other stream failure.
pub fn split_tracks<R: Read>(
	src: &mut R,
	lengths: &[u32],
	dir: &Path,
) -> Result<Vec<PathBuf>, RipOffError> {
	let spec = WavSpec {
		channels: 2,
		sample_rate: 44_100,
		bits_per_sample: 16,
		sample_format: SampleFormat::Int,
	};

	let mut buf = vec![0_u8; BUF_SAMPLES * BYTES_PER_SAMPLE];
	let mut out = Vec::with_capacity(lengths.len());
	for (k, &len) in lengths.iter().enumerate() {
		let dst = dir.join(format!("fixed{k:03}.wav"));
		let boo = || RipOffError::Write(dst.to_string_lossy().into_owned());

		let mut wav = WavWriter::create(&dst, spec).map_err(|_| boo())?;
		let mut remaining = len as usize;
		while 0 < remaining {
			let grab = remaining.min(BUF_SAMPLES);
			let chunk = &mut buf[..grab * BYTES_PER_SAMPLE];
			src.read_exact(chunk).map_err(|e|
				if e.kind() == ErrorKind::UnexpectedEof { RipOffError::Eof }
				else { RipOffError::Read(e.to_string()) }
			)?;

			// In CD contexts, a sample is one L+R pair. In other contexts,
			// like hound, L and R are each their own sample.
			let mut writer = wav.get_i16_writer(grab as u32 * 2);
			for pair in chunk.chunks_exact(BYTES_PER_SAMPLE) {
				writer.write_sample(i16::from_le_bytes([pair[0], pair[1]]));
				writer.write_sample(i16::from_le_bytes([pair[2], pair[3]]));
			}
			writer.flush().map_err(|_| boo())?;

			remaining -= grab;
		}

		wav.finalize().map_err(|_| boo())?;
		out.push(dst);
	}

	Ok(out)
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_split() {
		let dir = tempfile::tempdir().expect("Tempdir failed.");

		// Five distinctive samples, split three and two.
		let values: Vec<i16> = vec![100, -100, 2, -2, 3000, -3000, 44, -44, 555, -555];
		let mut raw: Vec<u8> = Vec::with_capacity(values.len() * 2);
		for v in &values { raw.extend_from_slice(&v.to_le_bytes()); }

		let out = split_tracks(&mut raw.as_slice(), &[3, 2], dir.path())
			.expect("Split failed.");
		assert_eq!(out.len(), 2, "Two tracks should have been written.");
		assert_eq!(
			out[0].file_name().and_then(|v| v.to_str()),
			Some("fixed000.wav"),
			"Wrong file name.",
		);
		assert_eq!(
			out[1].file_name().and_then(|v| v.to_str()),
			Some("fixed001.wav"),
			"Wrong file name.",
		);

		// Round-trip the contents.
		for (path, want) in [(&out[0], &values[..6]), (&out[1], &values[6..])] {
			let mut reader = hound::WavReader::open(path).expect("Reopen failed.");
			assert_eq!(reader.spec().channels, 2, "Wrong channel count.");
			assert_eq!(reader.spec().sample_rate, 44_100, "Wrong sample rate.");

			let got: Vec<i16> = reader.samples::<i16>()
				.collect::<Result<Vec<i16>, _>>()
				.expect("Samples failed.");
			assert_eq!(got, want, "Round-tripped samples do not match.");
		}
	}

	#[test]
	fn t_split_eof() {
		let dir = tempfile::tempdir().expect("Tempdir failed.");
		let raw = [0_u8; 8]; // Two samples.
		assert!(
			matches!(
				split_tracks(&mut raw.as_slice(), &[3], dir.path()),
				Err(RipOffError::Eof),
			),
			"A short stream should EOF.",
		);
	}

	#[test]
	fn t_split_nothing() {
		// No tracks, no files, no complaints.
		let dir = tempfile::tempdir().expect("Tempdir failed.");
		let mut raw: &[u8] = &[];
		let out = split_tracks(&mut raw, &[], dir.path()).expect("Split failed.");
		assert!(out.is_empty(), "Nothing should have been written.");
	}
}
