/*!
# Rip Off: Disc Layout
*/

use crate::{
	CHECK_RADIUS,
	OFFSETS_PER_TRACK,
	RipOffError,
	SAMPLES_PER_SECTOR,
};



#[derive(Debug, Clone)]
/// # Disc Layout.
///
/// This holds the per-track sample schedule the checksum engine walks: one
/// adjusted length per track plus a sentinel tail, and the unadjusted total
/// that bounds the stream.
///
/// Two adjustments are baked in up front:
/// * the final track ends `CHECK_RADIUS + 1` samples early, keeping the
///   disc's last five sectors (and change) out of its checksums;
/// * a synthetic `OFFSETS_PER_TRACK`-sample tail follows it, giving the
///   engine room to finish deriving the final track's shifted windows
///   without any last-track special-casing.
pub struct DiscLayout {
	/// # Adjusted Track Lengths (Samples).
	///
	/// One entry per track, then the sentinel. The last real entry may have
	/// wrapped for degenerate (sub-five-sector) tracks; such a track never
	/// reaches its boundary before the stream runs out, which is the
	/// behavior the checksums expect.
	lengths: Box<[u32]>,

	/// # Unadjusted Total (Samples).
	total: u64,
}

impl DiscLayout {
	/// # New.
	///
	/// Build a layout from per-track lengths in CD sectors (588-sample
	/// blocks).
	///
	/// ## Errors
	///
	/// Returns an error if no tracks are given or a length overflows the
	/// sample scale.
	pub fn new(sectors: &[u32]) -> Result<Self, RipOffError> {
		if sectors.is_empty() { return Err(RipOffError::NoTracks); }

		let mut lengths = Vec::with_capacity(sectors.len() + 1);
		let mut total: u64 = 0;
		for &v in sectors {
			let len = v.checked_mul(SAMPLES_PER_SECTOR).ok_or(RipOffError::Overflow)?;
			total += u64::from(len);
			lengths.push(len);
		}

		if let Some(last) = lengths.last_mut() {
			*last = last.wrapping_sub(CHECK_RADIUS + 1);
		}
		lengths.push(OFFSETS_PER_TRACK);

		Ok(Self {
			lengths: lengths.into_boxed_slice(),
			total,
		})
	}
}

impl DiscLayout {
	#[must_use]
	/// # Track Count.
	///
	/// The number of real tracks, excluding the sentinel.
	pub fn tracks(&self) -> usize { self.lengths.len() - 1 }

	#[must_use]
	/// # Total Samples.
	///
	/// The unadjusted disc length in samples; the stream must supply
	/// exactly this many values.
	pub const fn total_samples(&self) -> u64 { self.total }

	#[must_use]
	/// # Adjusted Lengths.
	///
	/// The full schedule, sentinel included.
	pub fn lengths(&self) -> &[u32] { &self.lengths }

	/// # Length of a Schedule Entry.
	pub(crate) fn length(&self, idx: usize) -> u32 { self.lengths[idx] }
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_layout() {
		let layout = DiscLayout::new(&[8, 16, 16]).expect("Layout failed.");
		assert_eq!(layout.tracks(), 3, "Wrong track count.");
		assert_eq!(layout.total_samples(), 23_520, "Wrong total.");
		assert_eq!(
			layout.lengths(),
			&[4704, 9408, 9408 - (CHECK_RADIUS + 1), OFFSETS_PER_TRACK],
			"Wrong schedule.",
		);
	}

	#[test]
	fn t_layout_degenerate() {
		// A one-sector disc cannot cover the tail trim; the length wraps
		// (and the boundary simply never fires).
		let layout = DiscLayout::new(&[1]).expect("Layout failed.");
		assert_eq!(layout.total_samples(), 588, "Wrong total.");
		assert_eq!(
			layout.lengths()[0],
			588_u32.wrapping_sub(CHECK_RADIUS + 1),
			"Wrong wrapped length.",
		);
	}

	#[test]
	fn t_layout_bad() {
		assert!(
			matches!(DiscLayout::new(&[]), Err(RipOffError::NoTracks)),
			"An empty layout should fail.",
		);
		assert!(
			matches!(DiscLayout::new(&[8, u32::MAX]), Err(RipOffError::Overflow)),
			"An overflowing layout should fail.",
		);
	}
}
