/*!
# Rip Off: Checksums
*/

use crate::{
	CHECK_RADIUS,
	DiscLayout,
	FrameCrc,
	OFFSETS_PER_TRACK,
	SAMPLES_PER_SECTOR,
};



/// # First Frame-450 Completion.
///
/// The trailing-cursor position at which the rolling sector CRC first
/// covers the whole of CD-frame 450, i.e. the frame-450 window at the
/// extreme negative offset.
const CHK450_LEAD: u32 = 451 * SAMPLES_PER_SECTOR - 1 - CHECK_RADIUS;

/// # Checksum Table Index.
const fn table_idx(track: usize, slot: usize) -> usize {
	track * OFFSETS_PER_TRACK as usize + slot
}



#[derive(Debug, Clone)]
/// # Disc Checker.
///
/// The single-pass checksum engine: feed it every sample value of the disc
/// in order and it accumulates, per track, the AccurateRip v1 checksum at
/// every offset within the check radius, the v2 checksum at offset zero,
/// and the frame-450 checksum at every offset.
///
/// Two cursors walk the same stream. The lead cursor drives the v1 window
/// seeding and derivation; it starts `CHECK_RADIUS` samples "in", which
/// both excludes the first track's leading radius from its checksums (the
/// AccurateRip first-track rule) and leaves the look-ahead the positive
/// offsets need. The trail cursor crosses each track boundary a radius
/// later — at the nominal track starts — and feeds the v2 and frame-450
/// accumulators in offset-zero alignment.
///
/// Naively, each of the `OFFSETS_PER_TRACK` shifted windows would cost a
/// full pass over its track. Instead only the extreme-negative window is
/// accumulated directly (slot zero); every other slot is derived from its
/// neighbor in constant time once the one new sample it needs arrives,
/// using the window's saved leave-behind sample and running sum. A slot
/// stores that saved sample until the derivation overwrites it with the
/// finished checksum.
///
/// All v1 arithmetic wraps modulo 2³²; the v2 accumulator multiplies in
/// 64 bits and folds both halves back down.
pub struct DiscChecker {
	/// # Disc Layout.
	layout: DiscLayout,

	/// # Sliding v1 Checksums.
	///
	/// One row of `OFFSETS_PER_TRACK` slots per track, slot `o` holding the
	/// checksum at signed offset `o - CHECK_RADIUS`.
	arcf: Vec<u32>,

	/// # Frame-450 Checksums.
	///
	/// Same row layout as `arcf`. Slots the trail cursor never reaches —
	/// short tracks, and the trimmed tail of the last one — stay zero.
	arcf450: Vec<u32>,

	/// # Running Window Sums.
	///
	/// The plain sum of each track's currently-shifting window.
	sum: Vec<u32>,

	/// # v2 Checksums (Offset Zero).
	crc2: Vec<u32>,

	/// # Rolling Sector CRC.
	frame: FrameCrc,

	/// # Samples Consumed.
	di: u64,

	/// # Lead Cursor: Track.
	track: usize,

	/// # Lead Cursor: Position in Track.
	ti: u32,

	/// # Lead Cursor: Samples Since the Last Boundary.
	///
	/// This doubles as the derivation index for the previous track's
	/// shifted windows.
	tr: u32,

	/// # Derivation Index at the Last Boundary.
	///
	/// For the first track this equals the excluded leading radius, which
	/// is how the exclusion rides along through every derived window.
	last_tr: u32,

	/// # Trail Cursor: Track.
	track2: usize,

	/// # Trail Cursor: Position in Track.
	ti2: u32,
}

impl DiscChecker {
	#[must_use]
	/// # New.
	pub fn new(layout: DiscLayout) -> Self {
		let tracks = layout.tracks();
		let per = OFFSETS_PER_TRACK as usize;
		Self {
			arcf: vec![0_u32; tracks * per],
			arcf450: vec![0_u32; tracks * per],
			sum: vec![0_u32; tracks],
			crc2: vec![0_u32; tracks],
			frame: FrameCrc::new(),
			di: 0,
			track: 0,
			ti: CHECK_RADIUS,
			tr: 0,
			last_tr: 0,
			track2: 0,
			ti2: 0,
			layout,
		}
	}

	/// # Feed One Sample.
	///
	/// Advance the engine by one packed sample value, returning the track
	/// the lead cursor moved into if it crossed a boundary on this step.
	///
	/// Values pushed after the schedule is exhausted are ignored.
	pub fn push(&mut self, value: u32) -> Option<usize> {
		if self.done() { return None; }
		self.update_arcf(value);
		self.update_trailing(value);
		self.advance()
	}

	#[must_use]
	/// # Exhausted?
	///
	/// `true` once every scheduled sample has been consumed.
	pub const fn done(&self) -> bool { self.di >= self.layout.total_samples() }
}

impl DiscChecker {
	/// # Lead-Cursor Update.
	///
	/// Seed, accumulate, and derive the sliding v1 windows for one sample.
	fn update_arcf(&mut self, value: u32) {
		let tracks = self.layout.tracks();
		let tr = self.tr as usize;

		// The directly-accumulated window and the seeds for the derived
		// ones, unless the lead has moved past the last real track.
		if self.track < tracks {
			// Save the sample for later: it is what window `tr` will leave
			// behind when it shifts.
			if self.tr < OFFSETS_PER_TRACK - 1 {
				self.arcf[table_idx(self.track, tr + 1)] = value;
			}

			self.sum[self.track] = self.sum[self.track].wrapping_add(value);
			let idx = table_idx(self.track, 0);
			self.arcf[idx] = self.arcf[idx].wrapping_add(
				value.wrapping_mul(self.ti.wrapping_add(1))
			);
		}

		// Each sample past a boundary completes one more shifted window of
		// the track before it.
		if 0 < self.track && self.track <= tracks && self.tr < OFFSETS_PER_TRACK - 1 {
			let prev = self.track - 1;
			let length = self.layout.length(prev);
			let first = self.arcf[table_idx(prev, tr + 1)];

			self.arcf[table_idx(prev, tr + 1)] = self.arcf[table_idx(prev, tr)]
				.wrapping_sub(length.wrapping_sub(self.last_tr).wrapping_mul(first))
				.wrapping_sub(self.sum[prev])
				.wrapping_add(length.wrapping_mul(value));

			self.sum[prev] = self.sum[prev].wrapping_add(value).wrapping_sub(first);
		}
	}

	#[expect(
		clippy::cast_possible_truncation,
		reason = "The truncation is the fold.",
	)]
	/// # Trail-Cursor Update.
	///
	/// The v2 accumulator and the frame-450 snapshots, which both see the
	/// stream in offset-zero alignment, a radius behind the lead.
	fn update_trailing(&mut self, value: u32) {
		if self.di < u64::from(CHECK_RADIUS) || self.track2 >= self.layout.tracks() {
			return;
		}

		// v2 weights in sixty-four bits, then folds both halves back down.
		let wide = u64::from(value) * (u64::from(self.ti2) + 1);
		let slot = &mut self.crc2[self.track2];
		*slot = slot
			.wrapping_add(wide as u32)
			.wrapping_add((wide >> 32) as u32);

		// Feed the sector ring while any frame-450 window is still open,
		// snapshotting each completed one.
		if self.ti2 < CHK450_LEAD + OFFSETS_PER_TRACK {
			self.frame.push(self.ti2, value);
			if CHK450_LEAD <= self.ti2 {
				let slot = (self.ti2 - CHK450_LEAD) as usize;
				self.arcf450[table_idx(self.track2, slot)] = self.frame.crc();
			}
		}
	}

	/// # Advance the Cursors.
	///
	/// Step both cursors and handle their (independent) track boundaries,
	/// returning the lead cursor's new track if it crossed one.
	fn advance(&mut self) -> Option<usize> {
		self.di += 1;
		self.ti = self.ti.wrapping_add(1);
		self.tr = self.tr.wrapping_add(1);
		self.ti2 = self.ti2.wrapping_add(1);

		let mut crossed = None;
		if self.ti == self.layout.length(self.track) {
			self.last_tr = self.tr;
			self.ti = 0;
			self.tr = 0;
			self.track += 1;
			crossed = Some(self.track);
		}
		if self.ti2 == self.layout.length(self.track2) {
			self.ti2 = 0;
			self.frame.reset();
			self.track2 += 1;
		}
		crossed
	}
}

impl DiscChecker {
	#[must_use]
	/// # Disc Layout.
	pub const fn layout(&self) -> &DiscLayout { &self.layout }

	#[must_use]
	/// # Sliding v1 Checksum.
	///
	/// The v1 checksum of `track` at offset slot `slot`, i.e. signed offset
	/// `slot - CHECK_RADIUS` (slot `CHECK_RADIUS` being offset zero).
	///
	/// ## Panics
	///
	/// Panics if the track or slot is out of range.
	pub fn arcf(&self, track: usize, slot: usize) -> u32 {
		self.arcf[table_idx(track, slot)]
	}

	#[must_use]
	/// # Frame-450 Checksum.
	///
	/// Same addressing as [`DiscChecker::arcf`].
	///
	/// ## Panics
	///
	/// Panics if the track or slot is out of range.
	pub fn arcf450(&self, track: usize, slot: usize) -> u32 {
		self.arcf450[table_idx(track, slot)]
	}

	#[must_use]
	/// # v2 Checksum (Offset Zero).
	///
	/// ## Panics
	///
	/// Panics if the track is out of range.
	pub fn crc2(&self, track: usize) -> u32 { self.crc2[track] }
}
