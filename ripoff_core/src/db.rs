/*!
# Rip Off: Candidate Checksums
*/



#[derive(Debug, Clone, Default)]
/// # Candidate Checksum Database.
///
/// The externally-supplied checksums each track is tested against: a fixed
/// number of `(v1, frame-450)` pairs per track, stored as one flat table.
pub struct ChecksumDb {
	/// # Pairs Per Track.
	per: usize,

	/// # Candidate Pairs.
	data: Box<[(u32, u32)]>,
}

impl ChecksumDb {
	#[must_use]
	/// # New.
	///
	/// `data` holds `per` pairs per track, track by track.
	pub fn new(per: usize, data: Vec<(u32, u32)>) -> Self {
		Self {
			per,
			data: data.into_boxed_slice(),
		}
	}

	#[must_use]
	/// # Pairs Per Track.
	pub const fn pairs_per_track(&self) -> usize { self.per }

	#[must_use]
	/// # A Track's Candidate Pairs.
	///
	/// Out-of-range tracks simply have no candidates.
	pub fn pairs(&self, track: usize) -> &[(u32, u32)] {
		track.checked_mul(self.per)
			.and_then(|start| start.checked_add(self.per).map(|end| start..end))
			.and_then(|rng| self.data.get(rng))
			.unwrap_or(&[])
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_pairs() {
		let db = ChecksumDb::new(2, vec![(1, 2), (3, 4), (5, 6), (7, 8)]);
		assert_eq!(db.pairs_per_track(), 2, "Wrong pair count.");
		assert_eq!(db.pairs(0), &[(1, 2), (3, 4)], "Wrong track 0 pairs.");
		assert_eq!(db.pairs(1), &[(5, 6), (7, 8)], "Wrong track 1 pairs.");
		assert!(db.pairs(2).is_empty(), "Track 2 shouldn't exist.");
	}

	#[test]
	fn t_empty() {
		let db = ChecksumDb::new(0, Vec::new());
		assert!(db.pairs(0).is_empty(), "No pairs were supplied.");
		assert!(db.pairs(99).is_empty(), "No pairs were supplied.");
	}
}
