/*!
# Rip Off: Reporting
*/

use crate::{
	CHECK_RADIUS,
	ChecksumDb,
	DiscChecker,
	OFFSETS_PER_TRACK,
};
use std::io::{
	self,
	Write,
};



/// # Write the Results.
///
/// For each track, the offset-zero row is always emitted — v1, frame-450,
/// and v2, in that order — while every other offset is emitted once per
/// candidate pair it matches, on either the v1 or the frame-450 column.
/// Checksums print as uppercase zero-padded hex.
///
/// ## Errors
///
/// Bubbles up writer failures.
pub fn write_results<W: Write>(
	chk: &DiscChecker,
	db: &ChecksumDb,
	writer: &mut W,
) -> io::Result<()> {
	for track in 0..chk.layout().tracks() {
		for slot in 0..OFFSETS_PER_TRACK as usize {
			let offset = slot as i64 - i64::from(CHECK_RADIUS);
			let crc = chk.arcf(track, slot);
			let crc450 = chk.arcf450(track, slot);

			if offset == 0 {
				writeln!(
					writer,
					"{track:03},{offset}: {crc:08X} {crc450:08X} {:08X}",
					chk.crc2(track),
				)?;
			}
			else {
				for &(dbcrc, dbcrc450) in db.pairs(track) {
					if crc == dbcrc || crc450 == dbcrc450 {
						writeln!(writer, "{track:03},{offset}: {crc:08X} {crc450:08X}")?;
					}
				}
			}
		}
	}

	Ok(())
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::DiscLayout;

	/// # A Checker Full of Zeroes.
	///
	/// One eight-sector track of pure silence; every checksum is zero.
	fn silent_checker() -> DiscChecker {
		let layout = DiscLayout::new(&[8]).expect("Layout failed.");
		let total = layout.total_samples();
		let mut chk = DiscChecker::new(layout);
		for _ in 0..total { chk.push(0); }
		chk
	}

	/// # Report to a String.
	fn report(chk: &DiscChecker, db: &ChecksumDb) -> String {
		let mut out = Vec::new();
		write_results(chk, db, &mut out).expect("Report failed.");
		String::from_utf8(out).expect("Report wasn't UTF-8.")
	}

	#[test]
	fn t_no_candidates() {
		// Without candidates, only the offset-zero rows appear.
		let chk = silent_checker();
		let db = ChecksumDb::default();
		let out = report(&chk, &db);
		assert_eq!(
			out,
			"000,0: 00000000 00000000 00000000\n",
			"Only the offset-zero row should print.",
		);

		// Reporting reads, never writes; a second run is identical.
		assert_eq!(out, report(&chk, &db), "Reporting should be idempotent.");
	}

	#[test]
	fn t_matches() {
		// A zero candidate matches silence at every offset, via both
		// columns at once (one line per pair, not per column).
		let chk = silent_checker();
		let out = report(&chk, &ChecksumDb::new(1, vec![(0, 0)]));
		let lines: Vec<&str> = out.lines().collect();

		assert_eq!(
			lines.len(),
			OFFSETS_PER_TRACK as usize,
			"Every offset should produce one line.",
		);
		assert_eq!(lines[0], "000,-2939: 00000000 00000000", "Wrong first line.");
		assert_eq!(
			lines[CHECK_RADIUS as usize],
			"000,0: 00000000 00000000 00000000",
			"Wrong offset-zero line.",
		);
		assert_eq!(lines[lines.len() - 1], "000,2939: 00000000 00000000", "Wrong last line.");
	}

	#[test]
	fn t_duplicate_candidates() {
		// Duplicate pairs are deliberately not deduplicated.
		let chk = silent_checker();
		let out = report(&chk, &ChecksumDb::new(2, vec![(0, 0), (0, 0)]));
		assert_eq!(
			out.lines().count(),
			2 * (OFFSETS_PER_TRACK as usize - 1) + 1,
			"Each matching pair should get its own line.",
		);
	}

	#[test]
	fn t_miss() {
		// A candidate that matches neither column stays quiet.
		let chk = silent_checker();
		let out = report(&chk, &ChecksumDb::new(1, vec![(1, 1)]));
		assert_eq!(
			out,
			"000,0: 00000000 00000000 00000000\n",
			"A miss should leave only the offset-zero row.",
		);
	}
}
