/*!
# Rip Off: Rolling Sector CRC
*/

use crate::SAMPLES_PER_SECTOR;



#[derive(Debug, Clone)]
/// # Rolling Sector CRC.
///
/// This maintains the v1 checksum of the most recent sector's worth of
/// samples — weights one through 588 — updated in constant time as each new
/// sample displaces the oldest.
///
/// Positions are supplied by the caller so the ring can share the trailing
/// cursor's within-track index; `reset` puts everything back to silence at
/// a track boundary.
pub(crate) struct FrameCrc {
	/// # Sample Ring.
	ring: [u32; SAMPLES_PER_SECTOR as usize],

	/// # Ring Sum.
	sum: u32,

	/// # Weighted CRC.
	crc: u32,
}

impl FrameCrc {
	/// # New.
	pub(crate) const fn new() -> Self {
		Self {
			ring: [0_u32; SAMPLES_PER_SECTOR as usize],
			sum: 0,
			crc: 0,
		}
	}

	/// # Current CRC.
	pub(crate) const fn crc(&self) -> u32 { self.crc }

	/// # Feed One Sample.
	///
	/// `ti` is the sample's within-track position; until a full sector has
	/// been fed the window is still filling and nothing is displaced.
	pub(crate) fn push(&mut self, ti: u32, value: u32) {
		let slot = (ti % SAMPLES_PER_SECTOR) as usize;
		let subtr =
			if ti < SAMPLES_PER_SECTOR {
				self.crc = self.crc.wrapping_add(value.wrapping_mul(ti + 1));
				0
			}
			else {
				self.crc = self.crc.wrapping_add(
					value.wrapping_mul(SAMPLES_PER_SECTOR).wrapping_sub(self.sum)
				);
				self.ring[slot]
			};
		self.ring[slot] = value;
		self.sum = self.sum.wrapping_add(value).wrapping_sub(subtr);
	}

	/// # Reset.
	pub(crate) fn reset(&mut self) {
		self.ring = [0_u32; SAMPLES_PER_SECTOR as usize];
		self.sum = 0;
		self.crc = 0;
	}
}



#[cfg(test)]
mod test {
	use super::*;

	/// # Reference CRC.
	///
	/// The weighted sum over a window, straight from the definition.
	fn naive(window: &[u32]) -> u32 {
		let mut crc = 0_u32;
		for (i, &v) in window.iter().enumerate() {
			crc = crc.wrapping_add(v.wrapping_mul(i as u32 + 1));
		}
		crc
	}

	#[test]
	fn t_rolling() {
		let sector = SAMPLES_PER_SECTOR as usize;
		let data: Vec<u32> = (0..sector * 4).map(|_| fastrand::u32(..)).collect();

		let mut frame = FrameCrc::new();
		for (ti, &v) in data.iter().enumerate() {
			frame.push(ti as u32, v);

			// While filling, the CRC covers the prefix; afterwards, the
			// trailing full sector.
			let want =
				if ti < sector { naive(&data[..=ti]) }
				else { naive(&data[ti + 1 - sector..=ti]) };
			assert_eq!(frame.crc(), want, "Rolling CRC diverged at {ti}.");
		}
	}

	#[test]
	fn t_reset() {
		let mut frame = FrameCrc::new();
		for ti in 0..1000 { frame.push(ti, fastrand::u32(1..)); }
		assert_ne!(frame.crc(), 0, "The CRC shouldn't (realistically) be zero.");

		frame.reset();
		assert_eq!(frame.crc(), 0, "Reset should clear the CRC.");
		assert_eq!(frame.sum, 0, "Reset should clear the sum.");
		assert!(frame.ring.iter().all(|&v| v == 0), "Reset should clear the ring.");
	}
}
