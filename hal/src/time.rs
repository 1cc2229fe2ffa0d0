/*
 * Cycle Counter
 *
 * Free-running per-clock counter used for relative timing. Units are
 * platform cycles, not wall-clock time.
 */

/*
 * trait CycleCounter - Monotonic cycle source
 */
pub trait CycleCounter {
	fn now(&self) -> u64;
}

/*
 * compose - Join the two 32-bit counter halves
 * @high: upper half (EDX after rdtsc)
 * @low: lower half (EAX after rdtsc)
 */
#[inline(always)]
pub const fn compose(high: u32, low: u32) -> u64 {
	((high as u64) << 32) | low as u64
}

#[cfg(target_arch = "x86_64")]
pub use self::x86::Tsc;

#[cfg(target_arch = "x86_64")]
mod x86 {
	use super::{compose, CycleCounter};
	use core::arch::asm;

	/*
	 * struct Tsc - Time-stamp counter
	 */
	#[derive(Debug, Clone, Copy, Default)]
	pub struct Tsc;

	impl Tsc {
		/*
		 * read - Execute RDTSC
		 *
		 * Not serializing; the value is observed after the instruction
		 * issues, nothing more.
		 */
		#[inline(always)]
		pub fn read() -> u64 {
			let low: u32;
			let high: u32;

			unsafe {
				asm!(
					"rdtsc",
					out("eax") low,
					out("edx") high,
					options(nomem, nostack, preserves_flags),
				);
			}

			compose(high, low)
		}
	}

	impl CycleCounter for Tsc {
		#[inline(always)]
		fn now(&self) -> u64 {
			Tsc::read()
		}
	}
}
