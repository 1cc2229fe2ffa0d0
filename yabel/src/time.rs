/*
 * Time Source
 *
 * The emulator throttles its PIT and BIOS delay loops against the raw cycle
 * counter. Values are only meaningful relative to each other.
 */

use hal::time::CycleCounter;

#[inline(always)]
pub fn get_time<C: CycleCounter + ?Sized>(clock: &C) -> u64 {
	clock.now()
}

/*
 * elapsed - Cycles from @start to @end
 *
 * Wraps instead of saturating so a counter rollover between the two reads
 * still yields the distance travelled.
 */
#[inline(always)]
pub const fn elapsed(start: u64, end: u64) -> u64 {
	end.wrapping_sub(start)
}
