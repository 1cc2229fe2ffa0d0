/*
 * C linkage for the emulator core
 *
 * The emulator calls these while running option ROM code. The address
 * argument is whatever the emulator decoded for the in/out operand.
 */

use crate::port;
use core::ffi::c_void;
use hal::io::X86PortIo;
use hal::time::Tsc;

#[inline(always)]
fn bus() -> X86PortIo {
	//SAFETY: the emulator only runs from firmware at IOPL 0
	unsafe { X86PortIo::new() }
}

#[unsafe(no_mangle)]
pub extern "C" fn read_io(addr: *mut c_void, sz: usize) -> u32 {
	port::read_io(&mut bus(), addr as usize, sz)
}

#[unsafe(no_mangle)]
pub extern "C" fn write_io(addr: *mut c_void, value: u32, sz: usize) -> i32 {
	port::write_io(&mut bus(), addr as usize, value, sz)
}

#[unsafe(no_mangle)]
pub extern "C" fn get_time() -> u64 {
	crate::time::get_time(&Tsc)
}
