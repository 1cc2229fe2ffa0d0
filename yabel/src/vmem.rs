/*
 * Scratch Memory Provider
 *
 * The fixed window the emulator stages option ROMs in and uses as the
 * real-mode address space. Carved out once at startup; there is no
 * allocate or free. Exclusive borrows of VirtMem are what keep two
 * emulation sessions from overlapping.
 */

use crate::config::VirtMemConfig;
use crate::error::ConfigError;
use core::ptr::NonNull;
use core::slice;

pub const VMEM_SIZE: usize = 1024 * 1024;

#[derive(Debug)]
pub struct VirtMem {
	base: NonNull<u8>,
}

impl VirtMem {
	/*
	 * new - Claim the window at @base
	 *
	 * Safety: [base, base + VMEM_SIZE) must be mapped, writable, reserved
	 * for this object alone and stay so for the rest of the program.
	 */
	pub unsafe fn new(base: usize) -> Result<Self, ConfigError> {
		if base.checked_add(VMEM_SIZE).is_none() {
			return Err(ConfigError::OutOfRange(base));
		}
		let base = NonNull::new(base as *mut u8).ok_or(ConfigError::OutOfRange(base))?;
		Ok(VirtMem { base })
	}

	/*
	 * from_config - Claim the configured (or default) window
	 *
	 * Safety: as for new().
	 */
	pub unsafe fn from_config(config: &VirtMemConfig) -> Result<Self, ConfigError> {
		unsafe { VirtMem::new(config.base()) }
	}

	pub fn base(&self) -> usize {
		self.base.as_ptr() as usize
	}

	pub const fn len(&self) -> usize {
		VMEM_SIZE
	}

	pub fn as_mut_ptr(&mut self) -> *mut u8 {
		self.base.as_ptr()
	}

	pub fn as_slice(&self) -> &[u8] {
		//SAFETY: the window is reserved for us by the contract of new()
		unsafe { slice::from_raw_parts(self.base.as_ptr(), VMEM_SIZE) }
	}

	pub fn as_mut_slice(&mut self) -> &mut [u8] {
		//SAFETY: as above, and &mut self rules out other views
		unsafe { slice::from_raw_parts_mut(self.base.as_ptr(), VMEM_SIZE) }
	}
}

#[cfg(test)]
pub(crate) fn host_vmem() -> VirtMem {
	let window: &'static mut [u8] = vec![0u8; VMEM_SIZE].leak();
	unsafe { VirtMem::new(window.as_mut_ptr() as usize) }.unwrap()
}
