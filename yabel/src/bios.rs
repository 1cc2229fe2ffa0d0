/*
 * Emulation Entry Trampoline
 *
 * Hands the scratch window and a device handle to the emulator core and
 * returns its status untouched.
 */

use crate::vmem::VirtMem;
use core::ffi::c_void;
use hal::serial_println;

/*
 * trait BiosEmulator - External x86 real-mode emulator entry point
 * @D: device handle type, passed through without inspection
 *
 * @biosmem is the whole scratch window, lent for this call only.
 */
pub trait BiosEmulator<D> {
	fn biosemu(&mut self, biosmem: &mut [u8], dev: D) -> u32;
}

impl<D, F> BiosEmulator<D> for F
where
	F: FnMut(&mut [u8], D) -> u32,
{
	fn biosemu(&mut self, biosmem: &mut [u8], dev: D) -> u32 {
		self(biosmem, dev)
	}
}

pub type BiosemuFn =
	unsafe extern "C" fn(biosmem: *mut u8, biosmem_size: u32, dev: *mut c_void) -> u32;

/*
 * struct ExternEmulator - Emulator core linked in with C linkage
 */
#[derive(Debug, Clone, Copy)]
pub struct ExternEmulator {
	entry: BiosemuFn,
}

impl ExternEmulator {
	/*
	 * new - Wrap a C entry point
	 *
	 * Safety: @entry must honour the biosemu contract: touch only
	 * [biosmem, biosmem + biosmem_size) and treat dev as its own type.
	 */
	pub const unsafe fn new(entry: BiosemuFn) -> Self {
		ExternEmulator { entry }
	}
}

impl BiosEmulator<*mut c_void> for ExternEmulator {
	fn biosemu(&mut self, biosmem: &mut [u8], dev: *mut c_void) -> u32 {
		let size = biosmem.len() as u32;
		//SAFETY: upheld by the caller of ExternEmulator::new()
		unsafe { (self.entry)(biosmem.as_mut_ptr(), size, dev) }
	}
}

/*
 * run_bios - Run one emulation session
 * @vmem: scratch window, held exclusively for the session
 * @emulator: emulator core, called exactly once
 * @dev: device whose option ROM is being run
 * @load_address: accepted but currently unused; the image is always staged
 *                in @vmem
 *
 * Returns the emulator's status as-is.
 */
pub fn run_bios<D, E>(vmem: &mut VirtMem, emulator: &mut E, dev: D, load_address: usize) -> u32
where
	E: BiosEmulator<D> + ?Sized,
{
	serial_println!(
		"[yabel] biosemu: vmem {:#x}+{:#x}, load address {:#x} unused",
		vmem.base(),
		vmem.len(),
		load_address
	);

	let status = emulator.biosemu(vmem.as_mut_slice(), dev);

	serial_println!("[yabel] biosemu returned {:#x}", status);
	status
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::vmem::{host_vmem, VMEM_SIZE};
	use core::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

	struct Device {
		vendor: u16,
	}

	#[derive(Default)]
	struct CountingEmulator {
		calls: usize,
		lengths: Vec<usize>,
		bases: Vec<usize>,
		status: u32,
	}

	impl<'a> BiosEmulator<&'a mut Device> for CountingEmulator {
		fn biosemu(&mut self, biosmem: &mut [u8], dev: &'a mut Device) -> u32 {
			self.calls += 1;
			self.lengths.push(biosmem.len());
			self.bases.push(biosmem.as_ptr() as usize);
			biosmem[0] = 0x55;
			dev.vendor = 0x8086;
			self.status
		}
	}

	#[test]
	fn calls_emulator_once_with_whole_window() {
		let mut vmem = host_vmem();
		let mut emulator = CountingEmulator { status: 0x1234, ..Default::default() };
		let mut device = Device { vendor: 0 };

		let status = run_bios(&mut vmem, &mut emulator, &mut device, 0xC0000);

		assert_eq!(status, 0x1234);
		assert_eq!(emulator.calls, 1);
		assert_eq!(emulator.lengths, [VMEM_SIZE]);
		assert_eq!(emulator.bases, [vmem.base()]);
		assert_eq!(vmem.as_slice()[0], 0x55);
		assert_eq!(device.vendor, 0x8086);
	}

	#[test]
	fn error_status_is_propagated() {
		let mut vmem = host_vmem();
		for status in [1, 0xFFFF_FFFF, 0x8000_0000] {
			let mut emulator = |_: &mut [u8], _: ()| status;
			assert_eq!(run_bios(&mut vmem, &mut emulator, (), 0), status);
		}
	}

	#[test]
	fn load_address_does_not_move_the_window() {
		let mut vmem = host_vmem();
		let mut emulator = CountingEmulator::default();

		for load in [0, 0xC0000, 0xDEAD_0000, usize::MAX] {
			let mut device = Device { vendor: 0 };
			run_bios(&mut vmem, &mut emulator, &mut device, load);
		}
		assert_eq!(emulator.calls, 4);
		assert!(emulator.bases.iter().all(|&b| b == vmem.base()));
	}

	static EXTERN_SIZE: AtomicU32 = AtomicU32::new(0);
	static EXTERN_DEV: AtomicUsize = AtomicUsize::new(0);

	unsafe extern "C" fn fake_biosemu(biosmem: *mut u8, biosmem_size: u32, dev: *mut c_void) -> u32 {
		EXTERN_SIZE.store(biosmem_size, Ordering::SeqCst);
		EXTERN_DEV.store(dev as usize, Ordering::SeqCst);
		unsafe { *biosmem = 0xEB };
		0x0BAD
	}

	#[test]
	fn extern_entry_point_sees_pointer_and_length() {
		let mut vmem = host_vmem();
		let mut emulator = unsafe { ExternEmulator::new(fake_biosemu) };
		let mut token = 0u64;
		let dev = (&mut token as *mut u64).cast::<c_void>();

		assert_eq!(run_bios(&mut vmem, &mut emulator, dev, 0), 0x0BAD);
		assert_eq!(EXTERN_SIZE.load(Ordering::SeqCst), 1_048_576);
		assert_eq!(EXTERN_DEV.load(Ordering::SeqCst), dev as usize);
		assert_eq!(vmem.as_slice()[0], 0xEB);
	}
}
