/*
 * Port I/O Operations
 *
 * Port-mapped I/O behind the PortIo trait. Each access width has its own
 * transaction form; devices with latched or strobe registers behave
 * differently under a 16/32-bit access than under split byte accesses.
 */

/*
 * trait PortIo - Width-specific port transactions
 *
 * One call is exactly one bus transaction on @port.
 */
pub trait PortIo {
	fn in8(&mut self, port: u16) -> u8;
	fn in16(&mut self, port: u16) -> u16;
	fn in32(&mut self, port: u16) -> u32;
	fn out8(&mut self, port: u16, value: u8);
	fn out16(&mut self, port: u16, value: u16);
	fn out32(&mut self, port: u16, value: u32);
}

#[cfg(target_arch = "x86_64")]
pub use self::x86::X86PortIo;

#[cfg(target_arch = "x86_64")]
mod x86 {
	use super::PortIo;
	use x86_64::instructions::port::Port;

	/*
	 * struct X86PortIo - Native in/out instructions
	 *
	 * Zero-sized; holding one is the capability to touch the I/O bus.
	 */
	#[derive(Debug)]
	pub struct X86PortIo {
		_priv: (),
	}

	impl X86PortIo {
		/*
		 * new - Acquire raw port access
		 *
		 * Safety: the caller must run at an I/O privilege level that allows
		 * in/out, and accepts that writes to arbitrary ports can reprogram
		 * hardware (DMA engines included) behind the compiler's back.
		 */
		pub const unsafe fn new() -> Self {
			X86PortIo { _priv: () }
		}
	}

	impl PortIo for X86PortIo {
		#[inline]
		fn in8(&mut self, port: u16) -> u8 {
			let mut port: Port<u8> = Port::new(port);
			unsafe { port.read() }
		}

		#[inline]
		fn in16(&mut self, port: u16) -> u16 {
			let mut port: Port<u16> = Port::new(port);
			unsafe { port.read() }
		}

		#[inline]
		fn in32(&mut self, port: u16) -> u32 {
			let mut port: Port<u32> = Port::new(port);
			unsafe { port.read() }
		}

		#[inline]
		fn out8(&mut self, port: u16, value: u8) {
			let mut port: Port<u8> = Port::new(port);
			unsafe { port.write(value) }
		}

		#[inline]
		fn out16(&mut self, port: u16, value: u16) {
			let mut port: Port<u16> = Port::new(port);
			unsafe { port.write(value) }
		}

		#[inline]
		fn out32(&mut self, port: u16, value: u32) {
			let mut port: Port<u32> = Port::new(port);
			unsafe { port.write(value) }
		}
	}
}
