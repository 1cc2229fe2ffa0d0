/*
 * Port I/O Accessor
 *
 * What the emulator uses to reach real device registers. Addresses arrive
 * as pointer-sized values; only the low 16 bits name the port.
 *
 * The runtime-width entry points keep two different failure behaviours:
 * read_io() answers an invalid width with 0, write_io() answers it with
 * WRITE_IO_EINVAL. Neither touches the bus in that case.
 */

use crate::error::IoError;
use crate::width::AccessWidth;
use hal::io::PortIo;

pub const WRITE_IO_OK: i32 = 0;
pub const WRITE_IO_EINVAL: i32 = -1;

/*
 * port_of - Reduce an address-like value to a port number
 *
 * Callers must make sure the low 16 bits identify the port they mean.
 */
#[inline(always)]
pub const fn port_of(addr: usize) -> u16 {
	(addr & 0xFFFF) as u16
}

/*
 * read - Single port read of @width, zero-extended
 */
#[inline]
pub fn read<P: PortIo + ?Sized>(io: &mut P, port: u16, width: AccessWidth) -> u32 {
	let value = match width {
		AccessWidth::Byte => io.in8(port) as u32,
		AccessWidth::Word => io.in16(port) as u32,
		AccessWidth::DWord => io.in32(port),
	};
	trace::input(port, width, value);
	value
}

/*
 * write - Single port write of @width
 *
 * @value is truncated to the width. Writes are not idempotent in general.
 */
#[inline]
pub fn write<P: PortIo + ?Sized>(io: &mut P, port: u16, value: u32, width: AccessWidth) {
	trace::output(port, width, value);
	match width {
		AccessWidth::Byte => io.out8(port, value as u8),
		AccessWidth::Word => io.out16(port, value as u16),
		AccessWidth::DWord => io.out32(port, value),
	}
}

/*
 * read_io - Port read with a runtime width
 * @addr: address-like value, low 16 bits are the port
 * @size: 1, 2 or 4
 *
 * Returns 0 without a transaction for any other size. A zero result alone
 * does not tell a zero register from a rejected width.
 */
pub fn read_io<P: PortIo + ?Sized>(io: &mut P, addr: usize, size: usize) -> u32 {
	match AccessWidth::from_size(size) {
		Ok(width) => read(io, port_of(addr), width),
		Err(_) => 0,
	}
}

/*
 * try_write_io - Port write with a runtime width
 */
pub fn try_write_io<P: PortIo + ?Sized>(
	io: &mut P,
	addr: usize,
	value: u32,
	size: usize,
) -> Result<(), IoError> {
	let width = AccessWidth::from_size(size)?;
	write(io, port_of(addr), value, width);
	Ok(())
}

/*
 * write_io - Status-returning form of try_write_io()
 *
 * Returns WRITE_IO_OK, or WRITE_IO_EINVAL for a size other than 1, 2, 4.
 */
pub fn write_io<P: PortIo + ?Sized>(io: &mut P, addr: usize, value: u32, size: usize) -> i32 {
	match try_write_io(io, addr, value, size) {
		Ok(()) => WRITE_IO_OK,
		Err(IoError::InvalidWidth(_)) => WRITE_IO_EINVAL,
	}
}

#[cfg(feature = "io-trace")]
mod trace {
	use crate::width::AccessWidth;
	use hal::serial_println;

	pub fn input(port: u16, width: AccessWidth, value: u32) {
		serial_println!("[yabel] in{}  {:#06x} -> {:#x}", width.bytes() * 8, port, value);
	}

	pub fn output(port: u16, width: AccessWidth, value: u32) {
		serial_println!(
			"[yabel] out{} {:#06x} <- {:#x}",
			width.bytes() * 8,
			port,
			value & width.mask()
		);
	}
}

#[cfg(not(feature = "io-trace"))]
mod trace {
	use crate::width::AccessWidth;

	#[inline(always)]
	pub fn input(_port: u16, _width: AccessWidth, _value: u32) {}

	#[inline(always)]
	pub fn output(_port: u16, _width: AccessWidth, _value: u32) {}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hal::mock::{RecordingPortIo, Transaction};

	#[test]
	fn port_ignores_high_address_bits() {
		for addr in [0x3F8usize, 0x1_03F8, 0xDEAD_03F8, usize::MAX] {
			assert_eq!(port_of(addr), port_of(addr & 0xFFFF));
		}
		assert_eq!(port_of(0xABCD_0080), 0x0080);
	}

	#[test]
	fn read_and_write_use_the_truncated_port() {
		let mut io = RecordingPortIo::new();
		io.set_register(0x60, 0x5A);

		assert_eq!(read_io(&mut io, 0x7777_0060, 1), 0x5A);
		assert_eq!(write_io(&mut io, 0x1234_0064, 0xFE, 1), WRITE_IO_OK);
		assert_eq!(
			io.transactions(),
			&[
				Transaction::In { port: 0x60, width: 1 },
				Transaction::Out { port: 0x64, width: 1, value: 0xFE },
			]
		);
	}

	#[test]
	fn invalid_width_reads_zero_without_bus_access() {
		let mut io = RecordingPortIo::new();
		io.set_register(0x3F8, 0xFFFF_FFFF);

		for size in [0, 3, 5, 8] {
			assert_eq!(read_io(&mut io, 0x3F8, size), 0);
		}
		assert!(io.transactions().is_empty());
	}

	#[test]
	fn invalid_width_write_fails_without_bus_access() {
		let mut io = RecordingPortIo::new();

		for size in [0, 3, 5, 8] {
			assert_eq!(write_io(&mut io, 0x3F8, 0x41, size), WRITE_IO_EINVAL);
			assert_eq!(
				try_write_io(&mut io, 0x3F8, 0x41, size),
				Err(IoError::InvalidWidth(size))
			);
		}
		assert!(io.transactions().is_empty());
	}

	#[test]
	fn each_valid_width_is_one_transaction() {
		for (size, expected) in [(1usize, 0x78u32), (2, 0x5678), (4, 0x1234_5678)] {
			let mut io = RecordingPortIo::new();
			assert_eq!(write_io(&mut io, 0xCFC, 0x1234_5678, size), WRITE_IO_OK);
			assert_eq!(
				io.transactions(),
				&[Transaction::Out { port: 0xCFC, width: size as u8, value: expected }]
			);
		}
	}

	#[test]
	fn reads_are_zero_extended() {
		let mut io = RecordingPortIo::new();
		io.set_register(0xCFC, 0xAABB_CCDD);

		assert_eq!(read(&mut io, 0xCFC, AccessWidth::Byte), 0xDD);
		assert_eq!(read(&mut io, 0xCFC, AccessWidth::Word), 0xCCDD);
		assert_eq!(read(&mut io, 0xCFC, AccessWidth::DWord), 0xAABB_CCDD);
		assert_eq!(io.transactions().len(), 3);
	}

	#[test]
	fn com1_byte_read() {
		let mut io = RecordingPortIo::new();
		io.set_register(0x3F8, 0x41);

		assert_eq!(read_io(&mut io, 0x3F8, 1), 0x41);
		assert_eq!(io.transactions(), &[Transaction::In { port: 0x3F8, width: 1 }]);
	}

	#[test]
	fn com1_byte_write() {
		let mut io = RecordingPortIo::new();

		assert_eq!(write_io(&mut io, 0x3F8, 0x41, 1), WRITE_IO_OK);
		assert_eq!(
			io.transactions(),
			&[Transaction::Out { port: 0x3F8, width: 1, value: 0x41 }]
		);
		assert_eq!(io.register(0x3F8), 0x41);
	}
}
