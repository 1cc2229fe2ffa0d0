use crate::io::PortIo;

//COM1 serial port base address
pub const COM1: u16 = 0x3F8;

//Serial port register offsets
const DATA_REG: u16 = 0;        //Data register
const INT_EN_REG: u16 = 1;      //Interrupt enable register
const FIFO_REG: u16 = 2;        //FIFO control register
const LINE_CTRL_REG: u16 = 3;   //Line control register
const MODEM_CTRL_REG: u16 = 4;  //Modem Control register
const LINE_STATUS_REG: u16 = 5; //Line status register

//Transmit holding register empty
const LSR_THRE: u8 = 0x20;

pub struct SerialPort<P: PortIo> {
	io: P,
	base: u16,
}

impl<P: PortIo> SerialPort<P> {
	//Program a 16550 at @base with 115200 baud, 8N1
	pub fn new(io: P, base: u16) -> Self {
		let mut port = SerialPort { io, base };
		port.init();
		port
	}

	fn init(&mut self) {
		let base = self.base;
		self.io.out8(base + INT_EN_REG, 0x00);    //Disable interrupts
		self.io.out8(base + LINE_CTRL_REG, 0x80); //Enable DLAB
		self.io.out8(base + DATA_REG, 0x01);      //Low byte
		self.io.out8(base + INT_EN_REG, 0x00);    //High Byte
		self.io.out8(base + LINE_CTRL_REG, 0x03); //8N1
		self.io.out8(base + FIFO_REG, 0xC7);      //enable fifo;clear;14 byte threshold
		self.io.out8(base + MODEM_CTRL_REG, 0x0B); //IRQ enabled
	}

	//Check if transmit buffer is empty
	fn is_transmit_empty(&mut self) -> bool {
		self.io.in8(self.base + LINE_STATUS_REG) & LSR_THRE != 0
	}

	//Write a single byte to serial port
	pub fn write_byte(&mut self, byte: u8) {
		while !self.is_transmit_empty() {
			core::hint::spin_loop();
		}
		self.io.out8(self.base + DATA_REG, byte);
	}

	pub fn write_str(&mut self, s: &str) {
		for byte in s.bytes() {
			self.write_byte(byte);
		}
	}

	pub fn into_inner(self) -> P {
		self.io
	}
}

#[cfg(target_arch = "x86_64")]
mod console {
	use super::{SerialPort, COM1};
	use crate::io::X86PortIo;
	use spin::{Mutex, Once};

	static SERIAL_PORT: Once<Mutex<SerialPort<X86PortIo>>> = Once::new();

	pub fn init_serial() {
		//SAFETY: firmware runs with IOPL 0 and owns COM1
		SERIAL_PORT.call_once(|| Mutex::new(SerialPort::new(unsafe { X86PortIo::new() }, COM1)));
	}

	pub fn serial_print(s: &str) {
		if let Some(serial) = SERIAL_PORT.get() {
			serial.lock().write_str(s);
		}
	}
}

#[cfg(not(target_arch = "x86_64"))]
mod console {
	pub fn init_serial() {}

	pub fn serial_print(_s: &str) {}
}

pub use console::{init_serial, serial_print};

//Serial print macro
#[macro_export]
macro_rules! serial_print {
	($($arg:tt)*) => {$crate::serial::_serial_print(format_args!($($arg)*))
	};
}

//Serial println macro
#[macro_export]
macro_rules! serial_println {
	() => ($crate::serial_print!("\n"));
	($($arg:tt)*) => {$crate::serial_print!("{}\n", format_args!($($arg)*))
	};
}

//Internal function for serial printing with formatting
pub fn _serial_print(args: core::fmt::Arguments) {
	use core::fmt::Write;

	struct SerialWriter;

	impl Write for SerialWriter {
		fn write_str(&mut self, s: &str) -> core::fmt::Result {
			serial_print(s);
			Ok(())
		}
	}
	SerialWriter.write_fmt(args).ok();
}
