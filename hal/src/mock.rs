/*
 * Host-side stand-ins for the hardware traits
 *
 * RecordingPortIo is a fake I/O bus: every transaction is logged, reads
 * return the last value stored at that port (zero if never written) and
 * writes store into it. StepCounter is a CycleCounter advancing by a fixed
 * step on each read.
 */

use crate::io::PortIo;
use crate::time::CycleCounter;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
	In { port: u16, width: u8 },
	Out { port: u16, width: u8, value: u32 },
}

#[derive(Debug, Default)]
pub struct RecordingPortIo {
	registers: BTreeMap<u16, u32>,
	log: Vec<Transaction>,
}

impl RecordingPortIo {
	pub fn new() -> Self {
		Self::default()
	}

	//Preload a register without logging a transaction
	pub fn set_register(&mut self, port: u16, value: u32) {
		self.registers.insert(port, value);
	}

	pub fn register(&self, port: u16) -> u32 {
		self.registers.get(&port).copied().unwrap_or(0)
	}

	pub fn transactions(&self) -> &[Transaction] {
		&self.log
	}

	fn load(&mut self, port: u16, width: u8) -> u32 {
		self.log.push(Transaction::In { port, width });
		self.register(port)
	}

	fn store(&mut self, port: u16, width: u8, value: u32) {
		self.log.push(Transaction::Out { port, width, value });
		self.registers.insert(port, value);
	}
}

impl PortIo for RecordingPortIo {
	fn in8(&mut self, port: u16) -> u8 {
		self.load(port, 1) as u8
	}

	fn in16(&mut self, port: u16) -> u16 {
		self.load(port, 2) as u16
	}

	fn in32(&mut self, port: u16) -> u32 {
		self.load(port, 4)
	}

	fn out8(&mut self, port: u16, value: u8) {
		self.store(port, 1, value as u32)
	}

	fn out16(&mut self, port: u16, value: u16) {
		self.store(port, 2, value as u32)
	}

	fn out32(&mut self, port: u16, value: u32) {
		self.store(port, 4, value)
	}
}

#[derive(Debug)]
pub struct StepCounter {
	next: Cell<u64>,
	step: u64,
}

impl StepCounter {
	pub const fn new(start: u64, step: u64) -> Self {
		StepCounter { next: Cell::new(start), step }
	}
}

impl CycleCounter for StepCounter {
	fn now(&self) -> u64 {
		let value = self.next.get();
		self.next.set(value.wrapping_add(self.step));
		value
	}
}
