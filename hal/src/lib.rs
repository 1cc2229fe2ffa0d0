/*
 * Hardware Abstraction Layer (HAL)
 *
 * Provides the low-level hardware access the BIOS emulator shim sits on:
 * - Port I/O (PortIo, one implementation per architecture)
 * - Cycle counter (CycleCounter, TSC on x86_64)
 * - Serial console used for logging
 */

#![cfg_attr(not(test), no_std)]

#[cfg(any(test, feature = "mock"))]
extern crate alloc;

pub mod io;
pub mod serial;
pub mod time;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use io::PortIo;
pub use serial::{init_serial, serial_print};
pub use time::CycleCounter;
