/*
 * YABEL hardware access shim
 *
 * What a legacy real-mode BIOS emulator needs from the firmware around it:
 * - Port I/O at widths 1, 2 and 4 (port)
 * - A cycle counter (time)
 * - A reserved 1 MiB scratch window (vmem, config)
 * - The entry trampoline into the emulator core (bios)
 */

#![cfg_attr(not(test), no_std)]

pub mod bios;
pub mod config;
pub mod error;
pub mod port;
pub mod time;
pub mod vmem;
pub mod width;

#[cfg(all(feature = "ffi", target_arch = "x86_64"))]
pub mod ffi;

pub use bios::{run_bios, BiosEmulator, ExternEmulator};
pub use config::{VirtMemConfig, DEFAULT_VMEM_LOCATION};
pub use error::{ConfigError, IoError};
pub use port::{read_io, write_io, WRITE_IO_EINVAL, WRITE_IO_OK};
pub use time::get_time;
pub use vmem::{VirtMem, VMEM_SIZE};
pub use width::AccessWidth;
