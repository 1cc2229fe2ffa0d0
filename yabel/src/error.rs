use thiserror::Error;

/*
 * enum IoError - Rejected port access
 *
 * Raised before any bus transaction is issued.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IoError {
	#[error("invalid port access width {0}, expected 1, 2 or 4")]
	InvalidWidth(usize),
}

/*
 * enum ConfigError - Bad scratch memory configuration
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
	#[error("virtual memory location is empty")]
	Empty,
	#[error("virtual memory location is not a number")]
	InvalidDigit,
	#[error("virtual memory location does not fit in an address")]
	Overflow,
	#[error("virtual memory window at {0:#x} is null or wraps the address space")]
	OutOfRange(usize),
}
