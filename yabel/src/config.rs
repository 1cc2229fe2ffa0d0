/*
 * Build configuration
 *
 * The scratch window base comes from YABEL_VIRTMEM_LOCATION at build time,
 * given in decimal or 0x-prefixed hex. Unset means 16 MiB.
 */

use crate::error::ConfigError;
use core::num::IntErrorKind;

pub const DEFAULT_VMEM_LOCATION: usize = 16 * 1024 * 1024;

const VIRTMEM_LOCATION: Option<&str> = option_env!("YABEL_VIRTMEM_LOCATION");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VirtMemConfig {
	pub location: Option<usize>,
}

impl VirtMemConfig {
	pub const fn new(location: Option<usize>) -> Self {
		VirtMemConfig { location }
	}

	//Configuration baked into this build
	pub fn from_build() -> Result<Self, ConfigError> {
		Self::from_option(VIRTMEM_LOCATION)
	}

	pub fn from_option(value: Option<&str>) -> Result<Self, ConfigError> {
		match value {
			Some(text) => Ok(VirtMemConfig::new(Some(parse_location(text)?))),
			None => Ok(VirtMemConfig::default()),
		}
	}

	pub const fn base(&self) -> usize {
		match self.location {
			Some(addr) => addr,
			None => DEFAULT_VMEM_LOCATION,
		}
	}
}

pub fn parse_location(text: &str) -> Result<usize, ConfigError> {
	let text = text.trim();
	let (digits, radix) = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
		Some(hex) => (hex, 16),
		None => (text, 10),
	};

	usize::from_str_radix(digits, radix).map_err(|err| match err.kind() {
		IntErrorKind::Empty => ConfigError::Empty,
		IntErrorKind::PosOverflow => ConfigError::Overflow,
		_ => ConfigError::InvalidDigit,
	})
}
