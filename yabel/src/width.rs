use crate::error::IoError;

/*
 * enum AccessWidth - Size of one port transaction
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AccessWidth {
	Byte = 1,
	Word = 2,
	DWord = 4,
}

impl AccessWidth {
	/*
	 * from_size - Validate a width supplied at runtime
	 * @size: width in bytes
	 */
	pub const fn from_size(size: usize) -> Result<Self, IoError> {
		match size {
			1 => Ok(AccessWidth::Byte),
			2 => Ok(AccessWidth::Word),
			4 => Ok(AccessWidth::DWord),
			_ => Err(IoError::InvalidWidth(size)),
		}
	}

	pub const fn bytes(self) -> usize {
		self as usize
	}

	//Bits of a u32 carried by one access
	pub const fn mask(self) -> u32 {
		match self {
			AccessWidth::Byte => 0xFF,
			AccessWidth::Word => 0xFFFF,
			AccessWidth::DWord => 0xFFFF_FFFF,
		}
	}
}

impl TryFrom<usize> for AccessWidth {
	type Error = IoError;

	fn try_from(size: usize) -> Result<Self, Self::Error> {
		AccessWidth::from_size(size)
	}
}
