// Layout of the ROM as seen by a 6502 mapped at 0x8000..=0xffff.

pub const FILLER: u8 = 0xea; // NOP

pub const START_ADDR: u16 = 0x8000; // Where the CPU starts executing.
pub const RESET_VECTOR: usize = 0x7ffc; // Image offset, i.e. CPU address 0xfffc.
pub const RESET_VECTOR_END: usize = RESET_VECTOR + 2; // Exclusive

// Smallest image that can hold the reset vector.
pub const MIN_ROM_SIZE: usize = RESET_VECTOR_END;
