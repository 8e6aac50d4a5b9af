use std::io::{self, Write};

use common::constants::{FILLER, MIN_ROM_SIZE, RESET_VECTOR, RESET_VECTOR_END, START_ADDR};
use common::mem::{GetU16, PutU16};

use crate::hexdump::Hexdump;

use log::{debug, warn};
use thiserror::Error;

#[derive(Debug)]
pub struct Rom {
    buf: Vec<u8>,
    code_len: usize,
}

impl Rom {
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    // Always false for a built ROM.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    // Bytes of code placed at the start, including any the vector overwrote.
    pub fn code_len(&self) -> usize {
        self.code_len
    }

    pub fn reset_vector(&self) -> Option<u16> {
        self.buf.get_u16(RESET_VECTOR)
    }

    pub fn hexdump(&self) -> Hexdump<'_> {
        Hexdump(&self.buf)
    }

    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        writer.write_all(&self.buf)?;
        writer.flush()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("ROM size {size:#x} is smaller than the {code_len:#x} bytes of code")]
    Size { size: usize, code_len: usize },

    #[error(
        "ROM size {size:#x} can't hold the reset vector at {offset:#x} (need at least {:#x})",
        MIN_ROM_SIZE
    )]
    Bounds { size: usize, offset: usize },

    #[error("can't allocate a ROM of {size:#x} bytes")]
    Alloc { size: usize },
}

/// Lays `code` out at the start of a `size` byte image padded with NOPs, and
/// points the reset vector at it.
pub fn build(code: &[u8], size: usize) -> Result<Rom, BuildError> {
    if size < code.len() {
        return Err(BuildError::Size {
            size,
            code_len: code.len(),
        });
    }
    if size < MIN_ROM_SIZE {
        return Err(BuildError::Bounds {
            size,
            offset: RESET_VECTOR,
        });
    }
    debug!("building {size:#x} byte ROM from {:#x} bytes of code", code.len());

    let mut buf = Vec::new();
    buf.try_reserve_exact(size)
        .map_err(|_| BuildError::Alloc { size })?;
    buf.resize(size, FILLER);
    buf[..code.len()].copy_from_slice(code);

    if code.len() > RESET_VECTOR {
        warn!(
            "code runs into the reset vector at {RESET_VECTOR:#x}..{RESET_VECTOR_END:#x}, it will be overwritten"
        );
    }
    buf.put_u16(RESET_VECTOR, START_ADDR).ok_or(BuildError::Bounds {
        size,
        offset: RESET_VECTOR,
    })?;

    Ok(Rom {
        buf,
        code_len: code.len(),
    })
}
