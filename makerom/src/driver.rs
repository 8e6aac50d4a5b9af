use std::io;
use std::path::{Path, PathBuf};

use crate::image::{build, BuildError, Rom};
use crate::listing::{parse, Code, ListingConfig, ParseError};

use log::{debug, info};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("{}: {}", .path.display(), .source)]
    Io { path: PathBuf, source: io::Error },
}

/// Compiles `source` (if any) into a `size` byte ROM. No source gives a ROM
/// of pure filler plus the reset vector.
pub fn make_rom(source: Option<&str>, size: usize, config: &ListingConfig) -> Result<Rom, Error> {
    let code = match source {
        Some(source) => parse(source, config)?,
        None => Code::default(),
    };
    Ok(build(&code, size)?)
}

/// Writes the whole ROM to `path` or leaves it untouched.
pub fn save(rom: &Rom, path: &Path) -> Result<(), Error> {
    info!("saving byte code to ROM inside the {} file", path.display());

    write_atomic(rom, path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}

// The temp file is deleted on drop unless it was persisted.
fn write_atomic(rom: &Rom, path: &Path) -> io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    debug!("writing {:#x} bytes to {}", rom.len(), tmp.path().display());
    rom.write_to(&mut tmp)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Image sizes are decimal, or hex with a `0x` prefix.
pub fn parse_size(s: &str) -> Result<usize, String> {
    let res = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => s.parse(),
    };
    res.map_err(|e| format!("invalid size '{s}': {e}"))
}
