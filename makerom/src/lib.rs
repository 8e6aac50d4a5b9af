pub mod driver;
pub mod hexdump;
pub mod image;
pub mod listing;

pub use driver::{make_rom, parse_size, save, Error};
pub use hexdump::Hexdump;
pub use image::{build, BuildError, Rom};
pub use listing::{parse, parse_listing, Code, ConfigError, ListingConfig, ParseError};
