pub mod constants;
pub mod mem;
