pub mod bits;
pub mod input;

pub use bits::{useful_bits, BitCountError, DEFAULT_SECURITY_MARGIN};
pub use input::{parse_modulus, ParseModulusError};
