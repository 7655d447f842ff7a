pub mod ean13;

pub use ean13::{Parity, checksum_digit, checksum_valid, decode_line};
