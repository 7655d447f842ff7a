//! Validation and classification of externally supplied barcode strings
//!
//! The scanner only ever emits checksum-valid EAN-13, but manually entered
//! codes arrive as free text; this module tells callers what they hold.

use crate::decoder::ean13::{checksum_digit, checksum_valid};

/// GS1 prefix assigned to India
pub const INDIA_GS1_PREFIX: &str = "890";

/// Recognized barcode string formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarcodeKind {
    /// 13 digits with a valid check digit
    Ean13,
    /// 8 digits
    Ean8,
    /// 12 digits
    UpcA,
    /// Other alphanumeric code (dashes and dots allowed)
    Alphanumeric,
}

/// Why a barcode string was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty input
    Empty,
    /// 13 digits but the check digit is wrong
    BadChecksum,
    /// Characters outside the accepted alphabet
    UnrecognizedFormat,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "barcode is empty"),
            ValidationError::BadChecksum => write!(f, "invalid EAN-13 checksum"),
            ValidationError::UnrecognizedFormat => write!(f, "unrecognized barcode format"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Classify and validate a barcode string
pub fn validate_barcode(code: &str) -> Result<BarcodeKind, ValidationError> {
    if code.is_empty() {
        return Err(ValidationError::Empty);
    }

    let all_digits = code.bytes().all(|b| b.is_ascii_digit());
    if all_digits {
        match code.len() {
            13 => {
                return if ean13_checksum_ok(code) {
                    Ok(BarcodeKind::Ean13)
                } else {
                    Err(ValidationError::BadChecksum)
                };
            }
            8 => return Ok(BarcodeKind::Ean8),
            12 => return Ok(BarcodeKind::UpcA),
            _ => {}
        }
    }

    if code
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'.')
    {
        Ok(BarcodeKind::Alphanumeric)
    } else {
        Err(ValidationError::UnrecognizedFormat)
    }
}

/// EAN-13 checksum over a 13-digit ASCII string
pub fn ean13_checksum_ok(code: &str) -> bool {
    let bytes = code.as_bytes();
    if bytes.len() != 13 || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let mut digits = [0u8; 13];
    for (i, &b) in bytes.iter().enumerate() {
        digits[i] = b - b'0';
    }
    checksum_valid(&digits)
}

/// Check digit completing a 12-digit ASCII payload, if it parses
pub fn ean13_check_digit(payload: &str) -> Option<u8> {
    let bytes = payload.as_bytes();
    if bytes.len() != 12 || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits: Vec<u8> = bytes.iter().map(|b| b - b'0').collect();
    Some(checksum_digit(&digits))
}

/// Whether a code carries the Indian GS1 prefix (890)
pub fn is_indian_prefix(code: &str) -> bool {
    code.len() >= 3 && &code[..3] == INDIA_GS1_PREFIX
}

/// Country of the GS1 registration group for a 3-digit prefix, if known
pub fn country_for_prefix(prefix: &str) -> Option<&'static str> {
    let value: u32 = prefix.parse().ok().filter(|_| prefix.len() == 3)?;
    let country = match value {
        0..=19 => "USA",
        300..=379 => "France",
        400..=440 => "Germany",
        450..=459 => "Japan",
        460..=469 => "Russia",
        471 => "Taiwan",
        480 => "Philippines",
        489 => "Hong Kong",
        490..=499 => "Japan",
        500..=509 => "UK",
        539 => "Ireland",
        540..=549 => "Belgium",
        560 => "Portugal",
        569 => "Iceland",
        570..=579 => "Denmark",
        590 => "Poland",
        599 => "Hungary",
        600..=601 => "South Africa",
        609 => "Mauritius",
        690..=699 => "China",
        729 => "Israel",
        730..=739 => "Sweden",
        740 => "Guatemala",
        750 => "Mexico",
        770..=771 => "Colombia",
        773 => "Uruguay",
        775 => "Peru",
        779 => "Argentina",
        780 => "Chile",
        786 => "Ecuador",
        789..=790 => "Brazil",
        800..=839 => "Italy",
        840..=849 => "Spain",
        850 => "Cuba",
        858 => "Slovakia",
        859 => "Czech Republic",
        860 => "Serbia",
        869 => "Turkey",
        870..=879 => "Netherlands",
        880 => "South Korea",
        885 => "Thailand",
        890 => "India",
        893 => "Vietnam",
        899 => "Indonesia",
        930..=939 => "Australia",
        940..=949 => "New Zealand",
        955 => "Malaysia",
        958 => "Macau",
        _ => return None,
    };
    Some(country)
}
