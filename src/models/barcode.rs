use thiserror::Error;

/// Why a scan produced no result
///
/// The cascade never surfaces per-line or per-candidate failures; the only
/// externally visible outcome besides success is that nothing decoded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Every sampling tier was exhausted without a checksum-valid candidate
    #[error("no barcode detected")]
    NoBarcodeFound,
}

/// A decoded, checksum-valid EAN-13 value
///
/// Construction is restricted to the decoder, so holding an `Ean13` is proof
/// the checksum validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ean13 {
    digits: String,
}

impl Ean13 {
    /// Internal constructor; `digits` must already be 13 checksum-valid
    /// ASCII digits.
    pub(crate) fn from_digits(digits: [u8; 13]) -> Self {
        let digits = digits.iter().map(|d| (b'0' + d) as char).collect();
        Self { digits }
    }

    /// The 13-digit string
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// The thirteen digits as numeric values
    pub fn digits(&self) -> [u8; 13] {
        let mut out = [0u8; 13];
        for (slot, b) in out.iter_mut().zip(self.digits.bytes()) {
            *slot = b - b'0';
        }
        out
    }

    /// First three digits, the GS1 company-prefix country part
    pub fn gs1_prefix(&self) -> &str {
        &self.digits[..3]
    }

    /// Country of the issuing GS1 registration group, if known
    pub fn country(&self) -> Option<&'static str> {
        crate::validate::country_for_prefix(self.gs1_prefix())
    }

    /// Whether the code was issued under the Indian GS1 prefix (890)
    pub fn is_indian(&self) -> bool {
        crate::validate::is_indian_prefix(&self.digits)
    }
}

impl std::fmt::Display for Ean13 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.digits)
    }
}
