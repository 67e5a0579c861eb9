use crate::error::{Error, Result};

/// Parses the two hex digits at `start` into a byte.
pub(crate) fn hex_pair(code: &str, start: usize) -> Result<u8> {
    code.get(start..start + 2)
        .and_then(|s| u8::from_str_radix(s, 16).ok())
        .ok_or_else(|| Error::ColorParsing(String::from(code)))
}

/// Parses the single hex digit at `start` and duplicates the nibble,
/// so `F` becomes `FF`. This is the CSS short-hex expansion.
pub(crate) fn hex_nibble(code: &str, start: usize) -> Result<u8> {
    let v = code
        .get(start..start + 1)
        .and_then(|s| u8::from_str_radix(s, 16).ok())
        .ok_or_else(|| Error::ColorParsing(String::from(code)))?;
    Ok(v * 0x11)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pair_parses_both_cases() {
        assert_eq!(hex_pair("f0f8ff", 0).unwrap(), 0xF0);
        assert_eq!(hex_pair("F0F8FF", 2).unwrap(), 0xF8);
        assert_eq!(hex_pair("F0F8FF", 4).unwrap(), 0xFF);
    }

    #[test]
    fn nibble_duplicates() {
        assert_eq!(hex_nibble("fa0", 0).unwrap(), 0xFF);
        assert_eq!(hex_nibble("fa0", 1).unwrap(), 0xAA);
        assert_eq!(hex_nibble("fa0", 2).unwrap(), 0x00);
    }

    #[test]
    fn bad_digits_rejected() {
        assert!(hex_pair("GG0000", 0).is_err());
        assert!(hex_nibble("xyz", 0).is_err());
        // out of bounds
        assert!(hex_pair("AB", 1).is_err());
    }

    #[test]
    fn multibyte_input_does_not_panic() {
        assert!(hex_pair("ффффчч", 0).is_err());
        assert!(hex_nibble("ффф", 0).is_err());
    }
}
