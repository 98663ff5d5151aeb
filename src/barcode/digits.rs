//! Decimal integers written as nucleotide pairs.
//!
//! Each decimal digit becomes a two-nucleotide code from [`DIGITS`], most significant
//! first, and every integer is closed by [`SEPARATOR`]. No digit code may equal the
//! separator, otherwise the decoder could not tell where an integer ends.

use crate::error::{DnaError, Result};
use crate::nucstream::nucreader::NucReader;
use crate::nucstream::nucwriter::NucWriter;

/// Digit table: index is the decimal digit.
pub const DIGITS: [&str; 10] = [
    "AA", "CA", "TA", "GA", "AC", "CC", "TC", "GC", "AT", "CT",
];

/// Closes every integer in the barcode.
pub const SEPARATOR: &str = "TT";

/// Spell `n` in digit codes, without the separator. Zero is a single "AA".
pub fn encode_integer(mut n: u64) -> String {
    if n == 0 {
        return DIGITS[0].to_string();
    }
    let mut digits = Vec::with_capacity(20);
    while n > 0 {
        digits.push(DIGITS[(n % 10) as usize]);
        n /= 10;
    }
    digits.iter().rev().copied().collect()
}

/// Write `n` followed by the separator.
pub fn write_integer(nw: &mut NucWriter, n: u64) {
    nw.out_token(&encode_integer(n));
    nw.out_token(SEPARATOR);
}

/// Look up the decimal digit for a two-nucleotide code.
pub fn digit_of(pair: &[u8]) -> Option<u64> {
    DIGITS
        .iter()
        .position(|d| d.as_bytes() == pair)
        .map(|d| d as u64)
}

/// Read digit pairs up to and including the next separator and return their value.
pub fn decode_integer(nr: &mut NucReader<'_>) -> Result<u64> {
    let mut value = 0_u64;
    loop {
        let loc = nr.loc();
        let pair = nr
            .pair()
            .ok_or_else(|| DnaError::barcode(loc, "stream ended before a separator"))?;
        if pair == SEPARATOR.as_bytes() {
            return Ok(value);
        }
        let digit = digit_of(pair).ok_or_else(|| {
            DnaError::barcode(
                loc,
                format!("unknown digit code {:?}", String::from_utf8_lossy(pair)),
            )
        })?;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| DnaError::barcode(loc, "integer does not fit in 64 bits"))?;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn decode_str(s: &str) -> Result<u64> {
        let mut nr = NucReader::new(s.as_bytes());
        decode_integer(&mut nr)
    }

    #[test]
    fn separator_safety_test() {
        assert!(DIGITS.iter().all(|&d| d != SEPARATOR));
        assert!(DIGITS.iter().all(|d| d.len() == 2));
        let mut sorted = DIGITS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 10);
    }

    #[test]
    fn encode_test() {
        assert_eq!(encode_integer(0), "AA");
        assert_eq!(encode_integer(7), "GC");
        assert_eq!(encode_integer(12), "CATA");
        assert_eq!(encode_integer(100), "CAAAAA");
        assert_eq!(encode_integer(256), "TACCTC");
    }

    #[test]
    fn write_test() {
        let mut nw = NucWriter::new(6);
        write_integer(&mut nw, 12);
        assert_eq!(nw.into_inner(), b"CATATT".to_vec());
    }

    #[test]
    fn decode_test() {
        assert_eq!(decode_str("CATATT").unwrap(), 12);
        assert_eq!(decode_str("AATT").unwrap(), 0);
        assert_eq!(decode_str("TT").unwrap(), 0);
        assert_eq!(decode_str("TACCTCTTGG").unwrap(), 256);
    }

    #[test]
    fn decode_consumes_separator_test() {
        let mut nr = NucReader::new(b"CATTTATT");
        assert_eq!(decode_integer(&mut nr).unwrap(), 1);
        assert_eq!(nr.loc(), 4);
        assert_eq!(decode_integer(&mut nr).unwrap(), 2);
        assert!(nr.is_empty());
    }

    #[test]
    fn digit_roundtrip_test() {
        for n in (0..2000).chain([u32::MAX as u64, u64::MAX - 1, u64::MAX]) {
            let token = format!("{}{}", encode_integer(n), SEPARATOR);
            assert_eq!(decode_str(&token).unwrap(), n);
        }
    }

    #[test]
    fn decode_errors_test() {
        // GG is not a digit.
        assert!(matches!(
            decode_str("CAGGTT"),
            Err(DnaError::CorruptBarcode { loc: 2, .. })
        ));
        // No separator.
        assert!(decode_str("CATA").is_err());
        // Odd trailing nucleotide.
        assert!(decode_str("CAT").is_err());
        // One more digit than u64 can hold.
        let too_big = format!("{}AATT", encode_integer(u64::MAX));
        assert!(decode_str(&too_big).is_err());
    }
}
