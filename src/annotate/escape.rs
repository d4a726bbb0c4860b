//! Line escaping
//!
//! The escaping variants always append exactly one newline, so each input
//! line becomes exactly one printable output line. The identity variant
//! leaves bytes untouched, terminator included.

use crate::error::{ErrorCode, LinestampError};
use thiserror::Error;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Failure to escape a line
#[derive(Debug, Error)]
pub enum EscapeError {
    #[error("line is not valid UTF-8 after {valid_up_to} bytes")]
    InvalidUtf8 {
        valid_up_to: usize,
        #[source]
        source: std::str::Utf8Error,
    },
}

impl From<EscapeError> for LinestampError {
    fn from(err: EscapeError) -> Self {
        let offset = match &err {
            EscapeError::InvalidUtf8 { valid_up_to, .. } => *valid_up_to,
        };
        LinestampError::encoding_with_code(
            ErrorCode::ENCODING_INVALID_UTF8,
            "Input is not valid UTF-8; unicode escaping needs decodable text",
            Some(offset),
        )
        .with_source(err)
    }
}

/// Failure to reverse control-character escaping
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnescapeError {
    #[error("escape sequence truncated at byte {0}")]
    Truncated(usize),

    #[error("unknown escape '\\{escape}' at byte {offset}")]
    Unknown { offset: usize, escape: char },

    #[error("invalid hex digits in escape at byte {0}")]
    InvalidHex(usize),

    #[error("raw newline inside escaped text at byte {0}")]
    RawNewline(usize),
}

impl From<UnescapeError> for LinestampError {
    fn from(err: UnescapeError) -> Self {
        LinestampError::encoding_with_code(
            ErrorCode::ENCODING_INVALID_ESCAPE,
            "Malformed escaped text",
            None,
        )
        .with_source(err)
    }
}

/// Escaping variant, chosen once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Escaper {
    /// Pass bytes through untouched
    #[default]
    Identity,
    /// Escape control bytes and backslash; high bytes pass through
    Control,
    /// Decode as UTF-8 and escape everything outside printable ASCII
    Unicode,
}

impl Escaper {
    /// Append the escaped form of `line` to `out`
    pub fn escape_into(&self, line: &[u8], out: &mut Vec<u8>) -> Result<(), EscapeError> {
        match self {
            Self::Identity => {
                out.extend_from_slice(line);
                Ok(())
            }
            Self::Control => {
                escape_control_into(line, out);
                Ok(())
            }
            Self::Unicode => escape_unicode_into(line, out),
        }
    }

    /// Escape `line` into a fresh buffer
    pub fn escape(&self, line: &[u8]) -> Result<Vec<u8>, EscapeError> {
        let mut out = Vec::with_capacity(line.len() + 1);
        self.escape_into(line, &mut out)?;
        Ok(out)
    }
}

fn push_hex_byte(out: &mut Vec<u8>, byte: u8) {
    out.extend_from_slice(&[b'\\', b'x', HEX[(byte >> 4) as usize], HEX[(byte & 0xf) as usize]]);
}

/// Control-character escaping, defined for every byte value
pub fn escape_control_into(line: &[u8], out: &mut Vec<u8>) {
    out.reserve(line.len() + 1);
    for &byte in line {
        match byte {
            b'\t' => out.extend_from_slice(b"\\t"),
            b'\r' => out.extend_from_slice(b"\\r"),
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\\' => out.extend_from_slice(b"\\\\"),
            0x00..=0x1f => push_hex_byte(out, byte),
            _ => out.push(byte),
        }
    }
    out.push(b'\n');
}

/// Escape a UTF-8 line the way a `unicode_escape` codec does
///
/// Printable ASCII passes through; everything else becomes `\xHH`, `\uHHHH`
/// or `\UHHHHHHHH` depending on the code point.
pub fn escape_unicode_into(line: &[u8], out: &mut Vec<u8>) -> Result<(), EscapeError> {
    let text = std::str::from_utf8(line).map_err(|source| EscapeError::InvalidUtf8 {
        valid_up_to: source.valid_up_to(),
        source,
    })?;

    out.reserve(line.len() + 1);
    for ch in text.chars() {
        let cp = ch as u32;
        match ch {
            '\t' => out.extend_from_slice(b"\\t"),
            '\r' => out.extend_from_slice(b"\\r"),
            '\n' => out.extend_from_slice(b"\\n"),
            '\\' => out.extend_from_slice(b"\\\\"),
            ' '..='~' => out.push(cp as u8),
            _ if cp < 0x100 => push_hex_byte(out, cp as u8),
            _ if cp < 0x10000 => out.extend_from_slice(format!("\\u{:04x}", cp).as_bytes()),
            _ => out.extend_from_slice(format!("\\U{:08x}", cp).as_bytes()),
        }
    }
    out.push(b'\n');
    Ok(())
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Reverse control-character escaping
///
/// Accepts one escaped line, with or without its appended newline.
pub fn unescape_control(escaped: &[u8]) -> Result<Vec<u8>, UnescapeError> {
    let body = escaped.strip_suffix(b"\n").unwrap_or(escaped);
    let mut out = Vec::with_capacity(body.len());
    let mut i = 0;

    while i < body.len() {
        let byte = body[i];
        if byte == b'\n' {
            return Err(UnescapeError::RawNewline(i));
        }
        if byte != b'\\' {
            out.push(byte);
            i += 1;
            continue;
        }

        let escape = *body.get(i + 1).ok_or(UnescapeError::Truncated(i))?;
        match escape {
            b't' => out.push(b'\t'),
            b'r' => out.push(b'\r'),
            b'n' => out.push(b'\n'),
            b'\\' => out.push(b'\\'),
            b'x' => {
                let digits = body.get(i + 2..i + 4).ok_or(UnescapeError::Truncated(i))?;
                let value = hex_value(digits[0])
                    .zip(hex_value(digits[1]))
                    .map(|(hi, lo)| (hi << 4) | lo)
                    .ok_or(UnescapeError::InvalidHex(i))?;
                out.push(value);
                i += 4;
                continue;
            }
            other => {
                return Err(UnescapeError::Unknown {
                    offset: i,
                    escape: other as char,
                })
            }
        }
        i += 2;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control(line: &[u8]) -> Vec<u8> {
        Escaper::Control.escape(line).unwrap()
    }

    fn unicode(line: &[u8]) -> Vec<u8> {
        Escaper::Unicode.escape(line).unwrap()
    }

    #[test]
    fn test_control_empty_is_newline() {
        assert_eq!(control(b""), b"\n");
    }

    #[test]
    fn test_control_plain_text_gets_newline() {
        assert_eq!(control(b"foo"), b"foo\n");
    }

    #[test]
    fn test_control_mixed_bytes() {
        let input = b"a\x00b\x01c\rd\te\nf\\g\x19h i\x80j\xffk";
        let expected = b"a\\x00b\\x01c\\rd\\te\\nf\\\\g\\x19h i\x80j\xffk\n";
        assert_eq!(control(input), expected.to_vec());
    }

    #[test]
    fn test_control_leaves_delete_and_high_bytes() {
        assert_eq!(control(b"\x7f\xc3\xa9"), b"\x7f\xc3\xa9\n");
    }

    #[test]
    fn test_control_terminated_line_has_single_real_newline() {
        let out = control(b"line\n");
        assert_eq!(out, b"line\\n\n");
        assert_eq!(out.iter().filter(|&&b| b == b'\n').count(), 1);
    }

    #[test]
    fn test_control_every_byte_round_trips() {
        for byte in 0..=255u8 {
            let escaped = control(&[byte]);
            assert_eq!(unescape_control(&escaped).unwrap(), vec![byte], "byte {byte:#04x}");
        }
    }

    #[test]
    fn test_control_escapes_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for byte in 0..=255u8 {
            assert!(seen.insert(control(&[byte])), "collision for {byte:#04x}");
        }
    }

    #[test]
    fn test_identity_is_untouched() {
        assert_eq!(Escaper::Identity.escape(b"a\x00\n").unwrap(), b"a\x00\n");
        assert_eq!(Escaper::Identity.escape(b"partial").unwrap(), b"partial");
    }

    #[test]
    fn test_unicode_ascii_and_controls() {
        assert_eq!(unicode(b"ab c\t\\\n"), b"ab c\\t\\\\\\n\n");
        assert_eq!(unicode(b"\x00\x1b\x7f"), b"\\x00\\x1b\\x7f\n");
    }

    #[test]
    fn test_unicode_code_point_widths() {
        assert_eq!(unicode("é".as_bytes()), b"\\xe9\n");
        assert_eq!(unicode("€".as_bytes()), b"\\u20ac\n");
        assert_eq!(unicode("😀".as_bytes()), b"\\U0001f600\n");
    }

    #[test]
    fn test_unicode_rejects_invalid_utf8() {
        let err = Escaper::Unicode.escape(b"ok\xffno").unwrap_err();
        match err {
            EscapeError::InvalidUtf8 { valid_up_to, .. } => assert_eq!(valid_up_to, 2),
        }
    }

    #[test]
    fn test_invalid_utf8_maps_to_encoding_error() {
        let err: LinestampError = Escaper::Unicode.escape(b"\xc3").unwrap_err().into();
        assert_eq!(err.code(), ErrorCode::ENCODING_INVALID_UTF8);
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_unescape_rejects_malformed_input() {
        assert_eq!(unescape_control(b"abc\\"), Err(UnescapeError::Truncated(3)));
        assert_eq!(unescape_control(b"\\x4"), Err(UnescapeError::Truncated(0)));
        assert_eq!(unescape_control(b"\\xzz"), Err(UnescapeError::InvalidHex(0)));
        assert_eq!(
            unescape_control(b"\\q"),
            Err(UnescapeError::Unknown {
                offset: 0,
                escape: 'q'
            })
        );
        assert_eq!(unescape_control(b"a\nb\n"), Err(UnescapeError::RawNewline(1)));
    }
}
