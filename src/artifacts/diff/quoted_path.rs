use thiserror::Error;

/// Reasons a C-style quoted path printed by git cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnquoteError {
    #[error("missing closing quote")]
    Unterminated,
    #[error("unexpected characters after closing quote")]
    TrailingCharacters,
    #[error("unknown escape sequence \\{0}")]
    UnknownEscape(char),
    #[error("octal escape must have three digits")]
    TruncatedOctal,
    #[error("octal escape \\{0:o} does not fit in a byte")]
    OctalOutOfRange(u32),
    #[error("decoded path is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// git wraps a path in double quotes when it contains control characters,
/// `"`, `\` or (with `core.quotePath`) any byte above 0x7f.
pub fn is_quoted(line: &str) -> bool {
    line.starts_with('"')
}

/// Decode a path quoted by git's `quote_c_style`.
///
/// Lines that do not start with `"` are returned unchanged. Octal escapes
/// produce raw bytes, so a multi-byte UTF-8 character arrives as a run of
/// `\NNN` sequences that only becomes text once the whole path is decoded.
pub fn unquote_path(line: &str) -> Result<String, UnquoteError> {
    let Some(body) = line.strip_prefix('"') else {
        return Ok(line.to_string());
    };

    let mut bytes = body.bytes();
    let mut decoded = Vec::with_capacity(body.len());

    loop {
        match bytes.next() {
            None => return Err(UnquoteError::Unterminated),
            Some(b'"') => break,
            Some(b'\\') => decoded.push(unescape(&mut bytes)?),
            Some(byte) => decoded.push(byte),
        }
    }

    if bytes.next().is_some() {
        return Err(UnquoteError::TrailingCharacters);
    }

    Ok(String::from_utf8(decoded)?)
}

fn unescape(bytes: &mut impl Iterator<Item = u8>) -> Result<u8, UnquoteError> {
    let byte = match bytes.next().ok_or(UnquoteError::Unterminated)? {
        b'a' => 0x07,
        b'b' => 0x08,
        b't' => b'\t',
        b'n' => b'\n',
        b'v' => 0x0b,
        b'f' => 0x0c,
        b'r' => b'\r',
        b'"' => b'"',
        b'\\' => b'\\',
        digit @ b'0'..=b'7' => {
            let mut value = u32::from(digit - b'0');
            for _ in 0..2 {
                match bytes.next() {
                    Some(digit @ b'0'..=b'7') => value = value * 8 + u32::from(digit - b'0'),
                    _ => return Err(UnquoteError::TruncatedOctal),
                }
            }
            u8::try_from(value).map_err(|_| UnquoteError::OctalOutOfRange(value))?
        }
        other => return Err(UnquoteError::UnknownEscape(char::from(other))),
    };

    Ok(byte)
}
