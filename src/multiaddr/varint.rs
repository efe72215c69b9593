// Multiaddr variable-length integer encoding.
//
// Unsigned LEB128: base-128, least-significant group first.  Each byte
// carries 7 payload bits; bit 7 set means "more bytes follow", clear
// means "last byte".  This is the encoding the multiaddr wire format
// uses for protocol codes and length prefixes.

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Append the LEB128 encoding of `num` to `out`.
/// Returns the number of bytes written (1..=10).
///
/// Total over `u64`: zero encodes as a single `0x00` byte.
#[inline]
pub fn encode_u64(mut num: u64, out: &mut Vec<u8>) -> usize {
    let start = out.len();
    while num >= 0x80 {
        out.push((num as u8 & 0x7F) | 0x80);
        num >>= 7;
    }
    out.push(num as u8);
    out.len() - start
}

// ---------------------------------------------------------------------------
// Decoding from byte slices
// ---------------------------------------------------------------------------

/// Decode a `u64` from the front of a byte slice.
/// Returns `(value, bytes_consumed)` or an error.
///
/// Used by the binary `verify` walk; the textual compiler never decodes.
pub fn read_u64(data: &[u8]) -> Result<(u64, usize), VarIntError> {
    let mut val: u64 = 0;
    let mut shift: u32 = 0;
    for (i, &byte) in data.iter().enumerate() {
        if shift > 63 {
            return Err(VarIntError::Overflow);
        }
        val |= u64::from(byte & 0x7F) << shift;
        if byte & 0x80 == 0 {
            return Ok((val, i + 1));
        }
        shift += 7;
    }
    Err(VarIntError::Underflow)
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarIntError {
    /// Not enough input bytes to complete the integer.
    Underflow,
    /// More continuation groups than a u64 can hold.
    Overflow,
}

impl std::fmt::Display for VarIntError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VarIntError::Underflow => write!(f, "varint underflow (truncated input)"),
            VarIntError::Overflow => write!(f, "varint overflow"),
        }
    }
}

impl std::error::Error for VarIntError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
