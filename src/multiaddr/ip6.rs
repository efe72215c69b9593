// IPv6 textual parser.
//
// Converts a compressed ("::1") or expanded ("0:0:0:0:0:0:0:1") IPv6
// literal into eight 16-bit segments.  At most one "::" elision marker
// is allowed; right-hand segments are right-aligned so the final token
// always lands in segment 7.  Unspecified segments are zero.
//
// Deliberate laxity, kept for output compatibility: an address without
// "::" that supplies fewer than 8 segments is accepted, with the
// trailing segments left at zero.

use super::error::MultiaddrError;

/// Parse an IPv6 literal into eight 16-bit segments.
///
/// Hex parsing is case-insensitive.  With `strict` set, a segment value
/// above `0xFFFF` is rejected; otherwise it is truncated to its low 16
/// bits, matching the historical encoder output.
pub fn parse(addr: &str, strict: bool) -> Result<[u16; 8], MultiaddrError> {
    let mut segs = [0u16; 8];

    let parts: Vec<&str> = addr.split("::").collect();
    if parts.len() > 2 {
        return Err(MultiaddrError::MalformedAddress(format!(
            "more than one \"::\" in IPv6 address `{addr}`"
        )));
    }

    let left: Vec<&str> = parts[0].split(':').filter(|s| !s.is_empty()).collect();
    let right: Vec<&str> = if parts.len() == 2 {
        parts[1].split(':').filter(|s| !s.is_empty()).collect()
    } else {
        Vec::new()
    };

    if left.len() + right.len() > 8 {
        return Err(MultiaddrError::MalformedAddress(format!(
            "too many segments in IPv6 address `{addr}`"
        )));
    }

    for (i, p) in left.iter().enumerate() {
        segs[i] = parse_segment(p, strict)?;
    }

    let mut j = 8 - right.len();
    for p in right {
        segs[j] = parse_segment(p, strict)?;
        j += 1;
    }

    Ok(segs)
}

fn parse_segment(text: &str, strict: bool) -> Result<u16, MultiaddrError> {
    let val = u64::from_str_radix(text, 16).map_err(|_| {
        MultiaddrError::MalformedAddress(format!("invalid IPv6 segment `{text}`"))
    })?;
    if strict && val > 0xFFFF {
        return Err(MultiaddrError::MalformedAddress(format!(
            "IPv6 segment `{text}` out of range"
        )));
    }
    Ok(val as u16)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
