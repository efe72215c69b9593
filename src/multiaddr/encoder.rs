// Multiaddr compiler: textual address to binary.
//
// Tokenizes the `/`-delimited address, resolves each token against the
// protocol descriptor table, and emits the varint-encoded protocol code
// followed by the protocol's payload encoding.  Single pass, single
// cursor: each protocol consumes zero or one value token after its name.
//
// Compilation is all-or-nothing.  On any error the caller receives no
// bytes.

use log::{debug, trace};

use super::error::MultiaddrError;
use super::ip6;
use super::protocol::{self, DNS4, DNS6, DNSADDR, IP4, IP6, P2P, TCP, UDP, WS, WSS};
use super::varint;

// ---------------------------------------------------------------------------
// Compile options
// ---------------------------------------------------------------------------

/// Configuration for the compiler.
///
/// The default is permissive and reproduces the historical encoder
/// byte-for-byte: out-of-range IPv4 octets and ports are truncated to
/// their low 8/16 bits, and an `ip4` value may carry any number of
/// dot-separated fields.  `strict` turns those cases into
/// [`MultiaddrError::MalformedAddress`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Reject out-of-range numeric fields instead of truncating.
    pub strict: bool,
}

// ---------------------------------------------------------------------------
// Compile
// ---------------------------------------------------------------------------

/// Compile a textual multiaddr into its binary form with default
/// (permissive) options.
pub fn compile(addr: &str) -> Result<Vec<u8>, MultiaddrError> {
    compile_with_options(addr, CompileOptions::default())
}

/// Compile with custom options.
pub fn compile_with_options(
    addr: &str,
    opts: CompileOptions,
) -> Result<Vec<u8>, MultiaddrError> {
    let mut out = Vec::new();
    let mut parts = addr.split('/').filter(|p| !p.is_empty());
    let mut segments = 0usize;

    while let Some(token) = parts.next() {
        let proto = protocol::from_name(token)
            .ok_or_else(|| MultiaddrError::UnknownProtocol(token.to_string()))?;
        varint::encode_u64(proto.code, &mut out);
        trace!("segment {segments}: /{token} (code {})", proto.code);

        match proto.code {
            IP4 => {
                let value = next_value(&mut parts, token)?;
                encode_ip4(value, opts.strict, &mut out)?;
            }

            IP6 => {
                let value = next_value(&mut parts, token)?;
                for seg in ip6::parse(value, opts.strict)? {
                    out.extend_from_slice(&seg.to_be_bytes());
                }
            }

            DNS4 | DNS6 | DNSADDR => {
                let name = next_value(&mut parts, token)?;
                varint::encode_u64(name.len() as u64, &mut out);
                out.extend_from_slice(name.as_bytes());
            }

            TCP | UDP => {
                let value = next_value(&mut parts, token)?;
                let port = parse_port(value, opts.strict)?;
                out.extend_from_slice(&port.to_be_bytes());
            }

            WS | WSS => {
                // Transport flags carry no payload.
            }

            P2P => {
                let peer = next_value(&mut parts, token)?;
                let peer_bytes = bs58::decode(peer).into_vec().map_err(|_| {
                    MultiaddrError::MalformedAddress(format!(
                        "invalid base58 in p2p peer id `{peer}`"
                    ))
                })?;
                varint::encode_u64(peer_bytes.len() as u64, &mut out);
                out.extend_from_slice(&peer_bytes);
            }

            _ => unreachable!("descriptor table entry without compile arm"),
        }

        segments += 1;
    }

    debug!("compiled {segments} segments into {} bytes", out.len());
    Ok(out)
}

// ---------------------------------------------------------------------------
// Per-protocol value parsing
// ---------------------------------------------------------------------------

fn next_value<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    proto: &str,
) -> Result<&'a str, MultiaddrError> {
    parts.next().ok_or_else(|| {
        MultiaddrError::MalformedAddress(format!("`{proto}` requires a value"))
    })
}

fn encode_ip4(value: &str, strict: bool, out: &mut Vec<u8>) -> Result<(), MultiaddrError> {
    let mut count = 0usize;
    for field in value.split('.') {
        let octet: u64 = field.parse().map_err(|_| {
            MultiaddrError::MalformedAddress(format!("invalid IPv4 octet `{field}`"))
        })?;
        if strict && octet > 0xFF {
            return Err(MultiaddrError::MalformedAddress(format!(
                "IPv4 octet `{field}` out of range"
            )));
        }
        out.push(octet as u8);
        count += 1;
    }
    if strict && count != 4 {
        return Err(MultiaddrError::MalformedAddress(format!(
            "IPv4 address `{value}` must have 4 octets"
        )));
    }
    Ok(())
}

fn parse_port(value: &str, strict: bool) -> Result<u16, MultiaddrError> {
    let port: u64 = value.parse().map_err(|_| {
        MultiaddrError::MalformedAddress(format!("invalid port `{value}`"))
    })?;
    if strict && port > 0xFFFF {
        return Err(MultiaddrError::MalformedAddress(format!(
            "port `{value}` out of range"
        )));
    }
    Ok(port as u16)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
