// Binary multiaddr value.
//
// `Multiaddr` wraps a compiled byte sequence.  `verify` vets untrusted
// binary input (e.g. a bootnode record received over the wire) by
// walking it with the same descriptor table the compiler uses: every
// protocol code must resolve, every payload must fit inside the input,
// and the sequence must end with a `p2p` segment so the record actually
// names a peer.

use std::str::FromStr;

use super::encoder::{self, CompileOptions};
use super::error::MultiaddrError;
use super::protocol::{self, P2P, PayloadKind};
use super::varint;

/// A validated (or freshly compiled) binary multiaddr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multiaddr {
    bytes: Vec<u8>,
}

impl Multiaddr {
    /// Validate untrusted multiaddr bytes.
    ///
    /// Walks the sequence segment by segment.  Fails if a varint is
    /// malformed, a protocol code is unknown, a payload runs past the
    /// end of the input, or the sequence does not end with `/p2p`.
    pub fn verify(bytes: &[u8]) -> Result<Self, MultiaddrError> {
        let mut i = 0usize;
        let mut last_code = None;

        while i < bytes.len() {
            let (code, read) = varint::read_u64(&bytes[i..])?;
            i += read;

            let proto = protocol::from_code(code)
                .ok_or(MultiaddrError::UnknownProtocolCode(code))?;

            match proto.payload {
                PayloadKind::None => {}
                PayloadKind::Fixed(n) => advance(bytes, &mut i, n)?,
                PayloadKind::Prefixed | PayloadKind::PrefixedUtf8 => {
                    let (len, read) = varint::read_u64(&bytes[i..])?;
                    i += read;
                    let len = usize::try_from(len).map_err(|_| MultiaddrError::Truncated)?;
                    advance(bytes, &mut i, len)?;
                }
            }

            last_code = Some(code);
        }

        if last_code != Some(P2P) {
            return Err(MultiaddrError::MalformedAddress(
                "multiaddr must end with a /p2p segment".to_string(),
            ));
        }

        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    /// Compile a textual address into a `Multiaddr`.
    ///
    /// Unlike [`Multiaddr::verify`], this does not require a terminal
    /// `/p2p` segment: the terminal rule guards untrusted binary
    /// records, not the pure text-to-binary transform.
    pub fn from_text(addr: &str, opts: CompileOptions) -> Result<Self, MultiaddrError> {
        Ok(Self {
            bytes: encoder::compile_with_options(addr, opts)?,
        })
    }

    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Copy out the raw bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Consume into the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Append another multiaddr.  Segment boundaries are implicit in the
    /// payload lengths, so concatenation is plain byte extension.
    pub fn extend(&mut self, other: &Multiaddr) {
        self.bytes.extend_from_slice(&other.bytes);
    }
}

impl FromStr for Multiaddr {
    type Err = MultiaddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s, CompileOptions::default())
    }
}

impl AsRef<[u8]> for Multiaddr {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

fn advance(bytes: &[u8], i: &mut usize, len: usize) -> Result<(), MultiaddrError> {
    if i.checked_add(len).is_none_or(|end| end > bytes.len()) {
        Err(MultiaddrError::Truncated)
    } else {
        *i += len;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
