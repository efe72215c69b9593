// Protocol descriptor table.
//
// One entry per supported protocol: the lowercase token as it appears in
// the textual address, the numeric code from the public multiaddr
// registry, and the shape of the payload that follows the code on the
// wire.  The table is `const`, process-wide, and never mutated.

// ---------------------------------------------------------------------------
// Protocol codes (public multiaddr registry values)
// ---------------------------------------------------------------------------

pub const IP4: u64 = 4;
pub const TCP: u64 = 6;
pub const UDP: u64 = 17;
pub const IP6: u64 = 41;
pub const DNS4: u64 = 54;
pub const DNS6: u64 = 55;
pub const DNSADDR: u64 = 56;
pub const P2P: u64 = 421;
pub const WS: u64 = 477;
pub const WSS: u64 = 478;

// ---------------------------------------------------------------------------
// Payload kinds
// ---------------------------------------------------------------------------

/// How a protocol's value is laid out after its varint code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// No payload at all (transport flags like `ws`).
    None,
    /// Exactly `n` raw bytes.
    Fixed(usize),
    /// Varint byte-length followed by raw bytes.
    Prefixed,
    /// Varint byte-length followed by UTF-8 text.
    PrefixedUtf8,
}

impl PayloadKind {
    /// Human-readable description, used by the CLI table dump.
    pub fn describe(self) -> String {
        match self {
            PayloadKind::None => "none".to_string(),
            PayloadKind::Fixed(n) => format!("{n} raw bytes"),
            PayloadKind::Prefixed => "varint length + raw bytes".to_string(),
            PayloadKind::PrefixedUtf8 => "varint length + UTF-8 bytes".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Descriptor table
// ---------------------------------------------------------------------------

/// A single protocol descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Protocol {
    /// Canonical lowercase token (`"ip4"`, `"tcp"`, ...).
    pub name: &'static str,
    /// Registry code, varint-encoded on the wire.
    pub code: u64,
    /// Payload layout following the code.
    pub payload: PayloadKind,
}

/// All protocols this crate understands, in registry-code order.
pub const PROTOCOLS: &[Protocol] = &[
    Protocol {
        name: "ip4",
        code: IP4,
        payload: PayloadKind::Fixed(4),
    },
    Protocol {
        name: "tcp",
        code: TCP,
        payload: PayloadKind::Fixed(2),
    },
    Protocol {
        name: "udp",
        code: UDP,
        payload: PayloadKind::Fixed(2),
    },
    Protocol {
        name: "ip6",
        code: IP6,
        payload: PayloadKind::Fixed(16),
    },
    Protocol {
        name: "dns4",
        code: DNS4,
        payload: PayloadKind::PrefixedUtf8,
    },
    Protocol {
        name: "dns6",
        code: DNS6,
        payload: PayloadKind::PrefixedUtf8,
    },
    Protocol {
        name: "dnsaddr",
        code: DNSADDR,
        payload: PayloadKind::PrefixedUtf8,
    },
    Protocol {
        name: "p2p",
        code: P2P,
        payload: PayloadKind::Prefixed,
    },
    Protocol {
        name: "ws",
        code: WS,
        payload: PayloadKind::None,
    },
    Protocol {
        name: "wss",
        code: WSS,
        payload: PayloadKind::None,
    },
];

/// Look up a descriptor by its textual token (case-sensitive, lowercase).
pub fn from_name(name: &str) -> Option<&'static Protocol> {
    PROTOCOLS.iter().find(|p| p.name == name)
}

/// Look up a descriptor by its registry code.
pub fn from_code(code: u64) -> Option<&'static Protocol> {
    PROTOCOLS.iter().find(|p| p.code == code)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
