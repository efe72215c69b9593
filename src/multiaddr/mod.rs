// Multiaddr codec.
//
// Compiles human-readable `/`-delimited network addresses into the
// compact self-describing binary form, and validates untrusted binary
// multiaddrs against the same protocol table.
//
// # Modules
//
// - `varint`   — Unsigned LEB128 integer encoding
// - `protocol` — Static protocol descriptor table (token, code, payload)
// - `ip6`      — IPv6 literal parsing with "::" compression
// - `encoder`  — The text-to-binary compiler
// - `addr`     — Binary `Multiaddr` value: verify / extend
// - `error`    — Shared error taxonomy

pub mod addr;
pub mod encoder;
pub mod error;
pub mod ip6;
pub mod protocol;
pub mod varint;

// Re-export key types for convenience.
pub use addr::Multiaddr;
pub use encoder::{CompileOptions, compile, compile_with_options};
pub use error::MultiaddrError;
pub use protocol::{PROTOCOLS, PayloadKind, Protocol};
