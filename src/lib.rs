//! Maddr: multiaddr text-to-binary encoding in Rust.
//!
//! The crate provides:
//! - A textual-to-binary multiaddr compiler (`multiaddr::encoder`)
//! - A binary validator for untrusted multiaddr bytes (`multiaddr::addr`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use maddr::multiaddr::compile;
//!
//! let bytes = compile("/ip4/127.0.0.1/tcp/4001").unwrap();
//! assert_eq!(bytes, [4, 127, 0, 0, 1, 6, 0x0F, 0xA1]);
//! ```

pub mod multiaddr;

#[cfg(feature = "cli")]
pub mod cli;
