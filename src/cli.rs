// Idiomatic Rust CLI for Maddr.
//
// Subcommands: `encode` compiles a textual multiaddr to bytes, `verify`
// validates binary multiaddr bytes, `protocols` dumps the descriptor
// table.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use crate::multiaddr::addr::Multiaddr;
use crate::multiaddr::encoder::{CompileOptions, compile_with_options};
use crate::multiaddr::protocol::PROTOCOLS;

// ---------------------------------------------------------------------------
// Hex helpers
// ---------------------------------------------------------------------------

fn to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        s.push_str(&format!("{b:02x}"));
    }
    s
}

fn from_hex(s: &str) -> Result<Vec<u8>, String> {
    let s = s.trim();
    let s = s.strip_prefix("0x").unwrap_or(s);
    // Byte-offset slicing below requires ASCII; anything else is not hex
    // anyway.
    if !s.is_ascii() {
        return Err("hex string contains non-ASCII characters".to_string());
    }
    if !s.len().is_multiple_of(2) {
        return Err(format!("hex string has odd length: {}", s.len()));
    }
    (0..s.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&s[i..i + 2], 16)
                .map_err(|e| format!("invalid hex at offset {i}: {e}"))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Multiaddr text-to-binary encoder.
#[derive(Parser, Debug)]
#[command(
    name = "maddr",
    version,
    about = "Multiaddr text-to-binary encoder and validator",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    /// Output stats as JSON to stderr.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Compile a textual multiaddr into bytes.
    Encode(EncodeArgs),
    /// Validate binary multiaddr bytes (hex input).
    Verify(VerifyArgs),
    /// Print the protocol descriptor table.
    Protocols,
}

#[derive(Args, Debug)]
struct EncodeArgs {
    /// Textual address, e.g. /ip4/127.0.0.1/tcp/4001/p2p/<peer-id>.
    address: String,

    /// Reject out-of-range numeric fields instead of truncating.
    #[arg(long)]
    strict: bool,

    /// Write raw bytes instead of a hex line.
    #[arg(long, requires = "output")]
    raw: bool,

    /// Output file (defaults to stdout).
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct VerifyArgs {
    /// Hex-encoded multiaddr bytes (with or without 0x prefix).
    hex: Option<String>,

    /// Read raw multiaddr bytes from a file instead.
    #[arg(long, conflicts_with = "hex")]
    file: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Encode command
// ---------------------------------------------------------------------------

fn cmd_encode(args: &EncodeArgs, quiet: bool, json_output: bool) -> i32 {
    let opts = CompileOptions {
        strict: args.strict,
    };
    let bytes = match compile_with_options(&args.address, opts) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("maddr: {e}");
            return 1;
        }
    };

    let hex = to_hex(&bytes);

    let write_result = match (&args.output, args.raw) {
        (Some(path), true) => File::create(path).and_then(|mut f| f.write_all(&bytes)),
        (Some(path), false) => File::create(path).and_then(|mut f| writeln!(f, "{hex}")),
        (None, _) => writeln!(io::stdout(), "{hex}"),
    };
    if let Err(e) = write_result {
        eprintln!("maddr: write error: {e}");
        return 1;
    }

    if !quiet && let Some(path) = &args.output {
        eprintln!("maddr: wrote {} bytes to {}", bytes.len(), path.display());
    }

    if json_output {
        let json = serde_json::json!({
            "command": "encode",
            "address": args.address,
            "strict": args.strict,
            "bytes": bytes.len(),
            "hex": hex,
        });
        eprintln!("{}", serde_json::to_string_pretty(&json).unwrap());
    }

    0
}

// ---------------------------------------------------------------------------
// Verify command
// ---------------------------------------------------------------------------

fn cmd_verify(args: &VerifyArgs, quiet: bool, json_output: bool) -> i32 {
    let bytes = match (&args.hex, &args.file) {
        (Some(hex), None) => match from_hex(hex) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("maddr: {e}");
                return 1;
            }
        },
        (None, Some(path)) => match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("maddr: input file: {}: {e}", path.display());
                return 1;
            }
        },
        _ => {
            eprintln!("maddr: verify needs a hex argument or --file");
            return 1;
        }
    };

    match Multiaddr::verify(&bytes) {
        Ok(ma) => {
            if !quiet {
                println!("ok: {} bytes", ma.as_bytes().len());
            }
            if json_output {
                let json = serde_json::json!({
                    "command": "verify",
                    "valid": true,
                    "bytes": ma.as_bytes().len(),
                });
                eprintln!("{}", serde_json::to_string_pretty(&json).unwrap());
            }
            0
        }
        Err(e) => {
            eprintln!("maddr: {e}");
            if json_output {
                let json = serde_json::json!({
                    "command": "verify",
                    "valid": false,
                    "error": e.to_string(),
                });
                eprintln!("{}", serde_json::to_string_pretty(&json).unwrap());
            }
            1
        }
    }
}

// ---------------------------------------------------------------------------
// Protocols command
// ---------------------------------------------------------------------------

fn cmd_protocols(json_output: bool) -> i32 {
    if json_output {
        let rows: Vec<_> = PROTOCOLS
            .iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "code": p.code,
                    "payload": p.payload.describe(),
                })
            })
            .collect();
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!(rows)).unwrap()
        );
        return 0;
    }

    println!("{:<10} {:>6}  payload", "token", "code");
    for p in PROTOCOLS {
        println!("{:<10} {:>6}  {}", p.name, p.code, p.payload.describe());
    }
    0
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Cmd::Encode(args) => cmd_encode(args, cli.quiet, cli.json_output),
        Cmd::Verify(args) => cmd_verify(args, cli.quiet, cli.json_output),
        Cmd::Protocols => cmd_protocols(cli.json_output),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let bytes = [0x04, 0x7F, 0x00, 0x00, 0x01];
        let hex = to_hex(&bytes);
        assert_eq!(hex, "047f000001");
        assert_eq!(from_hex(&hex).unwrap(), bytes);
        assert_eq!(from_hex("0x047f000001").unwrap(), bytes);
    }

    #[test]
    fn hex_rejects_bad_input() {
        assert!(from_hex("abc").is_err()); // odd length
        assert!(from_hex("zz").is_err());
    }

    #[test]
    fn hex_rejects_non_ascii_without_panicking() {
        // "€" is 3 UTF-8 bytes, so "€€" passes an even-length check but
        // must not be sliced at byte offsets.
        assert!(from_hex("€€").is_err());
        assert!(from_hex("0x€€").is_err());
    }
}
