// End-to-end byte vectors for the multiaddr compiler and verifier.

use maddr::multiaddr::addr::Multiaddr;
use maddr::multiaddr::encoder::{CompileOptions, compile, compile_with_options};
use maddr::multiaddr::error::MultiaddrError;
use maddr::multiaddr::varint;

fn hex_to_bytes(s: &str) -> Vec<u8> {
    assert!(s.len().is_multiple_of(2), "hex string must have even length");
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Fixed vectors
// ---------------------------------------------------------------------------

#[test]
fn vector_ip4_tcp() {
    assert_eq!(
        compile("/ip4/127.0.0.1/tcp/4001").unwrap(),
        hex_to_bytes("047f000001060fa1")
    );
}

#[test]
fn vector_ip6_loopback() {
    assert_eq!(
        compile("/ip6/::1").unwrap(),
        hex_to_bytes("2900000000000000000000000000000001")
    );
}

#[test]
fn vector_ip6_documentation_prefix() {
    assert_eq!(
        compile("/ip6/2001:db8::1/udp/53").unwrap(),
        hex_to_bytes("2920010db8000000000000000000000001110035")
    );
}

#[test]
fn vector_dns4_tcp() {
    // varint(54) ++ varint(11) ++ "example.com" ++ varint(6) ++ 443
    let mut expected = vec![54, 11];
    expected.extend_from_slice(b"example.com");
    expected.extend_from_slice(&[6, 0x01, 0xBB]);
    assert_eq!(compile("/dns4/example.com/tcp/443").unwrap(), expected);
}

#[test]
fn vector_dnsaddr_wss() {
    let mut expected = vec![56, 19];
    expected.extend_from_slice(b"bootstrap.libp2p.io");
    expected.extend_from_slice(&[0xDE, 0x03]);
    assert_eq!(compile("/dnsaddr/bootstrap.libp2p.io/wss").unwrap(), expected);
}

#[test]
fn vector_udp_and_ws_flags() {
    // udp code 17 = 0x11; ws 477 = [0xDD, 0x03].
    assert_eq!(
        compile("/ip4/8.8.8.8/udp/53/ws").unwrap(),
        hex_to_bytes("0408080808110035dd03")
    );
}

#[test]
fn vector_full_bootnode_record() {
    let peer = [9u8; 32];
    let peer_str = bs58::encode(&peer).into_string();
    let bytes = compile(&format!("/dns6/node.example.com/tcp/30333/p2p/{peer_str}")).unwrap();

    let mut expected = vec![55, 16];
    expected.extend_from_slice(b"node.example.com");
    expected.push(6);
    expected.extend_from_slice(&30333u16.to_be_bytes());
    expected.extend_from_slice(&[0xA5, 0x03, 32]);
    expected.extend_from_slice(&peer);
    assert_eq!(bytes, expected);
}

// ---------------------------------------------------------------------------
// Failure modes
// ---------------------------------------------------------------------------

#[test]
fn unknown_protocol_names_the_token() {
    assert_eq!(
        compile("/foo/bar"),
        Err(MultiaddrError::UnknownProtocol("foo".to_string()))
    );
    // The failure happens mid-walk too, after valid segments.
    assert_eq!(
        compile("/ip4/127.0.0.1/quic"),
        Err(MultiaddrError::UnknownProtocol("quic".to_string()))
    );
}

#[test]
fn error_yields_no_partial_output() {
    // Result is Err, never a truncated byte vector.
    let result = compile("/ip4/127.0.0.1/tcp/4001/foo/bar");
    assert!(result.is_err());
}

#[test]
fn double_ipv6_elision_is_malformed() {
    assert!(matches!(
        compile("/ip6/1::2::3"),
        Err(MultiaddrError::MalformedAddress(_))
    ));
}

// ---------------------------------------------------------------------------
// Strict vs permissive
// ---------------------------------------------------------------------------

#[test]
fn default_matches_historical_truncation() {
    // 300 -> 44, 70000 -> 0x1170: byte-identical to the original encoder.
    assert_eq!(
        compile("/ip4/300.0.0.1/tcp/70000").unwrap(),
        hex_to_bytes("042c000001061170")
    );
}

#[test]
fn strict_mode_rejects_what_default_truncates() {
    let strict = CompileOptions { strict: true };
    for addr in ["/ip4/300.0.0.1", "/tcp/70000", "/ip6/12345::", "/ip4/1.2.3"] {
        assert!(
            compile_with_options(addr, strict).is_err(),
            "strict should reject {addr}"
        );
        assert!(compile(addr).is_ok(), "default should accept {addr}");
    }
}

#[test]
fn strict_and_default_agree_on_well_formed_input() {
    let strict = CompileOptions { strict: true };
    let addrs = [
        "/ip4/255.255.255.255/tcp/65535",
        "/ip6/fe80::1/udp/0",
        "/dns4/example.com/tcp/443/wss",
    ];
    for addr in addrs {
        assert_eq!(
            compile_with_options(addr, strict).unwrap(),
            compile(addr).unwrap(),
            "modes diverge on {addr}"
        );
    }
}

// ---------------------------------------------------------------------------
// Compile then verify
// ---------------------------------------------------------------------------

#[test]
fn compiled_bootnode_addresses_verify() {
    let peer = [6u8; 32];
    let peer_str = bs58::encode(&peer).into_string();
    let addrs = [
        format!("/ip4/127.0.0.1/tcp/30303/p2p/{peer_str}"),
        format!("/ip6/::1/udp/8080/p2p/{peer_str}"),
        format!("/dns4/node.example.com/tcp/443/ws/p2p/{peer_str}"),
        format!("/dnsaddr/bootstrap.libp2p.io/p2p/{peer_str}"),
        format!("/ip4/10.0.0.1/wss/p2p/{peer_str}"),
    ];
    for addr in addrs {
        let bytes = compile(&addr).unwrap();
        let ma = Multiaddr::verify(&bytes).unwrap();
        assert_eq!(ma.as_bytes(), &bytes[..], "verify changed bytes for {addr}");
    }
}

#[test]
fn verify_rejects_addresses_without_peer() {
    let bytes = compile("/ip4/127.0.0.1/tcp/4001").unwrap();
    assert!(Multiaddr::verify(&bytes).is_err());
}

#[test]
fn extended_records_stay_valid() {
    let peer1 = [1u8; 32];
    let peer2 = [2u8; 38];
    let p1 = bs58::encode(&peer1).into_string();
    let p2 = bs58::encode(&peer2).into_string();

    let mut ma1: Multiaddr = format!("/ip4/192.168.0.1/tcp/8080/p2p/{p1}")
        .parse()
        .unwrap();
    let ma2: Multiaddr = format!("/ip4/10.0.0.1/tcp/30303/p2p/{p2}").parse().unwrap();

    ma1.extend(&ma2);
    assert!(Multiaddr::verify(ma1.as_bytes()).is_ok());
}

// ---------------------------------------------------------------------------
// Structural invariants
// ---------------------------------------------------------------------------

#[test]
fn every_code_is_varint_encoded_never_raw() {
    // p2p's code 421 does not fit one byte; the output must start with
    // its two-byte varint, not a raw 421 truncation.
    let peer_str = bs58::encode(&[0u8; 4]).into_string();
    let bytes = compile(&format!("/p2p/{peer_str}")).unwrap();
    let (code, read) = varint::read_u64(&bytes).unwrap();
    assert_eq!(code, 421);
    assert_eq!(read, 2);
}

#[test]
fn idempotence() {
    let addr = "/ip4/127.0.0.1/tcp/4001";
    let a = compile(addr).unwrap();
    let b = compile(addr).unwrap();
    assert_eq!(a, b);
}
