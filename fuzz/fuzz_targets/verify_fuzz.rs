#![no_main]
use libfuzzer_sys::fuzz_target;

use maddr::multiaddr::addr::Multiaddr;

fuzz_target!(|data: &[u8]| {
    // Untrusted binary input must be rejected cleanly, never panic.
    let _ = Multiaddr::verify(data);
});
