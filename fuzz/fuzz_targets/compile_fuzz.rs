#![no_main]
use libfuzzer_sys::fuzz_target;

use maddr::multiaddr::encoder::{CompileOptions, compile_with_options};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    // Neither mode may panic on arbitrary text.
    let _ = compile_with_options(&text, CompileOptions { strict: false });
    let _ = compile_with_options(&text, CompileOptions { strict: true });
});
