//! Fuzz target for the dual-address string parser.
//!
//! Run with: cargo +nightly fuzz run fuzz_address_parser
//!
//! Feeds arbitrary strings to `parse_address()` and checks the invariants a
//! successful parse must uphold. Hostname lookup is deliberately not
//! exercised so runs stay off the network.

#![no_main]

use libfuzzer_sys::fuzz_target;
use xray_daemoncfg::Protocol;
use xray_daemoncfg::parser::{ParsedAddress, RawAddress, parse_address};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    match parse_address(s) {
        Ok(None) => assert!(s.is_empty()),
        Ok(Some(ParsedAddress::Bare(addr))) => {
            assert_eq!(addr.matches(':').count(), 1);
        }
        Ok(Some(parsed)) => {
            for protocol in [Protocol::Udp, Protocol::Tcp] {
                if let RawAddress::Given(raw) = parsed.raw(protocol) {
                    assert_eq!(raw.matches(':').count(), 1);
                    assert!(!raw.contains(char::is_whitespace));
                }
            }
        }
        Err(_) => {}
    }
});
