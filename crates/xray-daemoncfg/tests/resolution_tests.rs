//! End-to-end resolution scenarios across the strict and lenient paths.

use pretty_assertions::assert_eq;
use xray_daemoncfg::{
    DaemonEndpoints, DaemonResolver, MapEnv, Protocol, ResolveError, resolve_from_string,
};
use xray_daemoncfg_test_utils::fixtures::{
    TCP_ADDR, UDP_ADDR, dual, dual_reversed, endpoints, shared_endpoints,
};
use xray_daemoncfg_test_utils::tracing_setup::init_test_tracing;

fn with_env(value: &str) -> DaemonResolver<MapEnv> {
    DaemonResolver::with_env(MapEnv::new().with_daemon_address(value))
}

fn without_env() -> DaemonResolver<MapEnv> {
    DaemonResolver::with_env(MapEnv::new())
}

#[test]
fn bare_address_applies_to_both_protocols() {
    let resolved = resolve_from_string("127.0.0.1:2000").unwrap();
    assert_eq!(resolved, Some(shared_endpoints("127.0.0.1:2000")));
}

#[test]
fn tagged_addresses_resolve_in_any_order() {
    let expected = Some(endpoints(UDP_ADDR, TCP_ADDR));
    assert_eq!(resolve_from_string(&dual(UDP_ADDR, TCP_ADDR)).unwrap(), expected);
    assert_eq!(
        resolve_from_string(&dual_reversed(UDP_ADDR, TCP_ADDR)).unwrap(),
        expected
    );
}

#[test]
fn tagged_parts_match_individual_validation() {
    for (udp, tcp) in [
        ("127.0.0.1:4000", "127.0.0.1:5000"),
        ("10.1.2.3:2000", "10.1.2.4:2000"),
        ("127.0.0.1:65535", "127.0.0.1:1"),
    ] {
        let resolved = resolve_from_string(&dual(udp, tcp)).unwrap().unwrap();
        assert_eq!(
            resolved.udp_addr(),
            xray_daemoncfg::validate::validate_address(udp, Protocol::Udp).unwrap()
        );
        assert_eq!(
            resolved.tcp_addr(),
            xray_daemoncfg::validate::validate_address(tcp, Protocol::Tcp).unwrap()
        );
    }
}

#[test]
fn duplicate_udp_tag_is_an_error() {
    let result = resolve_from_string(&format!("udp:{UDP_ADDR} udp:{TCP_ADDR}"));
    assert!(matches!(result, Err(ResolveError::Format { .. })));
}

#[test]
fn duplicate_tcp_tag_is_an_error() {
    let result = resolve_from_string(&format!("tcp:{UDP_ADDR} tcp:{TCP_ADDR}"));
    assert!(matches!(result, Err(ResolveError::Format { .. })));
}

#[test]
fn empty_string_is_neither_endpoints_nor_error() {
    assert_eq!(resolve_from_string("").unwrap(), None);
}

#[test]
fn single_tag_without_other_is_incomplete() {
    let result = resolve_from_string(&format!("udp:{UDP_ADDR}"));
    assert!(matches!(
        result,
        Err(ResolveError::IncompleteAddress {
            missing: Protocol::Tcp,
            ..
        })
    ));
}

#[test]
fn unresolvable_ipv4_literals_are_errors() {
    assert!(resolve_from_string(&dual("127.0.02:2001", TCP_ADDR)).is_err());
    assert!(resolve_from_string(&dual(UDP_ADDR, "127.0.a.1:2000")).is_err());
}

#[test]
fn lenient_path_without_inputs_returns_defaults() {
    init_test_tracing();
    assert_eq!(without_env().resolve_or_default(""), DaemonEndpoints::default());
    assert_eq!(
        DaemonEndpoints::default(),
        shared_endpoints("127.0.0.1:2000")
    );
}

#[test]
fn valid_env_matches_direct_resolution_regardless_of_default() {
    init_test_tracing();
    let env_value = dual_reversed("127.0.0.1:4000", "127.0.0.1:5000");
    let direct = resolve_from_string(&env_value).unwrap().unwrap();
    let dual_default = dual(UDP_ADDR, TCP_ADDR);

    for default in ["", "127.0.0.9:9", "udp:bogus", dual_default.as_str()] {
        assert_eq!(with_env(&env_value).resolve_or_default(default), direct);
    }
}

#[test]
fn invalid_env_degrades_to_defaults_not_to_argument() {
    init_test_tracing();
    let resolved = with_env("tcp:127.0.0.5:2001 tcp:127.0.0.5:2001")
        .resolve_or_default(&dual(UDP_ADDR, TCP_ADDR));
    assert_eq!(resolved, DaemonEndpoints::default());
}

#[test]
fn whitespace_env_wins_and_degrades_to_defaults() {
    init_test_tracing();
    let resolved = with_env(" ").resolve_or_default(&dual(UDP_ADDR, TCP_ADDR));
    assert_eq!(resolved, DaemonEndpoints::default());
    assert!(resolve_from_string(" ").is_err());
}

#[test]
fn displayed_endpoints_parse_back() {
    let resolved = endpoints(UDP_ADDR, TCP_ADDR);
    let reparsed: DaemonEndpoints = resolved.to_string().parse().unwrap();
    assert_eq!(reparsed, resolved);
}

#[test]
fn strict_override_prefers_env() {
    init_test_tracing();
    let resolved = with_env(&dual(UDP_ADDR, TCP_ADDR))
        .resolve_with_override("tcp:127.0.0.5:2001 udp:127.0.0.5:2001")
        .unwrap();
    assert_eq!(resolved, Some(endpoints(UDP_ADDR, TCP_ADDR)));
}

#[test]
fn strict_override_with_bare_env() {
    let resolved = with_env("127.0.0.1:2000")
        .resolve_with_override("127.0.0.1:2001")
        .unwrap();
    assert_eq!(resolved, Some(shared_endpoints("127.0.0.1:2000")));
}

#[test]
fn strict_override_reports_invalid_env() {
    let result = with_env("tcp:127.0.0.5:2001 tcp:127.0.0.5:2001")
        .resolve_with_override(&dual(UDP_ADDR, TCP_ADDR));
    assert!(result.is_err());
}

#[test]
fn resolver_is_shareable_across_threads() {
    let resolver = std::sync::Arc::new(with_env(&dual(UDP_ADDR, TCP_ADDR)));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let resolver = std::sync::Arc::clone(&resolver);
            std::thread::spawn(move || resolver.resolve_or_default(""))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), endpoints(UDP_ADDR, TCP_ADDR));
    }
}
