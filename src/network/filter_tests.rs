//! Tests for the address selection module.

use std::num::NonZeroUsize;

use super::filter::*;
use super::{AddressFamily, AddressRecord, InterfaceSnapshot};

// ============================================================================
// Test Fixtures
// ============================================================================

fn external(addr: &str) -> AddressRecord {
    AddressRecord::new(addr.parse().unwrap(), false)
}

fn internal(addr: &str) -> AddressRecord {
    AddressRecord::new(addr.parse().unwrap(), true)
}

/// `eth0` with one routable IPv4 address, `lo` with loopback IPv4.
fn eth0_and_loopback() -> InterfaceSnapshot {
    InterfaceSnapshot::new()
        .with_interface("eth0", [external("10.0.0.5")])
        .with_interface("lo", [internal("127.0.0.1")])
}

/// Two ethernet interfaces with one IPv4 address each.
fn two_ethernets() -> InterfaceSnapshot {
    InterfaceSnapshot::new()
        .with_interface("eth0", [external("10.0.0.5")])
        .with_interface("eth1", [external("10.0.0.6")])
}

/// A dual-stack host with several addresses per interface.
fn dual_stack() -> InterfaceSnapshot {
    InterfaceSnapshot::new()
        .with_interface("lo", [internal("127.0.0.1"), internal("::1")])
        .with_interface(
            "eth0",
            [
                external("192.168.1.10"),
                external("fe80::a00:27ff:fe4e:66a1"),
                external("192.168.1.11"),
            ],
        )
        .with_interface("wlan0", [external("10.1.0.7"), external("2001:db8::7")])
        .with_interface("docker0", [external("172.17.0.1")])
}

fn criteria(family: &str, interface: &str, include_local: bool, count: i64) -> SelectionCriteria {
    let family = match family {
        ALL => Selector::All,
        other => Selector::Exact(other.parse().unwrap()),
    };
    SelectionCriteria::new()
        .with_family_selector(family)
        .with_interface(interface)
        .with_include_local(include_local)
        .with_max_count(count)
}

// ============================================================================
// Selector Tests
// ============================================================================

mod selector {
    use super::*;

    #[test]
    fn all_matches_everything() {
        let selector = Selector::<String>::All;
        assert!(selector.matches(&"eth0".to_string()));
        assert!(selector.matches(&String::new()));
        assert!(selector.is_all());
    }

    #[test]
    fn exact_matches_only_equal_value() {
        let selector = Selector::exact(AddressFamily::V4);
        assert!(selector.matches(&AddressFamily::V4));
        assert!(!selector.matches(&AddressFamily::V6));
        assert!(!selector.is_all());
    }

    #[test]
    fn any_of_matches_every_listed_value_including_first() {
        let selector = Selector::any_of(["eth0".to_string(), "wlan0".to_string()]);
        assert!(selector.matches(&"eth0".to_string()));
        assert!(selector.matches(&"wlan0".to_string()));
        assert!(!selector.matches(&"lo".to_string()));
    }

    #[test]
    fn empty_any_of_matches_nothing() {
        let selector = Selector::<String>::any_of([]);
        assert!(!selector.matches(&"eth0".to_string()));
    }

    #[test]
    fn any_of_works_for_family_axis() {
        let selector = Selector::any_of([AddressFamily::V6]);
        assert!(selector.matches(&AddressFamily::V6));
        assert!(!selector.matches(&AddressFamily::V4));
    }

    #[test]
    fn matcher_agrees_with_matches() {
        let selector = Selector::any_of(["a".to_string(), "b".to_string()]);
        let predicate = selector.matcher::<String>();
        for candidate in ["a", "b", "c"] {
            let candidate = candidate.to_string();
            assert_eq!(predicate(&candidate), selector.matches(&candidate));
        }
    }

    #[test]
    fn name_treats_all_literal_as_wildcard() {
        assert_eq!(Selector::name("all"), Selector::All);
        assert_eq!(Selector::name("eth0"), Selector::Exact("eth0".to_string()));
    }

    #[test]
    fn string_selector_matches_borrowed_names() {
        let selector = Selector::any_of(["eth0".to_string()]);
        assert!(selector.matches("eth0"));
        assert!(!selector.matches("eth1"));
        assert!(Selector::<String>::All.matches("anything"));

        let by_name = selector.matcher::<str>();
        assert!(by_name("eth0"));
        assert!(!by_name("lo"));
    }

    #[test]
    fn exact_string_selector_matches_borrowed_name() {
        let selector = Selector::name("wlan0");
        assert!(selector.matches("wlan0"));
        assert!(!selector.matches("wlan1"));
    }

    #[test]
    fn default_is_all() {
        assert!(Selector::<AddressFamily>::default().is_all());
    }

    #[test]
    fn display_formats_each_shape() {
        assert_eq!(Selector::<String>::All.to_string(), "all");
        assert_eq!(Selector::exact(AddressFamily::V6).to_string(), "IPv6");
        assert_eq!(
            Selector::any_of(["eth0".to_string(), "lo".to_string()]).to_string(),
            "[eth0, lo]"
        );
    }
}

// ============================================================================
// MatchCount Tests
// ============================================================================

mod match_count {
    use super::*;

    #[test]
    fn positive_request_is_limited() {
        assert_eq!(
            MatchCount::from_requested(5),
            MatchCount::Limited(NonZeroUsize::new(5).unwrap())
        );
    }

    #[test]
    fn zero_and_negative_are_unbounded() {
        assert_eq!(MatchCount::from_requested(0), MatchCount::Unbounded);
        assert_eq!(MatchCount::from_requested(-1), MatchCount::Unbounded);
        assert_eq!(MatchCount::from_requested(i64::MIN), MatchCount::Unbounded);
    }

    #[test]
    fn default_is_one() {
        assert_eq!(MatchCount::default().limit(), Some(1));
    }

    #[test]
    fn unbounded_has_no_limit() {
        assert_eq!(MatchCount::Unbounded.limit(), None);
        assert_eq!(MatchCount::Unbounded.to_string(), "unbounded");
    }
}

// ============================================================================
// SelectionCriteria Tests
// ============================================================================

mod selection_criteria {
    use super::*;

    #[test]
    fn defaults_match_query_defaults() {
        let criteria = SelectionCriteria::default();
        assert!(criteria.family.is_all());
        assert!(criteria.interface.is_all());
        assert!(!criteria.include_local);
        assert_eq!(criteria.max_count.limit(), Some(1));
    }

    #[test]
    fn with_interfaces_builds_any_of() {
        let criteria = SelectionCriteria::new().with_interfaces(["eth0", "wlan0"]);
        assert_eq!(
            criteria.interface,
            Selector::AnyOf(vec!["eth0".to_string(), "wlan0".to_string()])
        );
    }

    #[test]
    fn locality_rule() {
        let excluding = SelectionCriteria::new();
        let including = SelectionCriteria::new().with_include_local(true);

        assert!(excluding.accepts_locality(&external("10.0.0.5")));
        assert!(!excluding.accepts_locality(&internal("127.0.0.1")));
        assert!(including.accepts_locality(&external("10.0.0.5")));
        assert!(including.accepts_locality(&internal("127.0.0.1")));
    }

    #[test]
    fn display_lists_all_fields() {
        let text = SelectionCriteria::new()
            .with_family(AddressFamily::V4)
            .with_max_count(0)
            .to_string();
        assert!(text.contains("family: IPv4"));
        assert!(text.contains("interface: all"));
        assert!(text.contains("max_count: unbounded"));
    }
}

// ============================================================================
// Matcher Tests
// ============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn first_routable_ipv4() {
        let result = select(&eth0_and_loopback(), &criteria("IPv4", "all", false, 1));
        assert_eq!(result, ["10.0.0.5"]);
    }

    #[test]
    fn unbounded_with_local() {
        let result = select(&eth0_and_loopback(), &criteria("IPv4", "all", true, -1));
        assert_eq!(result, ["10.0.0.5", "127.0.0.1"]);
    }

    #[test]
    fn no_ipv6_present() {
        let result = select(&eth0_and_loopback(), &criteria("IPv6", "all", false, 1));
        assert!(result.is_empty());
    }

    #[test]
    fn single_interface_by_name() {
        let result = select(&two_ethernets(), &criteria("all", "eth1", false, 5));
        assert_eq!(result, ["10.0.0.6"]);
    }

    #[test]
    fn zero_count_behaves_like_negative() {
        for snapshot in [eth0_and_loopback(), two_ethernets(), dual_stack()] {
            for include_local in [false, true] {
                assert_eq!(
                    select(&snapshot, &criteria("all", "all", include_local, 0)),
                    select(&snapshot, &criteria("all", "all", include_local, -1)),
                );
            }
        }
    }
}

mod matcher {
    use super::*;

    #[test]
    fn empty_snapshot_yields_empty_list() {
        let result = select(&InterfaceSnapshot::new(), &criteria("all", "all", true, -1));
        assert!(result.is_empty());
    }

    #[test]
    fn preserves_interface_then_record_order() {
        let result = select(&dual_stack(), &criteria("all", "all", false, -1));
        assert_eq!(
            result,
            [
                "192.168.1.10",
                "fe80::a00:27ff:fe4e:66a1",
                "192.168.1.11",
                "10.1.0.7",
                "2001:db8::7",
                "172.17.0.1",
            ]
        );
    }

    #[test]
    fn count_takes_first_matches_in_order() {
        let result = select(&dual_stack(), &criteria("IPv4", "all", false, 2));
        assert_eq!(result, ["192.168.1.10", "192.168.1.11"]);
    }

    #[test]
    fn count_boundary_spans_interfaces() {
        let result = select(&dual_stack(), &criteria("IPv4", "all", false, 3));
        assert_eq!(result, ["192.168.1.10", "192.168.1.11", "10.1.0.7"]);
    }

    #[test]
    fn count_larger_than_matches_returns_all_matches() {
        let result = select(&dual_stack(), &criteria("IPv6", "all", true, 100));
        assert_eq!(result, ["::1", "fe80::a00:27ff:fe4e:66a1", "2001:db8::7"]);
    }

    #[test]
    fn local_excluded_by_default() {
        let result = select(&dual_stack(), &SelectionCriteria::new().with_max_count(-1));
        assert!(!result.contains(&"127.0.0.1".to_string()));
        assert!(!result.contains(&"::1".to_string()));
    }

    #[test]
    fn default_criteria_return_one_address() {
        let result = select(&dual_stack(), &SelectionCriteria::default());
        assert_eq!(result, ["192.168.1.10"]);
    }

    #[test]
    fn unmatched_interface_is_skipped_entirely() {
        let result = select(&eth0_and_loopback(), &criteria("IPv4", "lo", false, -1));
        assert!(result.is_empty());

        let result = select(&eth0_and_loopback(), &criteria("IPv4", "lo", true, -1));
        assert_eq!(result, ["127.0.0.1"]);
    }

    #[test]
    fn interface_list_selects_members_in_snapshot_order() {
        let criteria = SelectionCriteria::new()
            .with_interfaces(["docker0", "eth0"])
            .with_family(AddressFamily::V4)
            .with_max_count(-1);
        let result = select(&dual_stack(), &criteria);
        assert_eq!(result, ["192.168.1.10", "192.168.1.11", "172.17.0.1"]);
    }

    #[test]
    fn unknown_interface_yields_empty_list() {
        let result = select(&dual_stack(), &criteria("all", "tun0", true, -1));
        assert!(result.is_empty());
    }

    #[test]
    fn family_list_selector() {
        let criteria = SelectionCriteria::new()
            .with_family_selector(Selector::any_of([AddressFamily::V6]))
            .with_interface("wlan0")
            .with_max_count(-1);
        assert_eq!(select(&dual_stack(), &criteria), ["2001:db8::7"]);
    }

    #[test]
    fn records_iterator_stops_at_limit() {
        let criteria = criteria("all", "all", true, 2);
        let matcher = Matcher::new(&criteria);
        let snapshot = dual_stack();

        let records: Vec<_> = matcher.records(&snapshot).collect();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.is_internal));
        assert_eq!(matcher.criteria(), &criteria);
    }

    #[test]
    fn repeated_selection_is_identical() {
        let snapshot = dual_stack();
        let criteria = criteria("all", "all", false, 4);
        assert_eq!(select(&snapshot, &criteria), select(&snapshot, &criteria));
    }

    #[test]
    fn every_result_satisfies_all_predicates() {
        let snapshot = dual_stack();
        for family in ["all", "IPv4", "IPv6"] {
            for interface in ["all", "lo", "eth0", "wlan0"] {
                for include_local in [false, true] {
                    for count in [-1, 0, 1, 2, 10] {
                        let criteria = criteria(family, interface, include_local, count);
                        let records: Vec<_> = Matcher::new(&criteria).records(&snapshot).collect();

                        if let Some(limit) = criteria.max_count.limit() {
                            assert!(records.len() <= limit);
                        }
                        for record in records {
                            let owner = snapshot
                                .iter()
                                .find(|e| e.records.contains(record))
                                .unwrap();
                            assert!(interface == ALL || owner.name == interface);
                            assert!(family == ALL || record.family.to_string() == family);
                            assert!(include_local || !record.is_internal);
                        }
                    }
                }
            }
        }
    }
}
