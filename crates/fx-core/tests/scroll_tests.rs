// Host-side tests for reveal, parallax and page-transition decisions.

use fx_core::scroll::*;

fn here() -> UrlParts {
    UrlParts {
        origin: "https://md.example".into(),
        pathname: "/stories".into(),
        search: "".into(),
        hash: "".into(),
    }
}

fn link(href: &str) -> LinkInfo {
    LinkInfo {
        href: Some(href.into()),
        ..LinkInfo::default()
    }
}

#[test]
fn reduced_motion_reveals_immediately() {
    assert_eq!(RevealStrategy::choose(true, true), RevealStrategy::Immediate);
    assert_eq!(RevealStrategy::choose(false, false), RevealStrategy::Immediate);
    assert_eq!(RevealStrategy::choose(true, false), RevealStrategy::Observe);
}

#[test]
fn parallax_speed_defaults_on_bad_input() {
    assert_eq!(parallax_speed(Some("0.25")), 0.25);
    assert_eq!(parallax_speed(Some(" -1 ")), -1.0);
    assert_eq!(parallax_speed(Some("0")), 0.5);
    assert_eq!(parallax_speed(Some("fast")), 0.5);
    assert_eq!(parallax_speed(None), 0.5);
}

#[test]
fn parallax_transform_is_css_translate() {
    assert_eq!(parallax_transform(200.0, 0.5), "translateY(100px)");
}

#[test]
fn plain_internal_link_is_a_candidate() {
    let l = link("/about");
    assert_eq!(transition_href(&ClickInfo::default(), &l), Some("/about"));
}

#[test]
fn modified_or_secondary_clicks_are_ignored() {
    let l = link("/about");
    let ctrl = ClickInfo {
        ctrl: true,
        ..ClickInfo::default()
    };
    let middle = ClickInfo {
        button: 1,
        ..ClickInfo::default()
    };
    let prevented = ClickInfo {
        default_prevented: true,
        ..ClickInfo::default()
    };
    assert_eq!(transition_href(&ctrl, &l), None);
    assert_eq!(transition_href(&middle, &l), None);
    assert_eq!(transition_href(&prevented, &l), None);
}

#[test]
fn opted_out_links_are_ignored() {
    let click = ClickInfo::default();
    for l in [
        LinkInfo { use_ajax: true, ..link("/a") },
        LinkInfo { download: true, ..link("/a") },
        LinkInfo { no_transition: true, ..link("/a") },
        LinkInfo { target: Some("_blank".into()), ..link("/a") },
        link(""),
        link("#top"),
        link("mailto:someone@example.com"),
        link("javascript:void(0)"),
        LinkInfo::default(),
    ] {
        assert_eq!(transition_href(&click, &l), None, "{l:?}");
    }
}

#[test]
fn self_target_is_allowed() {
    let l = LinkInfo {
        target: Some("_self".into()),
        ..link("/a")
    };
    assert!(transition_href(&ClickInfo::default(), &l).is_some());
}

#[test]
fn cross_origin_destinations_are_ignored() {
    let dest = UrlParts {
        origin: "https://elsewhere.example".into(),
        ..here()
    };
    assert!(!destination_allows_transition(&dest, &here()));
}

#[test]
fn same_page_hash_hops_are_ignored() {
    let dest = UrlParts {
        hash: "#chapter-2".into(),
        ..here()
    };
    assert!(!destination_allows_transition(&dest, &here()));
}

#[test]
fn other_pages_transition() {
    let dest = UrlParts {
        pathname: "/about".into(),
        hash: "#team".into(),
        ..here()
    };
    assert!(destination_allows_transition(&dest, &here()));
    assert!(destination_allows_transition(&here(), &here()));
}
