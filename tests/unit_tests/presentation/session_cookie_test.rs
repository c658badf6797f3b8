use mathcast::presentation::session::find_cookie;

#[test]
fn given_cookie_header_when_finding_named_cookie_then_returns_value() {
    let header = "theme=dark; mathcast_session=abc-123; lang=en";
    assert_eq!(find_cookie(header, "mathcast_session"), Some("abc-123"));
}

#[test]
fn given_cookie_header_without_name_when_finding_then_returns_none() {
    assert_eq!(find_cookie("theme=dark", "mathcast_session"), None);
}

#[test]
fn given_cookie_with_similar_prefix_when_finding_then_does_not_match() {
    assert_eq!(find_cookie("mathcast_session_old=1", "mathcast_session"), None);
}
