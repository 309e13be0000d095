use folio::query_input::QueryInput;
use folio::routes::Route;

#[test]
fn test_submit_trims_and_encodes() {
    let input = QueryInput::with_value("  rust concepts  ");
    let navigation = input.submit().expect("non-blank input should navigate");
    assert_eq!(navigation.route, Route::Search);
    assert_eq!(navigation.location(), "/search?q=rust%20concepts");
}

#[test]
fn test_submit_blank_is_noop() {
    for blank in ["", " ", "\t", "  \n  "] {
        let input = QueryInput::with_value(blank);
        assert!(input.submit().is_none(), "{blank:?} should not navigate");
    }
}

#[test]
fn test_enter_key_submits() {
    let mut input = QueryInput::new();
    input.set_value("tokio");
    assert_eq!(
        input.key_down("Enter").map(|n| n.location()),
        Some("/search?q=tokio".to_string())
    );
    assert!(input.key_down("a").is_none());
    assert!(input.key_down("Escape").is_none());
}

#[test]
fn test_enter_on_blank_is_noop() {
    let input = QueryInput::with_value("   ");
    assert!(input.key_down("Enter").is_none());
}

#[test]
fn test_value_is_kept_untrimmed() {
    let mut input = QueryInput::new();
    assert_eq!(input.value(), "");
    input.set_value("  spaced  ");
    assert_eq!(input.value(), "  spaced  ");
}

#[test]
fn test_special_characters_are_percent_encoded() {
    let input = QueryInput::with_value("a/b?c=d&e#f");
    assert_eq!(
        input.submit().unwrap().location(),
        "/search?q=a%2Fb%3Fc%3Dd%26e%23f"
    );
}
