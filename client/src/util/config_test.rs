use super::*;

#[test]
fn meta_content_with_valid_url_sets_endpoint() {
    let cfg = ClientConfig::from_meta_content(Some("https://leads.example.ru/submit"));
    assert_eq!(cfg.endpoint_url(), Some("https://leads.example.ru/submit"));
}

#[test]
fn empty_or_invalid_meta_content_leaves_endpoint_unset() {
    assert_eq!(ClientConfig::from_meta_content(Some("")), ClientConfig::default());
    assert_eq!(ClientConfig::from_meta_content(Some("not a url")), ClientConfig::default());
    assert_eq!(ClientConfig::from_meta_content(None).endpoint(), None);
}

#[test]
fn from_document_without_browser_is_unconfigured() {
    assert_eq!(ClientConfig::from_document(), ClientConfig::default());
}
