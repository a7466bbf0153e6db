use gomypay::{Config, PaymentFacade, ResponseMode};

fn config() -> Config {
    let mut config = Config::new("ST001", "C-100", "sk_test");
    config.return_url = Some("https://merchant.example/return".to_string());
    config.callback_url = Some("https://merchant.example/callback".to_string());
    config
}

#[test]
fn test_account_fields_are_merged() {
    let mut facade = PaymentFacade::new(config(), "credit-card").unwrap();
    facade.configure([("Order_No", "ORD-1"), ("Amount", "500")]);

    let payload = facade.request_payload(ResponseMode::Default);

    assert_eq!(payload.get("CustomerId").map(String::as_str), Some("C-100"));
    assert_eq!(payload.get("Send_Type").map(String::as_str), Some("0"));
    assert_eq!(payload.get("Order_No").map(String::as_str), Some("ORD-1"));
    assert_eq!(payload.get("Amount").map(String::as_str), Some("500"));
}

#[test]
fn test_urls_default_from_config_when_omitted() {
    let facade = PaymentFacade::new(config(), "credit-card").unwrap();

    let payload = facade.request_payload(ResponseMode::Default);

    assert_eq!(
        payload.get("Return_url").map(String::as_str),
        Some("https://merchant.example/return")
    );
    assert_eq!(
        payload.get("Callback_Url").map(String::as_str),
        Some("https://merchant.example/callback")
    );
}

#[test]
fn test_caller_supplied_urls_always_win() {
    let mut facade = PaymentFacade::new(config(), "credit-card").unwrap();
    facade.configure([
        ("Return_url", "https://override.example/r"),
        ("Callback_Url", "https://override.example/c"),
    ]);

    let payload = facade.request_payload(ResponseMode::Json);

    assert_eq!(
        payload.get("Return_url").map(String::as_str),
        Some("https://override.example/r")
    );
    assert_eq!(
        payload.get("Callback_Url").map(String::as_str),
        Some("https://override.example/c")
    );
}

#[test]
fn test_urls_absent_when_config_has_no_defaults() {
    let facade = PaymentFacade::new(Config::new("ST001", "C-100", "sk_test"), "barcode").unwrap();

    let payload = facade.request_payload(ResponseMode::Default);

    assert!(!payload.contains_key("Return_url"));
    assert!(!payload.contains_key("Callback_Url"));
}

#[test]
fn test_json_mode_requests_checksum_response() {
    let facade = PaymentFacade::new(config(), "virtual-account").unwrap();

    let payload = facade.request_payload(ResponseMode::Json);

    assert_eq!(payload.get("e_return").map(String::as_str), Some("1"));
    assert_eq!(payload.get("Str_Check").map(String::as_str), Some("sk_test"));
}

#[test]
fn test_default_mode_never_requests_checksum() {
    let mut facade = PaymentFacade::new(config(), "virtual-account").unwrap();
    facade.configure([("Order_No", "ORD-2")]);

    let payload = facade.request_payload(ResponseMode::Default);

    assert!(!payload.contains_key("e_return"));
    assert!(!payload.contains_key("Str_Check"));
}

#[test]
fn test_assembly_is_repeatable() {
    let mut facade = PaymentFacade::new(config(), "line-pay").unwrap();
    facade.configure([("Order_No", "ORD-3"), ("Amount", "120")]);

    // each call assembles a fresh, identical payload; nothing is cached
    let first = facade.request_payload(ResponseMode::Json);
    let second = facade.request_payload(ResponseMode::Json);
    assert_eq!(first, second);
}

#[test]
fn test_configure_chains_and_accumulates() {
    let mut facade = PaymentFacade::new(config(), "web-atm").unwrap();
    facade
        .configure([("Order_No", "ORD-4")])
        .configure([("Amount", "990")]);

    let payload = facade.request_payload(ResponseMode::Default);

    assert_eq!(payload.get("Order_No").map(String::as_str), Some("ORD-4"));
    assert_eq!(payload.get("Amount").map(String::as_str), Some("990"));
}
