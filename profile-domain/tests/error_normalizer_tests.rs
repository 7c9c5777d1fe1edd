use profile_domain::domain::{
    errors::{DomainError, IdentityError},
    normalize::ErrorNormalizer,
};

fn provider_error(status: u16, body: &str) -> IdentityError {
    IdentityError::Http {
        status,
        body: body.to_string(),
    }
}

#[test]
fn recognized_messages_map_to_their_codes() {
    let normalizer = ErrorNormalizer::new();

    let cases = [
        ("User exists with same username", "USER_EXISTED"),
        ("User exists with same email", "EMAIL_EXISTED"),
        ("User name is missing", "USERNAME_IS_MISSING"),
    ];

    for (message, code) in cases {
        let body = format!(r#"{{"errorMessage":"{}"}}"#, message);
        let err = normalizer.normalize(&provider_error(409, &body));
        assert_eq!(err.code(), code, "message {:?}", message);
    }
}

#[test]
fn unrecognized_message_maps_to_uncategorized() {
    let normalizer = ErrorNormalizer::new();

    let err = normalizer.normalize(&provider_error(
        400,
        r#"{"errorMessage":"Password policy not met"}"#,
    ));

    assert!(matches!(err, DomainError::Uncategorized));
    assert_eq!(err.code(), "UNCATEGORIZED_EXCEPTION");
}

#[test]
fn message_match_is_exact() {
    let normalizer = ErrorNormalizer::new();

    // casing and whitespace both disqualify a match
    let err = normalizer.normalize(&provider_error(
        409,
        r#"{"errorMessage":"user exists with same username"}"#,
    ));

    assert!(matches!(err, DomainError::Uncategorized));
}

#[test]
fn unparseable_body_maps_to_uncategorized() {
    let normalizer = ErrorNormalizer::new();

    let err = normalizer.normalize(&provider_error(500, "<html>Internal Server Error</html>"));

    assert!(matches!(err, DomainError::Uncategorized));
}

#[test]
fn body_without_error_message_maps_to_uncategorized() {
    let normalizer = ErrorNormalizer::new();

    let err = normalizer.normalize(&provider_error(401, r#"{"error":"invalid_token"}"#));

    assert!(matches!(err, DomainError::Uncategorized));
}

#[test]
fn transport_failures_map_to_uncategorized() {
    let normalizer = ErrorNormalizer::new();

    let err = normalizer.normalize(&IdentityError::Transport {
        reason: "connection refused".to_string(),
    });

    assert!(matches!(err, DomainError::Uncategorized));
}

#[test]
fn status_code_does_not_influence_the_mapping() {
    let normalizer = ErrorNormalizer::new();
    let body = r#"{"errorMessage":"User exists with same email"}"#;

    for status in [400, 409, 500] {
        let err = normalizer.normalize(&provider_error(status, body));
        assert!(matches!(err, DomainError::EmailExisted));
    }
}
