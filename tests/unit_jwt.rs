use axum::http::StatusCode;
use learnlive::learnlive_auth::{create_session_token, session_subject, verify_session_token};
use learnlive::learnlive_config::JwtConfig;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        cookie_name: "learn_live_JWT".to_string(),
        session_expiry: 3600,
    }
}

#[test]
fn test_session_token_round_trip() {
    let jwt_config = get_test_jwt_config();
    let subject = session_subject("Doe", "Jane", "jdoe", 17);

    let token = create_session_token(17, &subject, &jwt_config).unwrap();
    let claims = verify_session_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.iss, "17");
    assert_eq!(claims.person_id().unwrap(), 17);
    assert_eq!(claims.sub, "Doe Jane (jdoe ID: 17)");
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn test_token_from_other_secret_is_rejected() {
    let token = create_session_token(1, "x", &get_test_jwt_config()).unwrap();

    let other = JwtConfig {
        secret: "another_secret".to_string(),
        ..get_test_jwt_config()
    };
    let err = verify_session_token(&token, &other).unwrap_err();

    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
}

#[test]
fn test_malformed_token_is_rejected() {
    let err = verify_session_token("not.a.jwt", &get_test_jwt_config()).unwrap_err();
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert_eq!(err.error.to_string(), "Unauthenticated");
}
