use super::*;

#[test]
fn validate_sign_in_input_trims_email_only() {
    assert_eq!(
        validate_sign_in_input("  a@b.com ", " secret "),
        Ok(("a@b.com".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_sign_in_input_requires_both_fields() {
    assert_eq!(validate_sign_in_input("   ", "secret"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_sign_in_input("a@b.com", ""), Err(MISSING_CREDENTIALS));
}

#[test]
fn failure_message_prefers_server_error() {
    let rejected = ApiError::Status { status: 401, message: Some("Invalid credentials".to_owned()) };
    assert_eq!(sign_in_failure_message(&rejected), "Invalid credentials");
    let bare = ApiError::Status { status: 500, message: None };
    assert_eq!(sign_in_failure_message(&bare), "Login failed.");
}

#[test]
fn failure_message_for_unreachable_backend() {
    for err in [ApiError::Transport("refused".to_owned()), ApiError::Decode("eof".to_owned()), ApiError::Unavailable] {
        assert_eq!(sign_in_failure_message(&err), "Could not sign in. Is the backend running?");
    }
}

#[test]
fn password_toggle_flips_input_type() {
    assert_eq!(password_input_type(false), "password");
    assert_eq!(password_input_type(true), "text");
}
