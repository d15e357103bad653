use super::*;

#[test]
fn status_error_uses_string_message() {
    let err = status_error(401, r#"{"message":"Invalid credentials"}"#);
    assert_eq!(err, ApiError::Status { status: 401, message: Some("Invalid credentials".to_owned()) });
    assert_eq!(err.user_message("Login failed"), "Invalid credentials");
}

#[test]
fn status_error_joins_message_list() {
    let err = status_error(400, r#"{"message":["email must be an email","password too short"]}"#);
    assert_eq!(err.user_message("x"), "email must be an email, password too short");
}

#[test]
fn status_error_without_json_body_falls_back() {
    let err = status_error(502, "Bad Gateway");
    assert_eq!(err, ApiError::Status { status: 502, message: None });
    assert_eq!(err.user_message("Failed to add user"), "Failed to add user");
}

#[test]
fn network_errors_use_fallback_text() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(err.user_message("Failed to update user"), "Failed to update user");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_outside_browser_are_unavailable() {
    let result = block_on_ready(Api::anonymous().state_list());
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Minimal executor for futures that complete on first poll.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("future did not complete immediately"),
    }
}
