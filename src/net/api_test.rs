use super::*;

#[test]
fn bearer_value_formats_authorization_header() {
    assert_eq!(bearer_value("t-123"), "Bearer t-123");
}

#[test]
fn conversation_messages_endpoint_formats_expected_path() {
    assert_eq!(
        conversation_messages_endpoint("c-9"),
        "/api/conversations/c-9/messages"
    );
}

#[test]
fn user_search_endpoint_formats_query() {
    assert_eq!(user_search_endpoint("ann%20b"), "/api/users/search?q=ann%20b");
}

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(401), "login failed: 401");
}

#[test]
fn register_failed_message_formats_status() {
    assert_eq!(register_failed_message(409), "registration failed: 409");
}

#[test]
fn reset_failed_message_formats_status() {
    assert_eq!(reset_failed_message(400), "password reset failed: 400");
}

#[test]
fn send_failed_message_formats_status() {
    assert_eq!(send_failed_message(503), "message send failed: 503");
}

#[test]
fn profile_update_failed_message_formats_status() {
    assert_eq!(profile_update_failed_message(422), "profile update failed: 422");
}

#[test]
fn conversation_create_failed_message_formats_status() {
    assert_eq!(
        conversation_create_failed_message(404),
        "conversation create failed: 404"
    );
}
