use super::*;

#[test]
fn join_trims_trailing_slash() {
    assert_eq!(join("http://h:3000/", LOGIN), "http://h:3000/api/auth/login");
    assert_eq!(join("http://h:3000", LOGIN), "http://h:3000/api/auth/login");
}

#[test]
fn join_with_empty_base_is_same_origin() {
    assert_eq!(join("", GET_USER_STATUS), "/api/userlist/get-user-status");
}
