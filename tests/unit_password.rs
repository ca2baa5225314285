use learnlive::learnlive_core::{hash_password, verify_password};

#[test]
fn test_hash_password_success() {
    let password = "testpassword123";
    let hash = hash_password(password).unwrap();

    assert!(!hash.is_empty());
    assert_ne!(hash, password);
}

#[test]
fn test_verify_password_correct() {
    let hash = hash_password("correctpassword1").unwrap();
    assert!(verify_password("correctpassword1", &hash).unwrap());
}

#[test]
fn test_verify_password_incorrect() {
    let hash = hash_password("correctpassword1").unwrap();
    assert!(!verify_password("wrongpassword1", &hash).unwrap());
}

#[test]
fn test_verify_password_invalid_hash() {
    let result = verify_password("testpassword1", "not_a_valid_bcrypt_hash");
    assert!(result.is_err());
}

#[test]
fn test_same_password_hashes_differently() {
    let first = hash_password("samepassword1").unwrap();
    let second = hash_password("samepassword1").unwrap();

    assert_ne!(first, second);
    assert!(verify_password("samepassword1", &first).unwrap());
    assert!(verify_password("samepassword1", &second).unwrap());
}
