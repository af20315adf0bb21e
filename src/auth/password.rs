use crate::error::Error;

pub fn hash(password: &str) -> Result<String, Error> {
    Ok(bcrypt::hash(password, bcrypt::DEFAULT_COST)?)
}

pub fn verify(password: &str, hashed: &str) -> Result<bool, Error> {
    Ok(bcrypt::verify(password, hashed)?)
}

#[test]
fn hash_round_trips() {
    let hashed = hash("correct horse battery staple").unwrap();

    assert!(verify("correct horse battery staple", &hashed).unwrap());
    assert!(!verify("correct horse battery", &hashed).unwrap());
}
