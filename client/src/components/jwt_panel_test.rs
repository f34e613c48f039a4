use super::*;

#[test]
fn verification_label_reads_each_outcome() {
    assert_eq!(verification_label(&Ok(true)), "Signature valid");
    assert_eq!(verification_label(&Ok(false)), "Signature does not match");
    assert_eq!(
        verification_label(&Err(JwtError::UnsupportedAlgorithm("RS256".into()))),
        "unsupported algorithm for verification: RS256"
    );
}

#[test]
fn expiry_label_handles_missing_claim() {
    assert_eq!(expiry_label(Some(true)), "Expired");
    assert_eq!(expiry_label(Some(false)), "Not expired");
    assert_eq!(expiry_label(None), "No exp claim");
}
