use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PlaybookError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(PlaybookError::bounds("x").to_string().contains("bounds error:"));
    assert!(
        PlaybookError::state_conflict("x")
            .to_string()
            .contains("state conflict:")
    );
    assert!(
        PlaybookError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PlaybookError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
