use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CalError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(CalError::render("x").to_string().contains("render error:"));
    assert!(
        CalError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn io_names_path_and_keeps_source() {
    let err = CalError::io("out/cal.pdf", std::io::Error::other("disk full"));
    let msg = err.to_string();
    assert!(msg.contains("out/cal.pdf"));
    assert!(msg.contains("disk full"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CalError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
