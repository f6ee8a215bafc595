use super::*;

#[test]
fn helvetica_digits_are_556_units() {
    let font = Font::new("Helvetica", 10.0);
    let w = text_width("31", &font).unwrap();
    assert!((w - 11.12).abs() < 1e-9);
}

#[test]
fn width_scales_linearly_with_size() {
    let small = text_width("Jan 2024", &Font::new("Helvetica", 10.0)).unwrap();
    let big = text_width("Jan 2024", &Font::new("Helvetica", 20.0)).unwrap();
    assert!((big - 2.0 * small).abs() < 1e-9);
}

#[test]
fn courier_is_monospaced() {
    let font = Font::new("Courier", 10.0);
    assert_eq!(
        text_width("iiii", &font).unwrap(),
        text_width("WWWW", &font).unwrap()
    );
}

#[test]
fn unknown_font_is_a_render_error() {
    let err = text_width("1", &Font::new("Comic Sans", 10.0)).unwrap_err();
    assert!(matches!(err, CalError::Render(_)));
}

#[test]
fn latin1_encodes_and_other_scripts_do_not() {
    assert_eq!(encode_winansi("1er").unwrap(), b"1er".to_vec());
    assert_eq!(encode_winansi("1º").unwrap(), vec![b'1', 0xBA]);
    assert!(matches!(encode_winansi("1日"), Err(CalError::Render(_))));
    assert!(encode_winansi("\n").is_err());
}
