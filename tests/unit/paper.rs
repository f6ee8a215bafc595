use super::*;

#[test]
fn presets_match_point_dimensions() {
    assert_eq!(PaperSize::Letter.size(), Size::new(612.0, 792.0));
    assert_eq!(PaperSize::Legal.size(), Size::new(612.0, 1008.0));
    assert_eq!(PaperSize::Label4x6.size(), Size::new(288.0, 432.0));
    assert_eq!(PaperSize::Label4x8.size(), Size::new(288.0, 576.0));
    let a4 = PaperSize::A4.size();
    assert!((a4.width - 595.2756).abs() < 1e-3);
    assert!((a4.height - 841.8898).abs() < 1e-3);
}

#[test]
fn landscape_puts_long_side_horizontal() {
    let letter = PaperSize::Letter.size();
    assert_eq!(Orientation::Landscape.apply(letter), Size::new(792.0, 612.0));
    assert_eq!(Orientation::Portrait.apply(letter), letter);
    assert_eq!(
        Orientation::Portrait.apply(Size::new(792.0, 612.0)),
        Size::new(612.0, 792.0)
    );
}

#[test]
fn preset_tokens_parse() {
    for p in PaperSize::ALL {
        assert_eq!(p.token().parse::<PageSpec>().unwrap(), PageSpec::Preset(p));
    }
    assert_eq!(
        "Letter".parse::<PageSpec>().unwrap(),
        PageSpec::Preset(PaperSize::Letter)
    );
}

#[test]
fn explicit_points_parse() {
    let spec: PageSpec = "300x200.5".parse().unwrap();
    assert_eq!(
        spec,
        PageSpec::Points {
            width: 300.0,
            height: 200.5
        }
    );
    assert_eq!(spec.resolve(None).unwrap(), Size::new(300.0, 200.5));
    assert_eq!(
        spec.resolve(Some(Orientation::Portrait)).unwrap(),
        Size::new(200.5, 300.0)
    );
}

#[test]
fn bad_page_tokens_are_validation_errors() {
    for bad in ["tabloid", "0x100", "100x-5", "axb", "100x", "nanx100"] {
        let err = bad.parse::<PageSpec>().unwrap_err();
        assert!(matches!(err, CalError::Validation(_)), "{bad}");
    }
}

#[test]
fn orientation_tokens() {
    assert_eq!(
        "landscape".parse::<Orientation>().unwrap(),
        Orientation::Landscape
    );
    assert_eq!(" PORTRAIT ".parse::<Orientation>().unwrap(), Orientation::Portrait);
    assert!("sideways".parse::<Orientation>().is_err());
}

#[test]
fn page_spec_json_accepts_both_forms() {
    let preset: PageSpec = serde_json::from_str(r#""label_4x6""#).unwrap();
    assert_eq!(preset, PageSpec::Preset(PaperSize::Label4x6));
    let points: PageSpec = serde_json::from_str(r#"{"width": 100, "height": 50}"#).unwrap();
    assert_eq!(
        points,
        PageSpec::Points {
            width: 100.0,
            height: 50.0
        }
    );
}

#[test]
fn sizes_beyond_pdf_coordinate_range_are_rejected() {
    for size in [
        Size::new(1e39, 1e39),
        Size::new(612.0, 1e39),
        Size::new(1e-50, 792.0),
        Size::new(612.0, 1e-50),
    ] {
        let err = validate_page_size(size).unwrap_err();
        assert!(matches!(err, CalError::Validation(_)), "{size:?}");
    }
    assert!(validate_page_size(Size::new(1e6, 1e-3)).is_ok());
    assert!("1e39x100".parse::<PageSpec>().is_err());
}
