//! Integration tests for loading conversion options.

use slidetext::{ConfigError, ConvertOptions, html_to_runs};

#[test]
fn test_defaults() {
    let options = ConvertOptions::default();
    assert_eq!(options.font_face, "Arial");
    assert_eq!(options.font_size, 12.0);
    assert_eq!(options.pre_font_face, "Courier New");
    assert_eq!(options.css, None);
    assert_eq!(options.para_space_before, None);
    assert_eq!(options.para_space_after, None);
}

#[test]
fn test_empty_document_is_default() {
    assert_eq!(
        ConvertOptions::from_json("{}").unwrap(),
        ConvertOptions::default()
    );
}

#[test]
fn test_camel_case_keys() {
    let options = ConvertOptions::from_json(
        r#"{
            "fontFace": "Calibri",
            "fontSize": 18,
            "css": "b { color: red }",
            "preFontFace": "Consolas",
            "paraSpaceBefore": 6,
            "paraSpaceAfter": 4.5
        }"#,
    )
    .unwrap();
    assert_eq!(options.font_face, "Calibri");
    assert_eq!(options.font_size, 18.0);
    assert_eq!(options.css.as_deref(), Some("b { color: red }"));
    assert_eq!(options.pre_font_face, "Consolas");
    assert_eq!(options.para_space_before, Some(6.0));
    assert_eq!(options.para_space_after, Some(4.5));

    let runs = html_to_runs("<b>x</b>", &options);
    assert_eq!(runs[0].options.color.as_deref(), Some("ff0000"));
    assert_eq!(runs[0].options.font_face, "Calibri");
    assert_eq!(runs[0].options.font_size, 18.0);
}

#[test]
fn test_invalid_json() {
    assert!(matches!(
        ConvertOptions::from_json("{ fontSize: 12 }"),
        Err(ConfigError::Json(_))
    ));
    assert!(matches!(
        ConvertOptions::from_json(r#"{ "fontSize": "big" }"#),
        Err(ConfigError::Json(_))
    ));
    assert!(matches!(
        ConvertOptions::from_json(r#"{ "fontSzie": 12 }"#),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn test_invalid_sizes() {
    let err = ConvertOptions::from_json(r#"{ "fontSize": -1 }"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidSize { field: "fontSize", .. }
    ));
    assert!(err.to_string().contains("fontSize"));

    assert!(matches!(
        ConvertOptions::from_json(r#"{ "paraSpaceAfter": -0.5 }"#),
        Err(ConfigError::InvalidSize { field: "paraSpaceAfter", .. })
    ));
    assert!(
        ConvertOptions::default()
            .with_para_space_before(f64::NAN)
            .validate()
            .is_err()
    );
}

#[test]
fn test_zero_spacing_means_font_size() {
    let options = ConvertOptions::default().with_para_space_before(0.0);
    assert_eq!(options.para_space_before(), None);
    let options = options.with_para_space_before(3.0);
    assert_eq!(options.para_space_before(), Some(3.0));
}
