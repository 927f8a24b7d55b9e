use super::*;

#[test]
fn defaults_match_stock_animation() {
    let cfg = OrbitConfig::default();
    assert_eq!(cfg.input, PathBuf::from("gopherbw.png"));
    assert_eq!(cfg.output, PathBuf::from("animeAround.gif"));
    assert_eq!(cfg.fill_colors.len(), 5);
    assert_eq!(cfg.fill_colors[0], Rgba8::opaque(255, 130, 128));
    assert_eq!(cfg.background, Rgba8::TRANSPARENT);
    assert_eq!(cfg.mask_size, Size::new(200, 200));
    assert_eq!(cfg.radius, 50.0);
    assert_eq!(cfg.canvas_scale, CanvasScale { num: 3, den: 2 });
    assert_eq!(cfg.delay_cs, 2);
    assert_eq!(cfg.disposal, Disposal::Background);
    assert_eq!(cfg.max_colors, 256);
    assert_eq!(cfg.layout, LayoutStrategy::Arc);
    assert_eq!(cfg.fill_stencil, FillStencil::Mask);
    cfg.validate().unwrap();
}

#[test]
fn partial_json_keeps_defaults_for_missing_fields() {
    let cfg = OrbitConfig::from_json_str(
        r#"{ "radius": 20.0, "layout": "rotate", "fill_colors": [{"r":1,"g":2,"b":3,"a":255}] }"#,
    )
    .unwrap();
    assert_eq!(cfg.radius, 20.0);
    assert_eq!(cfg.layout, LayoutStrategy::Rotate);
    assert_eq!(cfg.fill_colors, vec![Rgba8::opaque(1, 2, 3)]);
    assert_eq!(cfg.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
    assert_eq!(cfg.delay_cs, DEFAULT_DELAY_CS);
}

#[test]
fn json_round_trip_preserves_config() {
    let cfg = OrbitConfig {
        fill_stencil: FillStencil::SourceAlpha,
        disposal: Disposal::Previous,
        ..OrbitConfig::default()
    };
    let s = serde_json::to_string(&cfg).unwrap();
    assert!(s.contains("\"source_alpha\""));
    assert_eq!(OrbitConfig::from_json_str(&s).unwrap(), cfg);
}

#[test]
fn config_validation_catches_bad_values() {
    let bad = [
        OrbitConfig {
            fill_colors: vec![],
            ..OrbitConfig::default()
        },
        OrbitConfig {
            mask_size: Size::new(0, 10),
            ..OrbitConfig::default()
        },
        OrbitConfig {
            canvas_scale: CanvasScale { num: 3, den: 0 },
            ..OrbitConfig::default()
        },
        OrbitConfig {
            max_colors: 1,
            ..OrbitConfig::default()
        },
        OrbitConfig {
            max_colors: 257,
            ..OrbitConfig::default()
        },
        OrbitConfig {
            radius: f64::NAN,
            ..OrbitConfig::default()
        },
        OrbitConfig {
            radius: 1e300,
            ..OrbitConfig::default()
        },
        OrbitConfig {
            mask_size: Size::new(1, 40),
            ..OrbitConfig::default()
        },
        OrbitConfig {
            mask_size: Size::new(50_000, 50_000),
            ..OrbitConfig::default()
        },
        OrbitConfig {
            mask_size: Size::new(4, 4),
            canvas_scale: CanvasScale { num: 1, den: 4 },
            ..OrbitConfig::default()
        },
    ];
    for cfg in bad {
        assert!(
            matches!(cfg.validate(), Err(OrbitError::Validation(_))),
            "{cfg:?}"
        );
    }
}

#[test]
fn unknown_enum_value_is_a_validation_error() {
    let err = OrbitConfig::from_json_str(r#"{ "layout": "spiral" }"#).unwrap_err();
    assert!(matches!(err, OrbitError::Validation(_)));
}

#[test]
fn missing_config_file_is_io_error() {
    let err = OrbitConfig::from_json_path(Path::new("target/no/such/config.json")).unwrap_err();
    assert!(matches!(err, OrbitError::Io(_)));
}

#[test]
fn derived_stage_options_follow_config() {
    let cfg = OrbitConfig {
        radius: 12.0,
        delay_cs: 9,
        max_colors: 64,
        ..OrbitConfig::default()
    };
    assert_eq!(cfg.layout_params().radius, 12.0);
    assert_eq!(cfg.encode_options().delay_cs, 9);
    assert_eq!(cfg.encode_options().max_colors, 64);
}

#[test]
fn scaled_canvas_limits_only_apply_to_arc_layout() {
    let cfg = OrbitConfig {
        mask_size: Size::new(4, 4),
        canvas_scale: CanvasScale { num: 1, den: 4 },
        layout: LayoutStrategy::Rotate,
        ..OrbitConfig::default()
    };
    cfg.validate().unwrap();
}

#[test]
fn radius_at_the_limit_is_accepted() {
    let cfg = OrbitConfig {
        radius: -MAX_RADIUS,
        ..OrbitConfig::default()
    };
    cfg.validate().unwrap();
}
