use ambient_core::*;

#[test]
fn narrow_viewport_uses_mobile_parameters() {
    let cfg = FieldConfig::for_viewport(500.0, DisplayMode::Clinic, &FieldTuning::default());
    assert_eq!(cfg.device, DeviceClass::Mobile);
    assert_eq!(cfg.count, 30);
    assert_eq!(cfg.connection_distance, 100.0);
}

#[test]
fn wide_viewport_uses_desktop_parameters() {
    let cfg = FieldConfig::for_viewport(1200.0, DisplayMode::Clinic, &FieldTuning::default());
    assert_eq!(cfg.device, DeviceClass::Desktop);
    assert_eq!(cfg.count, 70);
    assert_eq!(cfg.connection_distance, 160.0);
}

#[test]
fn breakpoint_is_exclusive() {
    let t = FieldTuning::default();
    assert_eq!(
        FieldConfig::for_viewport(767.9, DisplayMode::Dev, &t).device,
        DeviceClass::Mobile
    );
    assert_eq!(
        FieldConfig::for_viewport(768.0, DisplayMode::Dev, &t).device,
        DeviceClass::Desktop
    );
}

#[test]
fn device_class_does_not_depend_on_mode() {
    let t = FieldTuning::default();
    for width in [320.0, 500.0, 1024.0, 1920.0] {
        let dev = FieldConfig::for_viewport(width, DisplayMode::Dev, &t);
        let clinic = FieldConfig::for_viewport(width, DisplayMode::Clinic, &t);
        assert_eq!(dev.count, clinic.count);
        assert_eq!(dev.connection_distance, clinic.connection_distance);
    }
}

#[test]
fn speed_depends_on_mode_and_is_halved_on_mobile() {
    let t = FieldTuning::default();
    let dev_desktop = FieldConfig::for_viewport(1200.0, DisplayMode::Dev, &t).speed;
    let clinic_desktop = FieldConfig::for_viewport(1200.0, DisplayMode::Clinic, &t).speed;
    let clinic_mobile = FieldConfig::for_viewport(500.0, DisplayMode::Clinic, &t).speed;
    assert!(dev_desktop < clinic_desktop);
    assert!((clinic_mobile - clinic_desktop * 0.5).abs() < 1e-6);
}

#[test]
fn accent_follows_mode() {
    let t = FieldTuning::default();
    assert_eq!(
        FieldConfig::for_viewport(1200.0, DisplayMode::Dev, &t).accent,
        Rgb::new(6, 182, 212)
    );
    assert_eq!(
        FieldConfig::for_viewport(1200.0, DisplayMode::Clinic, &t).accent,
        Rgb::new(251, 191, 36)
    );
}

#[test]
fn custom_tuning_is_respected() {
    let t = FieldTuning {
        mobile_breakpoint: 1000.0,
        mobile_count: 12,
        ..FieldTuning::default()
    };
    let cfg = FieldConfig::for_viewport(900.0, DisplayMode::Dev, &t);
    assert_eq!(cfg.device, DeviceClass::Mobile);
    assert_eq!(cfg.count, 12);
}

#[test]
fn default_tunings_validate() {
    assert!(FieldTuning::default().validate().is_ok());
    assert!(CursorTuning::default().validate().is_ok());
}

#[test]
fn invalid_tuning_names_the_field() {
    let t = FieldTuning {
        edge_max_alpha: 1.5,
        ..FieldTuning::default()
    };
    match t.validate() {
        Err(AmbientError::InvalidTuning { field, .. }) => assert_eq!(field, "edge_max_alpha"),
        other => panic!("expected InvalidTuning, got {:?}", other),
    }

    let c = CursorTuning {
        position_spring: SpringConfig {
            stiffness: 0.0,
            ..SpringConfig::POSITION
        },
        ..CursorTuning::default()
    };
    assert!(c.validate().is_err());
}

#[test]
fn display_mode_parsing() {
    assert_eq!("dev".parse::<DisplayMode>(), Ok(DisplayMode::Dev));
    assert_eq!(" CLINIC ".parse::<DisplayMode>(), Ok(DisplayMode::Clinic));
    assert_eq!(
        "patient".parse::<DisplayMode>(),
        Err(AmbientError::UnknownMode("patient".to_string()))
    );
    assert_eq!(DisplayMode::parse_or_default("nope"), DisplayMode::Clinic);
    assert_eq!(DisplayMode::Dev.to_string(), "dev");
}

#[test]
fn viewport_sanitize_falls_back_to_desktop() {
    let v = Viewport::new(f32::NAN, -3.0).sanitized();
    assert_eq!(v, Viewport::default());
    let cfg = FieldConfig::for_viewport(v.width, DisplayMode::Clinic, &FieldTuning::default());
    assert_eq!(cfg.device, DeviceClass::Desktop);

    let ok = Viewport::new(390.0, 844.0);
    assert_eq!(ok.sanitized(), ok);
}

#[test]
fn rgba_formats_as_css() {
    let c = Rgb::new(6, 182, 212).with_alpha(0.5);
    assert_eq!(c.to_string(), "rgba(6, 182, 212, 0.5)");
    assert_eq!(Rgba::transparent(Rgb::WHITE).to_string(), "rgba(255, 255, 255, 0)");
    assert_eq!(Rgb::WHITE.with_alpha(3.0).alpha, 1.0);
}
