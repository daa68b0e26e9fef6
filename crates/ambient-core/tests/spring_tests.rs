use ambient_core::*;

const DT: f32 = 1.0 / 60.0;

#[test]
fn position_profile_is_critically_damped() {
    assert!((SpringConfig::POSITION.damping_ratio() - 1.0).abs() < 1e-4);
    let c = SpringConfig::critical(700.0, 1.0);
    assert!((c.damping - SpringConfig::POSITION.damping).abs() < 1e-3);
}

#[test]
fn appearance_profile_is_softer_than_position() {
    let look = SpringConfig::APPEARANCE;
    let pos = SpringConfig::POSITION;
    assert!(look.stiffness < pos.stiffness);
    assert!(look.damping_ratio() < 1.0);
}

#[test]
fn position_spring_trails_without_overshoot() {
    let mut s = Spring::new(0.0, SpringConfig::POSITION);
    s.set_target(100.0);
    let first = s.step(DT);
    assert!(first > 0.0 && first < 100.0, "should lag, got {first}");

    let mut prev = first;
    for _ in 0..60 {
        let v = s.step(DT);
        assert!(v <= 100.0 + 1e-3, "overshoot: {v}");
        assert!(v >= prev - 1e-4, "should approach monotonically");
        prev = v;
    }
    assert!(s.is_at_rest());
    assert_eq!(s.value(), 100.0);
}

#[test]
fn appearance_spring_settles_on_target() {
    let mut s = Spring::new(20.0, SpringConfig::APPEARANCE);
    s.set_target(40.0);
    for _ in 0..120 {
        s.step(DT);
    }
    assert!((s.value() - 40.0).abs() < 1e-3);
}

#[test]
fn result_is_independent_of_frame_rate() {
    let mut a = Spring::new(0.0, SpringConfig::POSITION);
    let mut b = Spring::new(0.0, SpringConfig::POSITION);
    a.set_target(50.0);
    b.set_target(50.0);
    for _ in 0..6 {
        a.step(1.0 / 240.0);
    }
    for _ in 0..3 {
        b.step(1.0 / 120.0);
    }
    assert!((a.value() - b.value()).abs() < 0.05);
}

#[test]
fn long_pause_does_not_blow_up() {
    let mut s = Spring::new(0.0, SpringConfig::POSITION);
    s.set_target(1000.0);
    let v = s.step(30.0);
    assert!(v.is_finite());
    assert!(v > 0.0 && v <= 1000.0);
}

#[test]
fn non_finite_dt_is_ignored() {
    let mut s = Spring::new(5.0, SpringConfig::POSITION);
    s.set_target(10.0);
    assert_eq!(s.step(f32::NAN), 5.0);
    assert_eq!(s.step(-1.0), 5.0);
}

#[test]
fn jump_to_stops_motion() {
    let mut s = Spring::new(0.0, SpringConfig::POSITION);
    s.set_target(10.0);
    s.step(DT);
    s.jump_to(3.0);
    assert_eq!(s.velocity(), 0.0);
    assert_eq!(s.target(), 3.0);
    assert_eq!(s.step(DT), 3.0);
}

#[test]
fn default_profiles_validate() {
    assert!(SpringConfig::POSITION.validate().is_ok());
    assert!(SpringConfig::APPEARANCE.validate().is_ok());
}

#[test]
fn profiles_too_stiff_for_the_substep_are_rejected() {
    let stiff = SpringConfig {
        stiffness: 1e6,
        damping: 10.0,
        mass: 1.0,
    };
    assert!(matches!(
        stiff.validate(),
        Err(AmbientError::InvalidTuning {
            field: "spring.stiffness",
            ..
        })
    ));

    let tuning = CursorTuning {
        position_spring: stiff,
        ..CursorTuning::default()
    };
    assert!(tuning.validate().is_err());
}

#[test]
fn profiles_too_damped_for_the_substep_are_rejected() {
    let sticky = SpringConfig {
        stiffness: 100.0,
        damping: 1000.0,
        mass: 1.0,
    };
    assert!(matches!(
        sticky.validate(),
        Err(AmbientError::InvalidTuning {
            field: "spring.damping",
            ..
        })
    ));
}

#[test]
fn accepted_profiles_near_the_limit_stay_finite() {
    let h = constants::SPRING_SUBSTEP_SEC;
    let near_limits = [
        // ω·h just under 1
        SpringConfig {
            stiffness: (0.99 / h) * (0.99 / h),
            damping: 10.0,
            mass: 1.0,
        },
        // heavily overdamped but inside the stable region
        SpringConfig {
            stiffness: 100.0,
            damping: 1.4 / h,
            mass: 1.0,
        },
    ];
    for config in near_limits {
        assert!(config.validate().is_ok(), "{config:?}");
        let tuning = CursorTuning {
            position_spring: config,
            ..CursorTuning::default()
        };
        assert!(tuning.validate().is_ok());

        let mut t = PointerTracker::new(DisplayMode::Dev, tuning);
        t.pointer_moved(200.0, 100.0);
        for _ in 0..300 {
            let frame = t.tick(DT);
            assert!(frame.halo_center.is_finite(), "{config:?} diverged");
            assert!(frame.halo_center.length() < 1000.0, "{config:?} ran away");
        }
    }
}
