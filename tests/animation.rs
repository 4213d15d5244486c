mod common;

mod tests {
    use status_ring::animation::{
        Animation, AnimationSlot, DangerAnimation, IdleAnimation, PeaceAnimation, SolidAnimation,
        WarningAnimation,
    };
    use status_ring::color::{Rgb, palette};
    use status_ring::{
        DangerConfig, Duration, Mode, PIXEL_COUNT, PeaceConfig, RingConfig, RingSink,
        SolidConfig, WarningConfig,
    };

    use super::common::{BLACK, RecordingSink, at};

    const DIM_GREEN: Rgb = Rgb { r: 0, g: 40, b: 0 };
    const DIM_WHITE: Rgb = Rgb {
        r: 140,
        g: 140,
        b: 140,
    };

    /// Poll every millisecond in `from..=to`; returns the first instant a
    /// cycle completed
    fn poll<A: Animation>(
        animation: &mut A,
        sink: &mut RecordingSink,
        from: u64,
        to: u64,
    ) -> Option<u64> {
        (from..=to).find(|&ms| animation.render(at(ms), sink))
    }

    #[test]
    fn test_idle_clears_once() {
        let mut sink = RecordingSink::new();
        sink.fill(palette::RED);
        let mut idle = IdleAnimation::new();

        assert!(!idle.render(at(0), &mut sink));
        assert_eq!(sink.flush_count(), 1);
        assert!(sink.is_dark());
        assert!(idle.is_cleared());

        for ms in 1..100 {
            assert!(!idle.render(at(ms), &mut sink));
        }
        assert_eq!(sink.flush_count(), 1);

        idle.reset();
        idle.render(at(100), &mut sink);
        assert_eq!(sink.flush_count(), 2);
    }

    #[test]
    fn test_solid_holds_for_configured_duration() {
        let mut sink = RecordingSink::new();
        let config = SolidConfig {
            hold: Duration::from_millis(3000),
        };
        let mut solid = SolidAnimation::new(palette::GREEN, config);

        assert!(!solid.render(at(0), &mut sink));
        assert_eq!(sink.flush_count(), 1);
        assert_eq!(sink.pixels, [palette::GREEN; PIXEL_COUNT]);
        assert_eq!(solid.clock().next_at(), at(3000));

        assert!(!solid.render(at(2999), &mut sink));
        assert_eq!(sink.flush_count(), 1);

        assert!(solid.render(at(3000), &mut sink));
        assert_eq!(sink.flush_count(), 1);

        solid.reset();
        assert_eq!(solid.clock().phase(), 0);
        assert!(!solid.render(at(3001), &mut sink));
        assert_eq!(sink.flush_count(), 2);
    }

    #[test]
    fn test_warning_chase_takes_five_laps() {
        let mut sink = RecordingSink::new();
        let mut warning = WarningAnimation::new(WarningConfig::DEFAULT);

        for k in 0..40u64 {
            assert_eq!(warning.clock().phase(), 0);
            assert_eq!(warning.clock().step(), k as u16);
            // Not due yet between steps
            if k > 0 {
                assert!(!warning.render(at(k * 80 - 1), &mut sink));
            }
            assert!(!warning.render(at(k * 80), &mut sink));
            assert_eq!(sink.flush_count(), k as usize + 1);
        }

        assert_eq!(warning.clock().phase(), 1);
        assert_eq!(warning.clock().step(), 0);
    }

    #[test]
    fn test_warning_chase_segment() {
        let mut sink = RecordingSink::new();
        let mut warning = WarningAnimation::new(WarningConfig::DEFAULT);

        warning.render(at(0), &mut sink);
        let y = palette::YELLOW;
        assert_eq!(sink.pixels, [y, y, y, BLACK, BLACK, BLACK, BLACK, BLACK]);

        // Step 6 wraps around the top of the ring
        for k in 1..=6 {
            warning.render(at(k * 80), &mut sink);
        }
        assert_eq!(sink.pixels, [y, BLACK, BLACK, BLACK, BLACK, BLACK, y, y]);
    }

    #[test]
    fn test_warning_strobe_completes_cycle() {
        let mut sink = RecordingSink::new();
        let mut warning = WarningAnimation::new(WarningConfig::DEFAULT);

        assert_eq!(poll(&mut warning, &mut sink, 0, 3120), None);
        assert_eq!(warning.clock().phase(), 1);

        // Strobe steps start one strobe interval after the last chase step
        assert!(!warning.render(at(3179), &mut sink));
        assert!(!warning.render(at(3180), &mut sink));
        let y = palette::YELLOW;
        let w = DIM_WHITE;
        assert_eq!(sink.pixels, [w, w, w, w, y, y, y, y]);

        assert!(!warning.render(at(3240), &mut sink));
        assert_eq!(sink.pixels, [y, y, y, y, w, w, w, w]);

        let done = poll(&mut warning, &mut sink, 3241, 5000);
        assert_eq!(done, Some(3180 + 13 * 60));
        assert_eq!(sink.flush_count(), 40 + 14);
    }

    #[test]
    fn test_peace_full_cycle_timing() {
        let mut sink = RecordingSink::new();
        let mut peace = PeaceAnimation::new(PeaceConfig::DEFAULT);

        let done = poll(&mut peace, &mut sink, 0, 10_000);
        assert_eq!(done, Some(7331));
        assert_eq!(peace.clock().phase(), 3);
        assert_eq!(sink.flush_count(), 24 + 60 + 28 + 1);
        assert_eq!(sink.pixels, [palette::GREEN; PIXEL_COUNT]);
    }

    #[test]
    fn test_peace_chase_and_pulse_frames() {
        let mut sink = RecordingSink::new();
        let mut peace = PeaceAnimation::new(PeaceConfig::DEFAULT);
        poll(&mut peace, &mut sink, 0, 5000);

        let g = palette::GREEN;
        let d = DIM_GREEN;
        assert_eq!(sink.flushes[0].pixels, [g, g, d, d, d, d, d, d]);
        assert_eq!(sink.flushes[7].pixels, [g, d, d, d, d, d, d, g]);

        // Pulse starts at the minimum intensity and peaks mid-phase
        assert_eq!(
            sink.flushes[24].pixels,
            [Rgb { r: 0, g: 30, b: 0 }; PIXEL_COUNT]
        );
        assert_eq!(
            sink.flushes[24 + 30].pixels,
            [Rgb { r: 0, g: 200, b: 0 }; PIXEL_COUNT]
        );
    }

    #[test]
    fn test_peace_sparkles_are_deterministic() {
        let mut sink = RecordingSink::new();
        let mut peace = PeaceAnimation::new(PeaceConfig::DEFAULT);
        poll(&mut peace, &mut sink, 0, 5000);
        assert_eq!(peace.clock().phase(), 2);

        let d = DIM_GREEN;
        let g = palette::GREEN;
        let cyan = Rgb {
            r: 0,
            g: 200,
            b: 200,
        };
        let purple = Rgb {
            r: 133,
            g: 0,
            b: 200,
        };
        let blue = Rgb { r: 0, g: 0, b: 200 };

        let sparkle = 24 + 60;
        assert_eq!(sink.flushes[sparkle].pixels, [cyan, d, g, d, d, g, d, d]);
        assert_eq!(sink.flushes[sparkle + 1].pixels, [g, d, d, purple, d, g, d, d]);
        assert_eq!(sink.flushes[sparkle + 2].pixels, [g, d, d, g, d, d, blue, d]);
    }

    #[test]
    fn test_danger_never_completes_and_loops() {
        let mut sink = RecordingSink::new();
        let mut danger = DangerAnimation::new(DangerConfig::DEFAULT);

        assert_eq!(poll(&mut danger, &mut sink, 0, 2340), None);
        assert_eq!(danger.clock().phase(), 1);

        assert_eq!(poll(&mut danger, &mut sink, 2341, 5340), None);
        assert_eq!(danger.clock().phase(), 2);

        assert_eq!(poll(&mut danger, &mut sink, 5341, 9599), None);
        assert_eq!(danger.clock().phase(), 0);
        assert_eq!(danger.clock().step(), 0);
        assert_eq!(sink.flush_count(), 40 + 60 + 30);

        assert!(!danger.render(at(9600), &mut sink));
        assert_eq!(danger.clock().step(), 1);
    }

    #[test]
    fn test_danger_pulse_intensity() {
        let danger = DangerAnimation::new(DangerConfig::DEFAULT);
        assert_eq!(danger.pulse_intensity(0), 255);
        assert_eq!(danger.pulse_intensity(1), 92);
        assert_eq!(danger.pulse_intensity(5), 255);
        assert_eq!(danger.pulse_intensity(10), 255);
        assert_eq!(danger.pulse_intensity(11), 194);
        assert_eq!(danger.pulse_intensity(12), 182);

        let no_flash = DangerAnimation::new(DangerConfig {
            flash_every: 0,
            ..DangerConfig::DEFAULT
        });
        assert_eq!(no_flash.pulse_intensity(0), 80);
        assert_eq!(no_flash.pulse_intensity(10), 80 + 127);
    }

    #[test]
    fn test_danger_cop_lights() {
        let mut sink = RecordingSink::new();
        let mut danger = DangerAnimation::new(DangerConfig::DEFAULT);
        poll(&mut danger, &mut sink, 0, 5480);
        assert_eq!(danger.clock().phase(), 2);

        let r = palette::RED;
        let b = palette::BLUE;
        assert_eq!(sink.pixels, [r, r, r, r, b, b, b, b]);
        danger.render(at(5620), &mut sink);
        assert_eq!(sink.pixels, [b, b, b, b, r, r, r, r]);
    }

    #[test]
    fn test_slot_for_mode() {
        let config = RingConfig::DEFAULT;
        assert!(matches!(
            AnimationSlot::for_mode(Mode::Idle, &config),
            AnimationSlot::Idle(_)
        ));
        assert!(matches!(
            AnimationSlot::for_mode(Mode::Danger, &config),
            AnimationSlot::Danger(_)
        ));
        match AnimationSlot::for_mode(Mode::SolidYellow, &config) {
            AnimationSlot::Solid(solid) => assert_eq!(solid.color(), palette::YELLOW),
            other => panic!("unexpected slot {other:?}"),
        }

        let mut slot = AnimationSlot::for_mode(Mode::Warning, &config);
        let mut sink = RecordingSink::new();
        slot.render(at(0), &mut sink);
        slot.render(at(80), &mut sink);
        assert_eq!((slot.phase(), slot.step()), (0, 2));
        slot.reset();
        assert_eq!((slot.phase(), slot.step()), (0, 0));
    }
}
