mod tests {
    use myrtio_apa102_light::animation::{set_spot, speed_to_interval};
    use myrtio_apa102_light::{Duration, FrameBuffer, Led, SpotPhase, SpotScan};

    fn levels<const N: usize>(frame: &FrameBuffer<N>) -> Vec<u8> {
        frame.iter().map(Led::level).collect()
    }

    #[test]
    fn test_speed_to_interval() {
        assert_eq!(speed_to_interval(0), None);
        assert_eq!(speed_to_interval(1), Some(Duration::from_millis(100)));
        assert_eq!(speed_to_interval(50), Some(Duration::from_millis(56)));
        assert_eq!(speed_to_interval(56), Some(Duration::from_millis(50)));
        assert_eq!(speed_to_interval(100), Some(Duration::from_millis(10)));
        assert_eq!(speed_to_interval(255), Some(Duration::from_millis(10)));
    }

    #[test]
    fn test_set_spot_ramp() {
        let mut frame = FrameBuffer::<100>::new(100, Led::default());
        set_spot(&mut frame, 50, 10);

        for offset in 0..=10 {
            let expected = 10 - offset as u8;
            assert_eq!(frame.level(50 - offset), expected);
            assert_eq!(frame.level(50 + offset), expected);
        }
        assert_eq!(frame.level(0), 0);
        assert_eq!(frame.level(30), 0);
        assert_eq!(frame.level(70), 0);
        assert_eq!(frame.level(99), 0);
    }

    #[test]
    fn test_set_spot_at_edges() {
        let mut frame = FrameBuffer::<8>::new(8, Led::default());
        set_spot(&mut frame, 0, 4);
        assert_eq!(levels(&frame), [4, 3, 2, 1, 0, 0, 0, 0]);

        set_spot(&mut frame, 7, 3);
        assert_eq!(levels(&frame), [0, 0, 0, 0, 0, 1, 2, 3]);

        set_spot(&mut frame, 42, 2);
        assert_eq!(levels(&frame), [0, 0, 0, 0, 0, 0, 1, 2]);
    }

    #[test]
    fn test_full_scan_cycle() {
        let mut frame = FrameBuffer::<100>::new(100, Led::default());
        let mut spot = SpotScan::new(0, 50, 10);

        for step in 1..99 {
            spot.step(&mut frame);
            assert_eq!(spot.position(), step);
            assert_eq!(spot.phase(), SpotPhase::Scanning);
            assert_eq!(frame.level(step), 10);
        }

        spot.step(&mut frame);
        assert_eq!(spot.position(), 99);
        assert_eq!(spot.phase(), SpotPhase::FadingOut);

        let mut fade_out_steps = 0;
        while spot.phase() == SpotPhase::FadingOut {
            spot.step(&mut frame);
            fade_out_steps += 1;
            assert!(fade_out_steps <= 31);
        }
        assert_eq!(spot.phase(), SpotPhase::FadingIn);
        assert_eq!(frame.level(99), 0);

        let mut fade_in_steps = 0;
        while spot.phase() == SpotPhase::FadingIn {
            spot.step(&mut frame);
            fade_in_steps += 1;
            assert!(fade_in_steps <= 31);
        }
        assert_eq!(spot.phase(), SpotPhase::Scanning);
        assert_eq!(spot.position(), 0);
        assert_eq!(frame.level(0), 10);
    }

    #[test]
    fn test_fade_in_fills_from_start() {
        let mut frame = FrameBuffer::<6>::new(6, Led::default());
        let mut spot = SpotScan::new(4, 50, 5);
        spot.step(&mut frame);
        assert_eq!(spot.phase(), SpotPhase::FadingOut);
        spot.step(&mut frame);
        assert_eq!(spot.phase(), SpotPhase::FadingIn);

        spot.step(&mut frame);
        spot.step(&mut frame);
        spot.step(&mut frame);
        assert_eq!(levels(&frame), [3, 2, 1, 0, 0, 0]);

        spot.step(&mut frame);
        spot.step(&mut frame);
        assert_eq!(levels(&frame), [5, 4, 3, 2, 1, 0]);
        assert_eq!(spot.phase(), SpotPhase::Scanning);
        assert_eq!(spot.position(), 0);
    }

    #[test]
    fn test_single_led_strip() {
        let mut frame = FrameBuffer::<1>::new(1, Led::new(2, Default::default()));
        let mut spot = SpotScan::new(0, 10, 2);

        spot.step(&mut frame);
        assert_eq!(spot.phase(), SpotPhase::FadingOut);
        spot.step(&mut frame);
        spot.step(&mut frame);
        assert_eq!(spot.phase(), SpotPhase::FadingIn);
        assert_eq!(frame.level(0), 0);

        spot.step(&mut frame);
        spot.step(&mut frame);
        assert_eq!(spot.phase(), SpotPhase::Scanning);
        assert_eq!(frame.level(0), 2);
    }

    #[test]
    fn test_parameters_are_clamped() {
        let spot = SpotScan::new(3, 250, 99);
        assert_eq!(spot.speed_raw(), 100);
        assert_eq!(spot.max_brightness(), 31);
        assert!(!spot.is_paused());
        assert!(SpotScan::new(0, 0, 5).is_paused());
        assert_eq!(SpotScan::new(0, 0, 5).interval(), None);
    }
}
