mod tests {
    use myrtio_fx_engine::BrightnessRamp;

    #[test]
    fn test_ramp_disabled_is_instant() {
        let mut ramp = BrightnessRamp::new(200, false);
        assert_eq!(ramp.current(), 0);
        ramp.update();
        assert_eq!(ramp.current(), 200);
        assert!(ramp.is_settled());
    }

    #[test]
    fn test_ramp_soft_start() {
        let mut ramp = BrightnessRamp::new(255, true);
        ramp.update();
        // Filtered step of 102, damped to a tenth near zero
        assert_eq!(ramp.current(), 10);
    }

    #[test]
    fn test_ramp_up_is_monotonic() {
        let mut ramp = BrightnessRamp::new(255, true);
        let mut ticks = 0;
        while !ramp.is_settled() {
            let before = ramp.current();
            ramp.update();
            assert!(ramp.current() > before);
            assert!(ramp.current() <= 255);
            ticks += 1;
            assert!(ticks < 100, "ramp did not settle");
        }
        assert_eq!(ramp.current(), 255);
    }

    #[test]
    fn test_ramp_up_small_step() {
        let mut ramp = BrightnessRamp::new(0, true);
        ramp.force(100);
        ramp.set_level(101);
        ramp.update();
        assert_eq!(ramp.current(), 101);
        ramp.update();
        assert_eq!(ramp.current(), 101);
    }

    #[test]
    fn test_ramp_down_converges() {
        let mut ramp = BrightnessRamp::new(0, true);
        ramp.force(200);
        ramp.set_level(0);

        ramp.update();
        assert_eq!(ramp.current(), 120);

        let mut ticks = 0;
        while !ramp.is_settled() {
            let before = ramp.current();
            ramp.update();
            assert!(ramp.current() < before);
            ticks += 1;
            assert!(ticks < 50, "ramp did not settle");
        }
        assert_eq!(ramp.current(), 0);
    }

    #[test]
    fn test_force_bypasses_ramp() {
        let mut ramp = BrightnessRamp::new(0, true);
        ramp.force(180);
        assert_eq!(ramp.current(), 180);
        assert_eq!(ramp.target(), 180);
        assert_eq!(ramp.level(), 180);
    }

    #[test]
    fn test_modulate_keeps_level() {
        let mut ramp = BrightnessRamp::new(0, false);
        ramp.force(200);
        ramp.modulate(50);
        assert_eq!(ramp.current(), 50);
        assert_eq!(ramp.level(), 200);

        ramp.update();
        assert_eq!(ramp.current(), 50);

        ramp.restore();
        ramp.update();
        assert_eq!(ramp.current(), 200);
    }
}
