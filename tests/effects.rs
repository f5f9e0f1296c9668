mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_fx_engine::color::{Rgb, color_wheel};
    use myrtio_fx_engine::{ControlChannel, EffectId, EngineConfig, Renderer};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::rngs::mock::StepRng;

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    type TestRenderer<'a, R> = Renderer<'a, R, 16, 4>;

    /// Drives a renderer one effect frame at a time
    struct Harness<'a, R: rand::RngCore> {
        renderer: TestRenderer<'a, R>,
        now: u64,
    }

    impl<'a, R: rand::RngCore> Harness<'a, R> {
        fn new(channel: &'a ControlChannel<4>, rng: R, led_count: usize, effect: EffectId) -> Self {
            let config = EngineConfig {
                led_count,
                effect,
                speed: 255,
                color: RED,
                brightness: 255,
                ..EngineConfig::default()
            };
            let mut renderer = Renderer::new(channel.receiver(), rng, &config);
            renderer.start();
            Self { renderer, now: 0 }
        }

        /// Tick just late enough for the next frame; returns the show request
        fn frame(&mut self) -> bool {
            let calls = self.renderer.state().call_counter();
            let show = self.renderer.tick(Instant::from_millis(self.now)).shown;
            assert_eq!(self.renderer.state().call_counter(), calls + 1);
            self.now += self.renderer.next_delay().as_millis() + 1;
            show
        }

        fn frames(&mut self, count: usize) {
            for _ in 0..count {
                self.frame();
            }
        }

        fn pixels(&self) -> &[Rgb] {
            self.renderer.frame()
        }
    }

    fn red(r: u8) -> Rgb {
        Rgb { r, g: 0, b: 0 }
    }

    #[test]
    fn test_color_wipe() {
        let channel = ControlChannel::new();
        let mut fx = Harness::new(&channel, StepRng::new(0, 0), 10, EffectId::ColorWipe);

        assert!(fx.frame());
        assert_eq!(fx.renderer.next_delay(), Duration::from_millis(5));
        assert_eq!(fx.pixels()[0], RED);
        assert_eq!(fx.pixels()[1], BLACK);

        fx.frames(9);
        assert_eq!(fx.pixels(), &[RED; 10]);

        fx.frames(5);
        assert_eq!(&fx.pixels()[..5], &[BLACK; 5]);
        assert_eq!(&fx.pixels()[5..], &[RED; 5]);

        fx.frames(5);
        assert_eq!(fx.pixels(), &[BLACK; 10]);
        assert_eq!(fx.renderer.state().step_counter(), 0);
    }

    #[test]
    fn test_color_wipe_delay_scales_with_length() {
        let channel = ControlChannel::new();
        let mut fx = Harness::new(&channel, StepRng::new(0, 0), 10, EffectId::ColorWipe);
        fx.renderer.set_speed(0);
        fx.frame();
        // 5 + 50 * 255 / 10
        assert_eq!(fx.renderer.next_delay(), Duration::from_millis(1280));
    }

    #[test]
    fn test_blink() {
        let channel = ControlChannel::new();
        let mut fx = Harness::new(&channel, StepRng::new(0, 0), 4, EffectId::Blink);

        assert!(fx.frame());
        assert_eq!(fx.pixels(), &[RED; 4]);
        assert_eq!(fx.renderer.next_delay(), Duration::from_millis(100));

        assert!(fx.frame());
        assert_eq!(fx.pixels(), &[BLACK; 4]);

        fx.renderer.set_speed(0);
        fx.frame();
        assert_eq!(fx.renderer.next_delay(), Duration::from_millis(2086));
    }

    #[test]
    fn test_breath() {
        let channel = ControlChannel::new();
        let mut fx = Harness::new(&channel, StepRng::new(0, 0), 4, EffectId::Breath);

        assert!(fx.frame());
        assert_eq!(fx.pixels(), &[RED; 4]);
        assert_eq!(fx.renderer.current_brightness(), 150);
        assert_eq!(fx.renderer.brightness(), 255);
        assert_eq!(fx.renderer.state().step_counter(), 1);
        assert_eq!(fx.renderer.next_delay(), Duration::from_millis(9));

        fx.frame();
        assert_eq!(fx.renderer.current_brightness(), 149);

        // 25 more frames reach the second table entry
        fx.frames(24);
        assert_eq!(fx.renderer.current_brightness(), 125);
        assert_eq!(fx.renderer.state().step_counter(), 2);
        assert_eq!(fx.renderer.next_delay(), Duration::from_millis(13));
    }

    #[test]
    fn test_breath_follows_caller_brightness() {
        let channel = ControlChannel::new();
        let mut fx = Harness::new(&channel, StepRng::new(0, 0), 4, EffectId::Breath);
        fx.renderer.set_brightness(100);
        fx.frame();
        // 150 mapped onto 0..=100
        assert_eq!(fx.renderer.current_brightness(), 58);
    }

    #[test]
    fn test_effect_switch_restores_brightness() {
        let channel = ControlChannel::new();
        let mut fx = Harness::new(&channel, StepRng::new(0, 0), 4, EffectId::Fade);
        fx.frame();
        assert!(fx.renderer.current_brightness() < 255);

        fx.renderer.select_effect(EffectId::Static);
        fx.frame();
        assert_eq!(fx.renderer.current_brightness(), 255);
    }

    #[test]
    fn test_theater_chase() {
        let channel = ControlChannel::new();
        let mut fx = Harness::new(&channel, StepRng::new(0, 0), 6, EffectId::TheaterChase);

        // Off phase: updates the buffer without pushing
        assert!(!fx.frame());
        assert_eq!(fx.pixels(), &[BLACK; 6]);
        assert_eq!(fx.renderer.next_delay(), Duration::from_millis(1));

        assert!(fx.frame());
        assert_eq!(fx.pixels(), &[BLACK, RED, BLACK, BLACK, RED, BLACK]);
        assert_eq!(fx.renderer.next_delay(), Duration::from_millis(50));

        assert!(!fx.frame());
        assert_eq!(fx.pixels(), &[BLACK; 6]);

        assert!(fx.frame());
        assert_eq!(fx.pixels(), &[BLACK, BLACK, RED, BLACK, BLACK, RED]);
    }

    #[test]
    fn test_chase_white() {
        let channel = ControlChannel::new();
        let mut fx = Harness::new(&channel, StepRng::new(0, 0), 6, EffectId::ChaseWhite);

        assert!(fx.frame());
        assert_eq!(fx.pixels(), &[RED, RED, WHITE, WHITE, WHITE, WHITE]);
        assert_eq!(fx.renderer.next_delay(), Duration::from_millis(10));

        fx.frames(5);
        // Pair wraps around the end of the strip
        assert_eq!(fx.pixels(), &[RED, WHITE, WHITE, WHITE, WHITE, RED]);
        assert_eq!(fx.renderer.state().step_counter(), 0);
    }

    #[test]
    fn test_chase_blackout() {
        let channel = ControlChannel::new();
        let mut fx = Harness::new(&channel, StepRng::new(0, 0), 4, EffectId::ChaseBlackout);
        fx.frames(2);
        assert_eq!(fx.pixels(), &[RED, BLACK, BLACK, RED]);
    }

    #[test]
    fn test_rainbow() {
        let channel = ControlChannel::new();
        let mut fx = Harness::new(&channel, StepRng::new(0, 0), 3, EffectId::Rainbow);
        fx.frames(86);
        assert_eq!(fx.pixels(), &[color_wheel(85); 3]);
    }

    #[test]
    fn test_scan_bounces() {
        let channel = ControlChannel::new();
        let mut fx = Harness::new(&channel, StepRng::new(0, 0), 4, EffectId::Scan);
        let mut positions = [0usize; 8];
        for position in &mut positions {
            fx.frame();
            *position = fx.pixels().iter().position(|led| *led == RED).unwrap();
        }
        assert_eq!(positions, [2, 1, 0, 1, 2, 3, 2, 1]);
    }

    #[test]
    fn test_fireworks_diffuse_and_ignite() {
        let channel = ControlChannel::new();
        // StepRng always ignites, always at pixel 0
        let mut fx = Harness::new(&channel, StepRng::new(0, 0), 10, EffectId::Fireworks);

        assert!(fx.frame());
        assert_eq!(fx.pixels()[0], RED);
        assert_eq!(&fx.pixels()[1..], &[BLACK; 9]);

        fx.frame();
        assert_eq!(
            &fx.pixels()[..5],
            &[red(255), red(31), red(7), red(1), BLACK]
        );
        assert_eq!(fx.renderer.next_delay(), Duration::from_millis(20));
    }

    #[test]
    fn test_twinkle_lights_batch() {
        let channel = ControlChannel::new();
        let mut fx = Harness::new(&channel, StepRng::new(0, 0), 10, EffectId::Twinkle);

        assert!(fx.frame());
        // StepRng picks the smallest batch (n / 5), one LED lit already
        assert_eq!(fx.renderer.state().step_counter(), 1);
        assert_eq!(fx.pixels()[0], RED);
    }

    #[test]
    fn test_running_random_shifts() {
        let channel = ControlChannel::new();
        let mut fx = Harness::new(&channel, SmallRng::seed_from_u64(3), 5, EffectId::RunningRandom);
        fx.frame();
        let first = fx.pixels()[0];
        assert_ne!(first, BLACK);

        fx.frame();
        assert_eq!(fx.pixels()[1], first);
    }

    #[test]
    fn test_every_effect_renders() {
        let channel = ControlChannel::new();
        for led_count in [1, 2, 7, 16] {
            for effect in EffectId::ALL {
                let mut fx =
                    Harness::new(&channel, SmallRng::seed_from_u64(1), led_count, effect);
                fx.frames(300);
                assert!(fx.renderer.next_delay() > Duration::from_millis(0));
            }
        }
    }
}
