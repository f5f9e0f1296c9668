mod tests {
    use myrtio_fx_engine::color::{
        MIN_WHEEL_DISTANCE, Rgb, color_wheel, diffuse, dim, random_wheel_index, rgb_from_u32,
        rgb_to_u32, scale_color, wheel_distance,
    };
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::rngs::mock::StepRng;

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    const fn red(r: u8) -> Rgb {
        Rgb { r, g: 0, b: 0 }
    }

    #[test]
    fn test_color_wheel_corners() {
        assert_eq!(color_wheel(0), RED);
        assert_eq!(color_wheel(85), GREEN);
        assert_eq!(color_wheel(170), BLUE);
        assert_eq!(color_wheel(255), RED);
        assert_eq!(color_wheel(1), Rgb { r: 252, g: 3, b: 0 });
        assert_eq!(color_wheel(128), Rgb { r: 0, g: 126, b: 129 });
    }

    #[test]
    fn test_color_wheel_channels_sum_to_full() {
        for pos in 0..=255u8 {
            let color = color_wheel(pos);
            let sum = u16::from(color.r) + u16::from(color.g) + u16::from(color.b);
            assert_eq!(sum, 255, "position {pos}");
        }
    }

    #[test]
    fn test_color_wheel_is_continuous() {
        for pos in 0..255u8 {
            let a = color_wheel(pos);
            let b = color_wheel(pos + 1);
            assert!(a.r.abs_diff(b.r) <= 3, "position {pos}");
            assert!(a.g.abs_diff(b.g) <= 3, "position {pos}");
            assert!(a.b.abs_diff(b.b) <= 3, "position {pos}");
        }
    }

    #[test]
    fn test_wheel_distance() {
        assert_eq!(wheel_distance(0, 0), 0);
        assert_eq!(wheel_distance(0, 200), 55);
        assert_eq!(wheel_distance(200, 0), 55);
        assert_eq!(wheel_distance(10, 52), 42);
    }

    #[test]
    fn test_random_wheel_index_keeps_distance() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut pos = 0u8;
        for _ in 0..1000 {
            let next = random_wheel_index(&mut rng, pos);
            assert!(wheel_distance(pos, next) >= MIN_WHEEL_DISTANCE);
            pos = next;
        }
    }

    #[test]
    fn test_random_wheel_index_gives_up_on_stuck_rng() {
        // Always samples 0; must terminate with the farthest candidate seen
        let mut rng = StepRng::new(0, 0);
        assert_eq!(random_wheel_index(&mut rng, 10), 0);
        assert_eq!(random_wheel_index(&mut rng, 0), 0);
        assert_eq!(random_wheel_index(&mut rng, 100), 0);
    }

    #[test]
    fn test_packed_colors() {
        assert_eq!(rgb_from_u32(0xFF5900), Rgb { r: 0xFF, g: 0x59, b: 0x00 });
        assert_eq!(rgb_to_u32(Rgb { r: 1, g: 2, b: 3 }), 0x010203);
        assert_eq!(rgb_from_u32(0xAB_123456), Rgb { r: 0x12, g: 0x34, b: 0x56 });
    }

    #[test]
    fn test_scale_color() {
        assert_eq!(scale_color(RED, 255), RED);
        assert_eq!(scale_color(RED, 0), BLACK);
        assert_eq!(
            scale_color(Rgb { r: 255, g: 128, b: 0 }, 128),
            Rgb { r: 128, g: 64, b: 0 }
        );
    }

    #[test]
    fn test_dim() {
        assert_eq!(dim(Rgb { r: 255, g: 1, b: 100 }), Rgb { r: 127, g: 0, b: 50 });
    }

    #[test]
    fn test_diffuse_single_spark() {
        let mut leds = [BLACK, BLACK, red(255), BLACK, BLACK];
        diffuse(&mut leds);
        assert_eq!(leds, [BLACK, red(63), red(142), red(35), red(8)]);
    }

    #[test]
    fn test_diffuse_short_strips() {
        let mut empty: [Rgb; 0] = [];
        diffuse(&mut empty);

        let mut single = [red(200)];
        diffuse(&mut single);
        assert_eq!(single, [red(100)]);
    }
}
