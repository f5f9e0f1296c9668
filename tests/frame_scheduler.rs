mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_fx_engine::color::Rgb;
    use myrtio_fx_engine::{
        BufferSink, ControlChannel, EffectId, EngineConfig, FrameScheduler, PixelSink, Renderer,
    };
    use rand::rngs::mock::StepRng;

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

    #[derive(Debug, PartialEq, Eq)]
    struct SinkError;

    /// Sink whose pushes can be made to fail
    struct FlakySink {
        pixels: [Rgb; 4],
        fail_show: bool,
        shows: u32,
    }

    impl PixelSink for FlakySink {
        type Error = SinkError;

        fn pixel_count(&self) -> usize {
            self.pixels.len()
        }

        fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), SinkError> {
            self.pixels[index] = color;
            Ok(())
        }

        fn pixel(&self, index: usize) -> Rgb {
            self.pixels[index]
        }

        fn clear(&mut self) -> Result<(), SinkError> {
            self.pixels = [Rgb::default(); 4];
            Ok(())
        }

        fn show(&mut self) -> Result<(), SinkError> {
            if self.fail_show {
                return Err(SinkError);
            }
            self.shows += 1;
            Ok(())
        }
    }

    fn renderer(channel: &ControlChannel<4>, led_count: usize) -> Renderer<'_, StepRng, 30, 4> {
        let config = EngineConfig {
            led_count,
            effect: EffectId::Static,
            color: RED,
            brightness: 255,
            ..EngineConfig::default()
        };
        Renderer::new(channel.receiver(), StepRng::new(0, 0), &config)
    }

    #[test]
    fn test_init_clears_and_starts() {
        let channel = ControlChannel::new();
        let scheduler = FrameScheduler::init(renderer(&channel, 30), BufferSink::<8>::new()).unwrap();

        assert!(scheduler.renderer().is_running());
        // Clamped to what the sink can address
        assert_eq!(scheduler.renderer().led_count(), 8);
        assert_eq!(scheduler.sink().show_count(), 1);
        assert_eq!(scheduler.sink().shown(), &[Rgb::default(); 8]);
    }

    #[test]
    fn test_tick_renders_and_flushes() {
        let channel = ControlChannel::new();
        let mut scheduler =
            FrameScheduler::init(renderer(&channel, 8), BufferSink::<8>::new()).unwrap();

        let result = scheduler.tick(Instant::from_millis(0)).unwrap();
        assert!(result.rendered);
        assert!(result.shown);
        assert_eq!(result.next_deadline, Instant::from_millis(33));
        assert_eq!(result.sleep_duration, Duration::from_millis(33));
        assert_eq!(scheduler.sink().shown(), &[RED; 8]);
        assert_eq!(scheduler.sink().show_count(), 2);

        // Static asks for 50 ms between frames
        let result = scheduler.tick(Instant::from_millis(33)).unwrap();
        assert!(!result.rendered);
        assert!(!result.shown);
        assert_eq!(result.next_deadline, Instant::from_millis(66));
        assert_eq!(scheduler.sink().show_count(), 2);

        let result = scheduler.tick(Instant::from_millis(66)).unwrap();
        assert!(result.rendered);
        assert!(result.shown);
        assert_eq!(scheduler.sink().show_count(), 3);
    }

    #[test]
    fn test_tick_sleep_shrinks_when_late() {
        let channel = ControlChannel::new();
        let mut scheduler =
            FrameScheduler::init(renderer(&channel, 8), BufferSink::<8>::new()).unwrap();

        scheduler.tick(Instant::from_millis(0)).unwrap();
        let result = scheduler.tick(Instant::from_millis(40)).unwrap();
        assert_eq!(result.next_deadline, Instant::from_millis(66));
        assert_eq!(result.sleep_duration, Duration::from_millis(26));
    }

    #[test]
    fn test_tick_skips_backlog() {
        let channel = ControlChannel::new();
        let mut scheduler =
            FrameScheduler::init(renderer(&channel, 8), BufferSink::<8>::new()).unwrap();

        scheduler.tick(Instant::from_millis(0)).unwrap();
        let result = scheduler.tick(Instant::from_millis(1000)).unwrap();
        assert_eq!(result.next_deadline, Instant::from_millis(1033));
        assert_eq!(result.sleep_duration, Duration::from_millis(33));
    }

    #[test]
    fn test_custom_tick_interval() {
        let channel = ControlChannel::new();
        let mut scheduler = FrameScheduler::with_tick_interval(
            renderer(&channel, 8),
            BufferSink::<8>::new(),
            Duration::from_millis(10),
        )
        .unwrap();

        let result = scheduler.tick(Instant::from_millis(0)).unwrap();
        assert_eq!(result.next_deadline, Instant::from_millis(10));
    }

    #[test]
    fn test_sink_failure_drops_frame() {
        let channel = ControlChannel::new();
        let sink = FlakySink {
            pixels: [Rgb::default(); 4],
            fail_show: true,
            shows: 0,
        };
        let mut scheduler = FrameScheduler::init(renderer(&channel, 4), sink).unwrap();

        assert_eq!(scheduler.tick(Instant::from_millis(0)), Err(SinkError));
        // The frame still counts as rendered
        assert_eq!(scheduler.renderer().state().call_counter(), 1);

        scheduler.sink_mut().fail_show = false;
        let result = scheduler.tick(Instant::from_millis(100)).unwrap();
        assert!(result.shown);
        assert_eq!(scheduler.sink().shows, 1);
        assert_eq!(scheduler.sink().pixel_packed(3), 0xFF0000);
    }

    #[test]
    fn test_queued_commands_apply_on_tick() {
        let channel = ControlChannel::new();
        let mut scheduler =
            FrameScheduler::init(renderer(&channel, 8), BufferSink::<8>::new()).unwrap();

        channel.sender().stop().unwrap();
        let result = scheduler.tick(Instant::from_millis(0)).unwrap();
        assert!(!result.rendered);
        assert!(!scheduler.renderer().is_running());

        channel.sender().start().unwrap();
        let result = scheduler.tick(Instant::from_millis(33)).unwrap();
        assert!(result.rendered);
    }

    #[test]
    fn test_restart_at_same_instant_reports_render() {
        let channel = ControlChannel::new();
        let mut scheduler =
            FrameScheduler::init(renderer(&channel, 8), BufferSink::<8>::new()).unwrap();

        let result = scheduler.tick(Instant::from_millis(0)).unwrap();
        assert!(result.rendered);

        channel.sender().start().unwrap();
        let result = scheduler.tick(Instant::from_millis(0)).unwrap();
        assert!(result.rendered);
        assert!(result.shown);
        assert_eq!(scheduler.renderer().state().call_counter(), 1);
    }
}
