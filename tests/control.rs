mod tests {
    use embassy_time::Instant;
    use myrtio_fx_engine::color::Rgb;
    use myrtio_fx_engine::{
        Command, ControlChannel, EffectId, EngineConfig, Renderer, TryReceiveError, TrySendError,
    };
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_channel_is_fifo() {
        let channel = ControlChannel::<4>::new();
        let sender = channel.sender();
        let receiver = channel.receiver();

        sender.set_speed(10).unwrap();
        sender.start().unwrap();
        assert_eq!(channel.len(), 2);

        assert_eq!(receiver.try_receive(), Ok(Command::SetSpeed(10)));
        assert_eq!(receiver.try_receive(), Ok(Command::Start));
        assert_eq!(receiver.try_receive(), Err(TryReceiveError));
        assert!(channel.is_empty());
    }

    #[test]
    fn test_full_channel_returns_command() {
        let channel = ControlChannel::<2>::new();
        let sender = channel.sender();

        sender.set_brightness(1).unwrap();
        sender.set_brightness(2).unwrap();
        assert_eq!(sender.stop(), Err(TrySendError(Command::Stop)));

        channel.receiver().try_receive().unwrap();
        assert_eq!(sender.stop(), Ok(()));
    }

    #[test]
    fn test_commands_apply_on_tick() {
        let channel = ControlChannel::<16>::new();
        let mut renderer: Renderer<'_, StepRng, 8, 16> = Renderer::new(
            channel.receiver(),
            StepRng::new(0, 0),
            &EngineConfig::default(),
        );

        let sender = channel.sender();
        sender.select_effect_raw(200).unwrap();
        sender.set_speed(42).unwrap();
        sender.set_color_packed(0x00FF00).unwrap();
        sender.set_brightness(77).unwrap();
        sender.set_inverted(true).unwrap();
        sender.set_ramp_enabled(true).unwrap();
        sender.start().unwrap();

        // Nothing changes before the engine drains the queue
        assert_eq!(renderer.effect(), EffectId::Static);
        assert!(!renderer.is_running());

        renderer.tick(Instant::from_millis(0));
        assert!(channel.is_empty());
        assert_eq!(renderer.effect(), EffectId::Halloween);
        assert_eq!(renderer.speed(), 42);
        assert_eq!(renderer.color(), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(renderer.brightness(), 77);
        assert!(renderer.inverted());
        assert!(renderer.ramp_enabled());
        assert!(renderer.is_running());
        assert_eq!(renderer.state().call_counter(), 1);
    }

    #[test]
    fn test_effect_commands() {
        let channel = ControlChannel::<4>::new();
        let mut renderer: Renderer<'_, StepRng, 8, 4> = Renderer::new(
            channel.receiver(),
            StepRng::new(0, 0),
            &EngineConfig::default(),
        );

        channel.sender().select_effect(EffectId::Comet).unwrap();
        renderer.tick(Instant::from_millis(0));
        assert_eq!(renderer.effect(), EffectId::Comet);

        channel.sender().select_effect_from_angle(0.0).unwrap();
        renderer.tick(Instant::from_millis(0));
        assert_eq!(renderer.effect(), EffectId::Static);

        renderer.apply(Command::ForceBrightness(90));
        assert_eq!(renderer.current_brightness(), 90);
        renderer.apply(Command::SetColor(Rgb { r: 1, g: 2, b: 3 }));
        assert_eq!(renderer.color(), Rgb { r: 1, g: 2, b: 3 });
    }
}
