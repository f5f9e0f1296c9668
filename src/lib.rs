#![no_std]

pub mod brightness;
pub mod color;
pub mod control;
pub mod effect;
pub mod frame_scheduler;
pub mod math8;
pub mod renderer;
pub mod sink;
pub mod state;

pub use brightness::BrightnessRamp;
pub use control::{
    Command, ControlChannel, ControlReceiver, ControlSender, TryReceiveError, TrySendError,
};
pub use effect::EffectId;
pub use frame_scheduler::{FrameScheduler, TickResult};
pub use renderer::{EngineConfig, FrameOutcome, Renderer};
pub use sink::{BufferSink, PixelSink};
pub use state::{
    BRIGHTNESS_MAX, BRIGHTNESS_MIN, DEFAULT_COLOR, DEFAULT_SPEED, EffectState, SPEED_MAX,
    SPEED_MIN,
};

pub use color::{Rgb, color_wheel, random_wheel_index};
pub use embassy_time::{Duration, Instant};
