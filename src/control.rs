//! Control queue for `no_std` environments.
//!
//! Control operations usually originate outside the scheduling context (a
//! button handler, a network task). They are queued here and drained by the
//! renderer at the start of every tick, so the effect state has a single
//! writer. Multi-sender safe via `critical-section`.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::color::Rgb;
use crate::effect::EffectId;

/// Error returned when trying to send to a full channel.
///
/// Carries the rejected command back to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrySendError<T>(pub T);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A single control operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SelectEffect(EffectId),
    /// Raw id, clamped to the last effect
    SelectEffectRaw(u8),
    /// Angle in degrees (0-360), mapped linearly onto the id range
    SelectEffectFromAngle(f32),
    SetSpeed(u8),
    SetColor(Rgb),
    /// Color given as `0xRRGGBB`
    SetColorPacked(u32),
    /// Target brightness, reached through the ramp
    SetBrightness(u8),
    /// Brightness applied at once, bypassing the ramp
    ForceBrightness(u8),
    SetInverted(bool),
    SetRampEnabled(bool),
    Start,
    Stop,
}

/// A bounded queue of [`Command`]s.
///
/// Backed by a fixed-size `heapless::Deque` guarded by a critical section,
/// so it can live in a `static`.
pub struct ControlChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Command, SIZE>>>,
}

impl<const SIZE: usize> ControlChannel<SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    ///
    /// Multiple senders can coexist; they share access to the same queue.
    pub const fn sender(&self) -> ControlSender<'_, SIZE> {
        ControlSender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> ControlReceiver<'_, SIZE> {
        ControlReceiver { channel: self }
    }

    /// Try to queue a command.
    ///
    /// Returns `Err(TrySendError(command))` if the channel is full.
    pub fn try_send(&self, command: Command) -> Result<(), TrySendError<Command>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(TrySendError)
        })
    }

    /// Try to take the oldest queued command.
    pub fn try_receive(&self) -> Result<Command, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of queued commands
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for ControlChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`ControlChannel`].
///
/// This is a lightweight reference that can be copied and passed around.
#[derive(Clone, Copy)]
pub struct ControlSender<'a, const SIZE: usize> {
    channel: &'a ControlChannel<SIZE>,
}

impl<const SIZE: usize> ControlSender<'_, SIZE> {
    /// Try to queue a command.
    ///
    /// Returns `Err(TrySendError(command))` if the channel is full.
    pub fn try_send(&self, command: Command) -> Result<(), TrySendError<Command>> {
        self.channel.try_send(command)
    }

    pub fn select_effect(&self, effect: EffectId) -> Result<(), TrySendError<Command>> {
        self.try_send(Command::SelectEffect(effect))
    }

    pub fn select_effect_raw(&self, id: u8) -> Result<(), TrySendError<Command>> {
        self.try_send(Command::SelectEffectRaw(id))
    }

    pub fn select_effect_from_angle(&self, degrees: f32) -> Result<(), TrySendError<Command>> {
        self.try_send(Command::SelectEffectFromAngle(degrees))
    }

    pub fn set_speed(&self, speed: u8) -> Result<(), TrySendError<Command>> {
        self.try_send(Command::SetSpeed(speed))
    }

    pub fn set_color(&self, color: Rgb) -> Result<(), TrySendError<Command>> {
        self.try_send(Command::SetColor(color))
    }

    pub fn set_color_packed(&self, color: u32) -> Result<(), TrySendError<Command>> {
        self.try_send(Command::SetColorPacked(color))
    }

    pub fn set_brightness(&self, brightness: u8) -> Result<(), TrySendError<Command>> {
        self.try_send(Command::SetBrightness(brightness))
    }

    pub fn force_brightness(&self, brightness: u8) -> Result<(), TrySendError<Command>> {
        self.try_send(Command::ForceBrightness(brightness))
    }

    pub fn set_inverted(&self, inverted: bool) -> Result<(), TrySendError<Command>> {
        self.try_send(Command::SetInverted(inverted))
    }

    pub fn set_ramp_enabled(&self, enabled: bool) -> Result<(), TrySendError<Command>> {
        self.try_send(Command::SetRampEnabled(enabled))
    }

    pub fn start(&self) -> Result<(), TrySendError<Command>> {
        self.try_send(Command::Start)
    }

    pub fn stop(&self) -> Result<(), TrySendError<Command>> {
        self.try_send(Command::Stop)
    }
}

/// A receiver handle for a [`ControlChannel`].
#[derive(Clone, Copy)]
pub struct ControlReceiver<'a, const SIZE: usize> {
    channel: &'a ControlChannel<SIZE>,
}

impl<const SIZE: usize> ControlReceiver<'_, SIZE> {
    /// Try to take the oldest queued command.
    ///
    /// Returns `Err(TryReceiveError)` if the channel is empty.
    pub fn try_receive(&self) -> Result<Command, TryReceiveError> {
        self.channel.try_receive()
    }
}
