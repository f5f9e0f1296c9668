//! Effect registry with compile-time known effect variants
//!
//! Every effect is a render function over the shared [`EffectState`]. The
//! closed [`EffectId`] enum is the dispatch table: lookup is a single
//! `match`, and adding a variant without a render function does not compile.

mod blink;
mod breath;
mod chase;
mod dynamic;
mod fire;
mod fireworks;
mod rainbow;
mod running;
mod scan;
mod sparkle;
mod static_color;
mod theater;
mod twinkle;
mod wipe;

use embassy_time::Duration;
use rand::{Rng, RngCore};

use crate::color::{Rgb, color_wheel, dim, random_wheel_index};
use crate::state::{EffectState, SPEED_MAX};

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum EffectId {
    #[default]
    Static = 0,
    Blink = 1,
    Breath = 2,
    ColorWipe = 3,
    ColorWipeRandom = 4,
    RandomColor = 5,
    SingleDynamic = 6,
    MultiDynamic = 7,
    Rainbow = 8,
    RainbowCycle = 9,
    Scan = 10,
    DualScan = 11,
    Fade = 12,
    TheaterChase = 13,
    TheaterChaseRainbow = 14,
    RunningLights = 15,
    Twinkle = 16,
    TwinkleRandom = 17,
    TwinkleFade = 18,
    TwinkleFadeRandom = 19,
    Sparkle = 20,
    FlashSparkle = 21,
    HyperSparkle = 22,
    Strobe = 23,
    StrobeRainbow = 24,
    MultiStrobe = 25,
    BlinkRainbow = 26,
    ChaseWhite = 27,
    ChaseColor = 28,
    ChaseRandom = 29,
    ChaseRainbow = 30,
    ChaseFlash = 31,
    ChaseFlashRandom = 32,
    ChaseRainbowWhite = 33,
    ChaseBlackout = 34,
    ChaseBlackoutRainbow = 35,
    ColorSweepRandom = 36,
    RunningColor = 37,
    RunningRedBlue = 38,
    RunningRandom = 39,
    LarsonScanner = 40,
    Comet = 41,
    Fireworks = 42,
    FireworksRandom = 43,
    MerryChristmas = 44,
    FireFlicker = 45,
    FireFlickerSoft = 46,
    FireFlickerIntense = 47,
    DualColorWipeInOut = 48,
    DualColorWipeInIn = 49,
    DualColorWipeOutOut = 50,
    DualColorWipeOutIn = 51,
    CircusCombustus = 52,
    Halloween = 53,
}

impl EffectId {
    /// Number of registered effects
    pub const COUNT: usize = Self::ALL.len();

    /// Every effect, ordered by id
    pub const ALL: [Self; 54] = [
        Self::Static,
        Self::Blink,
        Self::Breath,
        Self::ColorWipe,
        Self::ColorWipeRandom,
        Self::RandomColor,
        Self::SingleDynamic,
        Self::MultiDynamic,
        Self::Rainbow,
        Self::RainbowCycle,
        Self::Scan,
        Self::DualScan,
        Self::Fade,
        Self::TheaterChase,
        Self::TheaterChaseRainbow,
        Self::RunningLights,
        Self::Twinkle,
        Self::TwinkleRandom,
        Self::TwinkleFade,
        Self::TwinkleFadeRandom,
        Self::Sparkle,
        Self::FlashSparkle,
        Self::HyperSparkle,
        Self::Strobe,
        Self::StrobeRainbow,
        Self::MultiStrobe,
        Self::BlinkRainbow,
        Self::ChaseWhite,
        Self::ChaseColor,
        Self::ChaseRandom,
        Self::ChaseRainbow,
        Self::ChaseFlash,
        Self::ChaseFlashRandom,
        Self::ChaseRainbowWhite,
        Self::ChaseBlackout,
        Self::ChaseBlackoutRainbow,
        Self::ColorSweepRandom,
        Self::RunningColor,
        Self::RunningRedBlue,
        Self::RunningRandom,
        Self::LarsonScanner,
        Self::Comet,
        Self::Fireworks,
        Self::FireworksRandom,
        Self::MerryChristmas,
        Self::FireFlicker,
        Self::FireFlickerSoft,
        Self::FireFlickerIntense,
        Self::DualColorWipeInOut,
        Self::DualColorWipeInIn,
        Self::DualColorWipeOutOut,
        Self::DualColorWipeOutIn,
        Self::CircusCombustus,
        Self::Halloween,
    ];

    /// Last valid effect
    pub const LAST: Self = Self::ALL[Self::COUNT - 1];

    pub fn from_raw(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    /// Resolve a raw id, clamping anything past the end to the last effect
    pub fn from_raw_clamped(value: u8) -> Self {
        Self::from_raw(value).unwrap_or(Self::LAST)
    }

    /// Map an angle (0-360 degrees) linearly onto the id range
    ///
    /// Meant for continuous inputs such as rotary encoders. Angles outside
    /// the range are clamped to the first or last effect.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_angle(degrees: f32) -> Self {
        // Float-to-int casts saturate, so NaN and negative angles land on 0
        let degrees = degrees as u16;
        let last = (Self::COUNT - 1) as u32;
        let raw = u32::from(degrees) * last / 360;
        Self::from_raw_clamped(raw.min(u32::from(u8::MAX)) as u8)
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Blink => "blink",
            Self::Breath => "breath",
            Self::ColorWipe => "color_wipe",
            Self::ColorWipeRandom => "color_wipe_random",
            Self::RandomColor => "random_color",
            Self::SingleDynamic => "single_dynamic",
            Self::MultiDynamic => "multi_dynamic",
            Self::Rainbow => "rainbow",
            Self::RainbowCycle => "rainbow_cycle",
            Self::Scan => "scan",
            Self::DualScan => "dual_scan",
            Self::Fade => "fade",
            Self::TheaterChase => "theater_chase",
            Self::TheaterChaseRainbow => "theater_chase_rainbow",
            Self::RunningLights => "running_lights",
            Self::Twinkle => "twinkle",
            Self::TwinkleRandom => "twinkle_random",
            Self::TwinkleFade => "twinkle_fade",
            Self::TwinkleFadeRandom => "twinkle_fade_random",
            Self::Sparkle => "sparkle",
            Self::FlashSparkle => "flash_sparkle",
            Self::HyperSparkle => "hyper_sparkle",
            Self::Strobe => "strobe",
            Self::StrobeRainbow => "strobe_rainbow",
            Self::MultiStrobe => "multi_strobe",
            Self::BlinkRainbow => "blink_rainbow",
            Self::ChaseWhite => "chase_white",
            Self::ChaseColor => "chase_color",
            Self::ChaseRandom => "chase_random",
            Self::ChaseRainbow => "chase_rainbow",
            Self::ChaseFlash => "chase_flash",
            Self::ChaseFlashRandom => "chase_flash_random",
            Self::ChaseRainbowWhite => "chase_rainbow_white",
            Self::ChaseBlackout => "chase_blackout",
            Self::ChaseBlackoutRainbow => "chase_blackout_rainbow",
            Self::ColorSweepRandom => "color_sweep_random",
            Self::RunningColor => "running_color",
            Self::RunningRedBlue => "running_red_blue",
            Self::RunningRandom => "running_random",
            Self::LarsonScanner => "larson_scanner",
            Self::Comet => "comet",
            Self::Fireworks => "fireworks",
            Self::FireworksRandom => "fireworks_random",
            Self::MerryChristmas => "merry_christmas",
            Self::FireFlicker => "fire_flicker",
            Self::FireFlickerSoft => "fire_flicker_soft",
            Self::FireFlickerIntense => "fire_flicker_intense",
            Self::DualColorWipeInOut => "dual_color_wipe_in_out",
            Self::DualColorWipeInIn => "dual_color_wipe_in_in",
            Self::DualColorWipeOutOut => "dual_color_wipe_out_out",
            Self::DualColorWipeOutIn => "dual_color_wipe_out_in",
            Self::CircusCombustus => "circus_combustus",
            Self::Halloween => "halloween",
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    /// Render one frame of this effect and return the requested delay
    /// before the next one.
    pub(crate) fn render<R: RngCore>(self, fx: &mut FrameContext<'_, R>) -> Duration {
        match self {
            Self::Static => static_color::render(fx),
            Self::Blink => blink::blink(fx),
            Self::Breath => breath::breath(fx),
            Self::ColorWipe => wipe::color_wipe(fx),
            Self::ColorWipeRandom => wipe::color_wipe_random(fx),
            Self::RandomColor => dynamic::random_color(fx),
            Self::SingleDynamic => dynamic::single_dynamic(fx),
            Self::MultiDynamic => dynamic::multi_dynamic(fx),
            Self::Rainbow => rainbow::rainbow(fx),
            Self::RainbowCycle => rainbow::rainbow_cycle(fx),
            Self::Scan => scan::scan(fx),
            Self::DualScan => scan::dual_scan(fx),
            Self::Fade => breath::fade(fx),
            Self::TheaterChase => theater::theater_chase(fx),
            Self::TheaterChaseRainbow => theater::theater_chase_rainbow(fx),
            Self::RunningLights => running::running_lights(fx),
            Self::Twinkle => twinkle::twinkle(fx),
            Self::TwinkleRandom => twinkle::twinkle_random(fx),
            Self::TwinkleFade => twinkle::twinkle_fade(fx),
            Self::TwinkleFadeRandom => twinkle::twinkle_fade_random(fx),
            Self::Sparkle => sparkle::sparkle(fx),
            Self::FlashSparkle => sparkle::flash_sparkle(fx),
            Self::HyperSparkle => sparkle::hyper_sparkle(fx),
            Self::Strobe => blink::strobe(fx),
            Self::StrobeRainbow => blink::strobe_rainbow(fx),
            Self::MultiStrobe => blink::multi_strobe(fx),
            Self::BlinkRainbow => blink::blink_rainbow(fx),
            Self::ChaseWhite => chase::chase_white(fx),
            Self::ChaseColor => chase::chase_color(fx),
            Self::ChaseRandom => chase::chase_random(fx),
            Self::ChaseRainbow => chase::chase_rainbow(fx),
            Self::ChaseFlash => chase::chase_flash(fx),
            Self::ChaseFlashRandom => chase::chase_flash_random(fx),
            Self::ChaseRainbowWhite => chase::chase_rainbow_white(fx),
            Self::ChaseBlackout => chase::chase_blackout(fx),
            Self::ChaseBlackoutRainbow => chase::chase_blackout_rainbow(fx),
            Self::ColorSweepRandom => wipe::color_sweep_random(fx),
            Self::RunningColor => running::running_color(fx),
            Self::RunningRedBlue => running::running_red_blue(fx),
            Self::RunningRandom => running::running_random(fx),
            Self::LarsonScanner => scan::larson_scanner(fx),
            Self::Comet => scan::comet(fx),
            Self::Fireworks => fireworks::fireworks(fx),
            Self::FireworksRandom => fireworks::fireworks_random(fx),
            Self::MerryChristmas => running::merry_christmas(fx),
            Self::FireFlicker => fire::fire_flicker(fx),
            Self::FireFlickerSoft => fire::fire_flicker_soft(fx),
            Self::FireFlickerIntense => fire::fire_flicker_intense(fx),
            Self::DualColorWipeInOut => wipe::dual_color_wipe_in_out(fx),
            Self::DualColorWipeInIn => wipe::dual_color_wipe_in_in(fx),
            Self::DualColorWipeOutOut => wipe::dual_color_wipe_out_out(fx),
            Self::DualColorWipeOutIn => wipe::dual_color_wipe_out_in(fx),
            Self::CircusCombustus => running::circus_combustus(fx),
            Self::Halloween => running::halloween(fx),
        }
    }
}

const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Everything a render function may touch while producing one frame
pub(crate) struct FrameContext<'a, R: RngCore> {
    pub(crate) state: &'a mut EffectState,
    leds: &'a mut [Rgb],
    rng: &'a mut R,
    show: bool,
}

impl<'a, R: RngCore> FrameContext<'a, R> {
    pub(crate) fn new(state: &'a mut EffectState, leds: &'a mut [Rgb], rng: &'a mut R) -> Self {
        Self {
            state,
            leds,
            rng,
            show: false,
        }
    }

    /// Check if the frame asked to be pushed to the strip
    pub(crate) const fn show_requested(&self) -> bool {
        self.show
    }

    /// Request a push to the strip once the frame is done
    fn show(&mut self) {
        self.show = true;
    }

    fn len(&self) -> usize {
        self.leds.len()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn len_u32(&self) -> u32 {
        self.leds.len() as u32
    }

    /// Write a pixel; indices past the strip are ignored
    fn set(&mut self, index: usize, color: Rgb) {
        if let Some(led) = self.leds.get_mut(index) {
            *led = color;
        }
    }

    /// Write a pixel at a signed position; negative indices are ignored
    fn set_signed(&mut self, index: i32, color: Rgb) {
        if let Ok(index) = usize::try_from(index) {
            self.set(index, color);
        }
    }

    fn fill(&mut self, color: Rgb) {
        self.leds.fill(color);
    }

    /// Blank the strip and push it
    fn strip_off(&mut self) {
        self.leds.fill(BLACK);
        self.show();
    }

    /// Halve every pixel, leaving trails behind moving lights
    fn fade_all(&mut self) {
        for led in self.leds.iter_mut() {
            *led = dim(*led);
        }
    }

    fn leds_mut(&mut self) -> &mut [Rgb] {
        &mut *self.leds
    }

    /// Uniform random value in `min..max`
    ///
    /// Returns `min` when the range is a single value and 0 when it is empty.
    fn random(&mut self, min: u32, max: u32) -> u32 {
        if min < max {
            self.rng.gen_range(min..max)
        } else if min == max {
            min
        } else {
            0
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn random_index(&mut self) -> usize {
        let len = self.len_u32();
        self.random(0, len) as usize
    }

    #[allow(clippy::cast_possible_truncation)]
    fn random_wheel_color(&mut self) -> Rgb {
        color_wheel(self.random(0, 256) as u8)
    }

    /// Move the scratch slot to a new random wheel position
    #[allow(clippy::cast_possible_truncation)]
    fn next_wheel_index(&mut self) -> u8 {
        let index = random_wheel_index(&mut *self.rng, self.state.scratch as u8);
        self.state.scratch = u32::from(index);
        index
    }

    /// Wheel color at the position stored in the scratch slot
    #[allow(clippy::cast_possible_truncation)]
    fn scratch_wheel_color(&self) -> Rgb {
        color_wheel(self.state.scratch as u8)
    }

    /// `base + range * (SPEED_MAX - speed) / SPEED_MAX` milliseconds
    fn speed_delay(&self, base: u64, range: u64) -> Duration {
        let slowdown = u64::from(SPEED_MAX - self.state.speed);
        Duration::from_millis(base + range * slowdown / u64::from(SPEED_MAX))
    }

    /// `base + range * (SPEED_MAX - speed) / led_count` milliseconds
    ///
    /// Per-pixel timing of travelling effects, so a full pass over the strip
    /// takes roughly the same time regardless of its length.
    fn length_delay(&self, base: u64, range: u64) -> Duration {
        let slowdown = u64::from(SPEED_MAX - self.state.speed);
        let len = (self.len() as u64).max(1);
        Duration::from_millis(base + range * slowdown / len)
    }
}
