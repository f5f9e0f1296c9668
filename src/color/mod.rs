mod diffusion;
mod utils;
mod wheel;

pub use diffusion::{diffuse, dim};
pub use utils::{rgb_from_u32, rgb_to_u32, scale_color};
pub use wheel::{
    MIN_WHEEL_DISTANCE, RANDOM_WHEEL_ATTEMPTS, color_wheel, random_wheel_index, wheel_distance,
};
use smart_leds::RGB8;

pub type Rgb = RGB8;
