pub mod view;

pub use view::draw;

pub const LABEL_FONT: &str = "Sans";
pub const RIM_WIDTH: f64 = 2.0;
pub const HUB_RADIUS: f64 = 12.0;
pub const POINTER_LENGTH: f64 = 28.0; // inward from the rim
pub const POINTER_HALF_WIDTH: f64 = 12.0;
