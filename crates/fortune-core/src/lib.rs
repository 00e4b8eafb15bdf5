pub mod audio;
pub mod color;
pub mod error;
pub mod name;
pub mod registry;
pub mod render;
pub mod segments;
pub mod shuffle;
pub mod spin;
pub mod wheel;

pub use error::WheelError;
pub use name::Name;
pub use wheel::Wheel;
