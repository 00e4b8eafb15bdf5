pub mod app;
pub mod sound;
pub mod theme;
pub mod wheel;
pub mod window;
