use crate::color::SliceColors;
use crate::name::Name;
use palette::Srgb;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

pub const DEFAULT_SIZE: f64 = 500.0;
pub const DEFAULT_LABEL_INSET: f64 = 10.0; // distance from rim to label end
pub const DEFAULT_FONT_SIZE: f64 = 18.0;
pub const LABEL_BASELINE: f64 = 10.0; // below the slice bisector
pub const LABEL_COLOR: Srgb<u8> = Srgb::new(255, 255, 255);

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Square drawing area the wheel is painted into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelLayout {
    pub size: f64,
    pub label_inset: f64,
    pub font_size: f64,
}

impl Default for WheelLayout {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            label_inset: DEFAULT_LABEL_INSET,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl WheelLayout {
    pub fn radius(&self) -> f64 {
        self.size / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.radius(), self.radius())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceGeometry {
    pub start: f64,
    pub end: f64,
}

impl SliceGeometry {
    pub fn new(index: usize, count: usize, rotation: f64) -> Self {
        let step = TAU / count as f64;
        let start = rotation + index as f64 * step;
        Self {
            start,
            end: start + step,
        }
    }

    pub fn bisector(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// A text label laid along a slice bisector, right-aligned at `x` in the
/// slice's rotated frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Label<'a> {
    pub text: &'a str,
    pub center: Point,
    pub angle: f64,
    pub x: f64,
    pub baseline: f64,
    pub font_size: f64,
    pub color: Srgb<u8>,
}

/// Drawing commands the wheel needs from a display backend.
pub trait Surface {
    type Error;

    fn clear(&mut self) -> Result<(), Self::Error>;

    fn fill_slice(
        &mut self,
        center: Point,
        radius: f64,
        slice: SliceGeometry,
        color: Srgb<u8>,
    ) -> Result<(), Self::Error>;

    fn draw_label(&mut self, label: &Label<'_>) -> Result<(), Self::Error>;
}

/// Paints every segment as an equal slice starting at `rotation`.
pub fn paint<S: Surface>(
    surface: &mut S,
    layout: &WheelLayout,
    segments: &[Name],
    rotation: f64,
    colors: &mut SliceColors,
) -> Result<(), S::Error> {
    surface.clear()?;

    let count = segments.len();
    let (center, radius) = (layout.center(), layout.radius());

    for (index, name) in segments.iter().enumerate() {
        let slice = SliceGeometry::new(index, count, rotation);
        surface.fill_slice(center, radius, slice, colors.pick(name))?;
        surface.draw_label(&Label {
            text: name.as_str(),
            center,
            angle: slice.bisector(),
            x: radius - layout.label_inset,
            baseline: LABEL_BASELINE,
            font_size: layout.font_size,
            color: LABEL_COLOR,
        })?;
    }
    Ok(())
}
