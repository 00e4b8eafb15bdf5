use super::{HUB_RADIUS, LABEL_FONT, POINTER_HALF_WIDTH, POINTER_LENGTH, RIM_WIDTH};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use fortune_core::Wheel;
use fortune_core::color::SliceColors;
use fortune_core::render::{self, Label, Point, SliceGeometry, Surface, WheelLayout};
use palette::{Srgb, Srgba};
use std::f64::consts::PI;

struct CairoSurface<'a> {
    cr: &'a Context,
}

impl CairoSurface<'_> {
    fn set_source(&self, color: Srgb<u8>) {
        let (r, g, b) = color.into_format::<f64>().into_components();
        self.cr.set_source_rgb(r, g, b);
    }
}

impl Surface for CairoSurface<'_> {
    type Error = cairo::Error;

    fn clear(&mut self) -> Result<(), cairo::Error> {
        self.cr.save()?;
        self.cr.set_operator(cairo::Operator::Clear);
        self.cr.paint()?;
        self.cr.restore()
    }

    fn fill_slice(
        &mut self,
        center: Point,
        radius: f64,
        slice: SliceGeometry,
        color: Srgb<u8>,
    ) -> Result<(), cairo::Error> {
        self.set_source(color);
        self.cr.move_to(center.x, center.y);
        self.cr.arc(center.x, center.y, radius, slice.start, slice.end);
        self.cr.close_path();
        self.cr.fill()
    }

    fn draw_label(&mut self, label: &Label<'_>) -> Result<(), cairo::Error> {
        let cr = self.cr;
        cr.save()?;
        cr.translate(label.center.x, label.center.y);
        cr.rotate(label.angle);
        self.set_source(label.color);
        cr.select_font_face(LABEL_FONT, cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        cr.set_font_size(label.font_size);
        // right-aligned: the text ends at label.x
        if let Ok(ext) = cr.text_extents(label.text) {
            cr.move_to(label.x - ext.x_advance(), label.baseline);
            cr.show_text(label.text)?;
        }
        cr.restore()
    }
}

fn set_source_rgba(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

pub fn draw(
    cr: &Context,
    layout: &WheelLayout,
    wheel: &Wheel,
    colors: &mut SliceColors,
    theme: &ThemeColors,
) -> Result<(), cairo::Error> {
    render::paint(
        &mut CairoSurface { cr },
        layout,
        wheel.segments(),
        wheel.rotation(),
        colors,
    )?;

    if !wheel.segments().is_empty() {
        draw_rim(cr, layout, theme)?;
        draw_hub(cr, layout, theme)?;
    }
    draw_pointer(cr, layout, theme)
}

fn draw_rim(cr: &Context, layout: &WheelLayout, theme: &ThemeColors) -> Result<(), cairo::Error> {
    let center = layout.center();
    set_source_rgba(cr, theme.rim);
    cr.set_line_width(RIM_WIDTH);
    cr.arc(
        center.x,
        center.y,
        layout.radius() - RIM_WIDTH / 2.0,
        0.0,
        2.0 * PI,
    );
    cr.stroke()
}

fn draw_hub(cr: &Context, layout: &WheelLayout, theme: &ThemeColors) -> Result<(), cairo::Error> {
    let center = layout.center();
    set_source_rgba(cr, theme.hub);
    cr.arc(center.x, center.y, HUB_RADIUS, 0.0, 2.0 * PI);
    cr.fill()
}

/// Marker at angle zero, where the landing slice is read from.
fn draw_pointer(
    cr: &Context,
    layout: &WheelLayout,
    theme: &ThemeColors,
) -> Result<(), cairo::Error> {
    let center = layout.center();
    let rim_x = center.x + layout.radius();

    set_source_rgba(cr, theme.pointer);
    cr.move_to(rim_x - POINTER_LENGTH, center.y);
    cr.line_to(rim_x, center.y - POINTER_HALF_WIDTH);
    cr.line_to(rim_x, center.y + POINTER_HALF_WIDTH);
    cr.close_path();
    cr.fill()
}
