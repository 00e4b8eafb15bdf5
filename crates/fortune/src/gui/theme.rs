use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

const CSS: &str = ".fortune-wheel { background-color: transparent; }
.fortune-names row { padding: 2px 6px; }";

/// Named theme color, the value used when the theme lacks it, and an optional
/// fixed alpha.
type ThemeSlot = (&'static str, [f64; 4], Option<f64>);

const POINTER: ThemeSlot = ("theme_fg_color", [0.9, 0.9, 0.9, 1.0], Some(1.0));
const RIM: ThemeSlot = ("borders", [0.1, 0.1, 0.1, 0.8], Some(0.8));
const HUB: ThemeSlot = ("theme_bg_color", [0.15, 0.15, 0.15, 1.0], None);

pub struct ThemeColors {
    pub pointer: Srgba<f64>,
    pub rim: Srgba<f64>,
    pub hub: Srgba<f64>,
}

#[allow(deprecated)]
impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        let resolve = |(name, fallback, alpha): ThemeSlot| match context.lookup_color(name) {
            Some(c) => Srgba::new(
                f64::from(c.red()),
                f64::from(c.green()),
                f64::from(c.blue()),
                alpha.unwrap_or(f64::from(c.alpha())),
            ),
            None => {
                let [r, g, b, a] = fallback;
                Srgba::new(r, g, b, a)
            }
        };

        Self {
            pointer: resolve(POINTER),
            rim: resolve(RIM),
            hub: resolve(HUB),
        }
    }
}

pub fn load_css() {
    let Some(display) = gdk::Display::default() else {
        return;
    };
    let provider = gtk::CssProvider::new();
    provider.load_from_data(CSS);
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}
