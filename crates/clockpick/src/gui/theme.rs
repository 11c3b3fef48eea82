use clockface::picker::ColorPalette;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub surface: Srgba<f64>,
    pub face: Srgba<f64>,
    pub text: Srgba<f64>,
    pub muted: Srgba<f64>,
    pub accent: Srgba<f64>,
    pub on_accent: Srgba<f64>,
}

impl ThemeColors {
    pub fn fallback(palette: ColorPalette) -> Self {
        match palette {
            ColorPalette::Light => Self {
                surface: Srgba::new(0.98, 0.98, 0.98, 0.97),
                face: Srgba::new(0.0, 0.0, 0.0, 0.07),
                text: Srgba::new(0.13, 0.13, 0.13, 1.0),
                muted: Srgba::new(0.13, 0.13, 0.13, 0.45),
                accent: Srgba::new(0.0, 0.59, 0.53, 1.0),
                on_accent: Srgba::new(1.0, 1.0, 1.0, 1.0),
            },
            ColorPalette::Dark => Self {
                surface: Srgba::new(0.16, 0.16, 0.17, 0.97),
                face: Srgba::new(1.0, 1.0, 1.0, 0.08),
                text: Srgba::new(0.93, 0.93, 0.93, 1.0),
                muted: Srgba::new(0.93, 0.93, 0.93, 0.45),
                accent: Srgba::new(0.3, 0.71, 0.67, 1.0),
                on_accent: Srgba::new(0.07, 0.07, 0.07, 1.0),
            },
        }
    }

    /// Palette colours, with the accent taken from the GTK theme when it defines one.
    pub fn from_context(context: &gtk::StyleContext, palette: ColorPalette) -> Self {
        let fallback = Self::fallback(palette);
        let accent = Self::lookup_color(context, "accent_bg_color", None)
            .or_else(|| Self::lookup_color(context, "theme_selected_bg_color", Some(1.0)))
            .unwrap_or(fallback.accent);

        Self { accent, ..fallback }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        alpha_override: Option<f64>,
    ) -> Option<Srgba<f64>> {
        context.lookup_color(name).map(|c| {
            let (r, g, b, a) = (
                c.red() as f64,
                c.green() as f64,
                c.blue() as f64,
                c.alpha() as f64,
            );
            Srgba::new(r, g, b, alpha_override.unwrap_or(a))
        })
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.clockpick-window, .clockpick-drawing-area {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
