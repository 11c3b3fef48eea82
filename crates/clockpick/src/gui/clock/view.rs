use super::layout::{Layout, Rect};
use super::{CENTER_DOT_RADIUS, CORNER_RADIUS, HAND_WIDTH, MINUTE_DOT_RADIUS};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use clockface::angle::{Band, RingKind};
use clockface::classic::ClassicTheme;
use clockface::geometry::{FACE_RADIUS, TICK_RADIUS};
use clockface::ring::{Ring, Tick};
use clockface::time::pad;
use clockface::{Panel, Picker, Point, Step};
use palette::Srgba;
use std::f64::consts::PI;

const HEADER_FONT_SIZE: f64 = 40.0;
const TICK_FONT_SIZE: f64 = 14.0;
const SMALL_FONT_SIZE: f64 = 13.0;
/// Tolerance when matching a hand rotation to a tick angle.
const ANGLE_EPSILON: f64 = 0.01;

fn set_color(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

fn fill_circle(cr: &Context, center: Point, radius: f64) -> Result<(), cairo::Error> {
    cr.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
    cr.fill()
}

fn rounded_rect(cr: &Context, r: Rect, radius: f64) {
    let radius = radius.min(r.width / 2.0).min(r.height / 2.0);
    cr.new_sub_path();
    cr.arc(r.right() - radius, r.y + radius, radius, -PI / 2.0, 0.0);
    cr.arc(r.right() - radius, r.bottom() - radius, radius, 0.0, PI / 2.0);
    cr.arc(r.x + radius, r.bottom() - radius, radius, PI / 2.0, PI);
    cr.arc(r.x + radius, r.y + radius, radius, PI, 1.5 * PI);
    cr.close_path();
}

fn draw_text(
    cr: &Context,
    text: &str,
    center: Point,
    size: f64,
    bold: bool,
) -> Result<(), cairo::Error> {
    let weight = if bold {
        cairo::FontWeight::Bold
    } else {
        cairo::FontWeight::Normal
    };
    cr.select_font_face("Sans", cairo::FontSlant::Normal, weight);
    cr.set_font_size(size);
    if let Ok(ext) = cr.text_extents(text) {
        cr.move_to(
            center.x - ext.width() / 2.0 - ext.x_bearing(),
            center.y - ext.height() / 2.0 - ext.y_bearing(),
        );
        cr.show_text(text)?;
    }
    Ok(())
}

fn tick_label(kind: RingKind, tick: &Tick) -> String {
    match (kind, tick.band) {
        (RingKind::Minute, _) | (RingKind::Hour24, Band::Inner) => pad(tick.value),
        _ => tick.value.to_string(),
    }
}

/// One ring with its hand. `selected` is the value the hand currently points at.
struct RingRenderer<'a> {
    ring: &'a Ring,
    center: Point,
    rotation: f64,
    selected: u32,
}

impl<'a> RingRenderer<'a> {
    fn new(ring: &'a Ring, center: Point, rotation: f64, selected: u32) -> Self {
        Self {
            ring,
            center,
            rotation,
            selected,
        }
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let hand_tick = self.hand_tick();
        self.draw_hand(cr, colors, hand_tick)?;
        self.draw_ticks(cr, colors, hand_tick)
    }

    /// The hand keeps its rotation when the time changes underneath it, so the tick is
    /// found by angle first and by value only to pick a band.
    fn hand_tick(&self) -> Option<&'a Tick> {
        let at_rotation: Vec<&'a Tick> = self
            .ring
            .ticks()
            .iter()
            .filter(|t| (t.angle - self.rotation).abs() < ANGLE_EPSILON)
            .collect();
        at_rotation
            .iter()
            .find(|t| t.value == self.selected)
            .or(at_rotation.first())
            .copied()
    }

    fn draw_hand(
        &self,
        cr: &Context,
        colors: &ThemeColors,
        tick: Option<&Tick>,
    ) -> Result<(), cairo::Error> {
        let radius = tick.map_or(self.ring.radius(), |t| t.center.distance(Point::default()));
        let end = Point::on_circle(self.center, radius, self.rotation);

        set_color(cr, colors.accent);
        cr.set_line_width(HAND_WIDTH);
        cr.move_to(self.center.x, self.center.y);
        cr.line_to(end.x, end.y);
        cr.stroke()?;
        fill_circle(cr, self.center, CENTER_DOT_RADIUS)?;
        fill_circle(cr, end, TICK_RADIUS)
    }

    fn draw_ticks(
        &self,
        cr: &Context,
        colors: &ThemeColors,
        hand_tick: Option<&Tick>,
    ) -> Result<(), cairo::Error> {
        let kind = self.ring.kind();
        for tick in self.ring.ticks() {
            let at = Point::new(self.center.x + tick.center.x, self.center.y + tick.center.y);
            let under_hand = hand_tick.is_some_and(|h| h == tick);

            if tick.labelled {
                set_color(cr, if under_hand { colors.on_accent } else { colors.text });
                let size = match tick.band {
                    Band::Outer => TICK_FONT_SIZE,
                    Band::Inner => SMALL_FONT_SIZE,
                };
                draw_text(cr, &tick_label(kind, tick), at, size, false)?;
            } else {
                set_color(cr, if under_hand { colors.on_accent } else { colors.muted });
                fill_circle(cr, at, MINUTE_DOT_RADIUS)?;
            }
        }
        Ok(())
    }
}

struct PanelRenderer<'a> {
    picker: &'a Picker,
    layout: &'a Layout,
    colors: &'a ThemeColors,
}

impl<'a> PanelRenderer<'a> {
    fn draw(&self, cr: &Context, panel: &Panel) -> Result<(), cairo::Error> {
        self.draw_card(cr)?;

        match panel {
            Panel::TwentyFour(mode) => {
                self.draw_header(cr, Some(mode.step()))?;
                self.draw_face(cr)?;
                let time = self.picker.time();
                let selected = match mode.step() {
                    Step::Hour => time.hour(),
                    Step::Minute => time.minute(),
                };
                RingRenderer::new(mode.active_ring(), self.layout.center, mode.rotation(), selected)
                    .draw(cr, self.colors)
            }
            Panel::Twelve(mode) => {
                self.draw_header(cr, None)?;
                self.draw_face(cr)?;
                let time = self.picker.time();
                RingRenderer::new(
                    mode.minute_ring(),
                    self.layout.center,
                    mode.minute_rotation(),
                    time.minute(),
                )
                .draw(cr, self.colors)?;
                RingRenderer::new(
                    mode.hour_ring(),
                    self.layout.center,
                    mode.hour_rotation(),
                    time.hour_12(),
                )
                .draw(cr, self.colors)?;
                self.draw_close_button(cr)
            }
            Panel::Classic(theme) => {
                self.draw_header(cr, None)?;
                self.draw_classic(cr, theme)
            }
        }
    }

    fn draw_card(&self, cr: &Context) -> Result<(), cairo::Error> {
        set_color(cr, self.colors.surface);
        rounded_rect(cr, self.layout.bounds, CORNER_RADIUS);
        cr.fill()
    }

    fn draw_face(&self, cr: &Context) -> Result<(), cairo::Error> {
        set_color(cr, self.colors.face);
        fill_circle(cr, self.layout.center, FACE_RADIUS)
    }

    /// Hour and minute labels; the one matching `active` is highlighted.
    fn draw_header(&self, cr: &Context, active: Option<Step>) -> Result<(), cairo::Error> {
        let (hour, minute) = self.picker.hour_and_minute();
        let labels = [
            (self.layout.hour_label, hour, Step::Hour),
            (self.layout.minute_label, minute, Step::Minute),
        ];

        for (rect, text, step) in labels {
            let highlighted = active == Some(step);
            if highlighted {
                set_color(cr, self.colors.accent);
                rounded_rect(cr, rect, CORNER_RADIUS);
                cr.fill()?;
            }
            set_color(
                cr,
                if highlighted {
                    self.colors.on_accent
                } else {
                    self.colors.text
                },
            );
            draw_text(cr, &text, rect.center(), HEADER_FONT_SIZE, false)?;
        }

        set_color(cr, self.colors.text);
        draw_text(cr, ":", self.layout.colon, HEADER_FONT_SIZE, false)?;

        if let Some(rect) = self.layout.quantum_label {
            set_color(cr, self.colors.accent);
            cr.set_line_width(1.0);
            rounded_rect(cr, rect, CORNER_RADIUS);
            cr.stroke()?;
            draw_text(
                cr,
                &self.picker.quantum().to_string(),
                rect.center(),
                TICK_FONT_SIZE,
                true,
            )?;
        }
        Ok(())
    }

    fn draw_close_button(&self, cr: &Context) -> Result<(), cairo::Error> {
        let Some(rect) = self.layout.close_button else {
            return Ok(());
        };
        set_color(cr, self.colors.accent);
        draw_text(cr, "CLOSE", rect.center(), SMALL_FONT_SIZE, true)
    }

    fn draw_classic(&self, cr: &Context, theme: &ClassicTheme) -> Result<(), cairo::Error> {
        let selected = theme.selected_index(self.picker.time());

        for (i, (option, rect)) in theme.options().iter().zip(&self.layout.cells).enumerate() {
            if selected == Some(i) {
                set_color(cr, self.colors.accent);
                rounded_rect(cr, *rect, CORNER_RADIUS);
                cr.fill()?;
                set_color(cr, self.colors.on_accent);
            } else {
                set_color(cr, self.colors.text);
            }
            draw_text(cr, &option.label, rect.center(), SMALL_FONT_SIZE, false)?;
        }
        Ok(())
    }
}

/// Paints the open panel. Nothing is drawn while the picker is closed.
pub fn draw(
    cr: &Context,
    picker: &Picker,
    layout: &Layout,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let Some(panel) = picker.panel() else {
        return Ok(());
    };

    PanelRenderer {
        picker,
        layout,
        colors,
    }
    .draw(cr, panel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_labels() {
        let hours = Ring::hours_24();
        let labels: Vec<String> = [12, 3, 0, 15]
            .iter()
            .filter_map(|v| hours.tick(*v))
            .map(|t| tick_label(RingKind::Hour24, t))
            .collect();
        assert_eq!(labels, vec!["12", "3", "00", "15"]);

        let minutes = Ring::minutes();
        let five = minutes.tick(5).unwrap();
        assert_eq!(tick_label(RingKind::Minute, five), "05");
        assert!(five.labelled);
        assert!(!minutes.tick(7).unwrap().labelled);
    }
}
