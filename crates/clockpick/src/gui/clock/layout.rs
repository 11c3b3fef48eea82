use super::{
    CLASSIC_CELL_HEIGHT, CLASSIC_CELL_WIDTH, CLASSIC_COLUMNS, CLOSE_HEIGHT, CLOSE_WIDTH,
    COLON_GAP, HEADER_HEIGHT, LABEL_WIDTH, PANEL_PADDING, QUANTUM_WIDTH,
};
use clockface::geometry::FACE_RADIUS;
use clockface::{Panel, Point, TimeMode};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

/// Shape of the open panel, enough to lay it out without borrowing the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Twelve,
    TwentyFour,
    Classic { count: usize, twelve: bool },
}

impl PanelKind {
    pub fn of(panel: &Panel) -> Self {
        match panel {
            Panel::Twelve(_) => Self::Twelve,
            Panel::TwentyFour(_) => Self::TwentyFour,
            Panel::Classic(theme) => Self::Classic {
                count: theme.options().len(),
                twelve: theme.mode() == TimeMode::Twelve,
            },
        }
    }

    pub fn has_face(&self) -> bool {
        matches!(self, Self::Twelve | Self::TwentyFour)
    }

    fn is_twelve(&self) -> bool {
        match self {
            Self::Twelve => true,
            Self::TwentyFour => false,
            Self::Classic { twelve, .. } => *twelve,
        }
    }
}

/// What a press in window coordinates lands on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    HourLabel,
    MinuteLabel,
    QuantumLabel,
    CloseButton,
    Classic(usize),
    /// Inside the clock face, relative to its centre.
    Face(Point),
    Panel,
    Outside,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub center: Point,
    pub kind: PanelKind,
    pub bounds: Rect,
    pub hour_label: Rect,
    pub minute_label: Rect,
    pub colon: Point,
    pub quantum_label: Option<Rect>,
    pub close_button: Option<Rect>,
    pub cells: Vec<Rect>,
}

impl Layout {
    /// `center` is the face centre, or the middle of the list for the classic panel.
    pub fn new(center: Point, kind: PanelKind) -> Self {
        let twelve = kind.is_twelve();
        let header_width = Self::header_width(twelve);

        let (header_top, content_width, content_bottom, close_button, cells) = match kind {
            PanelKind::Classic { count, .. } => {
                let rows = count.div_ceil(CLASSIC_COLUMNS);
                let grid_width = CLASSIC_COLUMNS as f64 * CLASSIC_CELL_WIDTH;
                let grid_height = rows as f64 * CLASSIC_CELL_HEIGHT;
                let header_top =
                    center.y - (HEADER_HEIGHT + PANEL_PADDING + grid_height) / 2.0;
                let grid_top = header_top + HEADER_HEIGHT + PANEL_PADDING;
                let grid_left = center.x - grid_width / 2.0;

                let cells = (0..count)
                    .map(|i| {
                        let (row, col) = (i / CLASSIC_COLUMNS, i % CLASSIC_COLUMNS);
                        Rect::new(
                            grid_left + col as f64 * CLASSIC_CELL_WIDTH,
                            grid_top + row as f64 * CLASSIC_CELL_HEIGHT,
                            CLASSIC_CELL_WIDTH,
                            CLASSIC_CELL_HEIGHT,
                        )
                    })
                    .collect();

                (header_top, grid_width, grid_top + grid_height, None, cells)
            }
            PanelKind::Twelve | PanelKind::TwentyFour => {
                let header_top = center.y - FACE_RADIUS - PANEL_PADDING - HEADER_HEIGHT;
                let face_bottom = center.y + FACE_RADIUS;
                let close_button = twelve.then(|| {
                    Rect::new(
                        center.x - CLOSE_WIDTH / 2.0,
                        face_bottom + PANEL_PADDING,
                        CLOSE_WIDTH,
                        CLOSE_HEIGHT,
                    )
                });
                let bottom = close_button.map_or(face_bottom, |r| r.bottom());
                (header_top, FACE_RADIUS * 2.0, bottom, close_button, Vec::new())
            }
        };

        let width = content_width.max(header_width) + PANEL_PADDING * 2.0;
        let top = header_top - PANEL_PADDING;
        let bounds = Rect::new(
            center.x - width / 2.0,
            top,
            width,
            content_bottom + PANEL_PADDING - top,
        );

        let left = center.x - header_width / 2.0;
        let hour_label = Rect::new(left, header_top, LABEL_WIDTH, HEADER_HEIGHT);
        let minute_label = Rect::new(
            hour_label.right() + COLON_GAP,
            header_top,
            LABEL_WIDTH,
            HEADER_HEIGHT,
        );
        let quantum_label = twelve.then(|| {
            Rect::new(
                minute_label.right() + PANEL_PADDING,
                header_top + HEADER_HEIGHT / 4.0,
                QUANTUM_WIDTH,
                HEADER_HEIGHT / 2.0,
            )
        });

        Self {
            center,
            kind,
            bounds,
            hour_label,
            minute_label,
            colon: Point::new(
                hour_label.right() + COLON_GAP / 2.0,
                header_top + HEADER_HEIGHT / 2.0,
            ),
            quantum_label,
            close_button,
            cells,
        }
    }

    /// Like [`Layout::new`], shifted so the panel stays on a `width` x `height` surface.
    pub fn within(center: Point, kind: PanelKind, width: f64, height: f64) -> Self {
        let layout = Self::new(center, kind);
        let shift = |start: f64, end: f64, limit: f64| {
            if start < 0.0 {
                -start
            } else if end > limit {
                (limit - end).max(-start)
            } else {
                0.0
            }
        };

        let b = layout.bounds;
        let dx = shift(b.x, b.right(), width);
        let dy = shift(b.y, b.bottom(), height);
        if dx == 0.0 && dy == 0.0 {
            layout
        } else {
            Self::new(Point::new(center.x + dx, center.y + dy), kind)
        }
    }

    pub fn to_face(&self, p: Point) -> Point {
        p.offset_from(self.center)
    }

    pub fn target(&self, p: Point) -> Target {
        if self.quantum_label.is_some_and(|r| r.contains(p)) {
            return Target::QuantumLabel;
        }
        if self.hour_label.contains(p) {
            return Target::HourLabel;
        }
        if self.minute_label.contains(p) {
            return Target::MinuteLabel;
        }
        if self.close_button.is_some_and(|r| r.contains(p)) {
            return Target::CloseButton;
        }
        if let Some(i) = self.cells.iter().position(|r| r.contains(p)) {
            return Target::Classic(i);
        }
        if self.kind.has_face() && p.distance(self.center) <= FACE_RADIUS {
            return Target::Face(self.to_face(p));
        }
        if self.bounds.contains(p) {
            Target::Panel
        } else {
            Target::Outside
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point { x: 400.0, y: 300.0 };

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(r.contains(Point::new(10.0, 20.0)));
        assert!(r.contains(Point::new(39.9, 59.9)));
        assert!(!r.contains(Point::new(40.0, 30.0)));
        assert_eq!(r.center(), Point::new(25.0, 40.0));
    }

    #[test]
    fn test_face_targets_are_relative() {
        let layout = Layout::new(CENTER, PanelKind::TwentyFour);

        assert_eq!(layout.target(CENTER), Target::Face(Point::new(0.0, 0.0)));
        assert_eq!(
            layout.target(Point::new(400.0, 200.0)),
            Target::Face(Point::new(0.0, -100.0))
        );
        assert_eq!(layout.target(Point::new(0.0, 0.0)), Target::Outside);
        // corner of the card, outside the face circle
        let corner = Point::new(layout.bounds.x + 4.0, layout.bounds.bottom() - 4.0);
        assert_eq!(layout.target(corner), Target::Panel);
    }

    #[test]
    fn test_header_targets() {
        let layout = Layout::new(CENTER, PanelKind::TwentyFour);

        assert!(layout.hour_label.bottom() < CENTER.y - FACE_RADIUS);
        assert_eq!(layout.target(layout.hour_label.center()), Target::HourLabel);
        assert_eq!(
            layout.target(layout.minute_label.center()),
            Target::MinuteLabel
        );
        assert_eq!(layout.target(layout.colon), Target::Panel);
        assert_eq!(layout.colon.x, CENTER.x);
        assert!(layout.quantum_label.is_none());
        assert!(layout.close_button.is_none());
    }

    #[test]
    fn test_twelve_hour_extras() {
        let layout = Layout::new(CENTER, PanelKind::Twelve);

        let quantum = layout.quantum_label.unwrap();
        assert_eq!(layout.target(quantum.center()), Target::QuantumLabel);

        let close = layout.close_button.unwrap();
        assert!(close.y > CENTER.y + FACE_RADIUS);
        assert!(layout.bounds.bottom() > close.bottom());
        assert_eq!(layout.target(close.center()), Target::CloseButton);
    }

    #[test]
    fn test_classic_cells() {
        let layout = Layout::new(
            CENTER,
            PanelKind::Classic {
                count: 48,
                twelve: false,
            },
        );

        assert_eq!(layout.cells.len(), 48);
        assert_eq!(layout.target(layout.cells[5].center()), Target::Classic(5));
        assert_eq!(layout.cells[4].y, layout.cells[0].y + CLASSIC_CELL_HEIGHT);
        // no face behind the list
        assert!(!matches!(layout.target(CENTER), Target::Face(_)));
        assert!(layout.cells.iter().all(|c| {
            layout.bounds.contains(Point::new(c.x, c.y)) && c.bottom() < layout.bounds.bottom()
        }));
    }

    #[test]
    fn test_within_keeps_panel_on_surface() {
        let layout = Layout::within(Point::new(5.0, 5.0), PanelKind::Twelve, 1920.0, 1080.0);
        assert_eq!(layout.bounds.x, 0.0);
        assert_eq!(layout.bounds.y, 0.0);

        let layout = Layout::within(Point::new(1915.0, 1075.0), PanelKind::Twelve, 1920.0, 1080.0);
        assert!((layout.bounds.right() - 1920.0).abs() < 1e-9);
        assert!((layout.bounds.bottom() - 1080.0).abs() < 1e-9);

        let unchanged = Layout::within(CENTER, PanelKind::TwentyFour, 1920.0, 1080.0);
        assert_eq!(unchanged, Layout::new(CENTER, PanelKind::TwentyFour));
    }
}
