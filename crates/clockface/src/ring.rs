use crate::angle::{Band, RingKind};
use crate::geometry::{INNER_RING_RADIUS, OUTER_RING_RADIUS, Point, TICK_RADIUS};

/// A value chosen on a ring, with the snapped angle of its slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub value: u32,
    pub angle: f64,
}

impl Selection {
    pub fn new(value: u32, angle: f64) -> Self {
        Self { value, angle }
    }

    pub fn of(kind: RingKind, value: u32) -> Self {
        Self::new(value, kind.value_to_angle(value))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: u32,
    pub angle: f64,
    /// Tick centre relative to the face centre.
    pub center: Point,
    pub band: Band,
    pub labelled: bool,
}

impl Tick {
    pub fn selection(&self) -> Selection {
        Selection::new(self.value, self.angle)
    }
}

/// Fixed ring of clickable ticks around the face centre (the origin).
#[derive(Debug, Clone)]
pub struct Ring {
    kind: RingKind,
    radius: f64,
    ticks: Vec<Tick>,
}

impl Ring {
    pub fn new(kind: RingKind, radius: f64) -> Self {
        let ticks = match kind {
            RingKind::Hour12 => Self::band(kind, radius, Band::Outer, |i| kind.normalize(i)),
            RingKind::Minute => Self::band(kind, radius, Band::Outer, |i| i),
            RingKind::Hour24 => {
                // the inner band always sits on the fixed inner orbit
                let mut ticks = Self::band(kind, radius, Band::Outer, |i| {
                    if i == 0 { 12 } else { i }
                });
                ticks.extend(Self::band(kind, INNER_RING_RADIUS, Band::Inner, |i| {
                    if i == 0 { 0 } else { i + 12 }
                }));
                ticks
            }
        };

        Self {
            kind,
            radius,
            ticks,
        }
    }

    pub fn hours_12() -> Self {
        Self::new(RingKind::Hour12, INNER_RING_RADIUS)
    }

    pub fn hours_24() -> Self {
        Self::new(RingKind::Hour24, OUTER_RING_RADIUS)
    }

    pub fn minutes() -> Self {
        Self::new(RingKind::Minute, OUTER_RING_RADIUS)
    }

    fn band(kind: RingKind, radius: f64, band: Band, value_at: impl Fn(u32) -> u32) -> Vec<Tick> {
        let positions = kind.positions();
        // only every 5th minute carries a label
        let label_every = if kind == RingKind::Minute { 5 } else { 1 };

        (0..positions)
            .map(|i| {
                let angle = 360.0 * i as f64 / positions as f64;
                Tick {
                    value: value_at(i),
                    angle,
                    center: Point::on_circle(Point::default(), radius, angle),
                    band,
                    labelled: i % label_every == 0,
                }
            })
            .collect()
    }

    pub fn kind(&self) -> RingKind {
        self.kind
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    pub fn tick(&self, value: u32) -> Option<&Tick> {
        self.ticks.iter().find(|t| t.value == value)
    }

    /// Nearest tick whose target contains `point`.
    pub fn hit_test(&self, point: Point) -> Option<&Tick> {
        self.ticks
            .iter()
            .map(|t| (t, t.center.distance(point)))
            .filter(|(_, d)| *d <= TICK_RADIUS)
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(t, _)| t)
    }

    /// Discrete click: reports what a drag ending on the same tick reports.
    pub fn click(&self, point: Point) -> Option<Selection> {
        self.hit_test(point).map(Tick::selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_sizes() {
        assert_eq!(Ring::hours_12().ticks().len(), 12);
        assert_eq!(Ring::hours_24().ticks().len(), 24);
        assert_eq!(Ring::minutes().ticks().len(), 60);
        assert_eq!(
            Ring::minutes().ticks().iter().filter(|t| t.labelled).count(),
            12
        );
    }

    #[test]
    fn test_tick_angles_follow_index() {
        let ring = Ring::minutes();
        for (i, tick) in ring.ticks().iter().enumerate() {
            assert_eq!(tick.angle, 6.0 * i as f64);
            assert_eq!(tick.value, i as u32);
        }
        assert_eq!(Ring::hours_12().ticks()[0].value, 12);
    }

    #[test]
    fn test_hours_24_bands() {
        let ring = Ring::hours_24();
        let twelve = ring.tick(12).unwrap();
        let zero = ring.tick(0).unwrap();
        let fifteen = ring.tick(15).unwrap();

        assert_eq!(twelve.angle, zero.angle);
        assert_eq!(twelve.band, Band::Outer);
        assert_eq!(zero.band, Band::Inner);
        assert_eq!(fifteen.angle, 90.0);
        assert!((fifteen.center.distance(Point::default()) - INNER_RING_RADIUS).abs() < 1e-9);
    }

    #[test]
    fn test_click_hits_nearest_tick() {
        let ring = Ring::hours_12();
        let three = ring.tick(3).unwrap().center;

        let hit = ring.click(Point::new(three.x - 4.0, three.y + 3.0)).unwrap();
        assert_eq!(hit, Selection::new(3, 90.0));
        assert_eq!(ring.click(Point::default()), None);
    }
}
