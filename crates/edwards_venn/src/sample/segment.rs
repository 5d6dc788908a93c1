use nalgebra::Vector2;

/// Straight piece of a boundary, sampled from `start` towards `end`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Segment {
    pub start: Vector2<f64>,
    pub end: Vector2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(start: Vector2<f64>, end: Vector2<f64>) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// `count` points spaced `1/density` apart, the first exactly at `start`.
    /// `end` is never emitted: the adjoining piece owns it.
    pub fn sample(self, count: usize, density: f64) -> impl Iterator<Item = Vector2<f64>> {
        let len = self.length();
        let dir = if len > 0.0 {
            (self.end - self.start) / len
        } else {
            Vector2::zeros()
        };
        (0..count).map(move |i| self.start + dir * ((i as f64) / density))
    }
}
