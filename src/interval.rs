//! Interval arithmetic for ray parameter ranges.
//!
//! Used to accept or reject intersection distances and to clamp colour
//! channels before quantisation.

/// Interval between `min` and `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl Interval {
    /// Everything strictly in front of a ray origin.
    pub const FORWARD: Interval = Interval { min: 0.0, max: f64::INFINITY };

    /// Unit range used for displayable colour channels.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

    /// Create a new interval with given min and max values
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if the interval contains the given value (inclusive bounds)
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Clamp the given value to be within this interval's bounds
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    /// Copy of this interval with a new upper bound.
    pub fn with_max(&self, max: f64) -> Self {
        Self { min: self.min, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrounds_excludes_endpoints() {
        let i = Interval::new(0.001, 10.0);
        assert!(i.surrounds(5.0));
        assert!(!i.surrounds(0.001));
        assert!(!i.surrounds(10.0));
        assert!(i.contains(10.0));
    }

    #[test]
    fn forward_rejects_origin_and_behind() {
        assert!(!Interval::FORWARD.surrounds(0.0));
        assert!(!Interval::FORWARD.surrounds(-1.0));
        assert!(Interval::FORWARD.surrounds(1e9));
    }

    #[test]
    fn unit_clamps_channels() {
        assert_eq!(Interval::UNIT.clamp(-0.5), 0.0);
        assert_eq!(Interval::UNIT.clamp(3.0), 1.0);
        assert_eq!(Interval::UNIT.clamp(0.25), 0.25);
    }
}
