use foundation::math::Vec2;

/// Pixel dimensions of the render surface (navbar and controls already
/// excluded by the host).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Orthographic sphere radius for the full-size view.
    pub fn radius(&self) -> f64 {
        self.height / 2.8
    }

    /// Smaller radius used while the detail panel takes up space.
    pub fn detail_radius(&self) -> f64 {
        self.width.min(self.height) / 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::Viewport;
    use foundation::math::Vec2;

    #[test]
    fn derives_center_and_radii() {
        let v = Viewport::new(1200.0, 700.0);
        assert_eq!(v.center(), Vec2::new(600.0, 350.0));
        assert_eq!(v.radius(), 700.0 / 2.8);
        assert_eq!(v.detail_radius(), 700.0 / 3.0);
    }

    #[test]
    fn detail_radius_uses_the_smaller_side() {
        let narrow = Viewport::new(500.0, 900.0);
        assert_eq!(narrow.detail_radius(), 500.0 / 3.0);
    }
}
