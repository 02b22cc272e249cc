//! Real space to display space projection and visibility culling
//!
//! A circle inscribed in a container uses the smaller container side as its
//! diameter. One real-space unit maps to `diameter / 2 / radius` display
//! pixels. A projected position is culled when it falls outside the
//! container's half-extents; depth never takes part in that decision.

use super::coords::Coords;
use kurbo::Size;

/// Diameter of the circle inscribed in `container`
pub fn diameter(container: Size) -> f64 {
    container.width.min(container.height)
}

/// Display pixels per real-space unit
///
/// A non-positive radius is not rejected here; the ratio simply degenerates.
pub fn ratio(container: Size, radius: f64) -> f64 {
    diameter(container) / 2.0 / radius
}

/// Whether a display-space position lies outside the container bounds.
///
/// The comparison is strict, so a position exactly on the edge stays
/// visible.
pub fn is_culled(display: Coords, container: Size) -> bool {
    display.x.abs() > container.width / 2.0 || display.y.abs() > container.height / 2.0
}

/// Fixed projection parameters for one render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub container: Size,
    pub ratio: f64,
}

impl Projection {
    pub fn new(container: Size, radius: f64) -> Self {
        Self {
            container,
            ratio: ratio(container, radius),
        }
    }

    pub fn normalize(&self, real: Coords) -> Coords {
        real.scaled(self.ratio)
    }

    /// Normalize `real` and return it only if it survives culling
    pub fn visible(&self, real: Coords) -> Option<Coords> {
        let display = self.normalize(real);
        if is_culled(display, self.container) {
            None
        } else {
            Some(display)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diameter_uses_smaller_side() {
        assert_eq!(diameter(Size::new(200.0, 200.0)), 200.0);
        assert_eq!(diameter(Size::new(300.0, 100.0)), 100.0);
        assert_eq!(diameter(Size::new(80.0, 640.0)), 80.0);
    }

    #[test]
    fn ratio_maps_radius_to_half_diameter() {
        assert_eq!(ratio(Size::new(200.0, 200.0), 10.0), 10.0);
        assert_eq!(ratio(Size::new(300.0, 100.0), 5.0), 10.0);
        assert_eq!(ratio(Size::new(360.0, 360.0), 1.0), 180.0);
    }

    #[test]
    fn edge_is_visible_and_beyond_is_culled() {
        let container = Size::new(200.0, 100.0);
        assert!(!is_culled(Coords::new(100.0, 0.0, 0.0), container));
        assert!(is_culled(Coords::new(101.0, 0.0, 0.0), container));
        assert!(!is_culled(Coords::new(0.0, -50.0, 0.0), container));
        assert!(is_culled(Coords::new(0.0, -51.0, 0.0), container));
    }

    #[test]
    fn culling_is_symmetric() {
        let container = Size::new(300.0, 100.0);
        for (x, y) in [(10.0, 20.0), (151.0, 0.0), (0.0, 50.5), (149.9, 49.9), (-200.0, 3.0)] {
            assert_eq!(
                is_culled(Coords::new(x, y, 0.0), container),
                is_culled(Coords::new(-x, -y, 0.0), container),
                "asymmetric culling at ({x}, {y})"
            );
        }
    }

    #[test]
    fn depth_never_culls() {
        let container = Size::new(10.0, 10.0);
        assert!(!is_culled(Coords::new(0.0, 0.0, 1.0e9), container));
    }

    #[test]
    fn projection_scales_then_culls() {
        let projection = Projection::new(Size::new(200.0, 200.0), 10.0);
        assert_eq!(
            projection.visible(Coords::new(5.0, 5.0, 0.0)),
            Some(Coords::new(50.0, 50.0, 0.0))
        );
        assert_eq!(projection.visible(Coords::new(15.0, 0.0, 0.0)), None);
        assert_eq!(
            projection.normalize(Coords::new(15.0, 0.0, 2.0)),
            Coords::new(150.0, 0.0, 20.0)
        );
    }
}
