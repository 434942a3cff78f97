pub use kurbo::{Point, Rect};

/// Quadrilateral placing an overlay in base-image space, in the order the index lists it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScreenQuad(pub [Point; 4]);

impl ScreenQuad {
    pub fn points(&self) -> &[Point; 4] {
        &self.0
    }

    /// Axis-aligned bounding box of the four corners.
    pub fn bounds(&self) -> Rect {
        let [first, rest @ ..] = self.0;
        rest.iter()
            .fold(Rect::from_points(first, first), |acc, p| acc.union_pt(*p))
    }
}

impl From<[[f64; 2]; 4]> for ScreenQuad {
    fn from(raw: [[f64; 2]; 4]) -> Self {
        Self(raw.map(|[x, y]| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_all_corners() {
        let quad = ScreenQuad::from([[10.0, 5.0], [90.0, 12.0], [85.0, 70.0], [4.0, 66.0]]);
        let b = quad.bounds();
        assert_eq!(b.x0, 4.0);
        assert_eq!(b.y0, 5.0);
        assert_eq!(b.x1, 90.0);
        assert_eq!(b.y1, 70.0);
    }

    #[test]
    fn degenerate_quad_has_zero_area() {
        let quad = ScreenQuad::from([[1.0, 1.0]; 4]);
        assert_eq!(quad.bounds().area(), 0.0);
        assert_eq!(quad.points()[2], Point::new(1.0, 1.0));
    }
}
