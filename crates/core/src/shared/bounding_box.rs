use super::contour::Point;

/// Axis-aligned rectangle in pixel coordinates.
///
/// Covers columns `x..x + width` and rows `y..y + height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest box covering every point, or `None` for no points.
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }

    pub fn area(&self) -> i64 {
        self.width.max(0) as i64 * self.height.max(0) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enclosing_empty_is_none() {
        assert!(BoundingBox::enclosing(&[]).is_none());
    }

    #[test]
    fn test_enclosing_single_point_is_one_pixel() {
        let b = BoundingBox::enclosing(&[Point::new(5, 7)]).unwrap();
        assert_eq!(b, BoundingBox::new(5, 7, 1, 1));
    }

    #[test]
    fn test_enclosing_rectangle_corners() {
        let corners = [
            Point::new(10, 20),
            Point::new(10, 59),
            Point::new(59, 59),
            Point::new(59, 20),
        ];
        let b = BoundingBox::enclosing(&corners).unwrap();
        assert_eq!(b, BoundingBox::new(10, 20, 50, 40));
        assert_eq!(b.area(), 2000);
    }

    #[test]
    fn test_contains_is_half_open() {
        let b = BoundingBox::new(0, 0, 10, 10);
        assert!(b.contains(Point::new(0, 0)));
        assert!(b.contains(Point::new(9, 9)));
        assert!(!b.contains(Point::new(10, 5)));
        assert!(!b.contains(Point::new(-1, 5)));
    }

    #[test]
    fn test_negative_dimensions_have_zero_area() {
        assert_eq!(BoundingBox::new(0, 0, -3, 4).area(), 0);
    }
}
