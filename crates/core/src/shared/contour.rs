use super::bounding_box::BoundingBox;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Closed polygon boundary of one connected foreground blob.
///
/// The last point connects back to the first. Extractors emit simplified
/// chains, so a rectangle arrives as its four corners.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Contour {
    points: Vec<Point>,
}

impl Contour {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Enclosed area by the shoelace formula, independent of orientation.
    ///
    /// Fewer than three points enclose nothing.
    pub fn area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let n = self.points.len();
        let twice: i64 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64
            })
            .sum();
        (twice as f64 / 2.0).abs()
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::enclosing(&self.points)
    }
}

impl From<Vec<Point>> for Contour {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn rect(x: i32, y: i32, w: i32, h: i32) -> Contour {
        Contour::new(vec![
            Point::new(x, y),
            Point::new(x, y + h),
            Point::new(x + w, y + h),
            Point::new(x + w, y),
        ])
    }

    #[test]
    fn test_rectangle_area() {
        assert_relative_eq!(rect(0, 0, 50, 40).area(), 2000.0);
    }

    #[test]
    fn test_area_ignores_winding_direction() {
        let mut reversed = rect(3, 4, 10, 20).points().to_vec();
        reversed.reverse();
        assert_relative_eq!(Contour::new(reversed).area(), 200.0);
    }

    #[test]
    fn test_triangle_area() {
        let tri = Contour::new(vec![Point::new(0, 0), Point::new(10, 0), Point::new(0, 10)]);
        assert_relative_eq!(tri.area(), 50.0);
    }

    #[rstest]
    #[case::empty(vec![])]
    #[case::single(vec![Point::new(4, 4)])]
    #[case::segment(vec![Point::new(0, 0), Point::new(30, 30)])]
    fn test_degenerate_contours_have_zero_area(#[case] points: Vec<Point>) {
        assert_relative_eq!(Contour::new(points).area(), 0.0);
    }

    #[test]
    fn test_collinear_points_have_zero_area() {
        let line = Contour::new(vec![Point::new(0, 0), Point::new(5, 0), Point::new(10, 0)]);
        assert_relative_eq!(line.area(), 0.0);
    }

    #[test]
    fn test_bounding_box_contains_every_point() {
        let blob = Contour::new(vec![
            Point::new(12, 40),
            Point::new(30, 18),
            Point::new(55, 33),
            Point::new(41, 70),
            Point::new(20, 61),
        ]);
        let b = blob.bounding_box().unwrap();
        assert!(blob.points().iter().all(|&p| b.contains(p)));
        assert_eq!(b, BoundingBox::new(12, 18, 44, 53));
    }

    #[test]
    fn test_empty_contour_has_no_bounding_box() {
        assert!(Contour::default().bounding_box().is_none());
    }
}
