use imageproc::point::Point;

use super::BoundingBox;

/// Outer boundary of one connected region in a binary mask.
///
/// Points are boundary pixel coordinates with collinear runs compressed,
/// so a solid rectangle is stored as its four corners.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionContour {
    points: Vec<Point<i32>>,
}

impl RegionContour {
    pub fn new(points: Vec<Point<i32>>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point<i32>] {
        &self.points
    }

    /// Enclosed area of the boundary polygon (shoelace formula over pixel
    /// centres). A filled `w x h` block therefore measures `(w-1)*(h-1)`.
    pub fn area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }

        let twice_area: i64 = self
            .points
            .iter()
            .zip(self.points.iter().cycle().skip(1))
            .map(|(a, b)| a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64)
            .sum();

        twice_area.abs() as f64 / 2.0
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let Some(first) = self.points.first() else {
            return BoundingBox::new(0, 0, 0, 0);
        };

        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &self.points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        BoundingBox::new(
            min_x.max(0) as u32,
            min_y.max(0) as u32,
            (max_x - min_x + 1) as u32,
            (max_y - min_y + 1) as u32,
        )
    }
}
