use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use imageproc::point::Point;

use crate::pipeline::types::RegionContour;

/// Outermost contours of every foreground (non-zero) region in `mask`.
///
/// Holes and anything nested inside a hole are skipped, and each boundary is
/// reduced to the points where its direction changes.
pub fn external_contours(mask: &GrayImage) -> Vec<RegionContour> {
    if mask.width() == 0 || mask.height() == 0 {
        return Vec::new();
    }

    find_contours::<i32>(mask)
        .into_iter()
        .filter(|contour| contour.border_type == BorderType::Outer && contour.parent.is_none())
        .map(|contour| RegionContour::new(compress_collinear(&contour.points)))
        .collect()
}

/// Drops every boundary point that lies on a straight run between its
/// neighbours, keeping only the corners of the closed chain.
pub fn compress_collinear(points: &[Point<i32>]) -> Vec<Point<i32>> {
    let mut chain: Vec<Point<i32>> = Vec::with_capacity(points.len());
    for &p in points {
        if chain.last() != Some(&p) {
            chain.push(p);
        }
    }
    if chain.len() > 1 && chain.first() == chain.last() {
        chain.pop();
    }

    let n = chain.len();
    if n < 3 {
        return chain;
    }

    (0..n)
        .filter(|&i| {
            let prev = chain[(i + n - 1) % n];
            let next = chain[(i + 1) % n];
            direction(prev, chain[i]) != direction(chain[i], next)
        })
        .map(|i| chain[i])
        .collect()
}

fn direction(from: Point<i32>, to: Point<i32>) -> (i32, i32) {
    ((to.x - from.x).signum(), (to.y - from.y).signum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn fill(mask: &mut GrayImage, x0: u32, y0: u32, w: u32, h: u32, value: u8) {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                mask.put_pixel(x, y, Luma([value]));
            }
        }
    }

    #[test]
    fn filled_rectangle_reduces_to_corners() {
        let mut mask = GrayImage::new(50, 50);
        fill(&mut mask, 10, 5, 20, 30, 255);

        let contours = external_contours(&mask);
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].points().len(), 4);
        assert_eq!(contours[0].area(), (19 * 29) as f64);
    }

    #[test]
    fn nested_regions_are_not_reported() {
        let mut mask = GrayImage::new(80, 80);
        fill(&mut mask, 10, 10, 40, 40, 255);
        fill(&mut mask, 20, 20, 20, 20, 0);
        fill(&mut mask, 27, 27, 6, 6, 255);

        let contours = external_contours(&mask);
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].area(), (39 * 39) as f64);
    }

    #[test]
    fn separate_blobs_yield_separate_contours() {
        let mut mask = GrayImage::new(60, 30);
        fill(&mut mask, 2, 2, 10, 10, 255);
        fill(&mut mask, 30, 10, 15, 12, 255);

        assert_eq!(external_contours(&mask).len(), 2);
    }

    #[test]
    fn empty_mask_has_no_contours() {
        assert!(external_contours(&GrayImage::new(16, 16)).is_empty());
    }

    #[test]
    fn collinear_points_are_removed() {
        let chain: Vec<Point<i32>> = [
            (0, 0),
            (1, 0),
            (2, 0),
            (2, 1),
            (2, 2),
            (1, 2),
            (0, 2),
            (0, 1),
        ]
        .iter()
        .map(|&(x, y)| Point::new(x, y))
        .collect();

        let compressed = compress_collinear(&chain);
        assert_eq!(
            compressed,
            vec![
                Point::new(0, 0),
                Point::new(2, 0),
                Point::new(2, 2),
                Point::new(0, 2)
            ]
        );
    }
}
