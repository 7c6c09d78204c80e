use serde::Serialize;

/// Rectangular region of an image for focused analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Centre of the image with `margin` (a fraction) trimmed from every side.
    ///
    /// Offsets and sizes are computed in `f64` and truncated toward zero, so
    /// a 500x400 image with a 0.1 margin yields origin (50, 40) and size
    /// 400x320.
    pub fn central(width: u32, height: u32, margin: f64) -> Self {
        let keep = 1.0 - 2.0 * margin;
        Self::new(
            (width as f64 * margin) as u32,
            (height as f64 * margin) as u32,
            (width as f64 * keep) as u32,
            (height as f64 * keep) as u32,
        )
    }

    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        let right = self.x as u64 + self.width as u64;
        let bottom = self.y as u64 + self.height as u64;
        right <= width as u64 && bottom <= height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Axis-aligned bounding box of a contour, inclusive of its edge pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
