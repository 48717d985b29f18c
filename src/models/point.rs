/// Reference coordinate in scanline space
///
/// `x` is a sample position (fractional: midpoints fall between samples),
/// `y` is the row index the scanline came from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point() {
        let p = Point::new(2.5, 7.0);
        assert_eq!(p.x, 2.5);
        assert_eq!(p.y, 7.0);
        assert_eq!(Point::default(), Point::new(0.0, 0.0));
    }
}
