//! Line rasterization
//!
//! Axis-aligned segments become a single window and one streamed run.
//! Everything else goes through integer Bresenham, one pixel at a time.

/// A line segment classified by how it will be drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Constant x: a fast vertical run starting at the top end
    Vertical { x: u16, y: u16, len: u16 },
    /// Constant y: a fast horizontal run starting at the left end
    Horizontal { x: u16, y: u16, len: u16 },
    /// General case, stepped pixel by pixel
    Sloped(LinePoints),
}

impl Segment {
    /// Classify the segment from (x0, y0) to (x1, y1), both ends inclusive
    ///
    /// A degenerate segment (both ends equal) is a vertical run of one.
    pub fn classify(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        if x0 == x1 {
            Segment::Vertical {
                x: x0,
                y: y0.min(y1),
                len: y0.abs_diff(y1) + 1,
            }
        } else if y0 == y1 {
            Segment::Horizontal {
                x: x0.min(x1),
                y: y0,
                len: x0.abs_diff(x1) + 1,
            }
        } else {
            Segment::Sloped(LinePoints::new(x0, y0, x1, y1))
        }
    }
}

/// Bresenham point iterator
///
/// Walks the major axis one unit per step, left to right after
/// normalisation. The error term starts at half the major delta, loses the
/// minor delta each step, and moves the minor coordinate whenever it goes
/// negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePoints {
    /// Swap x/y on output (segment steeper than 45°)
    steep: bool,
    major: i32,
    minor: i32,
    major_end: i32,
    major_delta: i32,
    minor_delta: i32,
    minor_step: i32,
    err: i32,
}

impl LinePoints {
    /// Points from (x0, y0) to (x1, y1), both ends inclusive
    pub fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        let (mut x0, mut y0, mut x1, mut y1) = (x0 as i32, y0 as i32, x1 as i32, y1 as i32);

        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            core::mem::swap(&mut x0, &mut y0);
            core::mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            core::mem::swap(&mut x0, &mut x1);
            core::mem::swap(&mut y0, &mut y1);
        }

        let major_delta = x1 - x0;
        Self {
            steep,
            major: x0,
            minor: y0,
            major_end: x1,
            major_delta,
            minor_delta: (y1 - y0).abs(),
            minor_step: if y0 < y1 { 1 } else { -1 },
            err: major_delta / 2,
        }
    }

    fn remaining(&self) -> usize {
        (self.major_end - self.major + 1).max(0) as usize
    }
}

impl Iterator for LinePoints {
    type Item = (u16, u16);

    fn next(&mut self) -> Option<Self::Item> {
        if self.major > self.major_end {
            return None;
        }

        // Inputs are u16, so every stepped coordinate stays in range
        let point = if self.steep {
            (self.minor as u16, self.major as u16)
        } else {
            (self.major as u16, self.minor as u16)
        };

        self.err -= self.minor_delta;
        if self.err < 0 {
            self.minor += self.minor_step;
            self.err += self.major_delta;
        }
        self.major += 1;

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for LinePoints {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(x0: u16, y0: u16, x1: u16, y1: u16) -> heapless::Vec<(u16, u16), 64> {
        LinePoints::new(x0, y0, x1, y1).collect()
    }

    #[test]
    fn test_shallow_line() {
        assert_eq!(
            collect(0, 0, 4, 2).as_slice(),
            &[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]
        );
    }

    #[test]
    fn test_reversed_endpoints_iterate_left_to_right() {
        assert_eq!(
            collect(4, 2, 0, 0).as_slice(),
            &[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]
        );
    }

    #[test]
    fn test_steep_line_transposes() {
        assert_eq!(
            collect(0, 0, 2, 4).as_slice(),
            &[(0, 0), (0, 1), (1, 2), (1, 3), (2, 4)]
        );
    }

    #[test]
    fn test_descending_line() {
        assert_eq!(
            collect(0, 3, 3, 0).as_slice(),
            &[(0, 3), (1, 2), (2, 1), (3, 0)]
        );
    }

    #[test]
    fn test_exact_length() {
        let points = LinePoints::new(3, 7, 40, 20);
        assert_eq!(points.len(), 38);
        assert_eq!(points.count(), 38);
    }

    #[test]
    fn test_classify_vertical() {
        assert_eq!(
            Segment::classify(5, 9, 5, 2),
            Segment::Vertical { x: 5, y: 2, len: 8 }
        );
    }

    #[test]
    fn test_classify_horizontal() {
        assert_eq!(
            Segment::classify(9, 4, 1, 4),
            Segment::Horizontal { x: 1, y: 4, len: 9 }
        );
    }

    #[test]
    fn test_classify_point() {
        assert_eq!(
            Segment::classify(3, 3, 3, 3),
            Segment::Vertical { x: 3, y: 3, len: 1 }
        );
    }

    #[test]
    fn test_classify_sloped() {
        assert!(matches!(Segment::classify(0, 0, 1, 1), Segment::Sloped(_)));
    }
}
