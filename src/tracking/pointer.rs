/// Pointer position inside an element, centred: each axis runs from -0.5 at
/// the left/top edge to 0.5 at the right/bottom edge.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    /// `x`/`y` are relative to the element's top-left corner. Positions
    /// outside the element extrapolate past ±0.5.
    pub fn within(x: f64, y: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self {
            x: x / width - 0.5,
            y: y / height - 0.5,
        }
    }

    /// Translation in px for a layer moving `factor` px per unit of offset.
    pub fn parallax(self, factor: f64) -> (f64, f64) {
        (self.x * factor, self.y * factor)
    }

    pub fn translate_css(self, factor: f64) -> String {
        let (x, y) = self.parallax(factor);
        format!("translate({x:.2}px, {y:.2}px)")
    }
}

/// 3D card rotation in degrees that leans toward the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CardTilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl CardTilt {
    pub fn from_offset(offset: PointerOffset, max_deg: f64) -> Self {
        Self {
            rotate_x: -offset.y * max_deg,
            rotate_y: offset.x * max_deg,
        }
    }

    pub fn transform_css(self) -> String {
        format!(
            "rotateX({:.2}deg) rotateY({:.2}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_centred() {
        let centre = PointerOffset::within(200.0, 100.0, 400.0, 200.0);
        assert_eq!(centre, PointerOffset { x: 0.0, y: 0.0 });

        let corner = PointerOffset::within(0.0, 200.0, 400.0, 200.0);
        assert_eq!(corner, PointerOffset { x: -0.5, y: 0.5 });

        assert_eq!(
            PointerOffset::within(10.0, 10.0, 0.0, 0.0),
            PointerOffset::default()
        );
    }

    #[test]
    fn test_tilt_leans_toward_pointer() {
        // pointer at the bottom-right corner
        let tilt = CardTilt::from_offset(PointerOffset { x: 0.5, y: 0.5 }, 10.0);
        assert_eq!(tilt.rotate_x, -5.0);
        assert_eq!(tilt.rotate_y, 5.0);
        assert_eq!(tilt.transform_css(), "rotateX(-5.00deg) rotateY(5.00deg)");
    }

    #[test]
    fn test_parallax_moves_against_pointer() {
        let offset = PointerOffset { x: 0.25, y: -0.5 };
        assert_eq!(offset.parallax(-10.0), (-2.5, 5.0));
        assert_eq!(offset.translate_css(-10.0), "translate(-2.50px, 5.00px)");
    }
}
