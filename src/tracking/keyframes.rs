/// Piecewise-linear mapping from an input range to output values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframes<const N: usize> {
    pub input: [f64; N],
    pub output: [f64; N],
}

impl<const N: usize> Keyframes<N> {
    /// `input` must be ascending.
    pub const fn new(input: [f64; N], output: [f64; N]) -> Self {
        Self { input, output }
    }

    /// Values outside the input range clamp to the first/last output.
    pub fn sample(&self, t: f64) -> f64 {
        if N == 0 {
            return 0.0;
        }
        if t <= self.input[0] {
            return self.output[0];
        }
        for i in 1..N {
            let (x0, x1) = (self.input[i - 1], self.input[i]);
            if t <= x1 {
                let span = x1 - x0;
                if span <= 0.0 {
                    return self.output[i];
                }
                let f = (t - x0) / span;
                return self.output[i - 1] + (self.output[i] - self.output[i - 1]) * f;
            }
        }
        self.output[N - 1]
    }
}

/// Fade in over the first fifth of a section's travel and out over the last.
pub const SECTION_OPACITY: Keyframes<4> = Keyframes::new([0.0, 0.2, 0.8, 1.0], [0.0, 1.0, 1.0, 0.0]);
/// Vertical offset in px paired with [`SECTION_OPACITY`].
pub const SECTION_OFFSET: Keyframes<4> =
    Keyframes::new([0.0, 0.2, 0.8, 1.0], [100.0, 0.0, 0.0, 100.0]);
pub const PROJECTS_OPACITY: Keyframes<4> =
    Keyframes::new([0.0, 0.1, 0.9, 1.0], [0.0, 1.0, 1.0, 0.0]);
pub const PROJECTS_OFFSET: Keyframes<4> =
    Keyframes::new([0.0, 0.1, 0.9, 1.0], [50.0, 0.0, 0.0, 50.0]);
pub const CONTACT_OFFSET: Keyframes<4> =
    Keyframes::new([0.0, 0.2, 0.8, 1.0], [50.0, 0.0, 0.0, 50.0]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hits_stops_exactly() {
        for (x, y) in SECTION_OPACITY.input.iter().zip(SECTION_OPACITY.output) {
            assert_eq!(SECTION_OPACITY.sample(*x), y);
        }
    }

    #[test]
    fn test_interpolates_between_stops() {
        assert!((SECTION_OPACITY.sample(0.1) - 0.5).abs() < 1e-9);
        assert!((SECTION_OFFSET.sample(0.9) - 50.0).abs() < 1e-9);
        assert_eq!(SECTION_OPACITY.sample(0.5), 1.0);
    }

    #[test]
    fn test_clamps_outside_range() {
        assert_eq!(PROJECTS_OFFSET.sample(-3.0), 50.0);
        assert_eq!(PROJECTS_OFFSET.sample(7.0), 50.0);
    }
}
