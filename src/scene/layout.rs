//! Aspect-driven layout rules shared by every instance builder.

/// Aspect ratio used when the canvas has no usable dimensions.
pub const DEFAULT_ASPECT: f32 = 2.0;

/// Rail columns per unit of aspect ratio, per half of the row.
const COLUMNS_PER_ASPECT: f64 = 3.2;

/// Upper and lower row heights shared by beams and rails.
pub(crate) const STRUCTURE_ROWS: [f32; 2] = [1.3, -0.9];

/// Upper and lower row heights of the point lights.
pub(crate) const LIGHT_ROWS: [f32; 2] = [1.1, -0.4];

/// Canvas width / height, falling back to [`DEFAULT_ASPECT`] when either
/// dimension is missing or zero.
#[must_use]
pub fn aspect_ratio(width: Option<u32>, height: Option<u32>) -> f32 {
    match (width, height) {
        (Some(w), Some(h)) if w > 0 && h > 0 => w as f32 / h as f32,
        _ => DEFAULT_ASPECT,
    }
}

/// Number of rail columns tiled across one row: `ceil(aspect * 3.2) * 2`.
///
/// Always even and at least 2, even for degenerate aspects. Evaluated in
/// f64 so exact products such as `1.25 * 3.2` don't round up a column.
#[must_use]
pub fn column_count(aspect: f32) -> usize {
    let half = (f64::from(aspect) * COLUMNS_PER_ASPECT).ceil();
    if half.is_finite() && half >= 1.0 {
        half as usize * 2
    } else {
        2
    }
}

/// Whether the tunnel is drawn at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Visibility {
    /// `offset < 1`: full tunnel is emitted.
    Active,
    /// `offset >= 1`: nothing is emitted.
    Retired,
}

impl Visibility {
    /// Evaluate from the current offset. No hysteresis: the boundary is a
    /// hard cut at exactly 1.
    #[must_use]
    pub fn from_offset(offset: f32) -> Self {
        if offset < 1.0 {
            Self::Active
        } else {
            Self::Retired
        }
    }

    /// `true` for [`Visibility::Active`].
    #[must_use]
    pub fn is_active(self) -> bool {
        self == Self::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_count_examples() {
        assert_eq!(column_count(1.777), 12);
        assert_eq!(column_count(2.0), 14);
        assert_eq!(column_count(1.0), 8);
        assert_eq!(column_count(0.5), 4);
        assert_eq!(column_count(1.25), 8);
    }

    #[test]
    fn column_count_even_and_at_least_two() {
        for i in 1..2000 {
            let aspect = i as f32 * 0.0037;
            let n = column_count(aspect);
            assert!(n >= 2, "aspect {aspect} gave {n}");
            assert_eq!(n % 2, 0, "aspect {aspect} gave odd {n}");
        }
        assert_eq!(column_count(1e-9), 2);
        assert_eq!(column_count(0.0), 2);
        assert_eq!(column_count(f32::NAN), 2);
    }

    #[test]
    fn aspect_defaults_when_unavailable() {
        assert_eq!(aspect_ratio(None, None), 2.0);
        assert_eq!(aspect_ratio(Some(800), None), 2.0);
        assert_eq!(aspect_ratio(Some(0), Some(600)), 2.0);
        assert_eq!(aspect_ratio(Some(800), Some(0)), 2.0);
        assert_eq!(aspect_ratio(Some(1200), Some(800)), 1.5);
    }

    #[test]
    fn visibility_cuts_at_one() {
        assert_eq!(Visibility::from_offset(0.0), Visibility::Active);
        assert_eq!(Visibility::from_offset(0.999), Visibility::Active);
        assert_eq!(Visibility::from_offset(-3.0), Visibility::Active);
        assert_eq!(Visibility::from_offset(1.0), Visibility::Retired);
        assert_eq!(Visibility::from_offset(7.5), Visibility::Retired);
    }
}
