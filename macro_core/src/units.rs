//! Unit normalization for body measurements.

/// Centimeters per foot
pub const CM_PER_FOOT: f64 = 30.48;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Convert a height in feet and inches to centimeters
pub fn height_cm(feet: u32, inches: u32) -> f64 {
    f64::from(feet) * CM_PER_FOOT + f64::from(inches) * CM_PER_INCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_cm() {
        assert!((height_cm(5, 10) - 177.8).abs() < 1e-9);
        assert!((height_cm(4, 0) - 121.92).abs() < 1e-9);
        assert!((height_cm(7, 11) - 241.3).abs() < 1e-9);
    }

    #[test]
    fn test_twelve_inches_is_one_foot() {
        assert!((height_cm(0, 12) - height_cm(1, 0)).abs() < 1e-9);
    }
}
