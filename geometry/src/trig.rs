use crate::{Float, PI};

/// Converts an angle from radians to degrees
///
/// ```
/// use geometry::{degrees, PI};
/// assert!((degrees(PI) - 180.0).abs() < 1e-4);
/// ```
pub fn degrees(radians: Float) -> Float {
    radians * (180.0 / PI)
}

/// Converts an angle from degrees to radians
///
/// ```
/// use geometry::{radians, PI};
/// assert!((radians(90.0) - PI / 2.0).abs() < 1e-6);
/// ```
pub fn radians(degrees: Float) -> Float {
    degrees * (PI / 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for d in [-720.0, -90.0, 0.0, 30.0, 45.0, 180.0, 359.0] {
            assert!((degrees(radians(d)) - d).abs() < 1e-3, "d = {}", d);
        }
        assert_eq!(radians(0.0), 0.0);
        assert!((radians(180.0) - PI).abs() < 1e-6);
    }
}
