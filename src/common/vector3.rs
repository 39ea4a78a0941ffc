//! A minimal 3D vector value type.

use serde::{Deserialize, Serialize};

/// An immutable three component vector, typically a gravity
/// direction reported by a motion sensor.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// The zero vector. Has zero length.
    pub const fn zero() -> Self {
        Vector3::new(0.0, 0.0, 0.0)
    }

    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// The [Euclidean norm](https://en.wikipedia.org/wiki/Norm_(mathematics)#Euclidean_norm).
    /// Returns 0 for the zero vector and a strictly positive value for any
    /// other finite vector, however small or large its components.
    pub fn length(&self) -> f64 {
        if !self.is_finite() {
            return self.dot(self).sqrt();
        }
        match self.scaled_by_max_component() {
            Some((m, s)) => m * s.dot(&s).sqrt(),
            None => 0.0,
        }
    }

    /// Returns the dot product divided by the product of the two lengths,
    /// i.e the cosine of the angle between the vectors (not the angle itself).
    /// The result lies in `[-1, 1]`.
    ///
    /// Returns 0 if either vector has zero length or a non-finite component.
    /// This never produces NaN.
    pub fn dot_ratio(&self, other: &Vector3) -> f64 {
        match (self.unit(), other.unit()) {
            // Rounding can push parallel vectors slightly past 1.
            (Some(a), Some(b)) => a.dot(&b).max(-1.0).min(1.0),
            _ => 0.0,
        }
    }

    /// The vector divided by its length, or `None` for zero-length or
    /// non-finite vectors.
    pub fn unit(&self) -> Option<Vector3> {
        if !self.is_finite() {
            return None;
        }
        let (_, s) = self.scaled_by_max_component()?;
        let l = s.dot(&s).sqrt();
        Some(Vector3::new(s.x / l, s.y / l, s.z / l))
    }

    /// Returns the largest absolute component `m` and the vector divided
    /// by `m`, whose squared components can neither underflow to zero
    /// nor overflow. `None` for the zero vector.
    fn scaled_by_max_component(&self) -> Option<(f64, Vector3)> {
        let m = self.x.abs().max(self.y.abs()).max(self.z.abs());
        if m == 0.0 {
            return None;
        }
        // Divide rather than multiply by 1/m, which overflows for subnormal m.
        Some((m, Vector3::new(self.x / m, self.y / m, self.z / m)))
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// True if no component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(v: [f64; 3]) -> Self {
        Vector3::new(v[0], v[1], v[2])
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from(v: (f64, f64, f64)) -> Self {
        Vector3::new(v.0, v.1, v.2)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

#[cfg(test)]
mod tests {
    use super::Vector3;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_length() {
        assert_eq!(Vector3::zero().length(), 0.0);
        assert_eq!(Vector3::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_abs_diff_eq!(Vector3::new(1.0, 1.0, 1.0).length(), 3f64.sqrt());
        assert!(Vector3::new(0.0, 0.0, -1e-9).length() > 0.0);
    }

    #[test]
    fn test_length_of_extreme_magnitudes() {
        let tiny = Vector3::new(1e-170, 0.0, 0.0);
        assert!(tiny.length() > 0.0);
        assert_abs_diff_eq!(tiny.length() / 1e-170, 1.0, epsilon = 1e-12);

        let subnormal = Vector3::new(0.0, f64::MIN_POSITIVE / 4.0, 0.0);
        assert_eq!(subnormal.length(), f64::MIN_POSITIVE / 4.0);

        let huge = Vector3::new(1e200, 0.0, 0.0);
        assert!(huge.length().is_finite());
        assert_abs_diff_eq!(huge.length() / 1e200, 1.0, epsilon = 1e-12);

        let diagonal = Vector3::new(1e300, 1e300, 1e300);
        assert_abs_diff_eq!(diagonal.length() / 1e300, 3f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_self_ratio_of_extreme_magnitudes() {
        for v in [
            Vector3::new(1e-170, 0.0, 0.0),
            Vector3::new(1e200, 0.0, 0.0),
            Vector3::new(-3e-320, 2e-321, 0.0),
            Vector3::new(f64::MAX, -f64::MAX, f64::MAX),
        ] {
            assert_abs_diff_eq!(v.dot_ratio(&v), 1.0, epsilon = 1e-12);
        }
        let down = Vector3::new(0.0, 0.0, -1.0);
        assert_eq!(down.dot_ratio(&Vector3::new(0.0, 0.0, -1e200)), 1.0);
        assert_eq!(down.dot_ratio(&Vector3::new(0.0, 0.0, 1e-170)), -1.0);
    }

    #[test]
    fn test_unit() {
        assert_eq!(Vector3::zero().unit(), None);
        assert_eq!(Vector3::new(f64::NAN, 1.0, 0.0).unit(), None);
        assert_eq!(Vector3::new(0.0, -1e250, 0.0).unit(), Some(Vector3::new(0.0, -1.0, 0.0)));
    }

    #[test]
    fn test_dot_ratio_of_axes() {
        let down = Vector3::new(0.0, 0.0, -1.0);
        let up = Vector3::new(0.0, 0.0, 1.0);
        let side = Vector3::new(1.0, 0.0, 0.0);
        assert_eq!(down.dot_ratio(&down), 1.0);
        assert_eq!(down.dot_ratio(&up), -1.0);
        assert_eq!(down.dot_ratio(&side), 0.0);
    }

    #[test]
    fn test_dot_ratio_ignores_length() {
        // A gravity vector reported in m/s^2 instead of g
        let a = Vector3::new(0.0, 0.0, -9.81);
        let b = Vector3::new(0.0, 0.0, -1.0);
        assert_abs_diff_eq!(a.dot_ratio(&b), 1.0, epsilon = 1e-12);

        // 45 degrees
        let c = Vector3::new(0.0, 2.0, -2.0);
        assert_abs_diff_eq!(b.dot_ratio(&c), core::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_dot_ratio() {
        let zero = Vector3::zero();
        let v = Vector3::new(0.3, -0.2, 0.9);
        assert_eq!(zero.dot_ratio(&v), 0.0);
        assert_eq!(v.dot_ratio(&zero), 0.0);
        assert_eq!(zero.dot_ratio(&zero), 0.0);
    }

    #[test]
    fn test_non_finite_dot_ratio() {
        let v = Vector3::new(0.0, 0.0, -1.0);
        assert_eq!(v.dot_ratio(&Vector3::new(f64::NAN, 0.0, 0.0)), 0.0);
        assert_eq!(v.dot_ratio(&Vector3::new(0.0, f64::INFINITY, 0.0)), 0.0);
        assert!(!Vector3::new(0.0, 0.0, f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_conversions() {
        let v: Vector3 = [1.0, 2.0, 3.0].into();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        let t: Vector3 = (1.0, 2.0, 3.0).into();
        assert_eq!(t, v);
        let a: [f64; 3] = v.into();
        assert_eq!(a, [1.0, 2.0, 3.0]);
        assert!(Vector3::default().is_zero());
    }
}
