use std::ops::{Add, Mul};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// One escape-time step: `self² + c`.
    #[must_use]
    pub fn squared_plus(self, c: Self) -> Self {
        self * self + c
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        assert_eq!(Complex::new(3.0, 4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::new(-3.0, -4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::ZERO.magnitude_squared(), 0.0);
    }

    #[test]
    fn test_mul_by_i_rotates() {
        let i = Complex::new(0.0, 1.0);
        let result = Complex::new(2.0, 0.0) * i;

        assert_eq!(result, Complex::new(0.0, 2.0));
    }

    #[test]
    fn test_squared_plus_from_zero_returns_c() {
        let c = Complex::new(-0.75, 0.1);

        assert_eq!(Complex::ZERO.squared_plus(c), c);
    }

    #[test]
    fn test_squared_plus_orbit_of_one() {
        let c = Complex::new(1.0, 0.0);
        let z1 = Complex::ZERO.squared_plus(c);
        let z2 = z1.squared_plus(c);
        let z3 = z2.squared_plus(c);

        assert_eq!(z1.real, 1.0);
        assert_eq!(z2.real, 2.0);
        assert_eq!(z3.real, 5.0);
    }
}
