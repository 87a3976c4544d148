use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RGB {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RGB {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        RGB { r, g, b }
    }

    pub fn all(x: f64) -> Self {
        Self::new(x, x, x)
    }

    pub fn black() -> Self {
        Self::all(0.0)
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    pub fn max(&self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    pub fn clamp01(&self) -> Self {
        RGB {
            r: self.r.max(0.0).min(1.0),
            g: self.g.max(0.0).min(1.0),
            b: self.b.max(0.0).min(1.0),
        }
    }
}

impl<'a> Add<&'a Self> for RGB {
    type Output = Self;
    fn add(self, rhs: &'a Self) -> Self {
        RGB {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl Add for RGB {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.add(&rhs)
    }
}

impl AddAssign for RGB {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<'a> Sub<&'a Self> for RGB {
    type Output = Self;
    fn sub(self, rhs: &'a Self) -> Self {
        RGB {
            r: self.r - rhs.r,
            g: self.g - rhs.g,
            b: self.b - rhs.b,
        }
    }
}

impl Sub for RGB {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.sub(&rhs)
    }
}

impl<'a> Mul<&'a Self> for RGB {
    type Output = Self;
    fn mul(self, rhs: &'a Self) -> Self {
        RGB {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
        }
    }
}

impl Mul for RGB {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.mul(&rhs)
    }
}

impl Mul<f64> for RGB {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        RGB {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
        }
    }
}

impl MulAssign<f64> for RGB {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Div<f64> for RGB {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        RGB {
            r: self.r / rhs,
            g: self.g / rhs,
            b: self.b / rhs,
        }
    }
}
