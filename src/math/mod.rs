use std::ops::*;

/// 2D vector used for positions, velocities and pointer coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, other: f32) -> Vec2 {
        Vec2 {
            x: self.x * other,
            y: self.y * other,
        }
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Vec2) {
        *self = *self + other;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, other: Vec2) {
        *self = *self - other;
    }
}

impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, other: f32) {
        *self = *self * other;
    }
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }

    pub const fn zero() -> Vec2 {
        Vec2 { x: 0.0, y: 0.0 }
    }

    pub fn mag(self) -> f32 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }

    /// Sum of absolute components. Impact speeds are measured with
    /// this norm rather than the Euclidean one.
    pub fn l1_norm(self) -> f32 {
        self.x.abs() + self.y.abs()
    }

    pub fn dist(self, other: Vec2) -> f32 {
        (self - other).mag()
    }

    /// Angle of this vector from the positive x axis.
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    pub fn from_angle(a: f32) -> Vec2 {
        Vec2 {
            x: a.cos(),
            y: a.sin(),
        }
    }
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Remap `v` from the range [a0, a1] to [b0, b1], without clamping.
pub fn map_range(v: f32, a0: f32, a1: f32, b0: f32, b1: f32) -> f32 {
    b0 + (v - a0) * (b1 - b0) / (a1 - a0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_arithmetic() {
        let a = Vec2::new(3.0, -1.0);
        let b = Vec2::new(1.0, 2.0);

        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(2.0, -3.0));
        assert_eq!(a * 2.0, Vec2::new(6.0, -2.0));
        assert_eq!(-a, Vec2::new(-3.0, 1.0));
    }

    #[test]
    fn norms() {
        let v = Vec2::new(3.0, -4.0);
        assert!((v.mag() - 5.0).abs() < 1e-6);
        assert!((v.l1_norm() - 7.0).abs() < 1e-6);
        assert!((v.dist(Vec2::zero()) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn angle_round_trip() {
        let v = Vec2::new(-2.0, 5.0);
        let unit = Vec2::from_angle(v.angle());
        let back = unit * v.mag();
        assert!((back.x - v.x).abs() < 1e-4);
        assert!((back.y - v.y).abs() < 1e-4);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
        assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
    }

    #[test]
    fn map_range_matches_endpoints() {
        assert!((map_range(50.0, 50.0, 500.0, 30.0, 280.0) - 30.0).abs() < 1e-6);
        assert!((map_range(500.0, 50.0, 500.0, 30.0, 280.0) - 280.0).abs() < 1e-6);
        assert!((map_range(275.0, 50.0, 500.0, 30.0, 280.0) - 155.0).abs() < 1e-6);
    }
}
