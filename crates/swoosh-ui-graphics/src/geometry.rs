//! Geometric primitives: Vector2, Size

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Real-valued 2D quantity used for positions, deltas, velocities and axes.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };
    pub const POSITIVE_X: Vector2 = Vector2 { x: 1.0, y: 0.0 };
    pub const NEGATIVE_X: Vector2 = Vector2 { x: -1.0, y: 0.0 };
    pub const POSITIVE_Y: Vector2 = Vector2 { x: 0.0, y: 1.0 };
    pub const NEGATIVE_Y: Vector2 = Vector2 { x: 0.0, y: -1.0 };

    pub fn dot(self, other: Vector2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Returns the unit vector pointing the same way, or `None` for a
    /// zero-length (or non-finite) vector.
    pub fn normalized(self) -> Option<Vector2> {
        let length = self.length();
        if length > 0.0 && length.is_finite() {
            Some(Vector2::new(self.x / length, self.y / length))
        } else {
            None
        }
    }

    pub fn scale(self, factor: f32) -> Vector2 {
        Vector2::new(self.x * factor, self.y * factor)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Self) -> Self::Output {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Vector2::new(x, y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Extent of a box of this size measured along `axis`.
    ///
    /// For axis-aligned unit axes this is just the width or the height. The
    /// result is never negative, so cumulative extents are monotone.
    pub fn extent_along(&self, axis: Vector2) -> f32 {
        (self.width * axis.x).abs() + (self.height * axis.y).abs()
    }
}
