//! 3D vector type for positions and directions.
//!
//! [`Vec3`] is the kernel's point/direction type: camera eye and target,
//! up vectors, rotation axes, translation offsets.
//!
//! # Mutating vs value-producing operations
//!
//! The two families are kept apart by name:
//!
//! | in place              | new value                          |
//! |-----------------------|------------------------------------|
//! | [`Vec3::normalize`]   | [`Vec3::normalized`]               |
//! |                       | [`Vec3::cross`], [`Vec3::subtract`], [`Vec3::scaled`] |
//!
//! # Usage
//!
//! ```rust
//! use gltut_math::Vec3;
//!
//! let eye = Vec3::new(0.0, 0.0, 5.0);
//! let forward = Vec3::ZERO.subtract(eye).normalized().unwrap();
//! assert_eq!(forward, Vec3::new(0.0, 0.0, -1.0));
//!
//! let mut axis = Vec3::new(0.0, 3.0, 4.0);
//! axis.normalize().unwrap();
//! assert!((axis.magnitude() - 1.0).abs() < 1e-6);
//! ```

use approx::{AbsDiffEq, RelativeEq};
use gltut_core::{Error, Result};
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use crate::Vec4;

/// A 3D vector (position or direction).
///
/// # Components
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`.
///
/// # Example
///
/// ```rust
/// use gltut_math::Vec3;
///
/// let right = Vec3::X.cross(Vec3::Y);
/// assert_eq!(right, Vec3::Z);
/// assert_eq!(right[2], 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f32; 3]", into = "[f32; 3]"))]
#[repr(C)]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Extends to a homogeneous [`Vec4`] with the given `w`.
    ///
    /// Use `w = 1.0` for points (affected by translation) and `w = 0.0`
    /// for directions.
    #[inline]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product `self × other`.
    ///
    /// Right-handed: `X × Y = Z`. Anticommutative: `a × b = -(b × a)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gltut_math::Vec3;
    ///
    /// let a = Vec3::new(1.0, 2.0, 3.0);
    /// let b = Vec3::new(4.0, 5.0, 6.0);
    /// assert_eq!(a.cross(b), -b.cross(a));
    /// assert_eq!(a.cross(b).dot(a), 0.0);
    /// ```
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Component-wise difference `self - other`.
    ///
    /// Same as the `-` operator; spelled out for call sites that build a
    /// direction from two points (`target.subtract(eye)`).
    #[inline]
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Returns the vector multiplied by `k`.
    #[inline]
    pub fn scaled(self, k: f32) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn magnitude(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Alias for [`Vec3::magnitude`].
    #[inline]
    pub fn length(self) -> f32 {
        self.magnitude()
    }

    /// Normalizes the vector to unit length **in place**.
    ///
    /// On failure `self` is left unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroLengthVector`] if the magnitude is zero or not finite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gltut_math::Vec3;
    ///
    /// let mut v = Vec3::new(3.0, 0.0, 4.0);
    /// v.normalize().unwrap();
    /// assert_eq!(v, Vec3::new(0.6, 0.0, 0.8));
    ///
    /// let mut zero = Vec3::ZERO;
    /// assert!(zero.normalize().is_err());
    /// assert_eq!(zero, Vec3::ZERO);
    /// ```
    pub fn normalize(&mut self) -> Result<()> {
        *self = self.normalized()?;
        Ok(())
    }

    /// Returns a unit-length copy of the vector.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroLengthVector`] if the magnitude is zero or not finite.
    pub fn normalized(self) -> Result<Self> {
        let len = self.magnitude();
        if len > 0.0 && len.is_finite() {
            Ok(self / len)
        } else {
            Err(Error::ZeroLengthVector)
        }
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Converts to glam Vec3.
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam Vec3.
    #[inline]
    pub fn from_glam(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// Vec3 * f32
impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scaled(rhs)
    }
}

// f32 * Vec3
impl Mul<Vec3> for f32 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.scaled(self)
    }
}

// Vec3 / f32
impl Div<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> [f32; 3] {
        v.to_array()
    }
}

impl From<glam::Vec3> for Vec3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3) -> glam::Vec3 {
        v.to_glam()
    }
}

impl AbsDiffEq for Vec3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vec3 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_vec3_new() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v, Vec3::from_array([1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_vec3_length() {
        let v = Vec3::new(2.0, 3.0, 6.0);
        assert_eq!(v.length_squared(), 49.0);
        assert_eq!(v.magnitude(), 7.0);
        assert_eq!(v.length(), 7.0);
    }

    #[test]
    fn test_vec3_normalized_unit_length() {
        for v in [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-0.001, 0.0, 0.002),
            Vec3::new(1000.0, -2500.0, 12.5),
        ] {
            let n = v.normalized().unwrap();
            assert_abs_diff_eq!(n.magnitude(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_vec3_normalize_in_place() {
        let mut v = Vec3::new(0.0, 0.0, -8.0);
        v.normalize().unwrap();
        assert_eq!(v, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_vec3_normalize_zero_fails() {
        assert_eq!(Vec3::ZERO.normalized(), Err(Error::ZeroLengthVector));

        let mut v = Vec3::ZERO;
        assert_eq!(v.normalize(), Err(Error::ZeroLengthVector));
        assert_eq!(v, Vec3::ZERO);
    }

    #[test]
    fn test_vec3_normalize_non_finite_fails() {
        let v = Vec3::new(f32::INFINITY, 0.0, 0.0);
        assert!(v.normalized().is_err());
        let v = Vec3::new(f32::NAN, 1.0, 0.0);
        assert!(v.normalized().is_err());
    }

    #[test]
    fn test_vec3_cross_basis() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
        assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    }

    #[test]
    fn test_vec3_cross_orthogonal() {
        let a = Vec3::new(0.3, -1.2, 2.5);
        let b = Vec3::new(-4.0, 0.5, 1.5);
        let c = a.cross(b);
        assert_eq!(c, -b.cross(a));
        assert_abs_diff_eq!(c.dot(a), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(c.dot(b), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_vec3_subtract() {
        let a = Vec3::new(0.0, 0.0, -4.0);
        let b = Vec3::new(0.0, 2.0, 0.0);
        assert_eq!(a.subtract(b), Vec3::new(0.0, -2.0, -4.0));
        assert_eq!(a - b, a.subtract(b));
    }

    #[test]
    fn test_vec3_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a.scaled(2.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_vec3_index() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
        v[1] = 7.0;
        assert_eq!(v.y, 7.0);
    }

    #[test]
    fn test_vec3_glam_roundtrip() {
        let v = Vec3::new(0.5, -1.5, 2.0);
        let g: glam::Vec3 = v.into();
        assert_eq!(g.cross(glam::Vec3::Y), v.cross(Vec3::Y).to_glam());
        assert_eq!(Vec3::from(g), v);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_vec3_serde_as_sequence() {
        let v: Vec3 = serde_yaml::from_str("[0.0, 2.0, -4.0]").unwrap();
        assert_eq!(v, Vec3::new(0.0, 2.0, -4.0));
    }
}
