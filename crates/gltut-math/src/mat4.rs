//! 4x4 matrix type for model, view and projection transforms.
//!
//! # Convention
//!
//! Matrices are built in **row-major** order and use **column vectors**.
//! Element `(row, col)` lives at `m[row][col]`, flat index `4 * row + col`:
//!
//! ```text
//! | m00 m01 m02 m03 |   | x |
//! | m10 m11 m12 m13 | * | y |
//! | m20 m21 m22 m23 |   | z |
//! | m30 m31 m32 m33 |   | w |
//! ```
//!
//! Translation sits in the last column. Rotations are right-handed,
//! angles are radians. Projection follows OpenGL: the camera looks down
//! `-Z` and depth lands in `[-1, 1]`.
//!
//! # Composition
//!
//! Products read left to right, each factor applied after the ones to its
//! right:
//!
//! ```text
//! mvp = identity * projection * view * model * animation
//! ```
//!
//! # Upload
//!
//! `glUniformMatrix4fv` with `transpose = GL_FALSE` wants column-major
//! data. Transposition is never done behind the caller's back: use
//! [`Mat4::transpose`] followed by [`Mat4::to_rows_array`], or
//! [`Mat4::to_cols_array`] directly.
//!
//! # Usage
//!
//! ```rust
//! use gltut_math::{Mat4, Vec4};
//! use std::f32::consts::FRAC_PI_2;
//!
//! let m = Mat4::translation(1.0, 0.0, 0.0) * Mat4::rotation_z(FRAC_PI_2);
//! let p = m * Vec4::point(1.0, 0.0, 0.0);
//! assert!((p.x - 1.0).abs() < 1e-6);
//! assert!((p.y - 1.0).abs() < 1e-6);
//! ```

use approx::{AbsDiffEq, RelativeEq};
use gltut_core::{Error, Result};
use std::ops::{Index, Mul};

use crate::{Vec3, Vec4};

/// `(sin, cos)` of `angle`, evaluated in double precision.
#[inline]
fn sin_cos(angle: f32) -> (f32, f32) {
    let (s, c) = f64::from(angle).sin_cos();
    (s as f32, c as f32)
}

/// A 4x4 transform matrix.
///
/// Stored in row-major order. Use [`Mat4::from_rows`] or
/// [`Mat4::from_cols`] to construct from component arrays, or one of the
/// transform constructors.
///
/// # Example
///
/// ```rust
/// use gltut_math::{Mat4, Vec4};
///
/// let v = Vec4::new(1.0, 2.0, 3.0, 1.0);
/// assert_eq!(Mat4::IDENTITY * v, v);
/// assert_eq!(Mat4::identity(), Mat4::IDENTITY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat4 {
    /// Matrix elements in row-major order: [row0, row1, row2, row3]
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from column arrays.
    ///
    /// Transposes the input (columns become rows internally).
    #[inline]
    pub const fn from_cols(cols: [[f32; 4]; 4]) -> Self {
        Self::from_rows(cols).transpose()
    }

    /// Creates a matrix from 16 values in row-major order.
    #[inline]
    pub const fn from_rows_array(a: [f32; 16]) -> Self {
        Self::from_rows([
            [a[0], a[1], a[2], a[3]],
            [a[4], a[5], a[6], a[7]],
            [a[8], a[9], a[10], a[11]],
            [a[12], a[13], a[14], a[15]],
        ])
    }

    /// Creates a matrix from 16 values in column-major order.
    #[inline]
    pub const fn from_cols_array(a: [f32; 16]) -> Self {
        Self::from_rows_array(a).transpose()
    }

    /// The multiplicative identity.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a scale matrix: `x`, `y`, `z` on the diagonal, `1` bottom-right.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gltut_math::{Mat4, Vec3};
    ///
    /// let m = Mat4::scale(2.0, 3.0, 4.0);
    /// assert_eq!(m.transform_point(Vec3::ONE), Vec3::new(2.0, 3.0, 4.0));
    /// ```
    #[inline]
    pub const fn scale(x: f32, y: f32, z: f32) -> Self {
        Self::from_rows([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a uniform scale matrix.
    #[inline]
    pub const fn scale_uniform(s: f32) -> Self {
        Self::scale(s, s, s)
    }

    /// Creates a translation matrix.
    ///
    /// Identity with `(x, y, z)` in the last column of the first three rows.
    #[inline]
    pub const fn translation(x: f32, y: f32, z: f32) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix from a vector.
    #[inline]
    pub const fn from_translation(v: Vec3) -> Self {
        Self::translation(v.x, v.y, v.z)
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = sin_cos(angle);
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = sin_cos(angle);
        Self::from_rows([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the Z axis by `angle` radians.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gltut_math::Mat4;
    ///
    /// assert_eq!(Mat4::rotation_z(0.0), Mat4::IDENTITY);
    /// ```
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = sin_cos(angle);
        Self::from_rows([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation by `angle` radians about an arbitrary `axis` (Rodrigues).
    ///
    /// `axis` must already be unit length; it is not normalized here, and a
    /// non-unit axis gives a matrix that is not a rotation.
    ///
    /// ```text
    /// R = c·I + (1 - c)·(a aᵀ) + s·[a]×
    /// ```
    ///
    /// # Example
    ///
    /// ```rust
    /// use gltut_math::{Mat4, Vec3};
    /// use approx::assert_abs_diff_eq;
    ///
    /// let angle = 0.7;
    /// assert_abs_diff_eq!(Mat4::rotation(angle, Vec3::Y), Mat4::rotation_y(angle), epsilon = 1e-6);
    /// ```
    pub fn rotation(angle: f32, axis: Vec3) -> Self {
        let (s, c) = sin_cos(angle);
        let k = 1.0 - c;
        let Vec3 { x, y, z } = axis;

        Self::from_rows([
            [x * x * k + c, x * y * k - z * s, x * z * k + y * s, 0.0],
            [x * y * k + z * s, y * y * k + c, y * z * k - x * s, 0.0],
            [x * z * k - y * s, y * z * k + x * s, z * z * k + c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Composite rotation `rotation_x(x) * rotation_y(y) * rotation_z(z)`.
    ///
    /// Applied to a vector, Z acts first and X last.
    pub fn rotation_euler(x: f32, y: f32, z: f32) -> Self {
        Self::rotation_x(x) * Self::rotation_y(y) * Self::rotation_z(z)
    }

    /// Perspective projection, equivalent to `gluPerspective`.
    ///
    /// - `fovy` - full vertical field of view in radians
    /// - `aspect` - viewport width / height
    /// - `z_near`, `z_far` - positive distances to the clip planes
    ///
    /// ```text
    /// f = 1 / tan(fovy / 2)
    ///
    /// | f/aspect  0        0                    0                   |
    /// | 0         f        0                    0                   |
    /// | 0         0  (far+near)/(near-far)  2·far·near/(near-far)   |
    /// | 0         0       -1                    0                   |
    /// ```
    ///
    /// A point at eye-space `z = -z_near` lands on NDC `z = -1`,
    /// `z = -z_far` on `z = +1`.
    ///
    /// Total for all inputs; use [`Mat4::try_perspective`] to reject
    /// parameters that describe no frustum.
    pub fn perspective(fovy: f32, aspect: f32, z_near: f32, z_far: f32) -> Self {
        let f = 1.0 / (f64::from(fovy) / 2.0).tan();
        let (near, far) = (f64::from(z_near), f64::from(z_far));
        let depth = near - far;

        Self::from_rows([
            [(f / f64::from(aspect)) as f32, 0.0, 0.0, 0.0],
            [0.0, f as f32, 0.0, 0.0],
            [
                0.0,
                0.0,
                ((far + near) / depth) as f32,
                (2.0 * far * near / depth) as f32,
            ],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// Checked [`Mat4::perspective`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidProjection`] unless `0 < fovy < π`, `aspect > 0`,
    /// `0 < z_near < z_far` and every value is finite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gltut_math::Mat4;
    ///
    /// assert!(Mat4::try_perspective(1.0, 1.5, 0.1, 10.0).is_ok());
    /// assert!(Mat4::try_perspective(1.0, 1.5, 10.0, 0.1).is_err());
    /// ```
    pub fn try_perspective(fovy: f32, aspect: f32, z_near: f32, z_far: f32) -> Result<Self> {
        if ![fovy, aspect, z_near, z_far].iter().all(|v| v.is_finite()) {
            return Err(Error::invalid_projection("parameters must be finite"));
        }
        if fovy <= 0.0 || fovy >= std::f32::consts::PI {
            return Err(Error::invalid_projection(format!(
                "fovy {} rad is outside (0, pi)",
                fovy
            )));
        }
        if aspect <= 0.0 {
            return Err(Error::invalid_projection(format!(
                "aspect {} must be positive",
                aspect
            )));
        }
        if z_near <= 0.0 || z_far <= z_near {
            return Err(Error::invalid_projection(format!(
                "clip planes must satisfy 0 < near < far (near={}, far={})",
                z_near, z_far
            )));
        }
        Ok(Self::perspective(fovy, aspect, z_near, z_far))
    }

    /// View matrix for a camera at `eye` looking at `target`, equivalent to
    /// `gluLookAt`.
    ///
    /// ```text
    /// forward = normalize(target - eye)
    /// right   = normalize(forward × up)
    /// up'     = right × forward
    ///
    /// view = | right    0 |  * translation(-eye)
    ///        | up'      0 |
    ///        | -forward 0 |
    ///        | 0 0 0    1 |
    /// ```
    ///
    /// The result maps `eye` to the origin and `target` onto the `-Z` axis.
    ///
    /// # Errors
    ///
    /// - [`Error::ZeroLengthVector`] if `target == eye`
    /// - [`Error::DegenerateBasis`] if `up` is zero or parallel to the view
    ///   direction
    ///
    /// # Example
    ///
    /// ```rust
    /// use gltut_math::{Mat4, Vec3, Vec4};
    ///
    /// let eye = Vec3::new(0.0, 0.0, 5.0);
    /// let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::Y).unwrap();
    /// assert_eq!(view * eye.extend(1.0), Vec4::point(0.0, 0.0, 0.0));
    /// ```
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Result<Self> {
        let forward = target.subtract(eye).normalized()?;
        let right = forward
            .cross(up)
            .normalized()
            .map_err(|_| Error::degenerate_basis("up vector is zero or parallel to the view direction"))?;
        let true_up = right.cross(forward);

        let rotation = Self::from_rows([
            [right.x, right.y, right.z, 0.0],
            [true_up.x, true_up.y, true_up.z, 0.0],
            [-forward.x, -forward.y, -forward.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);

        Ok(rotation * Self::from_translation(-eye))
    }

    /// Returns a row as Vec4.
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::from_array(self.m[i])
    }

    /// Returns a column as Vec4.
    #[inline]
    pub fn col(&self, i: usize) -> Vec4 {
        Vec4::new(self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i])
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub const fn transpose(&self) -> Self {
        let m = &self.m;
        Self::from_rows([
            [m[0][0], m[1][0], m[2][0], m[3][0]],
            [m[0][1], m[1][1], m[2][1], m[3][1]],
            [m[0][2], m[1][2], m[2][2], m[3][2]],
            [m[0][3], m[1][3], m[2][3], m[3][3]],
        ])
    }

    /// Multiplies two matrices: `result[r][c] = Σ self[r][k] * other[k][c]`.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j]
                    + self.m[i][3] * other.m[3][j];
            }
        }
        result
    }

    /// Transforms a homogeneous vector by this matrix.
    ///
    /// Equivalent to `matrix * vector`.
    #[inline]
    pub fn transform(&self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }

    /// Transforms a point (`w = 1`) and drops the resulting `w`.
    ///
    /// Meant for affine transforms; see [`Mat4::project_point`] for
    /// projections.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.transform(p.extend(1.0)).truncate()
    }

    /// Transforms a direction (`w = 0`), ignoring translation.
    #[inline]
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        self.transform(v.extend(0.0)).truncate()
    }

    /// Transforms a point and applies the perspective divide.
    ///
    /// Returns `None` if the transformed `w` is zero.
    #[inline]
    pub fn project_point(&self, p: Vec3) -> Option<Vec3> {
        self.transform(p.extend(1.0)).perspective_divide()
    }

    /// Flattens to 16 values in row-major order.
    #[inline]
    pub fn to_rows_array(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (i, v) in self.m.iter().flatten().enumerate() {
            out[i] = *v;
        }
        out
    }

    /// Flattens to 16 values in column-major order.
    ///
    /// This is the layout OpenGL expects for `glUniformMatrix4fv` with
    /// `transpose = GL_FALSE`. Equal to `self.transpose().to_rows_array()`.
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 16] {
        self.transpose().to_rows_array()
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Converts to glam Mat4 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        glam::Mat4::from_cols_array(&self.to_cols_array())
    }

    /// Creates from glam Mat4.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_cols_array(m.to_cols_array())
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Mat4 * Vec4
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform(rhs)
    }
}

// Mat4 * Mat4
impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl Index<usize> for Mat4 {
    type Output = [f32; 4];

    #[inline]
    fn index(&self, i: usize) -> &[f32; 4] {
        &self.m[i]
    }
}

impl From<glam::Mat4> for Mat4 {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_glam(m)
    }
}

impl From<Mat4> for glam::Mat4 {
    #[inline]
    fn from(m: Mat4) -> glam::Mat4 {
        m.to_glam()
    }
}

impl AbsDiffEq for Mat4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Mat4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn sample() -> Mat4 {
        Mat4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ])
    }

    #[test]
    fn test_mat4_identity_law() {
        let m = sample();
        assert_eq!(Mat4::IDENTITY * m, m);
        assert_eq!(m * Mat4::IDENTITY, m);
    }

    #[test]
    fn test_mat4_transpose() {
        let m = sample();
        let t = m.transpose();
        assert_eq!(t.m[0][1], 5.0);
        assert_eq!(t.m[1][0], 2.0);
        assert_eq!(t.m[3][0], 4.0);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_mat4_flat_layouts() {
        let m = sample();
        let rows = m.to_rows_array();
        let cols = m.to_cols_array();
        assert_eq!(rows[1], 2.0);
        assert_eq!(cols[1], 5.0);
        assert_eq!(cols, m.transpose().to_rows_array());
        assert_eq!(Mat4::from_rows_array(rows), m);
        assert_eq!(Mat4::from_cols_array(cols), m);
    }

    #[test]
    fn test_mat4_mul_not_commutative() {
        let t = Mat4::translation(1.0, 0.0, 0.0);
        let r = Mat4::rotation_z(FRAC_PI_2);
        let p = Vec4::point(1.0, 0.0, 0.0);

        // rotate then translate
        assert_abs_diff_eq!((t * r) * p, Vec4::point(1.0, 1.0, 0.0), epsilon = 1e-6);
        // translate then rotate
        assert_abs_diff_eq!((r * t) * p, Vec4::point(0.0, 2.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_mat4_scale() {
        let m = Mat4::scale(2.0, 3.0, 4.0);
        assert_eq!(m.m[3][3], 1.0);
        assert_eq!(m * Vec4::point(1.0, 1.0, 1.0), Vec4::point(2.0, 3.0, 4.0));
        assert_eq!(Mat4::scale_uniform(2.0), Mat4::scale(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_mat4_translation() {
        let m = Mat4::translation(1.0, 2.0, 3.0);
        assert_eq!(m * Vec4::point(0.0, 0.0, 0.0), Vec4::point(1.0, 2.0, 3.0));
        // directions ignore translation
        assert_eq!(m.transform_vector(Vec3::X), Vec3::X);
    }

    #[test]
    fn test_mat4_rotation_z() {
        assert_eq!(Mat4::rotation_z(0.0), Mat4::IDENTITY);
        let p = Mat4::rotation_z(FRAC_PI_2) * Vec4::point(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(p, Vec4::point(0.0, 1.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_mat4_rotation_x_y() {
        let p = Mat4::rotation_x(FRAC_PI_2).transform_point(Vec3::Y);
        assert_abs_diff_eq!(p, Vec3::Z, epsilon = 1e-6);
        let p = Mat4::rotation_y(FRAC_PI_2).transform_point(Vec3::Z);
        assert_abs_diff_eq!(p, Vec3::X, epsilon = 1e-6);
    }

    #[test]
    fn test_mat4_axis_rotation_matches_principal_axes() {
        for angle in [0.0, 0.3, FRAC_PI_2, 2.0, PI, -1.1] {
            assert_abs_diff_eq!(Mat4::rotation(angle, Vec3::X), Mat4::rotation_x(angle), epsilon = 1e-6);
            assert_abs_diff_eq!(Mat4::rotation(angle, Vec3::Y), Mat4::rotation_y(angle), epsilon = 1e-6);
            assert_abs_diff_eq!(Mat4::rotation(angle, Vec3::Z), Mat4::rotation_z(angle), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_mat4_rotation_keeps_axis_fixed() {
        let axis = Vec3::new(1.0, 1.0, 1.0).normalized().unwrap();
        let m = Mat4::rotation(1.234, axis);
        assert_abs_diff_eq!(m.transform_vector(axis), axis, epsilon = 1e-6);
        // a third of a turn about (1,1,1) cycles the basis
        let m = Mat4::rotation(2.0 * PI / 3.0, axis);
        assert_abs_diff_eq!(m.transform_vector(Vec3::X), Vec3::Y, epsilon = 1e-6);
    }

    #[test]
    fn test_mat4_rotation_euler_order() {
        let (x, y, z) = (0.3, -0.8, 1.4);
        let expected = Mat4::rotation_x(x) * Mat4::rotation_y(y) * Mat4::rotation_z(z);
        assert_eq!(Mat4::rotation_euler(x, y, z), expected);
    }

    #[test]
    fn test_mat4_perspective_layout() {
        let m = Mat4::perspective(FRAC_PI_2, 1.0, 1.0, 10.0);
        assert_abs_diff_eq!(m.m[0][0], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(m.m[1][1], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(m.m[2][2], -11.0 / 9.0, epsilon = 1e-6);
        assert_abs_diff_eq!(m.m[2][3], -20.0 / 9.0, epsilon = 1e-6);
        assert_eq!(m.m[3][2], -1.0);
        assert_eq!(m.m[3][3], 0.0);
    }

    #[test]
    fn test_mat4_perspective_depth_range() {
        let m = Mat4::perspective(FRAC_PI_2, 1.0, 1.0, 10.0);
        let near = m.project_point(Vec3::new(0.0, 0.0, -1.0)).unwrap();
        let far = m.project_point(Vec3::new(0.0, 0.0, -10.0)).unwrap();
        assert_abs_diff_eq!(near.z, -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(far.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mat4_perspective_aspect() {
        let m = Mat4::perspective(FRAC_PI_2, 2.0, 0.1, 100.0);
        assert_abs_diff_eq!(m.m[0][0], 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(m.m[1][1], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mat4_try_perspective_rejects() {
        assert!(Mat4::try_perspective(0.0, 1.0, 0.1, 10.0).is_err());
        assert!(Mat4::try_perspective(PI, 1.0, 0.1, 10.0).is_err());
        assert!(Mat4::try_perspective(1.0, 0.0, 0.1, 10.0).is_err());
        assert!(Mat4::try_perspective(1.0, 1.0, 0.0, 10.0).is_err());
        assert!(Mat4::try_perspective(1.0, 1.0, 5.0, 5.0).is_err());
        assert!(Mat4::try_perspective(f32::NAN, 1.0, 0.1, 10.0).is_err());
        let err = Mat4::try_perspective(1.0, -1.0, 0.1, 10.0).unwrap_err();
        assert!(err.is_parameter_error());
    }

    #[test]
    fn test_mat4_look_at_maps_eye_to_origin() {
        let eye = Vec3::new(0.0, 0.0, 5.0);
        let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::Y).unwrap();
        assert_abs_diff_eq!(view * eye.extend(1.0), Vec4::point(0.0, 0.0, 0.0), epsilon = 1e-6);
        // target lands on -Z at distance 5
        assert_abs_diff_eq!(view.transform_point(Vec3::ZERO), Vec3::new(0.0, 0.0, -5.0), epsilon = 1e-6);
    }

    #[test]
    fn test_mat4_look_at_offset_camera() {
        let eye = Vec3::new(0.0, 2.0, 0.0);
        let target = Vec3::new(0.0, 0.0, -4.0);
        let view = Mat4::look_at(eye, target, Vec3::Y).unwrap();

        assert_abs_diff_eq!(view.transform_point(eye), Vec3::ZERO, epsilon = 1e-6);
        let t = view.transform_point(target);
        assert_abs_diff_eq!(t.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(t.y, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(t.z, -(target - eye).magnitude(), epsilon = 1e-5);
    }

    #[test]
    fn test_mat4_look_at_degenerate() {
        let eye = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Mat4::look_at(eye, eye, Vec3::Y), Err(Error::ZeroLengthVector));

        let err = Mat4::look_at(Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0), Vec3::Y).unwrap_err();
        assert!(matches!(err, Error::DegenerateBasis { .. }));

        let err = Mat4::look_at(Vec3::ZERO, Vec3::X, Vec3::ZERO).unwrap_err();
        assert!(matches!(err, Error::DegenerateBasis { .. }));
    }

    #[test]
    fn test_mat4_index_row_col() {
        let m = sample();
        assert_eq!(m[1], [5.0, 6.0, 7.0, 8.0]);
        assert_eq!(m.row(2), Vec4::new(9.0, 10.0, 11.0, 12.0));
        assert_eq!(m.col(3), Vec4::new(4.0, 8.0, 12.0, 16.0));
    }

    #[test]
    fn test_mat4_is_finite() {
        assert!(sample().is_finite());
        let mut m = sample();
        m.m[2][1] = f32::NAN;
        assert!(!m.is_finite());
    }

    #[test]
    fn test_mat4_glam_roundtrip() {
        let m = sample();
        let g = m.to_glam();
        assert_eq!(g.to_cols_array(), m.to_cols_array());
        assert_eq!(Mat4::from_glam(g), m);
    }
}
