//! Transform chain composition.
//!
//! Callers assemble the per-frame transform as
//!
//! ```text
//! identity * projection * view * model * animation
//! ```
//!
//! and the order matters: the rightmost factor is applied to a vertex
//! first. [`compose`] folds a chain in exactly that order, and
//! [`model_view_projection`] spells out the usual three-factor case.
//!
//! # Usage
//!
//! ```rust
//! use gltut_math::{compose, Mat4};
//!
//! let chain = [Mat4::translation(1.0, 0.0, 0.0), Mat4::scale_uniform(2.0)];
//! assert_eq!(compose(chain), chain[0] * chain[1]);
//!
//! let product: Mat4 = chain.iter().product();
//! assert_eq!(product, compose(chain));
//! ```

use std::iter::Product;

use crate::Mat4;

/// Multiplies `factors` left to right, starting from the identity.
///
/// An empty chain yields [`Mat4::IDENTITY`].
pub fn compose<I>(factors: I) -> Mat4
where
    I: IntoIterator<Item = Mat4>,
{
    factors
        .into_iter()
        .fold(Mat4::IDENTITY, |acc, m| acc.mul_mat(&m))
}

/// `projection * view * model`.
#[inline]
pub fn model_view_projection(projection: &Mat4, view: &Mat4, model: &Mat4) -> Mat4 {
    projection.mul_mat(view).mul_mat(model)
}

impl Product for Mat4 {
    fn product<I: Iterator<Item = Mat4>>(iter: I) -> Self {
        compose(iter)
    }
}

impl<'a> Product<&'a Mat4> for Mat4 {
    fn product<I: Iterator<Item = &'a Mat4>>(iter: I) -> Self {
        compose(iter.copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Vec3, Vec4};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_compose_empty_is_identity() {
        assert_eq!(compose(std::iter::empty()), Mat4::IDENTITY);
    }

    #[test]
    fn test_compose_order() {
        let t = Mat4::translation(0.0, 0.0, -4.0);
        let s = Mat4::scale_uniform(2.0);
        // scale first, then translate
        let m = compose([t, s]);
        assert_eq!(m.transform_point(Vec3::X), Vec3::new(2.0, 0.0, -4.0));
    }

    #[test]
    fn test_model_view_projection() {
        let projection = Mat4::perspective(1.0, 1.5, 0.1, 10.0);
        let view = Mat4::look_at(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 0.0, -4.0), Vec3::Y).unwrap();
        let model = Mat4::translation(0.0, 0.0, -4.0);

        let mvp = model_view_projection(&projection, &view, &model);
        assert_eq!(mvp, compose([Mat4::IDENTITY, projection, view, model]));

        let p = Vec4::point(0.3, -0.2, 0.1);
        assert_abs_diff_eq!(mvp * p, projection * (view * (model * p)), epsilon = 1e-5);
    }
}
