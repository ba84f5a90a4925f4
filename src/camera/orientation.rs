//! Orientation strategies behind one rotation-composition interface.
//!
//! The camera stores its rotation as an [`Orientation`]. Two strategies are
//! provided: [`QuatOrientation`] (the default) and [`MatrixOrientation`].
//! Both compose an incremental *active* rotation on the left
//! (`incremental * current`) and renormalize afterwards, so they produce the
//! same poses up to float error.
//!
//! Camera-local axes: `front` is the rotated `+Z`, `right` the rotated `-X`
//! and `up = right × front` (the rotated `+Y`).

use std::fmt::Debug;
use std::ops::Mul;

use glam::{Mat3, Quat, Vec3};

use crate::error::FlycamError;

/// Camera-local axes expressed in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// Viewing direction.
    pub front: Vec3,
    /// Screen-right direction.
    pub right: Vec3,
    /// Screen-up direction.
    pub up: Vec3,
}

impl Basis {
    /// Derive the basis from the rotated `+Z` and `+X` columns.
    fn from_columns(z: Vec3, x: Vec3) -> Self {
        let front = z.normalize();
        let right = -x.normalize();
        let up = right.cross(front).normalize();
        Self { front, right, up }
    }
}

/// Rotation representation usable as a camera orientation.
///
/// `Mul` combines two incremental rotations (`a * b` applies `b` first);
/// [`compose`](Orientation::compose) applies an incremental rotation to the
/// persistent orientation.
pub trait Orientation: Copy + Debug + PartialEq + Mul<Output = Self> {
    /// The identity rotation.
    const IDENTITY: Self;

    /// 180° about `+Y`: looks down `-Z` with `+X` to the right.
    const BASELINE: Self;

    /// Build a rotation of `degrees` about `axis`. The axis does not need to
    /// be unit length; a zero-length or non-finite axis is rejected.
    fn from_axis_angle(degrees: f32, axis: Vec3) -> Result<Self, FlycamError>;

    /// Apply `incremental` in world frame on top of `self`, renormalized.
    #[must_use]
    fn compose(self, incremental: Self) -> Self;

    /// Camera axes for this orientation.
    fn basis(&self) -> Basis;

    /// The same rotation as a quaternion.
    fn to_quat(&self) -> Quat;
}

fn unit_axis(axis: Vec3) -> Result<Vec3, FlycamError> {
    axis.try_normalize()
        .ok_or(FlycamError::DegenerateAxis(axis))
}

// ─────────────────────────────────────────────────────────────────────────────
// Quaternion
// ─────────────────────────────────────────────────────────────────────────────

/// Unit-quaternion orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuatOrientation(pub Quat);

impl Mul for QuatOrientation {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Orientation for QuatOrientation {
    const IDENTITY: Self = Self(Quat::IDENTITY);
    const BASELINE: Self = Self(Quat::from_xyzw(0.0, 1.0, 0.0, 0.0));

    fn from_axis_angle(degrees: f32, axis: Vec3) -> Result<Self, FlycamError> {
        // Half-angle form: (axis * sin(θ/2), cos(θ/2)).
        let axis = unit_axis(axis)?;
        Ok(Self(Quat::from_axis_angle(axis, degrees.to_radians())))
    }

    fn compose(self, incremental: Self) -> Self {
        Self((incremental.0 * self.0).normalize())
    }

    fn basis(&self) -> Basis {
        Basis::from_columns(self.0 * Vec3::Z, self.0 * Vec3::X)
    }

    fn to_quat(&self) -> Quat {
        self.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rotation matrix
// ─────────────────────────────────────────────────────────────────────────────

/// 3×3 rotation-matrix orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixOrientation(pub Mat3);

impl Mul for MatrixOrientation {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Orientation for MatrixOrientation {
    const IDENTITY: Self = Self(Mat3::IDENTITY);
    const BASELINE: Self =
        Self(Mat3::from_cols(Vec3::NEG_X, Vec3::Y, Vec3::NEG_Z));

    fn from_axis_angle(degrees: f32, axis: Vec3) -> Result<Self, FlycamError> {
        let axis = unit_axis(axis)?;
        let (s, c) = degrees.to_radians().sin_cos();
        let t = 1.0 - c;
        let Vec3 { x, y, z } = axis;

        // Rodrigues, column-major.
        Ok(Self(Mat3::from_cols(
            Vec3::new(t * x * x + c, t * x * y + z * s, t * x * z - y * s),
            Vec3::new(t * x * y - z * s, t * y * y + c, t * y * z + x * s),
            Vec3::new(t * x * z + y * s, t * y * z - x * s, t * z * z + c),
        )))
    }

    fn compose(self, incremental: Self) -> Self {
        Self(orthonormalize(incremental.0 * self.0))
    }

    fn basis(&self) -> Basis {
        Basis::from_columns(self.0.z_axis, self.0.x_axis)
    }

    fn to_quat(&self) -> Quat {
        Quat::from_mat3(&self.0)
    }
}

/// Gram-Schmidt on the columns, keeping the `z` column's direction.
fn orthonormalize(m: Mat3) -> Mat3 {
    let z = m.z_axis.normalize();
    let x = m.y_axis.cross(z).normalize();
    let y = z.cross(x);
    Mat3::from_cols(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_orthonormal(b: &Basis) {
        assert!((b.front.length() - 1.0).abs() < EPS);
        assert!((b.right.length() - 1.0).abs() < EPS);
        assert!((b.up.length() - 1.0).abs() < EPS);
        assert!(b.front.dot(b.right).abs() < EPS);
        assert!(b.front.dot(b.up).abs() < EPS);
        assert!(b.right.dot(b.up).abs() < EPS);
    }

    #[test]
    fn baseline_looks_down_negative_z() {
        for b in [
            QuatOrientation::BASELINE.basis(),
            MatrixOrientation::BASELINE.basis(),
        ] {
            assert!(b.front.abs_diff_eq(Vec3::NEG_Z, EPS));
            assert!(b.right.abs_diff_eq(Vec3::X, EPS));
            assert!(b.up.abs_diff_eq(Vec3::Y, EPS));
        }
    }

    #[test]
    fn zero_axis_is_rejected() {
        assert!(matches!(
            QuatOrientation::from_axis_angle(30.0, Vec3::ZERO),
            Err(FlycamError::DegenerateAxis(_))
        ));
        assert!(matches!(
            MatrixOrientation::from_axis_angle(30.0, Vec3::ZERO),
            Err(FlycamError::DegenerateAxis(_))
        ));
        assert!(
            MatrixOrientation::from_axis_angle(30.0, Vec3::splat(f32::NAN))
                .is_err()
        );
    }

    #[test]
    fn non_unit_axis_is_normalized() {
        let a =
            MatrixOrientation::from_axis_angle(40.0, Vec3::Y * 5.0).unwrap();
        let b = MatrixOrientation::from_axis_angle(40.0, Vec3::Y).unwrap();
        assert!(a.0.abs_diff_eq(b.0, EPS));

        let a = QuatOrientation::from_axis_angle(40.0, Vec3::Y * 5.0).unwrap();
        let b = QuatOrientation::from_axis_angle(40.0, Vec3::Y).unwrap();
        assert!(a.0.abs_diff_eq(b.0, EPS));
    }

    #[test]
    fn rodrigues_matches_right_hand_rule() {
        let m = MatrixOrientation::from_axis_angle(90.0, Vec3::Z).unwrap();
        assert!((m.0 * Vec3::X).abs_diff_eq(Vec3::Y, EPS));
        assert!((m.0 * Vec3::Y).abs_diff_eq(Vec3::NEG_X, EPS));

        let axis = Vec3::new(1.0, 2.0, -0.5);
        let m = MatrixOrientation::from_axis_angle(73.0, axis).unwrap();
        let q = QuatOrientation::from_axis_angle(73.0, axis).unwrap();
        let v = Vec3::new(0.3, -1.2, 2.0);
        assert!((m.0 * v).abs_diff_eq(q.0 * v, 1e-4));
    }

    #[test]
    fn identity_compose_is_noop() {
        let q = QuatOrientation::BASELINE.compose(QuatOrientation::IDENTITY);
        assert!(q.0.abs_diff_eq(QuatOrientation::BASELINE.0, EPS));
        let m =
            MatrixOrientation::BASELINE.compose(MatrixOrientation::IDENTITY);
        assert!(m.0.abs_diff_eq(MatrixOrientation::BASELINE.0, EPS));
    }

    #[test]
    fn drifted_matrix_is_reorthonormalized() {
        let drifted = Mat3::from_cols(
            Vec3::new(1.01, 0.02, 0.0),
            Vec3::new(0.0, 0.98, 0.03),
            Vec3::new(0.01, 0.0, 1.02),
        );
        let m = MatrixOrientation(drifted).compose(MatrixOrientation::IDENTITY);
        assert_orthonormal(&m.basis());
        assert!((m.0.determinant() - 1.0).abs() < EPS);
    }

    #[test]
    fn strategies_agree_over_many_compositions() {
        let mut q = QuatOrientation::BASELINE;
        let mut m = MatrixOrientation::BASELINE;
        for i in 0..500 {
            let angle = (i as f32 * 0.37).sin() * 7.0;
            let axis = Vec3::new(
                (i as f32 * 0.11).cos(),
                1.0,
                (i as f32 * 0.23).sin(),
            );
            let dq = QuatOrientation::from_axis_angle(angle, axis).unwrap();
            let dm = MatrixOrientation::from_axis_angle(angle, axis).unwrap();
            q = q.compose(dq);
            m = m.compose(dm);
        }
        let (bq, bm) = (q.basis(), m.basis());
        assert_orthonormal(&bq);
        assert_orthonormal(&bm);
        assert!(bq.front.abs_diff_eq(bm.front, 1e-3));
        assert!(bq.up.abs_diff_eq(bm.up, 1e-3));
        assert!((q.0.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn to_quat_round_trips_matrix() {
        let m = MatrixOrientation::from_axis_angle(35.0, Vec3::X).unwrap();
        let q = m.to_quat();
        assert!(Mat3::from_quat(q).abs_diff_eq(m.0, EPS));
    }
}
