// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides a 4x4 column-major matrix type for spatial transformations.

use serde::{Deserialize, Serialize};

use super::{Quaternion, Vec3, Vec4};
use std::ops::Mul;

/// A 4x4 column-major matrix, used to compose model transforms for the
/// render boundary.
#[derive(
    Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct Mat4 {
    /// The four columns of the matrix.
    pub cols: [Vec4; 4],
}

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        ],
    };

    /// Creates a matrix from four column vectors.
    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Creates a translation matrix.
    #[inline]
    pub fn from_translation(v: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[3] = Vec4::from_vec3(v, 1.0);
        m
    }

    /// Creates a non-uniform scale matrix.
    #[inline]
    pub fn from_scale(scale: Vec3) -> Self {
        Self::from_cols(
            Vec4::new(scale.x, 0.0, 0.0, 0.0),
            Vec4::new(0.0, scale.y, 0.0, 0.0),
            Vec4::new(0.0, 0.0, scale.z, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Creates a rotation matrix from a quaternion.
    ///
    /// The quaternion is normalized first so a slightly-drifted rotation
    /// still produces a proper orthonormal basis.
    pub fn from_quat(q: Quaternion) -> Self {
        let q = q.normalize();
        let (x, y, z, w) = (q.x, q.y, q.z, q.w);

        let x2 = x + x;
        let y2 = y + y;
        let z2 = z + z;

        let xx = x * x2;
        let xy = x * y2;
        let xz = x * z2;
        let yy = y * y2;
        let yz = y * z2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        Self::from_cols(
            Vec4::new(1.0 - (yy + zz), xy + wz, xz - wy, 0.0),
            Vec4::new(xy - wz, 1.0 - (xx + zz), yz + wx, 0.0),
            Vec4::new(xz + wy, yz - wx, 1.0 - (xx + yy), 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Retrieves a row of the matrix by index.
    ///
    /// # Panics
    /// Panics if `index` is not in `0..4`.
    #[inline]
    pub fn get_row(&self, index: usize) -> Vec4 {
        match index {
            0 => Vec4::new(
                self.cols[0].x,
                self.cols[1].x,
                self.cols[2].x,
                self.cols[3].x,
            ),
            1 => Vec4::new(
                self.cols[0].y,
                self.cols[1].y,
                self.cols[2].y,
                self.cols[3].y,
            ),
            2 => Vec4::new(
                self.cols[0].z,
                self.cols[1].z,
                self.cols[2].z,
                self.cols[3].z,
            ),
            3 => Vec4::new(
                self.cols[0].w,
                self.cols[1].w,
                self.cols[2].w,
                self.cols[3].w,
            ),
            _ => panic!("Index out of bounds for Mat4 row"),
        }
    }

    /// Transforms a point (w = 1) by this matrix.
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        let p = Vec4::from_vec3(point, 1.0);
        Vec4::new(
            self.get_row(0).dot(p),
            self.get_row(1).dot(p),
            self.get_row(2).dot(p),
            self.get_row(3).dot(p),
        )
        .truncate()
    }
}

impl Default for Mat4 {
    /// Returns the identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Self;
    /// Standard matrix multiplication (`self * rhs`).
    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut cols = [Vec4::ZERO; 4];
        for (i, col) in cols.iter_mut().enumerate() {
            *col = Vec4::new(
                self.get_row(0).dot(rhs.cols[i]),
                self.get_row(1).dot(rhs.cols[i]),
                self.get_row(2).dot(rhs.cols[i]),
                self.get_row(3).dot(rhs.cols[i]),
            );
        }
        Self { cols }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{EPSILON, FRAC_PI_2};
    use approx::assert_relative_eq;

    fn assert_point_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = EPSILON * 10.0);
        assert_relative_eq!(a.y, b.y, epsilon = EPSILON * 10.0);
        assert_relative_eq!(a.z, b.z, epsilon = EPSILON * 10.0);
    }

    #[test]
    fn test_identity_transform_is_noop() {
        let p = Vec3::new(1.0, -2.0, 3.0);
        assert_point_eq(Mat4::IDENTITY.transform_point(p), p);
    }

    #[test]
    fn test_translation_moves_point() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_point_eq(m.transform_point(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_trs_composition_order() {
        // T * R * S: scale first, then rotate, then translate.
        let t = Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0));
        let r = Mat4::from_quat(Quaternion::from_axis_angle(Vec3::Y, FRAC_PI_2));
        let s = Mat4::from_scale(Vec3::splat(2.0));
        let m = t * r * s;

        // (1,0,0) -> scaled (2,0,0) -> rotated (0,0,-2) -> translated (10,0,-2).
        assert_point_eq(m.transform_point(Vec3::X), Vec3::new(10.0, 0.0, -2.0));
    }

    #[test]
    fn test_from_quat_matches_quaternion_rotation() {
        let q = Quaternion::from_axis_angle(Vec3::new(0.3, 1.0, -0.2), 1.1);
        let m = Mat4::from_quat(q);
        let v = Vec3::new(0.5, -1.5, 2.0);
        assert_point_eq(m.transform_point(v), q.rotate_vec3(v));
    }
}
