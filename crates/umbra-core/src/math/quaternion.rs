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

//! Provides a Quaternion type for representing 3D rotations.

use serde::{Deserialize, Serialize};

use super::{Vec3, EPSILON};
use std::ops::{Add, Mul, MulAssign, Neg};

/// Represents a quaternion for efficient 3D rotations.
///
/// A quaternion is stored as `(x, y, z, w)`, where `[x, y, z]` is the "vector"
/// part and `w` is the "scalar" part. For representing rotations, it should be
/// a "unit quaternion" where `x² + y² + z² + w² = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Quaternion {
    /// The x component of the vector part.
    pub x: f32,
    /// The y component of the vector part.
    pub y: f32,
    /// The z component of the vector part.
    pub z: f32,
    /// The scalar (real) part.
    pub w: f32,
}

impl Quaternion {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Creates a new quaternion from its raw components.
    ///
    /// Note: This does not guarantee a unit quaternion. For creating rotations,
    /// prefer using `from_axis_angle` or other rotation-specific constructors.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a quaternion representing a rotation around a given axis by a given angle.
    ///
    /// # Arguments
    ///
    /// * `axis`: The axis of rotation. It is recommended to pass a normalized vector.
    /// * `angle_radians`: The angle of rotation in radians.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle_radians: f32) -> Self {
        let normalized_axis = axis.normalize();
        let half_angle = angle_radians * 0.5;
        let s = half_angle.sin();
        let c = half_angle.cos();
        Self {
            x: normalized_axis.x * s,
            y: normalized_axis.y * s,
            z: normalized_axis.z * s,
            w: c,
        }
    }

    /// Creates a rotation that orients the local `-Z` axis along `direction`,
    /// keeping the local `+Y` axis as close to `up` as possible.
    ///
    /// `direction` does not need to be normalized. If `direction` is
    /// (near-)zero or parallel to `up`, the identity rotation is returned.
    pub fn look_rotation(direction: Vec3, up: Vec3) -> Self {
        let forward = direction.normalize();
        if forward == Vec3::ZERO {
            return Self::IDENTITY;
        }

        // Build an orthonormal basis with -Z forward (right-handed).
        let z_axis = -forward;
        let x_axis = up.cross(z_axis).normalize();
        if x_axis == Vec3::ZERO {
            return Self::IDENTITY;
        }
        let y_axis = z_axis.cross(x_axis);

        Self::from_basis(x_axis, y_axis, z_axis)
    }

    /// Creates a quaternion from three orthonormal basis vectors
    /// (the columns of a rotation matrix).
    fn from_basis(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3) -> Self {
        let (m00, m10, m20) = (x_axis.x, x_axis.y, x_axis.z);
        let (m01, m11, m21) = (y_axis.x, y_axis.y, y_axis.z);
        let (m02, m12, m22) = (z_axis.x, z_axis.y, z_axis.z);

        // Algorithm from http://www.euclideanspace.com/maths/geometry/rotations/conversions/matrixToQuaternion/index.htm
        let trace = m00 + m11 + m22;
        let mut q = Self::IDENTITY;

        if trace > 0.0 {
            let s = 2.0 * (trace + 1.0).sqrt();
            q.w = 0.25 * s;
            q.x = (m21 - m12) / s;
            q.y = (m02 - m20) / s;
            q.z = (m10 - m01) / s;
        } else if m00 > m11 && m00 > m22 {
            let s = 2.0 * (1.0 + m00 - m11 - m22).sqrt();
            q.w = (m21 - m12) / s;
            q.x = 0.25 * s;
            q.y = (m01 + m10) / s;
            q.z = (m02 + m20) / s;
        } else if m11 > m22 {
            let s = 2.0 * (1.0 + m11 - m00 - m22).sqrt();
            q.w = (m02 - m20) / s;
            q.x = (m01 + m10) / s;
            q.y = 0.25 * s;
            q.z = (m12 + m21) / s;
        } else {
            let s = 2.0 * (1.0 + m22 - m00 - m11).sqrt();
            q.w = (m10 - m01) / s;
            q.x = (m02 + m20) / s;
            q.y = (m12 + m21) / s;
            q.z = 0.25 * s;
        }
        q.normalize()
    }

    /// Calculates the squared length (magnitude) of the quaternion.
    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Calculates the length (magnitude) of the quaternion.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Returns a normalized version of the quaternion with a length of 1.
    /// If the quaternion has a near-zero magnitude, it returns the identity quaternion.
    pub fn normalize(&self) -> Self {
        let mag_sqrt = self.magnitude_squared();
        if mag_sqrt > EPSILON {
            let inv_mag = 1.0 / mag_sqrt.sqrt();
            Self {
                x: self.x * inv_mag,
                y: self.y * inv_mag,
                z: self.z * inv_mag,
                w: self.w * inv_mag,
            }
        } else {
            Self::IDENTITY
        }
    }

    /// Computes the conjugate of the quaternion, which negates the vector part.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Computes the dot product of two quaternions.
    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Rotates a 3D vector by this quaternion.
    pub fn rotate_vec3(&self, v: Vec3) -> Vec3 {
        let u = Vec3::new(self.x, self.y, self.z);
        let s: f32 = self.w;
        2.0 * u.dot(v) * u + (s * s - u.dot(u)) * v + 2.0 * s * u.cross(v)
    }

    /// Performs a Spherical Linear Interpolation (Slerp) between two quaternions.
    ///
    /// Slerp provides a smooth, constant-speed interpolation between two rotations,
    /// following the shortest path on the surface of a 4D sphere.
    ///
    /// *   `t` - The interpolation factor, clamped to the `[0.0, 1.0]` range.
    pub fn slerp(start: Self, end: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mut cos_theta = start.dot(end);
        let mut end_adjusted = end;

        // If the dot product is negative, the quaternions are more than 90 degrees apart.
        // To ensure the shortest path, negate one quaternion.
        if cos_theta < 0.0 {
            cos_theta = -cos_theta;
            end_adjusted = -end;
        }

        if cos_theta > 1.0 - EPSILON {
            // Linear Interpolation: (1-t)*start + t*end_adjusted
            // Normalize the result to avoid drift due to floating point errors.
            let result = (start * (1.0 - t)) + (end_adjusted * t);
            result.normalize()
        } else {
            let angle = cos_theta.acos();
            let sin_theta_inv = 1.0 / angle.sin();
            let scale_start = ((1.0 - t) * angle).sin() * sin_theta_inv;
            let scale_end = (t * angle).sin() * sin_theta_inv;
            (start * scale_start) + (end_adjusted * scale_end)
        }
    }
}

// --- Operator Overloads ---

impl Default for Quaternion {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Quaternion> for Quaternion {
    type Output = Self;
    /// Combines two rotations using the Hamilton product.
    /// Note that quaternion multiplication is not commutative.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl MulAssign<Quaternion> for Quaternion {
    /// Combines this rotation with another.
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3> for Quaternion {
    type Output = Vec3;
    /// Rotates a `Vec3` by this quaternion.
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.normalize().rotate_vec3(rhs)
    }
}

impl Add<Quaternion> for Quaternion {
    type Output = Self;
    /// Adds two quaternions component-wise.
    /// Note: This is not a standard rotation operation.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;
    /// Scales all components of the quaternion by a scalar.
    #[inline]
    fn mul(self, scalar: f32) -> Self::Output {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
            w: self.w * scalar,
        }
    }
}

impl Neg for Quaternion {
    type Output = Self;
    /// Negates all components of the quaternion.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{FRAC_PI_2, PI};
    use approx::assert_relative_eq;

    fn vec3_approx_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = EPSILON * 10.0);
        assert_relative_eq!(a.y, b.y, epsilon = EPSILON * 10.0);
        assert_relative_eq!(a.z, b.z, epsilon = EPSILON * 10.0);
    }

    #[test]
    fn test_identity_rotation_is_noop() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        vec3_approx_eq(Quaternion::IDENTITY.rotate_vec3(v), v);
    }

    #[test]
    fn test_axis_angle_quarter_turn() {
        // Rotating +X by 90 degrees around +Y yields -Z.
        let q = Quaternion::from_axis_angle(Vec3::Y, FRAC_PI_2);
        vec3_approx_eq(q.rotate_vec3(Vec3::X), -Vec3::Z);
    }

    #[test]
    fn test_composed_rotations_match_single() {
        let half = Quaternion::from_axis_angle(Vec3::Y, FRAC_PI_2);
        let full = Quaternion::from_axis_angle(Vec3::Y, PI);
        let composed = half * half;
        vec3_approx_eq(composed.rotate_vec3(Vec3::X), full.rotate_vec3(Vec3::X));
    }

    #[test]
    fn test_look_rotation_faces_direction() {
        // Default forward is -Z; looking down +X must map -Z onto +X.
        let q = Quaternion::look_rotation(Vec3::X, Vec3::Y);
        vec3_approx_eq(q.rotate_vec3(-Vec3::Z), Vec3::X);
        assert_relative_eq!(q.magnitude(), 1.0, epsilon = EPSILON * 10.0);
    }

    #[test]
    fn test_look_rotation_degenerate_direction() {
        assert_eq!(
            Quaternion::look_rotation(Vec3::ZERO, Vec3::Y),
            Quaternion::IDENTITY
        );
        assert_eq!(
            Quaternion::look_rotation(Vec3::Y, Vec3::Y),
            Quaternion::IDENTITY
        );
    }

    #[test]
    fn test_slerp_endpoints_and_midpoint() {
        let start = Quaternion::IDENTITY;
        let end = Quaternion::from_axis_angle(Vec3::Y, FRAC_PI_2);

        let at_start = Quaternion::slerp(start, end, 0.0);
        let at_end = Quaternion::slerp(start, end, 1.0);
        assert_relative_eq!(at_start.dot(start).abs(), 1.0, epsilon = EPSILON * 10.0);
        assert_relative_eq!(at_end.dot(end).abs(), 1.0, epsilon = EPSILON * 10.0);

        // Midpoint is the quarter-turn's half-angle rotation.
        let mid = Quaternion::slerp(start, end, 0.5);
        let expected = Quaternion::from_axis_angle(Vec3::Y, FRAC_PI_2 * 0.5);
        assert_relative_eq!(mid.dot(expected).abs(), 1.0, epsilon = EPSILON * 10.0);
    }

    #[test]
    fn test_normalize_keeps_unit_length() {
        let q = Quaternion::new(0.3, -1.2, 4.0, 0.5).normalize();
        assert_relative_eq!(q.magnitude(), 1.0, epsilon = EPSILON * 10.0);
    }
}
