use nalgebra::{Matrix3, Matrix4, Matrix6, Vector3, Vector4};
use serde::{Serialize, Deserialize};
use crate::utils::utils_se3::lie_algebra::{matrix_log6, rotation_matrix, rotation_and_translation_to_matrix, skew_symmetric};

/// A representation for an SE(3) transform composed of a 4x4 homogeneous transformation matrix.
/// The upper-left 3x3 block is a rotation matrix, the top three entries of the last column are
/// a translation, and the bottom row is [0,0,0,1].  The matrix is assumed to be a valid rigid
/// transform; numerical drift accumulated through composition is tolerated, not corrected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HomogeneousMatrix {
    matrix: Matrix4<f64>
}
impl HomogeneousMatrix {
    pub fn new(matrix: Matrix4<f64>) -> Self {
        Self {
            matrix
        }
    }
    pub fn new_identity() -> Self {
        return Self::new(Matrix4::identity());
    }
    pub fn new_from_rotation_and_translation(rotation: &Matrix3<f64>, translation: &Vector3<f64>) -> Self {
        return Self::new(rotation_and_translation_to_matrix(rotation, translation));
    }
    /// Builds a transform that rotates by the given angle about the given axis and translates by (x, y, z).
    pub fn new_from_axis_angle(axis: &Vector3<f64>, theta: f64, x: f64, y: f64, z: f64) -> Self {
        let rotation = rotation_matrix(axis, theta);
        let translation = Vector3::new(x, y, z);
        return Self::new_from_rotation_and_translation(&rotation, &translation);
    }
    pub fn new_from_translation(x: f64, y: f64, z: f64) -> Self {
        return Self::new_from_rotation_and_translation(&Matrix3::identity(), &Vector3::new(x, y, z));
    }
    /// Returns a reference to the underlying 4x4 matrix.
    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }
    /// Returns the rotation component of the homogeneous matrix.
    pub fn rotation(&self) -> Matrix3<f64> {
        let mut mat3 = Matrix3::zeros();

        for i in 0..3 {
            for j in 0..3 {
                mat3[(i, j)] = self.matrix[(i, j)];
            }
        }

        return mat3;
    }
    /// Returns the translation component of the homogeneous matrix.
    pub fn translation(&self) -> Vector3<f64> {
        let out_vec = Vector3::new(self.matrix[(0,3)], self.matrix[(1,3)], self.matrix[(2,3)]);
        return out_vec;
    }
    /// multiplication
    pub fn multiply(&self, other: &HomogeneousMatrix) -> HomogeneousMatrix {
        let matrix = self.matrix * &other.matrix;
        return Self::new(matrix);
    }
    /// multiplication by a point
    pub fn multiply_by_point(&self, point: &Vector3<f64>) -> Vector3<f64> {
        let four_point = Vector4::new(point[0], point[1], point[2], 1.0);
        let result_point = self.matrix * &four_point;
        return Vector3::new(result_point[0], result_point[1], result_point[2]);
    }
    /// The inverse transform such that T * T^-1 = I.  Uses the rigid-transform
    /// closed form rather than a general matrix inversion.
    pub fn inverse(&self) -> Self {
        let mut matrix = Matrix4::zeros();
        let rot_mat_transpose = self.rotation().transpose();
        let translation = self.translation();
        let new_translation = rot_mat_transpose * &translation;

        for i in 0..3 {
            for j in 0..3 {
                matrix[(i, j)] = rot_mat_transpose[(i, j)];
            }
            matrix[(i, 3)] = -new_translation[i];
        }

        matrix[(3,3)] = 1.0;

        return Self::new(matrix);
    }
    /// The displacement transform such that T_self * T_disp = T_other.  For a current
    /// end-effector pose, `self.displacement(goal)` expresses the goal in the current
    /// body frame.
    pub fn displacement(&self, other: &HomogeneousMatrix) -> HomogeneousMatrix {
        return self.inverse().multiply(&other);
    }
    /// The 6x6 adjoint of this transform, with block structure [[R, 0], [skew(p)R, R]].
    /// Maps twists and Jacobian columns between frames related by this transform.
    pub fn adjoint(&self) -> Matrix6<f64> {
        let r = self.rotation();
        let p_skew_r = skew_symmetric(&self.translation()) * &r;
        let mut adj = Matrix6::zeros();

        for i in 0..3 {
            for j in 0..3 {
                adj[(i, j)] = r[(i, j)];
                adj[(i + 3, j + 3)] = r[(i, j)];
                adj[(i + 3, j)] = p_skew_r[(i, j)];
            }
        }

        return adj;
    }
    /// The se(3) matrix logarithm of this transform.
    pub fn matrix_logarithm(&self) -> Matrix4<f64> {
        return matrix_log6(&self.matrix);
    }
    /// The Frobenius norm of the difference between the two underlying matrices.  Not a
    /// proper distance metric on SE(3), but usable as a rough closeness measure between
    /// poses.  Zero if and only if the matrices are identical.
    pub fn approximate_distance(&self, other: &HomogeneousMatrix) -> f64 {
        return (self.matrix - other.matrix).norm();
    }
}
