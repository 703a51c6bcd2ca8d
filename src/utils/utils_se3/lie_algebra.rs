use nalgebra::{Matrix3, Matrix4, Vector3, Vector6};

/// Values below this magnitude are treated as zero when deciding between the
/// rotational and pure-translation branches of the exponential and logarithm maps.
pub const NEAR_ZERO_THRESHOLD: f64 = 1e-6;

pub fn near_zero(x: f64) -> bool {
    x.abs() < NEAR_ZERO_THRESHOLD
}

/// Normalizes the given vector.  A zero vector is passed through unchanged.
pub fn normalize_vector(v: &Vector3<f64>) -> Vector3<f64> {
    let norm = v.norm();
    if norm == 0.0 { return *v; }
    return v / norm;
}

/// Maps a 3-vector omega to the 3x3 antisymmetric matrix [omega] such that
/// [omega] * x == omega x x for all x.
pub fn skew_symmetric(omega: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(0.0, -omega[2], omega[1],
                 omega[2], 0.0, -omega[0],
                 -omega[1], omega[0], 0.0)
}

/// Inverse of `skew_symmetric`.
pub fn unskew(so3mat: &Matrix3<f64>) -> Vector3<f64> {
    Vector3::new(so3mat[(2, 1)], so3mat[(0, 2)], so3mat[(1, 0)])
}

/// Maps a twist (omega, v) to its 4x4 se(3) matrix representation
/// [[ [omega], v ], [ 0, 0 ]].
pub fn twist_to_se3_matrix(twist: &Vector6<f64>) -> Matrix4<f64> {
    Matrix4::new(0.0, -twist[2], twist[1], twist[3],
                 twist[2], 0.0, -twist[0], twist[4],
                 -twist[1], twist[0], 0.0, twist[5],
                 0.0, 0.0, 0.0, 0.0)
}

/// Recovers the 6-coordinate twist from a 4x4 se(3) matrix: the three independent
/// entries of the antisymmetric rotational block followed by the translation column.
pub fn se3_matrix_to_twist(se3mat: &Matrix4<f64>) -> Vector6<f64> {
    Vector6::new(se3mat[(2, 1)], se3mat[(0, 2)], se3mat[(1, 0)],
                 se3mat[(0, 3)], se3mat[(1, 3)], se3mat[(2, 3)])
}

/// Matrix exponential of a 3x3 so(3) matrix via the Rodrigues formula.  The input
/// need not encode a unit rotation axis; the rotation angle is recovered as the
/// magnitude of the unskewed vector.
pub fn matrix_exp3(so3mat: &Matrix3<f64>) -> Matrix3<f64> {
    let omgtheta = unskew(so3mat);
    let theta = omgtheta.norm();
    if near_zero(theta) {
        return Matrix3::identity();
    }
    let omgmat = so3mat / theta;
    Matrix3::identity() + theta.sin() * omgmat + (1.0 - theta.cos()) * (omgmat * omgmat)
}

/// Matrix logarithm of a rotation matrix.  Returns a 3x3 so(3) matrix.
///
/// The rotation-angle-pi branch is resolved with the standard closed form; the
/// sign of the recovered axis is a branch choice inherent to the logarithm there.
pub fn matrix_log3(r: &Matrix3<f64>) -> Matrix3<f64> {
    let acosinput = (r.trace() - 1.0) / 2.0;
    if acosinput >= 1.0 {
        return Matrix3::zeros();
    } else if acosinput <= -1.0 {
        let omg: Vector3<f64>;
        if !near_zero(1.0 + r[(2, 2)]) {
            omg = (1.0 / (2.0 * (1.0 + r[(2, 2)]).sqrt()))
                * Vector3::new(r[(0, 2)], r[(1, 2)], 1.0 + r[(2, 2)]);
        } else if !near_zero(1.0 + r[(1, 1)]) {
            omg = (1.0 / (2.0 * (1.0 + r[(1, 1)]).sqrt()))
                * Vector3::new(r[(0, 1)], 1.0 + r[(1, 1)], r[(2, 1)]);
        } else {
            omg = (1.0 / (2.0 * (1.0 + r[(0, 0)]).sqrt()))
                * Vector3::new(1.0 + r[(0, 0)], r[(1, 0)], r[(2, 0)]);
        }
        return skew_symmetric(&(std::f64::consts::PI * omg));
    }
    let theta = acosinput.acos();
    (theta / (2.0 * theta.sin())) * (r - r.transpose())
}

/// Matrix exponential of a 4x4 se(3) matrix, producing a rigid transform.
/// Reproduces the semantics of a general matrix exponential restricted to se(3)
/// inputs, including se(3) matrices whose rotational block is not unit-magnitude.
pub fn matrix_exp6(se3mat: &Matrix4<f64>) -> Matrix4<f64> {
    let so3mat = Matrix3::new(se3mat[(0, 0)], se3mat[(0, 1)], se3mat[(0, 2)],
                              se3mat[(1, 0)], se3mat[(1, 1)], se3mat[(1, 2)],
                              se3mat[(2, 0)], se3mat[(2, 1)], se3mat[(2, 2)]);
    let v = Vector3::new(se3mat[(0, 3)], se3mat[(1, 3)], se3mat[(2, 3)]);
    let omgtheta = unskew(&so3mat);
    let theta = omgtheta.norm();
    if near_zero(theta) {
        // Pure translation.
        return rotation_and_translation_to_matrix(&Matrix3::identity(), &v);
    }
    let omgmat = so3mat / theta;
    let r = matrix_exp3(&so3mat);
    let p = ((Matrix3::identity() * theta
        + (1.0 - theta.cos()) * omgmat
        + (theta - theta.sin()) * (omgmat * omgmat)) * v) / theta;
    rotation_and_translation_to_matrix(&r, &p)
}

/// Matrix logarithm of a 4x4 rigid transform.  Returns a 4x4 se(3) matrix
/// (antisymmetric rotational block, translation column, zero bottom row).  Near
/// the identity the result approaches the zero matrix.
pub fn matrix_log6(t: &Matrix4<f64>) -> Matrix4<f64> {
    let r = Matrix3::new(t[(0, 0)], t[(0, 1)], t[(0, 2)],
                         t[(1, 0)], t[(1, 1)], t[(1, 2)],
                         t[(2, 0)], t[(2, 1)], t[(2, 2)]);
    let p = Vector3::new(t[(0, 3)], t[(1, 3)], t[(2, 3)]);
    let omgmat = matrix_log3(&r);
    if omgmat == Matrix3::zeros() {
        return twist_to_se3_matrix(&Vector6::new(0.0, 0.0, 0.0, p[0], p[1], p[2]));
    }
    let theta = ((r.trace() - 1.0) / 2.0).acos();
    let g_inv = Matrix3::identity() - omgmat / 2.0
        + (1.0 / theta - 1.0 / ((theta / 2.0).tan()) / 2.0) * (omgmat * omgmat) / theta;
    let v = g_inv * p;

    let mut out_mat = Matrix4::zeros();
    for i in 0..3 {
        for j in 0..3 {
            out_mat[(i, j)] = omgmat[(i, j)];
        }
        out_mat[(i, 3)] = v[i];
    }
    return out_mat;
}

/// The exponential map of a screw axis S = (omega, v) scaled by theta: builds the
/// se(3) matrix [S] * theta and exponentiates it into a rigid transform.  This is
/// the atomic unit composed once per joint in forward kinematics.  The caller's
/// convention determines whether theta is an angle or a combined magnitude; omega
/// need not be pre-normalized.
pub fn exponential_map(screw: &Vector6<f64>, theta: f64) -> Matrix4<f64> {
    matrix_exp6(&twist_to_se3_matrix(&(screw * theta)))
}

/// A rotation matrix for a rotation of theta about the given (not necessarily
/// unit) axis.  A zero axis is degenerate and produces the identity rotation.
pub fn rotation_matrix(axis: &Vector3<f64>, theta: f64) -> Matrix3<f64> {
    let axis = normalize_vector(axis);
    matrix_exp3(&(skew_symmetric(&axis) * theta))
}

/// Convenience function for mapping rotation and translation components to a 4x4 matrix.
pub fn rotation_and_translation_to_matrix(r: &Matrix3<f64>, p: &Vector3<f64>) -> Matrix4<f64> {
    let mut out_mat = Matrix4::zeros();
    for i in 0..3 {
        for j in 0..3 {
            out_mat[(i, j)] = r[(i, j)];
        }
        out_mat[(i, 3)] = p[i];
    }
    out_mat[(3, 3)] = 1.0;
    return out_mat;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skew_symmetric_cross_product() {
        let omega = Vector3::new(1.0, 2.0, 3.0);
        let x = Vector3::new(-0.5, 4.0, 0.25);
        let res = skew_symmetric(&omega) * x;
        let expected = omega.cross(&x);
        assert!((res - expected).norm() < 1e-12);
    }

    #[test]
    fn test_unskew_round_trip() {
        let omega = Vector3::new(0.3, -0.2, 0.9);
        assert_eq!(unskew(&skew_symmetric(&omega)), omega);
    }

    #[test]
    fn test_matrix_exp3_zero_is_identity() {
        assert_eq!(matrix_exp3(&Matrix3::zeros()), Matrix3::identity());
    }

    #[test]
    fn test_matrix_exp3_known_value() {
        // Example from the Modern Robotics reference.
        let so3mat = Matrix3::new(0.0, -3.0, 2.0,
                                  3.0, 0.0, -1.0,
                                  -2.0, 1.0, 0.0);
        let r = matrix_exp3(&so3mat);
        let expected = Matrix3::new(-0.69492056, 0.71352099, 0.08929286,
                                    -0.19200697, -0.30378504, 0.93319235,
                                    0.69297817, 0.6313497, 0.34810748);
        assert!((r - expected).norm() < 1e-7);
    }

    #[test]
    fn test_matrix_log3_exp3_round_trip() {
        let omega = Vector3::new(0.1, 0.8, -0.4);
        let so3mat = skew_symmetric(&omega);
        let r = matrix_exp3(&so3mat);
        let log_r = matrix_log3(&r);
        assert!((log_r - so3mat).norm() < 1e-10);
    }

    #[test]
    fn test_matrix_log3_identity_is_zero() {
        assert_eq!(matrix_log3(&Matrix3::identity()), Matrix3::zeros());
    }

    #[test]
    fn test_matrix_exp6_known_value() {
        let se3mat = Matrix4::new(0.0, 0.0, 0.0, 0.0,
                                  0.0, 0.0, -1.57079632, 2.35619449,
                                  0.0, 1.57079632, 0.0, 2.35619449,
                                  0.0, 0.0, 0.0, 0.0);
        let t = matrix_exp6(&se3mat);
        let expected = Matrix4::new(1.0, 0.0, 0.0, 0.0,
                                    0.0, 0.0, -1.0, 0.0,
                                    0.0, 1.0, 0.0, 3.0,
                                    0.0, 0.0, 0.0, 1.0);
        assert!((t - expected).norm() < 1e-7);
    }

    #[test]
    fn test_matrix_exp6_pure_translation() {
        let twist = Vector6::new(0.0, 0.0, 0.0, 1.0, -2.0, 0.5);
        let t = matrix_exp6(&twist_to_se3_matrix(&twist));
        assert_eq!(t[(0, 3)], 1.0);
        assert_eq!(t[(1, 3)], -2.0);
        assert_eq!(t[(2, 3)], 0.5);
        assert_eq!(t[(0, 0)], 1.0);
    }

    #[test]
    fn test_matrix_log6_known_value() {
        let t = Matrix4::new(1.0, 0.0, 0.0, 0.0,
                             0.0, 0.0, -1.0, 0.0,
                             0.0, 1.0, 0.0, 3.0,
                             0.0, 0.0, 0.0, 1.0);
        let log_t = matrix_log6(&t);
        let expected = Matrix4::new(0.0, 0.0, 0.0, 0.0,
                                    0.0, 0.0, -1.57079633, 2.35619449,
                                    0.0, 1.57079633, 0.0, 2.35619449,
                                    0.0, 0.0, 0.0, 0.0);
        assert!((log_t - expected).norm() < 1e-7);
    }

    #[test]
    fn test_exp6_log6_round_trip() {
        let twist = Vector6::new(0.2, -0.1, 0.3, 1.0, 0.5, -0.25);
        let t = matrix_exp6(&twist_to_se3_matrix(&twist));
        let recovered = se3_matrix_to_twist(&matrix_log6(&t));
        assert!((recovered - twist).norm() < 1e-10);
    }

    #[test]
    fn test_exponential_map_zero_theta_is_identity() {
        let screw = Vector6::new(0.0, 0.0, 1.0, 0.0, -1.0, 0.0);
        assert_eq!(exponential_map(&screw, 0.0), Matrix4::identity());
    }

    #[test]
    fn test_exponential_map_unnormalized_omega() {
        // Scaling omega by c while dividing theta by c leaves the transform unchanged.
        let screw = Vector6::new(0.0, 0.0, 1.0, 0.0, -1.0, 0.0);
        let scaled = Vector6::new(0.0, 0.0, 2.0, 0.0, -2.0, 0.0);
        let a = exponential_map(&screw, 0.7);
        let b = exponential_map(&scaled, 0.35);
        assert!((a - b).norm() < 1e-12);
    }

    #[test]
    fn test_rotation_matrix_about_z() {
        let r = rotation_matrix(&Vector3::new(0.0, 0.0, 2.0), std::f64::consts::FRAC_PI_2);
        let expected = Matrix3::new(0.0, -1.0, 0.0,
                                    1.0, 0.0, 0.0,
                                    0.0, 0.0, 1.0);
        assert!((r - expected).norm() < 1e-12);
    }

    #[test]
    fn test_rotation_matrix_zero_axis_is_identity() {
        let r = rotation_matrix(&Vector3::zeros(), 1.5);
        assert_eq!(r, Matrix3::identity());
    }

    #[test]
    fn test_normalize_vector_zero_passthrough() {
        assert_eq!(normalize_vector(&Vector3::zeros()), Vector3::zeros());
    }
}
