use nalgebra::{DMatrix, DVector, Vector6};
use serde::{Serialize, Deserialize};
use crate::robot_modules::kinematics_module::Jacobian;
use crate::utils::utils_console::{screwkin_print, PrintColor, PrintMode};
use crate::utils::utils_errors::ScrewKinError;
use crate::utils::utils_se3::twist::Twist;

/// Singular values below this threshold are dropped when forming the Moore-Penrose
/// pseudoinverse and when computing the rank of a Jacobian.
pub const PSEUDOINVERSE_EPSILON: f64 = 1e-10;

/// Velocity-level utilities relating joint velocities and end-effector twists through
/// a Jacobian, together with Jacobian rank and singularity analysis.
pub struct VelocityUtils;
impl VelocityUtils {
    /// The end-effector twist produced by the given joint velocities: V = J * q_dot,
    /// expressed in the Jacobian's frame.  Fails with `InvalidShape` when the Jacobian
    /// does not have exactly six rows, and with `DimensionMismatch` when its column
    /// count does not match the joint-velocity length.
    pub fn calculate_twist(jacobian: &Jacobian, q_dot: &DVector<f64>) -> Result<Twist, ScrewKinError> {
        Self::check_for_six_rows(jacobian)?;
        ScrewKinError::new_check_for_dimension_mismatch_error("calculate_twist", jacobian.matrix().ncols(), q_dot.len(), file!(), line!())?;
        let v = jacobian.matrix() * q_dot;
        return Ok(Twist::new(Vector6::new(v[0], v[1], v[2], v[3], v[4], v[5]), jacobian.frame()));
    }
    /// The joint velocities that produce the given end-effector twist: q_dot =
    /// pinv(J) * V, the minimum-norm least-squares solution.  The twist must be
    /// expressed in the Jacobian's frame.  Fails with `InvalidShape` when the Jacobian
    /// does not have exactly six rows or has more columns than rows; this routine
    /// requires an equal- or over-determined system.
    pub fn calculate_joint_velocities(jacobian: &Jacobian, twist: &Twist) -> Result<DVector<f64>, ScrewKinError> {
        Self::check_for_six_rows(jacobian)?;
        let num_rows = jacobian.matrix().nrows();
        let num_cols = jacobian.matrix().ncols();
        if num_rows < num_cols {
            return Err(ScrewKinError::new_invalid_shape_error("The Jacobian matrix must have more rows than columns or be square.", num_rows, num_cols, file!(), line!()));
        }

        let pseudoinverse = jacobian.matrix().clone().pseudo_inverse(PSEUDOINVERSE_EPSILON)
            .map_err(|e| ScrewKinError::new_generic_error_str(e, file!(), line!()))?;

        let mut twist_dvector = DVector::zeros(6);
        for i in 0..6 {
            twist_dvector[i] = twist.vector()[i];
        }

        return Ok(pseudoinverse * twist_dvector);
    }
    /// A twist has six coordinates, so the Jacobians accepted by `calculate_twist` and
    /// `calculate_joint_velocities` must have exactly six rows.
    fn check_for_six_rows(jacobian: &Jacobian) -> Result<(), ScrewKinError> {
        let num_rows = jacobian.matrix().nrows();
        if num_rows != 6 {
            return Err(ScrewKinError::new_invalid_shape_error("A twist Jacobian must have exactly six rows.", num_rows, jacobian.matrix().ncols(), file!(), line!()));
        }
        Ok(())
    }
    /// Analyzes the given Jacobian matrix: determinant (square matrices only), rank,
    /// and singularity status.  A square Jacobian is reported singular when its
    /// determinant is exactly zero; this exact comparison mirrors the reference
    /// semantics and is numerically fragile on real inputs.  A non-square Jacobian is
    /// singular when its rank is below min(rows, cols).
    pub fn analyze_jacobian(j: &DMatrix<f64>) -> JacobianAnalysis {
        let num_rows = j.nrows();
        let num_cols = j.ncols();

        let determinant = if num_rows == num_cols {
            Some(j.determinant())
        } else {
            None
        };

        let rank = j.rank(PSEUDOINVERSE_EPSILON);

        let is_singular = match determinant {
            Some(determinant) => { determinant == 0.0 }
            None => { rank < num_rows.min(num_cols) }
        };

        return JacobianAnalysis {
            determinant,
            rank,
            is_singular
        };
    }
}

/// The output of a Jacobian analysis.  `determinant` is None for non-square Jacobians.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JacobianAnalysis {
    determinant: Option<f64>,
    rank: usize,
    is_singular: bool
}
impl JacobianAnalysis {
    pub fn determinant(&self) -> Option<f64> {
        self.determinant
    }
    pub fn rank(&self) -> usize {
        self.rank
    }
    pub fn is_singular(&self) -> bool {
        self.is_singular
    }
    /// Prints a summary of the Jacobian analysis.
    pub fn print_summary(&self) {
        screwkin_print("Jacobian analysis ---> ", PrintMode::Println, PrintColor::Blue, true);
        screwkin_print(&format!("   > Determinant: {:?}", self.determinant), PrintMode::Println, PrintColor::None, false);
        screwkin_print(&format!("   > Rank: {:?}", self.rank), PrintMode::Println, PrintColor::None, false);
        let color = if self.is_singular { PrintColor::Yellow } else { PrintColor::Green };
        screwkin_print(&format!("   > Singular: {:?}", self.is_singular), PrintMode::Println, color, false);
    }
}
