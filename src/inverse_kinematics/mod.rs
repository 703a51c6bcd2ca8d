use nalgebra::{DVector, Vector6};
use serde::{Serialize, Deserialize};
use crate::robot_modules::kinematics_module::KinematicsModule;
use crate::robot_modules::manipulator_module::ManipulatorModule;
use crate::utils::utils_console::{screwkin_print, PrintColor, PrintMode};
use crate::utils::utils_errors::ScrewKinError;
use crate::utils::utils_nalgebra::conversions::NalgebraConversions;
use crate::utils::utils_se3::homogeneous_matrix::HomogeneousMatrix;
use crate::utils::utils_se3::lie_algebra::se3_matrix_to_twist;

/// Recognized configuration options for the Newton-Raphson inverse kinematics solver.
/// `threshold` is the convergence tolerance on the error twist norm; `max_iterations`
/// is the hard iteration cap.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IKParameters {
    pub threshold: f64,
    pub max_iterations: usize
}
impl Default for IKParameters {
    fn default() -> Self {
        Self {
            threshold: 1e-3,
            max_iterations: 100
        }
    }
}

/// The `InverseKinematicsSolver` solves for the joint values that place the end
/// effector at a target pose using a Newton-Raphson scheme in SE(3).  Each iteration
/// evaluates forward kinematics, measures the pose error as the matrix logarithm of
/// inverse(T_current) * T_goal (a body-frame error twist), and updates the joint
/// vector through the pseudoinverse of the body Jacobian.  Expressing both the error
/// and the update in the body frame keeps the Newton step a local linearization of
/// the error twist around the current pose.
///
/// # Example
/// ```
/// use nalgebra::DVector;
/// use screwkin::inverse_kinematics::InverseKinematicsSolver;
/// use screwkin::robot_modules::manipulator_module::ManipulatorModule;
/// use screwkin::utils::utils_se3::homogeneous_matrix::HomogeneousMatrix;
///
/// let solver = InverseKinematicsSolver::new_default(ManipulatorModule::new_planar_two_joint_example());
///
/// // Reach for a pose inside the workspace.
/// let t_goal = HomogeneousMatrix::new_from_translation(2.0, 0.0, 0.0);
/// let solution = solver.solve(&t_goal, &DVector::zeros(2)).expect("error");
/// assert!(solution.error_norm() < 1e-3);
/// ```
#[derive(Clone, Debug)]
pub struct InverseKinematicsSolver {
    kinematics_module: KinematicsModule,
    parameters: IKParameters
}
impl InverseKinematicsSolver {
    pub fn new(manipulator_module: ManipulatorModule, parameters: IKParameters) -> Self {
        Self {
            kinematics_module: KinematicsModule::new(manipulator_module),
            parameters
        }
    }
    pub fn new_default(manipulator_module: ManipulatorModule) -> Self {
        return Self::new(manipulator_module, IKParameters::default());
    }
    /// Runs the Newton-Raphson loop from the given initial guess.  The caller-supplied
    /// guess is never mutated; the solver iterates on an owned local accumulator.  On
    /// convergence, returns the joint state together with the number of Newton updates
    /// that were applied and the final error twist norm.  When the iteration budget is
    /// exhausted, fails with a `ConvergenceError` carrying the last iterate and its
    /// error norm for diagnostics.
    pub fn solve(&self, t_goal: &HomogeneousMatrix, q_initial: &DVector<f64>) -> Result<IKSolution, ScrewKinError> {
        let mut q = self.kinematics_module.manipulator_module().spawn_joint_state(q_initial.clone())?;

        let mut error_norm = f64::INFINITY;
        for itr in 0..self.parameters.max_iterations {
            let t_current = self.kinematics_module.compute_fk(&q)?.end_effector_pose().clone();

            // The goal expressed in the current end-effector's body frame.
            let t_error = t_current.displacement(t_goal);
            let error_twist: Vector6<f64> = se3_matrix_to_twist(&t_error.matrix_logarithm());
            error_norm = error_twist.norm();

            if error_norm < self.parameters.threshold {
                return Ok(IKSolution {
                    joint_state: q,
                    num_iterations: itr,
                    error_norm
                });
            }

            let space_jacobian = self.kinematics_module.compute_space_jacobian(&q)?;
            let body_jacobian = space_jacobian.transform(&t_current.inverse());

            let pseudoinverse = body_jacobian.matrix().clone().pseudo_inverse(crate::robot_modules::velocity_module::PSEUDOINVERSE_EPSILON)
                .map_err(|e| ScrewKinError::new_generic_error_str(e, file!(), line!()))?;
            q += pseudoinverse * NalgebraConversions::vector6_to_dvector(&error_twist);
        }

        return Err(ScrewKinError::new_convergence_error(q, error_norm));
    }
    /// Runs `solve` up to `max_num_tries` times, resampling a fresh random initial
    /// guess within the manipulator's default joint bounds after each failed attempt.
    /// The first attempt uses `q_initial` when one is given.  Returns the first
    /// converged solution, or the last attempt's `ConvergenceError`.
    pub fn solve_with_random_restarts(&self, t_goal: &HomogeneousMatrix, q_initial: Option<&DVector<f64>>, max_num_tries: usize) -> Result<IKSolution, ScrewKinError> {
        let mut last_error = ScrewKinError::new_convergence_error(self.kinematics_module.manipulator_module().spawn_zeros_joint_state(), f64::INFINITY);

        for curr_try_idx in 0..max_num_tries {
            let q_start = match q_initial {
                Some(q_initial) if curr_try_idx == 0 => { q_initial.clone() }
                _ => { self.kinematics_module.manipulator_module().sample_joint_state() }
            };

            match self.solve(t_goal, &q_start) {
                Ok(solution) => { return Ok(solution); }
                Err(e) => {
                    screwkin_print(&format!("inverse kinematics attempt {} did not converge.  Trying again with a resampled initial guess.", curr_try_idx), PrintMode::Println, PrintColor::Yellow, true);
                    last_error = e;
                }
            }
        }

        screwkin_print(&format!("could not find an inverse kinematics solution in the given number of tries ({}).", max_num_tries), PrintMode::Println, PrintColor::Yellow, true);
        return Err(last_error);
    }
    pub fn kinematics_module(&self) -> &KinematicsModule {
        &self.kinematics_module
    }
    pub fn parameters(&self) -> &IKParameters {
        &self.parameters
    }
}

/// The output of a converged inverse kinematics solve.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IKSolution {
    joint_state: DVector<f64>,
    num_iterations: usize,
    error_norm: f64
}
impl IKSolution {
    pub fn joint_state(&self) -> &DVector<f64> {
        &self.joint_state
    }
    /// The number of Newton updates applied before convergence.  A guess that already
    /// meets the threshold converges with zero updates.
    pub fn num_iterations(&self) -> usize {
        self.num_iterations
    }
    pub fn error_norm(&self) -> f64 {
        self.error_norm
    }
    /// Prints a summary of the inverse kinematics solution.
    pub fn print_summary(&self) {
        screwkin_print("IK solution ---> ", PrintMode::Println, PrintColor::Green, true);
        screwkin_print(&format!("   > Joint state: {:?}", NalgebraConversions::dvector_to_vec(&self.joint_state)), PrintMode::Println, PrintColor::None, false);
        screwkin_print(&format!("   > Newton updates: {:?}", self.num_iterations), PrintMode::Println, PrintColor::None, false);
        screwkin_print(&format!("   > Error twist norm: {:?}", self.error_norm), PrintMode::Println, PrintColor::None, false);
    }
}
