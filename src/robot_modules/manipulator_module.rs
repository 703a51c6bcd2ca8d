use nalgebra::{DVector, Vector3};
use serde::{Serialize, Deserialize};
use crate::utils::utils_errors::ScrewKinError;
use crate::utils::utils_nalgebra::conversions::NalgebraConversions;
use crate::utils::utils_sampling::SimpleSamplers;
use crate::utils::utils_se3::homogeneous_matrix::HomogeneousMatrix;
use crate::utils::utils_se3::screw_axis::{JointType, ScrewAxis};

/// The `ManipulatorModule` is the problem-definition object for a serial manipulator
/// in the product of exponentials formulation: the home configuration M (the
/// end-effector pose at the all-zero joint state) together with one screw axis per
/// joint, ordered base-to-tip.  Both are created once per manipulator description and
/// are read-only for the lifetime of any forward or inverse kinematics call.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use screwkin::robot_modules::manipulator_module::ManipulatorModule;
/// use screwkin::utils::utils_se3::homogeneous_matrix::HomogeneousMatrix;
///
/// let mut manipulator_module = ManipulatorModule::new_empty(HomogeneousMatrix::new_from_translation(2.0, 0.0, 0.0));
/// manipulator_module.add_revolute_joint(&Vector3::new(0.0, 0.0, 1.0), &Vector3::zeros());
/// manipulator_module.add_revolute_joint(&Vector3::new(0.0, 0.0, 1.0), &Vector3::new(1.0, 0.0, 0.0));
///
/// assert_eq!(manipulator_module.num_joints(), 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ManipulatorModule {
    home_configuration: HomogeneousMatrix,
    screw_axes: Vec<ScrewAxis>
}
impl ManipulatorModule {
    pub fn new(home_configuration: HomogeneousMatrix, screw_axes: Vec<ScrewAxis>) -> Self {
        Self {
            home_configuration,
            screw_axes
        }
    }
    pub fn new_empty(home_configuration: HomogeneousMatrix) -> Self {
        return Self::new(home_configuration, vec![]);
    }
    /// The planar two-joint manipulator used throughout the documentation: two revolute
    /// joints about z at the origin and at (1,0,0), with the end effector at (2,0,0) in
    /// the home configuration.
    pub fn new_planar_two_joint_example() -> Self {
        let mut out_self = Self::new_empty(HomogeneousMatrix::new_from_translation(2.0, 0.0, 0.0));
        out_self.add_revolute_joint(&Vector3::new(0.0, 0.0, 1.0), &Vector3::zeros());
        out_self.add_revolute_joint(&Vector3::new(0.0, 0.0, 1.0), &Vector3::new(1.0, 0.0, 0.0));
        out_self
    }
    /// Appends a revolute joint with the given unit rotation axis passing through point `a`.
    pub fn add_revolute_joint(&mut self, axis: &Vector3<f64>, a: &Vector3<f64>) {
        self.screw_axes.push(ScrewAxis::new_revolute(axis, a));
    }
    /// Appends a prismatic joint with the given unit translation direction.
    pub fn add_prismatic_joint(&mut self, direction: &Vector3<f64>) {
        self.screw_axes.push(ScrewAxis::new_prismatic(direction));
    }
    pub fn num_joints(&self) -> usize {
        self.screw_axes.len()
    }
    pub fn home_configuration(&self) -> &HomogeneousMatrix {
        &self.home_configuration
    }
    pub fn screw_axes(&self) -> &Vec<ScrewAxis> {
        &self.screw_axes
    }
    /// Validates that the given joint values match this manipulator's number of joints
    /// and returns them as a joint state.
    pub fn spawn_joint_state(&self, joint_values: DVector<f64>) -> Result<DVector<f64>, ScrewKinError> {
        ScrewKinError::new_check_for_dimension_mismatch_error("spawn_joint_state", self.num_joints(), joint_values.len(), file!(), line!())?;
        return Ok(joint_values);
    }
    pub fn spawn_joint_state_from_vec(&self, joint_values: &Vec<f64>) -> Result<DVector<f64>, ScrewKinError> {
        return self.spawn_joint_state(NalgebraConversions::vec_to_dvector(joint_values));
    }
    pub fn spawn_zeros_joint_state(&self) -> DVector<f64> {
        DVector::zeros(self.num_joints())
    }
    /// Default per-joint sampling bounds: [-pi, pi] for revolute joints and [-1, 1]
    /// length units for prismatic joints.
    pub fn default_joint_bounds(&self) -> Vec<(f64, f64)> {
        let mut out_vec = vec![];
        for screw_axis in &self.screw_axes {
            match screw_axis.joint_type() {
                JointType::Revolute => { out_vec.push((-std::f64::consts::PI, std::f64::consts::PI)) }
                JointType::Prismatic => { out_vec.push((-1.0, 1.0)) }
            }
        }
        out_vec
    }
    /// Samples a joint state uniformly within the default joint bounds.
    pub fn sample_joint_state(&self) -> DVector<f64> {
        let samples = SimpleSamplers::uniform_samples(&self.default_joint_bounds());
        NalgebraConversions::vec_to_dvector(&samples)
    }
}
