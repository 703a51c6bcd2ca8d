use nalgebra::{DMatrix, DVector};
use serde::{Serialize, Deserialize};
use crate::robot_modules::manipulator_module::ManipulatorModule;
use crate::utils::utils_console::{screwkin_print, PrintColor, PrintMode};
use crate::utils::utils_errors::ScrewKinError;
use crate::utils::utils_nalgebra::conversions::NalgebraConversions;
use crate::utils::utils_se3::homogeneous_matrix::HomogeneousMatrix;
use crate::utils::utils_se3::screw_axis::JointType;
use crate::utils::utils_se3::twist::TwistFrame;

/// The `KinematicsModule` performs operations related to a manipulator's kinematics.
/// One of the main subroutines afforded by this module is forward kinematics, which
/// takes as input a joint state and outputs the SE(3) pose of the end effector via the
/// product of exponentials formula T(q) = exp([S1]q1) * ... * exp([Sn]qn) * M.  It also
/// builds the space-frame and body-frame Jacobians at a given joint state.
///
/// # Example
/// ```
/// use nalgebra::DVector;
/// use screwkin::robot_modules::kinematics_module::KinematicsModule;
/// use screwkin::robot_modules::manipulator_module::ManipulatorModule;
///
/// let kinematics_module = KinematicsModule::new(ManipulatorModule::new_planar_two_joint_example());
///
/// // At the all-zero joint state, forward kinematics returns exactly the home configuration.
/// let fk_res = kinematics_module.compute_fk(&DVector::zeros(2)).expect("error");
/// assert_eq!(fk_res.end_effector_pose().translation()[0], 2.0);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KinematicsModule {
    manipulator_module: ManipulatorModule
}
impl KinematicsModule {
    pub fn new(manipulator_module: ManipulatorModule) -> Self {
        Self {
            manipulator_module
        }
    }
    /// Computes forward kinematics at the given joint state.  The accumulator starts at
    /// the identity, right-multiplies each joint's exponential map base-to-tip, and
    /// finally right-multiplies the home configuration.  The input joint state is never
    /// mutated.  Fails with `DimensionMismatch` when the joint-state length does not
    /// match the manipulator's number of joints.
    pub fn compute_fk(&self, joint_state: &DVector<f64>) -> Result<FKResult, ScrewKinError> {
        let screw_axes = self.manipulator_module.screw_axes();
        ScrewKinError::new_check_for_dimension_mismatch_error("compute_fk", screw_axes.len(), joint_state.len(), file!(), line!())?;

        let mut joint_entries = vec![];
        let mut out_pose = HomogeneousMatrix::new_identity();
        for (i, screw_axis) in screw_axes.iter().enumerate() {
            out_pose = out_pose.multiply(&screw_axis.exponential_map(joint_state[i]));
            joint_entries.push(FKResultJointEntry {
                joint_idx: i,
                joint_type: screw_axis.joint_type(),
                joint_value: joint_state[i],
                pose: out_pose.clone()
            });
        }
        out_pose = out_pose.multiply(self.manipulator_module.home_configuration());

        return Ok(FKResult {
            joint_entries,
            end_effector_pose: out_pose
        });
    }
    /// Computes the 6 x n space Jacobian at the given joint state.  Column i is the
    /// screw axis of joint i transformed by the adjoint of the partial product of the
    /// exponential maps of joints 1..i-1 (excluding joint i itself), all expressed in
    /// the fixed space frame.
    pub fn compute_space_jacobian(&self, joint_state: &DVector<f64>) -> Result<Jacobian, ScrewKinError> {
        let screw_axes = self.manipulator_module.screw_axes();
        ScrewKinError::new_check_for_dimension_mismatch_error("compute_space_jacobian", screw_axes.len(), joint_state.len(), file!(), line!())?;

        let num_joints = screw_axes.len();
        let mut jacobian = DMatrix::zeros(6, num_joints);
        let mut partial_product = HomogeneousMatrix::new_identity();

        for (i, screw_axis) in screw_axes.iter().enumerate() {
            let column = partial_product.adjoint() * screw_axis.screw();
            for row in 0..6 {
                jacobian[(row, i)] = column[row];
            }
            partial_product = partial_product.multiply(&screw_axis.exponential_map(joint_state[i]));
        }

        return Ok(Jacobian::new(jacobian, TwistFrame::Space));
    }
    /// Computes the 6 x n body Jacobian at the given joint state: the space Jacobian
    /// premultiplied by the inverse adjoint of the current end-effector pose.
    pub fn compute_body_jacobian(&self, joint_state: &DVector<f64>) -> Result<Jacobian, ScrewKinError> {
        let space_jacobian = self.compute_space_jacobian(joint_state)?;
        let fk_res = self.compute_fk(joint_state)?;
        return Ok(space_jacobian.transform(&fk_res.end_effector_pose().inverse()));
    }
    pub fn manipulator_module(&self) -> &ManipulatorModule {
        &self.manipulator_module
    }
}

/// The output of a forward kinematics computation.  `joint_entries` holds the
/// accumulated partial product through each joint; `end_effector_pose` is the full
/// product including the home configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FKResult {
    joint_entries: Vec<FKResultJointEntry>,
    end_effector_pose: HomogeneousMatrix
}
impl FKResult {
    pub fn joint_entries(&self) -> &Vec<FKResultJointEntry> {
        &self.joint_entries
    }
    pub fn end_effector_pose(&self) -> &HomogeneousMatrix {
        &self.end_effector_pose
    }
    /// Prints a summary of the forward kinematics result.
    pub fn print_summary(&self) {
        for e in self.joint_entries() {
            screwkin_print(&format!("Joint {} ({:?}, value {:.4}) ---> ", e.joint_idx, e.joint_type, e.joint_value), PrintMode::Println, PrintColor::Blue, true);
            screwkin_print(&format!("   > Accumulated pose translation: {:?}", e.pose.translation()), PrintMode::Println, PrintColor::None, false);
        }
        screwkin_print("End effector ---> ", PrintMode::Println, PrintColor::Cyan, true);
        screwkin_print(&format!("   > Pose: {}", self.end_effector_pose.matrix()), PrintMode::Println, PrintColor::None, false);
    }
}

/// An `FKResultJointEntry` specifies information about one particular joint in the
/// forward kinematics process: the joint index, its type and value, and the partial
/// product of exponential maps up to and including this joint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FKResultJointEntry {
    joint_idx: usize,
    joint_type: JointType,
    joint_value: f64,
    pose: HomogeneousMatrix
}
impl FKResultJointEntry {
    pub fn joint_idx(&self) -> usize {
        self.joint_idx
    }
    pub fn joint_type(&self) -> JointType {
        self.joint_type
    }
    pub fn joint_value(&self) -> f64 {
        self.joint_value
    }
    pub fn pose(&self) -> &HomogeneousMatrix {
        &self.pose
    }
}

/// A 6 x n Jacobian matrix mapping joint velocities to an end-effector twist.  The
/// frame the twist is expressed in is part of the Jacobian's identity, not an
/// incidental detail, so it is carried alongside the matrix.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Jacobian {
    matrix: DMatrix<f64>,
    frame: TwistFrame
}
impl Jacobian {
    pub fn new(matrix: DMatrix<f64>, frame: TwistFrame) -> Self {
        Self {
            matrix,
            frame
        }
    }
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }
    pub fn frame(&self) -> TwistFrame {
        self.frame
    }
    pub fn num_joints(&self) -> usize {
        self.matrix.ncols()
    }
    /// Premultiplies this Jacobian by the adjoint of the given transform, mapping its
    /// columns into the other frame.  A space Jacobian transformed by the inverse of
    /// the current end-effector pose becomes the body Jacobian, and vice versa.
    pub fn transform(&self, t: &HomogeneousMatrix) -> Jacobian {
        let adj = NalgebraConversions::matrix6_to_dmatrix(&t.adjoint());
        let out_frame = match self.frame {
            TwistFrame::Space => { TwistFrame::Body }
            TwistFrame::Body => { TwistFrame::Space }
        };
        return Jacobian::new(adj * &self.matrix, out_frame);
    }
}
