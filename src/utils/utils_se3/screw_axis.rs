use nalgebra::{Vector3, Vector6};
use serde::{Serialize, Deserialize};
use crate::utils::utils_errors::ScrewKinError;
use crate::utils::utils_se3::homogeneous_matrix::HomogeneousMatrix;
use crate::utils::utils_se3::lie_algebra::exponential_map;
use crate::utils::utils_traits::ToAndFromRonString;

/// The primitive type of a manipulator joint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JointType {
    Revolute,
    Prismatic
}
impl JointType {
    /// Parses a joint type from its string tag ("Revolute" or "Prismatic").  An
    /// unrecognized tag fails with an `InvalidJointType` error.
    pub fn new_from_tag(tag: &str) -> Result<Self, ScrewKinError> {
        let load = Self::load_from_ron_string(tag);
        return match load {
            Ok(load) => { Ok(load) }
            Err(_) => { Err(ScrewKinError::new_invalid_joint_type_error(tag, file!(), line!())) }
        }
    }
}

/// A screw axis in se(3) coordinates: a 6-vector (omega, v) in the space frame,
/// defined once per joint at the home configuration and immutable thereafter.
///
/// For a revolute joint, omega is the unit angular-velocity direction of the axis and
/// v = a x omega for a point a on the axis.  For a prismatic joint, omega is zero and
/// v is the unit translation direction.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use screwkin::utils::utils_se3::screw_axis::ScrewAxis;
///
/// // A revolute joint about the z axis passing through (1, 0, 0).
/// let s = ScrewAxis::new_revolute(&Vector3::new(0.0, 0.0, 1.0), &Vector3::new(1.0, 0.0, 0.0));
/// assert_eq!(s.screw().as_slice(), &[0.0, 0.0, 1.0, 0.0, -1.0, 0.0]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrewAxis {
    screw: Vector6<f64>,
    joint_type: JointType
}
impl ScrewAxis {
    /// A screw axis for a revolute joint with the given unit rotation axis passing
    /// through the point `a`.
    pub fn new_revolute(axis: &Vector3<f64>, a: &Vector3<f64>) -> Self {
        let v = a.cross(axis);
        Self {
            screw: Vector6::new(axis[0], axis[1], axis[2], v[0], v[1], v[2]),
            joint_type: JointType::Revolute
        }
    }
    /// A screw axis for a prismatic joint with the given unit translation direction.
    pub fn new_prismatic(direction: &Vector3<f64>) -> Self {
        Self {
            screw: Vector6::new(0.0, 0.0, 0.0, direction[0], direction[1], direction[2]),
            joint_type: JointType::Prismatic
        }
    }
    /// Builds a screw axis from the given axis-or-direction vector, a point on the joint
    /// axis (ignored for prismatic joints), and a joint type.
    pub fn new(axis_or_direction: &Vector3<f64>, a: &Vector3<f64>, joint_type: JointType) -> Self {
        return match joint_type {
            JointType::Revolute => { Self::new_revolute(axis_or_direction, a) }
            JointType::Prismatic => { Self::new_prismatic(axis_or_direction) }
        }
    }
    /// Same as `new`, but dispatches on a joint-type string tag.  Fails with
    /// `InvalidJointType` when the tag is neither "Revolute" nor "Prismatic".
    pub fn new_from_joint_type_tag(axis_or_direction: &Vector3<f64>, a: &Vector3<f64>, tag: &str) -> Result<Self, ScrewKinError> {
        let joint_type = JointType::new_from_tag(tag)?;
        return Ok(Self::new(axis_or_direction, a, joint_type));
    }
    pub fn screw(&self) -> &Vector6<f64> {
        &self.screw
    }
    pub fn joint_type(&self) -> JointType {
        self.joint_type
    }
    /// The rigid transform exp([S] * theta) contributed by this joint at joint value theta.
    pub fn exponential_map(&self, theta: f64) -> HomogeneousMatrix {
        return HomogeneousMatrix::new(exponential_map(&self.screw, theta));
    }
}
