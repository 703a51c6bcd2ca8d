
//! Screwkin is an easy to set up and easy to use kinematics toolbox for serial robotic
//! manipulators based on the product of exponentials formulation.  It provides forward
//! kinematics, space- and body-frame Jacobians, velocity-level twist utilities, and a
//! Newton-Raphson inverse kinematics solver operating in SE(3).  A manipulator is
//! described once by its home configuration and a list of screw axes; all subsequent
//! operations are stateless with respect to one another and safe to call from multiple
//! threads on disjoint inputs.

pub mod inverse_kinematics;
pub mod robot_modules;
pub mod utils;
