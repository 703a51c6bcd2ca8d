extern crate screwkin;

use nalgebra::{DMatrix, DVector};
use screwkin::robot_modules::kinematics_module::KinematicsModule;
use screwkin::robot_modules::manipulator_module::ManipulatorModule;
use screwkin::robot_modules::velocity_module::VelocityUtils;

fn main() {
    // Create the planar two-joint example manipulator.
    let kinematics_module = KinematicsModule::new(ManipulatorModule::new_planar_two_joint_example());

    // Spawn a joint state.
    let joint_state = kinematics_module.manipulator_module().spawn_joint_state(DVector::from_vec(vec![0.4, -0.8])).expect("error");

    // Computes the 6 x 2 space-frame Jacobian at the given joint state.  Column i is the
    // twist direction contributed by joint i, expressed in the fixed space frame.
    let space_jacobian = kinematics_module.compute_space_jacobian(&joint_state).expect("error");

    println!("{}", space_jacobian.matrix());

    println!("////////////////////////////////////////////////////////////////////////////////////");

    // The body-frame Jacobian is the space Jacobian premultiplied by the inverse adjoint
    // of the current end-effector pose.
    let body_jacobian = kinematics_module.compute_body_jacobian(&joint_state).expect("error");

    println!("{}", body_jacobian.matrix());

    println!("////////////////////////////////////////////////////////////////////////////////////");

    // Map joint velocities through the Jacobian to an end-effector twist, then recover
    // them with the Moore-Penrose pseudoinverse.
    let q_dot = DVector::from_vec(vec![0.5, 0.1]);
    let twist = VelocityUtils::calculate_twist(&space_jacobian, &q_dot).expect("error");
    println!("twist: {:?} in frame {:?}", twist.vector(), twist.frame());

    let recovered_q_dot = VelocityUtils::calculate_joint_velocities(&space_jacobian, &twist).expect("error");
    println!("recovered joint velocities: {}", recovered_q_dot);

    println!("////////////////////////////////////////////////////////////////////////////////////");

    // Analyze the Jacobian for rank and singularity.
    let analysis = VelocityUtils::analyze_jacobian(space_jacobian.matrix());
    analysis.print_summary();

    // The x-y positional block of the body-frame Jacobian drops to rank 1 when the arm
    // is fully stretched out: no joint velocity can move the end effector radially.
    let stretched_jacobian = kinematics_module.compute_body_jacobian(&DVector::from_vec(vec![0.3, 0.0])).expect("error");
    let positional_block = DMatrix::from_fn(2, 2, |i, j| stretched_jacobian.matrix()[(i + 3, j)]);
    let analysis = VelocityUtils::analyze_jacobian(&positional_block);
    analysis.print_summary();
}
