extern crate screwkin;

use nalgebra::{DVector, Vector3};
use screwkin::robot_modules::kinematics_module::KinematicsModule;
use screwkin::robot_modules::manipulator_module::ManipulatorModule;
use screwkin::utils::utils_se3::homogeneous_matrix::HomogeneousMatrix;

fn main() {
    // Describe a planar two-joint manipulator: two revolute joints about z at the
    // origin and at (1, 0, 0), with the end effector at (2, 0, 0) when all joint
    // values are zero.
    let mut manipulator_module = ManipulatorModule::new_empty(HomogeneousMatrix::new_from_translation(2.0, 0.0, 0.0));
    manipulator_module.add_revolute_joint(&Vector3::new(0.0, 0.0, 1.0), &Vector3::zeros());
    manipulator_module.add_revolute_joint(&Vector3::new(0.0, 0.0, 1.0), &Vector3::new(1.0, 0.0, 0.0));

    let kinematics_module = KinematicsModule::new(manipulator_module);

    // Compute forward kinematics at the all-zero joint state.  The result is an
    // `FKResult`; at zeros it reproduces the home configuration exactly.
    let fk_res = kinematics_module.compute_fk(&DVector::from_vec(vec![0.0, 0.0])).expect("error");

    // Print summary of the fk result.
    fk_res.print_summary();

    println!("////////////////////////////////////////////////////////////////////////////////////");

    // A quarter turn of the first joint swings the end effector to approximately (0, 2, 0).
    let fk_res = kinematics_module.compute_fk(&DVector::from_vec(vec![std::f64::consts::FRAC_PI_2, 0.0])).expect("error");

    fk_res.print_summary();

    println!("////////////////////////////////////////////////////////////////////////////////////");

    // Access the end-effector pose of the just computed fk result.
    let pose = fk_res.end_effector_pose();
    println!("{:?}", pose.translation());
}
