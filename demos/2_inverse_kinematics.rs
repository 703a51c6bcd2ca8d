extern crate screwkin;

use nalgebra::DVector;
use screwkin::inverse_kinematics::{IKParameters, InverseKinematicsSolver};
use screwkin::robot_modules::manipulator_module::ManipulatorModule;

fn main() {
    // Create a solver over the planar two-joint example manipulator with the default
    // parameters (threshold 1e-3 on the error twist norm, at most 100 iterations).
    let solver = InverseKinematicsSolver::new_default(ManipulatorModule::new_planar_two_joint_example());

    // Build a reachable goal pose by running forward kinematics at a known joint state.
    let q_true = DVector::from_vec(vec![0.7, -0.4]);
    let t_goal = solver.kinematics_module().compute_fk(&q_true).expect("error").end_effector_pose().clone();

    // Solve from a nearby initial guess.
    let solution = solver.solve(&t_goal, &DVector::from_vec(vec![0.5, -0.2])).expect("error");

    // Print summary of the solution.
    solution.print_summary();

    println!("////////////////////////////////////////////////////////////////////////////////////");

    // Tighter parameters are plain configuration.
    let solver = InverseKinematicsSolver::new(ManipulatorModule::new_planar_two_joint_example(), IKParameters { threshold: 1e-8, max_iterations: 200 });

    // A bad initial guess may fail; `solve_with_random_restarts` resamples a fresh
    // initial guess within the default joint bounds after each failed attempt.
    let solution = solver.solve_with_random_restarts(&t_goal, Some(&DVector::from_vec(vec![3.0, -3.0])), 10).expect("error");

    solution.print_summary();
}
