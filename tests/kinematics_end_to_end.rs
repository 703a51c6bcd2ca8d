extern crate screwkin;

use nalgebra::{DVector, Matrix3, Vector3};
use screwkin::inverse_kinematics::InverseKinematicsSolver;
use screwkin::robot_modules::kinematics_module::KinematicsModule;
use screwkin::robot_modules::manipulator_module::ManipulatorModule;
use screwkin::utils::utils_errors::ScrewKinError;
use screwkin::utils::utils_se3::homogeneous_matrix::HomogeneousMatrix;
use screwkin::utils::utils_se3::lie_algebra::se3_matrix_to_twist;
use std::f64::consts::FRAC_PI_2;

fn planar_two_joint_kinematics() -> KinematicsModule {
    KinematicsModule::new(ManipulatorModule::new_planar_two_joint_example())
}

#[test]
fn test_fk_returns_valid_rigid_transforms() {
    let kinematics_module = planar_two_joint_kinematics();
    let joint_states = vec![
        vec![0.0, 0.0],
        vec![0.5, -0.25],
        vec![-2.9, 1.7],
        vec![FRAC_PI_2, FRAC_PI_2],
    ];
    for joint_state in joint_states {
        let fk_res = kinematics_module.compute_fk(&DVector::from_vec(joint_state)).expect("error");
        let pose = fk_res.end_effector_pose();
        let r = pose.rotation();
        assert!((r * r.transpose() - Matrix3::identity()).norm() < 1e-10);
        assert!((r.determinant() - 1.0).abs() < 1e-10);
        let m = pose.matrix();
        assert_eq!(m[(3, 0)], 0.0);
        assert_eq!(m[(3, 1)], 0.0);
        assert_eq!(m[(3, 2)], 0.0);
        assert_eq!(m[(3, 3)], 1.0);
    }
}

#[test]
fn test_fk_zero_joint_state_equals_home_configuration_exactly() {
    let kinematics_module = planar_two_joint_kinematics();
    let fk_res = kinematics_module.compute_fk(&DVector::zeros(2)).expect("error");
    assert_eq!(fk_res.end_effector_pose(), kinematics_module.manipulator_module().home_configuration());
}

#[test]
fn test_fk_quarter_turn_moves_end_effector() {
    // forwardKinematics(M, S, [pi/2, 0]) rotates the end effector to approximately (0, 2, 0).
    let kinematics_module = planar_two_joint_kinematics();
    let fk_res = kinematics_module.compute_fk(&DVector::from_vec(vec![FRAC_PI_2, 0.0])).expect("error");
    let translation = fk_res.end_effector_pose().translation();
    assert!((translation - Vector3::new(0.0, 2.0, 0.0)).norm() < 1e-10);
}

#[test]
fn test_ik_converges_within_basin_of_attraction() {
    let solver = InverseKinematicsSolver::new_default(ManipulatorModule::new_planar_two_joint_example());
    let q_true = DVector::from_vec(vec![0.9, -1.1]);
    let t_goal = solver.kinematics_module().compute_fk(&q_true).expect("error").end_effector_pose().clone();

    let solution = solver.solve(&t_goal, &DVector::from_vec(vec![0.6, -0.8])).expect("error");

    // The converged joint state satisfies || log(inverse(FK(q)) * T_goal) || < threshold.
    let t_solved = solver.kinematics_module().compute_fk(solution.joint_state()).expect("error").end_effector_pose().clone();
    let residual = se3_matrix_to_twist(&t_solved.displacement(&t_goal).matrix_logarithm());
    assert!(residual.norm() < 1e-3);
}

#[test]
fn test_ik_round_trip_converges_without_updates() {
    let solver = InverseKinematicsSolver::new_default(ManipulatorModule::new_planar_two_joint_example());
    let q_true = DVector::from_vec(vec![-0.35, 0.6]);
    let t_goal = solver.kinematics_module().compute_fk(&q_true).expect("error").end_effector_pose().clone();
    let solution = solver.solve(&t_goal, &q_true).expect("error");
    assert_eq!(solution.num_iterations(), 0);
}

#[test]
fn test_ik_unreachable_target_reports_convergence_error() {
    let solver = InverseKinematicsSolver::new_default(ManipulatorModule::new_planar_two_joint_example());
    let t_goal = HomogeneousMatrix::new_from_translation(10.0, 0.0, 0.0);
    let res = solver.solve(&t_goal, &DVector::from_vec(vec![0.1, 0.1]));
    match res {
        Err(ScrewKinError::ConvergenceError { message, last_joint_state, error_norm }) => {
            assert_eq!(message, "inverse kinematics did not converge");
            assert_eq!(last_joint_state.len(), 2);
            assert!(error_norm.is_finite());
        }
        _ => panic!("expected a ConvergenceError"),
    }
}

#[test]
fn test_ik_on_three_joint_spatial_arm() {
    // A three-joint arm with an out-of-plane elbow: two revolute joints about z and a
    // prismatic joint along z.
    let mut manipulator_module = ManipulatorModule::new_empty(HomogeneousMatrix::new_from_translation(2.0, 0.0, 0.0));
    manipulator_module.add_revolute_joint(&Vector3::new(0.0, 0.0, 1.0), &Vector3::zeros());
    manipulator_module.add_revolute_joint(&Vector3::new(0.0, 0.0, 1.0), &Vector3::new(1.0, 0.0, 0.0));
    manipulator_module.add_prismatic_joint(&Vector3::new(0.0, 0.0, 1.0));

    let solver = InverseKinematicsSolver::new_default(manipulator_module);
    let q_true = DVector::from_vec(vec![0.5, 0.3, 0.4]);
    let t_goal = solver.kinematics_module().compute_fk(&q_true).expect("error").end_effector_pose().clone();

    let solution = solver.solve(&t_goal, &DVector::from_vec(vec![0.4, 0.2, 0.2])).expect("error");
    let t_solved = solver.kinematics_module().compute_fk(solution.joint_state()).expect("error").end_effector_pose().clone();
    assert!((t_solved.translation() - t_goal.translation()).norm() < 1e-2);
}
