pub mod manipulator_module;
pub mod kinematics_module;
pub mod velocity_module;
