pub mod lie_algebra;
pub mod homogeneous_matrix;
pub mod screw_axis;
pub mod twist;
