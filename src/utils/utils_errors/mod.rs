use nalgebra::DVector;
use thiserror::Error;

/// A common error type returned by functions throughout the toolbox.
#[derive(Clone, Debug, Error)]
pub enum ScrewKinError {
    #[error("{0}")]
    GenericError(String),
    #[error("{0}")]
    InvalidJointType(String),
    #[error("{0}")]
    DimensionMismatch(String),
    #[error("{0}")]
    InvalidShape(String),
    /// Returned when the inverse kinematics solver exhausts its iteration budget.
    /// Carries the last iterate and its error twist norm for diagnostics.
    #[error("{message}")]
    ConvergenceError {
        message: String,
        last_joint_state: DVector<f64>,
        error_norm: f64,
    },
}
impl ScrewKinError {
    pub fn new_generic_error_str(s: &str, file: &str, line: u32) -> Self {
        let s = format!("ERROR: {} -- File: {}, Line: {}", s, file, line);
        return Self::GenericError(s);
    }
    pub fn new_invalid_joint_type_error(given_tag: &str, file: &str, line: u32) -> Self {
        let s = format!("ERROR: Joint type {:?} is not recognized (expected Revolute or Prismatic) -- File: {}, Line: {}", given_tag, file, line);
        return Self::InvalidJointType(s);
    }
    pub fn new_dimension_mismatch_error(function_name: &str, expected: usize, given: usize, file: &str, line: u32) -> Self {
        let s = format!("ERROR: Dimension mismatch in function {}.  Expected length {:?} but was given length {:?} -- File: {}, Line: {}", function_name, expected, given, file, line);
        return Self::DimensionMismatch(s);
    }
    pub fn new_invalid_shape_error(message: &str, num_rows: usize, num_cols: usize, file: &str, line: u32) -> Self {
        let s = format!("ERROR: Invalid matrix shape {} x {}.  {} -- File: {}, Line: {}", num_rows, num_cols, message, file, line);
        return Self::InvalidShape(s);
    }
    pub fn new_convergence_error(last_joint_state: DVector<f64>, error_norm: f64) -> Self {
        return Self::ConvergenceError {
            message: "inverse kinematics did not converge".to_string(),
            last_joint_state,
            error_norm,
        };
    }
    /// Convenience check that returns a `DimensionMismatch` error when the two given
    /// lengths disagree.
    pub fn new_check_for_dimension_mismatch_error(function_name: &str, expected: usize, given: usize, file: &str, line: u32) -> Result<(), ScrewKinError> {
        if expected != given {
            return Err(Self::new_dimension_mismatch_error(function_name, expected, given, file, line));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_check() {
        assert!(ScrewKinError::new_check_for_dimension_mismatch_error("test", 3, 3, file!(), line!()).is_ok());
        let res = ScrewKinError::new_check_for_dimension_mismatch_error("test", 3, 2, file!(), line!());
        match res {
            Err(ScrewKinError::DimensionMismatch(s)) => assert!(s.contains("test")),
            _ => panic!("expected a DimensionMismatch error"),
        }
    }

    #[test]
    fn test_convergence_error_carries_diagnostics() {
        let e = ScrewKinError::new_convergence_error(DVector::from_vec(vec![0.1, 0.2]), 0.5);
        match e {
            ScrewKinError::ConvergenceError { message, last_joint_state, error_norm } => {
                assert_eq!(message, "inverse kinematics did not converge");
                assert_eq!(last_joint_state.len(), 2);
                assert_eq!(error_norm, 0.5);
            }
            _ => panic!("expected a ConvergenceError"),
        }
    }
}
