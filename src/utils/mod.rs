pub mod utils_console;
pub mod utils_errors;
pub mod utils_nalgebra;
pub mod utils_sampling;
pub mod utils_se3;
pub mod utils_traits;
