use nalgebra::Vector6;
use serde::{Serialize, Deserialize};

/// The reference frame a twist or Jacobian is expressed in.  Space and body twists
/// are not interchangeable without an adjoint transform, so the frame is part of a
/// value's identity rather than an incidental detail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TwistFrame {
    Space,
    Body
}

/// A 6-vector (angular part omega, linear part v) representing the instantaneous
/// velocity of a frame, together with the frame it is expressed in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Twist {
    vector: Vector6<f64>,
    frame: TwistFrame
}
impl Twist {
    pub fn new(vector: Vector6<f64>, frame: TwistFrame) -> Self {
        Self {
            vector,
            frame
        }
    }
    pub fn vector(&self) -> &Vector6<f64> {
        &self.vector
    }
    pub fn frame(&self) -> TwistFrame {
        self.frame
    }
    pub fn angular(&self) -> nalgebra::Vector3<f64> {
        nalgebra::Vector3::new(self.vector[0], self.vector[1], self.vector[2])
    }
    pub fn linear(&self) -> nalgebra::Vector3<f64> {
        nalgebra::Vector3::new(self.vector[3], self.vector[4], self.vector[5])
    }
    pub fn norm(&self) -> f64 {
        self.vector.norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twist_parts() {
        let t = Twist::new(Vector6::new(0.1, 0.2, 0.3, 1.0, 2.0, 3.0), TwistFrame::Space);
        assert_eq!(t.angular(), nalgebra::Vector3::new(0.1, 0.2, 0.3));
        assert_eq!(t.linear(), nalgebra::Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(t.frame(), TwistFrame::Space);
        assert!((t.norm() - 14.14_f64.sqrt()).abs() < 1e-12);
    }
}
