use std::fmt::Debug;
use nalgebra::{DMatrix, DVector, Matrix6, Scalar, Vector6};

pub struct NalgebraConversions;
impl NalgebraConversions {
    pub fn dvector_to_vec<T>(d: &DVector<T>) -> Vec<T> where T: Copy + Clone + PartialEq + Scalar + Debug + num_traits::identities::Zero {
        let mut v = vec![];
        for dd in d {
            v.push(*dd);
        }
        return v;
    }

    pub fn vec_to_dvector<T>(v: &Vec<T>) -> DVector<T> where T: Copy + Clone + PartialEq + Scalar + Debug + num_traits::identities::Zero {
        let mut d = DVector::zeros(v.len());
        for (i, vv) in v.iter().enumerate() {
            d[i] = *vv;
        }
        return d;
    }

    pub fn vector6_to_dvector(v: &Vector6<f64>) -> DVector<f64> {
        let mut d = DVector::zeros(6);
        for i in 0..6 {
            d[i] = v[i];
        }
        return d;
    }

    pub fn matrix6_to_dmatrix(m: &Matrix6<f64>) -> DMatrix<f64> {
        let mut d = DMatrix::zeros(6, 6);
        for i in 0..6 {
            for j in 0..6 {
                d[(i, j)] = m[(i, j)];
            }
        }
        return d;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_dvector_round_trip() {
        let v = vec![1.0, 2.0, 3.0];
        let d = NalgebraConversions::vec_to_dvector(&v);
        assert_eq!(d.len(), 3);
        assert_eq!(NalgebraConversions::dvector_to_vec(&d), v);
    }

    #[test]
    fn test_vector6_to_dvector() {
        let v = Vector6::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let d = NalgebraConversions::vector6_to_dvector(&v);
        assert_eq!(d.len(), 6);
        assert_eq!(d[5], 6.0);
    }
}
