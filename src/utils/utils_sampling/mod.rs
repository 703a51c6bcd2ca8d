use rand::Rng;

pub struct SimpleSamplers;
impl SimpleSamplers {
    pub fn uniform_samples(bounds: &Vec<(f64, f64)>) -> Vec<f64> {
        let mut out_vec = vec![];
        let mut rng = rand::thread_rng();
        for b in bounds {
            if b.0 == b.1 {
                out_vec.push(b.0);
            } else {
                out_vec.push(rng.gen_range(b.0..b.1));
            }
        }
        out_vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_samples_within_bounds() {
        let bounds = vec![(-1.0, 1.0), (0.0, 0.0), (2.0, 3.0)];
        for _ in 0..10 {
            let s = SimpleSamplers::uniform_samples(&bounds);
            assert_eq!(s.len(), 3);
            assert!(s[0] >= -1.0 && s[0] < 1.0);
            assert_eq!(s[1], 0.0);
            assert!(s[2] >= 2.0 && s[2] < 3.0);
        }
    }
}
