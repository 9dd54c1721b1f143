use nalgebra::DVector;

/// Capability contract of the function under integration: accepts an ordered
/// sequence of abscissas and returns an ordered sequence of heights of the
/// same length.
pub trait Integrand {
    fn sample(&self, points: &DVector<f64>) -> DVector<f64>;
}

impl<F> Integrand for F where
    F: Fn(f64) -> f64 {
    fn sample(&self, points: &DVector<f64>) -> DVector<f64> {
        points.map(|x| self(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_sample_elementwise() {
        let double = |x: f64| 2.0 * x;
        let points = DVector::from_vec(vec![1.0, 2.5]);
        let heights = double.sample(&points);
        assert_eq!(heights.len(), 2);
        assert!((heights[0] - 2.0).abs() < 1e-15);
        assert!((heights[1] - 5.0).abs() < 1e-15);
    }
}
