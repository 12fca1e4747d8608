//! Second and third moments: variance, standard deviation, skewness

use lifestyle_core::{utils, Error, Result};

fn is_constant(sample: &[f64]) -> bool {
    sample.windows(2).all(|w| w[0] == w[1])
}

/// Sample variance with the n − 1 denominator
///
/// A single observation, or a column of identical values, has variance 0.
pub fn sample_variance(sample: &[f64]) -> Result<f64> {
    if sample.is_empty() {
        return Err(Error::empty_input());
    }
    if sample.len() < 2 || is_constant(sample) {
        return Ok(0.0);
    }

    let mean = utils::mean(sample);
    let ss: f64 = sample
        .iter()
        .map(|&x| {
            let diff = x - mean;
            diff * diff
        })
        .sum();
    Ok(ss / (sample.len() - 1) as f64)
}

/// Sample standard deviation, the square root of [`sample_variance`]
pub fn std_dev(sample: &[f64]) -> Result<f64> {
    sample_variance(sample).map(f64::sqrt)
}

/// Adjusted Fisher–Pearson standardized moment coefficient
///
/// `G1 = sqrt(n (n − 1)) / (n − 2) · m3 / m2^(3/2)` where `m2` and `m3` are
/// the biased second and third central moments. This is the bias-corrected
/// estimator reported by most statistical packages, not the plain `m3 / m2^1.5`.
///
/// Fewer than three observations, or a constant column, yield 0.
pub fn adjusted_skewness(sample: &[f64]) -> Result<f64> {
    if sample.is_empty() {
        return Err(Error::empty_input());
    }
    let len = sample.len();
    if len < 3 || is_constant(sample) {
        return Ok(0.0);
    }

    let n = len as f64;
    let mean = utils::mean(sample);
    let (m2, m3) = sample.iter().fold((0.0, 0.0), |(m2, m3), &x| {
        let d = x - mean;
        (m2 + d * d, m3 + d * d * d)
    });
    let m2 = m2 / n;
    let m3 = m3 / n;

    if m2 <= 0.0 {
        return Ok(0.0);
    }

    let g1 = m3 / m2.powf(1.5);
    Ok((n * (n - 1.0)).sqrt() / (n - 2.0) * g1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_variance_one_to_ten() {
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        assert_relative_eq!(sample_variance(&data).unwrap(), 9.166666666666666, epsilon = 1e-12);
        assert_relative_eq!(std_dev(&data).unwrap(), 3.0276503540974917, epsilon = 1e-12);
    }

    #[test]
    fn test_variance_degenerate() {
        assert_eq!(sample_variance(&[7.0]).unwrap(), 0.0);
        assert_eq!(sample_variance(&[0.1, 0.1, 0.1]).unwrap(), 0.0);
        assert!(sample_variance(&[]).is_err());
    }

    #[test]
    fn test_skewness_symmetric() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(adjusted_skewness(&data).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_skewness_right_skewed_matches_adjusted_formula() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 10.0];
        // plain g1 would be ~1.1384; the adjusted coefficient is larger
        assert_relative_eq!(adjusted_skewness(&data).unwrap(), 1.6970562748477143, epsilon = 1e-12);
    }

    #[test]
    fn test_skewness_left_skewed() {
        let data = vec![-10.0, 1.0, 2.0, 3.0, 4.0];
        assert!(adjusted_skewness(&data).unwrap() < 0.0);
    }

    #[test]
    fn test_skewness_small_or_constant() {
        assert_eq!(adjusted_skewness(&[1.0, 5.0]).unwrap(), 0.0);
        assert_eq!(adjusted_skewness(&[4.0; 6]).unwrap(), 0.0);
        assert!(adjusted_skewness(&[]).is_err());
    }
}
