//! Population statistics and personal-best tracking.

use crate::models::MatchId;

use super::StatsError;

/// Population mean with dispersion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dispersion {
    pub mean: f64,
    pub standard_deviation: f64,
    pub standard_error: f64,
}

/// Population statistics over a sample set.
///
/// Uses population formulas, not sample estimates: the sample *is* the
/// entire observed match set.
pub fn dispersion(samples: &[f64]) -> Result<Dispersion, StatsError> {
    if samples.is_empty() {
        return Err(StatsError::EmptySample);
    }

    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let standard_deviation = variance.sqrt();
    let standard_error = standard_deviation / n.sqrt();

    Ok(Dispersion {
        mean,
        standard_deviation,
        standard_error,
    })
}

/// The maximum value in a sequence of `(value, match_id)` pairs, with the
/// match it came from.
///
/// Replacement is strictly-greater, so ties resolve to the first-seen
/// maximum.
pub fn highest<I>(pairs: I) -> Result<(f64, MatchId), StatsError>
where
    I: IntoIterator<Item = (f64, MatchId)>,
{
    let mut best: Option<(f64, MatchId)> = None;

    for (value, match_id) in pairs {
        let replace = match best {
            None => true,
            Some((best_value, _)) => value > best_value,
        };
        if replace {
            best = Some((value, match_id));
        }
    }

    best.ok_or(StatsError::EmptySample)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispersion_mean_times_n_equals_sum() {
        let samples = vec![10.0, 20.0, 5.0, 7.5, 13.25];
        let stats = dispersion(&samples).unwrap();

        let sum: f64 = samples.iter().sum();
        assert!((stats.mean * samples.len() as f64 - sum).abs() < 1e-9);
    }

    #[test]
    fn test_dispersion_known_values() {
        // Population stats of [2, 4, 4, 4, 5, 5, 7, 9]: mean 5, sd 2
        let samples = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = dispersion(&samples).unwrap();

        assert!((stats.mean - 5.0).abs() < 1e-9);
        assert!((stats.standard_deviation - 2.0).abs() < 1e-9);
        assert!((stats.standard_error - 2.0 / 8f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_dispersion_standard_error_relation() {
        let samples = vec![10.0, 20.0, 5.0];
        let stats = dispersion(&samples).unwrap();

        let expected = stats.standard_deviation / (samples.len() as f64).sqrt();
        assert!((stats.standard_error - expected).abs() < 1e-12);
    }

    #[test]
    fn test_dispersion_single_sample() {
        let stats = dispersion(&[42.0]).unwrap();
        assert_eq!(stats.mean, 42.0);
        assert_eq!(stats.standard_deviation, 0.0);
        assert_eq!(stats.standard_error, 0.0);
    }

    #[test]
    fn test_dispersion_empty_is_an_error() {
        assert_eq!(dispersion(&[]), Err(StatsError::EmptySample));
    }

    #[test]
    fn test_highest_value_and_provenance() {
        let pairs = vec![
            (12.0, MatchId::new(1)),
            (30.0, MatchId::new(2)),
            (18.0, MatchId::new(3)),
        ];

        let (value, match_id) = highest(pairs).unwrap();
        assert_eq!(value, 30.0);
        assert_eq!(match_id, MatchId::new(2));
    }

    #[test]
    fn test_highest_tie_keeps_first_seen() {
        let pairs = vec![
            (30.0, MatchId::new(1)),
            (30.0, MatchId::new(2)),
            (30.0, MatchId::new(3)),
        ];

        let (_, match_id) = highest(pairs).unwrap();
        assert_eq!(match_id, MatchId::new(1));
    }

    #[test]
    fn test_highest_empty_is_an_error() {
        assert_eq!(
            highest(std::iter::empty::<(f64, MatchId)>()),
            Err(StatsError::EmptySample)
        );
    }
}
