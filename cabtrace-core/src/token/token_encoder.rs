use super::{
    TokenConfig, TokenError, TokenSequence, END_FLAG, END_SENTINEL_VALUE, START_FLAG,
    START_SENTINEL_VALUE,
};

/// encodes trajectories into [`TokenSequence`] values of exactly
/// `max_length` vectors.
#[derive(Clone, Debug)]
pub struct TokenEncoder {
    config: TokenConfig,
    start_sentinel: Vec<f64>,
    end_sentinel: Vec<f64>,
}

impl TokenEncoder {
    pub fn new(config: TokenConfig) -> Result<TokenEncoder, TokenError> {
        config.validate()?;
        let start_sentinel = sentinel(config.dimensionality, START_SENTINEL_VALUE, START_FLAG);
        let end_sentinel = sentinel(config.dimensionality, END_SENTINEL_VALUE, END_FLAG);
        Ok(TokenEncoder {
            config,
            start_sentinel,
            end_sentinel,
        })
    }

    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    pub fn start_sentinel(&self) -> &[f64] {
        &self.start_sentinel
    }

    pub fn end_sentinel(&self) -> &[f64] {
        &self.end_sentinel
    }

    pub fn padding(&self) -> Vec<f64> {
        vec![0.0; self.config.token_width()]
    }

    /// encodes a trajectory. every point must have exactly `dimensionality`
    /// values; mixed widths would break the fixed-width output so they fail
    /// the whole encoding.
    ///
    /// when `[start] + points + [end]` does not fit strictly below
    /// `max_length`, the sequence is cut to `max_length` vectors and flagged
    /// as truncated.
    pub fn encode(&self, trajectory: &[Vec<f64>]) -> Result<TokenSequence, TokenError> {
        let max_length = self.config.max_length;
        let dimensionality = self.config.dimensionality;
        let mut tokens = Vec::with_capacity(max_length.max(trajectory.len() + 2));
        tokens.push(self.start_sentinel.clone());
        for (index, point) in trajectory.iter().enumerate() {
            if point.len() != dimensionality {
                return Err(TokenError::DimensionMismatch {
                    index,
                    expected: dimensionality,
                    found: point.len(),
                });
            }
            let mut token = Vec::with_capacity(dimensionality + 1);
            token.extend_from_slice(point);
            token.push((index + 1) as f64);
            tokens.push(token);
        }
        tokens.push(self.end_sentinel.clone());

        let truncated = tokens.len() >= max_length;
        if truncated {
            log::warn!(
                "max length {max_length} is too small for a trajectory of {} points, truncating",
                trajectory.len()
            );
            tokens.truncate(max_length);
        } else {
            tokens.resize(max_length, self.padding());
        }
        Ok(TokenSequence::new(tokens, truncated))
    }
}

fn sentinel(dimensionality: usize, value: f64, flag: f64) -> Vec<f64> {
    let mut token = vec![0.0; dimensionality + 1];
    token[0] = value;
    token[1] = value;
    token[dimensionality] = flag;
    token
}

#[cfg(test)]
mod test {
    use super::TokenEncoder;
    use crate::token::{TokenConfig, TokenError};

    fn encoder(max_length: usize, dimensionality: usize) -> TokenEncoder {
        let config = TokenConfig::new(max_length, dimensionality).expect("valid config");
        TokenEncoder::new(config).expect("valid encoder")
    }

    #[test]
    fn test_encode_pads_to_max_length() {
        let result = encoder(5, 2)
            .encode(&[vec![1.0, 2.0], vec![3.0, 4.0]])
            .expect("should encode");
        assert_eq!(
            result.tokens(),
            &[
                vec![-20.0, -20.0, -1.0],
                vec![1.0, 2.0, 1.0],
                vec![3.0, 4.0, 2.0],
                vec![20.0, 20.0, -2.0],
                vec![0.0, 0.0, 0.0],
            ]
        );
        assert!(!result.is_truncated());
    }

    #[test]
    fn test_sentinels_for_wider_points() {
        let encoder = encoder(8, 4);
        assert_eq!(encoder.start_sentinel(), &[-20.0, -20.0, 0.0, 0.0, -1.0]);
        assert_eq!(encoder.end_sentinel(), &[20.0, 20.0, 0.0, 0.0, -2.0]);
        let result = encoder
            .encode(&[vec![104.1, 30.6, 8.0, 0.35]])
            .expect("should encode");
        assert_eq!(result.len(), 8);
        assert_eq!(result.tokens()[1], vec![104.1, 30.6, 8.0, 0.35, 1.0]);
        assert!(result.tokens().iter().all(|t| t.len() == 5));
    }

    #[test]
    fn test_exact_fit_is_truncated() {
        // 2 points + 2 sentinels == max_length, which still counts as too short
        let result = encoder(4, 2)
            .encode(&[vec![1.0, 2.0], vec![3.0, 4.0]])
            .expect("should encode");
        assert_eq!(result.len(), 4);
        assert!(result.is_truncated());
        assert_eq!(result.tokens()[3], vec![20.0, 20.0, -2.0]);
    }

    #[test]
    fn test_long_trajectory_loses_end_sentinel() {
        let trajectory = (0..10).map(|i| vec![i as f64, i as f64]).collect::<Vec<_>>();
        let result = encoder(6, 2).encode(&trajectory).expect("should encode");
        assert_eq!(result.len(), 6);
        assert!(result.is_truncated());
        assert_eq!(result.tokens()[0], vec![-20.0, -20.0, -1.0]);
        assert_eq!(result.tokens()[5], vec![4.0, 4.0, 5.0]);
    }

    #[test]
    fn test_empty_trajectory() {
        let result = encoder(4, 2).encode(&[]).expect("should encode");
        assert_eq!(
            result.tokens(),
            &[
                vec![-20.0, -20.0, -1.0],
                vec![20.0, 20.0, -2.0],
                vec![0.0, 0.0, 0.0],
                vec![0.0, 0.0, 0.0],
            ]
        );
    }

    #[test]
    fn test_dimension_mismatch_is_an_error() {
        let result = encoder(16, 2).encode(&[vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]);
        assert_eq!(
            result,
            Err(TokenError::DimensionMismatch {
                index: 1,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_invalid_config() {
        assert_eq!(
            TokenConfig::new(0, 2),
            Err(TokenError::InvalidMaxLength)
        );
        assert_eq!(
            TokenConfig::new(16, 1),
            Err(TokenError::InvalidDimensionality(1))
        );
    }

    #[test]
    fn test_encode_is_deterministic_and_decodes() {
        let trajectory = vec![
            vec![114.05, 22.53],
            vec![114.06, 22.54],
            vec![0.0, 0.0],
            vec![114.08, 22.55],
        ];
        let encoder = encoder(2048, 2);
        let first = encoder.encode(&trajectory).expect("should encode");
        let second = encoder.encode(&trajectory).expect("should encode");
        assert_eq!(first, second);
        assert_eq!(first.len(), 2048);
        assert_eq!(first.tokens()[0], encoder.start_sentinel());
        let last_real = first
            .tokens()
            .iter()
            .rposition(|t| t.iter().any(|v| *v != 0.0))
            .expect("sequence has non-padding tokens");
        assert_eq!(first.tokens()[last_real], encoder.end_sentinel());
        assert_eq!(first.decode(), trajectory);
    }
}
