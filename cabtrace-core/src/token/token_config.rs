use serde::{Deserialize, Serialize};

use super::TokenError;

/// parameters of a [`super::TokenEncoder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// number of vectors in every encoded sequence
    pub max_length: usize,
    /// number of coordinate values per trajectory point
    pub dimensionality: usize,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            max_length: Self::DEFAULT_MAX_LENGTH,
            dimensionality: Self::DEFAULT_DIMENSIONALITY,
        }
    }
}

impl TokenConfig {
    pub const DEFAULT_MAX_LENGTH: usize = 2048;
    pub const DEFAULT_DIMENSIONALITY: usize = 2;

    pub fn new(max_length: usize, dimensionality: usize) -> Result<TokenConfig, TokenError> {
        let config = TokenConfig {
            max_length,
            dimensionality,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TokenError> {
        if self.max_length == 0 {
            return Err(TokenError::InvalidMaxLength);
        }
        if self.dimensionality < 2 {
            return Err(TokenError::InvalidDimensionality(self.dimensionality));
        }
        Ok(())
    }

    /// width of every vector in an encoded sequence.
    pub fn token_width(&self) -> usize {
        self.dimensionality + 1
    }
}
