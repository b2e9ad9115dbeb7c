use serde::{Deserialize, Serialize};

/// fixed-length encoding of a single trajectory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenSequence {
    tokens: Vec<Vec<f64>>,
    truncated: bool,
}

impl TokenSequence {
    pub(crate) fn new(tokens: Vec<Vec<f64>>, truncated: bool) -> TokenSequence {
        TokenSequence { tokens, truncated }
    }

    pub fn tokens(&self) -> &[Vec<f64>] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Vec<f64>> {
        self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// true when the configured max length could not hold the whole
    /// trajectory, in which case trailing points and/or the end sentinel
    /// were dropped.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// recovers the trajectory points from the sequence. real points are the
    /// only vectors with a position channel of 1 or more, so decoding stops at
    /// the end sentinel or the first padding vector.
    pub fn decode(&self) -> Vec<Vec<f64>> {
        self.tokens
            .iter()
            .skip(1)
            .take_while(|token| token.last().is_some_and(|position| *position >= 1.0))
            .map(|token| token[..token.len() - 1].to_vec())
            .collect()
    }
}
