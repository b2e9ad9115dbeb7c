use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// column and row of a grid cell. column 0, row 0 is centred on the grid origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub loncol: i64,
    pub latcol: i64,
}

impl GridCell {
    pub fn new(loncol: i64, latcol: i64) -> GridCell {
        GridCell { loncol, latcol }
    }
}

impl Display for GridCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.loncol, self.latcol)
    }
}
