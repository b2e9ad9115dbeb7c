use std::{fmt::Display, str::FromStr};

use geo::{coord, Coord, Rect};
use itertools::Itertools;
use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};
use serde::{Deserialize, Serialize};

use super::{count_by_cell, GridError, GridParams};

/// which candidate grid to keep when searching grid origins by Gini index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GiniCriterion {
    /// most concentrated distribution of points across cells
    #[default]
    Max,
    /// most even distribution of points across cells
    Min,
    /// the candidate closest to the median Gini index
    Median,
}

impl FromStr for GiniCriterion {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "max" => Ok(GiniCriterion::Max),
            "min" => Ok(GiniCriterion::Min),
            "median" => Ok(GiniCriterion::Median),
            other => Err(GridError::UnknownCriterion(other.to_string())),
        }
    }
}

impl Display for GiniCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GiniCriterion::Max => write!(f, "max"),
            GiniCriterion::Min => write!(f, "min"),
            GiniCriterion::Median => write!(f, "median"),
        }
    }
}

/// outcome of [`search_params_by_gini`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GiniSearch {
    pub params: GridParams,
    pub gini: f64,
}

/// Gini index of a distribution of counts, estimated from the trapezoid
/// area under the Lorenz curve. 0 for a perfectly even distribution,
/// approaching 1 as the counts concentrate in a single bin. None when there
/// are no counts or they sum to zero.
pub fn gini_index(counts: &[f64]) -> Option<f64> {
    let n = counts.len();
    let total: f64 = counts.iter().sum();
    if n == 0 || total <= 0.0 {
        return None;
    }
    let sorted = counts.iter().copied().sorted_by(f64::total_cmp).collect_vec();
    let mut area = 0.0;
    let mut previous = 0.0;
    let mut cumulative = 0.0;
    for value in sorted {
        cumulative += value;
        let current = cumulative / total;
        area += (previous + current) / 2.0 / n as f64;
        previous = current;
    }
    // gini = A / (A + B) with A + B = 0.5
    Some(1.0 - 2.0 * area)
}

/// searches for the grid origin that gives the desired Gini index of point
/// counts per cell.
///
/// up to `sample` points are drawn with a seeded RNG. the search cell is
/// centred on the mean of the sample, and `gap` evenly spaced candidate
/// origins are tried along each axis of that cell, from its origin to one
/// cell width away. ties are broken by the first candidate, iterating
/// longitudes fastest.
pub fn search_params_by_gini(
    coords: &[Coord<f64>],
    accuracy: f64,
    criterion: GiniCriterion,
    gap: usize,
    sample: usize,
    seed: u64,
) -> Result<GiniSearch, GridError> {
    if coords.is_empty() {
        return Err(GridError::EmptyInput);
    }
    if gap == 0 {
        return Err(GridError::InvalidGap);
    }
    if sample == 0 {
        return Err(GridError::InvalidSampleSize);
    }
    let sampled: Vec<Coord<f64>> = if coords.len() > sample {
        let mut rng = StdRng::seed_from_u64(seed);
        coords.choose_multiple(&mut rng, sample).copied().collect()
    } else {
        coords.to_vec()
    };

    let n = sampled.len() as f64;
    let mean = coord! {
        x: sampled.iter().map(|c| c.x).sum::<f64>() / n,
        y: sampled.iter().map(|c| c.y).sum::<f64>() / n,
    };
    let base = GridParams::from_bounds(&Rect::new(mean, mean), accuracy)?;
    let xs = linspace(base.lon_start, base.lon_start + base.delta_lon, gap);
    let ys = linspace(base.lat_start, base.lat_start + base.delta_lat, gap);

    let candidates = ys
        .iter()
        .cartesian_product(xs.iter())
        .filter_map(|(lat, lon)| {
            let params = base.with_origin(*lon, *lat);
            let counts = count_by_cell(&sampled, &params)
                .into_values()
                .map(|c| c as f64)
                .collect_vec();
            gini_index(&counts).map(|gini| GiniSearch { params, gini })
        })
        .collect_vec();

    let chosen = match criterion {
        GiniCriterion::Max => first_by(&candidates, |a, b| b.gini > a.gini),
        GiniCriterion::Min => first_by(&candidates, |a, b| b.gini < a.gini),
        GiniCriterion::Median => {
            let ginis = candidates.iter().map(|c| c.gini).collect_vec();
            let median = median(&ginis);
            first_by(&candidates, |a, b| {
                (b.gini - median).abs() < (a.gini - median).abs()
            })
        }
    }
    .ok_or(GridError::EmptyInput)?;
    log::info!("gini index: {}", chosen.gini);
    Ok(chosen)
}

/// keeps the first candidate unless a later one is strictly better.
fn first_by<F>(candidates: &[GiniSearch], better: F) -> Option<GiniSearch>
where
    F: Fn(&GiniSearch, &GiniSearch) -> bool,
{
    candidates.iter().copied().reduce(|best, next| {
        if better(&best, &next) {
            next
        } else {
            best
        }
    })
}

fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 1 {
        return vec![start];
    }
    let step = (stop - start) / (count - 1) as f64;
    (0..count).map(|i| start + step * i as f64).collect()
}

fn median(values: &[f64]) -> f64 {
    let sorted = values.iter().copied().sorted_by(f64::total_cmp).collect_vec();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
