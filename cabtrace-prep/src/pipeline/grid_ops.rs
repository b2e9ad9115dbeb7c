use std::{collections::BTreeMap, path::Path};

use cabtrace_core::grid::{self, GiniCriterion, GridCell, GridParams};
use chrono::NaiveDate;
use csv::QuoteStyle;
use geo::{Coord, Rect};
use serde::{Deserialize, Serialize};
use wkt::ToWkt;

use crate::{
    config::DatasetConfig,
    io::{create_writer, read_pings},
    PrepError,
};

/// how the origin and cell size of the grid are chosen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridSource {
    /// grid anchored at the lower-left corner of explicit bounds
    Bounds(Rect<f64>),
    /// grid origin searched to reach the desired Gini index of point counts
    Gini {
        criterion: GiniCriterion,
        gap: usize,
        sample: usize,
        seed: u64,
    },
}

/// point count of one occupied grid cell.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GridCountRow {
    pub loncol: i64,
    pub latcol: i64,
    pub count: u64,
    pub centre_lon: f64,
    pub centre_lat: f64,
    pub geometry: String,
}

impl GridCountRow {
    pub fn new(cell: &GridCell, count: u64, params: &GridParams) -> GridCountRow {
        let centre = params.centre(cell);
        GridCountRow {
            loncol: cell.loncol,
            latcol: cell.latcol,
            count,
            centre_lon: centre.x,
            centre_lat: centre.y,
            geometry: params.polygon(cell).wkt_string(),
        }
    }
}

/// builds bounds from `[lon1, lat1, lon2, lat2]`.
pub fn bounds_from_slice(values: &[f64]) -> Result<Rect<f64>, PrepError> {
    match values {
        [lon1, lat1, lon2, lat2] => Ok(Rect::new(
            Coord { x: *lon1, y: *lat1 },
            Coord { x: *lon2, y: *lat2 },
        )),
        _ => Err(PrepError::ConfigurationError(format!(
            "bounds must be 4 values lon1,lat1,lon2,lat2, found {values:?}"
        ))),
    }
}

/// chooses grid parameters for a set of coordinates.
pub fn grid_params(
    coords: &[Coord<f64>],
    source: &GridSource,
    accuracy: f64,
) -> Result<GridParams, PrepError> {
    match source {
        GridSource::Bounds(bounds) => Ok(GridParams::from_bounds(bounds, accuracy)?),
        GridSource::Gini {
            criterion,
            gap,
            sample,
            seed,
        } => {
            let search =
                grid::search_params_by_gini(coords, accuracy, *criterion, *gap, *sample, *seed)?;
            log::info!(
                "selected grid origin ({}, {}) by {criterion} gini {:.4}",
                search.params.lon_start,
                search.params.lat_start,
                search.gini
            );
            Ok(search.params)
        }
    }
}

/// counts the pings of one file per grid cell.
pub fn count_pings(
    input_file: &Path,
    file_date: Option<&NaiveDate>,
    config: &DatasetConfig,
    source: &GridSource,
    accuracy: f64,
) -> Result<(Vec<GridCountRow>, GridParams), PrepError> {
    let pings = read_pings(input_file, &config.columns, &config.timestamp, file_date)?;
    let coords = pings
        .iter()
        .filter_map(|p| Some(Coord {
            x: p.longitude()?,
            y: p.latitude()?,
        }))
        .collect::<Vec<_>>();
    let params = grid_params(&coords, source, accuracy)?;
    let rows = grid::count_by_cell(&coords, &params)
        .iter()
        .map(|(cell, count)| GridCountRow::new(cell, *count, &params))
        .collect::<Vec<_>>();
    Ok((rows, params))
}

/// adds a zero count row for every cell of the grid covering `bounds` that
/// holds no pings. rows of cells outside the bounds are kept, and all rows
/// stay sorted by cell.
pub fn fill_extent(
    rows: Vec<GridCountRow>,
    bounds: &Rect<f64>,
    accuracy: f64,
) -> Result<Vec<GridCountRow>, PrepError> {
    let (cells, params) = grid::rect_grid(bounds, accuracy)?;
    let mut by_cell = rows
        .into_iter()
        .map(|row| (GridCell::new(row.loncol, row.latcol), row))
        .collect::<BTreeMap<_, _>>();
    for cell in cells {
        by_cell
            .entry(cell)
            .or_insert_with(|| GridCountRow::new(&cell, 0, &params));
    }
    Ok(by_cell.into_values().collect())
}

pub fn write_grid_counts(
    rows: &[GridCountRow],
    output_file: &Path,
    overwrite: bool,
) -> Result<(), PrepError> {
    let mut writer = create_writer(output_file, true, QuoteStyle::Necessary, overwrite)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
