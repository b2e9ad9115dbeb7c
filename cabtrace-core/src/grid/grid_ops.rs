use std::collections::BTreeMap;

use geo::{Coord, Rect};

use super::{GridCell, GridError, GridParams};

/// every cell of a grid covering `bounds` with cells of `accuracy` meters,
/// in column-major order, along with the grid parameters.
pub fn rect_grid(
    bounds: &Rect<f64>,
    accuracy: f64,
) -> Result<(Vec<GridCell>, GridParams), GridError> {
    let params = GridParams::from_bounds(bounds, accuracy)?;
    let lon_count = (bounds.width() / params.delta_lon) as i64 + 1;
    let lat_count = (bounds.height() / params.delta_lat) as i64 + 1;
    let mut cells = Vec::with_capacity((lon_count * lat_count) as usize);
    for loncol in 0..lon_count {
        for latcol in 0..lat_count {
            cells.push(GridCell::new(loncol, latcol));
        }
    }
    Ok((cells, params))
}

/// number of coordinates falling into each occupied cell.
pub fn count_by_cell<'a, I>(coords: I, params: &GridParams) -> BTreeMap<GridCell, u64>
where
    I: IntoIterator<Item = &'a Coord<f64>>,
{
    let mut counts = BTreeMap::new();
    for coord in coords {
        *counts.entry(params.cell_of(*coord)).or_insert(0) += 1;
    }
    counts
}
