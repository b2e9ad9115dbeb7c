use std::f64::consts::PI;

use geo::{coord, Coord, Polygon, Rect};
use serde::{Deserialize, Serialize};

use super::{GridCell, GridError, EARTH_RADIUS_METERS};

/// origin and cell size of a rectangular grid, all in degrees. the origin is
/// the centre of cell (0, 0).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridParams {
    pub lon_start: f64,
    pub lat_start: f64,
    pub delta_lon: f64,
    pub delta_lat: f64,
}

impl GridParams {
    /// derives grid parameters from a bounding box and a cell size in meters.
    /// the longitude delta is scaled by the cosine of the mean latitude of
    /// the bounds.
    pub fn from_bounds(bounds: &Rect<f64>, accuracy: f64) -> Result<GridParams, GridError> {
        if !(accuracy.is_finite() && accuracy > 0.0) {
            return Err(GridError::InvalidAccuracy(accuracy));
        }
        let min = bounds.min();
        let max = bounds.max();
        if ![min.x, min.y, max.x, max.y].iter().all(|v| v.is_finite()) {
            return Err(GridError::InvalidBounds(format!("{bounds:?}")));
        }
        let circumference = 2.0 * PI * EARTH_RADIUS_METERS;
        let mean_lat_cos = ((min.y + max.y) * PI / 360.0).cos();
        Ok(GridParams {
            lon_start: min.x,
            lat_start: min.y,
            delta_lon: accuracy * 360.0 / (circumference * mean_lat_cos),
            delta_lat: accuracy * 360.0 / circumference,
        })
    }

    /// the cell containing a coordinate.
    pub fn cell_of(&self, coord: Coord<f64>) -> GridCell {
        let loncol = ((coord.x - (self.lon_start - self.delta_lon / 2.0)) / self.delta_lon).floor();
        let latcol = ((coord.y - (self.lat_start - self.delta_lat / 2.0)) / self.delta_lat).floor();
        GridCell::new(loncol as i64, latcol as i64)
    }

    pub fn centre(&self, cell: &GridCell) -> Coord<f64> {
        coord! {
            x: cell.loncol as f64 * self.delta_lon + self.lon_start,
            y: cell.latcol as f64 * self.delta_lat + self.lat_start,
        }
    }

    pub fn rect(&self, cell: &GridCell) -> Rect<f64> {
        let centre = self.centre(cell);
        let half = coord! { x: self.delta_lon / 2.0, y: self.delta_lat / 2.0 };
        Rect::new(centre - half, centre + half)
    }

    pub fn polygon(&self, cell: &GridCell) -> Polygon<f64> {
        self.rect(cell).to_polygon()
    }

    /// same cell size with a different origin.
    pub fn with_origin(&self, lon_start: f64, lat_start: f64) -> GridParams {
        GridParams {
            lon_start,
            lat_start,
            ..*self
        }
    }
}

#[cfg(test)]
mod test {
    use super::GridParams;
    use crate::grid::{GridCell, GridError};
    use geo::{coord, Area, Rect};

    fn shenzhen() -> GridParams {
        let bounds = Rect::new(coord! { x: 113.6, y: 22.4 }, coord! { x: 114.8, y: 22.9 });
        GridParams::from_bounds(&bounds, 500.0).expect("valid params")
    }

    #[test]
    fn test_params_from_bounds() {
        let params = shenzhen();
        assert_eq!(params.lon_start, 113.6);
        assert_eq!(params.lat_start, 22.4);
        assert!((params.delta_lon - 0.004872390756896538).abs() < 1e-12);
        assert!((params.delta_lat - 0.004496605206422906).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_accuracy() {
        let bounds = Rect::new(coord! { x: 113.6, y: 22.4 }, coord! { x: 114.8, y: 22.9 });
        assert_eq!(
            GridParams::from_bounds(&bounds, 0.0),
            Err(GridError::InvalidAccuracy(0.0))
        );
    }

    #[test]
    fn test_centre_maps_back_to_cell() {
        let params = shenzhen();
        for cell in [GridCell::new(0, 0), GridCell::new(12, 7), GridCell::new(-3, 40)] {
            let centre = params.centre(&cell);
            assert_eq!(params.cell_of(centre), cell);
        }
    }

    #[test]
    fn test_cell_edges() {
        let params = shenzhen();
        // the origin sits in the middle of cell (0, 0), half a delta either side
        let just_inside = coord! {
            x: params.lon_start + params.delta_lon * 0.49,
            y: params.lat_start - params.delta_lat * 0.49,
        };
        let just_outside = coord! {
            x: params.lon_start + params.delta_lon * 0.51,
            y: params.lat_start - params.delta_lat * 0.51,
        };
        assert_eq!(params.cell_of(just_inside), GridCell::new(0, 0));
        assert_eq!(params.cell_of(just_outside), GridCell::new(1, -1));
    }

    #[test]
    fn test_polygon_covers_one_cell() {
        let params = shenzhen();
        let polygon = params.polygon(&GridCell::new(2, 3));
        let expected = params.delta_lon * params.delta_lat;
        assert!((polygon.unsigned_area() - expected).abs() < 1e-12);
        assert_eq!(polygon.exterior().0.len(), 5);
    }
}
