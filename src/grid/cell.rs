//! Generated cells and the ordered grid result

use geo::{Coord, LineString, Polygon};
use geojson::{Feature, FeatureCollection, JsonObject, JsonValue};

use crate::io::configuration::CELL_EDGE_UNIT;
use crate::math::precision::scale_to_id;

/// One square of the output grid
///
/// The ring starts at the bottom-left corner, visits top-left, top-right and
/// bottom-right, and closes on the bottom-left corner again.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    ring: [Coord<f64>; 5],
    rid: i64,
    cid: i64,
}

impl Cell {
    /// Corners of a cell anchored at `origin`, closing ring included
    ///
    /// The edge length is always [`CELL_EDGE_UNIT`].
    pub fn ring_at(origin: Coord<f64>) -> [Coord<f64>; 5] {
        let Coord { x, y } = origin;
        [
            origin,
            Coord {
                x,
                y: y + CELL_EDGE_UNIT,
            },
            Coord {
                x: x + CELL_EDGE_UNIT,
                y: y + CELL_EDGE_UNIT,
            },
            Coord {
                x: x + CELL_EDGE_UNIT,
                y,
            },
            origin,
        ]
    }

    /// Create a cell from its bottom-left corner
    ///
    /// `rid` and `cid` are the scaled y and x of that corner.
    pub fn from_origin(origin: Coord<f64>) -> Self {
        Self {
            ring: Self::ring_at(origin),
            rid: scale_to_id(origin.y),
            cid: scale_to_id(origin.x),
        }
    }

    /// Bottom-left corner
    pub const fn origin(&self) -> Coord<f64> {
        let [origin, ..] = self.ring;
        origin
    }

    /// Closed coordinate ring
    pub const fn ring(&self) -> &[Coord<f64>; 5] {
        &self.ring
    }

    /// Row identifier
    pub const fn rid(&self) -> i64 {
        self.rid
    }

    /// Column identifier
    pub const fn cid(&self) -> i64 {
        self.cid
    }

    /// Cell outline as a `geo` polygon
    pub fn polygon(&self) -> Polygon<f64> {
        Polygon::new(LineString::from(self.ring.to_vec()), vec![])
    }

    /// Cell as a `GeoJSON` feature with `rid`/`cid` properties
    pub fn to_feature(&self) -> Feature {
        let positions = self.ring.iter().map(|c| vec![c.x, c.y]).collect();
        let geometry = geojson::Geometry::new(geojson::Value::Polygon(vec![positions]));

        let mut properties = JsonObject::new();
        properties.insert("rid".to_string(), JsonValue::from(self.rid));
        properties.insert("cid".to_string(), JsonValue::from(self.cid));

        Feature {
            bbox: None,
            geometry: Some(geometry),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// Cells kept by a build, in generation order
///
/// Generation order is column-major: every row of the first column, then
/// every row of the next.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridResult {
    cells: Vec<Cell>,
    columns: usize,
    rows: usize,
}

impl GridResult {
    /// Wrap cells produced from a `columns` x `rows` lattice
    pub const fn new(cells: Vec<Cell>, columns: usize, rows: usize) -> Self {
        Self {
            cells,
            columns,
            rows,
        }
    }

    /// Kept cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over kept cells
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Number of kept cells
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell was kept
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Lattice columns swept
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Lattice rows swept
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Candidate positions in the lattice
    pub const fn candidates(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }

    /// Wrap the cells in a `GeoJSON` feature collection
    pub fn to_feature_collection(&self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: self.cells.iter().map(Cell::to_feature).collect(),
            foreign_members: None,
        }
    }
}

impl IntoIterator for GridResult {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a GridResult {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
