use std::collections::HashMap;
use std::io;
use std::path::Path;

use nalgebra::Point3;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use rstar::primitives::GeomWithData;
use rstar::RTree;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

pub(crate) type IndexedPoint = GeomWithData<[f64; 3], u32>;

/// Located observations indexed by an R-tree.
///
/// Planar data is stored with `z = 0`.
#[derive(Clone, Debug)]
pub struct PointSet {
    pub tree: RTree<IndexedPoint>,
    pub points: Vec<Point3<f64>>,
    pub data: Vec<f64>,
}

/// Header names of the coordinate and value columns in a sample CSV.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvColumns {
    pub x: String,
    pub y: String,
    pub z: Option<String>,
    pub value: String,
}

impl Default for CsvColumns {
    fn default() -> Self {
        Self {
            x: "x".to_string(),
            y: "y".to_string(),
            z: None,
            value: "value".to_string(),
        }
    }
}

impl PointSet {
    pub fn new(points: Vec<Point3<f64>>, data: Vec<f64>) -> Result<Self> {
        if points.len() != data.len() {
            return Err(Error::InvalidParameter {
                name: "data",
                value: data.len().to_string(),
                reason: format!("expected one value per point ({} points)", points.len()),
            });
        }

        let tree_points = points
            .iter()
            .enumerate()
            .map(|(i, p)| IndexedPoint::new([p.x, p.y, p.z], i as u32))
            .collect();
        let tree = RTree::bulk_load(tree_points);

        Ok(Self { tree, points, data })
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P, columns: &CsvColumns) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading sample data");
        let rdr = csv::Reader::from_path(path)?;
        Self::from_csv(rdr, columns)
    }

    pub fn from_csv_reader<R: io::Read>(reader: R, columns: &CsvColumns) -> Result<Self> {
        Self::from_csv(csv::Reader::from_reader(reader), columns)
    }

    fn from_csv<R: io::Read>(mut rdr: csv::Reader<R>, columns: &CsvColumns) -> Result<Self> {
        let headers = rdr.headers()?.clone();
        let required = [
            Some(&columns.x),
            Some(&columns.y),
            columns.z.as_ref(),
            Some(&columns.value),
        ];
        for column in required.into_iter().flatten() {
            if !headers.iter().any(|h| h == column) {
                return Err(Error::MissingColumn(column.clone()));
            }
        }

        let mut point_vec = Vec::new();
        let mut value_vec = Vec::new();

        for result in rdr.deserialize() {
            let record: HashMap<String, String> = result?;

            let x = parse_column(&record, &columns.x)?;
            let y = parse_column(&record, &columns.y)?;
            let z = match &columns.z {
                Some(z_col) => parse_column(&record, z_col)?,
                None => 0.0,
            };
            let value = parse_column(&record, &columns.value)?;

            point_vec.push(Point3::new(x, y, z));
            value_vec.push(value);
        }

        debug!(n_points = point_vec.len(), "parsed sample records");
        Self::new(point_vec, value_vec)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest separation between any two points; zero with fewer than two.
    pub fn max_distance(&self) -> f64 {
        let points = &self.points;
        (0..points.len())
            .into_par_iter()
            .map(|i| {
                points[i + 1..]
                    .iter()
                    .map(|p| nalgebra::distance(&points[i], p))
                    .fold(0f64, f64::max)
            })
            .reduce(|| 0f64, f64::max)
    }
}

fn parse_column(record: &HashMap<String, String>, column: &str) -> Result<f64> {
    let raw = record
        .get(column)
        .ok_or_else(|| Error::MissingColumn(column.to_string()))?;

    raw.trim().parse::<f64>().map_err(|_| Error::ParseValue {
        column: column.to_string(),
        value: raw.clone(),
    })
}
