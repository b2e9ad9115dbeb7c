//! a nested sequence of numbers stored in a single table cell.
//!
//! cells hold a versioned JSON envelope, `{"v":1,"data":[[1.0,2.0],[3.0,4.0]]}`,
//! so readers never evaluate cell text and can reject layouts they do not
//! know. use with `#[serde(with = "crate::io::nested_cell")]`.
use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

use crate::PrepError;

pub const NESTED_CELL_VERSION: u32 = 1;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    v: u32,
    data: &'a [Vec<f64>],
}

#[derive(Deserialize)]
struct Envelope {
    v: u32,
    data: Vec<Vec<f64>>,
}

pub fn encode(data: &[Vec<f64>]) -> Result<String, PrepError> {
    let envelope = EnvelopeRef {
        v: NESTED_CELL_VERSION,
        data,
    };
    Ok(serde_json::to_string(&envelope)?)
}

pub fn decode(cell: &str) -> Result<Vec<Vec<f64>>, PrepError> {
    let envelope: Envelope = serde_json::from_str(cell)?;
    if envelope.v != NESTED_CELL_VERSION {
        return Err(PrepError::NestedCellError(format!(
            "unsupported nested cell version {}, expected {NESTED_CELL_VERSION}",
            envelope.v
        )));
    }
    Ok(envelope.data)
}

pub fn serialize<S>(value: &[Vec<f64>], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let cell = encode(value).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&cell)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Vec<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let cell: String = String::deserialize(deserializer)?;
    decode(&cell).map_err(|e| D::Error::custom(format!("{e}")))
}
