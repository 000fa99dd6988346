//! Numeric value extraction from feature and row collections
//!
//! Chart data arrives as loosely typed records: GeoJSON features whose
//! `properties` hold metrics, or flat row objects. This module projects
//! named fields out of those records as `f64` values.
//!
//! # Filtering Policy
//!
//! A field value is kept when it is
//!
//! - a JSON number, or
//! - a string that parses as a number after trimming whitespace (`" 12.5 "`)
//!
//! and the resulting value is finite. Everything else (`null`, missing
//! fields, booleans, `"n/a"`, NaN, infinities) is dropped silently. Surviving
//! values keep the order of the input records. The numeric components in
//! `vizcore_stats` rely on this: they assume finite input.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use vizcore_data::extract::{FeatureCollection, extract_metric_values};
//!
//! let collection: FeatureCollection = serde_json::from_value(json!({
//!     "type": "FeatureCollection",
//!     "features": [
//!         { "type": "Feature", "properties": { "name": "A", "density": 12.5 } },
//!         { "type": "Feature", "properties": { "name": "B", "density": null } },
//!         { "type": "Feature", "properties": { "name": "C", "density": "7" } },
//!     ]
//! }))
//! .unwrap();
//!
//! let values = extract_metric_values(&collection.features, "density");
//! assert_eq!(values, vec![12.5, 7.0]);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use vizcore_stats::regression::Point2D;

/// A row object: field name to JSON value, in document order.
pub type Row = Map<String, Value>;

/// A GeoJSON-like feature. Only `properties` is read; geometry and other
/// members are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Feature {
    /// Feature properties. `null` or a missing member deserializes as empty.
    #[serde(default, deserialize_with = "deserialize_properties")]
    pub properties: Row,
}

/// A GeoJSON-like feature collection.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

fn deserialize_properties<'de, D>(deserializer: D) -> Result<Row, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Row>::deserialize(deserializer)?.unwrap_or_default())
}

/// Interprets a JSON value as a finite number.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vizcore_data::extract::parse_number;
///
/// assert_eq!(parse_number(&json!(3)), Some(3.0));
/// assert_eq!(parse_number(&json!(" -0.25 ")), Some(-0.25));
/// assert_eq!(parse_number(&json!("NaN")), None);
/// assert_eq!(parse_number(&json!(null)), None);
/// assert_eq!(parse_number(&json!(true)), None);
/// ```
#[must_use]
pub fn parse_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    };
    number.filter(|n| n.is_finite())
}

/// Reads a numeric field from a row, applying the filtering policy.
#[must_use]
pub fn field_value(row: &Row, field: &str) -> Option<f64> {
    row.get(field).and_then(parse_number)
}

/// Extracts the values of one metric from a set of features.
///
/// Features whose metric is missing or not numeric are skipped; the order of
/// the remaining values follows the order of `features`.
#[must_use]
pub fn extract_metric_values(features: &[Feature], metric_id: &str) -> Vec<f64> {
    features
        .iter()
        .filter_map(|feature| field_value(&feature.properties, metric_id))
        .collect()
}

/// Extracts one numeric column from row objects.
#[must_use]
pub fn extract_column(rows: &[Row], field: &str) -> Vec<f64> {
    rows.iter().filter_map(|row| field_value(row, field)).collect()
}

/// Extracts `(x, y)` points from row objects.
///
/// A row contributes a point only when both fields pass the filtering
/// policy, so the result satisfies the finiteness precondition of the
/// regression functions.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vizcore_data::extract::{Row, extract_points};
///
/// let rows: Vec<Row> = serde_json::from_value(json!([
///     { "income": 42000, "life_expectancy": 71.2 },
///     { "income": null, "life_expectancy": 68.0 },
///     { "income": "51000", "life_expectancy": 74.9 },
/// ]))
/// .unwrap();
///
/// let points = extract_points(&rows, "income", "life_expectancy");
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[1].x, 51000.0);
/// ```
#[must_use]
pub fn extract_points(rows: &[Row], x_field: &str, y_field: &str) -> Vec<Point2D> {
    rows.iter()
        .filter_map(|row| {
            let x = field_value(row, x_field)?;
            let y = field_value(row, y_field)?;
            Some(Point2D::new(x, y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn features(value: Value) -> Vec<Feature> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_drops_bad_values_and_keeps_order() {
        let features = features(json!([
            { "properties": { "m": 3 } },
            { "properties": { "m": null } },
            { "properties": {} },
            { "properties": { "m": "abc" } },
            { "properties": { "m": "1e400" } },
            { "properties": { "m": 1.5 } },
            { "properties": { "m": false } },
            { "properties": { "m": "-2" } },
        ]));
        assert_eq!(extract_metric_values(&features, "m"), vec![3.0, 1.5, -2.0]);
    }

    #[test]
    fn test_null_properties() {
        let features = features(json!([
            { "type": "Feature", "properties": null, "geometry": null },
            { "type": "Feature", "geometry": { "type": "Point", "coordinates": [0, 0] } },
        ]));
        assert!(features.iter().all(|f| f.properties.is_empty()));
        assert!(extract_metric_values(&features, "m").is_empty());
    }

    #[test]
    fn test_unknown_metric() {
        let features = features(json!([{ "properties": { "a": 1 } }]));
        assert!(extract_metric_values(&features, "b").is_empty());
    }

    #[test]
    fn test_extract_column() {
        let rows: Vec<Row> = serde_json::from_value(json!([
            { "v": 1 },
            { "v": "2.5" },
            { "w": 3 },
        ]))
        .unwrap();
        assert_eq!(extract_column(&rows, "v"), vec![1.0, 2.5]);
    }

    #[test]
    fn test_points_require_both_fields() {
        let rows: Vec<Row> = serde_json::from_value(json!([
            { "x": 1, "y": 2 },
            { "x": 2 },
            { "x": "oops", "y": 3 },
            { "x": 4, "y": "8" },
        ]))
        .unwrap();
        assert_eq!(
            extract_points(&rows, "x", "y"),
            vec![Point2D::new(1.0, 2.0), Point2D::new(4.0, 8.0)]
        );
    }
}
