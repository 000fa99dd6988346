//! Record handling between raw chart data and the numeric core
//!
//! Chart components hold their data as parsed JSON: GeoJSON feature
//! collections for maps, arrays of row objects for scatter plots and
//! grouped objects for comparison charts. This crate turns those records
//! into the plain numeric inputs `vizcore_stats` expects and formats the
//! numeric results for display.
//!
//! # Overview
//!
//! - [`extract`]: Pull numeric fields out of features and rows, dropping
//!   values that are missing or not numeric
//! - [`groups`]: Parse grouped sub-series data and select the most divergent pair
//! - [`format`]: Number, percentage and legend label formatting
//!
//! # Examples
//!
//! ## Choropleth classes from a feature collection
//!
//! ```
//! use serde_json::json;
//! use vizcore_data::{extract::{FeatureCollection, extract_metric_values}, format::break_labels};
//! use vizcore_stats::breaks::calculate_breaks;
//!
//! let collection: FeatureCollection = serde_json::from_value(json!({
//!     "features": [
//!         { "properties": { "rate": 10 } },
//!         { "properties": { "rate": 50 } },
//!         { "properties": { "rate": "n/a" } },
//!     ]
//! }))
//! .unwrap();
//!
//! let values = extract_metric_values(&collection.features, "rate");
//! let breaks = calculate_breaks(&values);
//! assert_eq!(break_labels(&breaks, 0)[0], "10 – 18");
//! ```
//!
//! ## Trend line from row objects
//!
//! ```
//! use serde_json::json;
//! use vizcore_data::extract::{Row, extract_points};
//! use vizcore_stats::regression::ols;
//!
//! let rows: Vec<Row> = serde_json::from_value(json!([
//!     { "x": 1, "y": 2 },
//!     { "x": 2, "y": 4 },
//!     { "x": 3, "y": 6 },
//!     { "x": null, "y": 100 },
//! ]))
//! .unwrap();
//!
//! let model = ols(&extract_points(&rows, "x", "y"));
//! assert_eq!(model.slope, 2.0);
//! ```

pub mod extract;
pub mod format;
pub mod groups;
