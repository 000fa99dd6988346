//! Grouped sub-series data for comparison charts
//!
//! Comparison charts receive one object per category, each mapping subgroup
//! keys to a record holding the plotted value:
//!
//! ```json
//! {
//!   "Housing":   { "18-29": { "value": 31.0, "n": 412 }, "65+": { "value": 62.0, "n": 388 } },
//!   "Transport": { "18-29": { "value": 44.0, "n": 409 }, "65+": { "value": null, "n": 12 } }
//! }
//! ```
//!
//! [`GroupedValues`] keeps category and subgroup order as written in the
//! document, which decides tie-breaking in
//! [`find_most_divergent_pair`](vizcore_stats::divergence::find_most_divergent_pair).

use serde_json::Value;
use vizcore_stats::divergence;

use crate::extract;

/// Field of a subgroup record that holds the plotted value.
pub const DEFAULT_VALUE_FIELD: &str = "value";

/// Error returned when grouped data does not have the expected shape.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum GroupsError {
    #[display("grouped data must be an object of categories")]
    NotAnObject,
    #[display("category '{category}' must be an object of subgroups")]
    CategoryNotAnObject { category: String },
    #[display("subgroup '{subgroup}' of category '{category}' must be an object")]
    SubgroupNotAnObject { category: String, subgroup: String },
}

/// One category and the values of its subgroups.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    /// `(subgroup key, value)` in document order; `None` when the value is
    /// missing or not numeric.
    pub values: Vec<(String, Option<f64>)>,
}

/// Categories of subgroup values in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedValues {
    pub categories: Vec<Category>,
}

impl GroupedValues {
    /// Parses grouped data, reading `value_field` from each subgroup record.
    ///
    /// Values follow the [`extract`] filtering policy; a subgroup record
    /// without a usable value is kept with `None` so the key still counts as
    /// present in its category.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use vizcore_data::groups::{DEFAULT_VALUE_FIELD, GroupedValues};
    ///
    /// let groups = GroupedValues::from_json(
    ///     &json!({
    ///         "Housing": { "a": { "value": 10 }, "b": { "value": 12 }, "c": { "value": 50 } },
    ///         "Transport": { "a": { "value": 10 }, "b": { "value": null }, "c": { "value": 50 } },
    ///     }),
    ///     DEFAULT_VALUE_FIELD,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(groups.categories.len(), 2);
    /// assert_eq!(groups.most_divergent_pair(), Some(("a".to_owned(), "c".to_owned())));
    /// ```
    pub fn from_json(value: &Value, value_field: &str) -> Result<Self, GroupsError> {
        let Value::Object(categories) = value else {
            return Err(GroupsError::NotAnObject);
        };

        let categories = categories
            .iter()
            .map(|(name, subgroups)| {
                let Value::Object(subgroups) = subgroups else {
                    return Err(GroupsError::CategoryNotAnObject {
                        category: name.clone(),
                    });
                };
                let values = subgroups
                    .iter()
                    .map(|(key, record)| match record {
                        Value::Object(fields) => {
                            Ok((key.clone(), extract::field_value(fields, value_field)))
                        }
                        Value::Null => Ok((key.clone(), None)),
                        _ => Err(GroupsError::SubgroupNotAnObject {
                            category: name.clone(),
                            subgroup: key.clone(),
                        }),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Category {
                    name: name.clone(),
                    values,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { categories })
    }

    fn series(&self) -> Vec<Vec<(String, Option<f64>)>> {
        self.categories.iter().map(|c| c.values.clone()).collect()
    }

    /// Mean value per subgroup key of the first category.
    #[must_use]
    pub fn subgroup_means(&self) -> Vec<(String, Option<f64>)> {
        divergence::subgroup_means(&self.series())
    }

    /// The two subgroups whose means differ the most.
    #[must_use]
    pub fn most_divergent_pair(&self) -> Option<(String, String)> {
        divergence::find_most_divergent_pair(&self.series())
    }
}
