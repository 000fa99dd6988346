//! Selection of the two most divergent sub-series
//!
//! Comparison charts contrast two sub-groups (for example two demographic
//! groups) across a set of categories. This module picks the pair of
//! sub-groups whose average values differ the most.
//!
//! The input is one entry per category, each listing `(subgroup key, value)`
//! pairs. The candidate keys and their order come from the first category.
//!
//! # Examples
//!
//! ```
//! use vizcore_stats::divergence::find_most_divergent_pair;
//!
//! let categories = vec![
//!     vec![("a", Some(10.0)), ("b", Some(12.0)), ("c", Some(50.0))],
//!     vec![("a", Some(10.0)), ("b", Some(12.0)), ("c", Some(50.0))],
//! ];
//! assert_eq!(find_most_divergent_pair(&categories), Some(("a", "c")));
//! ```

/// Mean value of every subgroup key of the first category, in key order.
///
/// The mean of a key is taken over the categories in which the key has a
/// finite value; categories where it is missing or `None` are skipped. A key
/// without any value maps to `None`.
///
/// # Examples
///
/// ```
/// use vizcore_stats::divergence::subgroup_means;
///
/// let categories = vec![
///     vec![("x", Some(1.0)), ("y", None)],
///     vec![("x", Some(3.0))],
/// ];
/// assert_eq!(subgroup_means(&categories), vec![("x", Some(2.0)), ("y", None)]);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn subgroup_means<K>(categories: &[Vec<(K, Option<f64>)>]) -> Vec<(K, Option<f64>)>
where
    K: PartialEq + Clone,
{
    let Some(first) = categories.first() else {
        return vec![];
    };

    let mut keys: Vec<&K> = vec![];
    for (key, _) in first {
        if !keys.contains(&key) {
            keys.push(key);
        }
    }

    keys.into_iter()
        .map(|key| {
            let (sum, count) = categories
                .iter()
                .filter_map(|items| lookup(items, key))
                .fold((0.0, 0_usize), |(sum, count), value| (sum + value, count + 1));
            let mean = (count > 0).then(|| sum / count as f64);
            (key.clone(), mean)
        })
        .collect()
}

/// Finds the two subgroup keys whose means differ the most.
///
/// All unordered pairs of keys with a mean are examined in key order
/// (`(k0, k1), (k0, k2), ..., (k1, k2), ...`); on equal gaps the first pair
/// examined wins. The returned pair keeps that key order.
///
/// Returns `None` when fewer than two keys have any data.
#[must_use]
pub fn find_most_divergent_pair<K>(categories: &[Vec<(K, Option<f64>)>]) -> Option<(K, K)>
where
    K: PartialEq + Clone,
{
    let means = subgroup_means(categories)
        .into_iter()
        .filter_map(|(key, mean)| mean.map(|mean| (key, mean)))
        .collect::<Vec<_>>();

    let mut best: Option<(usize, usize, f64)> = None;
    for (i, (_, mean_a)) in means.iter().enumerate() {
        for (j, (_, mean_b)) in means.iter().enumerate().skip(i + 1) {
            let gap = (mean_a - mean_b).abs();
            if best.is_none_or(|(_, _, best_gap)| gap > best_gap) {
                best = Some((i, j, gap));
            }
        }
    }

    best.map(|(i, j, _)| (means[i].0.clone(), means[j].0.clone()))
}

fn lookup<K>(items: &[(K, Option<f64>)], key: &K) -> Option<f64>
where
    K: PartialEq,
{
    items
        .iter()
        .find(|(k, _)| k == key)
        .and_then(|(_, value)| *value)
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(items: &[(&'static str, Option<f64>)]) -> Vec<(&'static str, Option<f64>)> {
        items.to_vec()
    }

    #[test]
    fn test_consistent_categories() {
        let row = category(&[("A", Some(10.0)), ("B", Some(12.0)), ("C", Some(50.0))]);
        let categories = vec![row.clone(), row.clone(), row];
        assert_eq!(find_most_divergent_pair(&categories), Some(("A", "C")));
    }

    #[test]
    fn test_picks_larger_gap_from_outlier() {
        let categories = vec![category(&[
            ("A", Some(12.0)),
            ("B", Some(10.0)),
            ("C", Some(50.0)),
        ])];
        assert_eq!(find_most_divergent_pair(&categories), Some(("B", "C")));
    }

    #[test]
    fn test_missing_values_are_skipped_not_zero() {
        let categories = vec![
            category(&[("A", Some(10.0)), ("B", Some(20.0)), ("C", Some(21.0))]),
            category(&[("A", None), ("B", Some(20.0)), ("C", Some(21.0))]),
            category(&[("B", Some(20.0)), ("C", Some(21.0))]),
        ];
        assert_eq!(
            subgroup_means(&categories),
            vec![("A", Some(10.0)), ("B", Some(20.0)), ("C", Some(21.0))]
        );
        assert_eq!(find_most_divergent_pair(&categories), Some(("A", "C")));
    }

    #[test]
    fn test_keys_outside_first_category_are_ignored() {
        let categories = vec![
            category(&[("A", Some(1.0)), ("B", Some(2.0))]),
            category(&[("A", Some(1.0)), ("B", Some(2.0)), ("Z", Some(1000.0))]),
        ];
        assert_eq!(find_most_divergent_pair(&categories), Some(("A", "B")));
    }

    #[test]
    fn test_ties_prefer_first_pair() {
        let categories = vec![category(&[
            ("A", Some(0.0)),
            ("B", Some(5.0)),
            ("C", Some(5.0)),
        ])];
        assert_eq!(find_most_divergent_pair(&categories), Some(("A", "B")));
    }

    #[test]
    fn test_too_few_keys_with_data() {
        let empty: Vec<Vec<(&str, Option<f64>)>> = vec![];
        assert_eq!(find_most_divergent_pair(&empty), None);

        let single = vec![category(&[("A", Some(1.0))])];
        assert_eq!(find_most_divergent_pair(&single), None);

        let one_with_data = vec![
            category(&[("A", Some(1.0)), ("B", None)]),
            category(&[("A", Some(3.0)), ("B", Some(f64::NAN))]),
        ];
        assert_eq!(find_most_divergent_pair(&one_with_data), None);
    }

    #[test]
    fn test_owned_keys() {
        let categories = vec![vec![
            ("men".to_owned(), Some(41.5)),
            ("women".to_owned(), Some(39.0)),
        ]];
        assert_eq!(
            find_most_divergent_pair(&categories),
            Some(("men".to_owned(), "women".to_owned()))
        );
    }
}
