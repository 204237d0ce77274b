//! Sorting by primary and secondary float-valued criteria.

use std::cmp::Ordering;

/// Direction of a float-criterion sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

/// A sort criterion: a float key extracted per element plus a
/// direction.
pub struct SortCriterion<F> {
    /// Extracts the float value to sort on.
    pub key: F,
    /// Sort direction for this criterion.
    pub direction: SortDirection,
}

/// Stable-sort `items` by a primary criterion, falling back to a
/// secondary criterion when two primary values are equal within
/// `tolerance`.
pub fn sort_by_float_criteria<T, P, S>(
    mut items: Vec<T>,
    primary: &SortCriterion<P>,
    secondary: &SortCriterion<S>,
    tolerance: f64,
) -> Vec<T>
where
    P: Fn(&T) -> f64,
    S: Fn(&T) -> f64,
{
    items.sort_by(|a, b| {
        let result = compare(a, b, &primary.key, primary.direction, tolerance);
        if result == Ordering::Equal {
            compare(a, b, &secondary.key, secondary.direction, tolerance)
        } else {
            result
        }
    });
    items
}

fn compare<T, F>(a: &T, b: &T, key: &F, direction: SortDirection, tolerance: f64) -> Ordering
where
    F: Fn(&T) -> f64,
{
    let a_value = key(a);
    let b_value = key(b);
    if (a_value - b_value).abs() < tolerance {
        return Ordering::Equal;
    }
    let ascending = a_value.partial_cmp(&b_value).unwrap_or(Ordering::Equal);
    match direction {
        SortDirection::Ascending => ascending,
        SortDirection::Descending => ascending.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sort(items: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
        sort_by_float_criteria(
            items,
            &SortCriterion {
                key: |item: &(f64, f64)| item.0,
                direction: SortDirection::Ascending,
            },
            &SortCriterion {
                key: |item: &(f64, f64)| item.1,
                direction: SortDirection::Descending,
            },
            1.0,
        )
    }

    #[test]
    fn test_primary_ascending() {
        let sorted = sort(vec![(20.0, 1.0), (10.0, 5.0), (15.0, 8.0)]);
        let primaries: Vec<f64> = sorted.iter().map(|i| i.0).collect();
        assert_eq!(primaries, vec![10.0, 15.0, 20.0]);
    }

    #[test]
    fn test_secondary_descending_on_tie() {
        let sorted = sort(vec![(10.0, 5.0), (10.0, 8.0), (20.0, 1.0)]);
        assert_eq!(sorted, vec![(10.0, 8.0), (10.0, 5.0), (20.0, 1.0)]);
    }

    #[test]
    fn test_tolerance_groups_near_equal_values() {
        // 10.0 and 10.4 are within the 1.0 tolerance, so the secondary
        // criterion decides.
        let sorted = sort(vec![(10.0, 2.0), (10.4, 9.0)]);
        assert_eq!(sorted, vec![(10.4, 9.0), (10.0, 2.0)]);
    }

    #[test]
    fn test_fully_equal_keeps_input_order() {
        let sorted = sort(vec![(10.0, 5.0), (10.2, 5.5)]);
        assert_eq!(sorted, vec![(10.0, 5.0), (10.2, 5.5)]);
    }
}
