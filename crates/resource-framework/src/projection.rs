//! # View Projection
//!
//! A pure function from `(records, criteria, sort)` to the rows a table should show. It never
//! mutates the store and nothing is cached: callers fetch a fresh `list()` and project it
//! whenever their filters or sort change.
//!
//! - Criteria are AND-ed, so their order does not matter.
//! - Sorting is single-field and stable (`slice::sort_by`): rows with equal keys keep the
//!   order they had after filtering.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Debug;

/// A record whose text fields can be filtered and sorted on.
pub trait Projectable {
    /// The columns of the table (e.g. `UserField::Email`).
    type Field: Copy + Eq + Debug;

    fn field_value(&self, field: Self::Field) -> &str;
}

/// One filter predicate over a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion<F> {
    /// Case-insensitive substring match. An empty needle matches everything.
    Contains { field: F, needle: String },
    /// Exact, case-sensitive match.
    Equals { field: F, value: String },
}

impl<F: Copy> Criterion<F> {
    pub fn contains(field: F, needle: impl Into<String>) -> Self {
        Criterion::Contains {
            field,
            needle: needle.into(),
        }
    }

    pub fn equals(field: F, value: impl Into<String>) -> Self {
        Criterion::Equals {
            field,
            value: value.into(),
        }
    }

    pub fn matches<T: Projectable<Field = F>>(&self, record: &T) -> bool {
        match self {
            Criterion::Contains { field, needle } => record
                .field_value(*field)
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            Criterion::Equals { field, value } => record.field_value(*field) == value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Which column a table is sorted by, and which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Copy + Eq> SortSpec<F> {
    pub fn ascending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }

    /// Column-header click: the current column flips direction, another column starts
    /// ascending.
    pub fn toggle(&mut self, field: F) {
        if field == self.field {
            self.direction = self.direction.reversed();
        } else {
            *self = Self::ascending(field);
        }
    }
}

/// Filter then sort `records` into a new vector.
pub fn project<T>(
    records: &[T],
    criteria: &[Criterion<T::Field>],
    sort: &SortSpec<T::Field>,
) -> Vec<T>
where
    T: Projectable + Clone,
{
    let mut rows: Vec<T> = records
        .iter()
        .filter(|record| criteria.iter().all(|criterion| criterion.matches(*record)))
        .cloned()
        .collect();
    rows.sort_by(|a, b| {
        sort.direction
            .apply(a.field_value(sort.field).cmp(b.field_value(sort.field)))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        key: u32,
        name: &'static str,
        team: &'static str,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Col {
        Name,
        Team,
    }

    impl Projectable for Row {
        type Field = Col;

        fn field_value(&self, field: Col) -> &str {
            match field {
                Col::Name => self.name,
                Col::Team => self.team,
            }
        }
    }

    fn rows() -> Vec<Row> {
        [(1, "Carol", "ops"), (2, "alice", "dev"), (3, "Bob", "ops"), (4, "Alina", "dev")]
            .into_iter()
            .map(|(key, name, team)| Row { key, name, team })
            .collect()
    }

    fn keys(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|r| r.key).collect()
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let view = project(
            &rows(),
            &[Criterion::contains(Col::Name, "AL")],
            &SortSpec::ascending(Col::Name),
        );
        assert_eq!(keys(&view), vec![4, 2]);
    }

    #[test]
    fn test_equals_is_exact() {
        let view = project(
            &rows(),
            &[Criterion::equals(Col::Team, "Ops")],
            &SortSpec::ascending(Col::Name),
        );
        assert!(view.is_empty());
    }

    #[test]
    fn test_empty_needle_matches_everything() {
        let view = project(
            &rows(),
            &[Criterion::contains(Col::Name, "")],
            &SortSpec::ascending(Col::Team),
        );
        assert_eq!(view.len(), 4);
    }

    #[test]
    fn test_criteria_order_does_not_matter() {
        let a = Criterion::contains(Col::Name, "a");
        let b = Criterion::equals(Col::Team, "dev");
        let sort = SortSpec::ascending(Col::Name);

        let forward = project(&rows(), &[a.clone(), b.clone()], &sort);
        let backward = project(&rows(), &[b, a], &sort);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let view = project(&rows(), &[], &SortSpec::ascending(Col::Team));
        // dev rows keep 2 before 4, ops rows keep 1 before 3
        assert_eq!(keys(&view), vec![2, 4, 1, 3]);

        let view = project(&rows(), &[], &SortSpec::descending(Col::Team));
        assert_eq!(keys(&view), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_sort_is_lexicographic() {
        // Uppercase sorts before lowercase, as in a plain string comparison.
        let view = project(&rows(), &[], &SortSpec::ascending(Col::Name));
        assert_eq!(keys(&view), vec![4, 3, 1, 2]);
    }

    #[test]
    fn test_projection_leaves_input_untouched() {
        let input = rows();
        let _ = project(&input, &[], &SortSpec::descending(Col::Name));
        assert_eq!(input, rows());
    }

    #[test]
    fn test_toggle_flips_then_resets() {
        let mut sort = SortSpec::ascending(Col::Name);
        sort.toggle(Col::Name);
        assert_eq!(sort, SortSpec::descending(Col::Name));
        sort.toggle(Col::Team);
        assert_eq!(sort, SortSpec::ascending(Col::Team));
    }
}
