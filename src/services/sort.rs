//! Sort engine
//!
//! Sorting returns a new view; the input view is left untouched. The sort is
//! stable, so records that compare equal keep their previous relative order in
//! both directions.

use crate::models::{SortSpec, View};
use crate::storage::Dataset;

/// Reorder a view by a column and direction
pub fn sort(dataset: &Dataset, view: &View, spec: SortSpec) -> View {
    let mut rows: Vec<_> = view
        .ids()
        .iter()
        .filter_map(|id| dataset.get(*id).map(|r| (*id, r)))
        .collect();

    rows.sort_by(|(_, a), (_, b)| spec.compare(a, b));

    View::from_ids(rows.into_iter().map(|(id, _)| id).collect(), Some(spec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Column, Money, Record, SortState};

    fn record(agency: &str, department: Option<&str>, modified: i64, cash: i64) -> Record {
        let r = Record::new(2024, agency)
            .with_amounts(Money::from_dollars(modified), Money::from_dollars(cash));
        match department {
            Some(d) => r.with_department(d),
            None => r,
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            record("Charlie", Some("Facilities"), 100, 160),
            record("alpha", None, 500, 400),
            record("Bravo", Some("Arts"), 200, 210),
            record("Delta", Some("Busing"), 50, 50),
        ])
    }

    fn agencies(ds: &Dataset, view: &View) -> Vec<String> {
        view.records(ds).map(|r| r.agency.clone()).collect()
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let ds = dataset();
        let view = View::all(&ds);
        let before = view.clone();
        let _ = sort(&ds, &view, SortSpec::ascending(Column::Modified));
        assert_eq!(view, before);
    }

    #[test]
    fn test_numeric_sort() {
        let ds = dataset();
        let sorted = sort(&ds, &View::all(&ds), SortSpec::ascending(Column::Modified));
        assert_eq!(agencies(&ds, &sorted), vec!["Delta", "Charlie", "Bravo", "alpha"]);
        assert_eq!(sorted.sort(), Some(SortSpec::ascending(Column::Modified)));
    }

    #[test]
    fn test_ascending_text_sort_is_correct() {
        let ds = dataset();
        let sorted = sort(&ds, &View::all(&ds), SortSpec::ascending(Column::Agency));
        assert_eq!(agencies(&ds, &sorted), vec!["Bravo", "Charlie", "Delta", "alpha"]);
    }

    #[test]
    fn test_text_sort_direction_symmetry() {
        let ds = dataset();
        let asc = sort(&ds, &View::all(&ds), SortSpec::ascending(Column::Agency));
        let desc = sort(&ds, &asc, SortSpec::descending(Column::Agency));
        let mut reversed = agencies(&ds, &asc);
        reversed.reverse();
        assert_eq!(agencies(&ds, &desc), reversed);
    }

    #[test]
    fn test_toggle_twice_reverses_for_every_column() {
        // all keys distinct, so a second click is an exact reversal
        let ds = Dataset::from_records(vec![
            Record::new(2023, "B").with_department("y").with_budget_name("q")
                .with_amounts(Money::from_dollars(10), Money::from_dollars(30)),
            Record::new(2025, "A").with_department("z").with_budget_name("p")
                .with_amounts(Money::from_dollars(30), Money::from_dollars(20)),
            Record::new(2024, "C").with_department("x").with_budget_name("r")
                .with_amounts(Money::from_dollars(20), Money::from_dollars(21)),
        ]);

        for column in Column::ALL {
            let mut state = SortState::new();
            let first = sort(&ds, &View::all(&ds), state.toggle(column));
            let second = sort(&ds, &first, state.toggle(column));
            let mut expected = first.ids().to_vec();
            expected.reverse();
            assert_eq!(second.ids(), expected.as_slice(), "column {}", column);
        }
    }

    #[test]
    fn test_status_sort_by_rank() {
        let ds = dataset();
        let sorted = sort(&ds, &View::all(&ds), SortSpec::descending(Column::Status));
        // Charlie critical, Bravo over, alpha under, Delta on track
        assert_eq!(agencies(&ds, &sorted), vec!["Charlie", "Bravo", "alpha", "Delta"]);
    }

    #[test]
    fn test_ties_keep_prior_order() {
        let ds = Dataset::from_records(vec![
            record("First", None, 100, 100),
            record("Second", None, 100, 100),
            record("Third", None, 50, 50),
        ]);
        let asc = sort(&ds, &View::all(&ds), SortSpec::ascending(Column::Modified));
        assert_eq!(agencies(&ds, &asc), vec!["Third", "First", "Second"]);
        let desc = sort(&ds, &View::all(&ds), SortSpec::descending(Column::Modified));
        assert_eq!(agencies(&ds, &desc), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_sort_empty_view() {
        let ds = dataset();
        let sorted = sort(&ds, &View::default(), SortSpec::ascending(Column::Year));
        assert!(sorted.is_empty());
    }
}
