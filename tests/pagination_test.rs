//! Pagination math: page counts, row ranges, prev/next gating, display labels.

use finboard_frontend::pagination::{PageChange, PaginationState};
use pretty_assertions::assert_eq;

fn state(page_index: usize, page_size: usize, total_rows: usize) -> PaginationState {
    PaginationState {
        page_index,
        page_size,
        total_rows,
    }
}

#[test]
fn page_count_rounds_up() {
    assert_eq!(state(0, 10, 25).page_count(), 3);
    assert_eq!(state(0, 10, 30).page_count(), 3);
    assert_eq!(state(0, 10, 31).page_count(), 4);
    assert_eq!(state(0, 1, 5).page_count(), 5);
}

#[test]
fn page_count_is_at_least_one() {
    assert_eq!(state(0, 10, 0).page_count(), 1);
    assert_eq!(state(0, 10, 1).page_count(), 1);
}

#[test]
fn page_size_zero_is_treated_as_one() {
    assert_eq!(state(0, 0, 5).page_count(), 5);
    assert_eq!(state(0, 0, 5).first_row(), 1);
}

#[test]
fn row_range_stays_within_total() {
    for total in [1usize, 9, 10, 11, 25, 100] {
        for index in 0..state(0, 10, total).page_count() {
            let s = state(index, 10, total);
            assert!(s.first_row() <= s.last_row(), "first > last for {:?}", s);
            assert!(s.last_row() <= total, "last beyond total for {:?}", s);
        }
    }
}

#[test]
fn prev_is_none_only_on_first_page() {
    assert!(!state(0, 10, 25).has_prev());
    assert_eq!(state(0, 10, 25).prev(), None);

    assert!(state(1, 10, 25).has_prev());
    assert_eq!(
        state(1, 10, 25).prev(),
        Some(PageChange {
            page_index: 0,
            page_size: 10
        })
    );
}

#[test]
fn next_is_none_only_on_last_page() {
    assert!(state(0, 10, 25).has_next());
    assert_eq!(
        state(0, 10, 25).next(),
        Some(PageChange {
            page_index: 1,
            page_size: 10
        })
    );

    assert!(!state(2, 10, 25).has_next());
    assert_eq!(state(2, 10, 25).next(), None);
}

#[test]
fn next_and_prev_keep_page_size() {
    let change = state(3, 25, 1000).next().unwrap();
    assert_eq!(change.page_index, 4);
    assert_eq!(change.page_size, 25);

    let change = state(3, 25, 1000).prev().unwrap();
    assert_eq!(change.page_index, 2);
    assert_eq!(change.page_size, 25);
}

#[test]
fn both_directions_disabled_on_single_page() {
    let s = state(0, 10, 7);
    assert!(!s.has_prev());
    assert!(!s.has_next());
    assert_eq!(s.page_count(), 1);
}

#[test]
fn first_page_of_twenty_five() {
    let s = state(0, 10, 25);
    assert_eq!(s.summary(), "Showing 1 to 10 of 25 total");
    assert_eq!(s.page_label(), "Page 1 of 3");
    assert!(!s.has_prev());
    assert!(s.has_next());
}

#[test]
fn last_page_of_twenty_five() {
    let s = state(2, 10, 25);
    assert_eq!(s.summary(), "Showing 21 to 25 of 25 total");
    assert_eq!(s.page_label(), "Page 3 of 3");
    assert!(s.has_prev());
    assert!(!s.has_next());
}
