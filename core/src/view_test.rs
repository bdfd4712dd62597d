use pretty_assertions::assert_eq;

use super::{ArrayView, View};
use crate::error::ViewError;

const PRIMARY: [i64; 20] = [
    5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55, 60, 65, 70, 75, 80, 85, 90, 95, 100,
];

// ============================================================================
// Direct views
// ============================================================================

#[test]
fn direct_view_exposes_every_element() {
    let view = View::direct(&PRIMARY);

    assert_eq!(view.len(), 20);
    assert_eq!(view.origin(), 0);
    assert_eq!(view.get(0), Some(5));
    assert_eq!(view.get(19), Some(100));
    assert_eq!(view.get(20), None);
}

#[test]
fn direct_view_over_empty_storage() {
    let empty: [i64; 0] = [];
    let view = View::direct(&empty);

    assert!(view.is_empty());
    assert_eq!(view.get(0), None);
}

// ============================================================================
// Offset views
// ============================================================================

#[test]
fn offset_view_hides_elements_before_origin() {
    let storage: Vec<i64> = (0..20).collect();
    let view = View::offset(&storage, 5).unwrap();

    assert_eq!(view.len(), 15);
    assert_eq!(view.origin(), 5);
    assert_eq!(view.get(0), Some(5));
    assert_eq!(view.get(14), Some(19));
    assert_eq!(view.get(15), None);
}

#[test]
fn offset_view_aliases_its_storage() {
    let storage: Vec<i64> = (0..20).collect();
    let view = View::offset(&storage, 5).unwrap();

    assert!(core::ptr::eq(view.storage(), storage.as_slice()));
    assert!(core::ptr::eq(&view.as_slice()[0], &storage[5]));
}

#[test]
fn offset_at_end_is_empty() {
    let storage = [1i64, 2, 3];
    let view = View::offset(&storage, 3).unwrap();

    assert!(view.is_empty());
    assert_eq!(view.get(0), None);
}

#[test]
fn offset_past_end_is_rejected() {
    let storage = [1i64, 2, 3];
    assert_eq!(
        View::offset(&storage, 4).unwrap_err(),
        ViewError::OffsetOutOfRange { offset: 4, len: 3 }
    );
}

#[test]
fn offset_get_does_not_overflow() {
    let storage = [1i64, 2, 3];
    let view = View::offset(&storage, 1).unwrap();
    assert_eq!(view.get(usize::MAX), None);
}

// ============================================================================
// Row views
// ============================================================================

#[test]
fn row_view_selects_one_row_of_fixed_matrix() {
    let matrix = [[1i64, 2, 3], [4, 5, 6]];
    let view = View::row(&matrix, 1).unwrap();

    assert_eq!(view.len(), 3);
    assert_eq!(view.as_slice(), &[4, 5, 6]);
    assert!(core::ptr::eq(view.as_slice(), matrix[1].as_slice()));
}

#[test]
fn row_view_over_ragged_rows() {
    let rows: Vec<Vec<i64>> = vec![vec![1], vec![2, 3, 4, 5]];
    let view = View::row(&rows, 1).unwrap();

    assert_eq!(view.len(), 4);
    assert_eq!(view.get(3), Some(5));
}

#[test]
fn row_past_last_is_rejected() {
    let matrix = [[1i64, 2], [3, 4]];
    assert_eq!(
        View::row(&matrix, 2).unwrap_err(),
        ViewError::RowOutOfRange { row: 2, rows: 2 }
    );
}

// ============================================================================
// Plain slices and arrays
// ============================================================================

#[test]
fn slices_and_arrays_are_views() {
    let array = [7i64, 8, 9];
    let slice: &[i64] = &array[1..];

    assert_eq!(ArrayView::len(&array), 3);
    assert_eq!(ArrayView::get(&array, 2), Some(9));
    assert_eq!(ArrayView::len(slice), 2);
    assert_eq!(ArrayView::get(slice, 0), Some(8));
    assert_eq!(ArrayView::get(slice, 2), None);
}

#[test]
fn debug_shows_only_reachable_elements() {
    let storage = [1i64, 2, 3, 4];
    let view = View::offset(&storage, 2).unwrap();
    assert_eq!(
        format!("{view:?}"),
        "View { origin: 2, elements: [3, 4] }"
    );
}
