#![forbid(unsafe_code)]

//! Row and column reordering after a drag.

/// Move the element at `from` to position `to`, in place.
///
/// An out-of-range `from` leaves `items` unchanged. `to` is clamped to the
/// last slot.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() {
        return;
    }
    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
}

/// Copy of `items` with the element at `from` moved to `to`.
#[must_use]
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    move_item(&mut moved, from, to);
    moved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_forward() {
        assert_eq!(array_move(&['a', 'b', 'c', 'd'], 0, 2), vec!['b', 'c', 'a', 'd']);
    }

    #[test]
    fn move_backward() {
        assert_eq!(array_move(&['a', 'b', 'c', 'd'], 3, 1), vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn same_position_is_identity() {
        assert_eq!(array_move(&[1, 2, 3], 1, 1), vec![1, 2, 3]);
    }

    #[test]
    fn target_past_end_appends() {
        assert_eq!(array_move(&[1, 2, 3], 0, 10), vec![2, 3, 1]);
    }

    #[test]
    fn source_out_of_range_is_noop() {
        assert_eq!(array_move(&[1, 2, 3], 5, 0), vec![1, 2, 3]);
        assert!(array_move::<u8>(&[], 0, 0).is_empty());
    }

    #[test]
    fn original_is_untouched() {
        let items = vec!["x", "y"];
        let moved = array_move(&items, 0, 1);
        assert_eq!(items, ["x", "y"]);
        assert_eq!(moved, ["y", "x"]);
    }

    #[test]
    fn in_place_matches_copy() {
        let mut items = vec![10, 20, 30, 40, 50];
        let expected = array_move(&items, 4, 0);
        move_item(&mut items, 4, 0);
        assert_eq!(items, expected);
    }
}
