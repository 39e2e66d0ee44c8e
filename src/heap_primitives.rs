// Heap index arithmetic implemented externally.
//
// A heap is a tree-like structure where every subtree's root has a better
// score than all the other nodes in the subtree, laid out in an array that is
// traversed in a non-linear way:
//
// ```text
//                           0
//              1                         2
//       3            4            5             6
//   7      8      9     10    11     12     13     14
// ```
//
// The last level will often be incomplete.

/// The parent node.
///
/// ```
/// use gridpath::heap_primitives::index_up;
/// assert_eq!(index_up(1), 0);
/// assert_eq!(index_up(2), 0);
/// assert_eq!(index_up(3), 1);
/// assert_eq!(index_up(6), 2);
/// assert_eq!(index_up(14), 6);
/// ```
#[inline(always)]
#[must_use]
pub fn index_up(i: usize) -> usize {
    (i - 1) / 2
}

/// The left child.
///
/// ```
/// use gridpath::heap_primitives::index_down_left;
/// assert_eq!(index_down_left(0), 1);
/// assert_eq!(index_down_left(1), 3);
/// assert_eq!(index_down_left(6), 13);
/// ```
#[inline(always)]
#[must_use]
pub fn index_down_left(i: usize) -> usize {
    (2 * i) + 1
}

/// The right child.
///
/// ```
/// use gridpath::heap_primitives::index_down_right;
/// assert_eq!(index_down_right(0), 2);
/// assert_eq!(index_down_right(1), 4);
/// assert_eq!(index_down_right(6), 14);
/// ```
#[inline(always)]
#[must_use]
pub fn index_down_right(i: usize) -> usize {
    2 * (i + 1)
}
