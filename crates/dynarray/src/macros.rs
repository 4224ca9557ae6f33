//! Literal-list construction.

/// Build a [`DynArray`](crate::DynArray) from a list of values.
///
/// - `dynarray![]` creates an empty array.
/// - `dynarray![a, b, c]` moves each value in; capacity equals the count.
/// - `dynarray![value; n]` holds `n` clones of `value`.
///
/// ```
/// use dynarray::dynarray;
///
/// let a = dynarray![1, 2, 3];
/// assert_eq!(a.capacity(), 3);
/// assert_eq!(dynarray![0u8; 4], [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! dynarray {
    () => {
        $crate::DynArray::new()
    };
    ($value:expr; $n:expr) => {
        $crate::DynArray::from_elem($n, &$value)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::DynArray::from([$($x),+])
    };
}
