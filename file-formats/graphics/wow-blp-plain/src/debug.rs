use std::fmt;

const FIRST_N_ELEMENTS: usize = 3;

/// Collections whose `Debug` output can be shortened to the first elements.
pub trait Trimmable {
    /// Element type
    type Item: fmt::Debug;

    /// All elements of the collection
    fn elements(&self) -> &[Self::Item];
}

impl<T: fmt::Debug> Trimmable for Vec<T> {
    type Item = T;
    fn elements(&self) -> &[T] {
        self
    }
}

impl<T: fmt::Debug, const N: usize> Trimmable for [T; N] {
    type Item = T;
    fn elements(&self) -> &[T] {
        self
    }
}

/// Formats the first few elements and the count of the remaining ones.
///
/// Meant for `#[debug(with = ...)]` on pixel payloads and palettes that would
/// otherwise flood logs with thousands of entries.
#[cfg(not(feature = "debug-print-all"))]
pub fn trimmed_collection_fmt<T: Trimmable + ?Sized>(n: &T, f: &mut fmt::Formatter) -> fmt::Result {
    let elements = n.elements();
    let shown = &elements[..FIRST_N_ELEMENTS.min(elements.len())];
    let rest = elements.len() - shown.len();

    if rest == 0 {
        write!(f, "{:?}", shown)
    } else {
        write!(f, "{:?} + {} elements", shown, rest)
    }
}

/// Formats every element of the collection.
#[cfg(feature = "debug-print-all")]
pub fn trimmed_collection_fmt<T: Trimmable + ?Sized>(n: &T, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{:?}", n.elements())
}
