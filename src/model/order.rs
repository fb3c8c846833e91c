//! Natural ordering of entities for lexical export sorting.
//!
//! Ordering is separate from equality: two tracks with the same id are
//! equal even if their titles differ, so entities do not implement `Ord`.

use std::cmp::Ordering;

/// Three-way comparison used by the lexical sort policies.
pub trait NaturalOrder {
    fn natural_cmp(&self, other: &Self) -> Ordering;

    fn natural_lt(&self, other: &Self) -> bool {
        self.natural_cmp(other) == Ordering::Less
    }

    fn natural_gt(&self, other: &Self) -> bool {
        self.natural_cmp(other) == Ordering::Greater
    }
}

/// Compare two child sequences element-wise; a strict prefix sorts first.
pub fn cmp_sequences<'a, C, A, B>(a: A, b: B) -> Ordering
where
    C: NaturalOrder + 'a,
    A: IntoIterator<Item = &'a C>,
    B: IntoIterator<Item = &'a C>,
{
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) => match x.natural_cmp(y) {
                Ordering::Equal => continue,
                other => return other,
            },
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}

/// Order by children first, then by own title.
pub fn cmp_children_then_title<'a, C, A, B>(
    a_children: A,
    a_title: &str,
    b_children: B,
    b_title: &str,
) -> Ordering
where
    C: NaturalOrder + 'a,
    A: IntoIterator<Item = &'a C>,
    B: IntoIterator<Item = &'a C>,
{
    cmp_sequences(a_children, b_children).then_with(|| a_title.cmp(b_title))
}

/// Borrowing sort of a child slice by natural order.
pub fn sorted_refs<C: NaturalOrder>(items: &[C]) -> Vec<&C> {
    let mut refs: Vec<&C> = items.iter().collect();
    refs.sort_by(|a, b| a.natural_cmp(b));
    refs
}
