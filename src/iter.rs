use std::slice::Iter as SliceIter;

use crate::reflect::Reflect;

/// Iterates the named values of `E` with their names, ascending by integer.
#[derive(Debug, Clone)]
pub struct EnumIter<E: Reflect> {
    iter: SliceIter<'static, (E, &'static str)>,
}

impl<E: Reflect> EnumIter<E> {
    pub fn new() -> Self {
        Self::from_slice(E::ENTRIES)
    }

    pub fn from_slice(slice: &'static [(E, &'static str)]) -> Self {
        Self { iter: slice.iter() }
    }

    pub fn as_slice(&self) -> &'static [(E, &'static str)] {
        self.iter.as_slice()
    }
}

impl<E: Reflect> Default for EnumIter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Reflect> ExactSizeIterator for EnumIter<E> {}

impl<E: Reflect> DoubleEndedIterator for EnumIter<E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().copied()
    }
}

impl<E: Reflect> Iterator for EnumIter<E> {
    type Item = (E, &'static str);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.iter.len();
        (len, Some(len))
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.iter.len()
    }

    fn last(self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.iter.last().copied()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.iter.nth(n).copied()
    }
}
