use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Values captured by a successful [`Pattern`](super::Pattern) match,
/// in the order the placeholders appear in the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captures<'a> {
    buf: SmallVec<[(&'a str, &'a str); 8]>,
}

impl<'a> Captures<'a> {
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.buf
            .iter()
            .find_map(|&(k, v)| if name == k { Some(v) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.buf.iter().map(|&(k, _)| k)
    }
}

impl<'a> Deref for Captures<'a> {
    type Target = [(&'a str, &'a str)];
    fn deref(&self) -> &Self::Target {
        &*self.buf
    }
}

impl<'a> Captures<'a> {
    pub(super) fn with_capacity(n: usize) -> Self {
        Self {
            buf: SmallVec::with_capacity(n),
        }
    }

    pub(super) fn push(&mut self, name: &'a str, value: &'a str) {
        self.buf.push((name, value))
    }
}
