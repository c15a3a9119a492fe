use crate::router::Captures;

use std::iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator};
use std::str::FromStr;

/// Owned captures handed to route handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    path: Box<str>,
    offset: Vec<(Box<str>, usize, usize)>, // (name, start, end)
}

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.offset.iter().find_map(|&(ref n, s, e)| {
            if &**n == name {
                Some(&self.path[s..e])
            } else {
                None
            }
        })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.offset.iter().any(|(n, _, _)| &**n == name)
    }

    pub fn len(&self) -> usize {
        self.offset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offset.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            path: &self.path,
            offset: self.offset.iter(),
        }
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = IntoIter;
    fn into_iter(self) -> IntoIter {
        IntoIter {
            path: self.path,
            offset: self.offset.into_iter(),
        }
    }
}

impl Params {
    /// `caps` must borrow from `path`.
    pub(crate) fn new<'a>(path: &'a str, caps: &Captures<'a>) -> Self {
        let base = path.as_ptr() as usize;
        let offset = caps
            .iter()
            .map(|&(name, value)| {
                let start = (value.as_ptr() as usize) - base;
                let end = start + value.len();
                (name.into(), start, end)
            })
            .collect();
        Self {
            path: path.into(),
            offset,
        }
    }
}

pub struct Iter<'a> {
    path: &'a str,
    offset: std::slice::Iter<'a, (Box<str>, usize, usize)>,
}

pub struct IntoIter {
    path: Box<str>,
    offset: std::vec::IntoIter<(Box<str>, usize, usize)>,
}

macro_rules! delegate {
    (iter, $method:tt) => {
        fn $method(&mut self) -> Option<Self::Item> {
            let &(ref n, s, e) = self.offset.$method()?;
            Some((&**n, &self.path[s..e]))
        }
    };

    (into_iter, $method:tt) => {
        fn $method(&mut self) -> Option<Self::Item> {
            let (n, s, e) = self.offset.$method()?;
            Some((n.into(), self.path[s..e].to_owned()))
        }
    };

    (size_hint) => {
        fn size_hint(&self) -> (usize, Option<usize>) {
            self.offset.size_hint()
        }
    };

    (len) => {
        fn len(&self) -> usize {
            self.offset.len()
        }
    };
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);
    delegate!(iter, next);
    delegate!(size_hint);
}

impl DoubleEndedIterator for Iter<'_> {
    delegate!(iter, next_back);
}

impl Iterator for IntoIter {
    type Item = (String, String);
    delegate!(into_iter, next);
    delegate!(size_hint);
}

impl DoubleEndedIterator for IntoIter {
    delegate!(into_iter, next_back);
}

impl FusedIterator for Iter<'_> {}
impl FusedIterator for IntoIter {}

impl ExactSizeIterator for Iter<'_> {
    delegate!(len);
}

impl ExactSizeIterator for IntoIter {
    delegate!(len);
}

#[test]
fn test_params() {
    let pattern = crate::router::Pattern::new("/pages/:key/*rest").unwrap();
    let path = "/pages/test/something/deep";
    let caps = pattern.matches(path).unwrap();
    let params = Params::new(path, &caps);

    assert_eq!(params.len(), 2);
    assert_eq!(params.get("key"), Some("test"));
    assert_eq!(params.get("rest"), Some("something/deep"));
    assert_eq!(params.get("other"), None);
    assert!(params.contains("rest"));
    assert!(!params.contains("other"));

    let v: Vec<(&str, &str)> = params.iter().collect();
    assert_eq!(v, [("key", "test"), ("rest", "something/deep")]);

    let v: Vec<(String, String)> = params.into_iter().rev().collect();
    assert_eq!(v[0], ("rest".to_owned(), "something/deep".to_owned()));
}
