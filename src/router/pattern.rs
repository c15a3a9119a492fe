use super::captures::Captures;
use super::error::RouterError;

use std::fmt;

use regex::Regex;
use smallvec::SmallVec;

const STAR: u8 = b'*';
const COLON: u8 = b':';

/// Matches one segment: never crosses `/`.
const SEGMENT_CLASS: &str = r"([A-Za-z0-9_\-.~%()]+)";
/// Matches one or more segments, greedy.
const GLOB_CLASS: &str = r"([A-Za-z0-9_\-.~%()/]+)";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(Box<str>),
    Named(Box<str>),
    Wildcard(Box<str>),
}

/// A compiled route pattern.
///
/// Literal text is matched verbatim, `:name` captures a single segment and
/// `*name` captures everything up to whatever the rest of the pattern needs,
/// slashes included. The pattern always has to match the whole path.
///
/// When two wildcards compete for the same text the leftmost one is greedy:
/// `/bobby/*a/*b` splits `/bobby/x/y/z` into `a = "x/y"` and `b = "z"`.
pub struct Pattern {
    source: Box<str>,
    tokens: Vec<Token>,
    regex: Regex,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, RouterError> {
        let tokens = tokenize(pattern).map_err(|msg| RouterError::pattern(pattern, msg))?;
        check_names(&tokens).map_err(|msg| RouterError::pattern(pattern, msg))?;

        let mut re = String::with_capacity(pattern.len() * 2 + 2);
        re.push('^');
        for token in &tokens {
            match token {
                Token::Literal(s) => re.push_str(&regex::escape(s)),
                Token::Named(_) => re.push_str(SEGMENT_CLASS),
                Token::Wildcard(_) => re.push_str(GLOB_CLASS),
            }
        }
        re.push('$');

        Ok(Self {
            source: pattern.into(),
            regex: Regex::new(&re)?,
            tokens,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Capture names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().filter_map(|t| match t {
            Token::Literal(_) => None,
            Token::Named(name) | Token::Wildcard(name) => Some(&**name),
        })
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Returns `None` when the path does not match. A match without
    /// placeholders yields empty captures.
    pub fn matches<'s, 'p>(&'s self, path: &'p str) -> Option<Captures<'p>>
    where
        's: 'p,
    {
        let caps = self.regex.captures(path)?;
        let mut captures = Captures::with_capacity(caps.len() - 1);
        for (i, name) in self.names().enumerate() {
            let m = caps.get(i + 1)?;
            captures.push(name, m.as_str());
        }
        Some(captures)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("tokens", &self.tokens)
            .finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[inline]
fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn tokenize(pattern: &str) -> Result<Vec<Token>, &'static str> {
    let bytes = pattern.as_bytes();
    let mut tokens: Vec<Token> = Vec::new();
    let mut literal_start: usize = 0;
    let mut i: usize = 0;

    while i < bytes.len() {
        let sigil = bytes[i];
        if sigil != COLON && sigil != STAR {
            i += 1;
            continue;
        }

        let name_start = i + 1;
        let name_len = bytes[name_start..]
            .iter()
            .take_while(|&&b| is_name_byte(b))
            .count();
        if name_len == 0 {
            return Err("capture name can not be empty");
        }

        if literal_start < i {
            tokens.push(Token::Literal(pattern[literal_start..i].into()));
        }

        let name: Box<str> = pattern[name_start..name_start + name_len].into();
        tokens.push(if sigil == COLON {
            Token::Named(name)
        } else {
            Token::Wildcard(name)
        });

        i = name_start + name_len;
        literal_start = i;
    }

    if literal_start < bytes.len() {
        tokens.push(Token::Literal(pattern[literal_start..].into()));
    }

    Ok(tokens)
}

fn check_names(tokens: &[Token]) -> Result<(), &'static str> {
    let mut seen: SmallVec<[&str; 8]> = SmallVec::new();
    for token in tokens {
        let name = match token {
            Token::Literal(_) => continue,
            Token::Named(name) | Token::Wildcard(name) => &**name,
        };
        if seen.contains(&name) {
            return Err("capture name must be unique");
        }
        seen.push(name);
    }
    Ok(())
}

#[test]
fn test_tokenize() {
    use Token::*;

    let cases: &[(&str, &[Token])] = &[
        ("", &[]),
        ("/home", &[Literal("/home".into())]),
        (
            "/pages/:key/",
            &[
                Literal("/pages/".into()),
                Named("key".into()),
                Literal("/".into()),
            ],
        ),
        (
            "/pages/:key/*rest",
            &[
                Literal("/pages/".into()),
                Named("key".into()),
                Literal("/".into()),
                Wildcard("rest".into()),
            ],
        ),
        (
            "/f/:name.html",
            &[
                Literal("/f/".into()),
                Named("name".into()),
                Literal(".html".into()),
            ],
        ),
    ];

    for &(pattern, expected) in cases {
        assert_eq!(tokenize(pattern).unwrap(), expected, "pattern = {:?}", pattern);
    }
}

#[test]
fn test_tokenize_errors() {
    assert!(tokenize("/a/:").is_err());
    assert!(tokenize("/a/*/b").is_err());
    assert!(tokenize("/a/:-b").is_err());

    let tokens = tokenize("/u/:id/p/:id").unwrap();
    assert!(check_names(&tokens).is_err());

    let tokens = tokenize("/u/:id/*id").unwrap();
    assert!(check_names(&tokens).is_err());

    let tokens = tokenize("/u/:uid/p/:pid").unwrap();
    assert!(check_names(&tokens).is_ok());
}
