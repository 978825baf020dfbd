//! Dot-delimited paths.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The segment delimiter.
pub const SEPARATOR: char = '.';

/// A parsed dot-path.
///
/// Each segment is a literal map key at one nesting level. Segments are kept
/// exactly as written: nothing is validated, trimmed or normalized, so
/// `"a..b"` addresses the empty key between `a` and `b`.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DotPath {
    pub segments: Vec<String>,
}

impl DotPath {
    /// Split a path string on every `.`.
    ///
    /// Parsing never fails. A path always has at least one segment; the
    /// empty string is a single empty segment.
    ///
    /// ```rust
    /// use dot_navigator::DotPath;
    ///
    /// let path = DotPath::parse("database.primary.host");
    /// assert_eq!(path.segments.len(), 3);
    /// assert_eq!(&path[1], "primary");
    /// ```
    pub fn parse(s: &str) -> Self {
        DotPath {
            segments: s.split(SEPARATOR).map(str::to_string).collect(),
        }
    }

    /// Split into the final segment and the segments leading to it.
    pub fn split_last(&self) -> Option<(&String, &[String])> {
        self.segments.split_last()
    }
}

impl fmt::Display for DotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl FromStr for DotPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DotPath::parse(s))
    }
}

impl From<&str> for DotPath {
    fn from(s: &str) -> Self {
        DotPath::parse(s)
    }
}

impl std::ops::Index<usize> for DotPath {
    type Output = String;

    fn index(&self, i: usize) -> &Self::Output {
        &self.segments[i]
    }
}

/// Build a [`DotPath`] from a string literal.
///
/// ```rust
/// use dot_navigator::dot_path;
///
/// let p = dot_path!("server.port");
/// assert_eq!(p.to_string(), "server.port");
/// ```
#[macro_export]
macro_rules! dot_path {
    ($s:expr) => {
        $crate::DotPath::parse($s)
    };
}
