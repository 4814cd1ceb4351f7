// Argument vector forwarded to the wrapped executable
use std::ffi::OsString;

/// Ordered, uninterpreted arguments for the child process.
///
/// Arguments are kept as `OsString` so non-UTF-8 values reach the child
/// byte-for-byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentVector(Vec<OsString>);

impl ArgumentVector {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        args.into_iter().map(Into::into).collect()
    }

    /// Build from a full process argv, dropping the program name in position 0
    pub fn from_argv<I>(argv: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        argv.into_iter().skip(1).collect()
    }

    pub fn as_slice(&self) -> &[OsString] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<OsString> {
        self.0
    }
}

impl FromIterator<OsString> for ArgumentVector {
    fn from_iter<T: IntoIterator<Item = OsString>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
