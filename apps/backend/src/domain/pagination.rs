//! Fixed-size page slicing.

use std::fmt;
use std::num::NonZeroU32;

/// Number of items on every page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// 1-indexed page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(NonZeroU32::MIN);

    pub fn new(n: u32) -> Option<Self> {
        NonZeroU32::new(n).map(Self)
    }

    /// Parse a query-string value; anything but a positive integer is rejected.
    pub fn parse(raw: &str) -> Result<Self, PageParseError> {
        let n = raw
            .trim()
            .parse::<u32>()
            .map_err(|_| PageParseError(raw.to_string()))?;
        Self::new(n).ok_or_else(|| PageParseError(raw.to_string()))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Index of the first item on this page.
    pub fn offset(self) -> usize {
        (self.get() as usize - 1).saturating_mul(QUESTIONS_PER_PAGE)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParseError(pub String);

impl fmt::Display for PageParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page must be a positive integer, got '{}'", self.0)
    }
}

impl std::error::Error for PageParseError {}

/// Items of `page`; empty when the page starts past the end.
///
/// An empty page is not an error here; callers that need a result decide.
pub fn paginate<T>(items: &[T], page: PageNumber) -> &[T] {
    let start = page.offset();
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
