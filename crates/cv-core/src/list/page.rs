use std::fmt::{Display, Formatter};

/// One-based page cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(u32);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    /// Returns `None` for zero; pages are one-based.
    pub fn new(page: u32) -> Option<Self> {
        (page >= 1).then_some(Self(page))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Number of items preceding this page. Saturates instead of overflowing.
    pub fn offset(self, page_size: usize) -> usize {
        (self.0 as usize - 1).saturating_mul(page_size)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl Display for PageNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
