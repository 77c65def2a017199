//! Page-number pagination
//!
//! Listings are split into fixed-size pages numbered from 1. The last page
//! can also be requested by the keyword `last`. Page 1 always exists, even for
//! an empty listing; every other number must fall inside the listing.

use serde::Serialize;
use std::str::FromStr;

use crate::error::DomainError;

/// Number of posts shown on one listing page
pub const POSTS_PER_PAGE: u32 = 5;

/// Page requested by a client, before it is checked against the listing size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageNumber {
    #[default]
    First,
    Number(u32),
    Last,
}

impl FromStr for PageNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "last" {
            return Ok(Self::Last);
        }

        match s.parse::<u32>() {
            Ok(0) => Err(DomainError::PageNotFound(
                "That page number is less than 1".to_string(),
            )),
            Ok(n) => Ok(Self::Number(n)),
            Err(_) => Err(DomainError::PageNotFound(
                "That page number is not an integer".to_string(),
            )),
        }
    }
}

/// A resolved page: a valid 1-based number and its size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub number: u32,
    pub size: u32,
}

impl PageRequest {
    /// Resolve a requested page against the total number of items
    ///
    /// # Errors
    /// Returns `DomainError::PageNotFound` if the page lies past the last page
    pub fn resolve(requested: PageNumber, total: u64, size: u32) -> Result<Self, DomainError> {
        let size = size.max(1);
        let last = num_pages(total, size);

        let number = match requested {
            PageNumber::First => 1,
            PageNumber::Last => last,
            PageNumber::Number(n) => n,
        };

        if number > last {
            return Err(DomainError::PageNotFound(
                "That page contains no results".to_string(),
            ));
        }

        Ok(Self { number, size })
    }

    /// Row offset of the first item on this page
    #[inline]
    pub fn offset(&self) -> i64 {
        i64::from(self.number - 1) * i64::from(self.size)
    }

    /// Maximum number of rows on this page
    #[inline]
    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

/// Number of pages needed for `total` items (at least one)
pub fn num_pages(total: u64, size: u32) -> u32 {
    let size = u64::from(size.max(1));
    let pages = total.div_ceil(size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            number: request.number,
            size: request.size,
            total,
        }
    }

    pub fn num_pages(&self) -> u32 {
        num_pages(self.total, self.size)
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Convert the items while keeping the page metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total: self.total,
        }
    }
}
