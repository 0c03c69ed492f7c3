//! Limit/offset pagination primitives shared by roster list endpoints.
//!
//! A [`PageRequest`] is the validated form of the `limit` and `offset` query
//! parameters accepted by every list endpoint. A [`Page`] is the envelope a
//! repository returns: the requested window of rows plus the number of rows
//! that matched the query before the window was applied.
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroU32;
//!
//! use pagination::{Page, PageRequest};
//!
//! let default_limit = NonZeroU32::new(5).expect("non-zero literal");
//! let request = PageRequest::from_params(None, Some(2), default_limit).expect("valid request");
//! let rows = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let page = Page::from_slice(&rows, request);
//!
//! assert_eq!(page.items(), &[3, 4, 5, 6, 7]);
//! assert_eq!(page.total(), 8);
//! ```

use std::num::NonZeroU32;

use serde::Serialize;
use thiserror::Error;

/// Validation failures raised while building a [`PageRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// The limit was zero or negative.
    #[error("limit must be at least 1, got {value}")]
    LimitTooSmall {
        /// Rejected limit.
        value: i64,
    },
    /// The offset was negative.
    #[error("offset must not be negative, got {value}")]
    NegativeOffset {
        /// Rejected offset.
        value: i64,
    },
}

impl PageRequestError {
    /// Name of the query parameter the error refers to.
    #[must_use]
    pub const fn parameter(&self) -> &'static str {
        match self {
            Self::LimitTooSmall { .. } => "limit",
            Self::NegativeOffset { .. } => "offset",
        }
    }
}

fn saturate(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Validated window over an ordered result set.
///
/// ## Invariants
/// - `limit` is at least one.
/// - `offset` is non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: NonZeroU32,
    offset: u32,
}

impl PageRequest {
    /// Build a request from raw values.
    ///
    /// # Errors
    /// Returns [`PageRequestError::LimitTooSmall`] when `limit` is zero.
    pub fn new(limit: u32, offset: u32) -> Result<Self, PageRequestError> {
        let limit = NonZeroU32::new(limit).ok_or(PageRequestError::LimitTooSmall { value: 0 })?;
        Ok(Self { limit, offset })
    }

    /// Build a request from optional query parameters.
    ///
    /// Missing values fall back to `default_limit` and an offset of zero.
    /// Values beyond 32 bits saturate, so a huge offset yields an empty page.
    ///
    /// # Errors
    /// Returns a [`PageRequestError`] when `limit < 1` or `offset < 0`.
    pub fn from_params(
        limit: Option<i64>,
        offset: Option<i64>,
        default_limit: NonZeroU32,
    ) -> Result<Self, PageRequestError> {
        let limit = match limit {
            None => default_limit,
            Some(value) if value < 1 => return Err(PageRequestError::LimitTooSmall { value }),
            Some(value) => NonZeroU32::new(saturate(value)).unwrap_or(NonZeroU32::MAX),
        };
        let offset = match offset {
            None => 0,
            Some(value) if value < 0 => return Err(PageRequestError::NegativeOffset { value }),
            Some(value) => saturate(value),
        };
        Ok(Self { limit, offset })
    }

    /// Maximum number of rows in the page.
    #[must_use]
    pub const fn limit(self) -> u32 {
        self.limit.get()
    }

    /// Number of matching rows skipped before the page starts.
    #[must_use]
    pub const fn offset(self) -> u32 {
        self.offset
    }

    /// Copy the requested window out of an already ordered slice.
    #[must_use]
    pub fn slice<T: Clone>(self, rows: &[T]) -> Vec<T> {
        let skip = usize::try_from(self.offset).unwrap_or(usize::MAX);
        let take = usize::try_from(self.limit.get()).unwrap_or(usize::MAX);
        rows.iter().skip(skip).take(take).cloned().collect()
    }
}

/// One page of results together with the unpaginated match count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    items: Vec<T>,
    total: u64,
}

impl<T> Page<T> {
    /// Assemble a page from its rows and the total match count.
    #[must_use]
    pub const fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }

    /// Rows in this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of rows that matched before pagination.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Split the page into its rows and total.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, u64) {
        (self.items, self.total)
    }

    /// Convert every row while keeping the total.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

impl<T: Clone> Page<T> {
    /// Build a page from a fully materialised, ordered result set.
    #[must_use]
    pub fn from_slice(rows: &[T], request: PageRequest) -> Self {
        Self {
            items: request.slice(rows),
            total: u64::try_from(rows.len()).unwrap_or(u64::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit coverage for page request validation and slicing.

    use super::*;
    use rstest::rstest;

    fn five() -> NonZeroU32 {
        NonZeroU32::new(5).expect("non-zero literal")
    }

    #[rstest]
    fn missing_params_use_defaults() {
        let request = PageRequest::from_params(None, None, five()).expect("defaults are valid");
        assert_eq!(request.limit(), 5);
        assert_eq!(request.offset(), 0);
    }

    #[rstest]
    #[case(Some(0), None, PageRequestError::LimitTooSmall { value: 0 })]
    #[case(Some(-3), None, PageRequestError::LimitTooSmall { value: -3 })]
    #[case(None, Some(-1), PageRequestError::NegativeOffset { value: -1 })]
    fn invalid_params_are_rejected(
        #[case] limit: Option<i64>,
        #[case] offset: Option<i64>,
        #[case] expected: PageRequestError,
    ) {
        let err = PageRequest::from_params(limit, offset, five()).expect_err("must reject");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case(PageRequestError::LimitTooSmall { value: 0 }, "limit")]
    #[case(PageRequestError::NegativeOffset { value: -1 }, "offset")]
    fn errors_name_their_parameter(#[case] err: PageRequestError, #[case] parameter: &str) {
        assert_eq!(err.parameter(), parameter);
    }

    #[rstest]
    fn new_rejects_zero_limit() {
        assert_eq!(
            PageRequest::new(0, 4),
            Err(PageRequestError::LimitTooSmall { value: 0 })
        );
    }

    #[rstest]
    #[case(2, 0, vec![1, 2])]
    #[case(2, 3, vec![4, 5])]
    #[case(10, 4, vec![5])]
    #[case(3, 9, vec![])]
    fn from_slice_windows_rows_and_counts_everything(
        #[case] limit: u32,
        #[case] offset: u32,
        #[case] expected: Vec<i32>,
    ) {
        let rows = [1, 2, 3, 4, 5];
        let request = PageRequest::new(limit, offset).expect("valid request");
        let page = Page::from_slice(&rows, request);

        assert_eq!(page.items(), expected.as_slice());
        assert_eq!(page.total(), 5);
    }

    #[rstest]
    fn map_keeps_total() {
        let page = Page::new(vec![1, 2], 7).map(|n| n * 10);
        assert_eq!(page.into_parts(), (vec![10, 20], 7));
    }

    #[rstest]
    fn page_serialises_items_and_total() {
        let json = serde_json::to_value(Page::new(vec!["a"], 3)).expect("serialise page");
        assert_eq!(json, serde_json::json!({ "items": ["a"], "total": 3 }));
    }

    #[rstest]
    fn oversized_params_saturate() {
        let request = PageRequest::from_params(Some(i64::MAX), Some(i64::MAX), five())
            .expect("large values are accepted");
        assert_eq!(request.limit(), u32::MAX);
        assert_eq!(request.offset(), u32::MAX);

        let page = Page::from_slice(&[1, 2, 3], request);
        assert!(page.items().is_empty());
        assert_eq!(page.total(), 3);
    }
}
