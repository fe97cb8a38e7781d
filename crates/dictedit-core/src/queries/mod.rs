//! Read-only projections over the staged buffer
//!
//! Key principles:
//! - Queries never mutate the buffer and never cache: every call sorts and
//!   filters the current contents afresh
//! - Sorting is stable, so ties keep their buffer order
//! - The whole result is returned at once (no pagination)

pub mod entry_queries;

pub use entry_queries::{
    query_entries, sort_entries, QueryParams, QueryResponse, SortDirection, SortSpec,
};
