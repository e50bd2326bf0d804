//! Ranking core: filter the dataset, order the survivors, keep the top few.
//!
//! Nothing in here does I/O or touches shared mutable state, so the same
//! dataset can be ranked from any number of threads at once.

pub mod filter;
pub mod merge_sort;
pub mod select;

use crate::domain::{Listing, Query};
use tracing::debug;

pub use filter::filter_listings;
pub use merge_sort::{merge_sort, merge_sort_by};
pub use select::{select_top, RankKey};

/// Maximum number of listings a ranking returns.
pub const TOP_K: usize = 5;

/// Returns up to [`TOP_K`] listings that satisfy `query`, highest price first,
/// then highest rating, then lowest identifier.
pub fn rank<'a>(dataset: &'a [Listing], query: &Query) -> Vec<&'a Listing> {
    let filtered = filter_listings(dataset, query);
    let top = select_top(&filtered, TOP_K);

    debug!(
        scanned = dataset.len(),
        filtered = filtered.len(),
        returned = top.len(),
        "ranked listings"
    );

    top
}
