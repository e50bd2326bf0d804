pub mod amount;
pub mod listing;
pub mod query;

pub use listing::{Coordinates, Listing, ListingId};
pub use query::{Query, SearchArea};
