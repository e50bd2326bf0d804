use crate::domain::{Listing, Query};

/// Keeps the listings that pass every active predicate of `query`, in dataset order.
///
/// A listing without a rating never passes the rating check, whatever
/// `min_rating` is.
pub fn filter_listings<'a>(dataset: &'a [Listing], query: &Query) -> Vec<&'a Listing> {
    let area = query.search_area();

    dataset
        .iter()
        .filter(|l| l.price <= query.max_price)
        .filter(|l| l.service_fee <= query.max_service_fee)
        .filter(|l| l.rating.is_some_and(|r| r >= query.min_rating))
        .filter(|l| area.map_or(true, |a| a.contains(&l.coordinates())))
        .collect()
}
