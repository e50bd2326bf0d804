//! Top-k selection over a min-heap of negated keys.

use crate::domain::{Listing, ListingId};
use crate::ranking::merge_sort::merge_sort_by;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Heap key for one listing: `(-price, -rating, id)`.
///
/// The smallest key is the most expensive listing, with the better rating
/// and then the lower id winning ties.
#[derive(Debug, Clone, Copy)]
pub struct RankKey {
    pub neg_price: f64,
    pub neg_rating: f64,
    pub id: ListingId,
}

impl RankKey {
    pub fn for_listing(listing: &Listing) -> Self {
        Self {
            neg_price: negate(listing.price),
            // Unrated listings sort after every rated one at the same price.
            neg_rating: negate(listing.rating.unwrap_or(f64::NEG_INFINITY)),
            id: listing.id,
        }
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.neg_price
            .total_cmp(&other.neg_price)
            .then_with(|| self.neg_rating.total_cmp(&other.neg_rating))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankKey {}

// `0.0 - v` instead of `-v` so that a zero never turns into `-0.0`,
// which `total_cmp` would order apart from `0.0`.
fn negate(v: f64) -> f64 {
    0.0 - v
}

fn price_bits(price: f64) -> u64 {
    if price == 0.0 {
        0
    } else {
        price.to_bits()
    }
}

struct HeapEntry<'a> {
    key: RankKey,
    listing: &'a Listing,
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for HeapEntry<'_> {}

/// Picks up to `k` distinct listings from `candidates`, best first.
///
/// Prices are merge-sorted ascending, then every listing carrying each price
/// is pushed (cheapest first) into a min-heap keyed on [`RankKey`]. Popping
/// that heap yields listings by descending price, then descending rating,
/// then ascending id. A listing id is emitted at most once.
pub fn select_top<'a>(candidates: &[&'a Listing], k: usize) -> Vec<&'a Listing> {
    let prices: Vec<f64> = candidates.iter().map(|l| l.price).collect();
    let sorted_prices = merge_sort_by(&prices, &mut f64::total_cmp);

    let mut by_price: HashMap<u64, Vec<&'a Listing>> = HashMap::new();
    for listing in candidates {
        by_price
            .entry(price_bits(listing.price))
            .or_default()
            .push(*listing);
    }

    let mut heap = BinaryHeap::with_capacity(candidates.len());
    let mut previous: Option<f64> = None;
    for price in sorted_prices {
        if previous == Some(price) {
            continue;
        }
        previous = Some(price);

        if let Some(rows) = by_price.get(&price_bits(price)) {
            for &listing in rows {
                heap.push(Reverse(HeapEntry {
                    key: RankKey::for_listing(listing),
                    listing,
                }));
            }
        }
    }

    let mut top = Vec::with_capacity(k);
    let mut seen: HashSet<ListingId> = HashSet::with_capacity(k);
    while top.len() < k {
        let Some(Reverse(entry)) = heap.pop() else {
            break;
        };
        if seen.insert(entry.key.id) {
            top.push(entry.listing);
        }
    }

    top
}
