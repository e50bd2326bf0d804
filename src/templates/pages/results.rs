use crate::domain::{Listing, Query};
use crate::templates::{components::listing_card, desktop_layout};
use maud::{html, Markup};

/// What the results page needs: the parsed query, the raw location text
/// as the user typed it, and the ranked listings.
pub struct ResultsVm<'a> {
    pub query: &'a Query,
    pub location_text: Option<&'a str>,
    pub top_listings: &'a [&'a Listing],
}

pub fn results_page(vm: &ResultsVm) -> Markup {
    desktop_layout(
        "Top Listings",
        html! {
            main class="container" {
                h1 { "Top Listings" }

                section class="card" id="search-summary" {
                    h3 { "Your search" }
                    ul {
                        li { "Maximum rate: " strong { (format!("${}", vm.query.max_price)) } }
                        li { "Maximum service fee: " strong { (format!("${}", vm.query.max_service_fee)) } }
                        li { "Minimum rating: " strong { (vm.query.min_rating) } }
                        li { "Location: " strong { (vm.location_text.unwrap_or("Not provided")) } }
                        @if let Some(distance) = vm.query.max_distance {
                            li { "Maximum distance: " strong { (distance) } }
                        }
                    }
                }

                @if vm.top_listings.is_empty() {
                    p class="empty" { "No listings match your search." }
                } @else {
                    section id="top-listings" {
                        @for (i, listing) in vm.top_listings.iter().enumerate() {
                            (listing_card(i + 1, listing))
                        }
                    }
                }

                p { a href="/" { "New search" } }
            }
        },
    )
}
