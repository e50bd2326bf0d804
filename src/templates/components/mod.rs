use crate::domain::Listing;
use maud::{html, Markup};

pub mod error;

pub use error::error_page;

pub fn button(label: &str) -> Markup {
    html! {
        button type="submit" class="btn" { (label) }
    }
}

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn listing_card(position: usize, listing: &Listing) -> Markup {
    card(
        &format!("Listing {position}: {}", listing.name),
        html! {
            dl class="listing" {
                dt { "Price" } dd class="price" { (format!("${}", listing.price)) }
                dt { "Service Fee" } dd { (format!("${}", listing.service_fee)) }
                dt { "Rating" }
                dd {
                    @match listing.rating {
                        Some(rating) => { (rating) }
                        None => { "Not rated" }
                    }
                }
                dt { "Location" } dd { "(" (listing.latitude) ", " (listing.longitude) ")" }
            }
        },
    )
}
