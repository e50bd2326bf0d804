// templates/pages/home.rs

use crate::forms::{
    FIELD_LOCATION, FIELD_MAX_DISTANCE, FIELD_MAX_PRICE, FIELD_MAX_SERVICE_FEE, FIELD_MIN_RATING,
};
use crate::templates::{components::button, desktop_layout};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Find a Stay",
        html! {
            main class="container" {
                h1 { "Find the top 5 stays for your budget" }

                form method="post" action="/results" class="search-form" {
                    label for=(FIELD_MAX_PRICE) { "Maximum nightly rate" }
                    input type="text" id=(FIELD_MAX_PRICE) name=(FIELD_MAX_PRICE) placeholder="$250" required;

                    label for=(FIELD_MAX_SERVICE_FEE) { "Maximum service fee" }
                    input type="text" id=(FIELD_MAX_SERVICE_FEE) name=(FIELD_MAX_SERVICE_FEE) placeholder="$50" required;

                    label for=(FIELD_MIN_RATING) { "Minimum rating" }
                    input type="number" id=(FIELD_MIN_RATING) name=(FIELD_MIN_RATING) min="0" max="5" step="0.1" placeholder="4.5" required;

                    label for=(FIELD_LOCATION) { "Location (latitude, longitude)" }
                    input type="text" id=(FIELD_LOCATION) name=(FIELD_LOCATION) placeholder="40.7128,-74.0060";

                    label for=(FIELD_MAX_DISTANCE) { "Maximum distance (degrees)" }
                    input type="text" id=(FIELD_MAX_DISTANCE) name=(FIELD_MAX_DISTANCE) placeholder="0.1";

                    p class="microcopy" {
                        "Location only narrows the search when a maximum distance is given too."
                    }

                    (button("Search"))
                }
            }
        },
    )
}
