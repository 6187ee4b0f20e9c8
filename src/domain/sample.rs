//! Built-in sample journal.
//!
//! Seeded into an empty or unreadable store on first load so a new journal is
//! never blank.

use super::trip::Trip;

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Returns the sample trips, ids `1..=n` in display order.
#[must_use]
pub fn sample_trips() -> Vec<Trip> {
    vec![
        Trip {
            rating: 5,
            highlights: lines(&["Sunset at Oia", "Fresh seafood in Ammoudi Bay"]),
            lowlights: lines(&["Crowded cruise-ship afternoons"]),
            image: "https://images.unsplash.com/photo-1570077188670-e3a8d69ac5ff".to_string(),
            image_alt: "White houses above the caldera in Santorini".to_string(),
            notes: "Book the caldera hike early in the morning.".to_string(),
            expenses: "Around 1200 EUR for a week".to_string(),
            tags: lines(&["islands", "beach", "food"]),
            ..Trip::new(
                "Europe",
                "Greece",
                "Santorini",
                "June 2023",
                "A week of blue domes, volcanic beaches and long dinners.",
            )
            .with_id(1)
        },
        Trip {
            rating: 4,
            highlights: lines(&["Fushimi Inari at dawn", "Kaiseki dinner in Gion"]),
            lowlights: lines(&["Rainy second half"]),
            image: "https://images.unsplash.com/photo-1493976040374-85c8e12f0c0e".to_string(),
            image_alt: "Torii gates along a path in Kyoto".to_string(),
            notes: "The bus pass paid for itself on day two.".to_string(),
            expenses: "About 180000 JPY".to_string(),
            tags: lines(&["temples", "culture", "food"]),
            ..Trip::new(
                "Asia",
                "Japan",
                "Kyoto",
                "April 2022",
                "Cherry blossom season among temples and tea houses.",
            )
            .with_id(2)
        },
        Trip {
            rating: 4,
            highlights: lines(&["Table Mountain cable car", "Cape Point drive"]),
            lowlights: lines(&["Wind on the beaches"]),
            image: "https://images.unsplash.com/photo-1580060839134-75a5edca2e99".to_string(),
            image_alt: "Table Mountain above Cape Town".to_string(),
            notes: String::new(),
            expenses: "Roughly 1500 USD".to_string(),
            tags: lines(&["mountains", "coast", "wine"]),
            ..Trip::new(
                "Africa",
                "South Africa",
                "Cape Town",
                "November 2021",
                "Mountains meet the ocean, with a detour through the winelands.",
            )
            .with_id(3)
        },
        Trip {
            image: "https://images.unsplash.com/photo-1531761535209-180857e963b9".to_string(),
            image_alt: "Glaciers and peaks in Patagonia".to_string(),
            notes: "Refugios need booking months ahead.".to_string(),
            tags: lines(&["hiking", "glaciers"]),
            ..Trip::new(
                "South America",
                "Chile",
                "Torres del Paine",
                "January 2025",
                "The W trek, if the weather allows.",
            )
            .with_id(4)
            .wishlisted(true)
        },
    ]
}
