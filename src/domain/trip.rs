//! Trip domain model.
//!
//! A [`Trip`] is one journal entry: a visited destination or a wishlisted one.
//! The record is serialized with camelCase keys because that is the layout of the
//! persisted trips array.

use serde::{Deserialize, Serialize};

use super::date::{parse_month_year, MonthYear};

/// Highest rating a trip can carry.
pub const MAX_RATING: u8 = 5;

/// Represents one travel journal entry.
///
/// # Fields
///
/// - `id`: Repository identifier, `None` until the repository assigns one
/// - `date`: Display form "Month Year", parsed on demand by [`Trip::month_year`]
/// - `rating`: 0 to [`MAX_RATING`]
/// - `is_wishlist`: `true` for planned trips, `false` for visited ones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    #[serde(default)]
    pub id: Option<u32>,
    pub continent: String,
    pub country: String,
    pub city: String,
    pub date: String,
    #[serde(default)]
    pub rating: u8,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub lowlights: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub image_alt: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub expenses: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_wishlist: bool,
}

impl Trip {
    /// Creates a trip with the required fields and empty optional ones.
    ///
    /// The id is left unassigned; [`crate::app::TripRepository::save`] assigns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use wanderlog::Trip;
    ///
    /// let trip = Trip::new("Europe", "Italy", "Rome", "May 2023", "Pasta and ruins.");
    /// assert!(trip.id.is_none());
    /// assert_eq!(trip.title(), "Rome, Italy");
    /// assert!(!trip.is_wishlist);
    /// ```
    #[must_use]
    pub fn new(
        continent: impl Into<String>,
        country: impl Into<String>,
        city: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            continent: continent.into(),
            country: country.into(),
            city: city.into(),
            date: date.into(),
            rating: 0,
            description: description.into(),
            highlights: Vec::new(),
            lowlights: Vec::new(),
            image: String::new(),
            image_alt: String::new(),
            notes: String::new(),
            expenses: String::new(),
            tags: Vec::new(),
            is_wishlist: false,
        }
    }

    /// Returns the same trip with the given id.
    #[must_use]
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the same trip with the rating clamped to [`MAX_RATING`].
    #[must_use]
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = rating.min(MAX_RATING);
        self
    }

    /// Returns the same trip marked as wishlisted (planned) or visited.
    #[must_use]
    pub fn wishlisted(mut self, is_wishlist: bool) -> Self {
        self.is_wishlist = is_wishlist;
        self
    }

    /// Display title, "City, Country".
    #[must_use]
    pub fn title(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    /// Parsed travel date, `None` if `date` is not in "Month Year" form.
    #[must_use]
    pub fn month_year(&self) -> Option<MonthYear> {
        parse_month_year(&self.date)
    }

    /// Whether the trip has been visited (not a wishlist entry).
    #[must_use]
    pub const fn is_visited(&self) -> bool {
        !self.is_wishlist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let trip = Trip::new("Asia", "Japan", "Kyoto", "April 2022", "Temples")
            .with_id(3)
            .wishlisted(true);
        let json = serde_json::to_value(&trip).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["isWishlist"], true);
        assert_eq!(json["imageAlt"], "");
        assert!(json.get("is_wishlist").is_none());
    }

    #[test]
    fn missing_optional_fields_default_on_read() {
        let json = r#"{
            "id": 7,
            "continent": "Europe",
            "country": "Portugal",
            "city": "Lisbon",
            "date": "June 2021",
            "description": "Trams and tiles"
        }"#;
        let trip: Trip = serde_json::from_str(json).unwrap();

        assert_eq!(trip.id, Some(7));
        assert_eq!(trip.rating, 0);
        assert!(trip.tags.is_empty());
        assert!(!trip.is_wishlist);
    }

    #[test]
    fn rating_is_clamped() {
        let trip = Trip::new("a", "b", "c", "May 2020", "d").with_rating(9);
        assert_eq!(trip.rating, MAX_RATING);
    }
}
