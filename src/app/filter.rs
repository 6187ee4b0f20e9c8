//! Trip list filtering, sorting and statistics.
//!
//! [`TripFilter`] narrows the repository's trips for display: a view
//! (all / visited / wishlist), a multi-token fuzzy search and a sort order.
//! [`TripStats`] summarizes visited trips; wishlist entries never count towards
//! visited statistics.

use crate::domain::Trip;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Which trips are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TripView {
    #[default]
    All,
    Visited,
    Wishlist,
}

impl TripView {
    const fn admits(self, trip: &Trip) -> bool {
        match self {
            Self::All => true,
            Self::Visited => !trip.is_wishlist,
            Self::Wishlist => trip.is_wishlist,
        }
    }
}

/// Display order of the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TripSort {
    /// Repository order.
    #[default]
    Manual,
    /// Most recent travel date first.
    Newest,
    /// Oldest travel date first.
    Oldest,
    /// Highest rating first.
    Rating,
    /// Country, then city, alphabetically.
    Country,
}

/// Active search, view and sort settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripFilter {
    pub query: String,
    pub view: TripView,
    pub sort: TripSort,
}

impl TripFilter {
    /// Applies view, search and sort to `trips`.
    ///
    /// # Filtering Algorithm
    ///
    /// 1. **View**: drop trips the view excludes
    /// 2. **Tokenize**: split the query on whitespace, lowercase
    /// 3. **Match**: every token must fuzzy-match city, country, continent or a tag
    /// 4. **Sort**: stable, so equal keys keep repository order; trips whose
    ///    date does not parse go last in date sorts
    ///
    /// # Examples
    ///
    /// ```
    /// use wanderlog::app::{TripFilter, TripSort, TripView};
    /// use wanderlog::domain::sample_trips;
    ///
    /// let trips = sample_trips();
    /// let filter = TripFilter {
    ///     query: "kyo".to_string(),
    ///     view: TripView::Visited,
    ///     sort: TripSort::Newest,
    /// };
    /// let found = filter.apply(&trips);
    /// assert_eq!(found.len(), 1);
    /// assert_eq!(found[0].city, "Kyoto");
    /// ```
    #[must_use]
    pub fn apply<'a>(&self, trips: &'a [Trip]) -> Vec<&'a Trip> {
        let _span = tracing::debug_span!("apply_trip_filter",
            total = trips.len(),
            query_len = self.query.len(),
            view = ?self.view,
            sort = ?self.sort
        )
        .entered();

        let tokens: Vec<String> = self
            .query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
        let matcher = (!tokens.is_empty()).then(SkimMatcherV2::default);

        let mut filtered: Vec<&Trip> = trips
            .iter()
            .filter(|trip| self.view.admits(trip))
            .filter(|trip| {
                matcher
                    .as_ref()
                    .map_or(true, |m| tokens.iter().all(|token| matches_token(m, trip, token)))
            })
            .collect();

        match self.sort {
            TripSort::Manual => {}
            TripSort::Newest => filtered.sort_by(|a, b| compare_dates(a, b, true)),
            TripSort::Oldest => filtered.sort_by(|a, b| compare_dates(a, b, false)),
            TripSort::Rating => filtered.sort_by(|a, b| b.rating.cmp(&a.rating)),
            TripSort::Country => filtered.sort_by(|a, b| {
                a.country
                    .to_lowercase()
                    .cmp(&b.country.to_lowercase())
                    .then_with(|| a.city.to_lowercase().cmp(&b.city.to_lowercase()))
            }),
        }

        tracing::debug!(filtered = filtered.len(), "trip filter applied");
        filtered
    }

    /// Whether any narrowing is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || self.view != TripView::All
    }
}

fn matches_token(matcher: &SkimMatcherV2, trip: &Trip, token: &str) -> bool {
    [&trip.city, &trip.country, &trip.continent]
        .into_iter()
        .chain(trip.tags.iter())
        .any(|field| matcher.fuzzy_match(&field.to_lowercase(), token).is_some())
}

fn compare_dates(a: &Trip, b: &Trip, newest_first: bool) -> Ordering {
    match (a.month_year(), b.month_year()) {
        (Some(x), Some(y)) if newest_first => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Summary of the journal.
#[derive(Debug, Clone, PartialEq)]
pub struct TripStats {
    pub visited: usize,
    pub wishlist: usize,
    /// Distinct countries among visited trips.
    pub countries: usize,
    /// Distinct continents among visited trips.
    pub continents: usize,
    /// Mean rating of visited trips, `None` when nothing has been visited.
    pub average_rating: Option<f64>,
}

impl TripStats {
    #[must_use]
    pub fn from_trips(trips: &[Trip]) -> Self {
        let visited: Vec<&Trip> = trips.iter().filter(|t| t.is_visited()).collect();

        let countries: BTreeSet<String> = visited.iter().map(|t| t.country.to_lowercase()).collect();
        let continents: BTreeSet<String> = visited.iter().map(|t| t.continent.to_lowercase()).collect();

        #[allow(clippy::cast_precision_loss)]
        let average_rating = (!visited.is_empty()).then(|| {
            let total: u32 = visited.iter().map(|t| u32::from(t.rating)).sum();
            f64::from(total) / visited.len() as f64
        });

        Self {
            visited: visited.len(),
            wishlist: trips.len() - visited.len(),
            countries: countries.len(),
            continents: continents.len(),
            average_rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(id: u32, country: &str, city: &str, date: &str, rating: u8) -> Trip {
        Trip::new("Europe", country, city, date, "desc")
            .with_id(id)
            .with_rating(rating)
    }

    fn cities(trips: &[&Trip]) -> Vec<String> {
        trips.iter().map(|t| t.city.clone()).collect()
    }

    fn journal() -> Vec<Trip> {
        vec![
            trip(1, "France", "Paris", "March 2021", 3),
            trip(2, "Italy", "Rome", "July 2023", 5),
            trip(3, "Spain", "Madrid", "sometime", 4),
            trip(4, "Italy", "Florence", "January 2019", 4).wishlisted(true),
        ]
    }

    #[test]
    fn default_filter_keeps_everything_in_order() {
        let trips = journal();
        let out = TripFilter::default().apply(&trips);
        assert_eq!(cities(&out), vec!["Paris", "Rome", "Madrid", "Florence"]);
    }

    #[test]
    fn views_split_visited_and_wishlist() {
        let trips = journal();
        let visited = TripFilter {
            view: TripView::Visited,
            ..TripFilter::default()
        };
        let wishlist = TripFilter {
            view: TripView::Wishlist,
            ..TripFilter::default()
        };
        assert_eq!(visited.apply(&trips).len(), 3);
        assert_eq!(cities(&wishlist.apply(&trips)), vec!["Florence"]);
    }

    #[test]
    fn every_token_must_match_some_field() {
        let mut trips = journal();
        trips[1].tags = vec!["food".into()];

        let filter = TripFilter {
            query: "ITALY food".into(),
            ..TripFilter::default()
        };
        assert_eq!(cities(&filter.apply(&trips)), vec!["Rome"]);

        let none = TripFilter {
            query: "italy zzzz".into(),
            ..TripFilter::default()
        };
        assert!(none.apply(&trips).is_empty());
    }

    #[test]
    fn date_sorts_put_unparsable_dates_last() {
        let trips = journal();
        let newest = TripFilter {
            sort: TripSort::Newest,
            ..TripFilter::default()
        };
        let oldest = TripFilter {
            sort: TripSort::Oldest,
            ..TripFilter::default()
        };
        assert_eq!(cities(&newest.apply(&trips)), vec!["Rome", "Paris", "Florence", "Madrid"]);
        assert_eq!(cities(&oldest.apply(&trips)), vec!["Florence", "Paris", "Rome", "Madrid"]);
    }

    #[test]
    fn rating_sort_is_stable() {
        let trips = journal();
        let filter = TripFilter {
            sort: TripSort::Rating,
            ..TripFilter::default()
        };
        assert_eq!(cities(&filter.apply(&trips)), vec!["Rome", "Madrid", "Florence", "Paris"]);
    }

    #[test]
    fn country_sort_breaks_ties_by_city() {
        let trips = journal();
        let filter = TripFilter {
            sort: TripSort::Country,
            ..TripFilter::default()
        };
        assert_eq!(cities(&filter.apply(&trips)), vec!["Paris", "Florence", "Rome", "Madrid"]);
    }

    #[test]
    fn only_view_and_query_count_as_narrowing() {
        let mut filter = TripFilter {
            query: "  ".into(),
            sort: TripSort::Rating,
            ..TripFilter::default()
        };
        assert!(!filter.is_active());

        filter.view = TripView::Wishlist;
        assert!(filter.is_active());

        filter.view = TripView::All;
        filter.query = "rome".into();
        assert!(filter.is_active());
    }

    #[test]
    fn stats_ignore_wishlist_trips() {
        let stats = TripStats::from_trips(&journal());
        assert_eq!(stats.visited, 3);
        assert_eq!(stats.wishlist, 1);
        assert_eq!(stats.countries, 3);
        assert_eq!(stats.continents, 1);
        assert_eq!(stats.average_rating, Some(4.0));
    }

    #[test]
    fn stats_of_empty_journal() {
        let stats = TripStats::from_trips(&[]);
        assert_eq!(stats.visited, 0);
        assert_eq!(stats.average_rating, None);
    }
}
