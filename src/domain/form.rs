//! Trip form payload.
//!
//! The create/edit form collects free text; [`TripForm`] turns it into a
//! complete [`Trip`] record. Images go through an [`ImageCompressor`]
//! collaborator that returns an embedded data URI.

use super::date::parse_month_year;
use super::error::{JournalError, Result};
use super::trip::{Trip, MAX_RATING};

/// Resize and re-encode settings passed to the image collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressOptions {
    pub max_width: u32,
    pub max_height: u32,
    /// Encoder quality in `0.0..=1.0`.
    pub quality: f32,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            max_width: 1200,
            max_height: 800,
            quality: 0.8,
        }
    }
}

/// Image compression collaborator.
///
/// Implementations downscale the raw image bytes to fit the bounds and return a
/// base64 data URI. Unreadable or non-image input must fail with
/// [`JournalError::ImageProcessing`].
pub trait ImageCompressor {
    /// Compresses `bytes` into a data URI.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::ImageProcessing`] if the input cannot be decoded.
    fn compress(&self, bytes: &[u8], options: CompressOptions) -> Result<String>;
}

/// Raw form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripForm {
    /// Id of the trip being edited, `None` when creating.
    pub id: Option<u32>,
    pub continent: String,
    pub country: String,
    pub city: String,
    pub date: String,
    pub rating: u8,
    pub description: String,
    /// One highlight per line.
    pub highlights: String,
    /// One lowlight per line.
    pub lowlights: String,
    pub image: String,
    pub image_alt: String,
    pub notes: String,
    pub expenses: String,
    /// Comma separated.
    pub tags: String,
    pub is_wishlist: bool,
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn split_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

impl TripForm {
    /// Prefills the form from an existing trip (edit mode).
    #[must_use]
    pub fn from_trip(trip: &Trip) -> Self {
        Self {
            id: trip.id,
            continent: trip.continent.clone(),
            country: trip.country.clone(),
            city: trip.city.clone(),
            date: trip.date.clone(),
            rating: trip.rating,
            description: trip.description.clone(),
            highlights: trip.highlights.join("\n"),
            lowlights: trip.lowlights.join("\n"),
            image: trip.image.clone(),
            image_alt: trip.image_alt.clone(),
            notes: trip.notes.clone(),
            expenses: trip.expenses.clone(),
            tags: trip.tags.join(", "),
            is_wishlist: trip.is_wishlist,
        }
    }

    /// Checks required fields, the date format and the rating range.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("continent", &self.continent),
            ("country", &self.country),
            ("city", &self.city),
            ("date", &self.date),
            ("description", &self.description),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(JournalError::Validation(format!("{field} is required")));
        }

        if parse_month_year(&self.date).is_none() {
            return Err(JournalError::Validation(format!(
                "date must look like \"May 2023\", got {:?}",
                self.date
            )));
        }

        if self.rating > MAX_RATING {
            return Err(JournalError::Validation(format!(
                "rating must be between 0 and {MAX_RATING}"
            )));
        }

        Ok(())
    }

    /// Validates the form and builds the trip record.
    ///
    /// The id is carried over unchanged; `None` lets the repository assign one.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Validation`] if [`TripForm::validate`] fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use wanderlog::TripForm;
    ///
    /// let form = TripForm {
    ///     continent: "Europe".into(),
    ///     country: "Italy".into(),
    ///     city: "Rome".into(),
    ///     date: "May 2023".into(),
    ///     description: "Ruins".into(),
    ///     highlights: "Colosseum\n\n  Trastevere  ".into(),
    ///     tags: "history, food,".into(),
    ///     ..TripForm::default()
    /// };
    /// let trip = form.into_trip()?;
    /// assert_eq!(trip.highlights, vec!["Colosseum", "Trastevere"]);
    /// assert_eq!(trip.tags, vec!["history", "food"]);
    /// # Ok::<(), wanderlog::JournalError>(())
    /// ```
    pub fn into_trip(self) -> Result<Trip> {
        self.validate()?;

        Ok(Trip {
            id: self.id,
            continent: self.continent.trim().to_string(),
            country: self.country.trim().to_string(),
            city: self.city.trim().to_string(),
            date: self.date.trim().to_string(),
            rating: self.rating,
            description: self.description.trim().to_string(),
            highlights: split_lines(&self.highlights),
            lowlights: split_lines(&self.lowlights),
            image: self.image,
            image_alt: self.image_alt,
            notes: self.notes,
            expenses: self.expenses,
            tags: split_tags(&self.tags),
            is_wishlist: self.is_wishlist,
        })
    }

    /// Compresses an uploaded image and stores the data URI on the form.
    ///
    /// On failure the previous `image` value is kept and nothing from the
    /// rejected upload is retained.
    ///
    /// # Errors
    ///
    /// Propagates the collaborator's [`JournalError::ImageProcessing`]; any other
    /// error kind is wrapped into one.
    pub fn attach_image(
        &mut self,
        bytes: &[u8],
        compressor: &dyn ImageCompressor,
        options: CompressOptions,
    ) -> Result<()> {
        let _span = tracing::debug_span!("attach_image", size = bytes.len()).entered();

        match compressor.compress(bytes, options) {
            Ok(data_uri) => {
                tracing::debug!(encoded_len = data_uri.len(), "image compressed");
                self.image = data_uri;
                Ok(())
            }
            Err(JournalError::ImageProcessing(message)) => {
                tracing::debug!(error = %message, "image rejected");
                Err(JournalError::ImageProcessing(message))
            }
            Err(other) => {
                tracing::debug!(error = %other, "image compressor failed");
                Err(JournalError::ImageProcessing(other.to_string()))
            }
        }
    }
}
