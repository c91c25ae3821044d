//! # Slug Normalisation Module
//!
//! This module provides deterministic normalisation of arbitrary strings into
//! URL- and filesystem-safe slugs. It includes configurable options for the
//! separator character, an optional length bound, and Unicode transliteration.
//!
//! ## Key Features
//!
//! - **Deterministic, idempotent transformation** with no shared state
//! - **Safe output alphabet** restricted to lowercase ASCII letters, digits and a single separator
//! - **Unicode transliteration** that strips diacritics (e.g. `é` -> `e`)
//! - **Run collapsing** so any run of unsafe characters maps to one separator
//! - **Length bounding** that never leaves a trailing separator

use deunicode::deunicode_char;

use crate::core::error::{Result, UtilError};

/// Separator characters accepted by [`Slugifier::with_separator`].
const ALLOWED_SEPARATORS: [char; 2] = ['-', '_'];

/// Configurable slug transformer.
///
/// A `Slugifier` converts display-oriented strings into canonical identifiers
/// suitable for filenames or URL path segments. The transformation is a pure
/// function: the same input always produces the same output, and the
/// transformer owns no shared mutable state, so it may be used concurrently
/// from any number of threads.
///
/// Empty input yields an empty slug; this also applies to input consisting
/// only of whitespace or other unsafe characters.
///
/// # Examples
///
/// ```
/// use potato_util::slug::Slugifier;
///
/// let slugifier = Slugifier::new();
/// assert_eq!(slugifier.slugify("My Photo File!!.png"), "my-photo-file-png");
/// assert_eq!(slugifier.slugify("Café Münster"), "cafe-munster");
/// assert_eq!(slugifier.slugify(""), "");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Slugifier {
    separator: char,
    max_length: Option<usize>,
    transliterate: bool,
}

impl Slugifier {
    /// Creates a new `Slugifier` with default settings.
    ///
    /// Defaults: `-` as the separator, no length bound, transliteration
    /// enabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use potato_util::slug::Slugifier;
    /// let slugifier = Slugifier::new();
    /// assert_eq!(slugifier.slugify("Hello, World!"), "hello-world");
    /// ```
    pub fn new() -> Self {
        Self {
            separator: '-',
            max_length: None,
            transliterate: true,
        }
    }

    /// Sets the separator character used between slug segments.
    ///
    /// # Arguments
    ///
    /// * `separator` - The separator character, either `-` or `_`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for any other character, since it would
    /// break the safe output alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use potato_util::slug::Slugifier;
    ///
    /// let slugifier = Slugifier::new().with_separator('_').unwrap();
    /// assert_eq!(slugifier.slugify("My Photo File!!.png"), "my_photo_file_png");
    /// assert!(Slugifier::new().with_separator('!').is_err());
    /// ```
    pub fn with_separator(mut self, separator: char) -> Result<Self> {
        if !ALLOWED_SEPARATORS.contains(&separator) {
            return Err(UtilError::validation(format!(
                "Invalid slug separator '{}': must be '-' or '_'",
                separator
            )));
        }
        self.separator = separator;
        Ok(self)
    }

    /// Sets an upper bound on the slug length, in characters.
    ///
    /// Truncation happens after normalisation and never leaves a trailing
    /// separator.
    ///
    /// # Arguments
    ///
    /// * `max_length` - The maximum number of characters in the slug.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the bound is zero.
    pub fn with_max_length(mut self, max_length: usize) -> Result<Self> {
        if max_length == 0 {
            return Err(UtilError::validation(
                "Invalid slug length bound 0: must be at least 1",
            ));
        }
        self.max_length = Some(max_length);
        Ok(self)
    }

    /// Enables or disables Unicode transliteration.
    ///
    /// When enabled (the default), non-ASCII characters are transliterated
    /// to their closest ASCII equivalents before filtering, so diacritics
    /// are stripped rather than dropped. When disabled, every non-ASCII
    /// character is treated as unsafe and collapses into the separator.
    pub fn with_transliteration(mut self, enable: bool) -> Self {
        self.transliterate = enable;
        self
    }

    /// Normalises the input into a slug.
    ///
    /// The output contains only lowercase ASCII letters, digits and the
    /// configured separator; it never starts or ends with the separator, and
    /// any run of unsafe characters collapses into exactly one separator.
    /// Applying `slugify` to its own output returns the output unchanged.
    ///
    /// # Arguments
    ///
    /// * `input` - The text to normalise.
    ///
    /// # Returns
    ///
    /// * `String` - The normalised slug, possibly empty.
    pub fn slugify(&self, input: &str) -> String {
        let mut slug = String::with_capacity(input.len());
        // Set while scanning a run of unsafe characters; flushed as a single
        // separator before the next safe character.
        let mut pending_separator = false;

        for ch in input.chars() {
            if ch.is_ascii() {
                self.append(ch, &mut slug, &mut pending_separator);
            } else if self.transliterate {
                match deunicode_char(ch) {
                    Some(expansion) => {
                        for mapped in expansion.chars() {
                            self.append(
                                mapped,
                                &mut slug,
                                &mut pending_separator,
                            );
                        }
                    }
                    None => pending_separator = true,
                }
            } else {
                pending_separator = true;
            }
        }

        // A pending separator at this point is trailing and is dropped.
        if let Some(limit) = self.max_length {
            if slug.len() > limit {
                // The slug is ASCII-only here, so the byte index is a char
                // boundary.
                slug.truncate(limit);
                let trimmed = slug.trim_end_matches(self.separator).len();
                slug.truncate(trimmed);
            }
        }

        slug
    }

    /// Appends one ASCII character, collapsing unsafe runs into the
    /// separator and suppressing leading separators.
    fn append(
        &self,
        ch: char,
        slug: &mut String,
        pending_separator: &mut bool,
    ) {
        if ch.is_ascii_alphanumeric() {
            if *pending_separator && !slug.is_empty() {
                slug.push(self.separator);
            }
            *pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            *pending_separator = true;
        }
    }
}

impl Default for Slugifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalises the input into a slug using the default [`Slugifier`].
///
/// This is the convenience form of [`Slugifier::slugify`]: `-` as the
/// separator, no length bound, transliteration enabled.
///
/// # Arguments
///
/// * `input` - The text to normalise.
///
/// # Returns
///
/// * `String` - The normalised slug, possibly empty.
///
/// # Examples
///
/// ```
/// use potato_util::slug_name;
///
/// assert_eq!(slug_name("My Photo File!!.png"), "my-photo-file-png");
/// assert_eq!(slug_name(""), "");
/// ```
pub fn slug_name(input: &str) -> String {
    Slugifier::new().slugify(input)
}
