use std::collections::BTreeMap;

/// Fixed genre vocabulary of the dataset.
///
/// The column order is a contract shared by the catalog matrix, the fitted
/// scaler statistics and every query profile; all similarity metrics operate
/// on vectors positionally aligned to this list.
pub const GENRE_COLUMNS: [&str; 9] = [
    "Action",
    "Adventure",
    "Comedy",
    "Crime",
    "Family",
    "Fantasy",
    "Mystery",
    "Sci-Fi",
    "Thriller",
];

/// Number of genre columns
pub const GENRE_COUNT: usize = GENRE_COLUMNS.len();

/// Lowercased, trimmed form of a title, used as the lookup key
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// A single game row from the dataset
///
/// Immutable after load; owned exclusively by the catalog. The normalized
/// title is not guaranteed unique in the source data.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    /// Display title as it appears in the dataset
    pub title: String,
    /// Lookup key: `lower(trim(title))`
    pub normalized_title: String,
    /// Genre membership flags, aligned to `GENRE_COLUMNS`
    pub genre_flags: [bool; GENRE_COUNT],
    /// Release year, when the dataset has one
    pub year: Option<String>,
    /// Plot summary, when the dataset has one
    pub plot: Option<String>,
}

impl Game {
    /// Creates a game with no optional metadata
    pub fn new(title: impl Into<String>, genre_flags: [bool; GENRE_COUNT]) -> Self {
        let title = title.into();
        Self {
            normalized_title: normalize_title(&title),
            title,
            genre_flags,
            year: None,
            plot: None,
        }
    }

    /// Genre flags as a name → bool map, in fixed column order
    pub fn genre_map(&self) -> BTreeMap<String, bool> {
        GENRE_COLUMNS
            .iter()
            .zip(self.genre_flags.iter())
            .map(|(name, &flag)| (name.to_string(), flag))
            .collect()
    }

    /// Genre flags as a 0/1 feature row
    pub fn feature_row(&self) -> Vec<f64> {
        self.genre_flags
            .iter()
            .map(|&flag| if flag { 1.0 } else { 0.0 })
            .collect()
    }
}
