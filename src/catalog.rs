use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::models::{normalize_title, Game, GENRE_COLUMNS, GENRE_COUNT};

/// In-memory table of games, built once at startup and read-only thereafter
///
/// Entries keep dataset order; the similarity pipeline addresses them by
/// positional index.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Game>,
}

impl Catalog {
    /// Loads the catalog from a dataset CSV on disk
    ///
    /// Schema violations (missing `name` or genre columns, unparseable flag
    /// cells, empty dataset) are startup-fatal.
    pub fn load_csv<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AppError::DataLoad(format!("failed to open {}: {}", path.display(), e))
        })?;
        Self::from_reader(file)
    }

    /// Loads the catalog from any CSV reader
    pub fn from_reader<R: Read>(reader: R) -> AppResult<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers = csv_reader
            .headers()
            .map_err(|e| AppError::DataLoad(format!("failed to read headers: {}", e)))?
            .clone();

        let column = |name: &str| headers.iter().position(|h| h == name);

        let name_idx = column("name")
            .ok_or_else(|| AppError::DataLoad("missing required column: name".to_string()))?;

        let mut genre_idx = [0usize; GENRE_COUNT];
        for (i, genre) in GENRE_COLUMNS.iter().enumerate() {
            genre_idx[i] = column(genre).ok_or_else(|| {
                AppError::DataLoad(format!("missing required genre column: {}", genre))
            })?;
        }

        // Optional metadata; the IMDb export has them, minimal fixtures may not.
        let year_idx = column("year");
        let plot_idx = column("plot");

        let mut entries = Vec::new();
        for (row, record) in csv_reader.records().enumerate() {
            // Header is line 1, first record is line 2.
            let line = row + 2;
            let record = record
                .map_err(|e| AppError::DataLoad(format!("line {}: {}", line, e)))?;

            let title = record.get(name_idx).unwrap_or("").to_string();

            let mut genre_flags = [false; GENRE_COUNT];
            for (i, &idx) in genre_idx.iter().enumerate() {
                let cell = record.get(idx).unwrap_or("");
                genre_flags[i] = parse_flag(cell).ok_or_else(|| {
                    AppError::DataLoad(format!(
                        "line {}, column {}: unrecognized flag value {:?}",
                        line, GENRE_COLUMNS[i], cell
                    ))
                })?;
            }

            let metadata = |idx: Option<usize>| {
                idx.and_then(|i| record.get(i))
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
            };

            entries.push(Game {
                normalized_title: normalize_title(&title),
                title,
                genre_flags,
                year: metadata(year_idx),
                plot: metadata(plot_idx),
            });
        }

        if entries.is_empty() {
            return Err(AppError::DataLoad("dataset contains no rows".to_string()));
        }

        Ok(Self { entries })
    }

    /// Builds a catalog directly from rows; used by tests
    pub fn from_entries(entries: Vec<Game>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Game] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Game> {
        self.entries.get(index)
    }

    /// Normalized titles in catalog order, duplicates included
    pub fn normalized_titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|g| g.normalized_title.as_str())
    }

    /// Raw 0/1 genre matrix, rows in catalog order
    pub fn genre_matrix(&self) -> Vec<Vec<f64>> {
        self.entries.iter().map(Game::feature_row).collect()
    }

    /// Exact lookup on the normalized title; first matching row wins
    pub fn find_exact(&self, title: &str) -> Option<&Game> {
        let needle = normalize_title(title);
        self.entries.iter().find(|g| g.normalized_title == needle)
    }
}

/// Boolean coercion for genre cells: true/false (any case), 1/0, empty = false
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" | "" => Some(false),
        _ => None,
    }
}
