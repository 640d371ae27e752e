use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::{AppError, AppResult};

use super::profile::build_profile;
use super::resolver::{self, DEFAULT_CUTOFF};
use super::scaler::StandardScaler;
use super::similarity::{self, Method};

/// Placeholder when the dataset has no release year for a game
const YEAR_PLACEHOLDER: &str = "Information not available";
/// Placeholder when the dataset has no plot summary for a game
const PLOT_PLACEHOLDER: &str = "No description found for this game.";

/// Number of input titles a recommendation request must carry
const REQUIRED_TITLES: usize = 3;

/// Tuning knobs for the engine
#[derive(Debug, Clone, Copy)]
pub struct EngineOptions {
    /// Minimum fuzzy-match similarity for title resolution
    pub match_cutoff: f64,
    /// Attach each recommendation's genre-flag map to the response
    pub include_genre_detail: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            match_cutoff: DEFAULT_CUTOFF,
            include_genre_detail: false,
        }
    }
}

/// One ranked recommendation under a single method
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    /// Similarity score, rounded to 3 decimal places
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<BTreeMap<String, bool>>,
}

/// Full detail for a single game, with placeholders for absent metadata
#[derive(Debug, Clone, Serialize)]
pub struct GameDetail {
    pub title: String,
    pub year: String,
    pub plot: String,
    pub genres: BTreeMap<String, bool>,
}

/// Immutable recommendation context shared across all requests
///
/// Holds the catalog, the scaler fitted once over its genre matrix, and the
/// standardized matrix itself. Built fully before the server starts accepting
/// traffic and never mutated afterward, so request handlers can share it
/// without locking.
pub struct RecommendationEngine {
    catalog: Catalog,
    scaler: StandardScaler,
    standardized: Vec<Vec<f64>>,
    options: EngineOptions,
}

impl RecommendationEngine {
    /// Fits the scaler over the catalog and standardizes its matrix
    pub fn new(catalog: Catalog, options: EngineOptions) -> Self {
        let matrix = catalog.genre_matrix();
        let scaler = StandardScaler::fit(&matrix);
        let standardized = scaler.transform_matrix(&matrix);
        Self {
            catalog,
            scaler,
            standardized,
            options,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Recommends games similar to exactly three input titles
    ///
    /// Returns a method-name → ranked-results map covering all three metrics.
    pub fn recommend(
        &self,
        titles: &[String],
    ) -> AppResult<BTreeMap<&'static str, Vec<Recommendation>>> {
        if titles.len() != REQUIRED_TITLES {
            return Err(AppError::Validation(
                "exactly 3 titles required".to_string(),
            ));
        }

        let known: Vec<&str> = self.catalog.normalized_titles().collect();
        let mut resolved = Vec::with_capacity(REQUIRED_TITLES);
        for query in titles {
            match resolver::resolve(query, known.iter().copied(), self.options.match_cutoff) {
                Some(title) => resolved.push(title.to_string()),
                None => tracing::debug!(query = %query, "No catalog title close enough"),
            }
        }

        if resolved.len() < REQUIRED_TITLES {
            tracing::warn!(
                requested = titles.len(),
                resolved = resolved.len(),
                "Too few titles resolved against the catalog"
            );
            return Err(AppError::Resolution("insufficient matches".to_string()));
        }

        tracing::info!(resolved = ?resolved, "Titles resolved, building profile");
        let profile = build_profile(&resolved, &self.catalog, &self.scaler)?;

        let mut recommendations = BTreeMap::new();
        for method in Method::ALL {
            let scores = similarity::score(method, &profile, &self.standardized);
            let ranked = similarity::rank(&scores)
                .into_iter()
                .filter_map(|(index, raw)| {
                    self.catalog.get(index).map(|game| Recommendation {
                        title: game.title.clone(),
                        score: similarity::round3(raw),
                        genres: self
                            .options
                            .include_genre_detail
                            .then(|| game.genre_map()),
                    })
                })
                .collect();
            recommendations.insert(method.as_str(), ranked);
        }

        Ok(recommendations)
    }

    /// Exact (case-insensitive, trimmed) lookup of a single game
    ///
    /// Absent metadata is substituted with placeholder text rather than
    /// propagated as missing.
    pub fn lookup(&self, title: &str) -> AppResult<GameDetail> {
        let game = self
            .catalog
            .find_exact(title)
            .ok_or_else(|| AppError::NotFound(format!("game not found: {}", title.trim())))?;

        Ok(GameDetail {
            title: game.title.clone(),
            year: game
                .year
                .clone()
                .unwrap_or_else(|| YEAR_PLACEHOLDER.to_string()),
            plot: game
                .plot
                .clone()
                .unwrap_or_else(|| PLOT_PLACEHOLDER.to_string()),
            genres: game.genre_map(),
        })
    }
}
