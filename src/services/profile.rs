use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::error::{AppError, AppResult};
use crate::models::GENRE_COUNT;

use super::scaler::StandardScaler;

/// Builds the combined, standardized query profile
///
/// Selects every catalog row whose normalized title is in the resolved set.
/// When duplicate titles exist in the dataset, all matching rows contribute
/// to the average (matching the source dataset's observable behavior). The
/// mean flag vector is then standardized with the catalog-fitted scaler.
pub fn build_profile(
    resolved_titles: &[String],
    catalog: &Catalog,
    scaler: &StandardScaler,
) -> AppResult<Vec<f64>> {
    let wanted: HashSet<&str> = resolved_titles.iter().map(String::as_str).collect();

    let mut sum = vec![0.0; GENRE_COUNT];
    let mut matched = 0usize;
    for game in catalog.entries() {
        if wanted.contains(game.normalized_title.as_str()) {
            for (s, x) in sum.iter_mut().zip(game.feature_row()) {
                *s += x;
            }
            matched += 1;
        }
    }

    if matched == 0 {
        return Err(AppError::EmptyProfile(
            "no catalog entries matched the resolved titles".to_string(),
        ));
    }

    for s in &mut sum {
        *s /= matched as f64;
    }

    Ok(scaler.transform_row(&sum))
}
