//! Fuzzy title resolution.
//!
//! Maps a free-text query to the closest known normalized title by
//! normalized edit distance. Deterministic: on a tied score the earliest
//! candidate scanned wins, which is catalog order.

/// Default similarity cutoff below which no match is returned
pub const DEFAULT_CUTOFF: f64 = 0.4;

/// Returns the best-matching title with similarity >= cutoff, or `None`
pub fn resolve<'a, I>(query: &str, titles: I, cutoff: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let mut best: Option<(&str, f64)> = None;
    for candidate in titles {
        let similarity = strsim::normalized_levenshtein(&needle, candidate);
        if similarity >= cutoff && best.map_or(true, |(_, s)| similarity > s) {
            best = Some((candidate, similarity));
        }
    }
    best.map(|(title, _)| title)
}
