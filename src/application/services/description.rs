//! Offer description formatting.

/// Splits a description into one paragraph per sentence.
///
/// Fragments are cut at every `.`, empty fragments are dropped, leading
/// spaces are stripped and each paragraph gets its period back.
#[must_use]
pub fn description_paragraphs(description: &str) -> Vec<String> {
    description
        .split('.')
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| format!("{}.", fragment.trim_start_matches(' ')))
        .collect()
}
