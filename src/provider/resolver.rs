//! Provider name resolution
//!
//! Staged fuzzy matching for user-typed provider names. Stages run in
//! order and the first stage with any match wins: exact equality, then
//! prefix, then substring, then a loose stage where either the
//! candidate's word initials contain the input or any single word starts
//! with it. Matching is case-insensitive and candidate order is kept.

/// Resolve a partial provider name against the known candidate names.
/// Zero matches and multiple matches are both valid results; callers
/// disambiguate.
pub fn fuzzy_match(input: &str, candidates: &[String]) -> Vec<String> {
    let needle = input.to_lowercase();

    let exact: Vec<String> = candidates
        .iter()
        .filter(|candidate| candidate.to_lowercase() == needle)
        .cloned()
        .collect();
    if !exact.is_empty() {
        return exact;
    }

    let prefix: Vec<String> = candidates
        .iter()
        .filter(|candidate| candidate.to_lowercase().starts_with(&needle))
        .cloned()
        .collect();
    if !prefix.is_empty() {
        return prefix;
    }

    let substring: Vec<String> = candidates
        .iter()
        .filter(|candidate| candidate.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    if !substring.is_empty() {
        return substring;
    }

    candidates
        .iter()
        .filter(|candidate| {
            let lower = candidate.to_lowercase();
            let words: Vec<&str> = lower.split(' ').collect();

            let initials: String = words.iter().filter_map(|word| word.chars().next()).collect();
            if initials.contains(&needle) {
                return true;
            }

            words.iter().any(|word| word.starts_with(&needle))
        })
        .cloned()
        .collect()
}
