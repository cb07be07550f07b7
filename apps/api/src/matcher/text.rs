//! Lexical primitives for role matching: normalization, token sets, and
//! trigram (Dice-coefficient) similarity.

use std::collections::{HashMap, HashSet};

/// Canonicalizes free text for matching: lowercase, every character that is
/// not an ASCII letter/digit/whitespace becomes a space, whitespace runs
/// collapse to single spaces, trimmed. Idempotent.
pub fn normalize(s: &str) -> String {
    let lowered = s.to_lowercase();
    let mapped: String = lowered
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits text into a deduplicated set of unigrams plus adjacent-word
/// bigrams. Input is normalized first, so callers may pass raw text.
pub fn tokenize(s: &str) -> Vec<String> {
    let norm = normalize(s);
    if norm.is_empty() {
        return Vec::new();
    }
    let parts: Vec<&str> = norm.split(' ').collect();

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for part in &parts {
        if seen.insert(part.to_string()) {
            out.push(part.to_string());
        }
    }
    for pair in parts.windows(2) {
        let bigram = format!("{} {}", pair[0], pair[1]);
        if seen.insert(bigram.clone()) {
            out.push(bigram);
        }
    }
    out
}

/// Overlapping length-3 character windows of `s` padded with two spaces on
/// each side, so word boundaries contribute grams.
fn trigrams(s: &str) -> Vec<String> {
    let padded: Vec<char> = format!("  {s}  ").chars().collect();
    padded.windows(3).map(|w| w.iter().collect()).collect()
}

/// Dice-coefficient similarity over trigram multisets:
/// `2 * |A ∩ B| / (|A| + |B|)`, where the intersection respects
/// multiplicity. Symmetric; 1.0 for identical non-empty strings; 0.0 when
/// either side is empty.
pub fn trigram_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a_grams = trigrams(a);
    let b_grams = trigrams(b);

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for gram in &a_grams {
        *counts.entry(gram.as_str()).or_insert(0) += 1;
    }

    let mut intersect = 0usize;
    for gram in &b_grams {
        if let Some(c) = counts.get_mut(gram.as_str()) {
            if *c > 0 {
                intersect += 1;
                *c -= 1;
            }
        }
    }

    let denom = a_grams.len() + b_grams.len();
    if denom == 0 {
        return 0.0;
    }
    (2 * intersect) as f64 / denom as f64
}

/// Fraction of query tokens present in the title token set. The denominator
/// is the query token count clamped to `[3, 10]`, so one-word queries cannot
/// score a full overlap and long queries are not diluted past tenths.
pub fn token_overlap(query_tokens: &[String], title_tokens: &HashSet<String>) -> f64 {
    if query_tokens.is_empty() || title_tokens.is_empty() {
        return 0.0;
    }
    let hits = query_tokens
        .iter()
        .filter(|t| title_tokens.contains(t.as_str()))
        .count();
    hits as f64 / (query_tokens.len().clamp(3, 10)) as f64
}
