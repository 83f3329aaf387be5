//! Spelling correction for place-name queries
//!
//! Maps common misspellings to their canonical form via a static correction
//! table. Lookup is case-insensitive: exact match first, then a substring
//! scan in both directions where the first entry in definition order wins.

/// Common misspelling -> canonical form, many-to-one.
///
/// A slice rather than a map: the substring scan resolves ties by definition
/// order, so iteration order is part of the contract.
pub(crate) const PLACE_CORRECTIONS: &[(&str, &str)] = &[
    ("afganistan", "afghanistan"),
    ("afgahnistan", "afghanistan"),
    ("afganstan", "afghanistan"),
    ("turkiye", "turkey"),
    ("turkei", "turkey"),
    ("istambul", "istanbul"),
    ("instanbul", "istanbul"),
    ("parris", "paris"),
    ("londond", "london"),
    ("new yourk", "new york"),
    ("newyork", "new york"),
    ("tokio", "tokyo"),
    ("maldivs", "maldives"),
    ("maldieves", "maldives"),
    ("hawai", "hawaii"),
    ("hawii", "hawaii"),
    ("egipt", "egypt"),
    ("greec", "greece"),
    ("grece", "greece"),
    ("itali", "italy"),
    ("spian", "spain"),
    ("portugall", "portugal"),
    ("moroco", "morocco"),
    ("marocco", "morocco"),
    ("singapour", "singapore"),
    ("singapor", "singapore"),
    ("tailand", "thailand"),
    ("thialand", "thailand"),
    ("filipines", "philippines"),
    ("phillipines", "philippines"),
    ("indoneisia", "indonesia"),
    ("malayisia", "malaysia"),
    ("vietnamm", "vietnam"),
    ("veitnam", "vietnam"),
    ("combodia", "cambodia"),
    ("kambodia", "cambodia"),
    ("laos", "laos"),
    ("myannmar", "myanmar"),
    ("birma", "myanmar"),
];

/// Correct an obviously misspelled query to its canonical form.
///
/// Returns the input unmodified when nothing matches; never fails.
#[must_use]
pub fn correct_spelling(query: &str) -> String {
    let lowercase = query.to_lowercase();
    let needle = lowercase.trim();

    if let Some((_, canonical)) = PLACE_CORRECTIONS
        .iter()
        .find(|(misspelling, _)| *misspelling == needle)
    {
        return (*canonical).to_string();
    }

    // Substring test in both directions; first entry in table order wins.
    // Short needles can match unintended entries, which is the accepted
    // tie-break for this table.
    for (misspelling, canonical) in PLACE_CORRECTIONS {
        if needle.contains(misspelling) || misspelling.contains(needle) {
            return (*canonical).to_string();
        }
    }

    query.to_string()
}
