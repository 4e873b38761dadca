//! Normalized product keys.

use unicode_normalization::UnicodeNormalization;

/// Lowercases `name`, drops whitespace and strips combining diacritics,
/// so `Collant Básico Adulto` becomes `collantbasicoadulto`.
#[must_use]
pub fn normalized_key(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect()
}

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_case_spaces_and_accents() {
        assert_eq!(normalized_key("Collant Básico Adulto"), "collantbasicoadulto");
        assert_eq!(normalized_key("Saia  de\tTule"), "saiadetule");
        assert_eq!(normalized_key("Redinha"), "redinha");
    }

    #[test]
    fn keeps_punctuation_and_digits() {
        assert_eq!(normalized_key("Meia-Calça 3/4"), "meia-calca3/4");
    }

    #[test]
    fn precomposed_and_decomposed_forms_agree() {
        assert_eq!(normalized_key("Cole\u{e7}\u{e3}o"), normalized_key("Colec\u{327}a\u{303}o"));
    }
}
