//! Person-name normalization: URL slugs and display capitalization.
//!
//! Slugs must match what the multisite installation produces when the
//! operator duplicates a template site, so the transliteration follows the
//! Swiss-German convention used there (umlauts become digraphs, other
//! accented letters fold to their base letter).

/// Fold a single accented character to its slug replacement.
///
/// Returns `None` for characters that need no special handling.
fn fold_accent(c: char) -> Option<&'static str> {
    let folded = match c {
        'ä' | 'Ä' => "ae",
        'ö' | 'Ö' => "oe",
        'ü' | 'Ü' => "ue",
        'ß' => "ss",
        'æ' | 'Æ' => "ae",
        'œ' | 'Œ' => "oe",
        'à' | 'á' | 'â' | 'ã' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Å' => "a",
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => "i",
        'ò' | 'ó' | 'ô' | 'õ' | 'ø' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ø' => "o",
        'ù' | 'ú' | 'û' | 'Ù' | 'Ú' | 'Û' => "u",
        'ç' | 'Ç' => "c",
        'ñ' | 'Ñ' => "n",
        _ => return None,
    };
    Some(folded)
}

/// Turn free text into a lowercase URL slug.
///
/// Accented letters are folded, ASCII punctuation and whitespace become
/// single hyphens, and anything else is dropped.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for c in input.chars() {
        if let Some(folded) = fold_accent(c) {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push_str(folded);
        } else if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_ascii() {
            pending_separator = true;
        }
        // Unmapped non-ASCII characters are dropped entirely.
    }

    slug
}

/// Uppercase the first letter of a name, leaving the rest as typed.
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_concatenated_names() {
        assert_eq!(slugify("PeterMuster"), "petermuster");
    }

    #[test]
    fn slugify_spaces_become_hyphens() {
        assert_eq!(slugify("Jürg Müller"), "juerg-mueller");
    }

    #[test]
    fn slugify_keeps_name_hyphens() {
        assert_eq!(slugify("Anne-MarieMeier"), "anne-mariemeier");
    }

    #[test]
    fn slugify_folds_french_accents() {
        assert_eq!(slugify("ÉricRochat"), "ericrochat");
        assert_eq!(slugify("FrançoisJoliat"), "francoisjoliat");
    }

    #[test]
    fn slugify_folds_umlauts_to_digraphs() {
        assert_eq!(slugify("KäthiGrossenbacher"), "kaethigrossenbacher");
        assert_eq!(slugify("RößlerÖzdemir"), "roessleroezdemir");
    }

    #[test]
    fn slugify_trims_and_collapses_separators() {
        assert_eq!(slugify("  Hans   Peter  "), "hans-peter");
        assert_eq!(slugify("a--b"), "a-b");
    }

    #[test]
    fn slugify_drops_unmapped_characters() {
        assert_eq!(slugify("Žoe"), "oe");
    }

    #[test]
    fn capitalize_first_letter_only() {
        assert_eq!(capitalize_first("peter"), "Peter");
        assert_eq!(capitalize_first("éric"), "Éric");
        assert_eq!(capitalize_first("anne-marie"), "Anne-marie");
        assert_eq!(capitalize_first(""), "");
    }
}
