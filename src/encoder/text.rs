//! ASCII folding for Vietnamese text
//!
//! The checksum only covers ASCII, so purpose text typed with diacritics has to
//! be folded before encoding. This is opt-in: the assembler rejects non-ASCII
//! input instead of rewriting it behind the caller's back.

const FOLDS: [(char, &str); 14] = [
    ('a', "àáảãạăằắẳẵặâầấẩẫậ"),
    ('A', "ÀÁẢÃẠĂẰẮẲẴẶÂẦẤẨẪẬ"),
    ('e', "èéẻẽẹêềếểễệ"),
    ('E', "ÈÉẺẼẸÊỀẾỂỄỆ"),
    ('i', "ìíỉĩị"),
    ('I', "ÌÍỈĨỊ"),
    ('o', "òóỏõọôồốổỗộơờớởỡợ"),
    ('O', "ÒÓỎÕỌÔỒỐỔỖỘƠỜỚỞỠỢ"),
    ('u', "ùúủũụưừứửữự"),
    ('U', "ÙÚỦŨỤƯỪỨỬỮỰ"),
    ('y', "ỳýỷỹỵ"),
    ('Y', "ỲÝỶỸỴ"),
    ('d', "đ"),
    ('D', "Đ"),
];

/// Fold a single character, `None` when it has no ASCII form
fn fold_char(c: char) -> Option<char> {
    if c.is_ascii() {
        return Some(c);
    }
    FOLDS
        .iter()
        .find(|(_, variants)| variants.contains(c))
        .map(|(base, _)| *base)
}

/// Replace Vietnamese letters with their unaccented ASCII base
///
/// Combining marks (decomposed input) and any other non-ASCII character are
/// dropped.
pub fn to_ascii(text: &str) -> String {
    text.chars().filter_map(fold_char).collect()
}
