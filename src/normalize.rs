//! Input normalization.

/// Reduce a free-form plate string to its compact form.
///
/// Plates are written with locale-dependent punctuation ("29A 433.74",
/// "80-011-NG-01"). Matching and storage both use the compact form: every
/// character outside ASCII letters, the Vietnamese Đ/đ, and digits is
/// stripped, and letters are upper-cased. Character order is preserved.
///
/// An empty result makes classification fail with
/// [`PlateError::EmptyInput`](crate::PlateError::EmptyInput) instead of
/// attempting any rule match.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter_map(|c| match c {
            'đ' | 'Đ' => Some('Đ'),
            c if c.is_ascii_alphanumeric() => Some(c.to_ascii_uppercase()),
            _ => None,
        })
        .collect()
}
