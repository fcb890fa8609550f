use std::path::Path;

use chrono::{DateTime, Utc};

/// Maximum length of the sanitized base name, in characters.
const MAX_BASE_LEN: usize = 50;

/// Fallback base when sanitization leaves nothing usable.
const DEFAULT_BASE: &str = "video";

/// Derives the sanitized base name from a client-supplied filename:
/// extension stripped, only alphanumeric characters plus `-` and `_`
/// kept, capped at 50 characters. An empty result becomes `video`.
pub fn safe_base(original: &str) -> String {
    let stem = Path::new(original)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    let base: String = stem
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .take(MAX_BASE_LEN)
        .collect();

    if base.is_empty() {
        DEFAULT_BASE.to_string()
    } else {
        base
    }
}

/// Extracts the original extension with the leading dot, keeping only
/// alphanumeric characters. Missing or unusable extensions yield "".
pub fn safe_extension(original: &str) -> String {
    let ext: String = Path::new(original)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();

    if ext.is_empty() {
        String::new()
    } else {
        format!(".{}", ext)
    }
}

/// Builds the final stored filename: `<base>_<timestamp><ext>` where the
/// timestamp carries microsecond precision, so two uploads of the same
/// file in the same second still land on distinct names.
pub fn storage_name(original: &str, now: DateTime<Utc>) -> String {
    let timestamp = format!(
        "{}{:06}",
        now.format("%Y%m%d%H%M%S"),
        now.timestamp_subsec_micros()
    );
    format!(
        "{}_{}{}",
        safe_base(original),
        timestamp,
        safe_extension(original)
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn strips_unsafe_characters_and_extension() {
        assert_eq!(safe_base("My Vacation!!.mp4"), "MyVacation");
        assert_eq!(safe_base("clip 01 (final).mov"), "clip01final");
        assert_eq!(safe_base("under_score-dash.mp4"), "under_score-dash");
    }

    #[test]
    fn empty_base_falls_back_to_default() {
        assert_eq!(safe_base("!!!.mp4"), "video");
        assert_eq!(safe_base(".mp4"), "video");
        assert_eq!(safe_base(""), "video");
    }

    #[test]
    fn base_is_capped_at_fifty_characters() {
        let long = "a".repeat(80);
        assert_eq!(safe_base(&format!("{}.mp4", long)).len(), 50);
    }

    #[test]
    fn extension_is_sanitized() {
        assert_eq!(safe_extension("a.mp4"), ".mp4");
        assert_eq!(safe_extension("a.m p4"), ".mp4");
        assert_eq!(safe_extension("noext"), "");
    }

    #[test]
    fn storage_name_matches_expected_shape() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 12, 30, 45).unwrap()
            + chrono::Duration::microseconds(123456);
        assert_eq!(
            storage_name("My Vacation!!.mp4", now),
            "MyVacation_20240305123045123456.mp4"
        );
    }

    #[test]
    fn same_second_uploads_get_distinct_names() {
        let base = Utc.with_ymd_and_hms(2024, 3, 5, 12, 30, 45).unwrap();
        let a = storage_name("clip.mp4", base + chrono::Duration::microseconds(1));
        let b = storage_name("clip.mp4", base + chrono::Duration::microseconds(2));
        assert_ne!(a, b);
    }
}
