use gotenberg_core::DEFAULT_OUTPUT_FILENAME;

const MAX_FILENAME_LEN: usize = 200;

/// Windows-safe filename for writing an asset locally.
///
/// Archive entries and server-chosen names may carry directory parts; only
/// the last component is kept.
pub fn safe_filename(name: &str) -> String {
    let base = name.rsplit(&['/', '\\'][..]).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    let cleaned = cleaned.trim_matches(&[' ', '.'][..]);
    if cleaned.is_empty() {
        return DEFAULT_OUTPUT_FILENAME.to_string();
    }

    let mut final_name = cleaned.to_string();
    if final_name.len() > MAX_FILENAME_LEN {
        let mut end = MAX_FILENAME_LEN;
        while !final_name.is_char_boundary(end) {
            end -= 1;
        }
        final_name.truncate(end);
    }
    let stem = final_name.split('.').next().unwrap_or_default();
    if is_reserved_windows_name(stem) {
        let at = stem.len();
        final_name.insert(at, '_');
    }
    final_name
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}
