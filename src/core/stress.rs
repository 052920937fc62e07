// src/core/stress.rs
//! Stress-marker normalisation for rule- and compound-derived pronunciations.

const PRIMARY: char = '\'';
const SECONDARY: char = ',';
const NON_PRIMARY: char = '%';

fn is_marked(phone: &str) -> bool {
    phone.starts_with(&[PRIMARY, SECONDARY, NON_PRIMARY][..])
}

/// Replaces the leading marker of `phone` with `marker`, or drops it when `None`.
fn remark(phone: &str, marker: Option<char>) -> String {
    // Markers are ASCII, so slicing off one byte is safe.
    let bare = &phone[1..];
    match marker {
        Some(m) => {
            let mut out = String::with_capacity(phone.len());
            out.push(m);
            out.push_str(bare);
            out
        }
        None => bare.to_string(),
    }
}

/// Normalises stress markers in a phoneme string.
///
/// * no marked phone: the input is returned unchanged;
/// * one marked phone: its marker becomes primary `'`;
/// * several: the first becomes secondary `,`, the last becomes `%`, and
///   every marker in between is removed.
///
/// Tokens are re-joined with single spaces. Idempotent.
pub fn correct_stress_markers(phonemes: &str) -> String {
    let phones: Vec<&str> = phonemes.split_whitespace().collect();

    let first = match phones.iter().position(|p| is_marked(p)) {
        Some(i) => i,
        None => return phonemes.to_string(),
    };
    let last = phones.iter().rposition(|p| is_marked(p)).unwrap_or(first);

    let mut out: Vec<String> = Vec::with_capacity(phones.len());
    for (i, phone) in phones.iter().enumerate() {
        let rewritten = if first == last && i == first {
            remark(phone, Some(PRIMARY))
        } else if i == first {
            remark(phone, Some(SECONDARY))
        } else if i == last {
            remark(phone, Some(NON_PRIMARY))
        } else if i > first && i < last && is_marked(phone) {
            remark(phone, None)
        } else {
            phone.to_string()
        };

        // A phone that was nothing but a marker disappears when stripped.
        if !rewritten.is_empty() {
            out.push(rewritten);
        }
    }

    out.join(" ")
}
