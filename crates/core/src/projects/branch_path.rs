//! Bijective base-26 path segments, identical to spreadsheet column naming
//! (`A=0, B=1, …, Z=25, AA=26, …`).

use crate::errors::{Result, ValidationError};

/// Encodes a non-negative index as an uppercase-letter label.
pub fn index_to_alpha(index: u64) -> String {
    let mut out = Vec::new();
    let mut n = index;
    loop {
        out.push(b'A' + (n % 26) as u8);
        n /= 26;
        if n == 0 {
            break;
        }
        n -= 1;
    }
    out.reverse();
    out.into_iter().map(char::from).collect()
}

/// Decodes an uppercase-letter label back to its index.
///
/// Rejects empty strings and any character outside `A-Z`.
pub fn alpha_to_index(segment: &str) -> Result<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(ValidationError::InvalidInput(format!(
            "invalid branch path segment: {segment:?}"
        ))
        .into());
    }

    let mut n: u64 = 0;
    for b in segment.bytes() {
        n = n * 26 + (b - b'A' + 1) as u64;
    }
    Ok(n - 1)
}

/// Mints the next sibling segment given the existing sibling labels.
///
/// Labels that fail to decode are ignored; with no decodable siblings the
/// first segment is `"A"`.
pub fn next_segment<I, S>(existing: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let max = existing
        .into_iter()
        .filter_map(|s| alpha_to_index(s.as_ref()).ok())
        .max();

    match max {
        Some(n) => index_to_alpha(n + 1),
        None => "A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_spreadsheet_columns() {
        assert_eq!(index_to_alpha(0), "A");
        assert_eq!(index_to_alpha(1), "B");
        assert_eq!(index_to_alpha(25), "Z");
        assert_eq!(index_to_alpha(26), "AA");
        assert_eq!(index_to_alpha(27), "AB");
        assert_eq!(index_to_alpha(51), "AZ");
        assert_eq!(index_to_alpha(52), "BA");
        assert_eq!(index_to_alpha(701), "ZZ");
        assert_eq!(index_to_alpha(702), "AAA");
    }

    #[test]
    fn decodes_labels() {
        assert_eq!(alpha_to_index("A").unwrap(), 0);
        assert_eq!(alpha_to_index("Z").unwrap(), 25);
        assert_eq!(alpha_to_index("AA").unwrap(), 26);
        assert_eq!(alpha_to_index("BA").unwrap(), 52);
        assert_eq!(alpha_to_index("AAA").unwrap(), 702);
    }

    #[test]
    fn round_trips_both_ways() {
        for n in 0..2000u64 {
            assert_eq!(alpha_to_index(&index_to_alpha(n)).unwrap(), n);
        }
        for s in ["A", "Q", "Z", "AA", "AZ", "QX", "ZZZ"] {
            assert_eq!(index_to_alpha(alpha_to_index(s).unwrap()), s);
        }
    }

    #[test]
    fn rejects_invalid_segments() {
        assert!(alpha_to_index("").is_err());
        assert!(alpha_to_index("a").is_err());
        assert!(alpha_to_index("A1").is_err());
        assert!(alpha_to_index("A-B").is_err());
        assert!(alpha_to_index(" A").is_err());
    }

    #[test]
    fn mints_next_segment() {
        assert_eq!(next_segment(Vec::<String>::new()), "A");
        assert_eq!(next_segment(["A"]), "B");
        assert_eq!(next_segment(["A", "B", "C"]), "D");
        assert_eq!(next_segment(["C", "A"]), "D");
        assert_eq!(next_segment(["Z"]), "AA");
        // Undecodable labels are ignored.
        assert_eq!(next_segment(["A", "??", "B"]), "C");
        assert_eq!(next_segment(["??"]), "A");
    }
}
