//! Deterministic release labels.
//!
//! Labels are bijective base-26 numerals over `A..=Z`: `A`, `B`, ..., `Z`,
//! `AA`, `AB`, ..., `ZZ`, `AAA`, ... The n-th release read gets the n-th
//! label.

/// Returns the label for a 0-based position.
///
/// # Example
///
/// ```
/// use sprint_qa::io::label;
///
/// assert_eq!(label(0), "A");
/// assert_eq!(label(26), "AA");
/// assert_eq!(label(702), "AAA");
/// ```
pub fn label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}

/// Infinite iterator over labels in order.
pub fn labels() -> impl Iterator<Item = String> {
    (0..).map(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letters() {
        assert_eq!(label(0), "A");
        assert_eq!(label(1), "B");
        assert_eq!(label(25), "Z");
    }

    #[test]
    fn test_two_letters() {
        assert_eq!(label(26), "AA");
        assert_eq!(label(27), "AB");
        assert_eq!(label(51), "AZ");
        assert_eq!(label(52), "BA");
        assert_eq!(label(701), "ZZ");
    }

    #[test]
    fn test_three_letters() {
        assert_eq!(label(702), "AAA");
        assert_eq!(label(703), "AAB");
    }

    #[test]
    fn test_labels_iterator() {
        let first: Vec<String> = labels().take(3).collect();
        assert_eq!(first, vec!["A", "B", "C"]);
        assert_eq!(labels().nth(28).as_deref(), Some("AC"));
    }
}
