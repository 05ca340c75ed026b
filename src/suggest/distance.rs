//! Levenshtein edit distance.
//!
//! Case-sensitive and normalisation-free: callers lower-case both sides first when
//! they want case-insensitive comparison.

/// Computes the minimum number of single-character insertions, deletions, or
/// substitutions needed to turn `a` into `b`.
///
/// Lengths are counted in `char`s. Uses two rolling rows over the shorter string,
/// so memory is `O(min(|a|, |b|))`.
pub fn distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Distance is symmetric, so the shorter side can index the rows.
    let (long, short) = if a_chars.len() >= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };

    if short.is_empty() {
        return long.len();
    }

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row = vec![0usize; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, sc) in short.iter().enumerate() {
            curr_row[j + 1] = if lc == sc {
                prev_row[j]
            } else {
                // deletion, insertion, substitution
                1 + prev_row[j + 1].min(curr_row[j]).min(prev_row[j])
            };
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[short.len()]
}
