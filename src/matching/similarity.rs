/// Similarity ratio between two strings on a 0-100 scale.
///
/// The ratio is `2 * LCS / (|a| + |b|)` where LCS is the longest common
/// subsequence, i.e. one minus the normalized insertion/deletion distance.
/// Lengths are counted in `char`s so native-script names compare per code
/// point. The result is rounded half-to-even. Either string being empty
/// scores 0.
///
/// # Examples
///
/// ```
/// use food_resolver::matching::similarity::ratio;
///
/// assert_eq!(ratio("wheat", "wheat"), 100);
/// assert_eq!(ratio("whaet", "wheat"), 80);
/// assert_eq!(ratio("oats", "rice"), 0);
/// ```
#[must_use]
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let common = lcs_len(&a, &b);
    let score = round_half_even(200 * common, total);

    // common <= min(|a|, |b|), so the score never exceeds 100
    u8::try_from(score).unwrap_or(100)
}

/// Length of the longest common subsequence, two-row dynamic programming
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// `numerator / denominator` rounded to the nearest integer, ties to even
fn round_half_even(numerator: usize, denominator: usize) -> usize {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;

    match (2 * remainder).cmp(&denominator) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal => quotient + (quotient % 2),
    }
}

/// Rank `choices` against `query` and keep the best `limit`.
///
/// Returns `(choice index, score)` pairs, highest score first. The sort is
/// stable, so equal scores keep the order of `choices`.
pub fn extract_top<'a, I>(query: &str, choices: I, limit: usize) -> Vec<(usize, u8)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<(usize, u8)> = choices
        .into_iter()
        .enumerate()
        .map(|(idx, choice)| (idx, ratio(query, choice)))
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(ratio("quinoa", "quinoa"), 100);
        assert_eq!(ratio("రాగులు", "రాగులు"), 100);
    }

    #[test]
    fn test_empty_strings_score_zero() {
        assert_eq!(ratio("", "oats"), 0);
        assert_eq!(ratio("oats", ""), 0);
        assert_eq!(ratio("", ""), 0);
    }

    #[test]
    fn test_transposition() {
        // LCS("quinao", "quinoa") = 5 -> 10 / 12
        assert_eq!(ratio("quinao", "quinoa"), 83);
    }

    #[test]
    fn test_ratio_is_symmetric() {
        assert_eq!(ratio("kodo millet", "kodo milet"), ratio("kodo milet", "kodo millet"));
    }

    #[test]
    fn test_ratio_is_case_sensitive() {
        assert_eq!(ratio("Rice", "rice"), 75);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // One of four Telugu code points differs
        let score = ratio("రాగు", "రాగి");
        assert_eq!(score, 75);
    }

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_half_even(141, 2), 70); // 70.5 -> 70
        assert_eq!(round_half_even(143, 2), 72); // 71.5 -> 72
        assert_eq!(round_half_even(200, 3), 67);
    }

    #[test]
    fn test_extract_top_orders_and_limits() {
        let choices = ["rice", "oats", "wheat", "wheat"];
        let top = extract_top("wheat", choices, 3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0], (2, 100));
        assert_eq!(top[1], (3, 100));
        assert!(top[2].1 < 100);
    }

    #[test]
    fn test_extract_top_ties_keep_choice_order() {
        let choices = ["aaa", "bbb", "ccc"];
        let top = extract_top("xyz", choices, 2);
        assert_eq!(top, vec![(0, 0), (1, 0)]);
    }
}
