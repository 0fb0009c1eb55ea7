//! Edit distance, used to suggest a registered unit for a misspelled name.

use std::cmp;

pub fn lev_distance(me: &str, t: &str) -> usize {
    if me.is_empty() {
        return t.chars().count();
    }
    if t.is_empty() {
        return me.chars().count();
    }

    let mut dcol = (0..=t.len()).collect::<Vec<_>>();
    let mut t_last = 0;

    for (i, sc) in me.chars().enumerate() {
        let mut current = i;
        dcol[0] = current + 1;

        for (j, tc) in t.chars().enumerate() {
            let next = dcol[j + 1];

            if sc == tc {
                dcol[j + 1] = current;
            } else {
                dcol[j + 1] = cmp::min(current, next);
                dcol[j + 1] = cmp::min(dcol[j + 1], dcol[j]) + 1;
            }

            current = next;
            t_last = j;
        }
    }

    dcol[t_last + 1]
}

/// Finds the closest candidate to `choice`.
///
/// Only candidates within a third of the length of `choice` (and at least
/// one edit) are considered so we don't suggest out-of-the-wall options.
pub fn closest<'a, T>(
    choice: &str,
    iter: impl Iterator<Item = T>,
    key: impl Fn(&T) -> &'a str,
) -> Option<T> {
    let max = cmp::max(choice.chars().count() / 3, 1);
    iter.map(|e| (lev_distance(choice, key(&e)), e))
        .filter(|&(d, _)| d <= max)
        .min_by_key(|t| t.0)
        .map(|t| t.1)
}
