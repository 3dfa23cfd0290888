//! Adversarial group selection
//!
//! Always keeps the group that leaves the player with the most ambiguity.

use super::partition::PatternGroups;
use crate::core::Pattern;

/// Select the largest pattern group
///
/// Groups are scanned in ascending pattern order and a group replaces the
/// current choice only when it is strictly larger, so among equally large
/// groups the one with the smallest pattern wins. Returns `None` when there
/// are no groups.
///
/// # Examples
/// ```
/// use absurdle::adversary::{group_by_pattern, select_largest_group};
/// use absurdle::core::Word;
///
/// let guess = Word::new("berry");
/// let words = vec![Word::new("berry"), Word::new("ferry"), Word::new("merry")];
/// let groups = group_by_pattern(&guess, words);
///
/// let (pattern, members) = select_largest_group(&groups).unwrap();
/// assert_eq!(pattern.to_emoji(), "⬜🟩🟩🟩🟩");
/// assert_eq!(members.len(), 2);
/// ```
#[must_use]
pub fn select_largest_group<W>(groups: &PatternGroups<W>) -> Option<(&Pattern, &[W])> {
    let mut best: Option<(&Pattern, &[W])> = None;

    for (pattern, members) in groups {
        if best.is_none_or(|(_, current)| members.len() > current.len()) {
            best = Some((pattern, members.as_slice()));
        }
    }

    best
}
