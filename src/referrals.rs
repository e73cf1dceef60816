//! Referral invite selection
//!
//! Promoted external bots/channels offered alongside every combo response.
//! Entries come from `referrals.yml` and the source list is shared across
//! all invocations, so selection must never mutate it.

use rand::seq::SliceRandom;
use serde::Deserialize;

/// A promoted external bot/channel entry.
///
/// Field names follow the `referrals.yml` entries (`bot:` / `url:`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Referral {
    pub bot: String,
    pub url: String,
}

/// How many referral invites accompany each combo delivery.
pub const INVITES_PER_COMBO: usize = 2;

/// Selects up to `count` distinct referrals uniformly at random, without
/// replacement and without mutating the source slice.
///
/// A source smaller than `count` returns everything it has; an empty source
/// returns an empty selection. No duplicate entry ever appears twice in one
/// selection.
pub fn pick_invites(referrals: &[Referral], count: usize) -> Vec<&Referral> {
    let mut rng = rand::thread_rng();
    referrals.choose_multiple(&mut rng, count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn referral(name: &str) -> Referral {
        Referral {
            bot: name.to_string(),
            url: format!("https://t.me/{}", name),
        }
    }

    #[test]
    fn selection_has_no_duplicates() {
        let source = vec![referral("a"), referral("b"), referral("c"), referral("d")];

        for _ in 0..50 {
            let picked = pick_invites(&source, INVITES_PER_COMBO);
            assert_eq!(picked.len(), INVITES_PER_COMBO);
            assert_ne!(picked[0], picked[1]);
        }
    }

    #[test]
    fn undersized_source_returns_what_exists() {
        let source = vec![referral("only")];
        let picked = pick_invites(&source, INVITES_PER_COMBO);

        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0], &source[0]);
    }

    #[test]
    fn empty_source_returns_empty_selection() {
        assert!(pick_invites(&[], INVITES_PER_COMBO).is_empty());
    }

    #[test]
    fn source_is_not_mutated() {
        let source = vec![referral("a"), referral("b"), referral("c")];
        let before = source.clone();

        for _ in 0..10 {
            let _ = pick_invites(&source, INVITES_PER_COMBO);
        }

        assert_eq!(source, before);
    }
}
