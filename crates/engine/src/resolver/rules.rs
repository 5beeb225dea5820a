//! Decision rules mapping (boost, user progress, claim, time) to a card

use super::card::{BoostCard, BoostDisplayState};
use questboost_core::{Address, Boost, CompletedQuests, EpochMillis};

/// True iff every quest of `boost` is in `completed`.
///
/// Missing or errored progress counts as not completed. A boost with no
/// quests is complete as soon as progress is known.
pub fn has_user_completed_boost(boost: &Boost, completed: Option<&CompletedQuests>) -> bool {
    completed.is_some_and(|c| c.contains_all(&boost.quests))
}

/// Whether the card should link to the boost page.
///
/// An ended boost is a dead end once the user either never completed it or
/// already claimed its reward.
pub fn is_clickable(boost: &Boost, completed: bool, claimed: bool, now: EpochMillis) -> bool {
    if !boost.is_expired(now) {
        return true;
    }
    completed && !claimed
}

fn display_state(
    boost: &Boost,
    completed: bool,
    claimed: bool,
    now: EpochMillis,
) -> BoostDisplayState {
    match (boost.is_expired(now), completed, claimed) {
        (false, false, _) => BoostDisplayState::ShowReward,
        (false, true, _) => BoostDisplayState::Done,
        (true, false, _) => BoostDisplayState::BoostEndedNoWin,
        (true, true, true) => BoostDisplayState::BoostEndedAlreadyClaimed,
        (true, true, false) if boost.has_winner() => BoostDisplayState::SeeReward,
        (true, true, false) => BoostDisplayState::BoostEndedNoWin,
    }
}

/// Resolve the card for `boost` as seen by `identity` at `now`.
///
/// Without an identity no per-user badge is computed: an open boost shows its
/// reward, an ended one shows nothing.
pub fn resolve_boost_state(
    boost: &Boost,
    completed: Option<&CompletedQuests>,
    claimed: bool,
    now: EpochMillis,
    identity: Option<&Address>,
) -> BoostCard {
    let has_completed = has_user_completed_boost(boost, completed);
    let clickable = is_clickable(boost, has_completed, claimed, now);

    let state = match identity {
        Some(_) => Some(display_state(boost, has_completed, claimed, now)),
        None if !boost.is_expired(now) => Some(BoostDisplayState::ShowReward),
        None => None,
    };

    BoostCard {
        boost_id: boost.id,
        name: boost.name.clone(),
        img_url: boost.img_url.clone(),
        quest_count: boost.quest_count(),
        amount: boost.amount,
        token: boost.token.clone(),
        state,
        clickable,
        link: clickable.then(|| boost.link_path()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questboost_core::MILLISECONDS_PER_DAY;

    const NOW: EpochMillis = EpochMillis(1_700_000_000_000);

    fn open_boost() -> Boost {
        Boost {
            id: 11,
            name: "Ekubo".to_string(),
            img_url: "/ekubo.webp".to_string(),
            quests: vec![1, 2],
            amount: 500.0,
            token: "USDC".to_string(),
            expiry: NOW.plus_millis(MILLISECONDS_PER_DAY),
            winner: None,
        }
    }

    fn ended_boost(winner: Option<&str>) -> Boost {
        Boost {
            expiry: NOW.minus_millis(MILLISECONDS_PER_DAY),
            winner: winner.map(str::to_string),
            ..open_boost()
        }
    }

    fn user() -> Address {
        Address::parse("0x0123").unwrap()
    }

    fn done() -> CompletedQuests {
        CompletedQuests::from_ids([1, 2, 7])
    }

    fn partial() -> CompletedQuests {
        CompletedQuests::from_ids([1])
    }

    #[test]
    fn test_completion_is_subset() {
        let boost = open_boost();
        assert!(has_user_completed_boost(&boost, Some(&done())));
        assert!(!has_user_completed_boost(&boost, Some(&partial())));
        assert!(!has_user_completed_boost(&boost, None));
        assert!(!has_user_completed_boost(
            &boost,
            Some(&CompletedQuests::unavailable("down"))
        ));
    }

    #[test]
    fn test_no_quests_is_vacuously_complete() {
        let boost = Boost {
            quests: vec![],
            ..open_boost()
        };
        assert!(has_user_completed_boost(&boost, Some(&CompletedQuests::default())));
        assert!(!has_user_completed_boost(&boost, None));
    }

    #[test]
    fn test_open_not_completed_shows_reward() {
        let card = resolve_boost_state(&open_boost(), Some(&partial()), false, NOW, Some(&user()));
        assert_eq!(card.state, Some(BoostDisplayState::ShowReward));
        assert!(card.clickable);
        assert_eq!(card.link.as_deref(), Some("/quest-boost/11"));
    }

    #[test]
    fn test_ended_completed_with_winner_sees_reward() {
        let boost = ended_boost(Some("0xABC"));
        let card = resolve_boost_state(&boost, Some(&done()), false, NOW, Some(&user()));
        assert_eq!(card.state, Some(BoostDisplayState::SeeReward));
        assert!(card.clickable);
    }

    #[test]
    fn test_ended_completed_without_winner() {
        let boost = ended_boost(None);
        let card = resolve_boost_state(&boost, Some(&done()), false, NOW, Some(&user()));
        assert_eq!(card.state, Some(BoostDisplayState::BoostEndedNoWin));
        // no winner only changes the badge: completed and not yet claimed stays clickable
        assert!(card.clickable);
        assert_eq!(card.link.as_deref(), Some("/quest-boost/11"));
    }

    #[test]
    fn test_ended_already_claimed() {
        let boost = ended_boost(Some("0xABC"));
        let card = resolve_boost_state(&boost, Some(&done()), true, NOW, Some(&user()));
        assert_eq!(card.state, Some(BoostDisplayState::BoostEndedAlreadyClaimed));
        assert!(!card.clickable);
        assert!(card.link.is_none());
    }

    #[test]
    fn test_ended_not_completed() {
        let boost = ended_boost(Some("0xABC"));
        let card = resolve_boost_state(&boost, Some(&partial()), false, NOW, Some(&user()));
        assert_eq!(card.state, Some(BoostDisplayState::BoostEndedNoWin));
        assert!(!card.clickable);
    }

    #[test]
    fn test_progress_error_degrades_to_not_completed() {
        let boost = ended_boost(Some("0xABC"));
        let failed = CompletedQuests::unavailable("timeout");
        let card = resolve_boost_state(&boost, Some(&failed), false, NOW, Some(&user()));
        assert_eq!(card.state, Some(BoostDisplayState::BoostEndedNoWin));
        assert!(!card.clickable);
    }

    #[test]
    fn test_open_completed_is_done() {
        let card = resolve_boost_state(&open_boost(), Some(&done()), false, NOW, Some(&user()));
        assert_eq!(card.state, Some(BoostDisplayState::Done));
        assert!(card.clickable);
    }

    #[test]
    fn test_signed_out_sees_reward_only_while_open() {
        let open = resolve_boost_state(&open_boost(), None, false, NOW, None);
        assert_eq!(open.state, Some(BoostDisplayState::ShowReward));
        assert!(open.clickable);

        let ended = resolve_boost_state(&ended_boost(Some("0xABC")), None, false, NOW, None);
        assert_eq!(ended.state, None);
        assert!(!ended.clickable);
    }

    #[test]
    fn test_expiry_instant_is_still_open() {
        let boost = Boost {
            expiry: NOW,
            ..open_boost()
        };
        let card = resolve_boost_state(&boost, Some(&partial()), false, NOW, Some(&user()));
        assert_eq!(card.state, Some(BoostDisplayState::ShowReward));

        let later = resolve_boost_state(&boost, Some(&partial()), false, NOW.plus_millis(1), Some(&user()));
        assert_eq!(later.state, Some(BoostDisplayState::BoostEndedNoWin));
    }

    #[test]
    fn test_clickability_matrix() {
        let boost = ended_boost(None);
        assert!(!is_clickable(&boost, false, false, NOW));
        assert!(!is_clickable(&boost, false, true, NOW));
        assert!(is_clickable(&boost, true, false, NOW));
        assert!(!is_clickable(&boost, true, true, NOW));
        assert!(is_clickable(&open_boost(), false, true, NOW));
    }
}
