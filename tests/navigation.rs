use proptest::prelude::*;
use proptest::test_runner::Config;
use speaker_deck::{ChartData, Deck, DeckError, Layout, LayoutKind, NavAction, Presenter, SlideRecord};

fn presenter() -> Presenter {
    Presenter::new(Deck::speaker_market().expect("built-in deck"))
}

fn action() -> impl Strategy<Value = NavAction> {
    prop_oneof![Just(NavAction::Previous), Just(NavAction::Next)]
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn position_never_leaves_the_deck(actions in prop::collection::vec(action(), 0..64)) {
        let mut p = presenter();
        for a in actions {
            p.apply(a);
            prop_assert!(p.position() < p.len());
        }
    }

    #[test]
    fn moves_are_inert_exactly_at_the_ends(actions in prop::collection::vec(action(), 0..64)) {
        let mut p = presenter();
        for a in actions {
            let before = p.position();
            let moved = p.apply(a);
            match a {
                NavAction::Previous => {
                    prop_assert_eq!(moved, before > 0);
                    prop_assert_eq!(p.position(), if moved { before - 1 } else { before });
                }
                NavAction::Next => {
                    prop_assert_eq!(moved, before < p.len() - 1);
                    prop_assert_eq!(p.position(), if moved { before + 1 } else { before });
                }
            }
            prop_assert_eq!(p.can_go_previous(), p.position() > 0);
            prop_assert_eq!(p.can_go_next(), p.position() < p.len() - 1);
            prop_assert_eq!(p.indicator(), format!("{} / {}", p.position() + 1, p.len()));
        }
    }

    #[test]
    fn unknown_layout_tags_fail_construction(tag in "[a-z]{1,12}") {
        prop_assume!(LayoutKind::parse(&tag).is_none());
        let mut records = speaker_deck::deck::speaker_market_records();
        records.push(SlideRecord::new(tag.clone(), "Appendix"));
        let err = Deck::from_records(records, ChartData::speaker_market()).unwrap_err();
        prop_assert_eq!(err, DeckError::UnknownLayout { index: 7, layout: tag });
    }
}

#[test]
fn walking_the_deck_end_to_end() {
    let mut p = presenter();
    assert_eq!(p.current().title, "Understanding Consumer Preferences");
    assert!(matches!(p.current().layout, Layout::Title { .. }));

    let mut titles = vec![p.current().title.clone()];
    while p.next() {
        titles.push(p.current().title.clone());
    }
    assert_eq!(
        titles,
        [
            "Understanding Consumer Preferences",
            "Market Overview",
            "Consumer Preferences",
            "Price Sensitivity Analysis",
            "Interview with Gaurav Siddharth",
            "Key Recommendations",
            "Thank You",
        ]
    );
    assert_eq!(p.position(), 6);
    assert!(matches!(p.current().layout, Layout::Title { .. }));

    while p.previous() {}
    assert_eq!(p.position(), 0);
}
