use serde::Serialize;

use crate::card::CardSymbol;

const BLACKJACK: u16 = 21;

/// Best total for a hand and whether an Ace was counted high going into it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandValuation {
    pub value: u16,
    pub is_soft: bool,
}

impl HandValuation {
    pub fn is_bust(&self) -> bool {
        self.value > BLACKJACK
    }

    /// Row label in a strategy chart, e.g. "S18" or "16".
    pub fn label(&self) -> String {
        if self.is_soft {
            format!("S{}", self.value)
        } else {
            self.value.to_string()
        }
    }
}

/// Every Ace starts at 11 and drops to 1 while the hand is over 21. The hand
/// is soft when it held an Ace at all and did not bust.
pub fn compute_value(hand: &[CardSymbol]) -> HandValuation {
    let mut total: u16 = 0;
    let mut aces = 0u16;

    for &card in hand {
        total = total.saturating_add(u16::from(card.rank()));
        if card.is_ace() {
            aces += 1;
        }
    }

    let initial_aces_as_eleven = aces;

    while total > BLACKJACK && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    HandValuation {
        value: total,
        is_soft: initial_aces_as_eleven > 0 && total <= BLACKJACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use CardSymbol::*;

    #[rstest]
    #[case::soft_eighteen(&[Ace, Seven], 18, true)]
    #[case::hard_sixteen(&[Ten, Six], 16, false)]
    #[case::hard_twenty_one(&[Five, Six, King], 21, false)]
    #[case::one_ace_downgraded(&[Ace, Ace, Nine], 21, true)]
    #[case::pair_of_aces(&[Ace, Ace], 12, true)]
    #[case::natural(&[Ace, Queen], 21, true)]
    #[case::every_ace_downgraded(&[Ace, Ten, Ten], 21, true)]
    #[case::downgraded_ace_still_soft(&[Ace, Nine, Eight], 18, true)]
    #[case::bust_with_ace(&[Ace, King, Queen, Two], 23, false)]
    #[case::bust_without_ace(&[King, Queen, Two], 22, false)]
    #[case::single_card(&[Seven], 7, false)]
    #[case::four_aces(&[Ace, Ace, Ace, Ace], 14, true)]
    fn values_hand(#[case] hand: &[CardSymbol], #[case] value: u16, #[case] is_soft: bool) {
        assert_eq!(compute_value(hand), HandValuation { value, is_soft });
    }

    #[test]
    fn empty_hand_is_hard_zero() {
        assert_eq!(compute_value(&[]), HandValuation { value: 0, is_soft: false });
    }

    #[test]
    fn labels_follow_chart_notation() {
        assert_eq!(compute_value(&[Ace, Seven]).label(), "S18");
        assert_eq!(compute_value(&[Ten, Six]).label(), "16");
        assert!(compute_value(&[King, Queen, Two]).is_bust());
    }

    #[test]
    fn serializes_for_javascript() {
        let json = serde_json::to_value(compute_value(&[Ace, Seven])).unwrap();
        assert_eq!(json, serde_json::json!({ "value": 18, "isSoft": true }));
    }

    fn hand_strategy() -> impl Strategy<Value = Vec<CardSymbol>> {
        prop::collection::vec(prop::sample::select(CardSymbol::ALL.to_vec()), 1..12)
    }

    fn low_total(hand: &[CardSymbol]) -> u16 {
        hand.iter()
            .map(|c| if c.is_ace() { 1 } else { u16::from(c.rank()) })
            .sum()
    }

    fn non_ace_strategy(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<CardSymbol>> {
        prop::collection::vec(prop::sample::select(CardSymbol::ALL[1..].to_vec()), len)
    }

    proptest! {
        #[test]
        fn hands_without_aces_are_hard_sums(hand in non_ace_strategy(1..12)) {
            let valuation = compute_value(&hand);
            prop_assert!(!valuation.is_soft);
            prop_assert_eq!(valuation.value, low_total(&hand));
        }

        #[test]
        fn aces_stay_high_when_they_fit(others in non_ace_strategy(0..3), position in 0usize..3) {
            let mut hand = others;
            hand.insert(position.min(hand.len()), Ace);
            let high: u16 = hand.iter().map(|c| u16::from(c.rank())).sum();
            if high <= 21 {
                prop_assert_eq!(compute_value(&hand), HandValuation { value: high, is_soft: true });
            }
        }

        #[test]
        fn value_is_best_total_not_over_twenty_one(hand in hand_strategy()) {
            let aces = hand.iter().filter(|c| c.is_ace()).count() as u16;
            let low = low_total(&hand);
            let best = (0..=aces)
                .map(|high_aces| low + 10 * high_aces)
                .filter(|total| *total <= 21)
                .max()
                .unwrap_or(low);

            let valuation = compute_value(&hand);
            prop_assert_eq!(valuation.value, best);
            prop_assert_eq!(valuation.is_soft, aces > 0 && best <= 21);
        }
    }
}
