use super::*;

#[test]
fn offer_subtitle_shows_engine_gearbox_and_price() {
    assert_eq!(offer_subtitle(FEATURED), "3.0L Автомат · 6\u{a0}890\u{a0}000 ₽");
}

#[test]
fn term_summary_uses_plural_label_and_grouping() {
    assert_eq!(
        term_summary(LoanTerm::default(), ADVERTISED_MONTHLY_PAYMENT),
        "60 месяцев · Платёж 114\u{a0}833 ₽/мес"
    );
}

#[test]
fn featured_seed_matches_card_offer() {
    let seed = Seed::from(FEATURED);
    assert_eq!(seed, Seed::new("BMW X5 2022", 6_890_000));
}
