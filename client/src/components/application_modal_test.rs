use super::*;
use leads::Seed;

#[test]
fn submit_label_reflects_busy_state() {
    assert_eq!(submit_label(false), "Отправить заявку");
    assert_eq!(submit_label(true), "Отправка...");
}

#[test]
fn input_text_shows_seeded_vehicle() {
    let dialog = ApplicationDialog::new(Seed::new("Kia K5 2023", 2_890_000));

    assert_eq!(input_text(&dialog, Field::CarName), "Kia K5 2023");
    assert_eq!(input_text(&dialog, Field::CarPrice), "2890000");
    assert_eq!(input_text(&dialog, Field::LoanTerm), "60");
    assert_eq!(input_text(&dialog, Field::FinancingType), "credit");
    assert_eq!(input_text(&dialog, Field::Name), "");
}
