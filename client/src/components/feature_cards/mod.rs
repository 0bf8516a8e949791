//! Landing-page feature cards. Each card can open the application dialog,
//! optionally with one of its vehicles filled in.

pub mod financing_card;
pub mod vehicle_search_card;
