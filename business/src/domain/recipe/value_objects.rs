use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Closed set of recipe categories.
///
/// Tags are the capitalised variant names (`"Fish"`, `"Dessert"`, ...).
/// Parsing is ASCII case-insensitive, so `"fish"` is accepted as well.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Appetizer,
    Snack,
    Soup,
    Meat,
    Fish,
    Dessert,
    Other,
}
