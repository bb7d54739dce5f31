use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::{
    codec::{composite_record, composite_tag},
    domain::{check_text, Composition, Validate},
    error::ValidationError,
};

/// Section of the menu a drink is listed under.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DrinkCategory {
    #[default]
    Beers,
    Ciders,
    LongDrinks,
    NonAlcos,
    ShortDrinks,
    ShotDrinks,
    StrongAlcos,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CookingMethod {
    Shake,
    Stir,
    #[default]
    Build,
    Blend,
}

/// Ice served with the drink.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum IceType {
    BlockIce,
    CubedIce,
    CrackedIce,
    NuggetIce,
    CrushedIce,
    #[default]
    NoIce,
}

composite_tag!(DrinkCategory, "drink category");
composite_tag!(CookingMethod, "cooking method");
composite_tag!(IceType, "ice type");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    pub id: u32,
    pub name: String,
    pub category: DrinkCategory,
    pub cooking_method: CookingMethod,
    pub composition: Composition,
    pub order_ice_type: IceType,
    pub price: u32,
    pub bars_id: Vec<u32>,
}

composite_record!(Drink, "Drink" => [
    id,
    name,
    category,
    cooking_method,
    composition,
    order_ice_type,
    price,
    bars_id,
]);

impl Validate for Drink {
    fn validate(&self) -> Result<(), ValidationError> {
        check_text("name", &self.name)?;
        self.composition.validate()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
