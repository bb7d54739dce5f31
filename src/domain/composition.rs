use serde::{Deserialize, Serialize};

use crate::{
    codec::composite_record,
    domain::{check_text, Validate},
    error::ValidationError,
};

/// A liquid ingredient measured by volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Liquid {
    pub name: String,
    pub unit: String,
    pub volume: u32,
}

/// A bulk solid measured in `unit`s (grams, spoons...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolidBulk {
    pub name: String,
    pub unit: String,
    pub volume: u32,
}

/// A countable solid (lime wedges, cherries).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolidUnit {
    pub name: String,
    pub amount: u32,
}

/// Everything that goes into one serving of a drink.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    pub ice_bulk: u32,
    pub liquids: Vec<Liquid>,
    pub solids_bulk: Vec<SolidBulk>,
    pub solids_unit: Vec<SolidUnit>,
}

composite_record!(Liquid, "Liquid" => [name, unit, volume]);
composite_record!(SolidBulk, "Solid_bulk" => [name, unit, volume]);
composite_record!(SolidUnit, "Solid_unit" => [name, amount]);
composite_record!(Composition, "Composition" => [ice_bulk, liquids, solids_bulk, solids_unit]);

impl Liquid {
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        volume: u32,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            volume,
        }
    }
}

impl SolidBulk {
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        volume: u32,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            volume,
        }
    }
}

impl SolidUnit {
    pub fn new(
        name: impl Into<String>,
        amount: u32,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

impl Composition {
    pub fn is_empty(&self) -> bool {
        self.liquids.is_empty() && self.solids_bulk.is_empty() && self.solids_unit.is_empty()
    }
}

impl Validate for Composition {
    fn validate(&self) -> Result<(), ValidationError> {
        for (i, liquid) in self.liquids.iter().enumerate() {
            check_text(&format!("liquids[{i}].name"), &liquid.name)?;
            check_text(&format!("liquids[{i}].unit"), &liquid.unit)?;
        }
        for (i, solid) in self.solids_bulk.iter().enumerate() {
            check_text(&format!("solids_bulk[{i}].name"), &solid.name)?;
            check_text(&format!("solids_bulk[{i}].unit"), &solid.unit)?;
        }
        for (i, solid) in self.solids_unit.iter().enumerate() {
            check_text(&format!("solids_unit[{i}].name"), &solid.name)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
