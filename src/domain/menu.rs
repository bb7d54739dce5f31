use std::collections::{btree_map, BTreeMap};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    codec::{composite_record, CompositeDecode, CompositeEncode, LiteralWriter, TokenReader},
    domain::{check_text, Drink, Validate},
    error::{DecodeError, DecodeResult, ValidationError},
};

/// One category of a menu: the element type of the `drinks` column array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinksGroup {
    pub category: String,
    pub drinks: Vec<Drink>,
}

composite_record!(DrinksGroup, "DrinksGroup" => [category, drinks]);

impl DrinksGroup {
    pub fn new(
        category: impl Into<String>,
        drinks: Vec<Drink>,
    ) -> Self {
        Self {
            category: category.into(),
            drinks,
        }
    }

    /// A single-drink group named after the drink's own category.
    pub fn for_drink(drink: Drink) -> Self {
        Self {
            category: drink.category.to_string(),
            drinks: vec![drink],
        }
    }
}

/// Drinks of a menu keyed by category name.
///
/// Keys are unique and iterate in lexicographic order, which is also the
/// order of the encoded array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrinksByCategory(BTreeMap<String, Vec<Drink>>);

impl DrinksByCategory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups drinks under their own category names, keeping input order
    /// inside each group.
    pub fn from_drinks(drinks: impl IntoIterator<Item = Drink>) -> Self {
        let mut map = Self::new();
        for drink in drinks {
            map.push(drink.category.to_string(), drink);
        }
        map
    }

    /// Appends a drink to `category`, creating the group if needed.
    pub fn push(
        &mut self,
        category: impl Into<String>,
        drink: Drink,
    ) {
        self.0.entry(category.into()).or_default().push(drink);
    }

    /// Replaces the whole group, returning the previous one.
    pub fn insert(
        &mut self,
        category: impl Into<String>,
        drinks: Vec<Drink>,
    ) -> Option<Vec<Drink>> {
        self.0.insert(category.into(), drinks)
    }

    pub fn get(
        &self,
        category: &str,
    ) -> Option<&[Drink]> {
        self.0.get(category).map(Vec::as_slice)
    }

    pub fn remove(
        &mut self,
        category: &str,
    ) -> Option<Vec<Drink>> {
        self.0.remove(category)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<Drink>> {
        self.0.iter()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of drinks across all categories.
    pub fn drink_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<Drink>> {
        self.0
    }

    fn to_groups(&self) -> Vec<DrinksGroup> {
        self.0
            .iter()
            .map(|(category, drinks)| DrinksGroup::new(category.clone(), drinks.clone()))
            .collect()
    }
}

impl From<BTreeMap<String, Vec<Drink>>> for DrinksByCategory {
    fn from(map: BTreeMap<String, Vec<Drink>>) -> Self {
        Self(map)
    }
}

impl FromIterator<DrinksGroup> for DrinksByCategory {
    /// Later groups with an already seen category are appended to it.
    fn from_iter<I: IntoIterator<Item = DrinksGroup>>(iter: I) -> Self {
        let mut map = Self::new();
        for group in iter {
            map.0.entry(group.category).or_default().extend(group.drinks);
        }
        map
    }
}

impl<'a> IntoIterator for &'a DrinksByCategory {
    type Item = (&'a String, &'a Vec<Drink>);
    type IntoIter = btree_map::Iter<'a, String, Vec<Drink>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl CompositeEncode for DrinksByCategory {
    fn encode_field(
        &self,
        out: &mut LiteralWriter,
    ) {
        out.write_array(&self.to_groups());
    }
}

impl CompositeDecode for DrinksByCategory {
    fn decode(input: &mut TokenReader) -> DecodeResult<Self> {
        let mut map = BTreeMap::new();
        input.read_elements(|input| {
            let position = input.position();
            let group = DrinksGroup::decode(input)?;
            match map.entry(group.category) {
                btree_map::Entry::Vacant(slot) => {
                    slot.insert(group.drinks);
                    Ok(())
                }
                btree_map::Entry::Occupied(slot) => Err(DecodeError::DuplicateCategory {
                    position,
                    category: slot.key().clone(),
                }),
            }
        })?;
        Ok(Self(map))
    }
}

impl Validate for DrinksByCategory {
    fn validate(&self) -> Result<(), ValidationError> {
        for (category, drinks) in &self.0 {
            if category.is_empty() {
                return Err(ValidationError::EmptyCategory);
            }
            check_text("category", category)?;
            for drink in drinks {
                drink.validate()?;
            }
        }
        Ok(())
    }
}

/// A stored menu row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub drinks: DrinksByCategory,
    pub total_cost: u32,
}

composite_record!(Menu, "Menu" => [id, user_id, name, drinks, total_cost]);

impl Validate for Menu {
    fn validate(&self) -> Result<(), ValidationError> {
        check_text("name", &self.name)?;
        self.drinks.validate()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
