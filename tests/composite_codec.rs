use barmenu::{
    decode, encode_composition, encode_drink, encode_drinks_by_category, encode_drinks_group,
    encode_menu, Composition, CookingMethod, Drink, DrinkCategory, DrinksByCategory, DrinksGroup,
    IceType, Liquid, Menu, SolidBulk, SolidUnit, Validate,
};
use uuid::Uuid;

fn tonic_and_lime() -> Composition {
    Composition {
        ice_bulk: 2,
        liquids: vec![Liquid::new("Tonic Water", "ml", 200)],
        solids_bulk: vec![],
        solids_unit: vec![SolidUnit::new("Lime Wedge", 3)],
    }
}

fn negroni() -> Drink {
    Drink {
        id: 7,
        name: "Negroni".into(),
        category: DrinkCategory::ShortDrinks,
        cooking_method: CookingMethod::Stir,
        composition: Composition {
            ice_bulk: 1,
            liquids: vec![
                Liquid::new("Gin", "ml", 30),
                Liquid::new("Campari", "ml", 30),
                Liquid::new("Sweet Vermouth", "ml", 30),
            ],
            solids_bulk: vec![],
            solids_unit: vec![SolidUnit::new("Orange Peel", 1)],
        },
        order_ice_type: IceType::BlockIce,
        price: 520,
        bars_id: vec![3],
    }
}

fn coca_cola() -> Drink {
    Drink {
        id: 8,
        name: "Coca-Cola Zero".into(),
        category: DrinkCategory::NonAlcos,
        cooking_method: CookingMethod::Build,
        composition: Composition {
            ice_bulk: 3,
            liquids: vec![Liquid::new("Coca-Cola Zero", "ml", 330)],
            solids_bulk: vec![SolidBulk::new("Brown Sugar", "g", 5)],
            solids_unit: vec![],
        },
        order_ice_type: IceType::CubedIce,
        price: 150,
        bars_id: vec![],
    }
}

#[test]
fn test_tonic_and_lime_scenario() {
    let composition = tonic_and_lime();
    let text = encode_composition(&composition);

    assert_eq!(
        text,
        "CAST((2, CAST(ARRAY[('Tonic Water', 'ml', 200)] AS Liquid []), \
         CAST(ARRAY[] AS Solid_bulk []), \
         CAST(ARRAY[('Lime Wedge', 3)] AS Solid_unit [])) AS Composition)"
    );

    let decoded: Composition = decode(&text).unwrap();
    assert_eq!(decoded.ice_bulk, 2);
    assert_eq!(decoded.liquids, vec![Liquid::new("Tonic Water", "ml", 200)]);
    assert!(decoded.solids_bulk.is_empty());
    assert_eq!(decoded.solids_unit, vec![SolidUnit::new("Lime Wedge", 3)]);
}

#[test]
fn test_empty_drinks_by_category() {
    assert_eq!(
        encode_drinks_by_category(&DrinksByCategory::new()),
        "CAST(ARRAY[] AS DrinksGroup [])"
    );
    let decoded: DrinksByCategory = decode("CAST(ARRAY[] AS DrinksGroup [])").unwrap();
    assert!(decoded.is_empty());
}

#[test]
fn test_drink_round_trip_field_by_field() {
    let drink = coca_cola();
    let decoded: Drink = decode(&encode_drink(&drink)).unwrap();

    assert_eq!(decoded.id, drink.id);
    assert_eq!(decoded.name, "Coca-Cola Zero");
    assert_eq!(decoded.category, DrinkCategory::NonAlcos);
    assert_eq!(decoded.cooking_method, CookingMethod::Build);
    assert_eq!(decoded.composition, drink.composition);
    assert_eq!(decoded.order_ice_type, IceType::CubedIce);
    assert_eq!(decoded.price, 150);
    assert!(decoded.bars_id.is_empty());
}

#[test]
fn test_single_group_literal() {
    let group = DrinksGroup::for_drink(negroni());
    let text = encode_drinks_group(&group);

    assert!(text.starts_with("CAST(('short_drinks', CAST(ARRAY[(7, 'Negroni', 'short_drinks', 'stir', CAST((1, "));
    assert!(text.ends_with("'block_ice', 520, ARRAY[3])] AS Drink[])) AS DrinksGroup)"));
    assert!(text.contains("] AS Liquid []), CAST(ARRAY["));
    assert_eq!(decode::<DrinksGroup>(&text).unwrap(), group);
}

#[test]
fn test_empty_group_literal() {
    let group = DrinksGroup::new("beers", vec![]);
    let text = encode_drinks_group(&group);

    assert_eq!(text, "CAST(('beers', CAST(ARRAY[] AS Drink[])) AS DrinksGroup)");
    assert_eq!(decode::<DrinksGroup>(&text).unwrap(), group);
}

#[test]
fn test_multi_category_round_trip() {
    let drinks = DrinksByCategory::from_drinks([negroni(), coca_cola(), negroni()]);
    assert_eq!(
        drinks.categories().collect::<Vec<_>>(),
        ["non_alcos", "short_drinks"]
    );
    assert_eq!(drinks.get("short_drinks").map(<[Drink]>::len), Some(2));

    let decoded: DrinksByCategory = decode(&encode_drinks_by_category(&drinks)).unwrap();
    assert_eq!(decoded, drinks);
}

#[test]
fn test_menu_round_trip() {
    let menu = Menu {
        id: Uuid::parse_str("7c9e6679-7425-40de-944b-e07fc1f90ae7").unwrap(),
        user_id: Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap(),
        name: "Late Night".into(),
        drinks: DrinksByCategory::from_drinks([negroni(), coca_cola()]),
        total_cost: 670,
    };
    assert!(menu.validate().is_ok());

    let text = encode_menu(&menu);
    assert!(text.starts_with(
        "CAST(('7c9e6679-7425-40de-944b-e07fc1f90ae7', '550e8400-e29b-41d4-a716-446655440000', 'Late Night', CAST(ARRAY[('non_alcos', "
    ));
    assert_eq!(decode::<Menu>(&text).unwrap(), menu);
}

#[test]
fn test_lowercase_keywords_are_accepted() {
    let text = "cast((0, array[], cast(array[] as Solid_bulk []), {}) as Composition)";
    assert_eq!(decode::<Composition>(text).unwrap(), Composition::default());
}

#[test]
fn test_drink_survives_json_and_literal() {
    let drink = negroni();
    let json = serde_json::to_string(&drink).unwrap();
    let from_json: Drink = serde_json::from_str(&json).unwrap();
    assert_eq!(decode::<Drink>(&encode_drink(&from_json)).unwrap(), drink);
}
