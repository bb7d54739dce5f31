use std::hint::black_box;

use barmenu::{
    codec::Tokenizer, decode, encode, Composition, CookingMethod, Drink, DrinkCategory,
    DrinksByCategory, IceType, Liquid, Menu, SolidBulk, SolidUnit,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use uuid::Uuid;

fn composition(i: u32) -> Composition {
    Composition {
        ice_bulk: i % 4,
        liquids: vec![
            Liquid::new("London Dry Gin", "ml", 40),
            Liquid::new("Tonic Water", "ml", 160 + i),
        ],
        solids_bulk: vec![SolidBulk::new("Brown Sugar", "g", 5)],
        solids_unit: vec![SolidUnit::new("Lime Wedge", 2)],
    }
}

fn drink(i: u32) -> Drink {
    let categories = [
        DrinkCategory::LongDrinks,
        DrinkCategory::ShortDrinks,
        DrinkCategory::NonAlcos,
        DrinkCategory::Beers,
    ];
    Drink {
        id: i,
        name: format!("Drink {i}"),
        category: categories[i as usize % categories.len()],
        cooking_method: CookingMethod::Build,
        composition: composition(i),
        order_ice_type: IceType::CubedIce,
        price: 300 + i,
        bars_id: vec![1, 2, 3],
    }
}

fn menu(drinks: u32) -> Menu {
    Menu {
        id: Uuid::from_u128(1),
        user_id: Uuid::from_u128(2),
        name: "House Menu".into(),
        drinks: DrinksByCategory::from_drinks((0..drinks).map(drink)),
        total_cost: 0,
    }
}

fn bench_composition(c: &mut Criterion) {
    let value = composition(1);
    let text = encode(&value);

    let mut group = c.benchmark_group("composition");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("encode", |b| b.iter(|| black_box(encode(black_box(&value)))));
    group.bench_function("decode", |b| {
        b.iter(|| black_box(decode::<Composition>(black_box(&text)).unwrap()))
    });
    group.bench_function("tokenize", |b| {
        b.iter(|| black_box(Tokenizer::tokenize(black_box(&text))))
    });
    group.finish();
}

fn bench_menu(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu");

    for size in [1u32, 16, 128] {
        let value = menu(size);
        let text = encode(&value);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", size), &value, |b, value| {
            b.iter(|| black_box(encode(value)))
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &text, |b, text| {
            b.iter(|| black_box(decode::<Menu>(text).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_composition, bench_menu);
criterion_main!(benches);
