use rugeo::{City, GeoResolver, MemoryStore, Region};

fn main() {
    let store = MemoryStore::new(
        vec![City::new(1, "Москва", 50)
            .with_synonyms(["Мск"])
            .with_postal_code("101000")
            .with_type("г Москва")],
        vec![
            Region::new(50, "Московская")
                .with_federal_district("Центральный")
                .with_type("Московская обл"),
            Region::new(4, "Адыгея")
                .with_synonyms(["Адыге"])
                .with_postal_code("385000")
                .with_federal_district("Южный")
                .with_type("Респ Адыгея"),
        ],
    )
    .expect("valid reference data");

    let resolver = GeoResolver::new(store);

    for text in ["Москва и Адыгея", "живу в Адыгее", "Мск", "Тула"] {
        let result = resolver.resolve(text).expect("non-empty text");
        println!(
            "{:20} => 城市:{} 地区:{} 联邦区:{}",
            text,
            result.city_with_type().unwrap_or("-"),
            result.region_with_type().unwrap_or("-"),
            result.federal_district().unwrap_or("-"),
        );
    }
}
