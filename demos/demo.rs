use rugeo::GeoResolver;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let resolver = GeoResolver::default();

    println!("=== RuGeo 地址识别演示 ===\n");

    let test_cases = vec![
        // 城市
        "проживаю в г Севастополь",
        "г. Москва, ул. Тверская, д. 1",
        "Московская область, г. Химки",
        // 同义词
        "переехал в Питер",
        "Екб",
        // 仅地区
        "живу в Адыгее",
        "Кубань",
        "Ленинградская обл",
        // 标签与实体
        "<p>г.&nbsp;Казань,&nbsp;ул. Баумана</p>",
        // 无法识别
        "12345 !!!",
        // 空字符串
        "",
    ];

    for text in test_cases {
        println!("输入: {:?}", text);
        match resolver.resolve(text) {
            Ok(result) => {
                println!("  清洗: {:?}", result.normalized());
                println!("  找到: {}", result.found());
                println!("  城市: {}", result.city_with_type().unwrap_or("-"));
                println!("  地区: {}", result.region_with_type().unwrap_or("-"));
                println!("  邮编: {}", result.postal_code().unwrap_or("-"));
                println!("  联邦区: {}", result.federal_district().unwrap_or("-"));
            }
            Err(err) => println!("  错误: {}", err),
        }
        println!();
    }
}
