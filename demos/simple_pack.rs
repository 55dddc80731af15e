//! 簡單包裝計算示例
//!
//! 執行：`PC_LOGGING_FORMAT=pretty cargo run --example simple_pack -- 12001`

use pack::{logging, CalculatorConfig, Pack, PackService};

fn main() -> anyhow::Result<()> {
    let config = CalculatorConfig::from_env()?;
    logging::init(&config.logging)?;

    let order_quantity: i64 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 12001,
    };

    println!("=== 簡單包裝計算示例 ===\n");

    let service = PackService::new(config);

    // 使用預設規格
    let calc = service.calculate_with_defaults(order_quantity)?;
    println!("預設規格 {:?}，訂購數量 {}:", service.config().default_pack_sizes, order_quantity);
    for (size, count) in calc.distribution.iter() {
        println!("  - {} 件裝 × {}", size, count);
    }
    println!(
        "  總件數 {}，總包數 {}，超出 {}，耗時 {} ms\n",
        calc.total_items, calc.total_packs, calc.items_overage, calc.calculation_time_ms
    );

    // 使用包裝主檔
    let mut catalog = vec![
        Pack::new(23, "Tiny".to_string()),
        Pack::new(31, "Small".to_string()),
        Pack::new(53, "Medium".to_string()),
        Pack::new(250, "Retired".to_string()),
    ];
    catalog[3].deactivate();

    let calc = service.calculate_for_catalog(&catalog, 500_000)?;
    println!("包裝主檔計算結果:");
    println!("{}", serde_json::to_string_pretty(&calc)?);

    Ok(())
}
