//! Weather grid walkthrough
//!
//! Run with: `cargo run --example weather_report`
//! Set `RUST_LOG=weather_grid_db=debug` to see per-operation logs.
//!
//! Builds a 3-year × 4-city grid, populates sample readings with gaps,
//! exercises insert/delete/retrieve, then prints traversals and reports.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use weather_grid_db::report::{
    render_access_comparison, render_complexity, render_lanes, render_matrix, render_sparsity,
};
use weather_grid_db::{AccessOrder, DeleteOutcome, Error, MatrixStore, StoreConfig, WeatherRecord};

const CONFIG: &str = r#"{
    "years": [2023, 2024, 2025],
    "cities": ["Delhi", "Mumbai", "Kolkata", "Chennai"],
    "sentinel": -999.9
}"#;

/// Sample readings; 2024 Kolkata and 2025 Mumbai are left out on purpose
const SAMPLE: &[(&str, &str, f64)] = &[
    ("01/06/2023", "Delhi", 28.5),
    ("01/06/2023", "Mumbai", 32.1),
    ("01/06/2023", "Kolkata", 25.8),
    ("01/06/2024", "Delhi", 29.2),
    ("01/06/2024", "Mumbai", 33.5),
    ("01/06/2025", "Delhi", 30.1),
    ("01/06/2025", "Kolkata", 26.5),
];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    println!("=== Weather Grid Demo ===\n");

    let mut store = StoreConfig::from_json(CONFIG)?
        .build()
        .context("building weather grid")?;

    populate(&mut store)?;
    demo_point_operations(&mut store)?;

    println!("\n--- COMPLETE TEMPERATURE MATRIX ---");
    println!("{}", render_matrix(&store));

    println!("{}", render_lanes(&store, AccessOrder::RowMajor));
    println!("{}", render_lanes(&store, AccessOrder::ColumnMajor));
    println!("{}\n", render_access_comparison());

    let sparsity = store.sparsity_report();
    println!("{}", render_sparsity(&sparsity));
    println!("{}", render_complexity(&store.complexity_report()));

    println!("Sparsity report as JSON:");
    println!("{}", serde_json::to_string_pretty(&sparsity)?);

    Ok(())
}

fn populate(store: &mut MatrixStore) -> anyhow::Result<()> {
    for (date, city, temperature) in SAMPLE {
        let record = WeatherRecord::parse(date, *city, *temperature)?;
        store.insert(&record)?;
    }
    info!(present = store.present_count(), "sample data loaded");
    Ok(())
}

fn demo_point_operations(store: &mut MatrixStore) -> anyhow::Result<()> {
    println!("--- INSERT / DELETE / RETRIEVE ---");

    let additions = [
        WeatherRecord::parse("15/01/2023", "Chennai", 31.5)?,
        WeatherRecord::parse("20/06/2024", "Mumbai", 29.8)?,
        WeatherRecord::parse("10/12/2025", "Chennai", 27.3)?,
    ];
    for record in &additions {
        store.insert(record)?;
        println!("INSERTED: {record}");
    }

    // Keys outside the fixed axes are reported, not fatal
    let stray = WeatherRecord::parse("01/01/2030", "Delhi", 35.0)?;
    if let Err(err) = store.insert(&stray) {
        println!("Error: {err}");
    }

    for (city, year) in [("Chennai", 2023), ("Mumbai", 2024), ("Kolkata", 2024), ("Pune", 2024)] {
        match store.retrieve(city, year) {
            Ok(Some(t)) => println!("RETRIEVED: {city} in {year} = {t}°C"),
            Ok(None) => println!("No data available for {city} in {year}"),
            Err(err @ (Error::UnknownRow(_) | Error::UnknownColumn(_))) => {
                println!("Error: {err}");
            }
            Err(err) => return Err(err.into()),
        }
    }

    for _ in 0..2 {
        match store.delete("Chennai", "15/01/2023")? {
            DeleteOutcome::Deleted { previous } => {
                println!("DELETED: Chennai on 15/01/2023 (was {previous}°C)");
            }
            DeleteOutcome::NothingToDelete => {
                println!("No record found to delete for Chennai on 15/01/2023");
            }
        }
    }

    Ok(())
}
