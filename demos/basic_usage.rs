//! Example: Walk through every operation of the library
use std::time::Instant;

use lobe_lib_template::{
    ConfigUpdate, Lib, LibConfig, LibOptions, LobeLib, format_version, validate_config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== Basic Usage ===");
    let mut lib = LobeLib::new();
    println!("Library Info: {:?}", lib.get_info());

    println!("\n=== Custom Configuration ===");
    let custom_config = LibConfig::new("my-awesome-lib", "2.0.0").debug(true);
    let custom_lib = LobeLib::with_options(LibOptions::new().config(custom_config.clone()));
    println!("Custom Config: {:?}", custom_lib.get_config());

    println!("\n=== Data Processing ===");
    let result = custom_lib.process_data("Hello from LobeLib!").await;
    println!("Processed data: {result}");

    println!("\n=== Data Validation ===");
    let samples = [Some("valid data"), Some(""), None, Some("   "), Some("another valid")];
    for item in samples {
        let validation = lib.validate_data(&item);
        let status = if validation.is_valid { "Valid" } else { "Invalid" };
        println!("{item:?}: {status}");
        if !validation.is_valid {
            println!("  Errors: {:?}", validation.errors);
        }
    }

    println!("\n=== Configuration Updates ===");
    println!("Before update: {:?}", lib.get_config());
    lib.update_config(ConfigUpdate::new().debug(true).version("1.1.0"));
    println!("After update: {:?}", lib.get_config());

    println!("\n=== Utility Functions ===");
    println!("Formatted version: {}", format_version("1.2.3"));
    println!("Config validation: {}", validate_config(&custom_config));

    println!("\n=== Error Handling ===");
    let invalid_config = LibConfig::new("test", "");
    if let Err(e) = invalid_config.validate() {
        println!("Caught error: {e}");
    }

    println!("\n=== Async Operations ===");
    let slow_lib = LobeLib::with_options(LibOptions::new().timeout_ms(2000));
    println!("Starting slow operation...");
    let start = Instant::now();
    let result = slow_lib.process_data("slow data").await;
    println!(
        "Operation completed in {}ms: {result}",
        start.elapsed().as_millis()
    );

    println!("\n=== Alias ===");
    let default_lib = LobeLib::default();
    let named_lib = Lib::new();
    println!("Default: {}", default_lib.get_info());
    println!("Named: {}", named_lib.get_info());
    println!(
        "Both are the same: {}",
        default_lib.get_info() == named_lib.get_info()
    );

    Ok(())
}
