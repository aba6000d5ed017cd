//! Basic usage example for the libhumanize library.
//!
//! This example demonstrates the free functions and the configurable
//! `Humanizer` facade.
//!
//! Run with: cargo run --example basic_usage

use chrono::{Duration, Utc};
use libhumanize::{
    Config, Humanizer, Locale, accurate_time, bytes, comma, currency, currency_with_name, finance,
    ibytes, ordinal, parse_bytes, si, time,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("libhumanize - Basic Usage Example\n");

    println!("Sizes:");
    println!("  {:>14} bytes = {}", comma(82_854_982), bytes(82_854_982));
    println!("  {:>14} bytes = {}", comma(82_854_982), ibytes(82_854_982));
    println!("  \"42.5 MiB\" parses to {} bytes\n", parse_bytes("42.5 MiB")?);

    println!("Times:");
    let then = Utc::now() - Duration::days(23) - Duration::hours(11);
    println!("  {}", time(then));
    println!("  {}\n", accurate_time(then));

    println!("Numbers:");
    println!("  {} place", ordinal(22));
    println!("  {}", si(2.2345e-12, "F"));
    println!("  {}", finance(2_475_260.0));
    println!("  {}", currency(12_345_678, "INR"));
    println!("  {}\n", currency_with_name(1234.5, "EUR"));

    let config = Config::from_yaml_str(
        r#"
bytes:
  units: iec
time:
  depth: 2
"#,
    )?;
    let h = Humanizer::builder()
        .with_config(config)
        .with_locale(Locale::Turkish)
        .build()?;

    println!("Humanizer ({}):", h.locale());
    println!("  {}", h.bytes(82_854_982));
    println!("  {}", h.time(then));
    println!("  {}", h.ordinal(3));

    Ok(())
}
