//! Classify Readings Example
//!
//! Walks through what a dashboard refresh does: take a snapshot from the
//! realtime store, normalize placeholders, classify every metric and tint
//! each domain card by its worst level.
//!
//! ## What You'll Learn
//!
//! - Classifying single readings by store keys
//! - How companion readings change pond ammonia and pen temperature verdicts
//! - Summarizing a domain snapshot
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_classify_readings
//! ```

use farmguard_core::{classify, parse_reading, Classifier, Domain, Extras, Level, Metric};

fn print_level(label: &str, level: Level) {
    let marker = match level {
        Level::Ok => "[ OK ]",
        Level::Warning => "[WARN]",
        Level::Danger => "[DANG]",
        Level::Unknown => "[ -- ]",
    };
    println!("  {} {}", marker, label);
}

fn main() {
    println!("FarmGuard Classification Example");
    println!("================================\n");

    // Single readings, as the monitoring grid sees them
    println!("Single readings:");
    let none = Extras::new();
    for (domain, metric, raw) in [
        ("kandang", "suhu", "25.4"),
        ("hidroponik", "ph", "7.0"),
        ("kolam", "oksigen", "2.1"),
        ("ulat", "kelembaban", "-"),
        ("gudang", "suhu", "22"),
    ] {
        let result = classify(domain, metric, parse_reading(raw), &none);
        print_level(
            &format!("{}/{} = {:>5}  target {}", domain, metric, raw, result.target),
            result.level,
        );
    }
    println!();

    // Pond ammonia: same TAN, different water chemistry
    println!("Pond ammonia at 1.2 mg/L TAN:");
    for (ph, temp) in [(7.0, 25.0), (7.8, 27.0), (8.2, 28.0)] {
        let extras = Extras::new().with_ph(ph).with_suhu(temp);
        let result = classify("kolam", "amonia_total", 1.2, &extras);
        print_level(&result.message, result.level);
    }
    let tan_only = classify("kolam", "amonia_total", 1.2, &none);
    print_level(
        &format!("no pH/temperature, TAN band {}", tan_only.target),
        tan_only.level,
    );
    println!();

    // Pen heat stress: humidity raises the temperature verdict
    println!("Pen at 29 °C:");
    for rh in [55.0, 72.0, 80.0] {
        let extras = Extras::new().with_kelembaban(rh);
        let result = classify("kandang", "suhu", 29.0, &extras);
        print_level(&format!("RH {} %", rh), result.level);
    }
    println!();

    // Domain cards
    println!("Domain cards:");
    let classifier = Classifier::standard();
    let pond: &[(Metric, f64)] = &[
        (Metric::Suhu, 28.0),
        (Metric::Ph, 8.2),
        (Metric::Oksigen, 6.4),
        (Metric::AmoniaTotal, 1.2),
    ];
    let pen: &[(Metric, f64)] = &[(Metric::Suhu, 26.0), (Metric::Kelembaban, 68.0)];
    let rack: &[(Metric, f64)] = &[
        (Metric::Suhu, 22.0),
        (Metric::Ph, 6.1),
        (Metric::Ec, f64::NAN),
        (Metric::IntensitasCahaya, 32_000.0),
    ];

    for (domain, readings) in [
        (Domain::Kolam, pond),
        (Domain::Kandang, pen),
        (Domain::Hidroponik, rack),
    ] {
        let summary = classifier.summarize(domain, readings);
        print_level(
            &format!(
                "{:<10} ok {} / warning {} / danger {} / unknown {}",
                domain.key(),
                summary.counts.ok,
                summary.counts.warning,
                summary.counts.danger,
                summary.counts.unknown
            ),
            summary.overall,
        );
    }
}
