// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_engine::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== Decimal Engine Example ===\n");

    // The classic binary floating-point artifacts
    println!("Plain f64:");
    println!("  0.1 + 0.2   = {}", 0.1 + 0.2);
    println!("  19.9 * 100  = {}", 19.9 * 100.0);
    println!("  0.3 - 0.1   = {}", 0.3 - 0.1);
    println!("  0.3 / 0.1   = {}", 0.3 / 0.1);

    println!("\nDecimal engine:");
    println!("  0.1 + 0.2   = {}", add(0.1, 0.2).unwrap());
    println!("  19.9 * 100  = {}", multiply(19.9, 100.0).unwrap());
    println!("  0.3 - 0.1   = {}", subtract(0.3, 0.1).unwrap());
    println!("  0.3 / 0.1   = {}", divide(0.3, 0.1).unwrap());

    // Chained operands, finalized more than once
    println!("\n=== Chained Arithmetic ===");
    let chain = Chain::of([0.1, 0.2, 0.3]);
    println!("operands      = {:?}", chain.operands());
    println!("add()         = {}", chain.add().unwrap());
    println!("multiply()    = {}", chain.multiply().unwrap());

    let extended = chain.push(0.4);
    println!("after push(0.4), add() = {}", extended.add().unwrap());

    // Scale extraction behind it all
    println!("\n=== Scale Extraction ===");
    for value in [3.14, 19.9, 42.0, -0.25] {
        let scaled = ScaledInteger::from_f64(value).unwrap();
        println!(
            "{:>6} -> significand {}, scale {}",
            value,
            scaled.significand(),
            scaled.scale()
        );
    }

    // Strict policy surfaces bad input instead of masking it
    println!("\n=== Input Policy ===");
    let lenient = Chain::of([f64::NAN, 5.0]);
    println!("lenient add(NaN, 5) = {:?}", lenient.add());

    let strict = Chain::of([f64::NAN, 5.0]).with_policy(InputPolicy::Strict);
    println!("strict  add(NaN, 5) = {:?}", strict.add());
}
