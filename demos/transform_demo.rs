// ============================================================================
// Transform Demo
// ============================================================================
//
// Run with `cargo run --example transform_demo --features logging` to see
// the observer output alongside the printed sequences.

use array_transform::prelude::*;
use array_transform::stats;
use std::sync::Arc;

const ORIGINAL: [i32; 9] = [-8, -9, 12, 9, 1, 8, 5, 7, 3];

fn report(label: &str, result: TransformResult) {
    let status = Status::from(result);
    if status.is_warning() {
        println!("{} warning: {}", label, status);
    } else if status.is_error() {
        println!("{} failed (status={})", label, status.code());
    }
}

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== Array Transform Example ===");

    let engine = TransformEngineBuilder::new()
        .element_events(true)
        .build(Arc::new(LoggingObserver));

    // Clamp
    let mut data = ORIGINAL;
    println!("\n[Clamp] Original array:\n{}", SequenceDisplay(&data));
    report("Clamp", engine.clamp(&mut data, 3, 6));
    println!("Clamped array to range [3, 6]:\n{}", SequenceDisplay(&data));

    // Scale, signed 32-bit
    let mut data = ORIGINAL;
    println!("\n[Scale] Original array:\n{}", SequenceDisplay(&data));
    report("Scale", engine.scale_to(&mut data, 3, TargetWidth::I32));
    println!("Scaled array by factor 3:\n{}", SequenceDisplay(&data));

    // Scale, signed 8-bit
    let mut data = ORIGINAL;
    report("Scale", engine.scale_to(&mut data, 100, TargetWidth::I8));
    println!("\nScaled array by factor 100 into int8:\n{}", SequenceDisplay(&data));

    // Offset, signed 16-bit
    let mut data = ORIGINAL;
    println!("\n[Offset] Original array:\n{}", SequenceDisplay(&data));
    report("Offset", engine.offset_to(&mut data, 10, TargetWidth::I16));
    println!("Offset array by 10:\n{}", SequenceDisplay(&data));

    // Unsigned sensor readings
    let sensor = TransformEngineBuilder::sensor_8bit().build(Arc::new(LoggingObserver));
    let mut readings = [240u32, 250, 100, 0];
    println!("\n[Offset] Sensor readings:\n{}", SequenceDisplay(&readings));
    report("Offset", sensor.offset(&mut readings, 20));
    println!("Offset readings by 20 into uint8:\n{}", SequenceDisplay(&readings));

    let mut readings = [100u32, 200, 300, 400];
    report("Scale", sensor.scale(&mut readings, 3));
    println!("\nScaled readings by 3 into uint8:\n{}", SequenceDisplay(&readings));

    // Statistics
    println!("\n=== Statistics ===");
    let values = [5, 2, 6, 2, 7, 32, 7];
    println!("Values: {}", SequenceDisplay(&values));
    match (stats::min(&values), stats::max(&values), stats::sum(&values)) {
        (Ok(min), Ok(max), Ok(sum)) => {
            println!("Minimum value: {}", min);
            println!("Maximum value: {}", max);
            println!("Summation value: {}", sum);
        },
        _ => println!("Failed to compute statistics"),
    }

    // Rejected calls
    println!("\n=== Rejected Calls ===");
    let mut data = ORIGINAL;
    report("Clamp", engine.clamp(&mut data, 6, 3));
    let mut empty: [i32; 0] = [];
    report("Scale", engine.scale(&mut empty, 2));
}
