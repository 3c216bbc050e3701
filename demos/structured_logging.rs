use rampart_errors::{ErrorValue, error_value};

fn main() {
    println!("--- Structured Logging Example ---\n");

    let err = error_value!(id = 42, "disk full\nforged: admin login ok");

    // Key/value line, control characters neutralized.
    err.with_report(|report| {
        let mut line = String::new();
        if report.write_to(&mut line).is_ok() {
            println!("log line: {line}");
        }
    });

    // Field access for structured sinks.
    let report = err.report();
    println!("id field:       {}", report.id());
    println!("assigned:       {}", report.has_assigned_id());
    println!("message length: {}", report.message().len());

    let unset = ErrorValue::default();
    println!("\nsentinel line: {}", unset.report());

    #[cfg(feature = "tracing")]
    err.trace();
}
