use rampart_errors::{ErrorValue, Result, VoidResult, error_value, fail};

const CFG_PARSE_FAILED: u64 = 100;
const CFG_MISSING_KEY: u64 = 101;

fn parse_port(raw: &str) -> Result<u16> {
    raw.parse::<u16>()
        .map_err(|e| error_value!(id = CFG_PARSE_FAILED, "port '{}' rejected: {}", raw, e))
}

fn require_key(present: bool) -> VoidResult {
    if !present {
        fail!(id = CFG_MISSING_KEY, "missing required key 'listen'");
    }
    Ok(())
}

fn main() {
    println!("--- Basic Usage Example ---\n");

    match parse_port("70000") {
        Ok(port) => println!("port {port}"),
        Err(err) => {
            // Code for matching, message for humans, what() for the full line.
            println!("1. id:      {}", err.id());
            println!("2. message: {}", err.message());
            println!("3. what():  {}", err.what());
        }
    }

    if let Err(err) = require_key(false) {
        println!("\n4. early return: {}", err);
    }

    // Oversized messages are cut to 256 bytes, silently.
    let noisy = ErrorValue::with_message("x".repeat(10_000));
    println!("\n5. stored length: {}", noisy.message().len());

    #[cfg(feature = "diagnostic")]
    {
        let loc = noisy.location();
        println!("6. raised at {}:{} ({})", loc.file(), loc.line(), loc.function());
    }
}
