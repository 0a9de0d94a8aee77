//! Example: Convert the key convention of a JSON document read from stdin.
//!
//! Usage:
//!   cargo run --example convert [-- <tag>]
//!
//! Example:
//!   echo '{"user_id": 1, "user_name": "Some user"}' | cargo run --example convert
//!   echo '{"blogDate": "d"}' | cargo run --example convert -- PC

use std::env;
use std::io::Read;

use conventioner::{convert_tagged, detect};

fn main() -> conventioner::Result<()> {
    let args: Vec<String> = env::args().collect();
    let tag = args.get(1).map(String::as_str);

    let mut input = String::new();
    if std::io::stdin().read_to_string(&mut input).is_err() || input.trim().is_empty() {
        eprintln!("Usage: echo '<json>' | cargo run --example convert [-- <tag>]");
        eprintln!("\nTags: \"_\" forces snake_case, \"PC\" forces PascalCase;");
        eprintln!("omit the tag to toggle to the opposite of the detected convention.");
        std::process::exit(1);
    }

    let data: serde_json::Value = match serde_json::from_str(&input) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Error: invalid JSON on stdin: {}", err);
            std::process::exit(1);
        }
    };

    let detected = detect(&data);
    let output = convert_tagged(&data, tag)?;

    eprintln!("detected: {}", detected.label());
    println!("{}", serde_json::to_string_pretty(&output).expect("serializable value"));

    Ok(())
}
