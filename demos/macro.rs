//! Using the xml! macro to build values, then encoding them.
//!
//! Run with: cargo run --example macro

use serde_toxml::{xml, Encoder, Value};
use std::error::Error;

fn encode(root: &str, value: Value) -> Result<String, Box<dyn Error>> {
    let mut encoder = Encoder::new(root, value)?;
    encoder.encode()?;
    Ok(encoder.to_string())
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("Scalars:");
    println!("  bool:   {}", encode("flag", xml!(true))?);
    println!("  number: {}", encode("answer", xml!(42))?);
    println!("  float:  {}", encode("ratio", xml!(2.0))?);
    println!("  text:   {}\n", encode("greeting", xml!("Hello, <XML> & friends"))?);

    println!("Sequences:");
    println!("  array: {}", encode("numbers", xml!([1, 2, 3]))?);
    println!("  tuple: {}\n", encode("pair", xml!(("left", "right")))?);

    let user = xml!({
        "id": 123,
        "name": "Alice",
        "roles": ["admin", "developer"],
        "address": {
            "city": "Lisbon",
            "zip": "1100-148"
        }
    });
    println!("Nested object:\n  {}\n", encode("user", user)?);

    match encode("broken", xml!({"missing": null})) {
        Ok(xml) => println!("Unexpected success: {}", xml),
        Err(e) => println!("null has no default handler: {}", e),
    }

    Ok(())
}
