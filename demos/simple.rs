//! Basic XML encoding of a Serde struct.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_toxml::{to_string, to_string_pretty};
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
        },
        User {
            id: 43,
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
        },
    ];

    let xml = to_string("users", &users)?;
    println!("Compact output:\n{}\n", xml);

    let pretty = to_string_pretty("users", &users)?;
    println!("Pretty output:\n{}", pretty);

    Ok(())
}
