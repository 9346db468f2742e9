//! Customizing XML output with EncoderOptions.
//!
//! Run with: cargo run --example custom_options

use serde::Serialize;
use serde_toxml::{
    to_string, to_string_with_options, to_vec, EncoderOptions, IllegalChars, Pluralizer,
};
use std::error::Error;

#[derive(Debug, Serialize)]
struct Library {
    name: String,
    books: Vec<Book>,
    categories: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Book {
    title: String,
    year: u16,
}

fn main() -> Result<(), Box<dyn Error>> {
    let library = Library {
        name: "Biblioth\u{e8}que".to_string(),
        books: vec![
            Book {
                title: "Dune".to_string(),
                year: 1965,
            },
            Book {
                title: "Solaris".to_string(),
                year: 1961,
            },
        ],
        categories: vec!["fiction".to_string(), "classics".to_string()],
    };

    println!("Default (every item is <item>):");
    println!("{}\n", to_string("library", &library)?);

    println!("Explicit plural mapping:");
    let mapped = EncoderOptions::new().with_pluralizer(Pluralizer::mapping([
        ("books", "book"),
        ("categories", "category"),
    ]));
    println!("{}\n", to_string_with_options("library", &library, mapped)?);

    println!("Singularizing hook, declaration and root attributes:");
    let hooked = EncoderOptions::pretty()
        .with_xml_declaration(true)
        .with_root_attribute("version", "2")
        .with_pluralizer(Pluralizer::hook(|name: &str| {
            if let Some(stem) = name.strip_suffix("ies") {
                format!("{}y", stem)
            } else {
                name.strip_suffix('s').unwrap_or(name).to_string()
            }
        }));
    println!("{}\n", to_string_with_options("library", &library, hooked)?);

    println!("Latin-1 bytes:");
    let latin1 = EncoderOptions::new()
        .with_xml_declaration(true)
        .with_encoding("latin1");
    let bytes = to_vec("name", &library.name, latin1)?;
    println!("{:?}\n", bytes);

    println!("Illegal characters:");
    let dirty = "bell\u{7} and escape\u{1b}";
    match to_string("text", dirty) {
        Ok(xml) => println!("Unexpected success: {}", xml),
        Err(e) => println!("  strict: {}", e),
    }
    let replaced = EncoderOptions::new().with_illegal_chars(IllegalChars::replace_with("?"));
    println!("  replaced: {}", to_string_with_options("text", dirty, replaced)?);

    Ok(())
}
