//! Custom serialization with ToXml, Attributes, CData and registry overrides.
//!
//! Run with: cargo run --example custom_types

use serde_toxml::tree::Element;
use serde_toxml::{
    Attributes, CData, Encoder, Error, Kind, Opaque, Result, ToXml, Traversal, Value, XmlMap,
};

#[derive(Debug)]
struct Money {
    cents: i64,
    currency: &'static str,
}

impl ToXml for Money {
    fn serialize_into(
        &self,
        element: &mut Element,
        _name: &str,
        engine: &mut Traversal<'_>,
    ) -> Result<()> {
        element.set_attribute("currency", self.currency)?;
        let amount = format!("{}.{:02}", self.cents / 100, self.cents.rem_euclid(100));
        engine.text(element, &amount)
    }
}

#[derive(Debug)]
struct Color(u8, u8, u8);

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut invoice = XmlMap::new();
    invoice.insert(
        "customer".to_string(),
        Attributes::new("ACME Corp", [("id", "c-17")]).into(),
    );
    invoice.insert(
        "total".to_string(),
        Value::custom(Money {
            cents: 123_45,
            currency: "EUR",
        }),
    );
    invoice.insert(
        "notes".to_string(),
        CData::new("<b>Pay within 30 days</b>").into(),
    );
    invoice.insert("theme".to_string(), Opaque::new(Color(255, 128, 0)).into());

    let mut encoder = Encoder::new("invoice", Value::Object(invoice))?;
    encoder.register(Kind::of::<Color>(), |engine, value, element, _name| {
        let color = match value {
            Value::Opaque(opaque) => opaque.downcast_ref::<Color>(),
            _ => None,
        };
        let Color(r, g, b) = color.ok_or_else(|| Error::custom("expected a Color"))?;
        engine.text(element, &format!("#{:02x}{:02x}{:02x}", r, g, b))
    });
    encoder.encode()?;
    println!("{}", encoder);

    Ok(())
}
