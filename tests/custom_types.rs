use serde_toxml::tree::Element;
use serde_toxml::{
    xml, Attributes, Encoder, EncoderOptions, Error, Kind, Result, ToXml, Traversal, Value, XmlMap,
};

/// Renders as `<name lat=".." lon=".."/>`.
#[derive(Debug)]
struct Point {
    lat: f64,
    lon: f64,
}

impl ToXml for Point {
    fn serialize_into(
        &self,
        element: &mut Element,
        _name: &str,
        _engine: &mut Traversal<'_>,
    ) -> Result<()> {
        element.set_attribute("lat", &self.lat.to_string())?;
        element.set_attribute("lon", &self.lon.to_string())
    }
}

/// Delegates its children back to the engine.
#[derive(Debug)]
struct Record {
    fields: XmlMap,
    notes: Vec<Value>,
}

impl ToXml for Record {
    fn serialize_into(
        &self,
        element: &mut Element,
        _name: &str,
        engine: &mut Traversal<'_>,
    ) -> Result<()> {
        engine.mapping(&self.fields, element)?;
        let notes = element.create_child("notes")?;
        engine.sequence(&self.notes, notes, "notes")
    }
}

fn doc(key: &str, value: Value) -> Value {
    let mut map = XmlMap::new();
    map.insert(key.to_string(), value);
    Value::Object(map)
}

fn encode(encoder: &mut Encoder) -> String {
    encoder.encode().unwrap();
    encoder.to_string()
}

#[test]
fn test_custom_serialization_is_used() {
    let value = doc("here", Value::custom(Point { lat: 1.5, lon: -2.25 }));
    let mut encoder = Encoder::new("map", value).unwrap();
    assert_eq!(
        encode(&mut encoder),
        r#"<map><here lat="1.5" lon="-2.25"/></map>"#
    );
}

#[test]
fn test_custom_serialization_composes_with_engine() {
    let mut fields = XmlMap::new();
    fields.insert("id".to_string(), Value::from(9));
    let record = Record {
        fields,
        notes: vec![Value::from("a"), Value::from("b")],
    };
    let mut encoder = Encoder::new("root", doc("record", Value::custom(record))).unwrap();
    assert_eq!(
        encode(&mut encoder),
        "<root><record><id>9</id><notes><item>a</item><item>b</item></notes></record></root>"
    );
}

#[test]
fn test_registry_beats_custom_serialization() {
    let value = doc("here", Value::custom(Point { lat: 0.0, lon: 0.0 }));
    let mut encoder = Encoder::new("map", value).unwrap();
    encoder.register(Kind::of::<Point>(), |engine, _value, element, _name| {
        engine.text(element, "origin")
    });
    assert_eq!(encode(&mut encoder), "<map><here>origin</here></map>");
}

#[test]
fn test_custom_errors_propagate() {
    let bad = Point {
        lat: 0.0,
        lon: 0.0,
    };
    let mut encoder = Encoder::new("map", doc("here", Value::custom(bad))).unwrap();
    encoder.register(Kind::of::<Point>(), |_engine, _value, element, _name| {
        element.set_attribute("not valid", "x")
    });
    assert!(matches!(encoder.encode(), Err(Error::InvalidName { .. })));
}

#[test]
fn test_attributes_payload_follows_illegal_char_policy() {
    let value = doc("b", Attributes::new("x\u{1A}", [("k", "v")]).into());

    let mut strict = Encoder::new("a", value.clone()).unwrap();
    assert!(matches!(strict.encode(), Err(Error::IllegalContent { .. })));

    let options = EncoderOptions::new().escape_illegal_chars();
    let mut escaped = Encoder::with_options("a", value, options).unwrap();
    assert_eq!(encode(&mut escaped), r#"<a><b k="v">x</b></a>"#);
}

#[test]
fn test_attributes_keep_falsy_scalars() {
    let value = xml!({"flag": false});
    let flag = value.as_object().and_then(|o| o.get("flag")).cloned().unwrap();
    let mut encoder = Encoder::new("a", doc("b", Attributes::new(flag, [("k", "v")]).into())).unwrap();
    assert_eq!(encode(&mut encoder), r#"<a><b k="v">false</b></a>"#);

    let mut encoder = Encoder::new("a", doc("b", Attributes::new(0, [("k", "v")]).into())).unwrap();
    assert_eq!(encode(&mut encoder), r#"<a><b k="v">0</b></a>"#);
}

#[test]
fn test_custom_values_compare_by_identity() {
    let shared = Value::custom(Point { lat: 1.0, lon: 1.0 });
    assert_eq!(shared, shared.clone());
    assert_ne!(shared, Value::custom(Point { lat: 1.0, lon: 1.0 }));
}
