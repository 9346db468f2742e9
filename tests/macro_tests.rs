use serde_toxml::{xml, Encoder, Number, Value, XmlMap};

fn render(root: &str, value: Value) -> String {
    let mut encoder = Encoder::new(root, value).unwrap();
    encoder.encode().unwrap();
    encoder.to_string()
}

#[test]
fn test_xml_macro_null() {
    assert_eq!(xml!(null), Value::Null);
}

#[test]
fn test_xml_macro_booleans() {
    assert_eq!(xml!(true), Value::Bool(true));
    assert_eq!(xml!(false), Value::Bool(false));
}

#[test]
fn test_xml_macro_numbers() {
    assert_eq!(xml!(42), Value::Number(Number::Integer(42)));
    assert_eq!(xml!(3.5), Value::Number(Number::Float(3.5)));
    assert_eq!(xml!(-123), Value::Number(Number::Integer(-123)));
    assert_eq!(xml!(u64::MAX).kind(), serde_toxml::Kind::BigInt);
}

#[test]
fn test_xml_macro_strings() {
    assert_eq!(xml!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(xml!(""), Value::String(String::new()));
}

#[test]
fn test_xml_macro_sequences() {
    assert_eq!(xml!([]), Value::Array(vec![]));

    assert_eq!(
        xml!([1, "hello", true, null]),
        Value::Array(vec![
            Value::Number(Number::Integer(1)),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );

    assert_eq!(
        xml!((1, [2, 3])),
        Value::Tuple(vec![
            Value::from(1),
            Value::Array(vec![Value::from(2), Value::from(3)]),
        ])
    );
}

#[test]
fn test_xml_macro_objects() {
    assert_eq!(xml!({}), Value::Object(XmlMap::new()));

    let obj = xml!({
        "name": "Alice",
        "age": 30,
    });
    let map = obj.as_object().expect("object");
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("name"), Some(&Value::from("Alice")));
    assert_eq!(map.get("age"), Some(&Value::from(30)));
}

#[test]
fn test_xml_macro_nested() {
    let nested = xml!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "tags": ["admin", "developer"],
        "count": 42
    });

    let obj = nested.as_object().expect("object");
    assert_eq!(obj.len(), 3);

    let user = obj.get("user").and_then(Value::as_object).expect("user");
    assert_eq!(user.get("id"), Some(&Value::from(123)));
    assert_eq!(user.get("active"), Some(&Value::Bool(true)));

    let tags = obj.get("tags").and_then(Value::as_sequence).expect("tags");
    assert_eq!(tags, &[Value::from("admin"), Value::from("developer")][..]);

    assert_eq!(
        render("doc", nested),
        "<doc><user><id>123</id><name>Bob</name><active>true</active></user>\
         <tags><item>admin</item><item>developer</item></tags><count>42</count></doc>"
    );
}

#[test]
fn test_xml_value_methods() {
    let null_val = xml!(null);
    assert!(null_val.is_null());
    assert!(!null_val.is_bool());
    assert!(!null_val.is_number());
    assert!(!null_val.is_string());
    assert!(!null_val.is_sequence());
    assert!(!null_val.is_object());

    let bool_val = xml!(true);
    assert_eq!(bool_val.as_bool(), Some(true));

    let str_val = xml!("hello");
    assert_eq!(str_val.as_str(), Some("hello"));

    let seq_val = xml!((1, 2, 3));
    assert!(seq_val.is_sequence());
    assert_eq!(seq_val.as_sequence().map(<[Value]>::len), Some(3));

    let num_val = xml!(7);
    assert_eq!(num_val.as_i64(), Some(7));
}

#[test]
fn test_xml_macro_negative_numbers() {
    let value = xml!({
        "offset": -1,
        "readings": [-2, 3, -0.5],
        "pair": (-4, 5)
    });
    assert_eq!(
        render("root", value),
        "<root><offset>-1</offset>\
         <readings><item>-2</item><item>3</item><item>-0.5</item></readings>\
         <pair><item>-4</item><item>5</item></pair></root>"
    );
}
