use super::*;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
struct TestData {
    name: String,
    value: i32,
}

impl Formattable for TestData {
    fn format_pretty(&self) -> String {
        format!("{}: {}", self.name, self.value)
    }
}

fn data(name: &str, value: i32) -> TestData {
    TestData {
        name: name.to_string(),
        value,
    }
}

#[test]
fn test_output_format_from_string() {
    assert_eq!(OutputFormat::from("pretty"), OutputFormat::Pretty);
    assert_eq!(OutputFormat::from("json"), OutputFormat::Json);
    assert_eq!(OutputFormat::from("YML"), OutputFormat::Yaml);
    assert_eq!(OutputFormat::from("invalid"), OutputFormat::Pretty);
}

#[test]
fn test_color_choice_from_string() {
    assert_eq!(ColorChoice::from("always"), ColorChoice::Always);
    assert_eq!(ColorChoice::from("NEVER"), ColorChoice::Never);
    assert_eq!(ColorChoice::from("false"), ColorChoice::Never);
    assert_eq!(ColorChoice::from("whatever"), ColorChoice::Auto);
    assert_eq!(ColorChoice::Always.to_string(), "always");
}

#[test]
fn test_should_color_explicit_choices() {
    assert!(should_color(ColorChoice::Always));
    assert!(!should_color(ColorChoice::Never));
}

#[test]
fn test_format_pretty() {
    let result = format_output(&data("test", 42), OutputFormat::Pretty);
    assert_eq!(result.unwrap(), "test: 42");
}

#[test]
fn test_format_json() {
    let result = format_output(&data("test", 42), OutputFormat::Json).unwrap();
    let json: serde_json::Value = serde_json::from_str(&result).unwrap();
    assert_eq!(json["name"], "test");
    assert_eq!(json["value"], 42);
}

#[test]
fn test_format_yaml() {
    let result = format_output(&data("test", 42), OutputFormat::Yaml).unwrap();
    assert!(result.contains("name: test"));
    assert!(result.contains("value: 42"));
}

#[test]
fn test_format_vec_pretty() {
    let items = vec![data("first", 1), data("second", 2)];
    let output = format_output_vec(&items, OutputFormat::Pretty).unwrap();
    assert_eq!(output, "first: 1\nsecond: 2");
}

#[test]
fn test_format_vec_json() {
    let items = vec![data("first", 1), data("second", 2)];
    let result = format_output_vec(&items, OutputFormat::Json).unwrap();
    let json: serde_json::Value = serde_json::from_str(&result).unwrap();
    assert!(json.is_array());
    assert_eq!(json[1]["name"], "second");
}
