use super::*;

#[test]
fn test_humanized_pretty_is_the_output() {
    let record = Humanized::new("ordinal", 3, "3rd");
    assert_eq!(record.format_pretty(), "3rd");
}

#[test]
fn test_humanized_json_carries_every_field() {
    let record = Humanized::new("word", "1000000", "1 million");
    let json = format::format_output(&record, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["command"], "word");
    assert_eq!(value["input"], "1000000");
    assert_eq!(value["output"], "1 million");
}

#[test]
fn test_humanized_yaml() {
    let record = Humanized::new("apnumber", 5, "five");
    let yaml = format::format_output(&record, OutputFormat::Yaml).unwrap();
    assert!(yaml.contains("output: five"));
}
