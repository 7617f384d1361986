use std::io::Write;

use indexmap::IndexMap;

use super::*;

#[test]
fn test_config_from_string() {
    let content = r#"
(def appname "TestApp")
(def port 8.08e+3)
$[
  app: $[
    name: {appname},
    version: "1.0.0",
    server: $[ host: "localhost", port: {port}, ],
  ],
]
"#;
    let config = UclConfig::from_str(content).expect("Failed to load config");

    let name: String = config.get("app.name").expect("Failed to get app.name");
    assert_eq!(name, "TestApp");

    let host: String = config.get("app.server.host").expect("Failed to get host");
    assert_eq!(host, "localhost");

    let port: u16 = config.get("app.server.port").expect("Failed to get port");
    assert_eq!(port, 8080);

    let version: String = config.get("app.version").expect("Failed to get version");
    assert_eq!(version, "1.0.0");

    assert!(config.has("app.server"));
    assert!(!config.has("app.nonexistent"));
}

#[test]
fn test_order_preservation() {
    let content = "$[ first: 1e+0, second: 2e+0, third: 3e+0, ]";
    let config = UclConfig::from_str(content).unwrap();
    let keys = config.get_keys("").unwrap();
    assert_eq!(keys, vec!["first", "second", "third"]);
}

#[test]
fn test_empty_path_returns_root() {
    let config = UclConfig::from_str("$[ a: 1e+0, ]").unwrap();
    let root = config.get_value("").unwrap();
    assert_eq!(&root, config.root());
}

#[test]
fn test_missing_key_error() {
    let config = UclConfig::from_str("$[ a: 1e+0, ]").unwrap();
    let err = config.get_value("a.b").unwrap_err();
    assert_eq!(err, UclError::MissingKey { path: "a.b".into() });
}

#[test]
fn test_get_optional_and_get_or() {
    let config = UclConfig::from_str("$[ a: 2e+0, ]").unwrap();

    let present: Option<f64> = config.get_optional("a").unwrap();
    assert_eq!(present, Some(2.0));

    let absent: Option<f64> = config.get_optional("b").unwrap();
    assert_eq!(absent, None);

    assert_eq!(config.get_or("b", 7.0), 7.0);
}

#[test]
fn test_from_str_surfaces_eval_errors() {
    let err = UclConfig::from_str("$[ x: {nope}, ]").unwrap_err();
    assert!(matches!(err, UclError::EvalError { .. }));
}

#[test]
fn test_report_includes_caret() {
    let source = "$[ x: {nope}, ]";
    let err = UclConfig::from_str(source).unwrap_err();

    let report = crate::diagnostics::render(&err, source);
    assert!(report.contains("Неизвестная константа: nope"));
    assert!(report.contains("строка 1, столбец 8"));
    assert!(report.ends_with("\n       ^"));
}

#[test]
fn test_config_report_uses_own_source() {
    let source = "$[ a: 1e+0, ]";
    let config = UclConfig::from_str(source).unwrap();

    let err = UclError::SyntaxError {
        message: "Синтаксическая ошибка".into(),
        line: 1,
        column: 4,
    };
    assert_eq!(
        config.report(&err),
        "Синтаксическая ошибка (строка 1, столбец 4)\n$[ a: 1e+0, ]\n   ^"
    );
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "(def pi 3e+0) $[ x: {{pi}}, ]").unwrap();

    let config = UclConfig::from_file(file.path()).unwrap();
    let x: f64 = config.get("x").unwrap();
    assert_eq!(x, 3.0);
}

#[test]
fn test_from_file_missing() {
    let err = UclConfig::from_file("no_such_file.ucl").unwrap_err();
    assert!(matches!(err, UclError::FileError { .. }));
}

// ===== Conversion tests =====

#[test]
fn test_string_conversion_error() {
    let result: Result<String, UclError> = Value::Number(42.0).try_into();
    assert!(matches!(result, Err(UclError::TypeError { .. })));
}

#[test]
fn test_f64_conversion() {
    let result: Result<f64, UclError> = Value::Number(3.5).try_into();
    assert_eq!(result.unwrap(), 3.5);
}

#[test]
fn test_integer_conversion_requires_integral() {
    let ok: Result<i64, UclError> = Value::Number(12.0).try_into();
    assert_eq!(ok.unwrap(), 12);

    let fractional: Result<i64, UclError> = Value::Number(12.5).try_into();
    assert!(matches!(fractional, Err(UclError::TypeError { .. })));
}

#[test]
fn test_integer_conversion_range_check() {
    let too_big: Result<u16, UclError> = Value::Number(70_000.0).try_into();
    assert!(matches!(too_big, Err(UclError::TypeError { .. })));

    let negative: Result<u32, UclError> = Value::Number(-1.0).try_into();
    assert!(matches!(negative, Err(UclError::TypeError { .. })));
}

#[test]
fn test_mapping_conversion() {
    let config = UclConfig::from_str("$[ m: $[ a: 1e+0, ], ]").unwrap();
    let m: IndexMap<String, Value> = config.get("m").unwrap();
    assert_eq!(m.get("a"), Some(&Value::Number(1.0)));
}
