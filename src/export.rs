use std::fs;
use std::path::Path;

use crate::ast::Value;
use crate::{UclError, evaluate, parse};

/// Serialize an evaluated value tree to pretty-printed JSON.
///
/// Mapping keys keep their document order: `Number → number`,
/// `String → string`, `Mapping → ordered object`.
///
/// # Examples
/// ```
/// use ucl_cfg::{evaluate, export, parse};
///
/// let doc = parse("$[ x: 1e+0, ]")?;
/// let value = evaluate(&doc)?;
/// assert_eq!(export::to_json_string(&value)?, "{\n  \"x\": 1.0\n}");
/// # Ok::<(), ucl_cfg::UclError>(())
/// ```
pub fn to_json_string(value: &Value) -> Result<String, UclError> {
    serde_json::to_string_pretty(value).map_err(|e| UclError::TypeError {
        message: format!("Не удалось сериализовать значение в JSON: {}", e),
    })
}

/// Read, parse and evaluate a UCL file, returning its JSON rendition.
///
/// # Errors
/// `FileError` if the file cannot be read, otherwise any `SyntaxError`
/// or `EvalError` from the translation itself.
pub fn export_ucl_file<P: AsRef<Path>>(path: P) -> Result<String, UclError> {
    let input = fs::read_to_string(&path).map_err(|e| UclError::FileError {
        message: e.to_string(),
        path: path.as_ref().to_string_lossy().to_string(),
    })?;

    let document = parse(&input)?;
    let value = evaluate(&document)?;
    to_json_string(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn eval_text(input: &str) -> Value {
        evaluate(&parse(input).expect("parse failed")).expect("evaluation failed")
    }

    #[test]
    fn test_export_nested_mapping() {
        let value = eval_text(
            r#"(def name "Juno") $[ app: $[ name: {name}, version: 2e+0, ], ]"#,
        );
        let json = to_json_string(&value).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["app"]["name"], "Juno");
        assert_eq!(parsed["app"]["version"], 2.0);
    }

    #[test]
    fn test_export_preserves_key_order() {
        let value = eval_text("$[ zeta: 1e+0, alpha: 2e+0, ]");
        let json = to_json_string(&value).unwrap();
        let zeta = json.find("\"zeta\"").unwrap();
        let alpha = json.find("\"alpha\"").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_export_scalars() {
        assert_eq!(to_json_string(&eval_text("1.5e+1")).unwrap(), "15.0");
        assert_eq!(to_json_string(&eval_text(r#""ok""#)).unwrap(), "\"ok\"");
        assert_eq!(to_json_string(&eval_text("$[ ]")).unwrap(), "{}");
    }

    #[test]
    fn test_export_ucl_file_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(def pi 3e+0) $[ x: {{pi}}, y: \"ok\", ]").unwrap();

        let json = export_ucl_file(file.path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["x"], 3.0);
        assert_eq!(parsed["y"], "ok");
    }

    #[test]
    fn test_export_missing_file() {
        let err = export_ucl_file("no_such_file.ucl").unwrap_err();
        assert!(matches!(err, UclError::FileError { .. }));
    }
}
