use super::*;

impl UclConfig {
    /// Get a typed value from the evaluated tree using dot notation.
    ///
    /// # Examples
    /// ```no_run
    /// # use ucl_cfg::UclConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = UclConfig::from_file("config.ucl")?;
    /// let host: String = config.get("server.host")?;
    /// let port: u16 = config.get("server.port")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// `MissingKey` if the path doesn't exist, `TypeError` if the value
    /// can't be converted to `T`.
    pub fn get<T>(&self, path: &str) -> Result<T, UclError>
    where
        T: TryFrom<Value, Error = UclError>,
    {
        let value = self.get_value(path)?;
        T::try_from(value)
    }

    /// Get an optional typed value - returns `None` if the path is absent.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, UclError>
    where
        T: TryFrom<Value, Error = UclError>,
    {
        match self.get_value(path) {
            Ok(value) => Ok(Some(T::try_from(value)?)),
            Err(UclError::MissingKey { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```no_run
    /// # use ucl_cfg::UclConfig;
    /// # let config = UclConfig::from_file("config.ucl").unwrap();
    /// let timeout = config.get_or("server.timeout", 30.0);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = UclError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get a raw `Value`. An empty path returns the whole root.
    pub fn get_value(&self, path: &str) -> Result<Value, UclError> {
        if path.trim().is_empty() {
            return Ok(self.root.clone());
        }

        let mut current = &self.root;
        for segment in path.split('.') {
            let entries = current.as_mapping().ok_or_else(|| UclError::MissingKey {
                path: path.to_string(),
            })?;
            current = entries.get(segment).ok_or_else(|| UclError::MissingKey {
                path: path.to_string(),
            })?;
        }
        Ok(current.clone())
    }

    /// Keys of the mapping at `path`, in document order.
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, UclError> {
        let value = self.get_value(path)?;
        let entries = value.as_mapping().ok_or_else(|| UclError::TypeError {
            message: format!(
                "Ожидался словарь по пути '{}', получено: {}",
                path,
                value.kind_name()
            ),
        })?;
        Ok(entries.keys().cloned().collect())
    }

    pub fn has(&self, path: &str) -> bool {
        self.get_value(path).is_ok()
    }
}
