use indexmap::IndexMap;

use super::*;

impl TryFrom<Value> for String {
    type Error = UclError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(UclError::TypeError {
                message: format!("Ожидалась строка, получено: {}", other.kind_name()),
            }),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = UclError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n),
            other => Err(UclError::TypeError {
                message: format!("Ожидалось число, получено: {}", other.kind_name()),
            }),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = UclError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|n| n as f32)
    }
}

impl TryFrom<Value> for IndexMap<String, Value> {
    type Error = UclError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Mapping(entries) => Ok(entries),
            other => Err(UclError::TypeError {
                message: format!("Ожидался словарь, получено: {}", other.kind_name()),
            }),
        }
    }
}

/// Integer access requires an integral number in range; the language
/// itself only has `f64` literals.
fn integral(value: Value) -> Result<f64, UclError> {
    match value {
        Value::Number(n) if n.fract() == 0.0 => Ok(n),
        Value::Number(n) => Err(UclError::TypeError {
            message: format!("Ожидалось целое число, получено: {}", n),
        }),
        other => Err(UclError::TypeError {
            message: format!("Ожидалось число, получено: {}", other.kind_name()),
        }),
    }
}

macro_rules! impl_integer_conversion {
    ($($ty:ty),* $(,)?) => {$(
        impl TryFrom<Value> for $ty {
            type Error = UclError;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                let n = integral(value)?;
                if n < <$ty>::MIN as f64 || n > <$ty>::MAX as f64 {
                    return Err(UclError::TypeError {
                        message: format!(
                            "Число {} вне диапазона {}",
                            n,
                            stringify!($ty)
                        ),
                    });
                }
                Ok(n as $ty)
            }
        }
    )*};
}

impl_integer_conversion!(i64, i32, u64, u32, u16, usize);
