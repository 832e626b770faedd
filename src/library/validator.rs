use std::borrow::Cow;

/// Error reported for a missing value.
pub const DATA_REQUIRED: &str = "Data is required";

/// Error reported for text that is empty after trimming.
pub const DATA_EMPTY: &str = "Data cannot be empty";

/// Runtime view of a value handed to [`DataValidator`].
///
/// `()` stands for a missing value and `None` for a null one; both are absent.
/// Textual types expose their contents through [`DataValue::as_text`].
/// Every other type is present and non-textual.
pub trait DataValue {
    fn is_absent(&self) -> bool {
        false
    }

    fn as_text(&self) -> Option<&str> {
        None
    }
}

impl DataValue for () {
    fn is_absent(&self) -> bool {
        true
    }
}

impl<T: DataValue> DataValue for Option<T> {
    fn is_absent(&self) -> bool {
        match self {
            Some(value) => value.is_absent(),
            None => true,
        }
    }

    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(DataValue::as_text)
    }
}

impl<T: DataValue + ?Sized> DataValue for &T {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }

    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: DataValue + ?Sized> DataValue for Box<T> {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }

    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl DataValue for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl DataValue for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl DataValue for Cow<'_, str> {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T> DataValue for [T] {}
impl<T> DataValue for Vec<T> {}

macro_rules! non_textual {
    ($($ty:ty),* $(,)?) => {
        $(impl DataValue for $ty {})*
    };
}

non_textual!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

#[cfg(feature = "serde")]
impl DataValue for serde_json::Value {
    fn is_absent(&self) -> bool {
        self.is_null()
    }

    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }
}

/// Outcome of [`DataValidator::validate`]. `is_valid` is true iff `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Presence and emptiness checks for arbitrary data
pub struct DataValidator;

impl DataValidator {
    /// Validates a value, collecting every failed check in order.
    ///
    /// Absent values fail with [`DATA_REQUIRED`]. Text that is empty after
    /// trimming fails with [`DATA_EMPTY`]. Other values are always valid.
    ///
    /// # Examples
    /// ```rust
    /// use lobe_lib_template::library::validator::DataValidator;
    ///
    /// assert!(DataValidator::validate("valid data").is_valid);
    /// assert!(DataValidator::validate(&123).is_valid);
    ///
    /// let result = DataValidator::validate("   ");
    /// assert_eq!(result.errors, vec!["Data cannot be empty".to_string()]);
    ///
    /// let result = DataValidator::validate(&None::<String>);
    /// assert_eq!(result.errors, vec!["Data is required".to_string()]);
    /// ```
    pub fn validate<T: DataValue + ?Sized>(data: &T) -> ValidationResult {
        let mut errors = Vec::new();

        if data.is_absent() {
            errors.push(DATA_REQUIRED.to_string());
        }

        if let Some(text) = data.as_text()
            && text.trim().is_empty()
        {
            errors.push(DATA_EMPTY.to_string());
        }

        ValidationResult::from_errors(errors)
    }
}
