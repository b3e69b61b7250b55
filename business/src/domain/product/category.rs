use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::domain::errors::DataValidationError;

/// Classification of a catalog product.
///
/// Travels as its upper-case name (`"CLOTHS"`) and is stored under the same
/// name; the integer discriminant gives the fixed ordering.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(i16)]
pub enum Category {
    #[default]
    Unknown = 0,
    Cloths = 1,
    Food = 2,
    Housewares = 3,
    Automotive = 4,
    Tools = 5,
}

static BY_NAME: Lazy<HashMap<&'static str, Category>> =
    Lazy::new(|| Category::iter().map(|c| (c.name(), c)).collect());

impl Category {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn value(self) -> i16 {
        self as i16
    }

    pub fn from_value(value: i16) -> Option<Self> {
        Category::iter().find(|c| c.value() == value)
    }

    /// Strict lookup by member name.
    pub fn from_name(name: &str) -> Result<Self, DataValidationError> {
        BY_NAME
            .get(name)
            .copied()
            .ok_or_else(|| DataValidationError::new(format!("Invalid attribute: {}", name)))
    }

    /// Lookup for inputs that tolerate unrecognized names.
    pub fn from_name_or_unknown(name: &str) -> Self {
        BY_NAME.get(name).copied().unwrap_or_default()
    }
}

impl std::str::FromStr for Category {
    type Err = DataValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_name(s)
    }
}
