use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde_json::{Map, Value, json};

use super::category::Category;
use crate::domain::errors::DataValidationError;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Assigned by the store on creation, `None` while transient.
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub available: bool,
    pub category: Category,
}

pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub available: bool,
    pub category: Category,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            price: BigDecimal::from(0),
            available: true,
            category: Category::Unknown,
        }
    }
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, DataValidationError> {
        if props.name.trim().is_empty() {
            return Err(name_empty());
        }

        Ok(Self {
            id: None,
            name: props.name,
            description: props.description,
            price: props.price,
            available: props.available,
            category: props.category,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i32,
        name: String,
        description: String,
        price: BigDecimal,
        available: bool,
        category: Category,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            description,
            price,
            available,
            category,
        }
    }

    /// Projects the product onto a JSON object.
    ///
    /// `price` is rendered as text so no precision is lost on the wire and
    /// `category` as its member name.
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "price": self.price.to_string(),
            "available": self.available,
            "category": self.category.name(),
        })
    }

    /// Overwrites the client-settable fields from a JSON object.
    ///
    /// A non-object root is rejected before any key is looked at; keys are
    /// then checked in declaration order and the first offending one is
    /// reported. `id` is never read from `data`. Nothing is assigned unless
    /// every field is valid.
    pub fn deserialize(&mut self, data: &Value) -> Result<&mut Self, DataValidationError> {
        let props = parse_props(data)?;

        self.name = props.name;
        self.description = props.description;
        self.price = props.price;
        self.available = props.available;
        self.category = props.category;
        Ok(self)
    }
}

impl TryFrom<&Value> for Product {
    type Error = DataValidationError;

    fn try_from(data: &Value) -> Result<Self, Self::Error> {
        Product::new(parse_props(data)?)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Product {} id=[{}]>", self.name, id),
            None => write!(f, "<Product {} id=[None]>", self.name),
        }
    }
}

/// Largest price the store holds without rounding: 12 whole digits, 2 decimals.
const PRICE_SCALE: i64 = 2;
const PRICE_WHOLE_DIGITS: u64 = 12;

fn parse_props(data: &Value) -> Result<NewProductProps, DataValidationError> {
    let fields = data.as_object().ok_or_else(|| {
        DataValidationError::new(format!(
            "Invalid product: body of request contained bad or no data (got {})",
            json_type(data)
        ))
    })?;

    let name = string_field(fields, "name")?;
    if name.trim().is_empty() {
        return Err(name_empty());
    }

    Ok(NewProductProps {
        name,
        description: string_field(fields, "description")?,
        price: decimal_field(fields, "price")?,
        available: boolean_field(fields, "available")?,
        category: category_field(fields, "category")?,
    })
}

fn name_empty() -> DataValidationError {
    DataValidationError::new("Invalid product: name must not be empty")
}

fn required<'a>(fields: &'a Map<String, Value>, key: &str) -> Result<&'a Value, DataValidationError> {
    fields
        .get(key)
        .ok_or_else(|| DataValidationError::new(format!("Invalid product: missing {}", key)))
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Result<String, DataValidationError> {
    match required(fields, key)? {
        Value::String(s) => Ok(s.clone()),
        other => Err(DataValidationError::new(format!(
            "Invalid type for string [{}]: {}",
            key,
            json_type(other)
        ))),
    }
}

fn decimal_field(fields: &Map<String, Value>, key: &str) -> Result<BigDecimal, DataValidationError> {
    let value = required(fields, key)?;
    let parsed = match value {
        Value::String(s) => BigDecimal::from_str(s.trim()).ok(),
        Value::Number(n) => BigDecimal::from_str(&n.to_string()).ok(),
        _ => None,
    };

    parsed
        .filter(fits_price_column)
        .map(|price| price.with_scale(PRICE_SCALE))
        .ok_or_else(|| {
            DataValidationError::new(format!("Invalid type for decimal [{}]: {}", key, value))
        })
}

fn fits_price_column(price: &BigDecimal) -> bool {
    let (_, scale) = price.normalized().as_bigint_and_exponent();
    let limit = BigDecimal::from(10u64.pow(PRICE_WHOLE_DIGITS as u32));

    scale <= PRICE_SCALE && price.abs() < limit
}

fn boolean_field(fields: &Map<String, Value>, key: &str) -> Result<bool, DataValidationError> {
    match required(fields, key)? {
        Value::Bool(b) => Ok(*b),
        other => Err(DataValidationError::new(format!(
            "Invalid type for boolean [{}]: {}",
            key,
            json_type(other)
        ))),
    }
}

fn category_field(fields: &Map<String, Value>, key: &str) -> Result<Category, DataValidationError> {
    match required(fields, key)? {
        Value::String(name) => Category::from_name(name),
        other => Err(DataValidationError::new(format!("Invalid attribute: {}", other))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
