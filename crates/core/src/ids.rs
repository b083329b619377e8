//! Typed Ids

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
    num::ParseIntError,
    str::FromStr,
};

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::catalog::Product;

/// A numeric catalog identifier tagged with the kind of record it points at.
pub struct TypedId<T>(u64, PhantomData<T>);

impl<T> TypedId<T> {
    /// Wrap a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id, PhantomData)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl<T> Clone for TypedId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedId<T> {}

impl<T> Debug for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedId<T> {}

impl<T> Hash for TypedId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> From<u64> for TypedId<T> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<T> FromStr for TypedId<T> {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self::new)
    }
}

impl<T> Serialize for TypedId<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for TypedId<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(Self::new)
    }
}

/// Product Id
pub type ProductId = TypedId<Product>;

/// Marker for product variations.
#[derive(Debug)]
pub struct Variation;

/// Variation Id
pub type VariationId = TypedId<Variation>;

/// Cart line identifier, unique within one cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartItemId(String);

impl CartItemId {
    /// Builds the id for a line inserted at `at`: `{product}-{variation or 0}-{unix millis}`.
    #[must_use]
    pub fn generate(product: ProductId, variation: Option<VariationId>, at: Timestamp) -> Self {
        Self(format!(
            "{product}-{}-{}",
            variation.map_or(0, TypedId::get),
            at.as_millisecond()
        ))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CartItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<String> for CartItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CartItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn generated_item_id_encodes_product_variation_and_time() -> TestResult {
        let at = Timestamp::from_millisecond(1_700_000_000_123)?;

        let plain = CartItemId::generate(ProductId::new(42), None, at);
        let varied = CartItemId::generate(ProductId::new(42), Some(VariationId::new(7)), at);

        assert_eq!(plain.as_str(), "42-0-1700000000123");
        assert_eq!(varied.as_str(), "42-7-1700000000123");

        Ok(())
    }

    #[test]
    fn typed_ids_serialize_as_bare_numbers() -> TestResult {
        let json = serde_json::to_string(&ProductId::new(12))?;
        let back: ProductId = serde_json::from_str(&json)?;

        assert_eq!(json, "12");
        assert_eq!(back, ProductId::new(12));

        Ok(())
    }

    #[test]
    fn typed_ids_parse_from_strings() -> TestResult {
        let id: VariationId = "31".parse()?;

        assert_eq!(id.get(), 31);
        assert!("thirty".parse::<VariationId>().is_err());

        Ok(())
    }
}
