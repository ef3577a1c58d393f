//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create ID wrappers that cannot be mixed up
//! with plain integers or with IDs of another entity type.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_i32()`
/// - `From<i32>`, `Into<i32>`, `Display` and `FromStr` implementations
///
/// # Example
///
/// ```rust
/// # use hobnail_core::define_id;
/// define_id!(SkuId);
/// define_id!(WarehouseId);
///
/// let sku = SkuId::new(1);
/// let warehouse = WarehouseId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: SkuId = warehouse;
/// # let _ = (sku, warehouse);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.trim().parse::<i32>().map(Self)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ProductId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_serializes_transparently() {
        let id = ProductId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");

        let parsed: ProductId = serde_json::from_str("42").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_product_id_from_str() {
        assert_eq!(" 7 ".parse::<ProductId>().unwrap(), ProductId::new(7));
        assert!("seven".parse::<ProductId>().is_err());
    }
}
