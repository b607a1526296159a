//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally comparing a store id against a customer group id.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_i32()`
/// - `Display`, `FromStr`, `From<i32>` and `Into<i32>` implementations
///
/// # Example
///
/// ```rust
/// # use gatehouse_core::define_id;
/// define_id!(WebsiteId);
/// define_id!(QuoteId);
///
/// let website_id = WebsiteId::new(1);
/// let quote_id = QuoteId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: WebsiteId = quote_id;
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

define_id!(CustomerId);
define_id!(CustomerGroupId);
define_id!(StoreId);

impl StoreId {
    /// The reserved back-office store.
    ///
    /// Customers created from the admin panel carry this store id because they
    /// cannot be attached to a storefront.
    pub const ADMIN: Self = Self::new(0);

    /// Whether this is the reserved back-office store.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.0 == Self::ADMIN.0
    }
}

impl CustomerGroupId {
    /// The reserved group every anonymous visitor belongs to.
    pub const NOT_LOGGED_IN: Self = Self::new(0);
}
