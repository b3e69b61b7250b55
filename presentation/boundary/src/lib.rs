//! Translates catalog failures into HTTP error responses.
//!
//! Routing is left to the host application; this crate only shapes the
//! status code and JSON body for each failure kind.

pub mod api {
    pub mod error;
    pub mod product {
        pub mod error_mapper;
    }
}
