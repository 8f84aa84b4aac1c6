//! Custom extractors for Axum handlers.

pub mod lenient_query;
pub mod object_id_path;

pub use lenient_query::LenientQuery;
pub use object_id_path::ObjectIdPath;
