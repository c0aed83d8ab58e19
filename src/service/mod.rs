//! Table: generic record persistence using the safe SQL builder.

mod crud;
pub use crud::Table;
