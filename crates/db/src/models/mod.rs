//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus the `Deserialize` request DTOs for that entity.
//! Wire names are camelCase; column and field names stay snake_case.

pub mod diary;
