//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` + `Deserialize` entity struct matching the stored JSON
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod track;
