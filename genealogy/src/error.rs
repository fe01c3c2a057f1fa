//! Error types for the family tree core.

use crate::components::PersonId;

#[derive(Debug, thiserror::Error)]
pub enum GenealogyError {
    #[error("no person with handle {0:?} in this family graph")]
    UnknownPerson(PersonId),

    #[error("no person named '{0}' in the registry")]
    UnknownName(String),

    #[error("invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("malformed date '{0}', expected YYYY-MM-DD")]
    MalformedDate(String),
}

pub type Result<T> = std::result::Result<T, GenealogyError>;
