use thiserror::Error;

use crate::{extract, reflect::Reflect};

pub type ReflectResult<T> = Result<T, ReflectError>;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ReflectError {
    #[error("{input:?} is not an identifier and cannot name a `{type_name}` value")]
    NotAnIdentifier {
        type_name: &'static str,
        input: String,
    },
    #[error("`{type_name}` has no enumerator named {input:?}")]
    UnknownName {
        type_name: &'static str,
        input: String,
    },
    #[error("{value} is not a named `{type_name}` value")]
    UnnamedValue { type_name: &'static str, value: i128 },
}

impl ReflectError {
    pub fn unknown_name<E: Reflect>(input: &str) -> Self {
        let type_name = extract::type_name::<E>();
        let input = input.to_string();

        if extract::is_identifier(&input) {
            Self::UnknownName { type_name, input }
        } else {
            Self::NotAnIdentifier { type_name, input }
        }
    }

    pub fn unnamed_value<E: Reflect>(value: i128) -> Self {
        Self::UnnamedValue {
            type_name: extract::type_name::<E>(),
            value,
        }
    }
}
