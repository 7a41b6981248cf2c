use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ArgumentType, InputType, Shape, TypeDescriptor};

/// GraphQL `ID` scalar.
///
/// Encodes as `ID` regardless of how plain strings are configured to encode.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(pub String);

impl Id {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl Shape for Id {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Scalar
    }
}

impl InputType for Id {
    fn argument_type() -> ArgumentType {
        ArgumentType::named("ID")
    }
}
