//! Encoding policy for derived operations.

/// GraphQL type name used for native string variables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StringType {
    /// `ID`
    #[default]
    Id,
    /// `String`.
    String,
    /// Any other scalar name, e.g. a custom `URI` scalar.
    Custom(&'static str),
}

impl StringType {
    /// The scalar name emitted in argument signatures.
    pub fn name(self) -> &'static str {
        match self {
            StringType::Id => "ID",
            StringType::String => "String",
            StringType::Custom(name) => name,
        }
    }
}

/// Configuration for operation compilation.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// How native string variables are typed
    pub(crate) string_type: StringType,
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the GraphQL type used for native string variables.
    pub fn string_type(mut self, value: StringType) -> Self {
        self.string_type = value;
        self
    }
}
