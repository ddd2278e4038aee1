/// Schema facts about a single property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
    /// hast property name (`className`)
    pub property: String,
    /// Canonical HTML attribute name (`class`)
    pub attribute: String,
    /// JSX prop name, when the property belongs to the HTML schema (`className`).
    pub react_alias: Option<String>,
    pub boolean: bool,
    pub overloaded_boolean: bool,
    pub booleanish: bool,
    pub number: bool,
    pub comma_separated: bool,
    pub space_separated: bool,
    /// Whether the schema knows this property, as opposed to a pass-through guess.
    pub defined: bool,
}

impl PropertyInfo {
    /// A property the schema knows nothing about: name passes through as-is.
    pub fn unknown(name: &str) -> Self {
        PropertyInfo {
            property: name.to_string(),
            attribute: name.to_string(),
            react_alias: None,
            boolean: false,
            overloaded_boolean: false,
            booleanish: false,
            number: false,
            comma_separated: false,
            space_separated: false,
            defined: false,
        }
    }

    pub fn canonical_name(&self) -> &str {
        &self.attribute
    }

    pub fn is_boolean(&self) -> bool {
        self.boolean
    }

    pub fn is_comma_separated(&self) -> bool {
        self.comma_separated
    }
}
