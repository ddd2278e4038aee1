//! Name-casing rules for `data-*` properties.

/// `dataFooBar` -> `data-foo-bar`
pub fn data_property_to_attribute(property: &str) -> String {
    let rest = &property[4..];
    let mut dashed = String::with_capacity(rest.len() + 4);
    for c in rest.chars() {
        if c.is_ascii_uppercase() {
            dashed.push('-');
            dashed.push(c.to_ascii_lowercase());
        } else {
            dashed.push(c);
        }
    }
    if !dashed.starts_with('-') {
        dashed.insert(0, '-');
    }
    format!("data{}", dashed)
}

/// `data-foo-bar` -> `dataFooBar`
pub fn data_attribute_to_property(attribute: &str) -> String {
    let rest = &attribute[4..];
    let mut camel = String::with_capacity(rest.len());
    let mut chars = rest.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(next) if c == '-' && next.is_ascii_lowercase() => {
                camel.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => camel.push(c),
        }
    }
    format!("data{}", camel)
}

/// Whether `name` can be a `data-*` property or attribute.
pub fn is_data_name(name: &str) -> bool {
    name.len() > 4
        && name.get(..4).is_some_and(|prefix| prefix.eq_ignore_ascii_case("data"))
        && name[4..]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'))
}
