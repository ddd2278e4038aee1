//! The HTML property table.
//!
//! Covers global attributes, form, table and media attributes, and ARIA.
//! `data-*` properties are resolved by rule rather than listed.

use crate::case::{data_attribute_to_property, data_property_to_attribute, is_data_name};
use crate::info::PropertyInfo;
use crate::PropertyLookup;
use once_cell::sync::Lazy;
use std::collections::HashMap;

const BOOLEAN: u8 = 1;
const OVERLOADED_BOOLEAN: u8 = 1 << 1;
const BOOLEANISH: u8 = 1 << 2;
const NUMBER: u8 = 1 << 3;
const COMMA_SEPARATED: u8 = 1 << 4;
const SPACE_SEPARATED: u8 = 1 << 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Space {
    Html,
    Aria,
}

struct Entry {
    property: &'static str,
    /// Attribute name when it is not simply the lowercased property
    attribute: Option<&'static str>,
    flags: u8,
    space: Space,
}

const fn html(property: &'static str, flags: u8) -> Entry {
    Entry {
        property,
        attribute: None,
        flags,
        space: Space::Html,
    }
}

const fn html_as(property: &'static str, attribute: &'static str, flags: u8) -> Entry {
    Entry {
        property,
        attribute: Some(attribute),
        flags,
        space: Space::Html,
    }
}

const fn aria(property: &'static str, flags: u8) -> Entry {
    Entry {
        property,
        attribute: None,
        flags,
        space: Space::Aria,
    }
}

static ENTRIES: &[Entry] = &[
    html("abbr", 0),
    html("accept", COMMA_SEPARATED),
    html_as("acceptCharset", "accept-charset", SPACE_SEPARATED),
    html("accessKey", SPACE_SEPARATED),
    html("action", 0),
    html("allow", 0),
    html("allowFullScreen", BOOLEAN),
    html("allowPaymentRequest", BOOLEAN),
    html("allowUserMedia", BOOLEAN),
    html("alt", 0),
    html("as", 0),
    html("async", BOOLEAN),
    html("autoCapitalize", 0),
    html("autoComplete", SPACE_SEPARATED),
    html("autoFocus", BOOLEAN),
    html("autoPlay", BOOLEAN),
    html("capture", 0),
    html("charSet", 0),
    html("checked", BOOLEAN),
    html("cite", 0),
    html_as("className", "class", SPACE_SEPARATED),
    html("classId", 0),
    html("cols", NUMBER),
    html("colSpan", 0),
    html("content", 0),
    html("contentEditable", BOOLEANISH),
    html("controls", BOOLEAN),
    html("controlsList", SPACE_SEPARATED),
    html("coords", NUMBER | COMMA_SEPARATED),
    html("crossOrigin", 0),
    html("data", 0),
    html("dateTime", 0),
    html("decoding", 0),
    html("default", BOOLEAN),
    html("defer", BOOLEAN),
    html("dir", 0),
    html("dirName", 0),
    html("disabled", BOOLEAN),
    html("download", OVERLOADED_BOOLEAN),
    html("draggable", BOOLEANISH),
    html("encType", 0),
    html("enterKeyHint", 0),
    html("form", 0),
    html("formAction", 0),
    html("formEncType", 0),
    html("formMethod", 0),
    html("formNoValidate", BOOLEAN),
    html("formTarget", 0),
    html("headers", SPACE_SEPARATED),
    html("height", NUMBER),
    html("hidden", BOOLEAN),
    html("high", NUMBER),
    html("href", 0),
    html("hrefLang", 0),
    html_as("htmlFor", "for", SPACE_SEPARATED),
    html_as("httpEquiv", "http-equiv", SPACE_SEPARATED),
    html("id", 0),
    html("inert", BOOLEAN),
    html("inputMode", 0),
    html("integrity", 0),
    html("is", 0),
    html("isMap", BOOLEAN),
    html("itemId", 0),
    html("itemProp", SPACE_SEPARATED),
    html("itemRef", SPACE_SEPARATED),
    html("itemScope", BOOLEAN),
    html("itemType", SPACE_SEPARATED),
    html("kind", 0),
    html("label", 0),
    html("lang", 0),
    html("language", 0),
    html("list", 0),
    html("loading", 0),
    html("loop", BOOLEAN),
    html("low", NUMBER),
    html("manifest", 0),
    html("max", 0),
    html("maxLength", NUMBER),
    html("media", 0),
    html("method", 0),
    html("min", 0),
    html("minLength", NUMBER),
    html("multiple", BOOLEAN),
    html("muted", BOOLEAN),
    html("name", 0),
    html("nonce", 0),
    html("noModule", BOOLEAN),
    html("noValidate", BOOLEAN),
    html("open", BOOLEAN),
    html("optimum", NUMBER),
    html("pattern", 0),
    html("ping", SPACE_SEPARATED),
    html("placeholder", 0),
    html("playsInline", BOOLEAN),
    html("poster", 0),
    html("preload", 0),
    html("readOnly", BOOLEAN),
    html("referrerPolicy", 0),
    html("rel", SPACE_SEPARATED),
    html("required", BOOLEAN),
    html("reversed", BOOLEAN),
    html("role", 0),
    html("rows", NUMBER),
    html("rowSpan", NUMBER),
    html("sandbox", SPACE_SEPARATED),
    html("scope", 0),
    html("scoped", BOOLEAN),
    html("seamless", BOOLEAN),
    html("selected", BOOLEAN),
    html("shape", 0),
    html("size", NUMBER),
    html("sizes", 0),
    html("slot", 0),
    html("span", NUMBER),
    html("spellCheck", BOOLEANISH),
    html("src", 0),
    html("srcDoc", 0),
    html("srcLang", 0),
    html("srcSet", COMMA_SEPARATED),
    html("start", NUMBER),
    html("step", 0),
    html("style", 0),
    html("tabIndex", NUMBER),
    html("target", 0),
    html("title", 0),
    html("translate", 0),
    html("type", 0),
    html_as("typeOf", "typeof", SPACE_SEPARATED),
    html("typeMustMatch", BOOLEAN),
    html("useMap", 0),
    html("value", BOOLEANISH),
    html("width", NUMBER),
    html("wrap", 0),
    aria("ariaActiveDescendant", 0),
    aria("ariaAtomic", BOOLEANISH),
    aria("ariaAutoComplete", 0),
    aria("ariaBusy", BOOLEANISH),
    aria("ariaChecked", BOOLEANISH),
    aria("ariaColCount", NUMBER),
    aria("ariaColIndex", NUMBER),
    aria("ariaColSpan", NUMBER),
    aria("ariaControls", SPACE_SEPARATED),
    aria("ariaCurrent", 0),
    aria("ariaDescribedBy", SPACE_SEPARATED),
    aria("ariaDetails", 0),
    aria("ariaDisabled", BOOLEANISH),
    aria("ariaDropEffect", SPACE_SEPARATED),
    aria("ariaErrorMessage", 0),
    aria("ariaExpanded", BOOLEANISH),
    aria("ariaFlowTo", SPACE_SEPARATED),
    aria("ariaGrabbed", BOOLEANISH),
    aria("ariaHasPopup", 0),
    aria("ariaHidden", BOOLEANISH),
    aria("ariaInvalid", 0),
    aria("ariaKeyShortcuts", 0),
    aria("ariaLabel", 0),
    aria("ariaLabelledBy", SPACE_SEPARATED),
    aria("ariaLevel", NUMBER),
    aria("ariaLive", 0),
    aria("ariaModal", BOOLEANISH),
    aria("ariaMultiLine", BOOLEANISH),
    aria("ariaMultiSelectable", BOOLEANISH),
    aria("ariaOrientation", 0),
    aria("ariaOwns", SPACE_SEPARATED),
    aria("ariaPlaceholder", 0),
    aria("ariaPosInSet", NUMBER),
    aria("ariaPressed", BOOLEANISH),
    aria("ariaReadOnly", BOOLEANISH),
    aria("ariaRelevant", 0),
    aria("ariaRequired", BOOLEANISH),
    aria("ariaRoleDescription", SPACE_SEPARATED),
    aria("ariaRowCount", NUMBER),
    aria("ariaRowIndex", NUMBER),
    aria("ariaRowSpan", NUMBER),
    aria("ariaSelected", BOOLEANISH),
    aria("ariaSetSize", NUMBER),
    aria("ariaSort", 0),
    aria("ariaValueMax", NUMBER),
    aria("ariaValueMin", NUMBER),
    aria("ariaValueNow", NUMBER),
    aria("ariaValueText", 0),
];

/// JSX prop names that differ from the hast property name.
static REACT_ALIASES: &[(&str, &str)] = &[
    ("classId", "classID"),
    ("itemId", "itemID"),
    ("typeOf", "typeof"),
];

struct TableIndex {
    infos: Vec<PropertyInfo>,
    by_property: HashMap<&'static str, usize>,
    /// Lowercased property and attribute names
    normal: HashMap<String, usize>,
}

static INDEX: Lazy<TableIndex> = Lazy::new(|| {
    let mut infos = Vec::with_capacity(ENTRIES.len());
    let mut by_property = HashMap::with_capacity(ENTRIES.len());
    let mut normal = HashMap::with_capacity(ENTRIES.len() * 2);

    for (index, entry) in ENTRIES.iter().enumerate() {
        let info = entry_info(entry);
        by_property.insert(entry.property, index);
        normal.insert(info.property.to_ascii_lowercase(), index);
        normal.insert(info.attribute.to_ascii_lowercase(), index);
        infos.push(info);
    }

    TableIndex {
        infos,
        by_property,
        normal,
    }
});

fn entry_info(entry: &Entry) -> PropertyInfo {
    let attribute = match (entry.attribute, entry.space) {
        (Some(attribute), _) => attribute.to_string(),
        (None, Space::Html) => entry.property.to_ascii_lowercase(),
        (None, Space::Aria) => format!("aria-{}", entry.property[4..].to_ascii_lowercase()),
    };

    let react_alias = match entry.space {
        Space::Html => Some(
            REACT_ALIASES
                .iter()
                .find(|(property, _)| *property == entry.property)
                .map_or(entry.property, |(_, alias)| *alias)
                .to_string(),
        ),
        Space::Aria => None,
    };

    PropertyInfo {
        property: entry.property.to_string(),
        attribute,
        react_alias,
        boolean: entry.flags & BOOLEAN != 0,
        overloaded_boolean: entry.flags & OVERLOADED_BOOLEAN != 0,
        booleanish: entry.flags & BOOLEANISH != 0,
        number: entry.flags & NUMBER != 0,
        comma_separated: entry.flags & COMMA_SEPARATED != 0,
        space_separated: entry.flags & SPACE_SEPARATED != 0,
        defined: true,
    }
}

/// Property lookup backed by the built-in HTML schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlPropertyTable;

impl HtmlPropertyTable {
    pub fn new() -> Self {
        HtmlPropertyTable
    }
}

impl PropertyLookup for HtmlPropertyTable {
    fn find(&self, name: &str) -> PropertyInfo {
        let index = &*INDEX;

        if let Some(&i) = index.by_property.get(name) {
            return index.infos[i].clone();
        }

        if let Some(&i) = index.normal.get(&name.to_ascii_lowercase()) {
            return index.infos[i].clone();
        }

        if is_data_name(name) {
            let mut info = PropertyInfo::unknown(name);
            if name.as_bytes()[4] == b'-' {
                info.property = data_attribute_to_property(name);
            } else {
                info.attribute = data_property_to_attribute(name);
            }
            return info;
        }

        PropertyInfo::unknown(name)
    }
}
