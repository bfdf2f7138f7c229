//! Section hierarchy rules.
//!
//! The rule tables answer three questions about a pair of section
//! names: does the second nest inside the first, does it sit at the
//! same level, and which settings must be present before the section
//! ends. All names are already lowercased by the parser.

/// (child, permitted parents).
static PARENTS: &[(&str, &[&str])] = &[
    ("widget", &["group", "configuration"]),
    ("node", &["widget"]),
    ("link", &["widget"]),
    ("series", &["link", "widget"]),
    ("tags", &["series"]),
];

/// Ordered (previous, current) pairs of sections that share an
/// indentation level. `group` and `configuration` never consult this
/// table because they reset indentation instead.
static SAME_LEVEL: &[(&str, &str)] = &[
    ("link", "node"),
    ("node", "link"),
    ("link", "series"),
    ("series", "link"),
];

/// (section, groups of alternatives; one name from each group must appear).
static REQUIRED: &[(&str, &[&[&str]])] = &[
    ("series", &[&["entity"], &["metric", "table", "attribute"]]),
    ("widget", &[&["type"]]),
];

/// Sections whose settings are user tags rather than dictionary keys.
static TAG_EXEMPT: &[&str] = &["tag", "tags", "keys"];

/// Whether `child` is declared to nest directly inside `parent`.
pub fn is_nested(parent: &str, child: &str) -> bool {
    PARENTS
        .iter()
        .any(|(c, parents)| *c == child && parents.contains(&parent))
}

/// Whether two consecutive sections keep the same indentation.
pub fn is_same_level(previous: &str, current: &str) -> bool {
    previous == current
        || SAME_LEVEL
            .iter()
            .any(|(a, b)| *a == previous && *b == current)
}

/// Whether a section header resets indentation to the left margin.
pub fn resets_indent(name: &str) -> bool {
    name == "group" || name == "configuration"
}

/// Whether unknown keys inside `section` are tags instead of typos.
pub fn is_tag_exempt(section: &str) -> bool {
    TAG_EXEMPT.contains(&section)
}

/// Alternative groups of settings the section cannot omit.
pub fn required_settings(section: &str) -> &'static [&'static [&'static str]] {
    REQUIRED
        .iter()
        .find(|(name, _)| *name == section)
        .map(|(_, groups)| *groups)
        .unwrap_or(&[])
}
