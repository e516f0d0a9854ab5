//! Named style tables and lookup-key normalization.
//!
//! Three independently keyed tables map canonical style names (and their
//! aliases) to SGR codes: foreground colors, background colors, and text
//! modifiers. The tables are built once, lazily, before first use; alias
//! targets are validated during that construction, so a bad alias is a
//! startup panic rather than a per-call error.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::StyleError;

/// One registry entry: a canonical style name and its SGR code.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entry {
    /// Canonical name, e.g. `"brightBlue"`.
    pub name: &'static str,
    /// SGR code emitted for this entry.
    pub code: u8,
}

/// Which registry table a lookup targets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Category {
    /// Foreground (text) colors.
    Foreground,
    /// Background colors.
    Background,
    /// Text modifiers (bold, dim, italic, ...).
    Modifier,
}

impl Category {
    fn unknown(self, value: &str) -> StyleError {
        match self {
            Category::Foreground => StyleError::UnknownColor(value.to_string()),
            Category::Background => StyleError::UnknownBackground(value.to_string()),
            Category::Modifier => StyleError::UnknownModifier(value.to_string()),
        }
    }
}

/// A value that can be resolved against a registry table: a name, or an
/// entry previously handed out by the registry.
#[derive(Clone, Debug, PartialEq)]
pub enum Lookup {
    /// A name or alias, in any spelling `normalize_key` accepts.
    Name(String),
    /// An entry; its code must agree with the registry's entry for that name.
    Entry(Entry),
}

impl From<&str> for Lookup {
    fn from(name: &str) -> Self {
        Lookup::Name(name.to_string())
    }
}

impl From<String> for Lookup {
    fn from(name: String) -> Self {
        Lookup::Name(name)
    }
}

impl From<Entry> for Lookup {
    fn from(entry: Entry) -> Self {
        Lookup::Entry(entry)
    }
}

/// Canonicalizes a name for table lookup: trim, lowercase, and drop every
/// whitespace, underscore, and hyphen. `"bright_blue"`, `"Bright-Blue"`,
/// and `"brightblue"` all produce the same key.
pub(crate) fn normalize_key(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// One category's lookup table: canonical entries in declaration order,
/// plus a key map covering canonical names and aliases.
pub(crate) struct Table {
    category: Category,
    entries: Vec<Entry>,
    lookup: HashMap<String, Entry>,
}

impl Table {
    fn build(
        category: Category,
        canonical: &[(&'static str, u8)],
        aliases: &[(&'static str, &'static str)],
    ) -> Self {
        let mut entries = Vec::with_capacity(canonical.len());
        let mut lookup = HashMap::with_capacity(canonical.len() + aliases.len());

        for &(name, code) in canonical {
            let entry = Entry { name, code };
            entries.push(entry);
            lookup.insert(normalize_key(name), entry);
        }

        for &(alias, target) in aliases {
            let entry = *lookup
                .get(&normalize_key(target))
                .unwrap_or_else(|| panic!("unknown alias target: {target}"));
            lookup.insert(normalize_key(alias), entry);
        }

        Table {
            category,
            entries,
            lookup,
        }
    }

    /// Canonical entries in declaration order.
    pub(crate) fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Looks up an already-normalized key.
    pub(crate) fn get(&self, key: &str) -> Option<Entry> {
        self.lookup.get(key).copied()
    }

    /// Resolves a name or entry to this table's canonical entry.
    ///
    /// A caller-supplied [`Entry`] whose code matches the registry's code
    /// for that name resolves directly; on a code mismatch the entry falls
    /// back to plain name resolution, so a stale or hand-built code never
    /// propagates into the output.
    pub(crate) fn resolve(&self, value: &Lookup) -> Result<Entry, StyleError> {
        let name = match value {
            Lookup::Entry(entry) => {
                if let Some(found) = self.get(&normalize_key(entry.name)) {
                    if found.code == entry.code {
                        return Ok(found);
                    }
                }
                entry.name
            }
            Lookup::Name(name) => name,
        };

        let key = normalize_key(name);
        if key.is_empty() {
            return Err(self.category.unknown(name));
        }

        self.get(&key).ok_or_else(|| self.category.unknown(name))
    }
}

const FOREGROUND_CODES: &[(&'static str, u8)] = &[
    ("black", 30),
    ("red", 31),
    ("green", 32),
    ("yellow", 33),
    ("blue", 34),
    ("magenta", 35),
    ("cyan", 36),
    ("white", 37),
    ("gray", 90),
    ("brightBlack", 90),
    ("brightRed", 91),
    ("brightGreen", 92),
    ("brightYellow", 93),
    ("brightBlue", 94),
    ("brightMagenta", 95),
    ("brightCyan", 96),
    ("brightWhite", 97),
];

const BACKGROUND_CODES: &[(&'static str, u8)] = &[
    ("black", 40),
    ("red", 41),
    ("green", 42),
    ("yellow", 43),
    ("blue", 44),
    ("magenta", 45),
    ("cyan", 46),
    ("white", 47),
    ("gray", 100),
    ("brightBlack", 100),
    ("brightRed", 101),
    ("brightGreen", 102),
    ("brightYellow", 103),
    ("brightBlue", 104),
    ("brightMagenta", 105),
    ("brightCyan", 106),
    ("brightWhite", 107),
];

const MODIFIER_CODES: &[(&'static str, u8)] = &[
    ("reset", 0),
    ("bold", 1),
    ("dim", 2),
    ("italic", 3),
    ("underline", 4),
    ("blink", 5),
    ("inverse", 7),
    ("hidden", 8),
    ("strikethrough", 9),
];

const COLOR_ALIASES: &[(&'static str, &'static str)] = &[("grey", "gray")];

const MODIFIER_ALIASES: &[(&'static str, &'static str)] = &[
    ("faint", "dim"),
    ("conceal", "hidden"),
    ("strike", "strikethrough"),
    ("strikethru", "strikethrough"),
];

static FOREGROUND: Lazy<Table> =
    Lazy::new(|| Table::build(Category::Foreground, FOREGROUND_CODES, COLOR_ALIASES));

static BACKGROUND: Lazy<Table> =
    Lazy::new(|| Table::build(Category::Background, BACKGROUND_CODES, COLOR_ALIASES));

static MODIFIER: Lazy<Table> =
    Lazy::new(|| Table::build(Category::Modifier, MODIFIER_CODES, MODIFIER_ALIASES));

pub(crate) fn foreground() -> &'static Table {
    &FOREGROUND
}

pub(crate) fn background() -> &'static Table {
    &BACKGROUND
}

pub(crate) fn modifier() -> &'static Table {
    &MODIFIER
}

/// Resolves a name or entry in the given category's table.
pub fn resolve(category: Category, value: impl Into<Lookup>) -> Result<Entry, StyleError> {
    let table = match category {
        Category::Foreground => foreground(),
        Category::Background => background(),
        Category::Modifier => modifier(),
    };
    table.resolve(&value.into())
}
