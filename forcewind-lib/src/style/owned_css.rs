// src/style/owned_css.rs (the fully-owned rule model the rest of the crate works on)
use std::fmt;

/// Every class rule pulled out of one generated stylesheet, in source order.
#[derive(Debug, Default, Clone)]
pub struct OwnedStylesheet {
    pub rules: Vec<ClassRule>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRule {
    /// Source selector text without the leading `.` and with CSS escapes
    /// decoded, e.g. "hover:p-4", "w-1/2" or "2xl:p-4".
    pub class_name: String,
    /// Declarations in source order with values as written, e.g.
    /// "padding" => "0.125rem".
    pub declarations: Vec<OwnedDeclaration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedDeclaration {
    pub property: String,
    pub value: String,
}

impl OwnedDeclaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        OwnedDeclaration {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl ClassRule {
    /// Build a rule from raw selector text. Returns `None` unless the selector
    /// is a class selector (starts with `.`).
    pub fn from_selector(selector: &str, declarations: Vec<OwnedDeclaration>) -> Option<Self> {
        let class_part = selector.strip_prefix('.')?;
        Some(ClassRule {
            class_name: unescape_class_name(class_part),
            declarations,
        })
    }
}

/// Decode CSS escapes: `hover\:p-4` -> `hover:p-4`, `\32xl\:p-4` -> `2xl:p-4`.
///
/// A hex escape takes up to six digits plus one optional whitespace
/// character. Zero, surrogates and out-of-range code points decode to U+FFFD.
pub fn unescape_class_name(escaped: &str) -> String {
    let mut name = String::with_capacity(escaped.len());
    let mut chars = escaped.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            name.push(ch);
            continue;
        }

        let mut code = 0u32;
        let mut digits = 0;
        while digits < 6 {
            match chars.peek().and_then(|c| c.to_digit(16)) {
                Some(digit) => {
                    code = code * 16 + digit;
                    digits += 1;
                    chars.next();
                }
                None => break,
            }
        }

        if digits == 0 {
            // `\:`, `\/`, `\.` stand for the character itself
            if let Some(literal) = chars.next() {
                name.push(literal);
            }
            continue;
        }

        match chars.peek() {
            Some('\r') => {
                chars.next();
                chars.next_if_eq(&'\n');
            }
            Some(' ' | '\t' | '\n' | '\x0c') => {
                chars.next();
            }
            _ => {}
        }

        let decoded = if code == 0 { None } else { char::from_u32(code) };
        name.push(decoded.unwrap_or(char::REPLACEMENT_CHARACTER));
    }

    name
}

impl OwnedStylesheet {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Display for ClassRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ".{}", self.class_name)?;
        for decl in &self.declarations {
            writeln!(f, "  {}: {}", decl.property, decl.value)?;
        }
        Ok(())
    }
}
