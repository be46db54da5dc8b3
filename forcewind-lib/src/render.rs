use crate::style::owned_css::ClassRule;

/// How the declarations of one override rule are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `sel { a: 1 !important; b: 2 !important }`
    SingleLine,
    /// One indented declaration per line, each terminated by `;`, and a
    /// trailing newline after the closing brace.
    MultiLine,
}

/// Override-rule template: `html body * <open><class><close> { ... }`.
///
/// The attribute selector shape differs per output, so each generation mode
/// owns one of the constants below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverrideTemplate {
    pub open: &'static str,
    pub close: &'static str,
    /// Appended to every value; `" !important"` or `"!important"`.
    pub important: &'static str,
    pub layout: Layout,
}

/// `html body * [ø="<cls>"]`
pub const PREFAB_TEMPLATE: OverrideTemplate = OverrideTemplate {
    open: "[ø=\"",
    close: "\"]",
    important: " !important",
    layout: Layout::SingleLine,
};

/// `html body * ["ƒ__<cls>"]`
pub const CATEGORY_CSS_TEMPLATE: OverrideTemplate = OverrideTemplate {
    open: "[\"ƒ__",
    close: "\"]",
    important: " !important",
    layout: Layout::SingleLine,
};

/// `html body * [ƒ__<cls>]`, values glued to `!important`.
pub const CATEGORY_JSON_TEMPLATE: OverrideTemplate = OverrideTemplate {
    open: "[ƒ__",
    close: "]",
    important: "!important",
    layout: Layout::SingleLine,
};

/// `html body * [ƒ__<cls>]`
pub const FLAT_JSON_TEMPLATE: OverrideTemplate = OverrideTemplate {
    open: "[ƒ__",
    close: "]",
    important: " !important",
    layout: Layout::SingleLine,
};

/// `html body * ["ƒ__<cls>"]`, one declaration per line.
pub const FLAT_CSS_TEMPLATE: OverrideTemplate = OverrideTemplate {
    open: "[\"ƒ__",
    close: "\"]",
    important: " !important",
    layout: Layout::MultiLine,
};

impl OverrideTemplate {
    pub fn selector(&self, class_name: &str) -> String {
        format!("html body * {}{}{}", self.open, class_name, self.close)
    }

    /// Render one rule. Declarations keep their order; nothing is merged,
    /// dropped or validated.
    pub fn render(&self, rule: &ClassRule) -> String {
        let selector = self.selector(&rule.class_name);
        match self.layout {
            Layout::SingleLine => {
                let props: Vec<String> = rule
                    .declarations
                    .iter()
                    .map(|d| format!("{}: {}{}", d.property, d.value, self.important))
                    .collect();
                format!("{} {{ {} }}", selector, props.join("; "))
            }
            Layout::MultiLine => {
                let props: Vec<String> = rule
                    .declarations
                    .iter()
                    .map(|d| format!("    {}: {}{};", d.property, d.value, self.important))
                    .collect();
                format!("{} {{\n{}\n}}\n", selector, props.join("\n"))
            }
        }
    }
}
