use crate::classify::{Category, Classifier};
use crate::error::{ForcewindError, Result};
use crate::render::{
    OverrideTemplate, CATEGORY_CSS_TEMPLATE, CATEGORY_JSON_TEMPLATE, FLAT_CSS_TEMPLATE,
    FLAT_JSON_TEMPLATE, PREFAB_TEMPLATE,
};
use crate::style::force_css::{read_class_rules, InputSource};
use crate::style::owned_css::ClassRule;
use crate::values::{extract_value, sort_values, CategoryFilter};
use indexmap::{IndexMap, IndexSet};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory (under the output dir) that holds per-category files.
pub const CLASSES_DIR: &str = "tailwind-classes";

/// className -> rendered override rule, in source encounter order.
pub type RenderedClasses = IndexMap<String, String>;

/// Category -> className -> rendered override rule.
pub type CategorizedBuckets = IndexMap<Category, RenderedClasses>;

/// What a run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Sorted distinct values of one category -> `PropertyValues.json`.
    Values { category: String },
    /// Override rules of one category -> `tailwind-classes/tw-<category>.css`.
    Prefab { category: String },
    /// Full taxonomy split -> `tailwind-classes/tw-<category>.css`.
    Categories,
    /// Compact taxonomy split -> `tailwind-classes/tw-<category>.json`.
    CategoriesJson,
    /// Every class -> `tailwind-classes.json`.
    Json,
    /// Every class, multi-line -> `tailwind-classes.css`.
    Css,
}

/// Resolved options for one run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub input: InputSource,
    pub out_dir: PathBuf,
}

/// A file that is ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Read the rules, render everything in memory, then write.
/// Nothing touches the disk unless reading and rendering both succeeded.
pub fn generate(config: &GenerateConfig, mode: &Mode) -> Result<Vec<PathBuf>> {
    let sheet = read_class_rules(&config.input)?;
    if sheet.is_empty() {
        warn!("No class rules found in the input, outputs will be empty");
    } else {
        info!("Loaded {} class rules", sheet.len());
    }

    let files = plan_outputs(mode, &sheet.rules, &config.out_dir)?;
    write_outputs(&files)?;

    Ok(files.into_iter().map(|f| f.path).collect())
}

/// Render the output files of `mode` without writing them.
pub fn plan_outputs(mode: &Mode, rules: &[ClassRule], out_dir: &Path) -> Result<Vec<OutputFile>> {
    let classes_dir = out_dir.join(CLASSES_DIR);

    let files = match mode {
        Mode::Values { category } => {
            let path = out_dir.join("PropertyValues.json");
            let values = list_values(rules, category);
            debug!("{} distinct values for `{}`", values.len(), category);
            let contents = to_json(&values, &path)?;
            vec![OutputFile { path, contents }]
        }
        Mode::Prefab { category } => {
            let classes = select_category(rules, category, &PREFAB_TEMPLATE);
            vec![OutputFile {
                path: classes_dir.join(format!("tw-{}.css", category)),
                contents: join_rules(&classes),
            }]
        }
        Mode::Categories => {
            let buckets = bucket_by_category(rules, &Classifier::full(), &CATEGORY_CSS_TEMPLATE);
            buckets
                .iter()
                .map(|(category, classes)| OutputFile {
                    path: classes_dir.join(format!("tw-{}.css", category)),
                    contents: join_rules(classes),
                })
                .collect()
        }
        Mode::CategoriesJson => {
            let buckets =
                bucket_by_category(rules, &Classifier::compact(), &CATEGORY_JSON_TEMPLATE);
            let mut files = Vec::with_capacity(buckets.len());
            for (category, classes) in &buckets {
                let path = classes_dir.join(format!("tw-{}.json", category));
                let contents = to_json(classes, &path)?;
                files.push(OutputFile { path, contents });
            }
            files
        }
        Mode::Json => {
            let path = out_dir.join("tailwind-classes.json");
            let contents = to_json(&render_all(rules, &FLAT_JSON_TEMPLATE), &path)?;
            vec![OutputFile { path, contents }]
        }
        Mode::Css => {
            let contents = rules.iter().map(|r| FLAT_CSS_TEMPLATE.render(r)).collect();
            vec![OutputFile {
                path: out_dir.join("tailwind-classes.css"),
                contents,
            }]
        }
    };

    Ok(files)
}

/// Create parent directories as needed and write every file.
pub fn write_outputs(files: &[OutputFile]) -> Result<()> {
    for file in files {
        if let Some(parent) = file.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ForcewindError::WriteOutput {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&file.path, &file.contents).map_err(|source| ForcewindError::WriteOutput {
            path: file.path.clone(),
            source,
        })?;
        info!("Wrote {}", file.path.display());
    }
    Ok(())
}

/// Distinct values of `category`, ordered numeric < fraction < lexical.
/// Variant (colon-bearing) names are left out.
pub fn list_values(rules: &[ClassRule], category: &str) -> Vec<String> {
    let filter = CategoryFilter::values(category);
    let distinct: IndexSet<String> = rules
        .iter()
        .filter(|r| filter.matches(&r.class_name))
        .map(|r| extract_value(&r.class_name, category).to_string())
        .collect();
    sort_values(distinct)
}

/// Rules of a single category (bare name included), rendered.
pub fn select_category(
    rules: &[ClassRule],
    category: &str,
    template: &OverrideTemplate,
) -> RenderedClasses {
    let filter = CategoryFilter::prefab(category);
    rules
        .iter()
        .filter(|r| filter.matches(&r.class_name))
        .map(|r| (r.class_name.clone(), template.render(r)))
        .collect()
}

/// Classify every rule and render it into its bucket. A repeated class name
/// keeps its first position and takes the last rendering.
pub fn bucket_by_category(
    rules: &[ClassRule],
    classifier: &Classifier<'_>,
    template: &OverrideTemplate,
) -> CategorizedBuckets {
    let mut buckets = CategorizedBuckets::new();
    for rule in rules {
        let category = classifier.classify(&rule.class_name);
        buckets
            .entry(category)
            .or_default()
            .insert(rule.class_name.clone(), template.render(rule));
    }
    debug!("Bucketed {} rules into {} categories", rules.len(), buckets.len());
    buckets
}

/// Every rule rendered, keyed by class name.
pub fn render_all(rules: &[ClassRule], template: &OverrideTemplate) -> RenderedClasses {
    rules
        .iter()
        .map(|r| (r.class_name.clone(), template.render(r)))
        .collect()
}

fn join_rules(classes: &RenderedClasses) -> String {
    classes.values().map(String::as_str).collect::<Vec<_>>().join("\n")
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T, path: &Path) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|source| ForcewindError::Serialize {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::owned_css::OwnedDeclaration;
    use pretty_assertions::assert_eq;

    fn rule(class_name: &str, property: &str, value: &str) -> ClassRule {
        ClassRule {
            class_name: class_name.to_string(),
            declarations: vec![OwnedDeclaration::new(property, value)],
        }
    }

    fn padding_rules() -> Vec<ClassRule> {
        vec![
            rule("p-8", "padding", "2rem"),
            rule("p-4", "padding", "1rem"),
            rule("hover:p-4", "padding", "1rem"),
            rule("-p-1/2", "padding", "-50%"),
            rule("p-auto", "padding", "auto"),
            rule("p-4", "padding", "1rem"),
            rule("px-4", "padding-left", "1rem"),
        ]
    }

    #[test]
    fn values_are_distinct_sorted_and_variant_free() {
        assert_eq!(
            list_values(&padding_rules(), "p"),
            vec!["4", "8", "1/2", "auto"]
        );
    }

    #[test]
    fn buckets_follow_encounter_order() {
        let buckets =
            bucket_by_category(&padding_rules(), &Classifier::full(), &CATEGORY_CSS_TEMPLATE);
        let keys: Vec<String> = buckets.keys().map(|c| c.to_string()).collect();
        assert_eq!(keys, vec!["spacing-padding", "uncategorized"]);

        let padding = &buckets[&Category::Named("spacing-padding")];
        let names: Vec<&str> = padding.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["p-8", "p-4", "-p-1/2", "p-auto", "px-4"]);
    }

    #[test]
    fn prefab_selects_bare_and_suffixed_names() {
        let rules = vec![
            rule("border", "border-width", "1px"),
            rule("border-2", "border-width", "2px"),
            rule("hover:border", "border-width", "1px"),
            rule("borders", "x", "y"),
        ];
        let classes = select_category(&rules, "border", &PREFAB_TEMPLATE);
        assert_eq!(
            classes.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["border", "border-2"]
        );
    }

    #[test]
    fn values_mode_writes_a_json_array() {
        let files = plan_outputs(
            &Mode::Values {
                category: "p".to_string(),
            },
            &padding_rules(),
            Path::new("out"),
        )
        .unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, Path::new("out").join("PropertyValues.json"));
        assert_eq!(
            files[0].contents,
            "[\n  \"4\",\n  \"8\",\n  \"1/2\",\n  \"auto\"\n]"
        );
    }

    #[test]
    fn prefab_mode_joins_rules_with_newlines() {
        let files = plan_outputs(
            &Mode::Prefab {
                category: "p".to_string(),
            },
            &padding_rules(),
            Path::new("out"),
        )
        .unwrap();
        assert_eq!(files[0].path, Path::new("out/tailwind-classes/tw-p.css"));
        let lines: Vec<&str> = files[0].contents.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], r#"html body * [ø="p-8"] { padding: 2rem !important }"#);
    }

    #[test]
    fn compact_split_names_json_files_by_category() {
        let files = plan_outputs(&Mode::CategoriesJson, &padding_rules(), Path::new("o")).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["tw-padding.json", "tw-interactivity.json", "tw-other.json"]);
        assert!(files[0]
            .contents
            .contains(r#""p-8": "html body * [ƒ__p-8] { padding: 2rem!important }""#));
    }

    #[test]
    fn flat_css_concatenates_multi_line_rules() {
        let rules = vec![rule("p-4", "padding", "1rem"), rule("m-2", "margin", "0.5rem")];
        let files = plan_outputs(&Mode::Css, &rules, Path::new(".")).unwrap();
        assert_eq!(
            files[0].contents,
            "html body * [\"ƒ__p-4\"] {\n    padding: 1rem !important;\n}\n\
             html body * [\"ƒ__m-2\"] {\n    margin: 0.5rem !important;\n}\n"
        );
    }
}
