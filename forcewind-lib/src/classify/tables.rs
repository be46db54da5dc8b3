//! Prefix -> category taxonomies.
//!
//! Each table is its own configuration artifact. They overlap but
//! deliberately disagree (`border-` is "borders" in one and "border" in the
//! other, colon prefixes are variants in one and plain entries in the other),
//! and the generation mode decides which one applies.

/// One `prefix -> category` record. Matching is a literal `starts_with`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixEntry {
    pub prefix: &'static str,
    pub category: &'static str,
}

const fn entry(prefix: &'static str, category: &'static str) -> PrefixEntry {
    PrefixEntry { prefix, category }
}

/// An ordered prefix taxonomy. The first entry that matches wins, so the
/// declaration order below is the precedence order.
#[derive(Debug, Clone, Copy)]
pub struct PrefixTable {
    /// Colon-terminated markers checked before any entry, e.g. `sm:`.
    pub variant_markers: &'static [&'static str],
    pub entries: &'static [PrefixEntry],
    /// Whether `-<prefix>` (negative utilities such as `-m-4`) also matches.
    pub negated_prefixes: bool,
    pub fallback: &'static str,
}

/// Per-category taxonomy used for the `tw-<category>.css` split.
pub static FULL_TAXONOMY: PrefixTable = PrefixTable {
    variant_markers: &["sm:"],
    entries: FULL_ENTRIES,
    negated_prefixes: true,
    fallback: "uncategorized",
};

/// Coarser taxonomy used for the `tw-<category>.json` split.
pub static COMPACT_TAXONOMY: PrefixTable = PrefixTable {
    variant_markers: &[],
    entries: COMPACT_ENTRIES,
    negated_prefixes: false,
    fallback: "other",
};

const FULL_ENTRIES: &[PrefixEntry] = &[
    // Layout
    entry("container", "layout-container"),
    entry("box-", "layout-box-sizing"),
    entry("float-", "layout-float"),
    entry("clear-", "layout-clear"),
    entry("object-", "layout-object-fit"),
    entry("overflow-", "layout-overflow"),
    entry("overscroll-", "layout-overscroll"),
    entry("position-", "layout-position"),
    entry("top-", "layout-top-right-bottom-left"),
    entry("right-", "layout-top-right-bottom-left"),
    entry("bottom-", "layout-top-right-bottom-left"),
    entry("left-", "layout-top-right-bottom-left"),
    entry("visible", "layout-visibility"),
    entry("invisible", "layout-visibility"),
    entry("z-", "layout-z-index"),
    // Flexbox & Grid
    entry("flex", "flexbox-flex"),
    entry("flex-", "flexbox-flex"),
    entry("grid-", "grid"),
    entry("grid", "grid"),
    entry("gap-", "flexbox-grid-gap"),
    entry("justify-", "flexbox-grid-justify"),
    entry("content-", "flexbox-grid-align"),
    entry("items-", "flexbox-grid-align"),
    entry("self-", "flexbox-grid-align"),
    entry("place-", "flexbox-grid-place"),
    entry("order-", "flexbox-grid-order"),
    // Spacing
    entry("m-", "spacing-margin"),
    entry("mx-", "spacing-margin"),
    entry("my-", "spacing-margin"),
    entry("mt-", "spacing-margin"),
    entry("mr-", "spacing-margin"),
    entry("mb-", "spacing-margin"),
    entry("ml-", "spacing-margin"),
    entry("p-", "spacing-padding"),
    entry("px-", "spacing-padding"),
    entry("py-", "spacing-padding"),
    entry("pt-", "spacing-padding"),
    entry("pr-", "spacing-padding"),
    entry("pb-", "spacing-padding"),
    entry("pl-", "spacing-padding"),
    entry("space-", "spacing-space"),
    // Sizing
    entry("w-", "sizing-width"),
    entry("min-w-", "sizing-width"),
    entry("max-w-", "sizing-width"),
    entry("h-", "sizing-height"),
    entry("min-h-", "sizing-height"),
    entry("max-h-", "sizing-height"),
    // Typography
    entry("font-", "typography-font"),
    entry("text-", "typography-text"),
    entry("tracking-", "typography-letter-spacing"),
    entry("leading-", "typography-line-height"),
    entry("list-", "typography-lists"),
    entry("placeholder-", "typography-placeholder"),
    // Backgrounds
    entry("bg-", "backgrounds"),
    // Borders
    entry("border", "borders"),
    entry("border-", "borders"),
    entry("rounded", "borders-border-radius"),
    entry("rounded-", "borders-border-radius"),
    // Effects
    entry("shadow", "effects-box-shadow"),
    entry("shadow-", "effects-box-shadow"),
    entry("opacity-", "effects-opacity"),
    entry("mix-blend-", "effects-mix-blend"),
    // unreachable, "bg-" matches first
    entry("bg-blend-", "effects-background-blend"),
    // Filters
    entry("filter", "filters"),
    entry("blur-", "filters"),
    entry("brightness-", "filters"),
    entry("contrast-", "filters"),
    entry("drop-shadow-", "filters"),
    entry("grayscale-", "filters"),
    entry("hue-rotate-", "filters"),
    entry("invert-", "filters"),
    entry("saturate-", "filters"),
    entry("sepia-", "filters"),
    // Tables
    entry("table-", "tables"),
    // Transitions & Animation
    entry("transition", "transitions-and-animation"),
    entry("transition-", "transitions-and-animation"),
    entry("duration-", "transitions-and-animation"),
    entry("ease-", "transitions-and-animation"),
    entry("delay-", "transitions-and-animation"),
    entry("animate-", "transitions-and-animation"),
    // Transforms
    entry("scale-", "transforms"),
    entry("rotate-", "transforms"),
    entry("translate-", "transforms"),
    entry("skew-", "transforms"),
    entry("transform", "transforms"),
    // Interactivity
    entry("accent-", "interactivity"),
    entry("appearance-", "interactivity"),
    entry("cursor-", "interactivity"),
    entry("outline-", "interactivity"),
    entry("pointer-events-", "interactivity"),
    entry("resize-", "interactivity"),
    entry("scroll-", "interactivity"),
    entry("snap-", "interactivity"),
    entry("touch-", "interactivity"),
    entry("select-", "interactivity"),
    entry("will-change-", "interactivity"),
    // SVG
    entry("fill-", "svg"),
    entry("stroke-", "svg"),
    // Accessibility
    entry("sr-", "accessibility"),
    // Plugins
    entry("aspect-", "aspect-ratio"),
    entry("line-clamp-", "line-clamp"),
];

const COMPACT_ENTRIES: &[PrefixEntry] = &[
    entry("p-", "padding"),
    entry("m-", "margin"),
    entry("w-", "width"),
    entry("h-", "height"),
    entry("text-", "typography"),
    entry("font-", "typography"),
    entry("bg-", "background"),
    entry("border-", "border"),
    entry("flex-", "flexbox"),
    entry("grid-", "grid"),
    entry("justify-", "flexbox"),
    entry("items-", "flexbox"),
    entry("space-", "spacing"),
    entry("rounded-", "border"),
    entry("shadow-", "effects"),
    entry("opacity-", "effects"),
    entry("z-", "layout"),
    entry("top-", "position"),
    entry("right-", "position"),
    entry("bottom-", "position"),
    entry("left-", "position"),
    entry("overflow-", "layout"),
    entry("container", "layout"),
    entry("transition-", "transitions"),
    entry("animate-", "animations"),
    entry("cursor-", "interactivity"),
    entry("focus:", "interactivity"),
    entry("hover:", "interactivity"),
    entry("active:", "interactivity"),
    entry("sm:", "responsive"),
    entry("md:", "responsive"),
    entry("lg:", "responsive"),
    entry("xl:", "responsive"),
    entry("2xl:", "responsive"),
];
