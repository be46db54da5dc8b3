use crate::error::{ForcewindError, Result};
use crate::style::owned_css::{ClassRule, OwnedDeclaration, OwnedStylesheet};
use cssparser::{Delimiter, ParseError as CssParseError, Parser, ParserInput, Token};
use lightningcss::error::{Error as LcssError, ParserError};
use lightningcss::printer::PrinterOptions;
use lightningcss::rules::{style::StyleRule, CssRule};
use lightningcss::stylesheet::{ParserOptions, StyleSheet as LightningStyleSheet};
use lightningcss::traits::ToCss;
use log::{debug, warn};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Where the generated utility CSS comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` means stdin, anything else is a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }

    fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

/// Read the whole generated stylesheet and turn it into owned class rules.
pub fn read_class_rules(input: &InputSource) -> Result<OwnedStylesheet> {
    let css_text = match input {
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map(|_| buf)
        }
        InputSource::File(path) => fs::read_to_string(path),
    }
    .map_err(|source| ForcewindError::ReadInput {
        origin: input.describe(),
        source,
    })?;

    debug!("Read {} bytes of CSS from {}", css_text.len(), input.describe());
    parse_class_rules(&css_text)
}

/// Parse a raw CSS string and keep only its class rules.
///
/// LightningCSS validates the stylesheet; a syntax error aborts the run.
/// Selectors and declaration values are then read from the source text
/// itself, so `0.125rem` stays `0.125rem` and declarations keep their order.
pub fn parse_class_rules(css_text: &str) -> Result<OwnedStylesheet> {
    let parser_opts = ParserOptions::default();

    let sheet = LightningStyleSheet::parse(css_text, parser_opts)
        .map_err(|e: LcssError<ParserError<'_>>| ForcewindError::Parse(e.to_string()))?;
    let expected = count_class_rules(&sheet.rules.0);

    let mut input = ParserInput::new(css_text);
    let mut parser = Parser::new(&mut input);
    let mut owned_rules = Vec::new();
    collect_class_rules(&mut parser, &mut owned_rules);

    if owned_rules.len() != expected {
        warn!(
            "LightningCSS found {} class rules but {} were read from the source",
            expected,
            owned_rules.len()
        );
    }

    debug!("Collected {} class rules", owned_rules.len());
    Ok(OwnedStylesheet { rules: owned_rules })
}

/// Count class rules in the parsed tree, flattening the same at-rules as
/// [`collect_class_rules`].
fn count_class_rules(rules: &[CssRule<'_>]) -> usize {
    rules
        .iter()
        .map(|rule| match rule {
            CssRule::Style(style_rule) => usize::from(is_class_rule(style_rule)),
            CssRule::Media(media_rule) => count_class_rules(&media_rule.rules.0),
            CssRule::Supports(supports_rule) => count_class_rules(&supports_rule.rules.0),
            CssRule::LayerBlock(layer_rule) => count_class_rules(&layer_rule.rules.0),
            _ => 0,
        })
        .sum()
}

fn is_class_rule(style_rule: &StyleRule<'_>) -> bool {
    style_rule
        .selectors
        .0
        .first()
        .and_then(|selector| selector.to_css_string(PrinterOptions::default()).ok())
        .is_some_and(|text| text.starts_with('.'))
}

/// Walk rules in source order. Variant utilities live inside `@media`,
/// `@supports` and `@layer` blocks, so those are flattened.
fn collect_class_rules(parser: &mut Parser<'_, '_>, out: &mut Vec<ClassRule>) {
    loop {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            return;
        }

        let start = parser.position();
        let at_rule = parser
            .parse_until_before(Delimiter::CurlyBracketBlock | Delimiter::Semicolon, |p| {
                let name = match p.next() {
                    Ok(Token::AtKeyword(name)) => Some(name.to_ascii_lowercase()),
                    _ => None,
                };
                while p.next().is_ok() {}
                Ok::<_, CssParseError<'_, ()>>(name)
            })
            .ok()
            .flatten();
        let prelude = parser.slice_from(start).trim();

        match parser.next() {
            Ok(Token::CurlyBracketBlock) => {}
            // `;` closes a statement at-rule such as `@import` or `@layer a, b`
            Ok(_) => continue,
            Err(_) => return,
        }

        match at_rule.as_deref() {
            Some("media" | "supports" | "layer") => {
                let _ = parser.parse_nested_block(|block| {
                    collect_class_rules(block, out);
                    Ok::<_, CssParseError<'_, ()>>(())
                });
            }
            None if prelude.starts_with('.') => {
                let declarations = parser
                    .parse_nested_block(|block| {
                        Ok::<_, CssParseError<'_, ()>>(read_declarations(block))
                    })
                    .unwrap_or_default();
                if let Some(owned) = ClassRule::from_selector(prelude, declarations) {
                    out.push(owned);
                }
            }
            // @font-face, @keyframes, @property and element rules carry no utility classes
            _ => skip_block(parser),
        }
    }
}

/// Read every `property: value` of a declaration block, verbatim and in
/// source order. A trailing `!important` is not part of the value.
fn read_declarations(block: &mut Parser<'_, '_>) -> Vec<OwnedDeclaration> {
    let mut declarations = Vec::new();

    loop {
        block.skip_whitespace();
        if block.is_exhausted() {
            break;
        }

        let start = block.position();
        let _ = block.parse_until_before(Delimiter::Semicolon, |p| {
            while p.next().is_ok() {}
            Ok::<_, CssParseError<'_, ()>>(())
        });
        let raw = block.slice_from(start);
        // the `;` itself, or nothing at the end of the block
        let _ = block.next();

        match split_declaration(raw) {
            Some(declaration) => declarations.push(declaration),
            None => debug!("Skipping malformed declaration `{}`", raw.trim()),
        }
    }

    declarations
}

fn split_declaration(raw: &str) -> Option<OwnedDeclaration> {
    let (property, value) = raw.split_once(':')?;
    let property = property.trim();
    let is_ident = !property.is_empty()
        && property
            .chars()
            .all(|ch| ch.is_alphanumeric() || ch == '-' || ch == '_');
    if !is_ident {
        return None;
    }
    Some(OwnedDeclaration::new(property, strip_important(value.trim())))
}

fn strip_important(value: &str) -> &str {
    if let Some(bang) = value.rfind('!') {
        if value[bang + 1..].trim().eq_ignore_ascii_case("important") {
            return value[..bang].trim_end();
        }
    }
    value
}

fn skip_block(parser: &mut Parser<'_, '_>) {
    let _ = parser.parse_nested_block(|block| {
        while block.next().is_ok() {}
        Ok::<_, CssParseError<'_, ()>>(())
    });
}
