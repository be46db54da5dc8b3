use std::cmp::Ordering;

/// A value token classified once into its sort tier.
///
/// Tiers order as `Numeric < Fraction < Lexical`; inside a tier numbers
/// compare by value and words by [`locale_cmp`].
#[derive(Debug, Clone)]
pub enum ValueToken {
    /// Parses as a finite float and has no `/`, e.g. "4", "0.5", "-1".
    /// Only whole-token decimal syntax counts: "0x10" or "4px" stay lexical,
    /// since utility scales never produce such values.
    Numeric(f64),
    /// Exactly one `/` and not numeric; holds `numerator / denominator`.
    Fraction(f64),
    Lexical(String),
}

impl ValueToken {
    pub fn parse(token: &str) -> Self {
        if !token.contains('/') {
            if let Ok(value) = token.trim().parse::<f64>() {
                if value.is_finite() {
                    return ValueToken::Numeric(canonical(value));
                }
            }
        }

        if token.matches('/').count() == 1 {
            if let Some((numerator, denominator)) = token.split_once('/') {
                let quotient = number_or_nan(numerator) / number_or_nan(denominator);
                return ValueToken::Fraction(canonical(quotient));
            }
        }

        ValueToken::Lexical(token.to_string())
    }

    fn tier(&self) -> u8 {
        match self {
            ValueToken::Numeric(_) => 0,
            ValueToken::Fraction(_) => 1,
            ValueToken::Lexical(_) => 2,
        }
    }
}

/// Lenient numeric conversion: blank is zero, garbage is NaN.
fn number_or_nan(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Fold `-0.0` into `0.0` and every NaN into one positive NaN so that
/// `total_cmp` agrees with numeric equality.
fn canonical(value: f64) -> f64 {
    if value.is_nan() {
        f64::NAN.abs()
    } else {
        value + 0.0
    }
}

impl Ord for ValueToken {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (ValueToken::Numeric(a), ValueToken::Numeric(b))
            | (ValueToken::Fraction(a), ValueToken::Fraction(b)) => a.total_cmp(b),
            (ValueToken::Lexical(a), ValueToken::Lexical(b)) => locale_cmp(a, b),
            _ => self.tier().cmp(&other.tier()),
        }
    }
}

impl PartialOrd for ValueToken {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ValueToken {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ValueToken {}

/// Case-sensitive, locale-style string ordering.
///
/// Primary level ignores case and ranks punctuation < digits < letters;
/// ties go to the lowercase spelling first, then to plain code point order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    fn primary(ch: char) -> (u8, char) {
        let class = if ch.is_alphabetic() {
            2
        } else if ch.is_numeric() {
            1
        } else {
            0
        };
        (class, ch.to_lowercase().next().unwrap_or(ch))
    }

    a.chars()
        .map(primary)
        .cmp(b.chars().map(primary))
        .then_with(|| a.chars().map(char::is_uppercase).cmp(b.chars().map(char::is_uppercase)))
        .then_with(|| a.cmp(b))
}

pub fn compare_values(a: &str, b: &str) -> Ordering {
    ValueToken::parse(a).cmp(&ValueToken::parse(b))
}

/// Stable sort of value tokens. Each token is parsed once.
pub fn sort_values<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut keyed: Vec<(ValueToken, String)> = values
        .into_iter()
        .map(|value| (ValueToken::parse(&value), value))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, value)| value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sorted(values: &[&str]) -> Vec<String> {
        sort_values(values.iter().map(|v| v.to_string()))
    }

    #[test]
    fn numbers_then_fractions_then_words() {
        assert_eq!(
            sorted(&["full", "1/2", "4", "auto", "2", "1/4"]),
            vec!["2", "4", "1/4", "1/2", "auto", "full"]
        );
    }

    #[test]
    fn sorting_is_idempotent() {
        let once = sorted(&["px", "0.5", "96", "3/4", "screen", "10", "1.5", "2/3"]);
        let twice = sort_values(once.clone());
        assert_eq!(once, twice);
        assert_eq!(
            once,
            vec!["0.5", "1.5", "10", "96", "2/3", "3/4", "px", "screen"]
        );
    }

    #[test]
    fn numbers_compare_by_value_not_text() {
        assert_eq!(compare_values("10", "9"), Ordering::Greater);
        assert_eq!(compare_values("-1", "0"), Ordering::Less);
        assert_eq!(compare_values("0", "-0"), Ordering::Equal);
        assert_eq!(compare_values("1.0", "1"), Ordering::Equal);
    }

    #[test]
    fn equal_fractions_keep_input_order() {
        assert_eq!(sorted(&["2/4", "1/2", "3/6"]), vec!["2/4", "1/2", "3/6"]);
    }

    #[test]
    fn malformed_fractions_still_order_consistently() {
        // 1/0 is +inf, a/b is NaN; both stay in the fraction tier
        let values = sorted(&["auto", "a/b", "1/0", "1/2", "3"]);
        assert_eq!(values, vec!["3", "1/2", "1/0", "a/b", "auto"]);
        assert_eq!(compare_values("a/b", "c/d"), Ordering::Equal);
    }

    #[test]
    fn two_slashes_is_lexical() {
        assert!(matches!(ValueToken::parse("1/2/3"), ValueToken::Lexical(_)));
        assert_eq!(compare_values("1/2/3", "1/2"), Ordering::Greater);
    }

    #[test]
    fn non_finite_words_are_lexical() {
        assert!(matches!(ValueToken::parse("inf"), ValueToken::Lexical(_)));
        assert!(matches!(ValueToken::parse("NaN"), ValueToken::Lexical(_)));
        assert!(matches!(ValueToken::parse(""), ValueToken::Lexical(_)));
    }

    #[test]
    fn only_decimal_tokens_are_numeric() {
        assert!(matches!(ValueToken::parse("0x10"), ValueToken::Lexical(_)));
        assert!(matches!(ValueToken::parse("4px"), ValueToken::Lexical(_)));
        assert_eq!(sorted(&["0x10", "2", "1/2"]), vec!["2", "1/2", "0x10"]);
    }

    #[test]
    fn words_order_like_a_dictionary() {
        assert_eq!(
            sorted(&["screen", "Full", "auto", "full", "min", "[10px]"]),
            vec!["[10px]", "auto", "full", "Full", "min", "screen"]
        );
    }

    #[test]
    fn comparator_is_antisymmetric() {
        let tokens = ["2", "0.5", "1/3", "2/3", "auto", "Auto", "x/y", "1/0", ""];
        for a in tokens {
            for b in tokens {
                assert_eq!(compare_values(a, b), compare_values(b, a).reverse());
            }
        }
    }
}
