//! Document-level rendering options.
//!
//! An [`OptionList`] behaves like an
//! [`AttributeList`](crate::attribute::AttributeList): batches are linked in
//! front of the existing options and lookups return the first match.
//! [`MscOption`] also carries the coercions the layout stage relies on.

use std::{fmt, str::FromStr};

use crate::error::OptionError;

/// The kind of an [`MscOption`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptType {
    /// Horizontal scale factor applied to the chart width.
    HScale,
    /// Absolute chart width.
    Width,
    /// Vertical drop of an arc across its span.
    ArcGradient,
    /// Whether arc labels are word-wrapped.
    WordWrapArcs,
}

impl OptType {
    /// Every option kind, in declaration order.
    pub const ALL: [OptType; 4] = [
        Self::HScale,
        Self::Width,
        Self::ArcGradient,
        Self::WordWrapArcs,
    ];

    /// Returns the keyword for this option kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::HScale => "hscale",
            Self::Width => "width",
            Self::ArcGradient => "arcgradient",
            Self::WordWrapArcs => "wordwraparcs",
        }
    }
}

impl fmt::Display for OptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for OptType {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or("Unknown option type")
    }
}

/// A single document option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MscOption {
    kind: OptType,
    value: String,
}

impl MscOption {
    /// Create an option, taking ownership of its value.
    pub fn new(kind: OptType, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Get the option kind.
    pub fn kind(&self) -> OptType {
        self.kind
    }

    /// Borrow the raw option value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Parse the value as a float.
    ///
    /// Leading whitespace is skipped and the longest numeric prefix is used,
    /// so `"1.5cm"` yields `1.5`. Hexadecimal (`"0x10"`), `inf`, `infinity`
    /// and `nan` prefixes are recognised as well. A value with no numeric
    /// prefix yields `0.0`.
    pub fn as_float(&self) -> f32 {
        parse_float_prefix(&self.value)
    }

    /// Parse the value as a boolean.
    ///
    /// `true`, `yes`, `on` and `1` are true; `false`, `no`, `off` and `0` are
    /// false. Matching ignores ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::UnrecognisedBoolean`] for any other value.
    pub fn as_bool(&self) -> Result<bool, OptionError> {
        const TRUTHY: [&str; 4] = ["true", "yes", "on", "1"];
        const FALSY: [&str; 4] = ["false", "no", "off", "0"];

        let v = self.value.as_str();
        if TRUTHY.iter().any(|t| t.eq_ignore_ascii_case(v)) {
            Ok(true)
        } else if FALSY.iter().any(|t| t.eq_ignore_ascii_case(v)) {
            Ok(false)
        } else {
            Err(OptionError::UnrecognisedBoolean {
                option: self.kind,
                value: self.value.clone(),
            })
        }
    }
}

impl fmt::Display for MscOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.kind, self.value)
    }
}

/// Parse the longest leading float literal of `s`, or `0.0` if there is none.
///
/// Accepts decimal literals, `0x` hexadecimal literals with an optional `p`
/// binary exponent, and the case-insensitive words `inf`, `infinity` and
/// `nan`, each with an optional sign.
fn parse_float_prefix(s: &str) -> f32 {
    let s = s.trim_start();
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = parse_special_prefix(unsigned)
        .or_else(|| parse_hex_prefix(unsigned))
        .unwrap_or_else(|| parse_decimal_prefix(unsigned));
    if negative { -magnitude } else { magnitude }
}

fn parse_special_prefix(s: &str) -> Option<f32> {
    let starts_with = |word: &str| {
        s.get(..word.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(word))
    };
    if starts_with("inf") {
        Some(f32::INFINITY)
    } else if starts_with("nan") {
        Some(f32::NAN)
    } else {
        None
    }
}

fn parse_hex_prefix(s: &str) -> Option<f32> {
    let bytes = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))?.as_bytes();
    let hex_digit = |at: usize| bytes.get(at).and_then(|b| char::from(*b).to_digit(16));

    let mut mantissa = 0.0_f64;
    let mut exponent = 0_i32;
    let mut digits = 0;
    let mut at = 0;
    while let Some(d) = hex_digit(at) {
        mantissa = mantissa * 16.0 + f64::from(d);
        digits += 1;
        at += 1;
    }
    if bytes.get(at) == Some(&b'.') {
        at += 1;
        while let Some(d) = hex_digit(at) {
            mantissa = mantissa * 16.0 + f64::from(d);
            exponent = exponent.saturating_sub(4);
            digits += 1;
            at += 1;
        }
    }

    // A bare "0x" reads as the decimal zero before it
    if digits == 0 {
        return None;
    }
    if mantissa == 0.0 {
        return Some(0.0);
    }

    if matches!(bytes.get(at), Some(b'p' | b'P')) {
        let mut exp_at = at + 1;
        let exp_negative = bytes.get(exp_at) == Some(&b'-');
        if matches!(bytes.get(exp_at), Some(b'+' | b'-')) {
            exp_at += 1;
        }
        let mut binary_exp = None::<i32>;
        while let Some(d) = bytes.get(exp_at).filter(|b| b.is_ascii_digit()) {
            let value = binary_exp.unwrap_or(0);
            binary_exp = Some(value.saturating_mul(10).saturating_add(i32::from(d - b'0')));
            exp_at += 1;
        }
        // A `p` without digits is not part of the number
        if let Some(binary_exp) = binary_exp {
            let signed = if exp_negative { -binary_exp } else { binary_exp };
            exponent = exponent.saturating_add(signed);
        }
    }

    Some((mantissa * 2.0_f64.powi(exponent)) as f32)
}

fn parse_decimal_prefix(s: &str) -> f32 {
    let bytes = s.as_bytes();
    let digits_from = |mut at: usize| {
        while bytes.get(at).is_some_and(u8::is_ascii_digit) {
            at += 1;
        }
        at
    };

    let mut end = digits_from(0);
    let mut mantissa_digits = end;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let frac_end = digits_from(frac_start);
        mantissa_digits += frac_end - frac_start;
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        // An exponent marker without digits is not part of the number
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

/// An ordered sequence of [`MscOption`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionList {
    options: Vec<MscOption>,
}

impl OptionList {
    /// Create an empty option list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single option at the back of the list.
    pub fn push(&mut self, option: MscOption) {
        self.options.push(option);
    }

    /// Link a batch of options in front of the existing ones, keeping the
    /// batch's internal order.
    pub fn link(&mut self, batch: impl Into<OptionList>) {
        let batch = batch.into();
        self.options.splice(0..0, batch.options);
    }

    /// Find the first option of the given kind.
    pub fn find(&self, kind: OptType) -> Option<&MscOption> {
        self.options.iter().find(|opt| opt.kind == kind)
    }

    /// Iterate over the options in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, MscOption> {
        self.options.iter()
    }

    /// Number of options in the list.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` if the list holds no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl From<Vec<MscOption>> for OptionList {
    fn from(options: Vec<MscOption>) -> Self {
        Self { options }
    }
}

impl From<MscOption> for OptionList {
    fn from(option: MscOption) -> Self {
        Self {
            options: vec![option],
        }
    }
}

impl FromIterator<MscOption> for OptionList {
    fn from_iter<I: IntoIterator<Item = MscOption>>(iter: I) -> Self {
        Self {
            options: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a OptionList {
    type Item = &'a MscOption;
    type IntoIter = std::slice::Iter<'a, MscOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for OptionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for opt in &self.options {
            writeln!(f, "{opt}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    fn float_of(value: &str) -> f32 {
        MscOption::new(OptType::HScale, value).as_float()
    }

    fn bool_of(value: &str) -> Result<bool, OptionError> {
        MscOption::new(OptType::WordWrapArcs, value).as_bool()
    }

    #[test]
    fn test_as_float_plain_values() {
        assert!(approx_eq!(f32, float_of("2.5"), 2.5));
        assert!(approx_eq!(f32, float_of("-1"), -1.0));
        assert!(approx_eq!(f32, float_of("  .75"), 0.75));
        assert!(approx_eq!(f32, float_of("3."), 3.0));
        assert!(approx_eq!(f32, float_of("1e2"), 100.0));
    }

    #[test]
    fn test_as_float_uses_numeric_prefix() {
        assert!(approx_eq!(f32, float_of("1.5cm"), 1.5));
        assert!(approx_eq!(f32, float_of("2e"), 2.0));
        assert!(approx_eq!(f32, float_of("4E+x"), 4.0));
    }

    #[test]
    fn test_as_float_non_numeric_is_zero() {
        assert_eq!(float_of("wide"), 0.0);
        assert_eq!(float_of(""), 0.0);
        assert_eq!(float_of("-"), 0.0);
        assert_eq!(float_of("."), 0.0);
    }

    #[test]
    fn test_as_float_special_values() {
        assert_eq!(float_of("inf"), f32::INFINITY);
        assert_eq!(float_of("Infinity"), f32::INFINITY);
        assert_eq!(float_of(" -INF"), f32::NEG_INFINITY);
        assert_eq!(float_of("infinite"), f32::INFINITY);
        assert!(float_of("nan").is_nan());
        assert!(float_of("NaNny").is_nan());
    }

    #[test]
    fn test_as_float_hex_values() {
        assert!(approx_eq!(f32, float_of("0x10"), 16.0));
        assert!(approx_eq!(f32, float_of("-0XfF"), -255.0));
        assert!(approx_eq!(f32, float_of("0x1.8p1"), 3.0));
        assert!(approx_eq!(f32, float_of("0x1p-2"), 0.25));
        assert!(approx_eq!(f32, float_of("0x4pt"), 4.0));
        assert_eq!(float_of("0x"), 0.0);
        assert_eq!(float_of("0xg"), 0.0);
    }

    #[test]
    fn test_as_bool_truthy() {
        for value in ["true", "TRUE", "yes", "On", "1"] {
            assert_eq!(bool_of(value), Ok(true), "value {value:?}");
        }
    }

    #[test]
    fn test_as_bool_falsy() {
        for value in ["false", "No", "OFF", "0"] {
            assert_eq!(bool_of(value), Ok(false), "value {value:?}");
        }
    }

    #[test]
    fn test_as_bool_unrecognised() {
        assert_eq!(
            bool_of("maybe"),
            Err(OptionError::UnrecognisedBoolean {
                option: OptType::WordWrapArcs,
                value: "maybe".to_string(),
            })
        );
        assert!(bool_of(" true").is_err());
    }

    #[test]
    fn test_link_and_find() {
        let mut list = OptionList::new();
        list.link(MscOption::new(OptType::HScale, "1"));
        list.link(vec![
            MscOption::new(OptType::Width, "600"),
            MscOption::new(OptType::HScale, "2"),
        ]);

        assert_eq!(list.len(), 3);
        assert_eq!(list.find(OptType::HScale).map(MscOption::value), Some("2"));
        assert_eq!(list.find(OptType::ArcGradient), None);
        assert_eq!(list.to_string(), "width=600\nhscale=2\nhscale=1\n");
    }

    #[test]
    fn test_opt_type_from_str() {
        for kind in OptType::ALL {
            assert_eq!(kind.name().parse::<OptType>(), Ok(kind));
        }
        assert_eq!("HSCALE".parse::<OptType>(), Ok(OptType::HScale));
        assert!("height".parse::<OptType>().is_err());
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn finite_float_strategy() -> impl Strategy<Value = f32> {
        -1.0e6f32..1.0e6
    }

    fn suffix_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z%]{0,4}"
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Formatting a float and appending a unit suffix parses back to the same value.
    fn check_float_prefix_ignores_suffix(value: f32, suffix: &str) -> Result<(), TestCaseError> {
        // A leading e/E would continue the exponent and x/X would start a hex literal
        prop_assume!(!suffix.starts_with(['e', 'E', 'x', 'X']));
        let text = format!("{value}{suffix}");
        let parsed = MscOption::new(OptType::Width, text.clone()).as_float();
        prop_assert!(
            approx_eq!(f32, parsed, value, ulps = 2),
            "parsed {parsed} from {text:?}, expected {value}"
        );
        Ok(())
    }

    /// Boolean coercion never panics and only accepts the eight keywords.
    fn check_bool_accepts_only_keywords(value: &str) -> Result<(), TestCaseError> {
        let keywords = ["true", "yes", "on", "1", "false", "no", "off", "0"];
        let recognised = keywords.iter().any(|k| k.eq_ignore_ascii_case(value));
        let result = MscOption::new(OptType::WordWrapArcs, value).as_bool();
        prop_assert_eq!(result.is_ok(), recognised);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn float_prefix_ignores_suffix(value in finite_float_strategy(), suffix in suffix_strategy()) {
            check_float_prefix_ignores_suffix(value, &suffix)?;
        }

        #[test]
        fn bool_accepts_only_keywords(value in "[a-zA-Z0-9]{0,6}") {
            check_bool_accepts_only_keywords(&value)?;
        }
    }
}
