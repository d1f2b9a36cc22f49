//! Field tag grammar.
//!
//! A tag is a comma-separated string, trimmed per segment:
//!
//! ```text
//! <LOOKUP_KEY>[,required][,noreport]
//! ```
//!
//! Segments are positional. The second segment only counts when it is the
//! literal `required`; the third only when it is the literal `noreport`.
//! Parsing never fails: an empty or malformed tag still yields a directive.

const INDEX_KEY: usize = 0;
const INDEX_REQUIRED: usize = 1;
const INDEX_NO_REPORT: usize = 2;

const REQUIRED: &str = "required";
const NO_REPORT: &str = "noreport";

/// The parsed form of one field's tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Directive {
    /// Environment variable name, uppercased.
    pub lookup_key: String,
    /// The variable must be present and non-empty.
    pub required: bool,
    /// Hide the field's value in reports. Binding ignores it.
    pub no_report: bool,
}

impl Directive {
    /// Parse a raw tag string.
    pub fn parse(tag: &str) -> Self {
        let segments = segments(tag);
        let flag = |index: usize, token: &str| segments.get(index).is_some_and(|s| *s == token);

        Directive {
            lookup_key: segments[INDEX_KEY].to_uppercase(),
            required: flag(INDEX_REQUIRED, REQUIRED),
            no_report: flag(INDEX_NO_REPORT, NO_REPORT),
        }
    }
}

/// Split `input` on `,` and trim each piece.
///
/// Always returns at least one segment; `""` yields `[""]`. The same split is
/// used for sequence values.
pub fn segments(input: &str) -> Vec<&str> {
    input.split(',').map(str::trim).collect()
}
