//! Parser for enumerator lists such as `"Red, Green = 5, Blue"`.
//!
//! The text is split on commas, each entry is either a bare name or
//! `name = literal`. Entries without a literal take the running counter,
//! which starts at 0 and continues from the last assigned value.

use std::collections::HashMap;

use crate::error::ParseError;

/// Value → canonical name.
pub type NameTable = HashMap<i32, String>;

/// Canonical name → value.
pub type ValueTable = HashMap<String, i32>;

/// A single parsed enumerator.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnumEntry {
    pub name: String,
    pub value: i32,
}

/// Iterate over the entries of an enumerator list in declaration order.
pub fn entries(text: &str) -> Entries<'_> {
    Entries {
        rest: text,
        next_value: Some(0),
    }
}

/// Build the value → name table. Later duplicate values overwrite earlier
/// ones.
pub fn build_name_table(text: &str) -> Result<NameTable, ParseError> {
    let mut table = NameTable::new();
    for entry in entries(text) {
        let entry = entry?;
        table.insert(entry.value, entry.name);
    }
    Ok(table)
}

/// Build the list of declared values, converted to `T`.
pub fn build_value_list<T>(text: &str) -> Result<Vec<T>, ParseError>
where
    T: TryFrom<i32>,
{
    entries(text)
        .map(|entry| {
            let value = entry?.value;
            T::try_from(value).map_err(|_| ParseError::ValueOutOfRange { value })
        })
        .collect()
}

/// Build the name → value table. Later duplicate names overwrite earlier
/// ones.
pub fn build_value_table(text: &str) -> Result<ValueTable, ParseError> {
    let mut table = ValueTable::new();
    for entry in entries(text) {
        let entry = entry?;
        table.insert(entry.name, entry.value);
    }
    Ok(table)
}

/// Iterator returned by [`entries`].
///
/// Stops after the first error.
#[derive(Clone, Debug)]
pub struct Entries<'a> {
    rest: &'a str,
    /// `None` once the counter has moved past `i32::MAX`.
    next_value: Option<i32>,
}

impl<'a> Entries<'a> {
    fn next_segment(&mut self) -> &'a str {
        match self.rest.find(',') {
            Some(pos) => {
                let segment = &self.rest[..pos];
                self.rest = &self.rest[pos + 1..];
                segment
            }
            None => std::mem::take(&mut self.rest),
        }
    }

    fn fail(&mut self, err: ParseError) -> Option<Result<EnumEntry, ParseError>> {
        self.rest = "";
        Some(Err(err))
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = Result<EnumEntry, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let segment = trim_blank(self.next_segment());

        let (name, value) = match segment.find('=') {
            Some(pos) => {
                let name = trim_blank(&segment[..pos]);
                let literal = &segment[pos + 1..];
                match parse_integer_literal(literal) {
                    Some(value) => (name, value),
                    None => {
                        return self.fail(ParseError::MalformedIntegerLiteral {
                            entry: name.to_string(),
                            literal: literal.trim().to_string(),
                        });
                    }
                }
            }
            None => match self.next_value {
                Some(value) => (segment, value),
                None => {
                    return self.fail(ParseError::CounterOverflow {
                        entry: segment.to_string(),
                    });
                }
            },
        };

        self.next_value = value.checked_add(1);
        tracing::trace!(entry = name, value, "parsed enum entry");

        Some(Ok(EnumEntry {
            name: name.to_string(),
            value,
        }))
    }
}

/// Trim spaces and tabs, but no other whitespace.
fn trim_blank(s: &str) -> &str {
    s.trim_matches(|c: char| c == ' ' || c == '\t')
}

const INTEGER_SUFFIXES: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

/// Parse a signed integer literal.
///
/// Accepts decimal and `0x`/`0o`/`0b` literals with `_` separators and an
/// optional integer type suffix. Whitespace may follow the sign, since
/// stringified tokens render `-3` as `- 3`.
fn parse_integer_literal(literal: &str) -> Option<i32> {
    let s = literal.trim();
    let (negative, s) = match *s.as_bytes().first()? {
        b'-' => (true, s[1..].trim_start()),
        b'+' => (false, s[1..].trim_start()),
        _ => (false, s),
    };

    let s = INTEGER_SUFFIXES
        .iter()
        .find_map(|suffix| s.strip_suffix(*suffix))
        .unwrap_or(s);

    let (radix, digits) = if let Some(d) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (16, d)
    } else if let Some(d) = s.strip_prefix("0o") {
        (8, d)
    } else if let Some(d) = s.strip_prefix("0b") {
        (2, d)
    } else {
        (10, s)
    };

    // Without a prefix, `_1` is an identifier, not a literal.
    if radix == 10 && digits.starts_with('_') {
        return None;
    }

    let digits: String = digits.chars().filter(|c| *c != '_').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let magnitude = i64::try_from(u64::from_str_radix(&digits, radix).ok()?).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}
