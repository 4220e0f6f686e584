use crate::{
    error::{LookupError, ParseError},
    parse::{entries, EnumEntry, NameTable, ValueTable},
};

/// The lookup tables derived from one enumerator list.
///
/// Built in a single pass and never modified afterwards.
#[derive(Clone, Debug)]
pub struct EnumDescriptor {
    declaration: String,
    entries: Vec<EnumEntry>,
    names: NameTable,
    values: ValueTable,
    list: Vec<i32>,
}

impl EnumDescriptor {
    pub fn parse(declaration: &str) -> Result<Self, ParseError> {
        let mut names = NameTable::new();
        let mut values = ValueTable::new();
        let mut list = Vec::new();
        let mut items = Vec::new();

        for entry in entries(declaration) {
            let entry = entry?;

            if let Some(previous) = names.insert(entry.value, entry.name.clone()) {
                tracing::warn!(
                    value = entry.value,
                    previous = %previous,
                    enumerator = %entry.name,
                    "duplicate enum value, keeping the later name"
                );
            }
            if let Some(previous) = values.insert(entry.name.clone(), entry.value) {
                tracing::warn!(
                    enumerator = %entry.name,
                    previous,
                    value = entry.value,
                    "duplicate enum name, keeping the later value"
                );
            }
            list.push(entry.value);
            items.push(entry);
        }

        Ok(Self {
            declaration: declaration.to_string(),
            entries: items,
            names,
            values,
            list,
        })
    }

    /// The text the tables were built from.
    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    /// All entries in declaration order, duplicates included.
    pub fn entries(&self) -> &[EnumEntry] {
        &self.entries
    }

    pub fn names(&self) -> &NameTable {
        &self.names
    }

    pub fn values(&self) -> &ValueTable {
        &self.values
    }

    /// Declared values in declaration order.
    pub fn list(&self) -> &[i32] {
        &self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Resolve a value to its canonical name.
    pub fn name_of(&self, value: i32) -> Result<&str, LookupError> {
        self.names
            .get(&value)
            .map(String::as_str)
            .ok_or(LookupError::ValueNotFound(value))
    }

    /// Resolve a canonical name to its value.
    pub fn value_of(&self, name: &str) -> Result<i32, LookupError> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| LookupError::NameNotFound(name.to_string()))
    }

    pub fn contains_value(&self, value: i32) -> bool {
        self.names.contains_key(&value)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_tables() {
        let d = EnumDescriptor::parse("A, B = 5, C").unwrap();
        assert_eq!(d.len(), 3);
        assert_eq!(d.list(), &[0, 5, 6]);
        assert_eq!(d.value_of("A"), Ok(0));
        assert_eq!(d.value_of("B"), Ok(5));
        assert_eq!(d.value_of("C"), Ok(6));
        assert_eq!(d.name_of(6), Ok("C"));
        assert_eq!(d.declaration(), "A, B = 5, C");
    }

    #[test]
    fn test_descriptor_lookup_failures() {
        let d = EnumDescriptor::parse("A, B").unwrap();
        assert_eq!(
            d.value_of("Z"),
            Err(LookupError::NameNotFound("Z".to_string()))
        );
        assert_eq!(d.name_of(7), Err(LookupError::ValueNotFound(7)));
        assert!(!d.contains_name("Z"));
        assert!(d.contains_value(1));
    }

    #[test]
    fn test_descriptor_round_trip() {
        let d = EnumDescriptor::parse("A = -3, B, C = 10, D").unwrap();
        for value in d.list() {
            let name = d.name_of(*value).unwrap();
            assert_eq!(d.value_of(name), Ok(*value));
        }
    }

    #[test]
    fn test_descriptor_overwritten_value() {
        let d = EnumDescriptor::parse("A = 1, B = 1").unwrap();
        assert_eq!(d.entries().len(), 2);
        assert_eq!(d.list(), &[1, 1]);
        assert_eq!(d.name_of(1), Ok("B"));
        // "A" still resolves, but not back to itself.
        assert_eq!(d.value_of("A"), Ok(1));
    }

    #[test]
    fn test_descriptor_empty() {
        let d = EnumDescriptor::parse("").unwrap();
        assert!(d.is_empty());
        assert!(d.names().is_empty());
        assert!(d.values().is_empty());
    }

    #[test]
    fn test_descriptor_malformed() {
        assert!(matches!(
            EnumDescriptor::parse("A = x"),
            Err(ParseError::MalformedIntegerLiteral { .. })
        ));
    }
}
