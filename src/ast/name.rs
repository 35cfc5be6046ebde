//! The GraphQL [Name](https://spec.graphql.org/October2021/#sec-Names)
//! grammar, shared by the parser and the schema builders.

pub(crate) fn is_name_start_byte(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphabetic()
}

pub(crate) fn is_name_continue_byte(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphanumeric()
}

/// Whether `value` matches the Name grammar: `[_A-Za-z][_A-Za-z0-9]*`.
pub fn is_valid_name(value: &str) -> bool {
    let mut bytes = value.bytes();
    match bytes.next() {
        Some(first) if is_name_start_byte(first) => bytes.all(is_name_continue_byte),
        _ => false,
    }
}
