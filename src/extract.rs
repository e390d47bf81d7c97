//! Recovers enumerator spellings from the text the compiler renders for them.
//!
//! `reflect_enum!` registers every enumerator with `stringify!(Type::NAME)`. The
//! extractor trims that rendering down to its trailing identifier. A rendering that
//! ends in an integer literal (an unnamed value) yields nothing.

use unicode_xid::UnicodeXID;

cfgenius::define! {
    has_names = cfg(feature = "names");
}

/// Length of the text that follows the enumerator in a registered signature.
pub const SIGNATURE_SUFFIX: usize = 0;

// === Enumerator === //

/// One declared enumerator, in declaration order.
#[derive(Debug, Copy, Clone)]
pub struct Enumerator<E> {
    pub value: E,
    pub integer: i128,
    pub signature: &'static str,
}

impl<E> Enumerator<E> {
    pub const fn new(value: E, integer: i128, signature: &'static str) -> Self {
        Self {
            value,
            integer,
            signature,
        }
    }
}

// === Extraction === //

const fn is_name_byte(byte: u8) -> bool {
    // Rendered paths only contain non-ASCII bytes inside identifiers.
    byte.is_ascii_alphanumeric() || byte == b'_' || byte >= 0x80
}

/// Strips `suffix` bytes from `signature` and returns the identifier that ends the
/// remaining text, or `None` if that text ends in something other than an identifier.
pub const fn trailing_identifier(signature: &str, suffix: usize) -> Option<&str> {
    let bytes = signature.as_bytes();
    if bytes.len() < suffix {
        return None;
    }

    let end = bytes.len() - suffix;
    let mut start = end;
    while start > 0 && is_name_byte(bytes[start - 1]) {
        start -= 1;
    }

    // An integer literal, not a name.
    if start == end || bytes[start].is_ascii_digit() {
        return None;
    }

    let (_, rest) = bytes.split_at(start);
    let (name, _) = rest.split_at(end - start);
    match std::str::from_utf8(name) {
        Ok(name) => Some(name),
        Err(_) => None,
    }
}

cfgenius::cond! {
    if macro(has_names) {
        pub const fn name_from_signature(signature: &'static str) -> Option<&'static str> {
            trailing_identifier(signature, SIGNATURE_SUFFIX)
        }
    } else {
        pub const fn name_from_signature(_signature: &'static str) -> Option<&'static str> {
            None
        }
    }
}

pub const fn extract<E>(enumerator: &Enumerator<E>) -> Option<&'static str> {
    name_from_signature(enumerator.signature)
}

// === Identifiers === //

pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_xid_start() => {
            text != "_" && chars.all(UnicodeXID::is_xid_continue)
        }
        _ => false,
    }
}

/// Unqualified name of `T`, e.g. `Color` for `my_crate::colors::Color`.
pub fn type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    trailing_identifier(full, 0).unwrap_or(full)
}
