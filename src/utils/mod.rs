mod string;

pub use string::{decode_character_reference, unescape_js_string, unquote_string};
