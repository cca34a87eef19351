use std::iter::Peekable;
use std::str::Chars;

pub fn unquote_string(s: &str) -> String {
    let s = s.trim();
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"'))
            || (s.starts_with('\'') && s.ends_with('\''))
            || (s.starts_with('`') && s.ends_with('`')))
    {
        s[1..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}

/// Unquote a JavaScript string or template literal and decode its
/// backslash escapes, including `\xHH`, `\uHHHH` and `\u{H+}`. Line
/// continuations are dropped and unknown escapes keep the escaped character.
pub fn unescape_js_string(s: &str) -> String {
    let inner = unquote_string(s);
    let mut out = String::with_capacity(inner.len());
    // UTF-16 units from `\uHHHH` escapes, joined so surrogate pairs decode
    let mut units: Vec<u16> = Vec::new();
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            flush_utf16(&mut units, &mut out);
            out.push(c);
            continue;
        }

        let escaped = chars.next();
        if escaped == Some('u') {
            match unicode_escape(&mut chars) {
                Ok(code) if code <= 0xFFFF => units.push(code as u16),
                Ok(code) => {
                    flush_utf16(&mut units, &mut out);
                    out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
                }
                Err(raw) => {
                    flush_utf16(&mut units, &mut out);
                    out.push('u');
                    out.push_str(&raw);
                }
            }
            continue;
        }

        flush_utf16(&mut units, &mut out);
        match escaped {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('v') => out.push('\u{b}'),
            Some('0') => out.push('\0'),
            Some('x') => {
                let digits = take_hex(&mut chars, 2);
                let code = u32::from_str_radix(&digits, 16).ok().filter(|_| digits.len() == 2);
                match code.and_then(char::from_u32) {
                    Some(c) => out.push(c),
                    None => {
                        out.push('x');
                        out.push_str(&digits);
                    }
                }
            }
            // line continuation
            Some('\r') => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            Some('\n' | '\u{2028}' | '\u{2029}') => {}
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    flush_utf16(&mut units, &mut out);
    out
}

/// Code point of a `\u` escape, read after the `u`: four hex digits or a
/// braced run of one to six. On malformed input the consumed text is
/// returned so it can be kept as written.
fn unicode_escape(chars: &mut Peekable<Chars<'_>>) -> Result<u32, String> {
    if chars.peek() == Some(&'{') {
        chars.next();
        let digits = take_hex(chars, 6);
        if digits.is_empty() || chars.peek() != Some(&'}') {
            return Err(format!("{{{digits}"));
        }
        chars.next();
        return u32::from_str_radix(&digits, 16).map_err(|_| format!("{{{digits}}}"));
    }

    let digits = take_hex(chars, 4);
    if digits.len() != 4 {
        return Err(digits);
    }
    u32::from_str_radix(&digits, 16).map_err(|_| digits)
}

fn take_hex(chars: &mut Peekable<Chars<'_>>, max: usize) -> String {
    let mut digits = String::new();
    while digits.len() < max {
        match chars.peek() {
            Some(c) if c.is_ascii_hexdigit() => {
                digits.push(*c);
                chars.next();
            }
            _ => break,
        }
    }
    digits
}

fn flush_utf16(units: &mut Vec<u16>, out: &mut String) {
    out.extend(
        char::decode_utf16(units.drain(..)).map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER)),
    );
}

/// Decode an HTML character reference such as `&#49;`, `&#x68;` or `&amp;`.
///
/// Only a handful of named references are known; `None` for the rest.
pub fn decode_character_reference(reference: &str) -> Option<char> {
    let body = reference.strip_prefix('&')?.strip_suffix(';')?;

    if let Some(number) = body.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse().ok()?,
        };
        return char::from_u32(code);
    }

    let c = match body {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "copy" => '\u{a9}',
        "reg" => '\u{ae}',
        "trade" => '\u{2122}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        "middot" => '\u{b7}',
        "times" => '\u{d7}',
        _ => return None,
    };
    Some(c)
}
