//! Hex color normalization.

/// Normalize any string to a six-digit `#RRGGBB` hex color.
///
/// Works on bytes: strips every `#`, expands a three-byte shorthand, then
/// fills six positions where a missing or non-hex byte becomes `F` in the
/// first position and repeats the previous digit after that. Letter case
/// is preserved.
pub fn sanitize_hex(color: &str) -> String {
    let mut digits: Vec<u8> = color.trim().bytes().filter(|&b| b != b'#').collect();
    if digits.len() == 3 {
        digits = digits.iter().flat_map(|&b| [b, b]).collect();
    }

    let mut out = String::with_capacity(7);
    out.push('#');
    let mut previous = b'F';
    for i in 0..6 {
        let digit = match digits.get(i) {
            Some(&b) if b.is_ascii_hexdigit() => b,
            _ => previous,
        };
        out.push(char::from(digit));
        previous = digit;
    }
    out
}
