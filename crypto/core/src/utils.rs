/**
    Strip leading and trailing ASCII whitespace from a byte slice.
*/
pub const fn trim_ascii(mut s: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = s {
        if first.is_ascii_whitespace() {
            s = rest;
        } else {
            break;
        }
    }
    while let [rest @ .., last] = s {
        if last.is_ascii_whitespace() {
            s = rest;
        } else {
            break;
        }
    }
    s
}

/**
    Case-insensitive ASCII comparison, usable in `const` contexts.
*/
pub const fn eq_ignore_ascii_case(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i].to_ascii_lowercase() != b[i].to_ascii_lowercase() {
            return false;
        }
        i += 1;
    }
    true
}

/**
    Copy of a 32-byte array with its byte order reversed.

    Boundary values carry 256-bit integers little-endian while the curve
    library speaks big-endian, so this is the single conversion used both ways.
*/
pub const fn reversed(bytes: &[u8; 32]) -> [u8; 32] {
    let mut out = [0u8; 32];
    let mut i = 0;
    while i < 32 {
        out[i] = bytes[31 - i];
        i += 1;
    }
    out
}
