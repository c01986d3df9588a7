//! Toy substitution ciphers. Not suitable for protecting anything.

fn shift_letter(c: char, shift: u8) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    (((c as u8 - base + shift) % 26) + base) as char
}

pub fn caesar(text: &str, shift: i64, decode: bool) -> String {
    let shift = shift.rem_euclid(26) as u8;
    let shift = if decode { (26 - shift) % 26 } else { shift };
    text.chars().map(|c| shift_letter(c, shift)).collect()
}

pub fn rot13(text: &str) -> String {
    caesar(text, 13, false)
}
