//! Keyed pair-substitution decoder.
//!
//! The injection scheme hides one payload byte in every pair of lowercase
//! letters: the first letter of a pair selects a 26-wide block, the second an
//! offset within it. The combined value is unmasked by XOR with a cycling key
//! byte and reduced mod 255. Everything outside `a`..=`z` is filler inserted
//! by the injector and carries no payload.

/// Decode one fragment with the given key.
///
/// The transform is total: any fragment and any key produce a (possibly
/// empty) output string. Characters outside `a`..=`z` are skipped without
/// toggling the pair phase or advancing the key cursor. A trailing unpaired
/// letter is discarded. The key cursor restarts at zero on every call, so
/// fragments decode independently.
pub fn decode(fragment: &str, key: &str) -> String {
    let key_codes: Vec<u32> = key.chars().map(u32::from).collect();
    if key_codes.is_empty() {
        return String::new();
    }

    let mut output = String::new();
    let mut first_of_pair = true;
    let mut accumulator = 0u32;
    let mut cursor = 0usize;

    for c in fragment.chars() {
        if !c.is_ascii_lowercase() {
            continue;
        }
        let offset = u32::from(c) - u32::from(b'a');
        if first_of_pair {
            accumulator = offset * 26;
        } else {
            let keyed = (accumulator + offset) ^ key_codes[cursor % key_codes.len()];
            // keyed % 255 is always in 0..=254, a valid one-byte code point
            output.push((keyed % 255) as u8 as char);
            cursor += 1;
        }
        first_of_pair = !first_of_pair;
    }

    output
}
