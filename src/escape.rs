/// Characters escaped in literal text outside a character class.
pub(crate) const LITERAL_SPECIALS: &[char] = &['(', ')', '[', ']', '+', '.'];

/// Characters escaped inside a character class body.
pub(crate) const CLASS_SPECIALS: &[char] = &['\\', '^', '-', '[', ']'];

/// Appends `c` to `buf`, prefixed with a backslash if it is in `specials`.
pub(crate) fn push_escaped(buf: &mut String, c: char, specials: &[char]) {
    if specials.contains(&c) {
        buf.push('\\');
    }
    buf.push(c);
}
