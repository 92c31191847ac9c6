/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: no other inline parsing occurs inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    pub fn render(code: &str, out: &mut String) {
        out.push(char::from(Self::TICK));
        out.push_str(code);
        out.push(char::from(Self::TICK));
    }
}
