/// `[text](url)` links. The display text is kept literal.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';

    pub fn render(text: &str, url: &str, out: &mut String) {
        out.push(char::from(Self::OPEN));
        out.push_str(text);
        out.push(char::from(Self::TEXT_CLOSE));
        out.push(char::from(Self::URL_OPEN));
        out.push_str(url);
        out.push(char::from(Self::URL_CLOSE));
    }
}
