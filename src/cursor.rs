/// Character cursor with a single character of pushback.
pub struct Cursor<'a> {
    get: &'a mut dyn Iterator<Item = char>,
    back: Option<char>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(get: &'a mut dyn Iterator<Item = char>) -> Self {
        Cursor {
            get,
            back: None,
            pos: 0,
        }
    }

    /// Next character, `None` at end of input.
    pub fn read(self: &mut Self) -> Option<char> {
        let ch = match self.back.take() {
            Some(ch) => Some(ch),
            None => self.get.next(),
        };
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    /// Push `ch` back so the next `read` returns it. Only one character
    /// can be pending; a second `unread` replaces the first.
    pub fn unread(self: &mut Self, ch: char) {
        self.back = Some(ch);
        self.pos = self.pos.saturating_sub(1);
    }

    pub fn peek(self: &mut Self) -> Option<char> {
        let ch = self.read()?;
        self.unread(ch);
        Some(ch)
    }

    pub fn position(self: &Self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_all() {
        let mut it = "ab".chars();
        let mut cur = Cursor::new(&mut it);
        assert_eq!(cur.read(), Some('a'));
        assert_eq!(cur.read(), Some('b'));
        assert_eq!(cur.read(), None);
        assert_eq!(cur.read(), None);
        assert_eq!(cur.position(), 2);
    }

    #[test]
    fn pushback() {
        let mut it = "xy".chars();
        let mut cur = Cursor::new(&mut it);
        let ch = cur.read().unwrap();
        cur.unread(ch);
        assert_eq!(cur.position(), 0);
        assert_eq!(cur.peek(), Some('x'));
        assert_eq!(cur.read(), Some('x'));
        assert_eq!(cur.read(), Some('y'));
        assert_eq!(cur.position(), 2);
    }

    #[test]
    fn peek_at_end() {
        let mut it = "".chars();
        let mut cur = Cursor::new(&mut it);
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.position(), 0);
    }
}
