use crossterm::event::{KeyCode, KeyModifiers};

/// Single-line text buffer with a byte-offset cursor, used by the prompts.
#[derive(Debug, Default, Clone)]
pub struct LineInput {
    buf: String,
    cursor: usize,
}

impl LineInput {
    pub fn value(&self) -> &str {
        &self.buf
    }

    /// Apply an editing key. Returns `false` if the key is not an edit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        match code {
            KeyCode::Left => self.cursor = self.prev_boundary(),
            KeyCode::Right => self.cursor = self.next_boundary(),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.buf.len(),
            KeyCode::Char('a') if ctrl => self.cursor = 0,
            KeyCode::Char('e') if ctrl => self.cursor = self.buf.len(),
            KeyCode::Char('u') if ctrl => {
                self.buf.drain(..self.cursor);
                self.cursor = 0;
            }
            KeyCode::Char('w') if ctrl => {
                let start = self.word_start();
                self.buf.drain(start..self.cursor);
                self.cursor = start;
            }
            KeyCode::Backspace => {
                let start = self.prev_boundary();
                self.buf.drain(start..self.cursor);
                self.cursor = start;
            }
            KeyCode::Delete => {
                let end = self.next_boundary();
                self.buf.drain(self.cursor..end);
            }
            KeyCode::Char(c) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.buf.insert(self.cursor, c);
                self.cursor += c.len_utf8();
            }
            _ => return false,
        }
        true
    }

    /// The buffer with a block cursor drawn at the cursor position.
    pub fn with_cursor(&self) -> String {
        let (before, after) = self.buf.split_at(self.cursor);
        format!("{before}\u{2588}{after}")
    }

    fn prev_boundary(&self) -> usize {
        self.buf[..self.cursor]
            .chars()
            .next_back()
            .map_or(0, |ch| self.cursor - ch.len_utf8())
    }

    fn next_boundary(&self) -> usize {
        self.buf[self.cursor..]
            .chars()
            .next()
            .map_or(self.cursor, |ch| self.cursor + ch.len_utf8())
    }

    /// Start of the word before the cursor, skipping trailing whitespace.
    fn word_start(&self) -> usize {
        let trimmed = self.buf[..self.cursor].trim_end();
        trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8())
    }
}
