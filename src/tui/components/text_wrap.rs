//! Word wrapping for card text.
//!
//! Card columns are narrow, so excerpts are re-flowed at word boundaries.
//! Words wider than a column are hard-wrapped by display width.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wraps `text` into lines no wider than `max_width` display columns.
///
/// Runs of whitespace collapse to single spaces. Empty text yields no
/// lines. A zero width returns the collapsed text as a single line.
#[must_use]
pub fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    let mut wrapper = LineWrapper::new(max_width);
    for word in text.split_whitespace() {
        wrapper.push_word(word);
    }
    wrapper.finish()
}

struct LineWrapper {
    max_width: usize,
    lines: Vec<String>,
    current: String,
    current_width: usize,
}

impl LineWrapper {
    const fn new(max_width: usize) -> Self {
        Self {
            max_width,
            lines: Vec::new(),
            current: String::new(),
            current_width: 0,
        }
    }

    fn push_word(&mut self, word: &str) {
        let word_width = word.width();

        if self.max_width == 0 {
            self.append(word, word_width);
            return;
        }

        if word_width > self.max_width {
            self.hard_wrap(word);
            return;
        }

        let needed = if self.current.is_empty() {
            word_width
        } else {
            self.current_width.saturating_add(1).saturating_add(word_width)
        };
        if needed > self.max_width {
            self.flush();
        }
        self.append(word, word_width);
    }

    fn append(&mut self, word: &str, word_width: usize) {
        if !self.current.is_empty() {
            self.current.push(' ');
            self.current_width = self.current_width.saturating_add(1);
        }
        self.current.push_str(word);
        self.current_width = self.current_width.saturating_add(word_width);
    }

    fn hard_wrap(&mut self, word: &str) {
        self.flush();
        for ch in word.chars() {
            let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if self.current_width.saturating_add(char_width) > self.max_width {
                self.flush();
            }
            self.current.push(ch);
            self.current_width = self.current_width.saturating_add(char_width);
        }
    }

    fn flush(&mut self) {
        if self.current.is_empty() {
            return;
        }
        self.lines.push(std::mem::take(&mut self.current));
        self.current_width = 0;
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.lines
    }
}
