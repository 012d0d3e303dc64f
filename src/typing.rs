//! Hero headline typing loop.

use std::time::Duration;

pub const START_DELAY: Duration = Duration::from_millis(1_000);
const TYPE_STEP: Duration = Duration::from_millis(100);
const DELETE_STEP: Duration = Duration::from_millis(50);
const HOLD_FULL_WORD: Duration = Duration::from_millis(2_000);
const PAUSE_BEFORE_NEXT_WORD: Duration = Duration::from_millis(500);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub next_delay: Duration,
}

#[derive(Clone, Debug)]
pub struct TypingAnimation {
    words: Vec<Vec<char>>,
    word_index: usize,
    char_index: usize,
    deleting: bool,
}

impl TypingAnimation {
    pub fn new(words: &[String]) -> Self {
        Self {
            words: words
                .iter()
                .filter(|word| !word.is_empty())
                .map(|word| word.chars().collect())
                .collect(),
            word_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    /// Advances one character and returns the text to show plus how long to
    /// wait before the next tick. `None` when there are no words to type.
    pub fn tick(&mut self) -> Option<TypingFrame> {
        let word = self.words.get(self.word_index)?;
        let mut next_delay = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            DELETE_STEP
        } else {
            self.char_index = (self.char_index + 1).min(word.len());
            TYPE_STEP
        };
        let text: String = word[..self.char_index].iter().collect();

        if !self.deleting && self.char_index == word.len() {
            self.deleting = true;
            next_delay = HOLD_FULL_WORD;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.word_index = (self.word_index + 1) % self.words.len();
            next_delay = PAUSE_BEFORE_NEXT_WORD;
        }

        Some(TypingFrame { text, next_delay })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn types_holds_deletes_then_moves_on() {
        let mut animation = TypingAnimation::new(&words(&["Hi", "Yo"]));
        let frames: Vec<_> = (0..6)
            .map(|_| animation.tick().expect("words present"))
            .map(|frame| (frame.text, frame.next_delay.as_millis()))
            .collect();

        assert_eq!(
            frames,
            vec![
                ("H".to_string(), 100),
                ("Hi".to_string(), 2_000),
                ("H".to_string(), 50),
                ("".to_string(), 500),
                ("Y".to_string(), 100),
                ("Yo".to_string(), 2_000),
            ]
        );
    }

    #[test]
    fn wraps_back_to_first_word() {
        let mut animation = TypingAnimation::new(&words(&["a"]));
        let texts: Vec<_> = (0..4)
            .filter_map(|_| animation.tick())
            .map(|frame| frame.text)
            .collect();

        assert_eq!(texts, vec!["a", "", "a", ""]);
    }

    #[test]
    fn multibyte_words_are_typed_by_character() {
        let mut animation = TypingAnimation::new(&words(&["né"]));
        animation.tick();
        let frame = animation.tick().expect("words present");
        assert_eq!(frame.text, "né");
    }

    #[test]
    fn no_words_produce_no_frames() {
        let mut animation = TypingAnimation::new(&words(&["", ""]));
        assert_eq!(animation.tick(), None);
    }
}
