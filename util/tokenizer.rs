/*!
This module provides the tokenizer used to split document text into terms.
*/

use std::borrow::Cow;

/// These options control how a [`Tokenizer`] splits and normalizes text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenizerOptions {
	/// If true, tokens containing uppercase letters are lowercased.
	pub lowercase: bool,
	/// If true, every punctuation character is emitted as its own one character token.
	pub include_punctuation: bool,
}

/**
A `Tokenizer` splits text into tokens of adjacent word characters, which are alphanumeric characters and the underscore. All word tokens must be more than one character long. Punctuation is any character that is not a word character, whitespace or a control character.

# Example

| text          | lowercase | include_punctuation | tokens                     |
|---------------|-----------|---------------------|----------------------------|
| Don't         | false     | false               | ["Don"]                    |
| Don't         | true      | false               | ["don"]                    |
| Don't         | true      | true                | ["don", "'"]               |
| $50           | false     | true                | ["$", "50"]                |
| 50_hello      | false     | false               | ["50_hello"]               |
| C.E.O.        | false     | false               | []                         |
*/
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
	text: &'a str,
	byte_index: usize,
	options: TokenizerOptions,
}

impl<'a> Tokenizer<'a> {
	pub fn new(text: &'a str, options: TokenizerOptions) -> Self {
		Self {
			text,
			byte_index: 0,
			options,
		}
	}
}

pub fn is_word_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_'
}

pub fn is_punctuation(c: char) -> bool {
	!is_word_char(c) && !c.is_whitespace() && !c.is_control()
}

impl<'a> Iterator for Tokenizer<'a> {
	type Item = Cow<'a, str>;
	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let next_char = self.text[self.byte_index..].chars().next()?;
			if is_word_char(next_char) {
				// Pass over as many adjacent word characters as we can.
				let start = self.byte_index;
				let mut n_chars = 0;
				let mut contains_capital_letter = false;
				while let Some(c) = self.text[self.byte_index..].chars().next() {
					if !is_word_char(c) {
						break;
					}
					if c.is_uppercase() {
						contains_capital_letter = true;
					}
					n_chars += 1;
					self.byte_index += c.len_utf8();
				}
				// Single characters are not tokens.
				if n_chars < 2 {
					continue;
				}
				let token = &self.text[start..self.byte_index];
				let token = if self.options.lowercase && contains_capital_letter {
					Cow::Owned(token.to_lowercase())
				} else {
					Cow::Borrowed(token)
				};
				return Some(token);
			}
			let start = self.byte_index;
			self.byte_index += next_char.len_utf8();
			if self.options.include_punctuation && is_punctuation(next_char) {
				return Some(Cow::Borrowed(&self.text[start..self.byte_index]));
			}
		}
	}
}

#[test]
fn test_tokenizer() {
	fn test(text: &str, options: TokenizerOptions, tokens: &[&str]) {
		assert!(Tokenizer::new(text, options).eq(tokens.iter().cloned()));
	}
	let raw = TokenizerOptions::default();
	let lowercase = TokenizerOptions {
		lowercase: true,
		include_punctuation: false,
	};
	let punctuation = TokenizerOptions {
		lowercase: true,
		include_punctuation: true,
	};
	test("Don't", raw, &["Don"]);
	test("Don't", lowercase, &["don"]);
	test("Don't", punctuation, &["don", "'"]);
	test("CEO/Co-founder", lowercase, &["ceo", "co", "founder"]);
	test("CEO/Co-founder", punctuation, &["ceo", "/", "co", "-", "founder"]);
	test("$50", raw, &["50"]);
	test("$50", punctuation, &["$", "50"]);
	test("50_hello", raw, &["50_hello"]);
	test("snake_case", raw, &["snake_case"]);
	test("Snake_Case", lowercase, &["snake_case"]);
	test("_ a_", punctuation, &["a_"]);
	test("C.E.O", raw, &[]);
	test("m/f", raw, &[]);
	test("cat dog cat", raw, &["cat", "dog", "cat"]);
	test("Grüße, Welt", lowercase, &["grüße", "welt"]);
	test("", punctuation, &[]);
}
