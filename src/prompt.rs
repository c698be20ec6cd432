//! Console prompting used by the interactive generator.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::accordion::AccordionItem;
use crate::config::{Config, ConversionMode};
use crate::convert_with_mode;

/// Reads answers from `input`, writing prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line without its line ending. End of input is an error.
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a value was entered",
            ));
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Show `prompt` on the same line and read the reply.
    pub fn line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Collect lines until two consecutive empty lines. Empty lines are dropped.
    pub fn multiline(&mut self, prompt: &str) -> io::Result<String> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut lines = Vec::new();
        let mut empty_count = 0;
        while empty_count < 2 {
            let line = self.read_line()?;
            if line.is_empty() {
                empty_count += 1;
            } else {
                empty_count = 0;
                lines.push(line);
            }
        }
        Ok(lines.join("\n"))
    }

    fn integer(&mut self, prompt: &str, min: u64, requirement: &str) -> io::Result<u64> {
        loop {
            let reply = self.line(prompt)?;
            match reply.trim().parse::<u64>() {
                Ok(value) if value >= min => return Ok(value),
                Ok(_) => writeln!(
                    self.output,
                    "Invalid input: The number must be {requirement}. Please try again."
                )?,
                Err(e) => writeln!(self.output, "Invalid input: {e}. Please try again.")?,
            }
        }
    }

    pub fn positive_integer(&mut self, prompt: &str) -> io::Result<u64> {
        self.integer(prompt, 1, "a positive integer")
    }

    pub fn non_negative_integer(&mut self, prompt: &str) -> io::Result<u64> {
        self.integer(prompt, 0, "a non-negative integer")
    }

    /// Ask until a non-blank reply is given.
    pub fn question(&mut self, prompt: &str) -> io::Result<String> {
        loop {
            let reply = self.line(prompt)?;
            if !reply.trim().is_empty() {
                return Ok(reply);
            }
            writeln!(
                self.output,
                "The question can't be empty. Please enter a valid question."
            )?;
        }
    }

    /// `y` (any case, surrounding space ignored) is yes, anything else no.
    pub fn yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        let reply = self.line(prompt)?;
        Ok(reply.trim().eq_ignore_ascii_case("y"))
    }

    /// Ask for one question/answer pair and its images.
    pub fn item(&mut self, mode: ConversionMode) -> io::Result<AccordionItem> {
        let question = self.question("Please insert the question: ")?;
        let answer =
            self.multiline("Please insert the answer (leave two blank lines to finish): ")?;
        let answer_html = convert_with_mode(&answer, mode);

        let mut urls = Vec::new();
        if self.yes_no("Does this answer have images? (y/n): ")? {
            let count = self.non_negative_integer("How many images? ")?;
            for _ in 0..count {
                urls.push(self.line("Please enter the image full URL: ")?);
            }
        }

        Ok(AccordionItem::new(question, answer_html).with_images(urls))
    }

    /// Ask for `count` items in order.
    pub fn collect_items(
        &mut self,
        count: u64,
        config: &Config,
    ) -> io::Result<Vec<AccordionItem>> {
        let mut items = Vec::new();
        for index in 0..count {
            debug!("collecting item {index}");
            items.push(self.item(config.answer.mode)?);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(p: &Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(&p.output).into_owned()
    }

    #[test]
    fn multiline_stops_after_two_blank_lines() {
        let mut p = prompter("one\n\ntwo\n\n\nignored\n");
        assert_eq!(p.multiline("Answer:").unwrap(), "one\ntwo");
        assert_eq!(p.read_line().unwrap(), "ignored");
    }

    #[test]
    fn multiline_handles_crlf() {
        let mut p = prompter("a\r\n- b\r\n\r\n\r\n");
        assert_eq!(p.multiline("Answer:").unwrap(), "a\n- b");
    }

    #[test]
    fn multiline_eof_is_an_error() {
        let mut p = prompter("unterminated\n");
        let err = p.multiline("Answer:").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn positive_integer_retries() {
        let mut p = prompter("zero\n0\n-3\n3\n");
        assert_eq!(p.positive_integer("How many? ").unwrap(), 3);
        let out = printed(&p);
        assert_eq!(out.matches("Please try again.").count(), 3);
        assert!(out.contains("The number must be a positive integer."));
    }

    #[test]
    fn non_negative_accepts_zero() {
        let mut p = prompter(" 0 \n");
        assert_eq!(p.non_negative_integer("How many? ").unwrap(), 0);
    }

    #[test]
    fn question_rejects_blank() {
        let mut p = prompter("\n   \nWhat?\n");
        assert_eq!(p.question("Q: ").unwrap(), "What?");
        assert_eq!(printed(&p).matches("can't be empty").count(), 2);
    }

    #[test]
    fn yes_no() {
        assert!(prompter(" Y \n").yes_no("?").unwrap());
        assert!(!prompter("yes\n").yes_no("?").unwrap());
        assert!(!prompter("\n").yes_no("?").unwrap());
    }

    #[test]
    fn item_with_images() {
        let mut p = prompter("Why?\n# Because\n- a\n\n\ny\n2\nhttp://i/1.png\nhttp://i/2.png\n");
        let item = p.item(ConversionMode::Markup).unwrap();
        assert_eq!(item.question, "Why?");
        assert_eq!(item.answer_html, "<h1>Because</h1>\n<ul>\n    <li>a</li>\n</ul>");
        assert_eq!(item.image_urls, vec!["http://i/1.png", "http://i/2.png"]);
    }

    #[test]
    fn collect_items_without_images() {
        let mut p = prompter("Q1\nA1\n\n\nn\nQ2\nA2\n\n\nn\n");
        let items = p.collect_items(2, &Config::default()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].question, "Q2");
        assert!(items.iter().all(|item| item.image_urls.is_empty()));
    }
}
