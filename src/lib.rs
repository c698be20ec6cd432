mod accordion;
mod block;
mod config;
mod error;
mod export;
mod html;
mod inline;
mod parser;
mod prompt;

pub use accordion::{Accordion, AccordionItem, assemble, generate_unique_id};
pub use block::{Block, LineClass, List};
pub use config::{AnswerConfig, Config, ConfigError, ConversionMode, ImageConfig, OutputConfig};
pub use error::{Error, Result};
pub use export::{file_name, write_accordion};
pub use inline::embed_urls_as_images;
pub use prompt::Prompter;

use parser::Dialect;

/// Parse markup text into a vector of blocks.
pub fn parse(text: &str) -> Vec<Block> {
    parser::parse(text, Dialect::MARKUP)
}

/// Convert markup text to an HTML fragment.
pub fn convert(text: &str) -> String {
    html::blocks_to_html(&parse(text))
}

/// Convert text to HTML using one of the conversion modes.
pub fn convert_with_mode(text: &str, mode: ConversionMode) -> String {
    match mode {
        ConversionMode::Markup => convert(text),
        ConversionMode::Links => html::blocks_to_html(&parser::parse(text, Dialect::LINKS)),
        ConversionMode::LineBreaks => html::line_breaks_to_html(text),
        ConversionMode::Images => inline::embed_urls_as_images(text),
    }
}
