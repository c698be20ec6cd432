//! Accordion assembly: wraps converted question/answer pairs in the
//! collapsible container markup.
//!
//! Per-item ids come from the item's position only (`heading{i}`,
//! `collapse{i}`). The first item is rendered expanded, the rest collapsed.

use log::debug;
use uuid::Uuid;

use crate::config::ImageConfig;
use crate::error::{Error, Result};

/// One question/answer panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionItem {
    pub question: String,
    /// Answer already converted to HTML.
    pub answer_html: String,
    pub image_urls: Vec<String>,
}

impl AccordionItem {
    pub fn new(question: impl Into<String>, answer_html: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer_html: answer_html.into(),
            image_urls: Vec::new(),
        }
    }

    pub fn with_images<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.image_urls.extend(urls.into_iter().map(Into::into));
        self
    }
}

/// A validated accordion ready to render
#[derive(Debug, Clone)]
pub struct Accordion {
    unique_id: String,
    items: Vec<AccordionItem>,
}

impl Accordion {
    /// Validate inputs. Fails on an empty item list, a blank id, or a blank question.
    pub fn new(unique_id: impl Into<String>, items: Vec<AccordionItem>) -> Result<Self> {
        let unique_id: String = unique_id.into();
        let unique_id = unique_id.trim().to_string();
        if unique_id.is_empty() {
            return Err(Error::InvalidInput(
                "accordion identifier must not be empty".to_string(),
            ));
        }
        if items.is_empty() {
            return Err(Error::InvalidInput(
                "accordion must have at least one item".to_string(),
            ));
        }
        if let Some(index) = items.iter().position(|item| item.question.trim().is_empty()) {
            return Err(Error::InvalidInput(format!(
                "question for item {index} must not be empty"
            )));
        }

        Ok(Self { unique_id, items })
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn items(&self) -> &[AccordionItem] {
        &self.items
    }

    /// Render with the default image settings.
    pub fn render(&self) -> String {
        self.render_with_config(&ImageConfig::default())
    }

    pub fn render_with_config(&self, images: &ImageConfig) -> String {
        let mut out = format!(
            "<div class=\"accordion\" id=\"accordionParent{}\">\n",
            self.unique_id
        );

        for (index, item) in self.items.iter().enumerate() {
            let mut answer = item.answer_html.clone();
            for url in &item.image_urls {
                answer.push_str("\n<br/>");
                answer.push_str(&image_tag(url, images));
                answer.push_str("<br />\n");
            }
            emit_item(index, item.question.trim(), &answer, &self.unique_id, &mut out);
        }

        out.push_str("</div>");
        debug!(
            "assembled accordion {} with {} items",
            self.unique_id,
            self.items.len()
        );
        out
    }
}

/// Validate and render in one step.
pub fn assemble(unique_id: &str, items: Vec<AccordionItem>) -> Result<String> {
    Accordion::new(unique_id, items).map(|accordion| accordion.render())
}

fn image_tag(url: &str, images: &ImageConfig) -> String {
    let mut tag = String::from("<img ");
    if !images.class.is_empty() {
        tag.push_str(&format!("class=\"{}\" ", images.class));
    }
    tag.push_str(&format!("src=\"{url}\" alt=\"{}\"", images.alt));
    tag.push_str(if images.self_closing { " />" } else { ">" });
    tag
}

fn emit_item(index: usize, question: &str, answer: &str, unique_id: &str, out: &mut String) {
    let heading_id = format!("heading{index}");
    let target_id = format!("collapse{index}");
    let visibility = if index == 0 { "collapse show" } else { "collapse" };

    out.push_str(&format!(
        r##"
    <div class="accordion-item">
        <h2 class="accordion-header" id="{heading_id}">
            <button class="accordion-button" type="button" data-bs-toggle="collapse" data-bs-target="#{target_id}"
                aria-expanded="true" aria-controls="{heading_id}">
                {question}
            </button>
        </h2>
        <div id="{target_id}" class="accordion-collapse {visibility}" aria-labelledby="{heading_id}"
            data-bs-parent="#accordionParent{unique_id}">
            <div class="accordion-body">
                {answer}
            </div>
        </div>
    </div>
"##
    ));
}

/// Short random identifier: the first `len` hex digits of a v4 UUID.
pub fn generate_unique_id(len: usize) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    hex[..len.clamp(1, hex.len())].to_string()
}
