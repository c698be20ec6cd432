use log::debug;

use crate::block::{Block, LineClass, List};
use crate::inline;

/// Which parts of the markup dialect a parse recognises
#[derive(Debug, Clone, Copy)]
pub struct Dialect {
    pub headings: bool,
    pub bold: bool,
}

impl Dialect {
    /// Links, bold, headings and lists.
    pub const MARKUP: Dialect = Dialect {
        headings: true,
        bold: true,
    };

    /// Links and lists only; `#` lines are plain text.
    pub const LINKS: Dialect = Dialect {
        headings: false,
        bold: false,
    };
}

/// Parse markup text into a list of blocks
pub fn parse(text: &str, dialect: Dialect) -> Vec<Block> {
    let mut state = ParseState::default();

    for line in text.lines() {
        process_line(line, dialect, &mut state);
    }
    state.finish();

    debug!("parsed {} blocks", state.blocks.len());
    state.blocks
}

/// Whether a run of list lines is currently open
#[derive(Debug, Default)]
enum ListState {
    #[default]
    NotInList,
    InList(List),
}

#[derive(Default)]
struct ParseState {
    blocks: Vec<Block>,
    list: ListState,
}

impl ParseState {
    fn push_item(&mut self, item: String) {
        match &mut self.list {
            ListState::InList(list) => list.items.push(item),
            ListState::NotInList => {
                self.list = ListState::InList(List { items: vec![item] });
            }
        }
    }

    /// Close an open list, emitting it as a block.
    fn close_list(&mut self) {
        if let ListState::InList(list) = std::mem::take(&mut self.list) {
            self.blocks.push(Block::List(list));
        }
    }

    fn push_block(&mut self, block: Block) {
        self.close_list();
        self.blocks.push(block);
    }

    fn finish(&mut self) {
        self.close_list();
    }
}

fn process_line(line: &str, dialect: Dialect, state: &mut ParseState) {
    // Inline substitutions run before the marker strip so list text keeps its length.
    let line = if dialect.bold {
        inline::substitute_inline(line)
    } else {
        inline::substitute_links(line).into_owned()
    };

    let class = LineClass::classify(&line);
    match (class, class.heading_level()) {
        (_, Some(level)) if dialect.headings => {
            let content = class.strip_marker(&line).to_string();
            state.push_block(Block::Heading { level, content });
        }
        (LineClass::ListItem, _) => {
            let item = class.strip_marker(&line).to_string();
            state.push_item(item);
        }
        _ => {
            state.push_block(Block::Line(line));
        }
    }
}
