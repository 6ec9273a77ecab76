//! Block-content scaffolding.
//!
//! Blocks are the planned unit of page content, keyed by a type tag.
//! No derived block behavior exists yet; what is here is the
//! tag-to-display-name lookup and plain content accumulation, so pages
//! built today carry an empty body.

/// Type tags for the block derivatives the system enumerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Normal,
    Links,
    List,
    Table,
    Start,
    Footer,
    Form,
    NumList,
    Gallery,
    Buttons,
    Selection,
    InfoWall,
}

impl BlockType {
    /// Display name of the block derivative this tag stands for.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "SbXNormalBlock",
            Self::Links => "SbXLinksBlock",
            Self::List => "SbXListBlock",
            Self::Table => "SbXTableBlock",
            Self::Start => "SbXStartBlock",
            Self::Footer => "SbXFooterBlock",
            Self::Form => "SbXFormBlock",
            Self::NumList => "SbXNumListBlock",
            Self::Gallery => "SbXGalleryBlock",
            Self::Buttons => "SbXButtonsBlock",
            Self::Selection => "SbXSelectionBlock",
            Self::InfoWall => "SbXInfoWallBlock",
        }
    }
}

/// One unit of page content: declaration markup, termination markup,
/// and the accumulated content between them.
#[derive(Debug, Clone)]
pub struct Block {
    kind: BlockType,
    is_end: bool,
    opening: String,
    ending: String,
    content: String,
}

impl Block {
    pub fn new(kind: BlockType) -> Self {
        Self {
            kind,
            // Never the terminus on creation; the owning page flips this.
            is_end: false,
            opening: String::new(),
            ending: String::new(),
            content: String::new(),
        }
    }

    pub const fn kind(&self) -> BlockType {
        self.kind
    }

    pub const fn kind_str(&self) -> &'static str {
        self.kind.as_str()
    }

    pub const fn is_end(&self) -> bool {
        self.is_end
    }

    pub fn set_end(&mut self, is_end: bool) {
        self.is_end = is_end;
    }

    pub fn set_opening(&mut self, markup: &str) {
        self.opening = markup.to_owned();
    }

    pub fn set_ending(&mut self, markup: &str) {
        self.ending = markup.to_owned();
    }

    /// Append custom markup to the block's content, optionally stripping
    /// carriage returns, newlines, and doubled spaces.
    pub fn custom_markup(&mut self, markup: &str, strip_whitespace: bool) {
        if strip_whitespace {
            let stripped = markup.replace('\r', "").replace('\n', "").replace("  ", "");
            self.content.push_str(&stripped);
        } else {
            self.content.push_str(markup);
        }
    }

    /// Complete markup for this block, or `""` when there is no content.
    ///
    /// The spaced ` & ` sequence is rewritten to ` &amp; ` here and only
    /// here; no other ampersand form is touched, and the page builder
    /// performs no escaping of its own.
    pub fn build(&self) -> String {
        if self.content.is_empty() {
            return String::new();
        }

        let markup = format!("{}{}{}", self.opening, self.content, self.ending);
        markup.replace(" & ", " &amp; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_display_names() {
        assert_eq!(BlockType::Normal.as_str(), "SbXNormalBlock");
        assert_eq!(BlockType::Links.as_str(), "SbXLinksBlock");
        assert_eq!(BlockType::Table.as_str(), "SbXTableBlock");
        assert_eq!(BlockType::NumList.as_str(), "SbXNumListBlock");
        assert_eq!(BlockType::InfoWall.as_str(), "SbXInfoWallBlock");
    }

    #[test]
    fn test_new_block_is_not_terminus() {
        let block = Block::new(BlockType::Footer);
        assert!(!block.is_end());
        assert_eq!(block.kind(), BlockType::Footer);
        assert_eq!(block.kind_str(), "SbXFooterBlock");
    }

    #[test]
    fn test_empty_block_builds_empty() {
        let mut block = Block::new(BlockType::Normal);
        block.set_opening("<section>");
        block.set_ending("</section>");
        assert_eq!(block.build(), "");
    }

    #[test]
    fn test_build_wraps_content() {
        let mut block = Block::new(BlockType::Normal);
        block.set_opening("<section>");
        block.set_ending("</section>");
        block.custom_markup("<p>hi</p>", false);
        assert_eq!(block.build(), "<section><p>hi</p></section>");
    }

    #[test]
    fn test_build_escapes_spaced_ampersand_only() {
        let mut block = Block::new(BlockType::Normal);
        block.custom_markup("fish & chips, R&D", false);
        assert_eq!(block.build(), "fish &amp; chips, R&D");
    }

    #[test]
    fn test_custom_markup_strips_whitespace() {
        let mut block = Block::new(BlockType::Normal);
        block.custom_markup("<p>\r\n  hi\n</p>", true);
        assert_eq!(block.build(), "<p>hi</p>");
    }

    #[test]
    fn test_custom_markup_appends() {
        let mut block = Block::new(BlockType::Normal);
        block.custom_markup("a", false);
        block.custom_markup("b", false);
        assert_eq!(block.build(), "ab");
    }
}
