//! The per-request page builder.
//!
//! A [`PageBuilder`] is created once per request, accumulates head
//! fragments through its mutators, renders the whole document with
//! [`PageBuilder::build`], and is then discarded. Building is read-only,
//! so rendering twice on unchanged state yields byte-identical output.

use crate::attrs::AttrMap;
use crate::block::Block;
use crate::wraps::page::{self, DocType, OpenGraph, TwitterCard};
use anyhow::Result;
use std::io::Write;

/// Default meta fragments displaced by an explicit `robots: nofollow`.
const DEFAULT_ROBOTS_META: &str = r#"<meta name="robots" content="index, follow" />"#;
const DEFAULT_REVISIT_META: &str = r#"<meta name="revisit-after" content="7 days" />"#;

/// Accumulates stylesheets, scripts, meta tags, and a favicon, then
/// concatenates them into one HTML document string.
#[derive(Debug, Clone)]
pub struct PageBuilder {
    title: String,
    lang: String,
    charset: String,
    base_url: String,
    nosnippet: bool,
    scroll_button: bool,
    favicon: Option<(String, String)>,
    stylesheets: Vec<String>,
    print_stylesheets: Vec<String>,
    inline_styles: String,
    inline_scripts: Vec<String>,
    external_scripts: Vec<String>,
    metas: Vec<String>,
    blocks: Vec<Block>,
}

impl PageBuilder {
    /// New page with the given title, ISO language code (`en-gb`, `de`,
    /// ...), and character set. The title is seeded into the meta list
    /// immediately.
    pub fn new(title: &str, lang: &str, charset: &str) -> Self {
        Self {
            title: title.to_owned(),
            lang: lang.to_owned(),
            charset: charset.to_owned(),
            base_url: String::new(),
            nosnippet: false,
            scroll_button: true,
            favicon: None,
            stylesheets: Vec::new(),
            print_stylesheets: Vec::new(),
            inline_styles: String::new(),
            inline_scripts: Vec::new(),
            external_scripts: Vec::new(),
            metas: vec![page::page_meta("title", title)],
            blocks: Vec::new(),
        }
    }

    /// Base URL for relative hyperlinks; empty means no `<base>` tag.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_owned();
        self
    }

    /// Request nosnippet treatment for the page contents.
    pub fn with_nosnippet(mut self, nosnippet: bool) -> Self {
        self.nosnippet = nosnippet;
        self
    }

    /// Request a scroll-to-top button.
    pub fn with_scroll_button(mut self, scroll_button: bool) -> Self {
        self.scroll_button = scroll_button;
        self
    }

    /// Stored character set. Accepted and kept, but not yet rendered
    /// into the head.
    pub fn charset(&self) -> &str {
        &self.charset
    }

    /// Stored nosnippet flag. Not yet consumed by the build step.
    pub fn nosnippet(&self) -> bool {
        self.nosnippet
    }

    /// Stored scroll-button flag. Not yet consumed by the build step.
    pub fn scroll_button(&self) -> bool {
        self.scroll_button
    }

    /// Set the favicon. A single slot: the last call wins.
    pub fn add_favicon(&mut self, uri: &str, mime: &str) {
        self.favicon = Some((uri.to_owned(), mime.to_owned()));
    }

    /// Append raw CSS to the page's inline style block. Plain
    /// concatenation; callers separate rules themselves.
    pub fn add_inline_style(&mut self, style: &str) {
        self.inline_styles.push_str(style);
    }

    /// Register an external stylesheet, on the print list when
    /// `is_print` is set.
    pub fn add_stylesheet(&mut self, uri: &str, is_print: bool) {
        if is_print {
            self.print_stylesheets.push(uri.to_owned());
        } else {
            self.stylesheets.push(uri.to_owned());
        }
    }

    /// Register an external script.
    pub fn add_external_script(&mut self, uri: &str) {
        self.external_scripts.push(uri.to_owned());
    }

    /// Append an inline script body.
    pub fn add_inline_script(&mut self, content: &str) {
        self.inline_scripts.push(content.to_owned());
    }

    /// Append a named meta tag. Empty content is a no-op.
    ///
    /// `("robots", "nofollow")` is a sentinel: it displaces the default
    /// robots and revisit-after fragments before the nofollow fragment
    /// is appended. The match is against the exact default strings, not
    /// a general mechanism.
    pub fn add_meta(&mut self, name: &str, content: &str) {
        if content.is_empty() {
            return;
        }
        if name == "robots" && content == "nofollow" {
            self.metas
                .retain(|meta| meta != DEFAULT_ROBOTS_META && meta != DEFAULT_REVISIT_META);
        }
        self.metas.push(page::page_meta(name, content));
    }

    /// Append the Twitter Card meta-tag set as one composite fragment.
    pub fn add_twitter_card(&mut self, card: &TwitterCard) {
        self.metas.push(card.render());
    }

    /// Append the Open Graph meta-tag set as one composite fragment.
    pub fn add_open_graph(&mut self, open_graph: &OpenGraph) {
        self.metas.push(open_graph.render());
    }

    /// Store a content block. Blocks are kept in order but not yet
    /// rendered; the document body stays empty.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Assemble the full document string: head fragments in fixed
    /// order, an empty body, doctype and `<html lang>` around them, and
    /// a cosmetic newline pass at the end.
    pub fn build(&self) -> String {
        let mut head = String::new();

        head.push_str(&page::page_title(&self.title));
        if !self.base_url.is_empty() {
            head.push_str(&page::page_base(&self.base_url, "_blank", AttrMap::new()));
        }
        for meta in &self.metas {
            head.push_str(meta);
        }
        if let Some((uri, mime)) = &self.favicon {
            head.push_str(&page::page_favicon(uri, mime, AttrMap::new()));
        }
        for uri in &self.stylesheets {
            head.push_str(&page::page_ext_stylesheet(uri, false, AttrMap::new()));
        }
        for uri in &self.print_stylesheets {
            head.push_str(&page::page_ext_stylesheet(uri, true, AttrMap::new()));
        }
        if !self.inline_styles.is_empty() {
            head.push_str(&page::page_int_styles(&self.inline_styles, AttrMap::new()));
        }
        for script in &self.inline_scripts {
            head.push_str(&page::page_int_script(script, AttrMap::new()));
        }
        for src in &self.external_scripts {
            head.push_str(&page::page_ext_script(src, AttrMap::new()));
        }

        // Block accumulation is not wired into the body yet.
        let body = String::new();

        let mut html_attribs = AttrMap::new();
        html_attribs.add("lang", &self.lang);
        let document = page::page_document(
            &format!(
                "{}{}",
                page::page_head(&head, AttrMap::new()),
                page::page_body(&body, AttrMap::new())
            ),
            DocType::Html5,
            html_attribs,
        );

        // Cosmetic newline pass; `</` must run after `>` so closing tags
        // land on their own line.
        document.replace('>', ">\n").replace("</", "\n</")
    }

    /// Write the full document to standard output.
    pub fn draw(&self) -> Result<()> {
        let markup = self.build();
        log::debug!("drawing page `{}` ({} bytes)", self.title, markup.len());

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(markup.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
