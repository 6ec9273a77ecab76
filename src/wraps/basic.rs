//! Inline and content element wrappers.

use crate::attrs::AttrMap;

/// Anchor/hyperlink element. The `uri` is merged into `attribs` under
/// `href`, so a caller-supplied `href` accumulates rather than being
/// replaced.
pub fn a(text: &str, uri: &str, mut attribs: AttrMap) -> String {
    attribs.add("href", uri);
    format!("<a{}>{text}</a>", attribs.render())
}

/// Line break element.
pub fn br() -> &'static str {
    "<br />"
}

/// Inline code element.
pub fn code(text: &str) -> String {
    format!("<code>{text}</code>")
}

/// Division element. With `no_snippet` set, the whole division is
/// wrapped in a `data-nosnippet` span to discourage search-engine
/// snippet extraction.
pub fn div(contents: &str, no_snippet: bool, attribs: AttrMap) -> String {
    if no_snippet {
        format!(
            "<span data-nosnippet><div{}>{contents}</div></span>",
            attribs.render()
        )
    } else {
        format!("<div{}>{contents}</div>", attribs.render())
    }
}

/// Emphasised (italic) text element.
pub fn em(text: &str) -> String {
    format!("<em>{text}</em>")
}

/// Image element inside a division container.
///
/// Keeps the stray `</div>` the legacy markup carried after the `img`
/// tag; existing pages depend on the output byte-for-byte.
pub fn img(src: &str, mut img_attribs: AttrMap, container_attribs: AttrMap) -> String {
    img_attribs.add("src", src);
    div(
        &format!("<img{} /></div>", img_attribs.render()),
        false,
        container_attribs,
    )
}

/// Text with literal double quotes around it.
pub fn quotes(text: &str) -> String {
    format!("\"{text}\"")
}

/// Span element.
pub fn span(contents: &str, attribs: AttrMap) -> String {
    format!("<span{}>{contents}</span>", attribs.render())
}

/// Strong (bold) text element.
pub fn strong(text: &str) -> String {
    format!("<strong>{text}</strong>")
}

/// Subscript element.
pub fn sub(text: &str) -> String {
    format!("<sub>{text}</sub>")
}

/// Superscript element.
pub fn sup(text: &str) -> String {
    format!("<sup>{text}</sup>")
}
