//! Document scaffolding and head-section wrappers.

use crate::attrs::AttrMap;

/// Selectable HTML document type declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocType {
    Html401Strict,
    Html401Transitional,
    #[default]
    Html5,
}

impl DocType {
    /// The literal doctype preamble emitted before `<html>`.
    pub const fn preamble(self) -> &'static str {
        match self {
            Self::Html401Strict => {
                "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \"http://www.w3.org/TR/html4/strict.dtd\">"
            }
            Self::Html401Transitional => {
                "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\" \"http://www.w3.org/TR/html4/loose.dtd\">"
            }
            Self::Html5 => "<!DOCTYPE HTML>",
        }
    }
}

/// Doctype preamble and `<html>` element around the whole document.
pub fn page_document(contents: &str, doctype: DocType, attribs: AttrMap) -> String {
    format!(
        "{}<html{}>{contents}</html>",
        doctype.preamble(),
        attribs.render()
    )
}

/// `<base>` declaration for relative URL resolution.
pub fn page_base(href: &str, target: &str, mut attribs: AttrMap) -> String {
    attribs.add("href", href);
    attribs.add("target", target);
    format!("<base{} />", attribs.render())
}

/// `<body>` element.
pub fn page_body(contents: &str, attribs: AttrMap) -> String {
    format!("<body{}>{contents}</body>", attribs.render())
}

/// `<head>` element.
pub fn page_head(contents: &str, attribs: AttrMap) -> String {
    format!("<head{}>{contents}</head>", attribs.render())
}

/// `<title>` element.
pub fn page_title(title: &str) -> String {
    format!("<title>{title}</title>")
}

/// External script embed.
pub fn page_ext_script(src: &str, mut attribs: AttrMap) -> String {
    attribs.add("src", src);
    attribs.add("type", "text/javascript");
    format!("<script{}></script>", attribs.render())
}

/// Inline script embed.
pub fn page_int_script(contents: &str, mut attribs: AttrMap) -> String {
    attribs.add("type", "text/javascript");
    format!("<script{}>{contents}</script>", attribs.render())
}

/// Inline stylesheet embed.
pub fn page_int_styles(contents: &str, attribs: AttrMap) -> String {
    format!("<style{}>{contents}</style>", attribs.render())
}

/// External stylesheet link, optionally scoped to print media.
///
/// The stylesheet location lands in a `src` attribute, as the pages this
/// markup feeds have always expected.
pub fn page_ext_stylesheet(src: &str, is_print: bool, mut attribs: AttrMap) -> String {
    attribs.add("src", src);
    attribs.add("type", "text/css");
    attribs.add("rel", "stylesheet");
    if is_print {
        attribs.add("media", "print");
    }
    format!("<link{} />", attribs.render())
}

/// Favicon link.
pub fn page_favicon(href: &str, mime: &str, mut attribs: AttrMap) -> String {
    attribs.add("href", href);
    attribs.add("type", mime);
    attribs.add("rel", "icon");
    format!("<link{} />", attribs.render())
}

/// Generic named meta tag.
///
/// `"canonical"` yields a `<link rel="canonical">` instead of a meta
/// tag; `"title"` and `"description"` are duplicated into the matching
/// `itemprop` meta tags.
pub fn page_meta(name: &str, content: &str) -> String {
    if name == "canonical" {
        return format!("<link rel=\"canonical\" href=\"{content}\" />");
    }

    let mut markup = format!("<meta name=\"{name}\" content=\"{content}\" />");
    if name == "title" {
        markup.push_str(&format!("<meta itemprop=\"name\" content=\"{content}\" />"));
    } else if name == "description" {
        markup.push_str(&format!(
            "<meta itemprop=\"description\" content=\"{content}\" />"
        ));
    }
    markup
}

/// OpenSearch descriptor link, so browsers can discover a search spec.
///
/// Emitted without a self-closing slash, unlike the other link tags.
pub fn opensearch_desc(title: &str, href: &str, mut attribs: AttrMap) -> String {
    attribs.add("title", title);
    attribs.add("href", href);
    attribs.add("data-react-helmet", "true");
    attribs.add("rel", "search");
    attribs.add("type", "application/opensearchdescription+xml");
    format!("<link{}>", attribs.render())
}

/// Open Graph protocol meta-tag set. Empty fields emit nothing.
#[derive(Debug, Clone, Default)]
pub struct OpenGraph {
    /// `og:type` (`kind` since `type` is reserved).
    pub kind: String,
    pub title: String,
    pub site_name: String,
    pub description: String,
    pub locale: String,
    pub image: String,
    pub url: String,
}

impl OpenGraph {
    pub fn render(&self) -> String {
        property_metas(&[
            ("og:type", self.kind.as_str()),
            ("og:title", self.title.as_str()),
            ("og:site_name", self.site_name.as_str()),
            ("og:description", self.description.as_str()),
            ("og:locale", self.locale.as_str()),
            ("og:image", self.image.as_str()),
            ("og:url", self.url.as_str()),
        ])
    }
}

/// Twitter Card protocol meta-tag set. Empty fields emit nothing.
#[derive(Debug, Clone, Default)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub creator: String,
    pub site: String,
}

impl TwitterCard {
    pub fn render(&self) -> String {
        property_metas(&[
            ("twitter:card", self.card.as_str()),
            ("twitter:title", self.title.as_str()),
            ("twitter:description", self.description.as_str()),
            ("twitter:image", self.image.as_str()),
            ("twitter:creator", self.creator.as_str()),
            ("twitter:site", self.site.as_str()),
        ])
    }
}

/// One `<meta property= content= />` per non-empty field, attributes in
/// sorted order (`content` before `property`).
fn property_metas(fields: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (property, content) in fields {
        if content.is_empty() {
            continue;
        }
        let mut attribs = AttrMap::new();
        attribs.add("property", property);
        attribs.add("content", content);
        out.push_str(&format!("<meta{} />", attribs.render()));
    }
    out
}
