//! Portable Text to themed HTML.
//!
//! Blocks are decoded one at a time so a single malformed or unknown block is
//! dropped instead of failing the whole body. Consecutive list items are
//! grouped into (possibly nested) `<ul>`/`<ol>` elements.

use super::html::{escape, is_external, safe_href};
use super::image::{AssetRef, ImageUrlBuilder};
use super::theme::Theme;
use fnv::FnvHashMap;
use serde::Deserialize;
use serde_json::Value;
use smallvec::SmallVec;
use std::fmt::Write;

/// Width requested for inline body images.
pub const BODY_IMAGE_WIDTH: u32 = 1200;
pub const YOUTUBE_EMBED_BASE: &str = "https://www.youtube-nocookie.com/embed/";

#[derive(Debug, Deserialize)]
#[serde(tag = "_type")]
enum Block {
    #[serde(rename = "block")]
    Text(TextBlock),
    #[serde(rename = "image")]
    Image(ImageBlock),
    #[serde(rename = "code")]
    Code(CodeBlock),
    #[serde(rename = "youtube")]
    Youtube(VideoBlock),
    #[serde(rename = "video")]
    Video(VideoBlock),
    #[serde(rename = "callout")]
    Callout(CalloutBlock),
    #[serde(rename = "cta")]
    Cta(CtaBlock),
    #[serde(rename = "table")]
    Table(TableBlock),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextBlock {
    #[serde(default)]
    style: Option<String>,
    #[serde(default)]
    children: Vec<Child>,
    #[serde(default)]
    mark_defs: Vec<MarkDef>,
    #[serde(default)]
    list_item: Option<String>,
    #[serde(default)]
    level: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct Child {
    #[serde(rename = "_type", default)]
    kind: Option<String>,
    #[serde(default)]
    text: String,
    #[serde(default)]
    marks: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct MarkDef {
    #[serde(rename = "_key")]
    key: String,
    #[serde(rename = "_type")]
    kind: String,
    #[serde(default)]
    href: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImageBlock {
    asset: AssetRef,
    #[serde(default)]
    alt: Option<String>,
    #[serde(default)]
    caption: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CodeBlock {
    code: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    filename: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideoBlock {
    url: String,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CalloutBlock {
    #[serde(default)]
    tone: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(alias = "body")]
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CtaBlock {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    button_text: Option<String>,
    url: String,
}

#[derive(Debug, Deserialize)]
struct TableBlock {
    #[serde(default)]
    rows: Vec<TableRow>,
}

#[derive(Debug, Deserialize)]
struct TableRow {
    #[serde(default)]
    cells: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Number,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Bullet => "ul",
            ListKind::Number => "ol",
        }
    }

    fn list_class(self) -> &'static str {
        match self {
            ListKind::Bullet => "list-disc",
            ListKind::Number => "list-decimal",
        }
    }
}

struct OpenList {
    kind: ListKind,
    item_open: bool,
}

fn is_video_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Extract the video id from the common YouTube URL shapes.
pub fn youtube_id(url: &str) -> Option<&str> {
    let url = url.trim();
    let after_host = url
        .split_once("youtu.be/")
        .or_else(|| url.split_once("/embed/"))
        .or_else(|| url.split_once("/shorts/"))
        .map(|(_, rest)| rest)
        .or_else(|| {
            let (_, query) = url.split_once('?')?;
            query
                .split('&')
                .find_map(|kv| kv.strip_prefix("v="))
        })?;
    let id = after_host
        .split(|c: char| c == '?' || c == '&' || c == '#' || c == '/')
        .next()?;
    is_video_id(id).then_some(id)
}

/// Privacy-enhanced embed URL for a validated video id.
pub fn youtube_embed_url(id: &str) -> Option<String> {
    is_video_id(id).then(|| format!("{}{}?autoplay=1", YOUTUBE_EMBED_BASE, id))
}

pub struct PortableTextRenderer<'a> {
    theme: &'a Theme,
    images: &'a ImageUrlBuilder,
}

struct RenderState {
    out: String,
    lists: SmallVec<[OpenList; 4]>,
    code_blocks: usize,
}

impl<'a> PortableTextRenderer<'a> {
    pub fn new(theme: &'a Theme, images: &'a ImageUrlBuilder) -> Self {
        Self { theme, images }
    }

    /// Render a body given as JSON text; only the outer array must be valid.
    pub fn render_json(&self, body: &str) -> crate::Result<String> {
        let blocks: Vec<Value> = serde_json::from_str(body)?;
        Ok(self.render(&blocks))
    }

    pub fn render(&self, blocks: &[Value]) -> String {
        let mut st = RenderState {
            out: String::new(),
            lists: SmallVec::new(),
            code_blocks: 0,
        };
        for raw in blocks {
            let block = match Block::deserialize(raw) {
                Ok(b) => b,
                Err(e) => {
                    log::warn!("[content] skipping malformed block: {}", e);
                    continue;
                }
            };
            match block {
                Block::Text(tb) if tb.list_item.is_some() => self.list_item(&mut st, &tb),
                Block::Unknown => {
                    log::debug!(
                        "[content] skipping unknown block type {:?}",
                        raw.get("_type").and_then(Value::as_str)
                    );
                }
                other => {
                    close_lists(&mut st, 0);
                    match other {
                        Block::Text(tb) => self.text_block(&mut st.out, &tb),
                        Block::Image(ib) => self.image(&mut st.out, &ib),
                        Block::Code(cb) => {
                            st.code_blocks += 1;
                            self.code(&mut st.out, &cb, st.code_blocks);
                        }
                        Block::Youtube(vb) | Block::Video(vb) => self.video(&mut st.out, &vb),
                        Block::Callout(cb) => self.callout(&mut st.out, &cb),
                        Block::Cta(cb) => self.cta(&mut st.out, &cb),
                        Block::Table(tb) => self.table(&mut st.out, &tb),
                        Block::Unknown => {}
                    }
                }
            }
        }
        close_lists(&mut st, 0);
        st.out
    }

    fn text_block(&self, out: &mut String, tb: &TextBlock) {
        let inner = self.spans(tb);
        if inner.trim().is_empty() {
            return;
        }
        let t = self.theme;
        match tb.style.as_deref().unwrap_or("normal") {
            style @ ("h1" | "h2" | "h3" | "h4") => {
                let size = match style {
                    "h1" => "text-4xl mt-12 mb-6",
                    "h2" => "text-3xl mt-12 mb-6",
                    "h3" => "text-2xl mt-10 mb-4",
                    _ => "text-xl mt-8 mb-4",
                };
                let _ = write!(
                    out,
                    "<{style} class=\"{} {}\">{}</{style}>",
                    t.heading, size, inner
                );
            }
            "blockquote" => {
                let _ = write!(out, "<blockquote class=\"{}\">{}</blockquote>", t.quote, inner);
            }
            _ => {
                let _ = write!(out, "<p class=\"{}\">{}</p>", t.paragraph, inner);
            }
        }
    }

    fn list_item(&self, st: &mut RenderState, tb: &TextBlock) {
        let kind = match tb.list_item.as_deref() {
            Some("number") => ListKind::Number,
            _ => ListKind::Bullet,
        };
        let level = tb.level.unwrap_or(1).max(1);

        close_lists(st, level);
        if st.lists.len() == level && st.lists.last().map(|l| l.kind) != Some(kind) {
            close_lists(st, level - 1);
        }
        while st.lists.len() < level {
            // a nested list must sit inside an item, even when levels are skipped
            if let Some(top) = st.lists.last_mut() {
                if !top.item_open {
                    st.out.push_str("<li>");
                    top.item_open = true;
                }
            }
            let _ = write!(
                st.out,
                "<{} class=\"{} {}\">",
                kind.tag(),
                kind.list_class(),
                self.theme.list
            );
            st.lists.push(OpenList {
                kind,
                item_open: false,
            });
        }
        if let Some(top) = st.lists.last_mut() {
            if top.item_open {
                st.out.push_str("</li>");
            }
            top.item_open = true;
        }
        st.out.push_str("<li>");
        st.out.push_str(&self.spans(tb));
    }

    fn spans(&self, tb: &TextBlock) -> String {
        let defs: FnvHashMap<&str, &MarkDef> =
            tb.mark_defs.iter().map(|d| (d.key.as_str(), d)).collect();
        let mut out = String::new();
        for child in &tb.children {
            if child.kind.as_deref().is_some_and(|k| k != "span") {
                continue;
            }
            let mut closers: SmallVec<[&'static str; 4]> = SmallVec::new();
            for mark in &child.marks {
                let (open, close) = match mark.as_str() {
                    "strong" => ("<strong>".to_string(), "</strong>"),
                    "em" => ("<em>".to_string(), "</em>"),
                    "underline" => ("<u>".to_string(), "</u>"),
                    "strike-through" => ("<s>".to_string(), "</s>"),
                    "code" => (
                        format!("<code class=\"{}\">", self.theme.inline_code),
                        "</code>",
                    ),
                    key => match defs.get(key) {
                        Some(def) if def.kind == "link" => {
                            let href = safe_href(def.href.as_deref().unwrap_or("#"));
                            let target = if is_external(href) {
                                " target=\"_blank\" rel=\"noopener noreferrer\""
                            } else {
                                ""
                            };
                            (
                                format!(
                                    "<a href=\"{}\" class=\"{}\"{}>",
                                    escape(href),
                                    self.theme.link,
                                    target
                                ),
                                "</a>",
                            )
                        }
                        _ => continue,
                    },
                };
                out.push_str(&open);
                closers.push(close);
            }
            for (i, line) in child.text.split('\n').enumerate() {
                if i > 0 {
                    out.push_str("<br/>");
                }
                out.push_str(&escape(line));
            }
            for close in closers.iter().rev() {
                out.push_str(close);
            }
        }
        out
    }

    fn image(&self, out: &mut String, ib: &ImageBlock) {
        let src = match self.images.url(&ib.asset, Some(BODY_IMAGE_WIDTH)) {
            Ok(src) => src,
            Err(e) => {
                log::warn!("[content] skipping image: {}", e);
                return;
            }
        };
        let alt = ib.alt.as_deref().unwrap_or("");
        let _ = write!(
            out,
            "<figure class=\"{}\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\" class=\"w-full h-auto\"/>",
            self.theme.figure,
            escape(&src),
            escape(alt)
        );
        if let Some(caption) = ib.caption.as_deref().filter(|c| !c.is_empty()) {
            let _ = write!(
                out,
                "<figcaption class=\"font-mono text-xs p-3 opacity-70\">{}</figcaption>",
                escape(caption)
            );
        }
        out.push_str("</figure>");
    }

    fn code(&self, out: &mut String, cb: &CodeBlock, n: usize) {
        let language = cb.language.as_deref().unwrap_or("text");
        let label = cb.filename.as_deref().unwrap_or(language);
        let _ = write!(
            out,
            "<div class=\"{}\" data-code-block>\
             <div class=\"flex justify-between items-center px-4 py-2 border-b border-white/10 text-xs uppercase\">\
             <span>{}</span>\
             <button type=\"button\" class=\"font-mono uppercase\" data-copy-target=\"code-block-{n}\">Copy</button>\
             </div>\
             <pre class=\"p-4 overflow-x-auto\"><code id=\"code-block-{n}\" class=\"language-{}\">{}</code></pre>\
             </div>",
            self.theme.code_block,
            escape(label),
            escape(language),
            escape(&cb.code),
        );
    }

    fn video(&self, out: &mut String, vb: &VideoBlock) {
        let Some(id) = youtube_id(&vb.url) else {
            log::warn!("[content] skipping video with unsupported url {}", vb.url);
            return;
        };
        let title = vb.title.as_deref().unwrap_or("Embedded video");
        let _ = write!(
            out,
            "<div class=\"relative aspect-video my-10 cursor-pointer bg-black\" data-video-id=\"{id}\" \
             data-video-title=\"{title}\" role=\"button\" tabindex=\"0\" aria-label=\"Play {title}\">\
             <img src=\"https://i.ytimg.com/vi/{id}/hqdefault.jpg\" alt=\"{title}\" loading=\"lazy\" \
             class=\"absolute inset-0 w-full h-full object-cover\"/>\
             <span class=\"absolute inset-0 flex items-center justify-center text-white text-5xl\" \
             style=\"color:{accent}\">&#9654;</span></div>",
            id = id,
            title = escape(title),
            accent = self.theme.accent,
        );
    }

    fn callout(&self, out: &mut String, cb: &CalloutBlock) {
        let tone = match cb.tone.as_deref() {
            Some("warning") => "warning",
            Some("tip") => "tip",
            _ => "info",
        };
        let _ = write!(out, "<aside class=\"{} callout-{}\">", self.theme.callout, tone);
        if let Some(title) = cb.title.as_deref().filter(|t| !t.is_empty()) {
            let _ = write!(
                out,
                "<strong class=\"block font-mono uppercase text-xs mb-2\">{}</strong>",
                escape(title)
            );
        }
        let _ = write!(out, "<p>{}</p></aside>", escape(&cb.text));
    }

    fn cta(&self, out: &mut String, cb: &CtaBlock) {
        let href = safe_href(&cb.url);
        let _ = write!(out, "<div class=\"{}\">", self.theme.cta);
        if let Some(title) = cb.title.as_deref() {
            let _ = write!(out, "<h4 class=\"text-2xl mb-3\">{}</h4>", escape(title));
        }
        if let Some(text) = cb.text.as_deref() {
            let _ = write!(out, "<p class=\"mb-6 opacity-80\">{}</p>", escape(text));
        }
        let _ = write!(
            out,
            "<a href=\"{}\" class=\"{}\">{}</a></div>",
            escape(href),
            self.theme.button,
            escape(cb.button_text.as_deref().unwrap_or("Start the conversation"))
        );
    }

    fn table(&self, out: &mut String, tb: &TableBlock) {
        let Some((head, body)) = tb.rows.split_first() else {
            return;
        };
        let _ = write!(
            out,
            "<div class=\"overflow-x-auto my-8\"><table class=\"{}\"><thead><tr>",
            self.theme.table
        );
        for cell in &head.cells {
            let _ = write!(
                out,
                "<th class=\"text-left p-3 font-mono uppercase text-xs\">{}</th>",
                escape(cell)
            );
        }
        out.push_str("</tr></thead><tbody>");
        for row in body {
            out.push_str("<tr>");
            for cell in &row.cells {
                let _ = write!(out, "<td class=\"p-3 border-t\">{}</td>", escape(cell));
            }
            out.push_str("</tr>");
        }
        out.push_str("</tbody></table></div>");
    }
}

/// Close open lists until at most `depth` remain.
fn close_lists(st: &mut RenderState, depth: usize) {
    while st.lists.len() > depth {
        if let Some(list) = st.lists.pop() {
            if list.item_open {
                st.out.push_str("</li>");
            }
            let _ = write!(st.out, "</{}>", list.kind.tag());
        }
    }
}
