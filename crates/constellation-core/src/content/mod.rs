//! Blog content: the CMS document model and its rendering to themed HTML.

pub mod html;
pub mod image;
pub mod portable_text;
pub mod theme;

pub use image::{AssetRef, ImageUrlBuilder};
pub use portable_text::{youtube_embed_url, youtube_id, PortableTextRenderer};
pub use theme::{select_theme, Theme, ThemeName};

use html::escape;
use serde::Deserialize;
use serde_json::Value;
use std::fmt::Write;

pub const NOT_FOUND_TITLE: &str = "DOSSIER NOT FOUND";
pub const NO_POSTS_TEXT: &str = "No posts published yet. Check back soon.";

/// Slugs arrive either as `{ "current": "..." }` or already flattened.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Slug {
    Plain(String),
    Document { current: String },
}

impl Slug {
    pub fn as_str(&self) -> &str {
        match self {
            Slug::Plain(s) => s,
            Slug::Document { current } => current,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ImageField {
    pub asset: AssetRef,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedPost {
    pub title: String,
    pub slug: Slug,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub title: String,
    pub slug: Slug,
    #[serde(default)]
    pub main_image: Option<ImageField>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub body: Vec<Value>,
    #[serde(default)]
    pub service_pillar: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub related_posts: Vec<RelatedPost>,
}

impl Post {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn theme(&self) -> ThemeName {
        select_theme(self.service_pillar.as_deref())
    }
}

/// `2024-03-09T10:00:00Z` → `2024.03.09`. Anything else is shown as-is.
pub fn format_date(iso: &str) -> String {
    match iso.get(..10) {
        Some(day) if day.as_bytes().get(4) == Some(&b'-') => day.replace('-', "."),
        _ => iso.to_string(),
    }
}

/// Full article markup, or the not-found state for a missing slug.
pub fn render_post_page(post: Option<&Post>, images: &ImageUrlBuilder) -> String {
    let Some(post) = post else {
        return render_not_found();
    };
    let theme = post.theme().theme();
    let mut out = String::new();
    let _ = write!(
        out,
        "<article data-theme=\"{}\"><header class=\"mb-12\">",
        theme.name
    );
    if let Some(pillar) = post.service_pillar.as_deref() {
        let _ = write!(
            out,
            "<span class=\"font-mono text-xs uppercase\" style=\"color:{}\">{}</span>",
            theme.accent,
            escape(pillar)
        );
    }
    let _ = write!(
        out,
        "<h1 class=\"{} text-5xl mt-4 mb-6\">{}</h1>",
        theme.heading,
        escape(&post.title)
    );
    let mut meta: Vec<String> = Vec::new();
    if let Some(date) = post.published_at.as_deref() {
        meta.push(format_date(date));
    }
    if let Some(author) = &post.author {
        meta.push(author.name.clone());
    }
    if !meta.is_empty() {
        let _ = write!(
            out,
            "<p class=\"font-mono text-xs uppercase opacity-60\">{}</p>",
            escape(&meta.join(" / "))
        );
    }
    if !post.tags.is_empty() {
        out.push_str("<ul class=\"flex flex-wrap gap-2 mt-4\">");
        for tag in &post.tags {
            let _ = write!(out, "<li class=\"{}\">{}</li>", theme.tag, escape(tag));
        }
        out.push_str("</ul>");
    }
    out.push_str("</header>");

    if let Some(main) = &post.main_image {
        match images.url(&main.asset, Some(portable_text::BODY_IMAGE_WIDTH)) {
            Ok(src) => {
                let _ = write!(
                    out,
                    "<img src=\"{}\" alt=\"{}\" class=\"w-full h-auto mb-12\"/>",
                    escape(&src),
                    escape(main.alt.as_deref().unwrap_or(&post.title))
                );
            }
            Err(e) => log::warn!("[content] main image skipped: {}", e),
        }
    }

    out.push_str("<div class=\"prose-body\">");
    out.push_str(&PortableTextRenderer::new(theme, images).render(&post.body));
    out.push_str("</div>");

    if !post.related_posts.is_empty() {
        let _ = write!(
            out,
            "<aside class=\"mt-16\"><h2 class=\"{} text-2xl mb-6\">Related</h2><ul>",
            theme.heading
        );
        for related in &post.related_posts {
            let _ = write!(
                out,
                "<li><a href=\"/blog/{}\" class=\"{}\">{}</a></li>",
                escape(related.slug.as_str()),
                theme.link,
                escape(&related.title)
            );
        }
        out.push_str("</ul></aside>");
    }
    out.push_str("</article>");
    out
}

pub fn render_not_found() -> String {
    format!(
        "<section class=\"py-32 text-center\"><h1 class=\"font-mono text-4xl\">{}</h1>\
         <a href=\"/blog\" class=\"underline\">Back to the archive</a></section>",
        NOT_FOUND_TITLE
    )
}

/// Static text shown when the post list could not be fetched.
pub fn render_post_list_empty() -> String {
    format!("<p class=\"font-mono text-sm opacity-60\">{}</p>", NO_POSTS_TEXT)
}
