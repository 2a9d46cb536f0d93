use crate::constants::*;
use crate::dom;
use anyhow::anyhow;
use constellation_core::content::html::escape;
use constellation_core::content::{
    render_not_found, render_post_list_empty, render_post_page, select_theme, youtube_embed_url,
    ImageUrlBuilder, Post, PortableTextRenderer,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

fn image_builder(cdn_json: &str) -> anyhow::Result<ImageUrlBuilder> {
    Ok(serde_json::from_str(cdn_json)?)
}

/// Full article markup for a post document. `null` renders the not-found state.
#[wasm_bindgen(js_name = renderPost)]
pub fn render_post(post_json: &str, cdn_json: &str) -> Result<String, JsValue> {
    let images = image_builder(cdn_json).map_err(to_js)?;
    if post_json.trim() == "null" {
        return Ok(render_not_found());
    }
    let post = Post::from_json(post_json).map_err(|e| to_js(e.into()))?;
    Ok(render_post_page(Some(&post), &images))
}

/// Just the body blocks, themed by the post's service pillar.
#[wasm_bindgen(js_name = renderBody)]
pub fn render_body(
    body_json: &str,
    service_pillar: Option<String>,
    cdn_json: &str,
) -> Result<String, JsValue> {
    let images = image_builder(cdn_json).map_err(to_js)?;
    let theme = select_theme(service_pillar.as_deref()).theme();
    PortableTextRenderer::new(theme, &images)
        .render_json(body_json)
        .map_err(|e| to_js(e.into()))
}

#[wasm_bindgen(js_name = themeFor)]
pub fn theme_for(service_pillar: Option<String>) -> String {
    select_theme(service_pillar.as_deref()).to_string()
}

#[wasm_bindgen(js_name = renderNoPosts)]
pub fn render_no_posts() -> String {
    render_post_list_empty()
}

/// Bind copy buttons and video facades inside rendered rich text. Elements
/// bound by an earlier call are skipped.
#[wasm_bindgen(js_name = hydrateRichText)]
pub fn hydrate_rich_text(container_id: &str) -> Result<(), JsValue> {
    let document = dom::window_document().ok_or_else(|| to_js(anyhow!("no document")))?;
    let root = document
        .get_element_by_id(container_id)
        .ok_or_else(|| to_js(anyhow!("missing #{}", container_id)))?;

    let buttons = dom::query_all(&root, COPY_BUTTON_SELECTOR);
    let facades = dom::query_all(&root, VIDEO_FACADE_SELECTOR);
    for button in buttons {
        wire_copy_button(&document, button);
    }
    for facade in facades {
        wire_video_facade(facade);
    }
    Ok(())
}

fn wire_copy_button(document: &web::Document, button: web::Element) {
    let Some(target_id) = button.get_attribute(COPY_TARGET_ATTR) else {
        return;
    };
    _ = button.set_attribute(HYDRATED_ATTR, "");
    let document = document.clone();
    let button_for_click = button.clone();
    dom::add_click_listener(&button, move || {
        let text = document
            .get_element_by_id(&target_id)
            .and_then(|el| el.text_content())
            .unwrap_or_default();
        let button = button_for_click.clone();
        match write_clipboard(&text) {
            Ok(promise) => spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => flash_copied(&button),
                    Err(e) => log::warn!("[content] clipboard write rejected: {:?}", e),
                }
            }),
            Err(e) => log::warn!("[content] clipboard unavailable: {:#}", e),
        }
    });
}

fn write_clipboard(text: &str) -> anyhow::Result<js_sys::Promise> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .map_err(|e| anyhow!("{:?}", e))?;
    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| anyhow!("navigator.clipboard.writeText missing"))?;
    write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| anyhow!("writeText did not return a promise"))
}

fn flash_copied(button: &web::Element) {
    button.set_text_content(Some(COPIED_LABEL));
    let Some(window) = web::window() else {
        return;
    };
    let button = button.clone();
    let restore = Closure::once_into_js(move || {
        button.set_text_content(Some(COPY_LABEL));
    });
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        restore.unchecked_ref(),
        COPY_FEEDBACK_MS,
    );
}

fn wire_video_facade(facade: web::Element) {
    _ = facade.set_attribute(HYDRATED_ATTR, "");
    let facade_for_click = facade.clone();
    dom::add_click_listener(&facade, move || {
        // the attribute is removed once loaded, so later clicks reach the player
        let Some(id) = facade_for_click.get_attribute(VIDEO_ID_ATTR) else {
            return;
        };
        let Some(src) = youtube_embed_url(&id) else {
            log::warn!("[content] refusing to embed video id {:?}", id);
            return;
        };
        let title = facade_for_click
            .get_attribute(VIDEO_TITLE_ATTR)
            .unwrap_or_default();
        facade_for_click.set_inner_html(&format!(
            "<iframe src=\"{}\" title=\"{}\" class=\"absolute inset-0 w-full h-full\" \
             allow=\"accelerometer; autoplay; encrypted-media; picture-in-picture\" \
             allowfullscreen></iframe>",
            escape(&src),
            escape(&title)
        ));
        _ = facade_for_click.remove_attribute(VIDEO_ID_ATTR);
        _ = facade_for_click.remove_attribute("role");
    });
}
