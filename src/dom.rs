//! Browser-side collaborators: everything that actually touches the page
//! lives here, behind the traits in `render.rs`. The core never imports
//! this module.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Storage};

use crate::events::emit_theme_event;
use crate::render::{
    Block, GraphEdge, GraphNode, GraphRenderer, Line, Navigator, OutputSink, Renderable, Style,
    ThemeSurface,
};
use crate::theme::Theme;
use crate::vfs::FileKind;

/// localStorage key the theme survives reloads under.
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn style_class(style: Style) -> &'static str {
    match style {
        Style::Plain => "",
        Style::Info => "info",
        Style::Success => "success",
        Style::Warning => "warning",
        Style::Error => "error",
    }
}

fn icon_class(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Markdown => "icon fas fa-file-alt",
        FileKind::Json => "icon fas fa-file-code",
        FileKind::Binary => "icon fas fa-file-pdf",
        FileKind::Plain => "icon fas fa-file-text",
    }
}

/// Renders into `#output` and scrolls `#terminal`, the same two elements
/// the page markup provides.
pub struct DomSink {
    document: Document,
    output: Element,
    scroller: Element,
}

impl DomSink {
    pub fn attach(output_id: &str, scroller_id: &str) -> Result<Self, JsValue> {
        let document = document()?;
        let output = document
            .get_element_by_id(output_id)
            .ok_or_else(|| JsValue::from_str("output element not found"))?;
        let scroller = document
            .get_element_by_id(scroller_id)
            .ok_or_else(|| JsValue::from_str("terminal element not found"))?;
        Ok(Self {
            document,
            output,
            scroller,
        })
    }

    fn make(&self, tag: &str, class: &str) -> Option<Element> {
        let el = self.document.create_element(tag).ok()?;
        if !class.is_empty() {
            el.set_class_name(class);
        }
        Some(el)
    }

    fn push(&self, el: &Element) {
        if self.output.append_child(el).is_err() {
            web_sys::console::warn_1(&"[shell] failed to append output line".into());
        }
    }

    fn append_line(&self, line: &Line) {
        let class = format!("output-line {}", style_class(line.style));
        if let Some(el) = self.make("div", class.trim()) {
            el.set_text_content(Some(&line.text));
            self.push(&el);
        }
    }

    fn append_block(&self, block: &Block) {
        let Some(container) = self.make("div", "output-line") else {
            return;
        };
        match block {
            Block::CommandEcho { prompt, command } => {
                container.set_class_name("command-echo");
                if let Some(p) = self.make("span", "prompt") {
                    p.set_text_content(Some(prompt));
                    let _ = container.append_child(&p);
                }
                if let Some(c) = self.make("span", "command") {
                    c.set_text_content(Some(command));
                    let _ = container.append_child(&c);
                }
            }
            Block::FileListing { entries } => {
                if let Some(list) = self.make("div", "file-list") {
                    for entry in entries {
                        let Some(item) = self.make("div", "file-item") else {
                            continue;
                        };
                        if let Some(icon) = self.make("i", icon_class(entry.kind)) {
                            let _ = item.append_child(&icon);
                        }
                        if let Some(name) = self.make("span", "name") {
                            name.set_text_content(Some(&entry.name));
                            let _ = item.append_child(&name);
                        }
                        let _ = list.append_child(&item);
                    }
                    let _ = container.append_child(&list);
                }
            }
            Block::ContactCard { channels } => {
                if let Some(card) = self.make("div", "contact-container") {
                    for channel in channels {
                        let Some(item) = self.make("div", "contact-item") else {
                            continue;
                        };
                        if let Some(label) = self.make("strong", "") {
                            label.set_text_content(Some(&format!("{}: ", channel.label)));
                            let _ = item.append_child(&label);
                        }
                        if let Some(link) = self.make("a", "contact-link") {
                            let _ = link.set_attribute("href", &channel.link);
                            let _ = link.set_attribute("target", "_blank");
                            link.set_text_content(Some(&channel.value));
                            let _ = item.append_child(&link);
                        }
                        let _ = card.append_child(&item);
                    }
                    let _ = container.append_child(&card);
                }
            }
            Block::SkillChart { categories } => {
                if let Some(chart) = self.make("div", "skills-container") {
                    for category in categories {
                        let Some(cat) = self.make("div", "skill-category") else {
                            continue;
                        };
                        if let Some(header) = self.make("div", "skill-category-header") {
                            header.set_text_content(Some(&category.name));
                            let _ = cat.append_child(&header);
                        }
                        if let Some(list) = self.make("div", "skill-list") {
                            for skill in &category.skills {
                                let Some(item) = self.make("div", "skill-item") else {
                                    continue;
                                };
                                if let Some(name) = self.make("span", "skill-name") {
                                    name.set_text_content(Some(&skill.name));
                                    let _ = item.append_child(&name);
                                }
                                if let Some(bar) = self.make("div", "skill-bar") {
                                    if let Some(progress) = self.make("div", "skill-progress") {
                                        let _ = progress.set_attribute(
                                            "style",
                                            &format!("width: {}%", skill.level),
                                        );
                                        let _ = bar.append_child(&progress);
                                    }
                                    let _ = item.append_child(&bar);
                                }
                                if let Some(pct) = self.make("span", "skill-percentage") {
                                    pct.set_text_content(Some(&format!("{}%", skill.level)));
                                    let _ = item.append_child(&pct);
                                }
                                let _ = list.append_child(&item);
                            }
                            let _ = cat.append_child(&list);
                        }
                        let _ = chart.append_child(&cat);
                    }
                    let _ = container.append_child(&chart);
                }
            }
            Block::SkillGraph { container_id, .. } => {
                if let Some(hint) = self.make("div", "constellation-hint") {
                    hint.set_text_content(Some(
                        "Interactive skill constellation // Click nodes for details // Drag to explore",
                    ));
                    let _ = container.append_child(&hint);
                }
                if let Some(target) = self.make("div", "constellation-container") {
                    target.set_id(container_id);
                    let _ = container.append_child(&target);
                }
            }
        }
        self.push(&container);
    }
}

impl OutputSink for DomSink {
    fn append(&mut self, renderable: Renderable) {
        match &renderable {
            Renderable::Text(line) => self.append_line(line),
            Renderable::Block(block) => self.append_block(block),
        }
    }

    fn clear(&mut self) {
        self.output.set_inner_html("");
    }

    fn scroll_to_end(&mut self) {
        self.scroller.set_scroll_top(self.scroller.scroll_height());
    }
}

/// Applies the theme to `<html data-theme=...>`, persists it, and
/// announces the change for the cosmetic scripts.
pub struct DomThemeSurface {
    document: Document,
}

impl DomThemeSurface {
    pub fn new() -> Result<Self, JsValue> {
        Ok(Self {
            document: document()?,
        })
    }

    /// Theme persisted by a previous visit, if any.
    pub fn stored_theme() -> Option<Theme> {
        let stored = local_storage()?.get_item(THEME_STORAGE_KEY).ok()??;
        Theme::from_name(&stored)
    }
}

impl ThemeSurface for DomThemeSurface {
    fn set_theme(&self, theme: Theme) {
        if let Some(root) = self.document.document_element() {
            let _ = root.set_attribute("data-theme", theme.name());
        }
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(THEME_STORAGE_KEY, theme.name());
        }
        emit_theme_event(theme.name());
    }
}

pub struct DomNavigator;

impl Navigator for DomNavigator {
    fn navigate_to(&self, url: &str) {
        let Some(win) = web_sys::window() else {
            return;
        };
        if let Err(e) = win.location().set_href(url) {
            web_sys::console::error_2(&"[shell] navigation failed:".into(), &e);
        }
    }
}

/// The force-graph collaborator. The page is expected to expose
/// `window.renderSkillConstellation(nodes, edges, containerId)` on top of
/// d3; when either global is missing the shell falls back to the list
/// renderer.
pub struct D3Graph {
    render_fn: js_sys::Function,
}

impl D3Graph {
    pub fn detect() -> Option<D3Graph> {
        let win = web_sys::window()?;
        let d3 = js_sys::Reflect::get(win.as_ref(), &"d3".into()).ok()?;
        if d3.is_undefined() || d3.is_null() {
            return None;
        }
        let glue = js_sys::Reflect::get(win.as_ref(), &"renderSkillConstellation".into()).ok()?;
        let render_fn = glue.dyn_into::<js_sys::Function>().ok()?;
        Some(D3Graph { render_fn })
    }
}

impl GraphRenderer for D3Graph {
    fn render(&self, nodes: &[GraphNode], edges: &[GraphEdge], container_id: &str) {
        let nodes = serde_wasm_bindgen::to_value(nodes).unwrap_or(JsValue::NULL);
        let edges = serde_wasm_bindgen::to_value(edges).unwrap_or(JsValue::NULL);
        if let Err(e) = self.render_fn.call3(
            &JsValue::NULL,
            &nodes,
            &edges,
            &JsValue::from_str(container_id),
        ) {
            web_sys::console::error_2(&"[shell] constellation render failed:".into(), &e);
        }
    }
}
