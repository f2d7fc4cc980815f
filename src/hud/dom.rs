//! Web HUD: mirrors [`HudState`] into elements that already exist on the page.
//!
//! Expected ids: `atom-count`, `create-molecule-btn`, `message-box`,
//! `message-text` (see `web/index.html`).

use anyhow::{anyhow, Context};
use bevy::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlElement};

use crate::app::state::AppState;
use crate::core::events::CreateMoleculeRequested;
use crate::hud::HudState;

const LOG_TARGET: &str = "hud::dom";

pub struct DomHud {
    atom_count: HtmlElement,
    create_button: HtmlButtonElement,
    message_box: HtmlElement,
    message_text: HtmlElement,
    clicks: Rc<Cell<u32>>,
    _on_click: Closure<dyn FnMut()>,
}

impl DomHud {
    pub fn bind() -> anyhow::Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| anyhow!("no document available"))?;
        let atom_count = element::<HtmlElement>(&document, "atom-count")?;
        let create_button = element::<HtmlButtonElement>(&document, "create-molecule-btn")?;
        let message_box = element::<HtmlElement>(&document, "message-box")?;
        let message_text = element::<HtmlElement>(&document, "message-text")?;

        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let on_click = Closure::<dyn FnMut()>::new(move || {
            counter.set(counter.get() + 1);
        });
        create_button
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("bind click listener: {e:?}"))?;

        Ok(Self {
            atom_count,
            create_button,
            message_box,
            message_text,
            clicks,
            _on_click: on_click,
        })
    }
}

fn element<T: JsCast>(document: &Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .with_context(|| format!("missing page element #{id}"))?
        .dyn_into::<T>()
        .map_err(|_| anyhow!("page element #{id} has an unexpected type"))
}

pub struct DomHudPlugin;

impl Plugin for DomHudPlugin {
    fn build(&self, app: &mut App) {
        match DomHud::bind() {
            Ok(hud) => {
                app.insert_non_send_resource(hud).add_systems(
                    Update,
                    (
                        forward_dom_clicks,
                        sync_dom_hud.run_if(resource_changed::<HudState>),
                    )
                        .run_if(in_state(AppState::Play)),
                );
            }
            Err(e) => error!(target: LOG_TARGET, "HUD disabled: {e:#}"),
        }
    }
}

/// Browsers never dispatch clicks on a disabled button, so every click counts.
fn forward_dom_clicks(dom: NonSend<DomHud>, mut requests: EventWriter<CreateMoleculeRequested>) {
    for _ in 0..dom.clicks.replace(0) {
        requests.write(CreateMoleculeRequested);
    }
}

fn sync_dom_hud(hud: Res<HudState>, dom: NonSend<DomHud>) {
    dom.atom_count.set_text_content(Some(&hud.count_label()));
    dom.create_button.set_disabled(!hud.create_enabled);
    dom.message_text.set_text_content(Some(&hud.message));
    let display = if hud.message_visible { "block" } else { "none" };
    if let Err(e) = dom.message_box.style().set_property("display", display) {
        warn!(target: LOG_TARGET, "message box display: {e:?}");
    }
}
