//! Main egui application — wires ports, controller and flow together.

use std::rc::Rc;

use egui::{self, CentralPanel};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use avatar_core::event_bus::EventBus;
use avatar_core::image_share::ImageShareFlow;
use avatar_core::ports::ConversationStorePort;
use avatar_core::session::SessionController;
use avatar_platform::broker::BrokerClient;
use avatar_platform::describer::DescriberClient;
use avatar_platform::store::RestConversationStore;
use avatar_platform::transport::SdkTransport;
use avatar_types::config::ClientConfig;
use avatar_ui::panels::image::{preview_modal, ImageAction};
use avatar_ui::panels::stage::{stage_panel, StageAction};
use avatar_ui::state::UiState;
use avatar_ui::theme;

/// Owner id used until real authentication exists; the store only needs it
/// for bookkeeping.
const ANONYMOUS_OWNER: &str = "00000000-0000-0000-0000-000000000000";
const CONVERSATION_TITLE: &str = "Avatar Voice Conversation";
/// Hidden `<input type="file">` in index.html used for image selection.
const IMAGE_INPUT_ID: &str = "avatar-image-input";

/// The main application state
pub struct AvatarApp {
    ui_state: UiState,
    config: ClientConfig,
    events: EventBus,
    session: Rc<SessionController>,
    flow: Rc<ImageShareFlow>,
    store: Rc<dyn ConversationStorePort>,
    first_frame: bool,
}

impl AvatarApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = config_from_window();
        let events = EventBus::new();

        let broker = Rc::new(BrokerClient::new(config.services.clone()));
        let transport = Rc::new(SdkTransport::new(config.services.timeout_ms));
        let describer = Rc::new(DescriberClient::new(config.services.clone()));
        let store: Rc<dyn ConversationStorePort> =
            Rc::new(RestConversationStore::new(config.services.clone()));

        let session = Rc::new(SessionController::new(broker, transport, events.clone()));
        let flow = Rc::new(ImageShareFlow::new(describer, events.clone()));

        install_file_listener(flow.clone());
        Self::start_conversation(store.clone(), events.clone());

        Self {
            ui_state: UiState::new(),
            config,
            events,
            session,
            flow,
            store,
            first_frame: true,
        }
    }

    /// Create a fresh conversation record (async, fire-and-forget).
    /// Bookkeeping only: failures never affect the session.
    fn start_conversation(store: Rc<dyn ConversationStorePort>, events: EventBus) {
        wasm_bindgen_futures::spawn_local(async move {
            match store
                .create_conversation(ANONYMOUS_OWNER, CONVERSATION_TITLE)
                .await
            {
                Ok(record) => {
                    log::info!("conversation {} created", record.id);
                    events.emit(avatar_types::event::SessionEvent::ConversationStarted {
                        id: record.id,
                    });
                }
                Err(e) => log::warn!("conversation create failed: {}", e),
            }
        });
    }

    fn dispatch_connect(&mut self, ctx: &egui::Context) {
        self.ui_state.session_requested = true;
        let session = self.session.clone();
        let surface_id = self.config.surface_id.clone();
        let persona = self.config.persona.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = session.connect(&surface_id, Some(persona)).await {
                log::error!("connect failed: {}", e);
            }
            ctx.request_repaint();
        });
    }

    fn dispatch_end_session(&self, ctx: &egui::Context) {
        let session = self.session.clone();
        let flow = self.flow.clone();
        let store = self.store.clone();
        let events = self.events.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            session.disconnect().await;
            flow.discard_pending();
            // A fresh record for the next session, like on startup.
            Self::start_conversation(store, events);
            ctx.request_repaint();
        });
    }

    fn dispatch_share_image(&self, ctx: &egui::Context) {
        let session = self.session.clone();
        let flow = self.flow.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            flow.share_image(&session).await;
            ctx.request_repaint();
        });
    }
}

impl eframe::App for AvatarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain events from the session core
        let events = self.events.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        // The pending preview lives in the flow; mirror it for rendering.
        self.ui_state.preview = self.flow.pending();

        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        CentralPanel::default().show(ctx, |ui| {
            match stage_panel(ui, &self.ui_state) {
                StageAction::StartSession => self.dispatch_connect(ctx),
                StageAction::EndSession => self.dispatch_end_session(ctx),
                StageAction::PickImage => open_file_picker(),
                StageAction::None => {}
            }
        });

        if let Some(pending) = self.ui_state.preview.clone() {
            match preview_modal(ctx, &pending, self.ui_state.is_busy()) {
                ImageAction::Share => self.dispatch_share_image(ctx),
                ImageAction::Cancel => self.flow.discard_pending(),
                ImageAction::None => {}
            }
        }
    }
}

/// Read service endpoints from globals set by index.html. Explicit
/// configuration: nothing else in the app touches the environment.
fn config_from_window() -> ClientConfig {
    let mut config = ClientConfig::default();
    let Some(window) = web_sys::window() else {
        return config;
    };

    if let Some(base_url) = string_global(&window, "AVATAR_BASE_URL") {
        config.services.base_url = base_url;
    } else {
        log::warn!("AVATAR_BASE_URL not set; remote calls will fail");
    }
    if let Some(anon_key) = string_global(&window, "AVATAR_ANON_KEY") {
        config.services.anon_key = anon_key;
    } else {
        log::warn!("AVATAR_ANON_KEY not set; remote calls will fail");
    }
    config
}

fn string_global(window: &web_sys::Window, name: &str) -> Option<String> {
    js_sys::Reflect::get(window, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_string())
        .filter(|value| !value.is_empty())
}

/// Trigger the hidden DOM file input.
fn open_file_picker() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    match document.get_element_by_id(IMAGE_INPUT_ID) {
        Some(element) => {
            if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
                element.click();
            }
        }
        None => log::warn!("file input #{} not found", IMAGE_INPUT_ID),
    }
}

/// Forward file-input changes into the image share flow.
fn install_file_listener(flow: Rc<ImageShareFlow>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(IMAGE_INPUT_ID) else {
        log::warn!("file input #{} not found; image sharing disabled", IMAGE_INPUT_ID);
        return;
    };
    let Ok(input) = element.dyn_into::<web_sys::HtmlInputElement>() else {
        log::warn!("#{} is not a file input", IMAGE_INPUT_ID);
        return;
    };

    let input_for_handler = input.clone();
    let onchange = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        let file = input_for_handler.files().and_then(|list| list.get(0));
        // Allow re-selecting the same file later.
        input_for_handler.set_value("");

        let Some(file) = file else { return };
        let flow = flow.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match avatar_platform::files::read_candidate(&file).await {
                Ok(candidate) => flow.select_image(candidate),
                Err(e) => log::warn!("failed to read selected file: {}", e),
            }
        });
    }) as Box<dyn FnMut(web_sys::Event)>);

    input.set_onchange(Some(onchange.as_ref().unchecked_ref()));
    onchange.forget();
}
