use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Canvas;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use web_sys::HtmlCanvasElement;

use crate::canvas::{CanvasSurface, WindowHost};
use crate::config::StarfieldConfig;
use crate::constants::CANVAS_STYLE;
use crate::engine::Engine;
use crate::log::debug_log;
use crate::rng::{MathRandom, RandomSource, SeededRandom};

type BrowserEngine = Engine<CanvasSurface, WindowHost>;

fn random_source(config: &StarfieldConfig) -> Box<dyn RandomSource> {
    match config.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(MathRandom),
    }
}

/// Builds and starts an engine on the canvas. None (and nothing drawn) when
/// the canvas has no 2D context or the window is unavailable.
fn mount(canvas: HtmlCanvasElement, config: StarfieldConfig) -> Option<BrowserEngine> {
    let Some(surface) = CanvasSurface::new(canvas) else {
        debug_log("galaxy: no 2d context, starfield disabled");
        return None;
    };
    let host = Rc::new(WindowHost::new()?);
    let rng = random_source(&config);
    let mut engine = Engine::new(surface, host, config, rng);
    engine.start().then_some(engine)
}

/// Full-viewport animated starfield behind the page content.
#[component]
pub fn Galaxy(#[prop(optional)] config: Option<StarfieldConfig>) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();
    let config = config.unwrap_or_default();

    let engine: Rc<RefCell<Option<BrowserEngine>>> = Rc::new(RefCell::new(None));
    let engine_for_mount = SendWrapper::new(engine.clone());
    let engine_for_cleanup = SendWrapper::new(engine);

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else { return };
        if engine_for_mount.borrow().is_some() {
            return;
        }
        *engine_for_mount.borrow_mut() = mount(canvas, config.clone());
    });

    on_cleanup(move || {
        if let Some(mut engine) = engine_for_cleanup.borrow_mut().take() {
            engine.stop();
        }
    });

    view! {
        <canvas node_ref=canvas_ref class="galaxy" style=CANVAS_STYLE aria-hidden="true"></canvas>
    }
}
