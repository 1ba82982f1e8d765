//! Sky Flap entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlImageElement, KeyboardEvent, MouseEvent, TouchEvent};

    use sky_flap::Game;
    use sky_flap::platform::{CanvasSurface, load_sprites, load_tuning};
    use sky_flap::renderer::Sprites;

    /// Everything the frame callback and input handlers share
    struct App {
        game: Game,
        surface: CanvasSurface,
        sprites: Sprites<HtmlImageElement>,
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Sky Flap starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let tuning = load_tuning(&document);
        for warning in tuning.validate() {
            log::warn!("Tuning: {}", warning);
        }

        let surface = CanvasSurface::new(&canvas, &tuning).expect("no 2d context");

        // One gate for all sprites instead of chained onload callbacks
        let sprites = load_sprites().await;
        if !sprites.all_ready() {
            log::warn!("Some sprites are missing, drawing placeholders");
        }

        let seed = js_sys::Date::now() as u64;
        let game = match Game::new(seed, tuning) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Cannot start game: {:#}", e);
                return;
            }
        };
        let app = Rc::new(RefCell::new(App {
            game,
            surface,
            sprites,
        }));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, app.clone());

        let start = app.borrow_mut().game.start();
        if start {
            request_animation_frame(app);
        }

        log::info!("Sky Flap running!");
    }

    /// Flap, or restart after a game over and resume the loop
    fn on_activate(app: &Rc<RefCell<App>>) {
        let resume = app.borrow_mut().game.activate();
        if resume {
            request_animation_frame(app.clone());
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse click
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                on_activate(&app);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                // Suppress the synthetic mousedown that would flap twice
                event.prevent_default();
                on_activate(&app);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.repeat() {
                    return;
                }
                match event.key().as_str() {
                    " " | "ArrowUp" => {
                        event.prevent_default();
                        on_activate(&app);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let again = {
            let mut a = app.borrow_mut();
            let App {
                game,
                surface,
                sprites,
            } = &mut *a;
            game.frame(surface, &*sprites)
        };

        if again {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use sky_flap::game::{Game, autopilot_wants_flap};
    use sky_flap::renderer::{RecordingSurface, Sprites, StaticImage};
    use sky_flap::tuning::Tuning;

    /// Headless runs stop here even if the autopilot never crashes
    const MAX_TICKS: u64 = 60 * 60 * 5;

    env_logger::init();
    log::info!("Sky Flap (native) starting...");
    log::info!("Native mode is a headless autopilot run - serve the wasm build for the playable game");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading tuning file {path}"))?;
            Tuning::from_json(&json).with_context(|| format!("loading tuning file {path}"))?
        }
        None => Tuning::default(),
    };
    for warning in tuning.validate() {
        log::warn!("Tuning: {}", warning);
    }

    let seed = match args.next() {
        Some(s) => s.parse::<u64>().with_context(|| format!("invalid seed {s:?}"))?,
        None => 0x5eed,
    };
    log::info!("Game initialized with seed: {}", seed);

    // No art on the native side: every sprite takes its fallback path
    let sprites = Sprites {
        bird: StaticImage::broken("bird"),
        ground: StaticImage::broken("ground"),
        cloud: StaticImage::broken("cloud"),
    };
    let mut surface = RecordingSurface::default();
    let mut game = Game::new(seed, tuning)?;

    let mut running = game.start();
    let mut flaps = 0u32;
    while running && game.state.time_ticks < MAX_TICKS {
        if autopilot_wants_flap(&game.state) {
            game.activate();
            flaps += 1;
        }
        surface.reset();
        running = game.frame(&mut surface, &sprites);
    }

    println!(
        "score {} after {} ticks ({} flaps, {} draw calls in the last frame){}",
        game.state.score,
        game.state.time_ticks,
        flaps,
        surface.commands.len(),
        if game.state.is_over() { "" } else { " - stopped at tick limit" }
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
