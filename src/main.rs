//! Otter River entry point
//!
//! Wires browser input and the DOM HUD to the simulation. Rendering itself is
//! the host page's job: each frame the external renderer walks
//! `state.scene.draw_list()` and issues its own render(scene, camera) call.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlInputElement, KeyboardEvent, TouchEvent};

    use otter_river::Leaderboard;
    use otter_river::consts::*;
    use otter_river::hud;
    use otter_river::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        leaderboard: Leaderboard,
        input: TickInput,
        accumulator: f32,
        last_time: f64,
        score_submitted: bool,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(seed),
                leaderboard: Leaderboard::load(),
                input: TickInput::default(),
                accumulator: 0.0,
                last_time: 0.0,
                score_submitted: false,
            }
        }

        /// Run simulation ticks for one frame
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &self.input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;

                for event in &self.state.events {
                    match event {
                        GameEvent::LevelUp { level } => {
                            log::info!("Level {level}, river speeding up");
                        }
                        GameEvent::GameOver { score } => {
                            log::info!("Game over at {score} points");
                        }
                        _ => {}
                    }
                }
            }
        }

        /// Refresh HUD text and overlays in the DOM
        fn update_hud(&self, document: &Document) {
            set_text(document, "hud-score", &hud::score_text(&self.state));
            set_text(document, "hud-lives", &hud::lives_text(&self.state));
            set_text(document, "hud-level", &hud::level_text(&self.state));
            set_text(document, "hud-timer", &hud::timer_text(&self.state));
            set_text(document, "hud-date", &hud::date_text());

            // Level-up banner with its fade tail
            if let Some(el) = document.get_element_by_id("level-banner") {
                match hud::banner_text(&self.state) {
                    Some(text) => {
                        el.set_text_content(Some(&text));
                        let _ = el.set_attribute(
                            "style",
                            &format!("opacity:{:.2}", hud::banner_opacity(&self.state)),
                        );
                        let _ = el.set_attribute("class", "banner");
                    }
                    None => {
                        let _ = el.set_attribute("class", "banner hidden");
                    }
                }
            }

            let overlays = hud::overlays(self.state.phase);
            set_visible(document, "start-screen", overlays.start);
            set_visible(document, "game-over", overlays.game_over);

            if overlays.game_over {
                set_text(document, "final-score", &hud::score_text(&self.state));
            }
        }

        fn restart(&mut self, seed: u64) {
            self.state.restart(seed);
            self.input = TickInput::default();
            self.accumulator = 0.0;
            self.score_submitted = false;
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if visible { "overlay" } else { "overlay hidden" });
        }
    }

    /// Rebuild a leaderboard list element from the top `n` entries
    fn render_leaderboard(document: &Document, leaderboard: &Leaderboard, id: &str, n: usize) {
        if let Some(el) = document.get_element_by_id(id) {
            let items: String = leaderboard
                .render_top(n)
                .iter()
                .map(|line| format!("<li>{line}</li>"))
                .collect();
            el.set_inner_html(&items);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Otter River starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Session seeded with {}", seed);

        {
            let g = game.borrow();
            render_leaderboard(&document, &g.leaderboard, "leaderboard-preview", 5);
            render_leaderboard(&document, &g.leaderboard, "leaderboard-list", 10);
        }

        setup_keyboard(game.clone());
        setup_touch_buttons(&document, game.clone());
        setup_buttons(&document, game.clone());

        request_animation_frame(game);

        log::info!("Otter River running!");
    }

    /// Map a key name onto a directional flag; returns false for other keys
    fn apply_key(input: &mut TickInput, key: &str, pressed: bool) -> bool {
        match key {
            "ArrowUp" | "w" | "W" => input.up = pressed,
            "ArrowDown" | "s" | "S" => input.down = pressed,
            "ArrowLeft" | "a" | "A" => input.left = pressed,
            "ArrowRight" | "d" | "D" => input.right = pressed,
            _ => return false,
        }
        true
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                if apply_key(&mut g.input, event.key().as_str(), true) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                apply_key(&mut g.input, event.key().as_str(), false);
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// On-screen directional buttons set the same four flags as the keyboard
    fn setup_touch_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        type Setter = fn(&mut TickInput, bool);
        const BUTTONS: [(&str, Setter); 4] = [
            ("btn-up", |input, held| input.up = held),
            ("btn-down", |input, held| input.down = held),
            ("btn-left", |input, held| input.left = held),
            ("btn-right", |input, held| input.right = held),
        ];

        for (id, setter) in BUTTONS {
            let Some(button) = document.get_element_by_id(id) else {
                continue;
            };

            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    setter(&mut game.borrow_mut().input, true);
                });
                let _ = button.add_event_listener_with_callback(
                    "touchstart",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }

            {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    setter(&mut game.borrow_mut().input, false);
                });
                let _ = button.add_event_listener_with_callback(
                    "touchend",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
        }
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        // Start
        if let Some(btn) = document.get_element_by_id("start-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().state.start();
                log::info!("Run started");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Restart
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let seed = js_sys::Date::now() as u64;
                game.borrow_mut().restart(seed);
                log::info!("Run restarted with seed {}", seed);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Submit score from the name input
        if let Some(btn) = document.get_element_by_id("submit-score-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                if g.state.phase != GamePhase::GameOver || g.score_submitted {
                    return;
                }

                let document = web_sys::window()
                    .and_then(|w| w.document())
                    .expect("no document");
                let name = document
                    .get_element_by_id("name-input")
                    .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                    .map(|input| input.value())
                    .unwrap_or_default();

                let score = g.state.score;
                let rank = g.leaderboard.submit(&name, score);
                g.leaderboard.save();
                g.score_submitted = true;
                log::info!("Score {} submitted (rank {:?})", score, rank);

                render_leaderboard(&document, &g.leaderboard, "leaderboard-preview", 5);
                render_leaderboard(&document, &g.leaderboard, "leaderboard-list", 10);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);

            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.update_hud(&document);
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use otter_river::consts::SIM_DT;
    use otter_river::sim::{GameState, TickInput, tick};

    env_logger::init();
    log::info!("Otter River (native) starting...");

    // Headless demo: drift unattended for a minute and report what happened
    let mut state = GameState::new(0xa11d);
    state.start();
    let input = TickInput::default();
    for _ in 0..(60.0 / SIM_DT) as u32 {
        tick(&mut state, &input, SIM_DT);
    }

    println!(
        "after 60s adrift: phase {:?}, score {}, lives {}, level {}",
        state.phase, state.score, state.lives, state.level
    );
    println!(
        "{} obstacles and {} collectibles active, {} draw instances for the renderer",
        state.obstacles.len(),
        state.collectibles.len(),
        state.scene.draw_list().len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
