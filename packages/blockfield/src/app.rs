//! Top-level state machine: title, main menu, field, pause.
//!
//! Each game state is a variant holding its own data, and transitions are
//! values: `App::frame` consumes the app and returns the successor, or
//! `None` to quit. The pause state owns the suspended field session so the
//! renderer can keep drawing the frozen world under the menu.

use crate::{
    field::Field,
    input::{Button, InputFrame},
    menu::{Menu, MenuResult},
    scene::Scene,
    settings::Settings,
};
use rand::prelude::*;


const MAIN_MENU_ITEMS: &[&str] = &["Start Game", "Quit"];
const MAIN_MENU_START: usize = 0;
const MAIN_MENU_QUIT: usize = 1;

const PAUSE_MENU_ITEMS: &[&str] = &["Continue", "Quit World"];
const PAUSE_MENU_CONTINUE: usize = 0;
const PAUSE_MENU_QUIT: usize = 1;

/// Frames per blink phase of the press-start prompt.
const PRESS_START_BLINK_MASK: u64 = 0x20;


#[derive(Debug)]
enum AppState {
    Title(TitleScreen),
    MainMenu(Menu),
    Field(Field),
    Paused {
        field: Field,
        menu: Menu,
    },
}

#[derive(Debug)]
struct TitleScreen {
    /// Frame counter driving the press-start blink.
    counter: u64,
}

impl TitleScreen {
    fn new() -> Self {
        TitleScreen { counter: 0 }
    }

    fn show_press_start(&self) -> bool {
        self.counter & PRESS_START_BLINK_MASK == 0
    }
}

/// The whole game.
#[derive(Debug)]
pub struct App {
    state: AppState,
    pub settings: Settings,
}

impl App {
    /// Start at the title screen.
    pub fn new(settings: Settings) -> Self {
        App {
            state: AppState::Title(TitleScreen::new()),
            settings,
        }
    }

    /// Start directly in a field session, skipping the menus.
    pub fn new_in_field(seed: u64, settings: Settings) -> Self {
        info!(%seed, "starting world");
        App {
            state: AppState::Field(Field::new(seed, &settings)),
            settings,
        }
    }

    /// Advance one frame. Returns the successor app, or `None` to quit.
    pub fn frame(mut self, input: &InputFrame) -> Option<App> {
        self.state = match self.state {
            AppState::Title(mut title) => {
                if input.pressed(Button::Start) {
                    info!("entering main menu");
                    AppState::MainMenu(Menu::new("blockfield", MAIN_MENU_ITEMS))
                } else {
                    title.counter = title.counter.wrapping_add(1);
                    AppState::Title(title)
                }
            }
            AppState::MainMenu(mut menu) => match menu.process_input(input) {
                MenuResult::Chosen(MAIN_MENU_START) => {
                    let seed = thread_rng().gen();
                    info!(%seed, "starting world");
                    AppState::Field(Field::new(seed, &self.settings))
                }
                MenuResult::Chosen(MAIN_MENU_QUIT) => return None,
                MenuResult::Chosen(_) => unreachable!(),
                MenuResult::Cancel => {
                    info!("returning to title");
                    AppState::Title(TitleScreen::new())
                }
                MenuResult::None => AppState::MainMenu(menu),
            },
            AppState::Field(mut field) => {
                if input.pressed(Button::Start) {
                    info!("paused");
                    AppState::Paused {
                        field,
                        menu: Menu::new("Paused", PAUSE_MENU_ITEMS),
                    }
                } else {
                    field.update(input, &self.settings);
                    AppState::Field(field)
                }
            }
            AppState::Paused { field, mut menu } => {
                if input.pressed(Button::Start) {
                    info!("resumed");
                    AppState::Field(field)
                } else {
                    match menu.process_input(input) {
                        MenuResult::Chosen(PAUSE_MENU_CONTINUE)
                        | MenuResult::Cancel => {
                            info!("resumed");
                            AppState::Field(field)
                        }
                        MenuResult::Chosen(PAUSE_MENU_QUIT) => {
                            drop(field);
                            info!("world closed");
                            AppState::Title(TitleScreen::new())
                        }
                        MenuResult::Chosen(_) => unreachable!(),
                        MenuResult::None => AppState::Paused { field, menu },
                    }
                }
            }
        };
        Some(self)
    }

    /// Describe the current state for the renderer.
    pub fn draw(&self) -> Scene {
        match &self.state {
            AppState::Title(title) => Scene::Title {
                show_press_start: title.show_press_start(),
            },
            AppState::MainMenu(menu) => Scene::MainMenu(menu.view()),
            AppState::Field(field) => Scene::Field(field.view(None)),
            AppState::Paused { field, menu } =>
                Scene::Field(field.view(Some(menu.view()))),
        }
    }
}


#[cfg(test)]
fn idle() -> InputFrame {
    InputFrame::default()
}

#[test]
fn test_title_to_main_menu_on_start() {
    let app = App::new(Settings::default());
    assert!(matches!(app.draw(), Scene::Title { .. }));

    let app = app.frame(&idle().with(Button::Start)).unwrap();
    assert!(matches!(app.draw(), Scene::MainMenu(_)));
}

#[test]
fn test_title_blink_toggles() {
    let mut app = App::new(Settings::default());
    let mut seen_on = false;
    let mut seen_off = false;
    for _ in 0..0x80 {
        match app.draw() {
            Scene::Title { show_press_start: true } => seen_on = true,
            Scene::Title { show_press_start: false } => seen_off = true,
            _ => panic!("left title screen"),
        }
        app = app.frame(&idle()).unwrap();
    }
    assert!(seen_on && seen_off);
}

#[test]
fn test_main_menu_start_game_enters_field() {
    let app = App::new(Settings::default())
        .frame(&idle().with(Button::Start)).unwrap()
        .frame(&idle().with(Button::MenuConfirm)).unwrap();
    assert!(matches!(app.draw(), Scene::Field(_)));
}

#[test]
fn test_main_menu_quit_exits() {
    let app = App::new(Settings::default())
        .frame(&idle().with(Button::Start)).unwrap()
        .frame(&idle().with(Button::MenuDown)).unwrap();
    assert!(app.frame(&idle().with(Button::MenuConfirm)).is_none());
}

#[test]
fn test_main_menu_cancel_returns_to_title() {
    let app = App::new(Settings::default())
        .frame(&idle().with(Button::Start)).unwrap()
        .frame(&idle().with(Button::MenuCancel)).unwrap();
    assert!(matches!(app.draw(), Scene::Title { .. }));
}

#[test]
fn test_pause_and_resume() {
    let app = App::new_in_field(1, Settings::default())
        .frame(&idle().with(Button::Start)).unwrap();
    match app.draw() {
        Scene::Field(view) => assert!(view.pause_menu.is_some()),
        _ => panic!("not in field"),
    }

    let app = app.frame(&idle().with(Button::MenuConfirm)).unwrap();
    match app.draw() {
        Scene::Field(view) => assert!(view.pause_menu.is_none()),
        _ => panic!("not in field"),
    }
}

#[test]
fn test_pause_quit_world_returns_to_title() {
    let app = App::new_in_field(1, Settings::default())
        .frame(&idle().with(Button::Start)).unwrap()
        .frame(&idle().with(Button::MenuDown)).unwrap()
        .frame(&idle().with(Button::MenuConfirm)).unwrap();
    assert!(matches!(app.draw(), Scene::Title { .. }));
}

#[test]
fn test_field_does_not_update_while_paused() {
    let app = App::new_in_field(1, Settings::default())
        .frame(&idle()).unwrap()
        .frame(&idle().with(Button::Start)).unwrap();
    let eye_before = match app.draw() {
        Scene::Field(view) => view.eye,
        _ => panic!("not in field"),
    };
    let app = app.frame(&idle().with(Button::MenuUp)).unwrap();
    let eye_after = match app.draw() {
        Scene::Field(view) => view.eye,
        _ => panic!("not in field"),
    };
    assert_eq!(eye_before, eye_after);
}
