use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use showcase::ui::app::App;
use showcase::ui::context::{AppContext, Profile};
use showcase::ui::flags::FlagId;
use showcase::ui::focus::Control;
use showcase::ui::input::handle_key;
use showcase::ui::lazy::{LazyView, LoadError};
use showcase::ui::router::Route;

fn make_app() -> App {
    let profile = Profile {
        name: "Aditya".into(),
        role: "Full Stack Developer".into(),
    };
    App::new(AppContext::new("Aditya Janjanam", profile), "/")
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn focus(app: &mut App, control: Control) {
    while app.focused() != control {
        press(app, KeyCode::Tab);
    }
}

#[test]
fn click_increment_three_times() {
    let mut app = make_app();
    focus(&mut app, Control::CounterIncrement);
    for _ in 0..3 {
        press(&mut app, KeyCode::Enter);
    }
    assert_eq!(app.state().counter.counter, 3);
    assert_eq!(app.doubled(), 6);
}

#[test]
fn decrement_button_goes_negative() {
    let mut app = make_app();
    focus(&mut app, Control::CounterDecrement);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.state().counter.counter, -1);
    assert_eq!(app.doubled(), -2);
}

#[test]
fn reducer_buttons_dispatch_actions() {
    let mut app = make_app();
    focus(&mut app, Control::ReducerDecrement);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().counter.reducer_counter, -2);
    assert_eq!(app.state().counter.counter, 0);
}

#[test]
fn modal_opens_and_closes() {
    let mut app = make_app();
    assert!(!app.modal_visible());
    focus(&mut app, Control::OpenModal);
    press(&mut app, KeyCode::Enter);
    assert!(app.modal_visible());
    press(&mut app, KeyCode::Enter);
    assert!(!app.modal_visible());
}

#[test]
fn dark_mode_button_toggles_twice() {
    let mut app = make_app();
    assert_eq!(app.focused(), Control::DarkModeButton);
    press(&mut app, KeyCode::Enter);
    assert!(app.dark_mode());
    press(&mut app, KeyCode::Enter);
    assert!(!app.dark_mode());
}

#[test]
fn login_and_custom_toggles() {
    let mut app = make_app();
    focus(&mut app, Control::ToggleLogin);
    press(&mut app, KeyCode::Enter);
    assert!(!app.state().flags.get(FlagId::LoggedIn));

    focus(&mut app, Control::CustomToggle);
    press(&mut app, KeyCode::Enter);
    assert!(app.state().flags.get(FlagId::Custom));
}

#[test]
fn nav_links_change_route() {
    let mut app = make_app();
    focus(&mut app, Control::NavLink(Route::Contact));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.route().route(), Some(Route::Contact));
    assert_eq!(app.route().path, "/contact");
}

#[test]
fn typed_name_echoes() {
    let mut app = make_app();
    focus(&mut app, Control::NameInput);
    for ch in "Ada L".chars() {
        press(&mut app, KeyCode::Char(ch));
    }
    assert_eq!(app.state().name.value, "Ada L");
}

#[test]
fn lazy_failure_then_retry_then_resolve() {
    let mut app = make_app();
    assert!(app.lazy().is_pending());
    app.on_lazy_loaded(Err(LoadError::Unavailable {
        module: "lazy-panel".into(),
    }));
    assert!(app.lazy().is_failed());

    press(&mut app, KeyCode::Char('r'));
    assert!(app.lazy().is_pending());

    app.on_lazy_loaded(Ok(LazyView::new("Lazy Loaded Component")));
    assert!(!app.lazy().is_pending());
}

#[test]
fn box_reveal_settles_after_ticks() {
    let mut app = make_app();
    focus(&mut app, Control::ToggleBox);
    press(&mut app, KeyCode::Enter);
    for _ in 0..10 {
        app.on_tick();
    }
    assert!(app.box_transition().is_settled(true));

    press(&mut app, KeyCode::Enter);
    for _ in 0..10 {
        app.on_tick();
    }
    assert!(app.box_transition().is_settled(false));
}

#[test]
fn tab_skips_retry_until_the_load_fails() {
    let mut app = make_app();
    focus(&mut app, Control::ForwardedFocusButton);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focused(), Control::ToggleBox);

    app.on_lazy_loaded(Err(LoadError::Unavailable {
        module: "lazy-panel".into(),
    }));
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focused(), Control::LazyRetry);
}

#[test]
fn esc_clears_typed_name() {
    let mut app = make_app();
    focus(&mut app, Control::NameInput);
    press(&mut app, KeyCode::Char('A'));
    press(&mut app, KeyCode::Esc);
    assert!(app.state().name.value.is_empty());
    assert!(!app.should_quit());
}
