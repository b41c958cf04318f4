use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::portal::handle_portal_key;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // The portal owns input while it is open.
    if app.modal_visible() {
        handle_portal_key(key, || app.close_modal());
        return;
    }

    if is_ctrl_char(key, 'd') {
        app.toggle_dark_mode();
        return;
    }

    let in_text_input = app.focused().is_text_input();

    match key.code {
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Enter => app.activate(),
        KeyCode::Esc if app.focused_input().is_some_and(|input| !input.is_empty()) => {
            app.clear_input()
        }
        KeyCode::Esc => app.request_quit(),
        KeyCode::Backspace if in_text_input => app.backspace(),
        KeyCode::Char(ch) if in_text_input && !has_command_modifier(key) => app.type_char(ch),
        KeyCode::Char(' ') => app.activate(),
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('r') if app.lazy().is_failed() => app.retry_lazy(),
        _ => {}
    }
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::context::{AppContext, Profile};
    use crate::ui::focus::Control;
    use crossterm::event::KeyEventState;

    fn make_app() -> App {
        let profile = Profile {
            name: "Ada".into(),
            role: "Engineer".into(),
        };
        App::new(AppContext::new("Ada Lovelace", profile), "/")
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        let release = KeyEvent {
            code: KeyCode::Tab,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        };
        handle_key(&mut app, release);
        assert_eq!(app.focused(), Control::DarkModeButton);
    }

    #[test]
    fn ctrl_q_quits_even_with_modal_open() {
        let mut app = make_app();
        app.open_modal();
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn modal_swallows_keys_until_closed() {
        let mut app = make_app();
        app.open_modal();
        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, ctrl('d'));
        assert_eq!(app.focused(), Control::DarkModeButton);
        assert!(!app.dark_mode());
        assert!(app.modal_visible());

        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.modal_visible());
        assert!(!app.should_quit());
    }

    #[test]
    fn q_types_into_inputs_but_quits_elsewhere() {
        let mut app = make_app();
        while app.focused() != Control::NameInput {
            handle_key(&mut app, press(KeyCode::Tab));
        }
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert_eq!(app.state().name.value, "q");
        assert!(!app.should_quit());

        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn esc_clears_a_filled_input_before_quitting() {
        let mut app = make_app();
        while app.focused() != Control::NameInput {
            handle_key(&mut app, press(KeyCode::Tab));
        }
        handle_key(&mut app, press(KeyCode::Char('x')));
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.state().name.is_empty());
        assert!(!app.should_quit());

        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_d_toggles_dark_mode() {
        let mut app = make_app();
        handle_key(&mut app, ctrl('d'));
        assert!(app.dark_mode());
        handle_key(&mut app, ctrl('d'));
        assert!(!app.dark_mode());
    }
}
