use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::components::{button, card, text_input, with_border};
use crate::ui::flags::FlagId;
use crate::ui::focus::Control;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::lazy::LazyState;
use crate::ui::layout::{card_grid, layout_regions};
use crate::ui::portal::{render_portal, Portal};
use crate::ui::router::ROUTES;
use crate::ui::theme::{palette, Palette, ACCENT, STATUS_ERROR, STATUS_OK};
use crate::ui::transition::BoxTransition;

const CARD_COUNT: usize = 13;
const NAV_HEIGHT: u16 = 4;
const BOX_WIDTH: usize = 24;

enum CardBody {
    Lines(Vec<Line<'static>>),
    /// Text shown through the generic border wrapper.
    Wrapped(&'static str),
}

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let palette = palette(app.dark_mode());
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.dark_mode(), app.is_focused(Control::DarkModeButton));
    frame.render_widget(header_widget.widget(palette), header);

    let [nav, cards] =
        Layout::vertical([Constraint::Length(NAV_HEIGHT), Constraint::Fill(1)]).areas(body);
    draw_navigation(frame, nav, app, palette);
    draw_cards(frame, cards, app, palette);

    let footer_widget = Footer::new(app.context().user());
    frame.render_widget(footer_widget.widget(footer, palette), footer);

    // Last, so it lands above everything else.
    render_portal(frame, app.modal_visible(), &Portal::modal());
}

fn draw_navigation(frame: &mut Frame<'_>, area: Rect, app: &App, palette: &Palette) {
    let mut links = vec![Span::styled(" Navigate: ", Style::default().fg(palette.muted))];
    for (_, route) in ROUTES {
        let mut link = button(
            route.link_label(),
            ACCENT,
            app.is_focused(Control::NavLink(*route)),
            palette,
        );
        if app.route().route() == Some(*route) {
            link = link.patch_style(Style::default().add_modifier(Modifier::UNDERLINED));
        }
        links.push(link);
        links.push(Span::raw(" "));
    }

    let page = match app.route().route() {
        Some(route) => Line::from(route.page_text()),
        None => Line::styled(
            format!("⚠️ No page at {}", app.route().path),
            Style::default().fg(STATUS_ERROR),
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title(Line::from(links));
    frame.render_widget(Paragraph::new(vec![Line::from(""), page]).block(block), area);
}

fn draw_cards(frame: &mut Frame<'_>, area: Rect, app: &App, palette: &Palette) {
    let slots = card_grid(area, CARD_COUNT);
    let state = app.state();
    let focused = |control| app.is_focused(control);
    let profile = app.context().profile();

    let text = |content: String| Span::styled(content, Style::default().fg(palette.text));

    let mut cards: Vec<(&'static str, CardBody)> = Vec::with_capacity(CARD_COUNT);

    cards.push((
        "Props",
        CardBody::Lines(vec![Line::from(vec![
            text("👤 ".into()),
            Span::styled(
                profile.name.clone(),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            text(format!(" — {}", profile.role)),
        ])]),
    ));

    let logged_in = state.flags.get(FlagId::LoggedIn);
    cards.push((
        "Events & Conditionals",
        CardBody::Lines(vec![
            Line::from(if logged_in {
                Span::styled("✅ Logged In", Style::default().fg(STATUS_OK))
            } else {
                Span::styled("❌ Logged Out", Style::default().fg(STATUS_ERROR))
            }),
            Line::from(button(
                "Toggle Login",
                palette.text,
                focused(Control::ToggleLogin),
                palette,
            )),
        ]),
    ));

    cards.push((
        "Forms",
        CardBody::Lines(vec![
            text_input(
                &state.name.value,
                "Enter name",
                focused(Control::NameInput),
                palette,
            ),
            Line::from(text(format!("Typed Name: {}", state.name.value))),
        ]),
    ));

    cards.push((
        "State & Memo",
        CardBody::Lines(vec![
            Line::from(text(format!("Count: {}", state.counter.counter))),
            Line::from(text(format!("Double: {}", app.doubled()))),
            Line::from(vec![
                button("+", ACCENT, focused(Control::CounterIncrement), palette),
                Span::raw(" "),
                button("-", STATUS_ERROR, focused(Control::CounterDecrement), palette),
            ]),
        ]),
    ));

    cards.push((
        "Reducer",
        CardBody::Lines(vec![
            Line::from(text(format!("Count: {}", state.counter.reducer_counter))),
            Line::from(vec![
                button("+", ACCENT, focused(Control::ReducerIncrement), palette),
                Span::raw(" "),
                button("-", STATUS_ERROR, focused(Control::ReducerDecrement), palette),
            ]),
        ]),
    ));

    let custom = state.flags.get(FlagId::Custom);
    cards.push((
        "Custom Toggle",
        CardBody::Lines(vec![
            Line::from(text(format!("Status: {}", if custom { "ON" } else { "OFF" }))),
            Line::from(button(
                "Toggle",
                palette.text,
                focused(Control::CustomToggle),
                palette,
            )),
        ]),
    ));

    cards.push((
        "Focus Handle",
        CardBody::Lines(vec![
            text_input(
                &app.focus_target_text().value,
                "Focus me",
                focused(Control::FocusTargetInput),
                palette,
            ),
            Line::from(button(
                "Focus Input",
                palette.text,
                focused(Control::FocusTargetButton),
                palette,
            )),
        ]),
    ));

    cards.push((
        "Forwarded Focus",
        CardBody::Lines(vec![
            app.forwarded_input()
                .line(&app.forwarded_text().value, palette),
            Line::from(button(
                "Focus",
                palette.text,
                focused(Control::ForwardedFocusButton),
                palette,
            )),
        ]),
    ));

    cards.push(("Border Wrapper", CardBody::Wrapped("Border Wrapped Component")));

    cards.push((
        "Lazy Panel",
        CardBody::Lines(lazy_lines(app.lazy(), focused(Control::LazyRetry), palette)),
    ));

    cards.push((
        "Transition",
        CardBody::Lines(vec![
            Line::from(button(
                "Toggle Box",
                palette.text,
                focused(Control::ToggleBox),
                palette,
            )),
            box_line(app.box_transition()),
        ]),
    ));

    cards.push((
        "Portal",
        CardBody::Lines(vec![Line::from(button(
            "Open Modal",
            ACCENT,
            focused(Control::OpenModal),
            palette,
        ))]),
    ));

    cards.push((
        "Context",
        CardBody::Lines(vec![Line::from(text(format!(
            "Context User: {}",
            app.context().user()
        )))]),
    ));

    for ((title, body), slot) in cards.into_iter().zip(slots) {
        match body {
            CardBody::Lines(lines) => {
                let body = Paragraph::new(lines).wrap(Wrap { trim: false });
                frame.render_widget(card(title, body, palette), slot);
            }
            CardBody::Wrapped(content) => {
                let wrapped = with_border(Paragraph::new(content))
                    .border_style(Style::default().fg(ACCENT));
                frame.render_widget(card(title, wrapped, palette), slot);
            }
        }
    }
}

fn lazy_lines(state: &LazyState, retry_focused: bool, palette: &Palette) -> Vec<Line<'static>> {
    match state {
        LazyState::Pending { .. } => vec![Line::from(vec![
            Span::styled(format!("{} ", state.spinner()), Style::default().fg(STATUS_OK)),
            Span::styled("Loading...", Style::default().fg(palette.muted)),
        ])],
        LazyState::Resolved { view } => vec![Line::styled(
            view.text.clone(),
            Style::default().fg(palette.text),
        )],
        LazyState::Failed { error } => vec![
            Line::styled(
                format!("Failed to load: {error}"),
                Style::default().fg(STATUS_ERROR),
            ),
            Line::from(button("Retry", ACCENT, retry_focused, palette)),
        ],
    }
}

fn box_line(transition: BoxTransition) -> Line<'static> {
    let filled = (BOX_WIDTH as f64 * transition.ratio()).round() as usize;
    if filled == 0 {
        return Line::from("");
    }
    let label = "Smooth Transition";
    let content = if filled >= label.chars().count() + 2 {
        format!(" {label:<width$}", width = filled - 1)
    } else {
        " ".repeat(filled)
    };
    Line::styled(
        content,
        Style::default()
            .bg(ACCENT)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
}
