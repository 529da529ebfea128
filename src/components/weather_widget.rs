use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, ErrorPanel, LookupForm, LookupFormProps, ResultPanel, ResultPanelProps};
use crate::action::Action;
use crate::state::{AppState, DisplayState};

pub const TITLE: &str = "Weather Lookup";

/// Props for WeatherWidget - read-only view of state
pub struct WeatherWidgetProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole widget: form on top, result or error region below
#[derive(Default)]
pub struct WeatherWidget {
    form: LookupForm,
}

impl WeatherWidget {
    pub fn new() -> Self {
        Self::default()
    }

    fn form_props(state: &AppState, is_focused: bool) -> LookupFormProps<'_> {
        LookupFormProps {
            value: &state.input,
            is_focused,
            on_change: Action::InputChange,
            on_submit: Action::LookupSubmit,
        }
    }
}

impl Component<Action> for WeatherWidget {
    type Props<'a> = WeatherWidgetProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            let ctrl_c =
                key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
            if key.code == KeyCode::Esc || ctrl_c {
                return vec![Action::Quit];
            }
        }

        self.form
            .handle_event(event, Self::form_props(props.state, true))
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherWidgetProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Form
            Constraint::Min(3),    // Result / error region
            Constraint::Length(1), // Pending lookup
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let title = Line::from(Span::styled(TITLE, Style::default().fg(Color::Cyan).bold()))
            .centered();
        frame.render_widget(Paragraph::new(title), chunks[0]);

        self.form.render(
            frame,
            chunks[2],
            Self::form_props(props.state, props.is_focused),
        );

        match &props.state.display {
            DisplayState::Idle => {
                let hint = Line::from(vec![
                    Span::styled(
                        "Type a city and press ",
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled("Enter", Style::default().fg(Color::Cyan).bold()),
                    Span::styled(
                        " to look up the weather",
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
                .centered();
                let rows = Layout::vertical([
                    Constraint::Fill(1),
                    Constraint::Length(1),
                    Constraint::Fill(1),
                ])
                .split(chunks[3]);
                frame.render_widget(Paragraph::new(hint), rows[1]);
            }
            DisplayState::Result(regions) => {
                let mut panel = ResultPanel;
                panel.render(frame, chunks[3], ResultPanelProps { regions });
            }
            DisplayState::Error => {
                let mut panel = ErrorPanel;
                panel.render(frame, chunks[3], ());
            }
        }

        if let Some(pending) = &props.state.pending {
            let line = Line::from(Span::styled(
                format!("{} Looking up {}...", props.state.spinner_frame(), pending.city),
                Style::default().fg(Color::DarkGray),
            ))
            .centered();
            frame.render_widget(Paragraph::new(line), chunks[4]);
        }

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[5],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "look up"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
