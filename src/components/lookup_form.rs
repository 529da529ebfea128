use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;

pub const BUTTON_LABEL: &str = "Get Weather";
const BUTTON_WIDTH: u16 = 15;
const PLACEHOLDER: &str = "Enter city name...";

/// City text field plus the button that activates a lookup
pub struct LookupForm {
    input: TextInput,
    button_area: Rect,
}

pub struct LookupFormProps<'a> {
    pub value: &'a str,
    pub is_focused: bool,
    // Action constructors
    pub on_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
}

impl Default for LookupForm {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
            button_area: Rect::default(),
        }
    }
}

impl LookupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the button was last drawn; used for click hit-testing
    pub fn button_area(&self) -> Rect {
        self.button_area
    }
}

impl Component<Action> for LookupForm {
    type Props<'a> = LookupFormProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        match event {
            EventKind::Key(key) if key.code == KeyCode::Enter => {
                vec![(props.on_submit)(props.value.to_string())]
            }
            EventKind::Key(_) => {
                let input_props = TextInputProps {
                    value: props.value,
                    placeholder: PLACEHOLDER,
                    is_focused: true,
                    style: TextInputStyle {
                        base: BaseStyle {
                            border: None,
                            padding: Padding::all(1),
                            bg: None,
                            fg: None,
                        },
                        placeholder_style: None,
                        cursor_style: None,
                    },
                    on_change: props.on_change,
                    on_submit: props.on_submit,
                    on_cursor_move: Some(|_| Action::Render),
                };
                self.input
                    .handle_event(event, input_props)
                    .into_iter()
                    .collect()
            }
            EventKind::Mouse(mouse) => {
                let clicked = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
                    && self
                        .button_area
                        .contains(Position::new(mouse.column, mouse.row));
                if clicked {
                    vec![(props.on_submit)(props.value.to_string())]
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::horizontal([
            Constraint::Min(10),              // City field
            Constraint::Length(1),            // Gap
            Constraint::Length(BUTTON_WIDTH), // Button
        ])
        .split(area);

        let input_props = TextInputProps {
            value: props.value,
            placeholder: PLACEHOLDER,
            is_focused: props.is_focused,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::all(1),
                    bg: Some(Color::Rgb(50, 50, 60)),
                    fg: None,
                },
                placeholder_style: None,
                cursor_style: None,
            },
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input.render(frame, chunks[0], input_props);

        self.button_area = chunks[2];
        let button_rows = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(chunks[2]);
        let button_style = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        frame.render_widget(Block::default().style(button_style), chunks[2]);
        frame.render_widget(
            Paragraph::new(Line::from(BUTTON_LABEL).centered()).style(button_style),
            button_rows[1],
        );
    }
}
