use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";
/// Shown for every failure cause
pub const ERROR_MESSAGE: &str = "City not found or weather unavailable. Please try again.";

/// Static error region
pub struct ErrorPanel;

impl Component<Action> for ErrorPanel {
    type Props<'a> = ();

    fn render(&mut self, frame: &mut Frame, area: Rect, _props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // icon
            Constraint::Length(1), // "Error"
            Constraint::Length(1), // message
        ])
        .flex(Flex::Center)
        .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(ERROR_ICON).centered()),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(
                Line::from(vec![Span::styled(
                    "Error",
                    Style::default().fg(Color::Red).bold(),
                )])
                .centered(),
            ),
            chunks[1],
        );
        frame.render_widget(
            Paragraph::new(
                Line::from(vec![Span::styled(
                    ERROR_MESSAGE,
                    Style::default().fg(Color::Rgb(200, 100, 100)),
                )])
                .centered(),
            ),
            chunks[2],
        );
    }
}
