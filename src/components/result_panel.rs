use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::ResultRegions;

/// Result region: city name, temperature line, condition line
pub struct ResultPanel;

pub struct ResultPanelProps<'a> {
    pub regions: &'a ResultRegions,
}

impl Component<Action> for ResultPanel {
    type Props<'a> = ResultPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // City name
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Temperature
            Constraint::Length(1), // Description
        ])
        .flex(Flex::Center)
        .split(area);

        let regions = props.regions;
        let lines = [
            (0, &regions.city_name, Style::default().fg(Color::White).bold()),
            (2, &regions.temperature, Style::default().fg(Color::Yellow)),
            (3, &regions.description, Style::default().fg(Color::Gray)),
        ];
        for (row, text, style) in lines {
            let line = Line::from(Span::styled(text.as_str(), style)).centered();
            frame.render_widget(Paragraph::new(line), chunks[row]);
        }
    }
}
