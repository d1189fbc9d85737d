//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Width of the keypad column
const KEYPAD_WIDTH: u16 = 22;
/// Width of the help column
const HELP_WIDTH: u16 = 22;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Splits the screen into display, keypad and help columns
fn columns(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(24),
            Constraint::Length(KEYPAD_WIDTH),
            Constraint::Length(HELP_WIDTH),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Where the keypad is drawn for a screen of size `area`
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    columns(area)[1]
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Creates the display column layout
    fn create_layout(area: Rect) -> [Rect; 3] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Expression
                Constraint::Length(3), // Result
                Constraint::Min(4),    // Status
            ])
            .split(area);
        [chunks[0], chunks[1], chunks[2]]
    }

    fn render_expression(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.calculator().expression(),
            Style::default().fg(Color::Gray),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" Expression ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .render(area, buf);
    }

    fn render_result(&self, area: Rect, buf: &mut Buffer) {
        let frame = self.app.frame();
        let style = if frame.is_error() {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(frame.result, style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Result ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let calculator = self.app.calculator();
        let state = calculator.state();
        let last = self
            .app
            .last_event()
            .map_or_else(|| "-".to_string(), |e| e.key().to_string());

        let rows = [
            ("Entry", state.current().to_string()),
            ("Pending", state.operator().map_or_else(|| "-".to_string(), |op| op.to_string())),
            ("Last key", last),
            ("Events", calculator.dispatched().to_string()),
        ];
        let items: Vec<ListItem> = rows
            .into_iter()
            .map(|(label, value)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{label:>8}"), Style::default().fg(Color::DarkGray)),
                    Span::raw(" "),
                    Span::styled(value, Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Status ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    fn render_help_sidebar(area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(3)])
            .split(area);

        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>6}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(chunks[0], buf);

        Paragraph::new(Span::styled(
            HELP_OPERATORS,
            Style::default().fg(Color::Cyan),
        ))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(chunks[1], buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let [display_area, keypad_area, help_area] = columns(area);
        let [expression, result, status] = Self::create_layout(display_area);

        self.render_expression(expression, buf);
        self.render_result(result, buf);
        self.render_status(status, buf);
        KeypadWidget::new(self.app.keypad()).render(keypad_area, buf);
        Self::render_help_sidebar(help_area, buf);
    }
}

/// Title of the main window
pub const TITLE: &str = " calcpad ";

/// Keyboard shortcuts shown in the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Enter"),
    ("Enter", "Equals"),
    ("=", "Equals"),
    ("Esc", "Clear"),
    ("_", "Sign"),
    ("%", "Percent"),
    ("q", "Quit"),
    ("Ctrl+C", "Quit"),
];

/// Operators help
pub const HELP_OPERATORS: &str = "Ops: + - * /";
