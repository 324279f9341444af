use crate::app::{App, Mode};
use ca1d_lib::Automaton;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    terminal::Frame,
    text::Text,
    widgets::{
        block::{Block, Title},
        Borders, Clear, Paragraph, Widget,
    },
};

/// Number of generations that fit in the history panel of a terminal of the given size.
///
/// The top bar, the bottom bar, and the borders of the panel take 4 lines.
pub fn history_height(size: Rect) -> u16 {
    size.height.saturating_sub(4)
}

impl App {
    /// Render the TUI interface.
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ],
        )
        .split(frame.size());

        self.render_top_bar(frame, chunks[0]);
        self.render_main(frame, chunks[1]);
        self.render_bottom_bar(frame, chunks[2]);

        // Show the popup window if needed.
        match self.mode {
            Mode::Usage => self.render_help(frame, chunks[1]),
            Mode::Quit => self.render_quit(frame, chunks[1]),
            _ => {}
        }
    }

    /// Render the top bar.
    ///
    /// This includes the rule, and the number of generations.
    fn render_top_bar(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::new(
            Direction::Horizontal,
            Constraint::from_percentages([50, 50]),
        )
        .split(area);

        let style = Style::new().black().on_light_blue();

        let rule = Paragraph::new(format!(
            "{} rule {} ({})",
            self.automaton.kind(),
            self.automaton.rule_num(),
            self.automaton.rule().binary()
        ))
        .style(style);
        frame.render_widget(rule, chunks[0]);

        let generations = Paragraph::new(format!(
            "Generation: {}  Cells: {}",
            self.automaton.total_steps(),
            self.automaton.current_generation().size()
        ))
        .style(style);
        frame.render_widget(generations, chunks[1]);
    }

    /// Render the bottom bar.
    ///
    /// This includes the current mode or the last message, and a short help message.
    fn render_bottom_bar(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::new(
            Direction::Horizontal,
            Constraint::from_percentages([50, 50]),
        )
        .split(area);

        let style = Style::new().black().on_light_blue();

        let status_str = match (&self.message, self.mode) {
            (_, Mode::Running) => "Running...",
            (Some(message), _) => message.as_str(),
            (None, _) => "Paused.",
        };

        let status = Paragraph::new(status_str).style(style);
        frame.render_widget(status, chunks[0]);

        let help = Paragraph::new("Press [h] for help.").style(style);
        frame.render_widget(help, chunks[1]);
    }

    /// Render the main area: the history of generations, and the rule table.
    fn render_main(&self, frame: &mut Frame, area: Rect) {
        let rule_table = self.automaton.rule_table_string();
        let table_width = rule_table
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as u16
            + 2;

        let chunks = Layout::new(
            Direction::Horizontal,
            [Constraint::Min(0), Constraint::Length(table_width)],
        )
        .split(area);

        let block = Block::default().borders(Borders::ALL).title("Generations");
        let inner = block.inner(chunks[0]);
        frame.render_widget(block, chunks[0]);

        let history = History::new(&self.automaton, self.top(inner.height as usize));
        frame.render_widget(history, inner);

        let table = Paragraph::new(rule_table)
            .block(Block::default().borders(Borders::ALL).title("Rule table"));
        frame.render_widget(table, chunks[1]);
    }

    /// Render a popup window with some text.
    fn render_popup<'a>(
        &self,
        frame: &mut Frame,
        area: Rect,
        text: impl Into<Text<'a>>,
        title: impl Into<Title<'a>>,
        style: Style,
    ) {
        let text = text.into();

        let center_x = area.x + area.width / 2;
        let center_y = area.y + area.height / 2;

        let width = area.width.min(text.width() as u16 + 2);
        let height = area.height.min(text.height() as u16 + 2);

        let rect = Rect::new(center_x - width / 2, center_y - height / 2, width, height);

        frame.render_widget(Clear, rect);

        let paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(style);

        frame.render_widget(paragraph, rect);
    }

    /// Render the popup window to show the help message.
    fn render_help(&self, frame: &mut Frame, area: Rect) {
        self.render_popup(
            frame,
            area,
            "[q]/[Esc]       Quit\n\
             [h]             Show or hide this help message\n\
             [Space]/[Enter] Start or pause the evolution\n\
             [n]             Evolve one generation\n\
             [Up]/[Down]     Scroll the generations\n\
             [Home]/[End]    Show the first or the last generations\n\
             [s]             Save the session\n\
             [w]             Write the evolution to the output file",
            "Help",
            Style::new().green(),
        );
    }

    /// Render the popup window to ask the user to confirm quitting.
    fn render_quit(&self, frame: &mut Frame, area: Rect) {
        self.render_popup(
            frame,
            area,
            "Are you sure you want to quit? ([y]/[n])",
            "Quit",
            Style::new().yellow(),
        );
    }
}

/// A widget to show the generations of an automaton, one per line,
/// each prefixed by its step number.
#[derive(Debug)]
struct History<'a> {
    /// The automaton.
    automaton: &'a Automaton,
    /// The first generation to show.
    top: usize,
}

impl<'a> History<'a> {
    /// Create a new history widget starting at the given generation.
    const fn new(automaton: &'a Automaton, top: usize) -> Self {
        Self { automaton, top }
    }
}

impl Widget for History<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let generations = self.automaton.generations();
        let symbols = self.automaton.symbols();
        let label_width = (generations.len() - 1).to_string().len();

        let rows = generations
            .iter()
            .enumerate()
            .skip(self.top)
            .take(area.height as usize);

        for (y, (step, generation)) in (area.y..).zip(rows) {
            let label = format!("{step:>label_width$} ");
            let (x, _) = buf.set_stringn(
                area.x,
                y,
                label,
                area.width as usize,
                Style::new().dark_gray(),
            );

            for (x, &state) in (x..area.right()).zip(generation.as_slice()) {
                let style = if state {
                    Style::new().green()
                } else {
                    Style::new().dark_gray()
                };
                buf.get_mut(x, y)
                    .set_char(symbols.symbol(state))
                    .set_style(style);
            }
        }
    }
}
