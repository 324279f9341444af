use crate::{
    args::{Cli, Command},
    event::TermEvent,
};
use ca1d_lib::{Automaton, SavedState};
use color_eyre::Result;
use crossterm::event::KeyCode;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::PathBuf};

const DEFAULT_STEP: usize = 1;

/// Application modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The automaton is evolving.
    Running,
    /// The automaton is not evolving.
    #[default]
    Paused,
    /// Ask the user to confirm the quit.
    Quit,
    /// Display the usage.
    Usage,
}

/// Application state.
#[derive(Debug, Serialize, Deserialize)]
pub struct App {
    /// The automaton being displayed.
    pub automaton: Automaton,
    /// Number of generations computed at each tick when running.
    pub step: usize,
    /// Current mode of the application.
    #[serde(skip)]
    pub mode: Mode,
    /// The first generation shown in the main area.
    ///
    /// [`None`] means that the view follows the last generation.
    pub scroll: Option<usize>,
    /// Whether the application should quit.
    #[serde(skip)]
    pub should_quit: bool,
    /// A message about the last save, shown in the bottom bar.
    #[serde(skip)]
    pub message: Option<String>,
    /// A path to save the application state.
    #[serde(skip)]
    pub save: Option<PathBuf>,
    /// A path to write the evolution.
    #[serde(skip)]
    pub output: Option<PathBuf>,
}

impl App {
    /// Create a new [`App`] from the command line arguments.
    pub fn new(cli: &Cli) -> Result<Self> {
        let automaton = match &cli.command {
            Command::New(args) => Automaton::from_config(&args.config)?,
            Command::Load(args) => {
                let text = std::fs::read_to_string(&args.path)?;
                let state: SavedState = text.parse()?;
                let mut automaton = Automaton::from_state(args.kind, &state)?;
                automaton.evolve(args.steps);
                automaton
            }
            Command::Resume(args) => {
                let json = std::fs::read_to_string(&args.path)?;
                let mut app: Self = serde_json::from_str(&json)?;
                app.step = cli.step.unwrap_or(app.step);
                app.save = cli.save.clone().or_else(|| Some(args.path.clone()));
                app.output = cli.output.clone();
                log::info!("Resumed session from {}", args.path.display());
                return Ok(app);
            }
        };

        Ok(Self {
            automaton,
            step: cli.step.unwrap_or(DEFAULT_STEP),
            mode: Mode::Paused,
            scroll: None,
            should_quit: false,
            message: None,
            save: cli.save.clone(),
            output: cli.output.clone(),
        })
    }

    /// Save the application state.
    ///
    /// The outcome is reported in the bottom bar.
    pub fn save(&mut self) -> Result<()> {
        let Some(save) = &self.save else {
            self.message = Some("No --save path given.".to_string());
            return Ok(());
        };

        let json = serde_json::to_string(&*self)?;
        self.message = Some(match std::fs::write(save, json) {
            Ok(()) => format!("Session saved to {}", save.display()),
            Err(e) => {
                log::warn!("Failed to save the session to {}: {e}", save.display());
                format!("Failed to save: {e}")
            }
        });
        Ok(())
    }

    /// Write the evolution to the output path, or to the standard output if there is none.
    pub fn write_evolution(&self) -> Result<()> {
        match &self.output {
            Some(path) => self.automaton.write_evolution(BufWriter::new(File::create(path)?))?,
            None => println!("{}", self.automaton),
        }
        Ok(())
    }

    /// Write the evolution to the output path from inside the viewer.
    ///
    /// The outcome is reported in the bottom bar.
    fn write_output(&mut self) {
        let Some(path) = &self.output else {
            self.message = Some("No --output path given.".to_string());
            return;
        };

        let written = File::create(path)
            .and_then(|file| self.automaton.write_evolution(BufWriter::new(file)));
        self.message = Some(match written {
            Ok(()) => format!("Evolution written to {}", path.display()),
            Err(e) => {
                log::warn!("Failed to write the evolution to {}: {e}", path.display());
                format!("Failed to write: {e}")
            }
        });
    }

    /// Print the rule table.
    pub fn print_rule_table(&self) {
        println!("{}", self.automaton.rule_table_string());
    }

    /// Print a short summary of the automaton.
    ///
    /// This function is called when exiting the application.
    pub fn print_summary(&self) {
        println!(
            "{} rule {}: {} generations of {} cells",
            self.automaton.kind(),
            self.automaton.rule_num(),
            self.automaton.total_steps() + 1,
            self.automaton.current_generation().size()
        );
    }

    /// The first generation to show in a view of the given height.
    pub fn top(&self, height: usize) -> usize {
        let len = self.automaton.total_steps() + 1;
        self.scroll
            .unwrap_or_else(|| len.saturating_sub(height))
            .min(len.saturating_sub(1))
    }

    /// Scroll the view up by one generation.
    ///
    /// The view stops following the last generation.
    pub fn scroll_up(&mut self, height: usize) {
        self.scroll = Some(self.top(height).saturating_sub(1));
    }

    /// Scroll the view down by one generation.
    ///
    /// When the last generation comes into view, the view follows it again.
    pub fn scroll_down(&mut self, height: usize) {
        let top = self.top(height) + 1;
        let len = self.automaton.total_steps() + 1;
        self.scroll = if top + height >= len { None } else { Some(top) };
    }

    /// Start or resume the evolution.
    fn start(&mut self) {
        if self.mode == Mode::Paused {
            self.mode = Mode::Running;
        }
    }

    /// Pause the evolution.
    fn pause(&mut self) {
        if self.mode == Mode::Running {
            self.mode = Mode::Paused;
        }
    }

    /// Evolve the automaton by the given number of steps.
    pub fn step(&mut self) {
        self.automaton.evolve(self.step as isize);
    }

    /// Update the application state according to the given event.
    ///
    /// `height` is the number of generations visible in the main area.
    pub fn update(&mut self, event: TermEvent, height: usize) -> Result<()> {
        let key = match event {
            TermEvent::KeyPress(key) => key,
            TermEvent::ScrollUp => {
                self.scroll_up(height);
                return Ok(());
            }
            TermEvent::ScrollDown => {
                self.scroll_down(height);
                return Ok(());
            }
            TermEvent::Resize => return Ok(()),
        };

        match self.mode {
            Mode::Running | Mode::Paused => match key {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                    self.pause();
                    self.mode = Mode::Quit;
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    if self.mode == Mode::Running {
                        self.pause();
                    } else {
                        self.start();
                    }
                }
                KeyCode::Char('n' | 'N') => {
                    self.pause();
                    self.automaton.evolve(1);
                }
                KeyCode::Up | KeyCode::Char('k') => self.scroll_up(height),
                KeyCode::Down | KeyCode::Char('j') => self.scroll_down(height),
                KeyCode::End | KeyCode::Char('G') => self.scroll = None,
                KeyCode::Home | KeyCode::Char('g') => self.scroll = Some(0),
                KeyCode::Char('s' | 'S') => self.save()?,
                KeyCode::Char('w' | 'W') => self.write_output(),
                KeyCode::Char('h' | 'H') => {
                    self.pause();
                    self.mode = Mode::Usage;
                }
                _ => {}
            },
            Mode::Quit => match key {
                KeyCode::Char('y' | 'Y') => {
                    self.should_quit = true;
                }
                KeyCode::Char('n' | 'N') => {
                    self.mode = Mode::Paused;
                }
                _ => {}
            },
            Mode::Usage => match key {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                    self.mode = Mode::Quit;
                }
                KeyCode::Char('h' | 'H' | ' ') | KeyCode::Enter => {
                    self.mode = Mode::Paused;
                }
                _ => {}
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ca1d_lib::{AutomatonKind, Generation};

    fn app(steps: isize) -> App {
        let mut automaton = Automaton::new(
            AutomatonKind::Elementary,
            90,
            Generation::from_symbols("0001000", '1'),
        )
        .unwrap();
        automaton.evolve(steps);
        App {
            automaton,
            step: 2,
            mode: Mode::Paused,
            scroll: None,
            should_quit: false,
            message: None,
            save: None,
            output: None,
        }
    }

    #[test]
    fn test_follow_last_generation() {
        let mut app = app(9);
        assert_eq!(app.top(4), 6);
        app.step();
        assert_eq!(app.automaton.total_steps(), 11);
        assert_eq!(app.top(4), 8);
        assert_eq!(app.top(100), 0);
    }

    #[test]
    fn test_scroll() {
        let mut app = app(9);
        app.scroll_up(4);
        assert_eq!(app.scroll, Some(5));
        app.scroll_down(4);
        assert_eq!(app.scroll, None);

        app.scroll = Some(0);
        app.scroll_up(4);
        assert_eq!(app.scroll, Some(0));
        app.scroll_down(4);
        assert_eq!(app.scroll, Some(1));
    }

    #[test]
    fn test_keys() {
        let mut app = app(0);
        app.update(TermEvent::KeyPress(KeyCode::Char(' ')), 4).unwrap();
        assert_eq!(app.mode, Mode::Running);
        app.update(TermEvent::KeyPress(KeyCode::Char('n')), 4).unwrap();
        assert_eq!(app.mode, Mode::Paused);
        assert_eq!(app.automaton.total_steps(), 1);

        app.update(TermEvent::KeyPress(KeyCode::Char('h')), 4).unwrap();
        assert_eq!(app.mode, Mode::Usage);
        app.update(TermEvent::KeyPress(KeyCode::Char('q')), 4).unwrap();
        assert_eq!(app.mode, Mode::Quit);
        app.update(TermEvent::KeyPress(KeyCode::Char('n')), 4).unwrap();
        assert_eq!(app.mode, Mode::Paused);
        app.update(TermEvent::KeyPress(KeyCode::Esc), 4).unwrap();
        app.update(TermEvent::KeyPress(KeyCode::Char('y')), 4).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_save_without_path() {
        let mut app = app(0);
        app.update(TermEvent::KeyPress(KeyCode::Char('s')), 4).unwrap();
        assert_eq!(app.message.as_deref(), Some("No --save path given."));
    }

    #[test]
    fn test_unwritable_paths_keep_running() {
        let mut app = app(2);
        app.save = Some(PathBuf::from("/nonexistent_dir/session.json"));
        app.output = Some(PathBuf::from("/nonexistent_dir/evolution.txt"));

        app.update(TermEvent::KeyPress(KeyCode::Char('s')), 4).unwrap();
        assert!(app
            .message
            .as_deref()
            .is_some_and(|message| message.starts_with("Failed to save: ")));

        app.update(TermEvent::KeyPress(KeyCode::Char('w')), 4).unwrap();
        assert!(app
            .message
            .as_deref()
            .is_some_and(|message| message.starts_with("Failed to write: ")));

        assert!(!app.should_quit);
        assert_eq!(app.mode, Mode::Paused);
        assert_eq!(app.automaton.total_steps(), 2);
    }

    #[test]
    fn test_session_round_trip() {
        let app = app(3);
        let json = serde_json::to_string(&app).unwrap();
        let restored: App = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.automaton, app.automaton);
        assert_eq!(restored.step, 2);
        assert_eq!(restored.mode, Mode::Paused);
    }
}
