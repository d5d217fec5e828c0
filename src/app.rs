//! Trainer state and main loop

use clap::ValueEnum;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::content::{Catalog, Challenge, Lesson};
use crate::display::Display;
use crate::engine::{Controller, EvalState, Flag, FlagSet};
use crate::error::Result;
use crate::field::TextField;
use crate::input::{translate_key, Action};
use crate::style::Color;
use crate::terminal::Terminal;

/// The three top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Learn,
    Practice,
    Playground,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Learn, Tab::Practice, Tab::Playground];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Learn => "Learn",
            Tab::Practice => "Practice",
            Tab::Playground => "Playground",
        }
    }

    pub fn next(&self) -> Tab {
        match self {
            Tab::Learn => Tab::Practice,
            Tab::Practice => Tab::Playground,
            Tab::Playground => Tab::Learn,
        }
    }

    /// Widgets that can take focus on this tab, in Tab-key order
    fn focus_order(&self) -> &'static [Focus] {
        match self {
            // The challenge test string is fixed, so no subject field here
            Tab::Practice => &[Focus::List, Focus::Pattern],
            Tab::Learn | Tab::Playground => &[Focus::List, Focus::Pattern, Focus::Subject],
        }
    }
}

/// Which widget receives typed input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The tab's list: lesson examples, challenges or common patterns
    List,
    Pattern,
    Subject,
}

/// Presentation settings taken from the config
#[derive(Debug, Clone, Copy)]
pub struct ViewOptions {
    pub show_groups: bool,
    pub match_color: Color,
}

/// Main trainer state
pub struct App {
    /// Lessons, challenges and common patterns
    catalog: Catalog,
    /// Live evaluation of the pattern field against the subject field
    controller: Controller,
    /// Pattern being edited
    pattern: TextField,
    /// Subject text being edited
    subject: TextField,
    /// Current tab
    tab: Tab,
    /// Focused widget
    focus: Focus,
    /// Index of the lesson shown on the Learn tab
    lesson: usize,
    /// Selected example of the current lesson
    example: usize,
    /// Highlighted row of the challenge list
    challenge_cursor: usize,
    /// Id of the challenge being attempted
    selected_challenge: Option<u32>,
    /// Whether the challenge hint is showing
    show_hint: bool,
    /// Highlighted row of the common-pattern list
    pattern_cursor: usize,
    /// Display settings
    view: ViewOptions,
    /// One-line status message
    message: Option<String>,
    /// Whether the trainer is running
    running: bool,
}

impl App {
    /// Create the trainer state from the loaded config
    pub fn new(catalog: Catalog, flags: FlagSet, config: &Config) -> Self {
        Self {
            catalog,
            controller: Controller::new(flags),
            pattern: TextField::single_line(),
            subject: TextField::multiline(),
            tab: config.start_tab,
            focus: Focus::List,
            lesson: 0,
            example: 0,
            challenge_cursor: 0,
            selected_challenge: None,
            show_hint: false,
            pattern_cursor: 0,
            view: ViewOptions {
                show_groups: config.show_groups,
                match_color: config.match_color,
            },
            message: None,
            running: true,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn pattern_field(&self) -> &TextField {
        &self.pattern
    }

    pub fn subject_field(&self) -> &TextField {
        &self.subject
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn lesson_index(&self) -> usize {
        self.lesson
    }

    pub fn current_lesson(&self) -> Option<&Lesson> {
        self.catalog.lesson(self.lesson)
    }

    pub fn example_index(&self) -> usize {
        self.example
    }

    pub fn challenge_cursor(&self) -> usize {
        self.challenge_cursor
    }

    pub fn selected_challenge(&self) -> Option<&Challenge> {
        self.selected_challenge.and_then(|id| self.catalog.challenge(id))
    }

    pub fn show_hint(&self) -> bool {
        self.show_hint
    }

    pub fn pattern_cursor(&self) -> usize {
        self.pattern_cursor
    }

    pub fn view(&self) -> ViewOptions {
        self.view
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Run the main loop until the user quits
    pub fn run(&mut self, terminal: &mut Terminal) -> Result<()> {
        let mut display = Display::new();
        display.force_redraw();
        info!(tab = self.tab.title(), "trainer started");

        while self.running {
            display.render(terminal, self)?;

            let key_event = terminal.read_key()?;
            if let Some(action) = translate_key(key_event) {
                if action == Action::Redraw {
                    display.force_redraw();
                }
                self.handle_action(action);
            }
        }

        info!("trainer stopped");
        Ok(())
    }

    /// Apply one user action
    pub fn handle_action(&mut self, action: Action) {
        self.message = None;

        match action {
            Action::Quit => self.running = false,
            Action::ShowTab(tab) => self.switch_tab(tab),
            Action::NextTab => self.switch_tab(self.tab.next()),
            Action::FocusNext => self.cycle_focus(true),
            Action::FocusPrev => self.cycle_focus(false),
            Action::PageUp if self.tab == Tab::Learn => self.goto_lesson(self.lesson.saturating_sub(1)),
            Action::PageDown if self.tab == Tab::Learn => self.goto_lesson(self.lesson + 1),
            Action::ToggleFlag(flag) => self.toggle_flag(flag),
            Action::ToggleHint if self.selected_challenge.is_some() => {
                self.show_hint = !self.show_hint;
            }
            Action::ShowSolution => self.show_solution(),
            Action::Redraw => {}
            _ => match self.focus {
                Focus::List => self.handle_list_action(action),
                Focus::Pattern => self.handle_field_action(action, Focus::Pattern),
                Focus::Subject => self.handle_field_action(action, Focus::Subject),
            },
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        if tab != self.tab {
            debug!(from = self.tab.title(), to = tab.title(), "switching tab");
            self.tab = tab;
        }
        if !tab.focus_order().contains(&self.focus) {
            self.focus = Focus::List;
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let order = self.tab.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (pos + 1) % order.len()
        } else {
            (pos + order.len() - 1) % order.len()
        };
        self.focus = order[next];
    }

    /// Show a lesson, clamped to the available range
    pub fn goto_lesson(&mut self, index: usize) {
        let last = self.catalog.lessons().len().saturating_sub(1);
        self.lesson = index.min(last);
        self.example = 0;
    }

    fn toggle_flag(&mut self, flag: Flag) {
        let enabled = self.controller.toggle_flag(flag);
        self.message = Some(format!(
            "Flag {} ({}) {}",
            flag.code(),
            flag.description(),
            if enabled { "on" } else { "off" }
        ));
    }

    fn handle_list_action(&mut self, action: Action) {
        match action {
            Action::Up => self.move_list_cursor(false),
            Action::Down => self.move_list_cursor(true),
            Action::Enter => self.activate_list_item(),
            Action::Left if self.tab == Tab::Learn => self.goto_lesson(self.lesson.saturating_sub(1)),
            Action::Right if self.tab == Tab::Learn => self.goto_lesson(self.lesson + 1),
            Action::Insert(_) => {
                // Typing while the list is focused goes to the pattern
                self.focus = Focus::Pattern;
                self.handle_field_action(action, Focus::Pattern);
            }
            _ => {}
        }
    }

    fn move_list_cursor(&mut self, down: bool) {
        let (cursor, len) = match self.tab {
            Tab::Learn => {
                let len = self.current_lesson().map_or(0, |l| l.examples.len());
                (&mut self.example, len)
            }
            Tab::Practice => (&mut self.challenge_cursor, self.catalog.challenges().len()),
            Tab::Playground => (&mut self.pattern_cursor, self.catalog.patterns().len()),
        };
        if down {
            if *cursor + 1 < len {
                *cursor += 1;
            }
        } else {
            *cursor = cursor.saturating_sub(1);
        }
    }

    fn activate_list_item(&mut self) {
        match self.tab {
            Tab::Learn => self.try_example(self.example),
            Tab::Practice => {
                if let Some(id) = self.catalog.challenges().get(self.challenge_cursor).map(|c| c.id) {
                    self.select_challenge(id);
                }
            }
            Tab::Playground => self.apply_common_pattern(self.pattern_cursor),
        }
    }

    /// Load a lesson example's pattern and test string
    pub fn try_example(&mut self, index: usize) {
        let Some(example) = self.current_lesson().and_then(|l| l.examples.get(index)) else {
            return;
        };
        let (pattern, subject) = (example.pattern, example.test_string);
        self.load(pattern, subject);
        self.focus = Focus::Pattern;
    }

    /// Start a challenge: clear the pattern and load its test string
    pub fn select_challenge(&mut self, id: u32) {
        let Some(challenge) = self.catalog.challenge(id) else {
            return;
        };
        let subject = challenge.test_string;
        debug!(challenge = id, "challenge selected");
        self.selected_challenge = Some(id);
        self.show_hint = false;
        self.load("", subject);
        self.focus = Focus::Pattern;
    }

    fn show_solution(&mut self) {
        if let Some(solution) = self.selected_challenge().map(|c| c.solution) {
            self.pattern.set_text(solution);
            self.controller.set_pattern(solution);
        }
    }

    /// Put a common pattern into the pattern field
    pub fn apply_common_pattern(&mut self, index: usize) {
        if let Some(entry) = self.catalog.pattern(index) {
            let pattern = entry.pattern;
            self.pattern.set_text(pattern);
            self.controller.set_pattern(pattern);
            self.focus = Focus::Subject;
        }
    }

    fn load(&mut self, pattern: &str, subject: &str) {
        self.pattern.set_text(pattern);
        self.subject.set_text(subject);
        self.controller.load_example(pattern, subject);
    }

    fn handle_field_action(&mut self, action: Action, which: Focus) {
        let field = match which {
            Focus::Subject => &mut self.subject,
            _ => &mut self.pattern,
        };

        let changed = match action {
            Action::Insert(ch) => field.insert_char(ch),
            Action::Enter => field.is_multiline() && field.insert_char('\n'),
            Action::Backspace => field.backspace(),
            Action::Delete => field.delete(),
            Action::ClearField => {
                field.clear();
                true
            }
            Action::Left => {
                field.move_left();
                false
            }
            Action::Right => {
                field.move_right();
                false
            }
            Action::Home => {
                field.move_home();
                false
            }
            Action::End => {
                field.move_end();
                false
            }
            _ => false,
        };

        if changed {
            match which {
                Focus::Subject => self.controller.set_subject(self.subject.text()),
                _ => self.controller.set_pattern(self.pattern.text()),
            }
            if let EvalState::Failed(err) = self.controller.state() {
                debug!(error = %err.message, "pattern error shown");
            }
        }
    }
}
