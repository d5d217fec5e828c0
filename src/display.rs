//! Display rendering
//!
//! Screen contents are composed into a [`Frame`] of styled lines first and
//! then written to the terminal, so layout can be checked without a tty.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, Focus, Tab};
use crate::engine::{EvalState, Flag, HighlightSegment, MAX_MATCHES};
use crate::error::Result;
use crate::style::{group_style, match_style, Color, Style};
use crate::terminal::Terminal;

/// A run of text drawn with one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }
}

/// One screen row
pub type Line = Vec<Span>;

/// A composed screen
#[derive(Debug, Default)]
pub struct Frame {
    pub lines: Vec<Line>,
    /// Cursor position (row, column) when a text field has focus
    pub cursor: Option<(usize, usize)>,
}

impl Frame {
    fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    fn push_plain(&mut self, text: impl Into<String>) {
        self.lines.push(vec![Span::plain(text)]);
    }

    fn push_styled(&mut self, text: impl Into<String>, style: Style) {
        self.lines.push(vec![Span::new(text, style)]);
    }

    fn blank(&mut self) {
        self.lines.push(Vec::new());
    }

    /// Plain text of a row
    #[cfg(test)]
    pub fn row_text(&self, row: usize) -> String {
        self.lines
            .get(row)
            .map(|line| line.iter().map(|s| s.text.as_str()).collect())
            .unwrap_or_default()
    }
}

/// Display state
pub struct Display {
    /// Whether a full redraw is needed
    needs_redraw: bool,
}

impl Display {
    pub fn new() -> Self {
        Self { needs_redraw: true }
    }

    /// Mark that a full redraw is needed
    pub fn force_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Render the trainer
    pub fn render(&mut self, terminal: &mut Terminal, app: &App) -> Result<()> {
        let cols = terminal.cols() as usize;
        let rows = terminal.rows() as usize;

        if self.needs_redraw {
            terminal.clear_screen()?;
        }

        let frame = compose(app, cols);
        let body_rows = rows.saturating_sub(1);
        // Scroll just enough to keep the cursor on screen
        let top = frame
            .cursor
            .map_or(0, |(row, _)| (row + 1).saturating_sub(body_rows));

        terminal.set_cursor_visible(false)?;
        for row in 0..body_rows {
            terminal.move_cursor(row as u16, 0)?;
            if let Some(line) = frame.lines.get(top + row) {
                draw_line(terminal, line, cols)?;
            }
            terminal.clear_to_eol()?;
        }

        // Status line at bottom
        if rows > 0 {
            terminal.move_cursor((rows - 1) as u16, 0)?;
            draw_line(terminal, &status_line(app), cols)?;
            terminal.clear_to_eol()?;
        }

        if let Some((row, col)) = frame.cursor.filter(|_| body_rows > 0) {
            terminal.move_cursor((row - top) as u16, col.min(cols.saturating_sub(1)) as u16)?;
            terminal.set_cursor_visible(true)?;
        }

        terminal.flush()?;
        self.needs_redraw = false;
        Ok(())
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

/// Write one line, clipped to the terminal width
fn draw_line(terminal: &mut Terminal, line: &[Span], cols: usize) -> Result<()> {
    let mut used = 0;
    for span in line {
        let remaining = cols.saturating_sub(used);
        if remaining == 0 {
            break;
        }
        let text = truncate_to_width(&span.text, remaining);
        used += text.width();
        if span.style.is_default() {
            terminal.write_str(&text)?;
        } else {
            terminal.apply_style(&span.style)?;
            terminal.write_str(&text)?;
            terminal.reset_attributes()?;
        }
    }
    Ok(())
}

fn status_line(app: &App) -> Line {
    let text = match app.message() {
        Some(msg) => msg.to_string(),
        None => "F1-F3 tabs  Tab focus  Alt-g/i/m/s/u/y flags  C-u clear  C-q quit".to_string(),
    };
    vec![Span::new(text, Style::dim())]
}

/// Lay out the whole screen for the current state
pub fn compose(app: &App, cols: usize) -> Frame {
    let mut frame = Frame::default();

    frame.push(title_bar(app.tab()));
    frame.push_styled("-".repeat(cols), Style::dim());

    match app.tab() {
        Tab::Learn => compose_learn(&mut frame, app, cols),
        Tab::Practice => compose_practice(&mut frame, app, cols),
        Tab::Playground => compose_playground(&mut frame, app),
    }

    frame
}

fn title_bar(current: Tab) -> Line {
    let mut line = vec![
        Span::new("Interactive Regex Trainer", Style::default().with_bold()),
        Span::plain("  "),
    ];
    for (i, tab) in Tab::ALL.iter().enumerate() {
        let label = format!(" F{} {} ", i + 1, tab.title());
        let style = if *tab == current {
            Style::reverse()
        } else {
            Style::default()
        };
        line.push(Span::new(label, style));
        line.push(Span::plain(" "));
    }
    line
}

/// Prefix for list rows: a marker on the highlighted row
fn list_marker(selected: bool, focused: bool) -> Span {
    match (selected, focused) {
        (true, true) => Span::new("> ", Style::fg(Color::BrightYellow).with_bold()),
        (true, false) => Span::new("> ", Style::dim()),
        _ => Span::plain("  "),
    }
}

fn compose_learn(frame: &mut Frame, app: &App, cols: usize) {
    let Some(lesson) = app.current_lesson() else {
        return;
    };
    let total = app.catalog().lessons().len();

    frame.push(vec![
        Span::new(lesson.title, Style::default().with_bold()),
        Span::new(
            format!("  Lesson {} of {}  (PgUp/PgDn)", app.lesson_index() + 1, total),
            Style::dim(),
        ),
    ]);
    for row in wrap(lesson.content, cols.max(20)) {
        frame.push_plain(row);
    }
    frame.blank();
    frame.push_styled("Examples:", Style::default().with_bold());

    let list_focused = app.focus() == Focus::List;
    for (i, example) in lesson.examples.iter().enumerate() {
        let selected = i == app.example_index();
        frame.push(vec![
            list_marker(selected, list_focused),
            Span::new(format!("/{}/", example.pattern), Style::fg(Color::Cyan)),
            Span::plain(format!("  on {}", quoted(example.test_string))),
        ]);
        frame.push(vec![Span::plain("    "), Span::new(example.explanation, Style::dim())]);
    }
    if list_focused {
        frame.push_styled("  Enter: try it", Style::dim());
    }
    frame.blank();

    frame.push_styled("Practice what you've learned:", Style::default().with_bold());
    compose_editor(frame, app);
    compose_results(frame, app, app.view().show_groups);
}

fn compose_practice(frame: &mut Frame, app: &App, cols: usize) {
    frame.push_styled("Challenges", Style::default().with_bold());

    let list_focused = app.focus() == Focus::List;
    let selected_id = app.selected_challenge().map(|c| c.id);
    for (i, challenge) in app.catalog().challenges().iter().enumerate() {
        let style = if Some(challenge.id) == selected_id {
            Style::default().with_bold()
        } else {
            Style::default()
        };
        frame.push(vec![
            list_marker(i == app.challenge_cursor(), list_focused),
            Span::new(format!("{}. {}", challenge.id, challenge.title), style),
        ]);
    }
    frame.blank();

    let Some(challenge) = app.selected_challenge() else {
        frame.push_styled("Select a challenge to begin", Style::dim());
        return;
    };

    frame.push_styled(challenge.title, Style::default().with_bold());
    for row in wrap(challenge.description, cols.max(20)) {
        frame.push_plain(row);
    }
    frame.blank();
    frame.push_styled("Test String:", Style::default().with_bold());
    for row in challenge.test_string.split('\n') {
        frame.push_plain(format!("  {}", row));
    }
    frame.blank();

    frame.push_styled("Your Regular Expression:", Style::default().with_bold());
    compose_pattern_field(frame, app);

    frame.push_styled("Results:", Style::default().with_bold());
    match app.controller().result() {
        Some(result) => {
            compose_highlight(frame, &app.controller().segments(), app.view().match_color);
            let count = result.matches.len();
            let noun = if count == 1 { "match" } else { "matches" };
            frame.push_styled(format!("  {} {} found", count, noun), Style::fg(Color::Cyan));
        }
        None => frame.push_styled("  Enter a pattern to see results", Style::dim()),
    }

    if app.show_hint() {
        frame.blank();
        frame.push(vec![
            Span::new("Hint: ", Style::fg(Color::Yellow).with_bold()),
            Span::new(challenge.hint, Style::fg(Color::Yellow)),
        ]);
    }
    frame.blank();
    let hint_label = if app.show_hint() { "Hide Hint" } else { "Show Hint" };
    frame.push_styled(
        format!("Alt-h {}   Alt-a Show Solution", hint_label),
        Style::dim(),
    );
}

fn compose_playground(frame: &mut Frame, app: &App) {
    frame.push_styled("Common Patterns", Style::default().with_bold());

    let list_focused = app.focus() == Focus::List;
    let name_width = app
        .catalog()
        .patterns()
        .iter()
        .map(|p| p.name.width())
        .max()
        .unwrap_or(0);
    for (i, entry) in app.catalog().patterns().iter().enumerate() {
        let padding = " ".repeat(name_width - entry.name.width() + 2);
        frame.push(vec![
            list_marker(i == app.pattern_cursor(), list_focused),
            Span::plain(format!("{}{}", entry.name, padding)),
            Span::new(entry.pattern, Style::fg(Color::Cyan)),
        ]);
    }
    frame.blank();

    frame.push_styled("Test Your Regex", Style::default().with_bold());
    compose_editor(frame, app);
    compose_results(frame, app, app.view().show_groups);
}

/// Pattern field plus the error line under it
fn compose_pattern_field(frame: &mut Frame, app: &App) {
    let controller = app.controller();
    let field = app.pattern_field();
    let focused = app.focus() == Focus::Pattern;

    let mut line = vec![Span::new("/", Style::dim())];
    if field.text().is_empty() && !focused {
        line.push(Span::new("Enter your regex pattern", Style::dim()));
    } else {
        line.push(Span::plain(field.text()));
    }
    line.push(Span::new(format!("/{}", controller.flags()), Style::dim()));

    if focused {
        let (_, col) = field.cursor_position();
        frame.cursor = Some((frame.lines.len(), 1 + col));
    }
    frame.push(line);

    if let Some(err) = controller.error() {
        frame.push_styled(err.message.clone(), Style::fg(Color::BrightRed));
    }
}

/// Pattern, flags and subject editors
fn compose_editor(frame: &mut Frame, app: &App) {
    frame.push_styled("Regular Expression:", Style::default().with_bold());
    compose_pattern_field(frame, app);

    let flags = app.controller().flags();
    let mut line = vec![Span::new("Flags: ", Style::default().with_bold())];
    for flag in Flag::ALL {
        let mark = if flags.contains(flag) { "[x]" } else { "[ ]" };
        line.push(Span::plain(format!("{} {}  ", mark, flag.code())));
    }
    frame.push(line);
    let legend: Vec<String> = Flag::ALL
        .iter()
        .map(|f| format!("{}: {}", f.code(), f.description()))
        .collect();
    frame.push_styled(legend.join(", "), Style::dim());

    frame.push_styled("Test String:", Style::default().with_bold());
    let field = app.subject_field();
    let top = frame.lines.len();
    if field.text().is_empty() {
        frame.push_styled("Enter text to test your regex against", Style::dim());
    } else {
        for row in field.text().split('\n') {
            frame.push_plain(row);
        }
    }
    if app.focus() == Focus::Subject {
        let (row, col) = field.cursor_position();
        frame.cursor = Some((top + row, col));
    }
}

/// Results area: badge, highlighted subject and group listing
fn compose_results(frame: &mut Frame, app: &App, show_groups: bool) {
    frame.push_styled("Results:", Style::default().with_bold());

    let controller = app.controller();
    let result = match controller.state() {
        EvalState::Ready(result) => result,
        EvalState::Idle | EvalState::Failed(_) => {
            frame.push_styled("  Enter a pattern to see results", Style::dim());
            return;
        }
    };

    if result.matched {
        frame.push_styled("  \u{2713} Pattern matches", Style::fg(Color::Green).with_bold());
    } else {
        frame.push_styled("  \u{2717} Pattern does not match", Style::fg(Color::Red).with_bold());
        return;
    }

    let count = result.matches.len();
    let capped = if count == MAX_MATCHES { " (limit reached)" } else { "" };
    frame.push_plain(format!("Matches ({}){}:", count, capped));
    compose_highlight(frame, &controller.segments(), app.view().match_color);

    if show_groups && result.has_groups() {
        frame.push_styled("Capturing Groups:", Style::default().with_bold());
        for (i, record) in result.matches.iter().enumerate() {
            if !record.has_groups() {
                continue;
            }
            let mut line = vec![Span::plain(format!("  Match {}: ", i + 1))];
            for (g, capture) in record.groups.iter().enumerate() {
                let value = match capture {
                    Some(capture) => quoted(&capture.text),
                    None => "(unmatched)".to_string(),
                };
                line.push(Span::new(
                    format!("Group {}: {} ", g + 1, value),
                    Style::fg(Color::Blue),
                ));
            }
            frame.push(line);
        }
    }
}

/// Highlighted subject, one screen row per subject line
fn compose_highlight(frame: &mut Frame, segments: &[HighlightSegment], color: Color) {
    for line in highlight_lines(segments, color) {
        let mut row = vec![Span::plain("  ")];
        row.extend(line);
        frame.push(row);
    }
}

/// Turn highlight segments into styled rows, splitting at newlines
pub fn highlight_lines(segments: &[HighlightSegment], color: Color) -> Vec<Line> {
    let mut lines: Vec<Line> = vec![Vec::new()];

    for segment in segments {
        for (text, style) in styled_runs(segment, color) {
            let mut parts = text.split('\n');
            if let Some(first) = parts.next() {
                push_span(&mut lines, first, style);
            }
            for part in parts {
                lines.push(Vec::new());
                push_span(&mut lines, part, style);
            }
        }
    }

    lines
}

fn push_span(lines: &mut [Line], text: &str, style: Style) {
    if let Some(line) = lines.last_mut() {
        if !text.is_empty() {
            line.push(Span::new(text, style));
        }
    }
}

/// Split a segment into runs of the same style
fn styled_runs(segment: &HighlightSegment, color: Color) -> Vec<(&str, Style)> {
    if !segment.is_match {
        return vec![(segment.text.as_str(), Style::default())];
    }
    if segment.groups.is_empty() {
        return vec![(segment.text.as_str(), match_style(color))];
    }

    let style_at = |offset: usize| match segment.group_at(offset) {
        Some(group) => group_style(color, group),
        None => match_style(color),
    };

    let mut runs = Vec::new();
    let mut run_start = 0;
    let mut run_style = style_at(0);
    for (offset, _) in segment.text.char_indices().skip(1) {
        let style = style_at(offset);
        if style != run_style {
            runs.push((&segment.text[run_start..offset], run_style));
            run_start = offset;
            run_style = style;
        }
    }
    runs.push((&segment.text[run_start..], run_style));
    runs
}

/// Show a test string on one line with escapes for newlines
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('\n', "\\n"))
}

/// Greedy word wrap by display width
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.width() + 1 + word.width() > width {
            rows.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Truncate a string to fit within a display width
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result
}
