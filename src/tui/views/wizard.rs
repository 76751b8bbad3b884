//! Wizard view: step sidebar, field editors, inline errors and progress.
//!
//! Keys:
//! - `Tab` / `Shift+Tab` (or `Down` / `Up`) move between fields
//! - `Left` / `Right` cycle options, `Space` toggles checkboxes
//! - `Enter` moves to the next field, or to the next step from the last field
//! - `Ctrl+N` next step, `Esc` previous step, `Ctrl+S` skip
//! - `Alt+1..9` jump to a reached step, `Ctrl+D` submit

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};
use ratatui_textarea::TextArea;

use crate::core::wizard::{FieldDefinition, FieldType, FieldValue, Wizard};
use crate::tui::theme;

/// What the app should do after the view handled an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardInput {
    /// Not a wizard key.
    Ignored,
    /// Handled, nothing else to do.
    Consumed,
    /// A field value changed.
    Edited,
    /// The user asked to submit.
    Submit,
}

enum FieldEditor {
    Text(TextArea<'static>),
    /// Cursor over the field's options.
    Choice(usize),
    /// Checkbox without options.
    Toggle,
}

pub struct WizardViewState {
    wizard: Wizard,
    /// Step the editors were built for.
    step_index: usize,
    focus_index: usize,
    editors: Vec<FieldEditor>,
}

impl WizardViewState {
    pub fn new(wizard: Wizard) -> Self {
        let mut state = Self {
            wizard,
            step_index: usize::MAX,
            focus_index: 0,
            editors: Vec::new(),
        };
        state.sync_step();
        state
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut Wizard {
        &mut self.wizard
    }

    /// Swap in a new session (after submit or restore).
    pub fn replace(&mut self, wizard: Wizard) {
        self.wizard = wizard;
        self.step_index = usize::MAX;
        self.sync_step();
    }

    pub fn focus_index(&self) -> usize {
        self.focus_index
    }

    /// Rebuild the editors if the wizard moved to another step.
    pub fn sync_step(&mut self) {
        let index = self.wizard.current_step_index();
        if index == self.step_index {
            return;
        }

        self.step_index = index;
        self.focus_index = 0;
        self.editors = self
            .wizard
            .current_step()
            .fields
            .iter()
            .map(|field| build_editor(field, self.wizard.value(&field.id)))
            .collect();
        self.update_focus_styles();
    }

    // ── Input ───────────────────────────────────────────────────────────

    pub fn handle_input(&mut self, event: &Event) -> WizardInput {
        let key = match event {
            Event::Key(k) if k.kind == KeyEventKind::Press => *k,
            _ => return WizardInput::Ignored,
        };

        let result = match self.handle_navigation_key(key) {
            Some(result) => result,
            None => self.handle_field_key(key, event),
        };
        self.sync_step();
        result
    }

    fn handle_navigation_key(&mut self, key: KeyEvent) -> Option<WizardInput> {
        let field_count = self.editors.len();

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('n')) => {
                self.wizard.next();
                Some(WizardInput::Consumed)
            }
            (KeyModifiers::CONTROL, KeyCode::Char('s')) => {
                self.wizard.skip();
                Some(WizardInput::Consumed)
            }
            (KeyModifiers::CONTROL, KeyCode::Char('d')) => Some(WizardInput::Submit),
            (KeyModifiers::ALT, KeyCode::Char(c)) if c.is_ascii_digit() && c != '0' => {
                let target = c as usize - '1' as usize;
                self.wizard.go_to(target);
                Some(WizardInput::Consumed)
            }
            (_, KeyCode::Esc) => {
                self.wizard.previous();
                Some(WizardInput::Consumed)
            }
            (_, KeyCode::Tab) | (_, KeyCode::Down) if field_count > 0 => {
                self.focus_index = (self.focus_index + 1) % field_count;
                self.update_focus_styles();
                Some(WizardInput::Consumed)
            }
            (_, KeyCode::BackTab) | (_, KeyCode::Up) if field_count > 0 => {
                self.focus_index = (self.focus_index + field_count - 1) % field_count;
                self.update_focus_styles();
                Some(WizardInput::Consumed)
            }
            (KeyModifiers::NONE, KeyCode::Enter) if !self.focused_is_multiline() => {
                if self.focus_index + 1 < field_count {
                    self.focus_index += 1;
                    self.update_focus_styles();
                } else if self.wizard.is_terminal_step() {
                    return Some(WizardInput::Submit);
                } else {
                    self.wizard.next();
                }
                Some(WizardInput::Consumed)
            }
            _ => None,
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent, event: &Event) -> WizardInput {
        let Some(field) = self.wizard.current_step().fields.get(self.focus_index).cloned() else {
            return WizardInput::Ignored;
        };
        let Some(editor) = self.editors.get_mut(self.focus_index) else {
            return WizardInput::Ignored;
        };

        let value: FieldValue = match editor {
            FieldEditor::Text(area) => {
                if !area.input(event.clone()) {
                    return WizardInput::Consumed;
                }
                text_value(area).into()
            }
            FieldEditor::Choice(cursor) => {
                let count = field.options.len();
                match key.code {
                    KeyCode::Right | KeyCode::Char('l') => *cursor = (*cursor + 1) % count,
                    KeyCode::Left | KeyCode::Char('h') => *cursor = (*cursor + count - 1) % count,
                    KeyCode::Char(' ') if field.field_type == FieldType::Checkbox => {}
                    _ => return WizardInput::Consumed,
                }
                match field.field_type {
                    // Multi-select only changes on Space
                    FieldType::Checkbox if key.code != KeyCode::Char(' ') => {
                        return WizardInput::Consumed
                    }
                    FieldType::Checkbox => {
                        toggle_option(self.wizard.value(&field.id), &field.options[*cursor].value)
                    }
                    _ => field.options[*cursor].value.clone().into(),
                }
            }
            FieldEditor::Toggle => {
                if key.code != KeyCode::Char(' ') {
                    return WizardInput::Consumed;
                }
                let checked = matches!(self.wizard.value(&field.id), Some(FieldValue::Bool(true)));
                FieldValue::Bool(!checked)
            }
        };

        self.wizard.set_field(&field.id, value);
        WizardInput::Edited
    }

    fn focused_is_multiline(&self) -> bool {
        self.wizard
            .current_step()
            .fields
            .get(self.focus_index)
            .is_some_and(|f| f.field_type == FieldType::Textarea)
    }

    fn update_focus_styles(&mut self) {
        for (i, editor) in self.editors.iter_mut().enumerate() {
            if let FieldEditor::Text(area) = editor {
                if i == self.focus_index {
                    area.set_style(Style::default().fg(theme::TEXT));
                    area.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
                } else {
                    area.set_style(Style::default().fg(theme::TEXT_MUTED));
                    area.set_cursor_style(Style::default());
                }
            }
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::horizontal([Constraint::Length(28), Constraint::Min(30)]).split(area);
        self.render_steps(frame, chunks[0]);

        let main = Layout::vertical([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Fields
            Constraint::Length(3), // Progress
        ])
        .split(chunks[1]);

        self.render_header(frame, main[0]);
        self.render_fields(frame, main[1]);
        self.render_progress(frame, main[2]);
    }

    fn render_steps(&self, frame: &mut Frame, area: Rect) {
        let progress = self.wizard.progress();
        let visible = self.wizard.visible_steps();

        let items: Vec<ListItem> = self
            .wizard
            .definition()
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let (marker, style) = if i == progress.current_step_index {
                    ("▸", theme::highlight())
                } else if !visible.contains(&i) {
                    ("–", theme::dim().add_modifier(Modifier::CROSSED_OUT))
                } else if progress.completed_step_indices.contains(&i) {
                    ("✓", Style::default().fg(theme::SUCCESS))
                } else if self.wizard.is_step_reachable(i) {
                    ("○", Style::default().fg(theme::TEXT))
                } else {
                    ("○", theme::dim())
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {marker} {}. ", i + 1), style),
                    Span::styled(step.title.clone(), style),
                ]))
            })
            .collect();

        let list = List::new(items).block(theme::block_default(&self.wizard.definition().title));
        frame.render_widget(list, area);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let step = self.wizard.current_step();
        let mut spans = vec![Span::styled(step.title.clone(), theme::title())];
        if let Some(subtitle) = &step.subtitle {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(subtitle.clone(), theme::muted()));
        }
        if step.settings.allow_skip {
            spans.push(Span::styled("  (optional)", theme::dim()));
        }

        let header = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(theme::border_default()),
        );
        frame.render_widget(header, area);
    }

    fn render_fields(&self, frame: &mut Frame, area: Rect) {
        let step = self.wizard.current_step();
        let errors = self.wizard.errors();

        let mut constraints: Vec<Constraint> = step
            .fields
            .iter()
            .map(|field| {
                let height = if field.field_type == FieldType::Textarea { 5 } else { 3 };
                let error = u16::from(errors.contains(&field.id));
                Constraint::Length(height + error)
            })
            .collect();
        constraints.push(Constraint::Length(1)); // Step error
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1)); // Key hints
        let chunks = Layout::vertical(constraints).split(area);

        for (i, (field, editor)) in step.fields.iter().zip(&self.editors).enumerate() {
            let focused = i == self.focus_index;
            let rows = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(chunks[i]);
            let block = field_block(field, focused);

            match editor {
                FieldEditor::Text(text) => {
                    let mut text = text.clone();
                    text.set_block(block);
                    frame.render_widget(&text, rows[0]);
                }
                FieldEditor::Choice(cursor) => {
                    let line = self.choice_line(field, *cursor, focused);
                    frame.render_widget(Paragraph::new(line).block(block), rows[0]);
                }
                FieldEditor::Toggle => {
                    let checked = matches!(self.wizard.value(&field.id), Some(FieldValue::Bool(true)));
                    let mark = if checked { "[x]" } else { "[ ]" };
                    let line = Line::from(vec![
                        Span::styled(mark, if focused { theme::highlight() } else { theme::muted() }),
                        Span::raw(" "),
                        Span::raw(field.display_label().to_string()),
                    ]);
                    frame.render_widget(Paragraph::new(line).block(block), rows[0]);
                }
            }

            if let Some(message) = errors.get(&field.id) {
                frame.render_widget(
                    Paragraph::new(Span::styled(format!(" {message}"), Style::default().fg(theme::ERROR))),
                    rows[1],
                );
            }
        }

        let n = step.fields.len();
        if let Some(message) = errors.step_error() {
            frame.render_widget(
                Paragraph::new(Span::styled(format!(" ⚠ {message}"), Style::default().fg(theme::ERROR)))
                    .wrap(Wrap { trim: true }),
                chunks[n],
            );
        }
        frame.render_widget(Paragraph::new(key_hints(&self.wizard)), chunks[n + 2]);
    }

    fn choice_line(&self, field: &FieldDefinition, cursor: usize, focused: bool) -> Line<'static> {
        let current = self.wizard.value(&field.id);
        let mut spans = Vec::new();

        for (i, option) in field.options.iter().enumerate() {
            let selected = match current {
                Some(FieldValue::List(items)) => items.contains(&option.value),
                Some(value) => value.as_text() == option.value,
                None => false,
            };
            let mark = match (field.field_type, selected) {
                (FieldType::Checkbox, true) => "[x]",
                (FieldType::Checkbox, false) => "[ ]",
                (_, true) => "(•)",
                (_, false) => "( )",
            };
            let style = if focused && i == cursor {
                theme::highlight()
            } else if selected {
                Style::default().fg(theme::PRIMARY_LIGHT)
            } else {
                theme::muted()
            };
            spans.push(Span::styled(format!("{mark} {}", option.label), style));
            spans.push(Span::raw("   "));
        }
        Line::from(spans)
    }

    fn render_progress(&self, frame: &mut Frame, area: Rect) {
        let progress = self.wizard.progress();
        let ratio = (progress.completion_percentage / 100.0).clamp(0.0, 1.0);
        let label = format!(
            "Step {} of {}  {:.0}%  ⏱ {}",
            progress.current_step_index + 1,
            progress.total_steps,
            progress.completion_percentage,
            self.wizard.elapsed_display()
        );

        let gauge = Gauge::default()
            .block(theme::block_default("Progress"))
            .gauge_style(Style::default().fg(theme::PRIMARY).bg(theme::BG_SURFACE))
            .ratio(ratio)
            .label(label);
        frame.render_widget(gauge, area);
    }
}

fn build_editor(field: &FieldDefinition, value: Option<&FieldValue>) -> FieldEditor {
    match field.field_type {
        FieldType::Select | FieldType::Radio => {
            let cursor = value
                .and_then(|v| field.options.iter().position(|o| o.value == v.as_text()))
                .unwrap_or(0);
            FieldEditor::Choice(cursor)
        }
        FieldType::Checkbox if !field.options.is_empty() => FieldEditor::Choice(0),
        FieldType::Checkbox => FieldEditor::Toggle,
        _ => {
            let lines: Vec<String> = match value {
                Some(v) => v.as_text().lines().map(str::to_string).collect(),
                None => Vec::new(),
            };
            let mut area = if lines.is_empty() {
                TextArea::default()
            } else {
                TextArea::new(lines)
            };
            if let Some(placeholder) = &field.placeholder {
                area.set_placeholder_text(placeholder.clone());
            }
            area.set_cursor_line_style(Style::default());
            FieldEditor::Text(area)
        }
    }
}

fn field_block(field: &FieldDefinition, focused: bool) -> Block<'static> {
    let required = if field.required { " *" } else { "" };
    let title = format!(" {}{} ", field.display_label(), required);
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if focused {
            theme::border_focused()
        } else {
            theme::border_default()
        })
}

fn text_value(area: &TextArea<'_>) -> String {
    area.lines().join("\n")
}

/// Add or remove `option` from a multi-select value.
fn toggle_option(current: Option<&FieldValue>, option: &str) -> FieldValue {
    let mut items: Vec<String> = current
        .and_then(FieldValue::as_list)
        .map(<[String]>::to_vec)
        .unwrap_or_default();
    match items.iter().position(|v| v == option) {
        Some(i) => {
            items.remove(i);
        }
        None => items.push(option.to_string()),
    }
    FieldValue::List(items)
}

fn key_hints(wizard: &Wizard) -> Line<'static> {
    let mut spans = vec![
        Span::styled("Tab", theme::key_hint()),
        Span::raw(":field "),
        Span::styled("Ctrl+N", theme::key_hint()),
        Span::raw(":next "),
        Span::styled("Esc", theme::key_hint()),
        Span::raw(":back "),
    ];
    if wizard.current_step().settings.allow_skip {
        spans.push(Span::styled("Ctrl+S", theme::key_hint()));
        spans.push(Span::raw(":skip "));
    }
    spans.push(Span::styled("Alt+1-9", theme::key_hint()));
    spans.push(Span::raw(":jump "));
    if wizard.is_terminal_step() {
        spans.push(Span::styled("Ctrl+D", theme::key_hint()));
        spans.push(Span::raw(":submit "));
    }
    spans.push(Span::styled("Ctrl+C", theme::key_hint()));
    spans.push(Span::raw(":quit"));
    Line::from(spans)
}
