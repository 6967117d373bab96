//! # AddressForm Component
//!
//! The three required address fields (zone, building, street) plus focus
//! handling. The form owns which field receives keystrokes; Tab/Shift+Tab
//! (and Up/Down) cycle focus. Enter submits only when every field is
//! non-empty — an incomplete form never produces an `AddressQuery`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::gis::AddressQuery;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::TextField;
use crate::tui::event::TuiEvent;

const FIELD_COUNT: usize = 3;

/// Height of one rendered field (content line + borders).
pub const FIELD_HEIGHT: u16 = 3;

/// Total height the form needs.
pub const FORM_HEIGHT: u16 = FIELD_HEIGHT * FIELD_COUNT as u16;

/// High-level events emitted by the AddressForm
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// All three fields filled, Enter pressed
    Submit(AddressQuery),
    /// Enter pressed with at least one empty field
    Incomplete,
}

pub struct AddressForm {
    zone: TextField,
    building: TextField,
    street: TextField,
    focus: usize,
}

impl AddressForm {
    pub fn new() -> Self {
        let mut form = Self {
            zone: TextField::new("Zone Number", "Enter zone number"),
            building: TextField::new("Building Number", "Enter building number"),
            street: TextField::new("Street Number", "Enter street number"),
            focus: 0,
        };
        form.sync_focus();
        form
    }

    // Display order: zone, building, street (the query order differs).
    fn fields_mut(&mut self) -> [&mut TextField; FIELD_COUNT] {
        [&mut self.zone, &mut self.building, &mut self.street]
    }

    fn sync_focus(&mut self) {
        let focus = self.focus;
        for (index, field) in self.fields_mut().into_iter().enumerate() {
            field.focused = index == focus;
        }
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FIELD_COUNT;
        self.sync_focus();
    }

    fn focus_prev(&mut self) {
        self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT;
        self.sync_focus();
    }

    /// True when every field has non-whitespace content.
    pub fn is_complete(&self) -> bool {
        !self.zone.is_empty() && !self.building.is_empty() && !self.street.is_empty()
    }

    fn query(&self) -> AddressQuery {
        AddressQuery::new(
            self.zone.buffer.clone(),
            self.street.buffer.clone(),
            self.building.buffer.clone(),
        )
    }
}

impl Default for AddressForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for AddressForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout = Layout::vertical([Constraint::Length(FIELD_HEIGHT); FIELD_COUNT]);
        let areas: [Rect; FIELD_COUNT] = layout.areas(area);

        for (field, field_area) in self.fields_mut().into_iter().zip(areas) {
            field.render(frame, field_area);
        }
    }
}

impl EventHandler for AddressForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::NextField => {
                self.focus_next();
                None
            }
            TuiEvent::PrevField => {
                self.focus_prev();
                None
            }
            TuiEvent::Submit => {
                if self.is_complete() {
                    Some(FormEvent::Submit(self.query()))
                } else {
                    Some(FormEvent::Incomplete)
                }
            }
            other => {
                let focus = self.focus;
                self.fields_mut()[focus].handle_event(other);
                None
            }
        }
    }
}
