//! Field/layer navigation state.
//!
//! The viewer shows one layer at a time. [`ViewState`] holds the current
//! field and layer index and moves between them with wrap-around. Moving
//! to another field always starts at its first layer.

use crate::PlanMaps;

/// Shape of a plan as seen by navigation: field count and layers per field.
pub trait PlanShape {
    /// Number of fields.
    fn field_count(&self) -> usize;

    /// Number of layers in `field`.
    fn layer_count(&self, field: usize) -> usize;
}

impl PlanShape for PlanMaps {
    fn field_count(&self) -> usize {
        self.fields().len()
    }

    fn layer_count(&self, field: usize) -> usize {
        self.field(field).map_or(0, crate::Field::layer_count)
    }
}

/// A navigation request from a button or key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    NextField,
    PrevField,
    NextLayer,
    PrevLayer,
}

impl NavAction {
    /// Button caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            NavAction::NextField => "Next Field",
            NavAction::PrevField => "Previous Field",
            NavAction::NextLayer => "Next Layer",
            NavAction::PrevLayer => "Previous Layer",
        }
    }
}

/// Currently displayed field and energy layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    field: usize,
    layer: usize,
}

/// `(index + 1) mod len`, with an empty range pinned to 0.
fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

/// `(index - 1) mod len`, with an empty range pinned to 0.
fn wrap_prev(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + len - 1) % len
    }
}

impl ViewState {
    /// Current field index.
    #[must_use]
    pub fn field(&self) -> usize {
        self.field
    }

    /// Current layer index within the field.
    #[must_use]
    pub fn layer(&self) -> usize {
        self.layer
    }

    pub fn next_field<S: PlanShape + ?Sized>(&mut self, shape: &S) {
        self.field = wrap_next(self.field, shape.field_count());
        self.layer = 0;
    }

    pub fn prev_field<S: PlanShape + ?Sized>(&mut self, shape: &S) {
        self.field = wrap_prev(self.field, shape.field_count());
        self.layer = 0;
    }

    pub fn next_layer<S: PlanShape + ?Sized>(&mut self, shape: &S) {
        self.layer = wrap_next(self.layer, shape.layer_count(self.field));
    }

    pub fn prev_layer<S: PlanShape + ?Sized>(&mut self, shape: &S) {
        self.layer = wrap_prev(self.layer, shape.layer_count(self.field));
    }

    /// Applies `action` and reports whether the view changed.
    pub fn apply<S: PlanShape + ?Sized>(&mut self, action: NavAction, shape: &S) -> bool {
        let before = *self;
        match action {
            NavAction::NextField => self.next_field(shape),
            NavAction::PrevField => self.prev_field(shape),
            NavAction::NextLayer => self.next_layer(shape),
            NavAction::PrevLayer => self.prev_layer(shape),
        }
        *self != before
    }
}
