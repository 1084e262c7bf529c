//! Property panel state.
//!
//! The panel is either the empty-state message or a form derived from the
//! selected element. It is re-derived on every selection change and after
//! every submit, so it never shows values older than the element's.

use pb_core::html::{render_empty_panel, render_form};
use pb_core::{Canvas, ElementId, FormValues, PropertyForm, apply_form, form_for};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Empty,
    Editing(PropertyForm),
}

#[derive(Debug, Default)]
pub struct PropertyPanel {
    state: PanelState,
}

impl PropertyPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// The element the form was derived for.
    pub fn target(&self) -> Option<ElementId> {
        match &self.state {
            PanelState::Editing(form) => Some(form.element),
            PanelState::Empty => None,
        }
    }

    /// Rebuild from the selected element's live values. A selection that
    /// no longer resolves shows the empty state.
    pub fn refresh(&mut self, canvas: &Canvas, selected: Option<ElementId>) {
        self.state = selected
            .and_then(|id| canvas.get(id).ok())
            .map(|element| PanelState::Editing(form_for(element)))
            .unwrap_or_default();
    }

    /// Write submitted values onto the element the form is for, then
    /// refresh. Never creates or removes elements. Returns `false` when
    /// there is no form to submit.
    pub fn submit(&mut self, canvas: &mut Canvas, values: &FormValues) -> bool {
        let Some(id) = self.target() else {
            return false;
        };
        let Ok(element) = canvas.get_mut(id) else {
            self.state = PanelState::Empty;
            return false;
        };
        apply_form(element, values);
        log::debug!("applied properties to {id}");
        self.refresh(canvas, Some(id));
        true
    }

    pub fn render_html(&self) -> String {
        match &self.state {
            PanelState::Empty => render_empty_panel(),
            PanelState::Editing(form) => render_form(form),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pb_core::html::EMPTY_PANEL_TEXT;
    use pb_core::{ElementKind, Point};

    #[test]
    fn refresh_follows_selection() {
        let mut canvas = Canvas::new();
        let id = canvas.create(ElementKind::Divider, Point::ZERO);
        let mut panel = PropertyPanel::new();
        panel.refresh(&canvas, Some(id));
        assert_eq!(panel.target(), Some(id));
        panel.refresh(&canvas, None);
        assert_eq!(panel.state(), &PanelState::Empty);
        assert!(panel.render_html().contains(EMPTY_PANEL_TEXT));
    }

    #[test]
    fn submit_updates_element_and_form() {
        let mut canvas = Canvas::new();
        let id = canvas.create(ElementKind::Divider, Point::ZERO);
        let mut panel = PropertyPanel::new();
        panel.refresh(&canvas, Some(id));
        let values = FormValues::new().with("dividerHeight", "6");
        assert!(panel.submit(&mut canvas, &values));
        assert_eq!(canvas.get(id).unwrap().style.get("height"), Some("6px"));
        match panel.state() {
            PanelState::Editing(form) => assert_eq!(form.value("dividerHeight"), Some("6")),
            PanelState::Empty => panic!("panel should still be editing"),
        }
    }

    #[test]
    fn submit_without_form_is_noop() {
        let mut canvas = Canvas::new();
        let mut panel = PropertyPanel::new();
        assert!(!panel.submit(&mut canvas, &FormValues::new()));
        assert_eq!(canvas.len(), 0);
    }
}
