use strum::IntoEnumIterator;

use super::View;
use crate::config::ElementIds;
use crate::document::{ElementHandle, ElementKind};
use crate::mode::TripMode;

impl View {
    /// Draws the form elements in document order. Consecutive buttons share a row.
    /// Returns the trip type whose selector was clicked this frame.
    pub(crate) fn ui_form(&self, ui: &mut egui::Ui) -> Option<TripMode> {
        let elements = self.document.elements();
        let mut clicked = None;

        egui::Grid::new("flight search form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                let mut rest = elements;
                while let Some(first) = rest.first() {
                    match first.kind() {
                        ElementKind::Input | ElementKind::DateInput => {
                            ui_input(ui, first);
                            rest = &rest[1..];
                        }
                        ElementKind::Button => {
                            let count = rest
                                .iter()
                                .take_while(|element| element.kind() == ElementKind::Button)
                                .count();
                            if let Some(mode) =
                                ui_selectors(ui, &rest[..count], &self.config.elements)
                            {
                                clicked = Some(mode);
                            }
                            rest = &rest[count..];
                        }
                    }
                }
            });

        clicked
    }
}

fn ui_input(ui: &mut egui::Ui, input: &ElementHandle) {
    if input.is_hidden() {
        return;
    }
    // read everything before handing out the mutable value
    let id = input.id();
    let enabled = !input.is_disabled();
    let is_date = input.kind() == ElementKind::DateInput;

    ui.label(t!(input.label_key()));
    input.with_value_mut(|value| {
        let mut edit = egui::TextEdit::singleline(value).id_source(id);
        if is_date {
            edit = edit.hint_text(t!("form.date_hint"));
        }
        ui.add_enabled(enabled, edit);
    });
    ui.end_row();
}

fn ui_selectors(
    ui: &mut egui::Ui,
    buttons: &[ElementHandle],
    ids: &ElementIds,
) -> Option<TripMode> {
    let mut clicked = None;
    ui.label(t!("form.trip_type.title"));
    ui.horizontal(|ui| {
        for button in buttons {
            let response = ui.selectable_label(button.is_active(), t!(button.label_key()));
            if response.clicked() {
                clicked = mode_for_selector(ids, &button.id());
            }
        }
    });
    ui.end_row();
    clicked
}

/// buttons that are not bound to a trip type are drawn but do nothing
fn mode_for_selector(ids: &ElementIds, id: &str) -> Option<TripMode> {
    TripMode::iter().find(|mode| ids.selector_id(*mode) == id)
}
