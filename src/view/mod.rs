mod form;

use anyhow::Context;

use crate::config::Config;
use crate::document::{bind_toggle, Document, ElementHandle};
use crate::mode::TripMode;
use crate::toggle::TripTypeToggle;

pub struct View {
    config: Config,
    document: Document,
    toggle: TripTypeToggle<ElementHandle, ElementHandle>,
}

impl View {
    /// Builds the form and binds the trip type toggle to it. Failing to find
    /// one of the configured elements is fatal, the form is useless without them.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let document = Document::flight_search_form(&config.elements, config.markers.clone());
        let toggle = bind_toggle(&document, &config)
            .context("Failed to bind the trip type buttons to the form")?;
        Ok(Self {
            config,
            document,
            toggle,
        })
    }

    fn on_selector_clicked(&mut self, mode: TripMode) {
        match mode {
            TripMode::OneWay => self.toggle.select_one_way(),
            TripMode::RoundTrip => self.toggle.select_round_trip(),
        }
    }

    pub fn start(self) -> anyhow::Result<()> {
        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([420.0, 260.0]),
            ..Default::default()
        };
        eframe::run_native(
            "Flight Search",
            native_options,
            Box::new(|_cc| Box::new(self)),
        )
        .map_err(|err| anyhow::anyhow!("{err}"))
        .context("Failed to run the flight search window")
    }
}

impl eframe::App for View {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(t!("form.title"));
            ui.separator();
            if let Some(mode) = self.ui_form(ui) {
                self.on_selector_clicked(mode);
                // the click was handled after the widgets were laid out
                ctx.request_repaint();
            }
            ui.separator();
            ui.weak(t!(
                "form.trip_type.current",
                mode = t!(self.toggle.mode().label_key())
            ));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::View;
    use crate::config::Config;
    use crate::error::UiError;
    use crate::mode::TripMode;

    #[test]
    fn custom_return_date_id_is_bound() {
        let config = Config::from_yaml_str("elements:\n  return_date: return-date\n").unwrap();
        let mut view = View::new(config).unwrap();
        let return_date = view.document.get_element_by_id("return-date").unwrap();
        assert!(return_date.is_hidden());

        view.on_selector_clicked(TripMode::RoundTrip);
        assert_eq!(view.toggle.mode(), TripMode::RoundTrip);
        assert!(!return_date.is_hidden());
        assert!(!return_date.is_disabled());
    }

    #[test]
    fn clicks_reach_the_toggle() {
        let mut view = View::new(Config::default()).unwrap();
        let one_way = view.document.get_element_by_id("oneway-btn").unwrap();
        let return_date = view.document.get_element_by_id("return").unwrap();

        view.on_selector_clicked(TripMode::RoundTrip);
        view.on_selector_clicked(TripMode::OneWay);
        assert_eq!(view.toggle.mode(), TripMode::OneWay);
        assert!(one_way.is_active());
        assert!(return_date.is_hidden());
        assert!(return_date.is_disabled());
    }

    #[test]
    fn return_date_that_is_a_button_is_fatal() {
        let config = Config::from_yaml_str(
            "elements:\n  one_way: shared\n  return_date: shared\n",
        )
        .unwrap();
        let err = View::new(config).err().unwrap();
        // the first element with an id wins, here the one way button
        assert_eq!(
            err.downcast_ref::<UiError>(),
            Some(&UiError::NotAnInput("shared".to_owned()))
        );
    }
}
