//! Browser binding: attaches the trip type toggle to the page markup.
use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::config::Config;
use crate::error::UiError;
use crate::mode::TripMode;
use crate::toggle::{DependentField, Selector, TripTypeToggle};

type DomToggle = TripTypeToggle<DomSelector, DomField>;

fn set_class(element: &Element, class: &str, present: bool) {
    let list = element.class_list();
    let result = if present {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(err) = result {
        warn!("Failed to update class `{class}` of #{}: {err:?}", element.id());
    }
}

pub struct DomSelector {
    element: Element,
    active_class: String,
}

impl Selector for DomSelector {
    fn set_active(&mut self, active: bool) {
        set_class(&self.element, &self.active_class, active);
    }
}

pub struct DomField {
    input: HtmlInputElement,
    hidden_class: String,
}

impl DependentField for DomField {
    fn set_enabled(&mut self, enabled: bool) {
        self.input.set_disabled(!enabled);
    }

    fn set_visible(&mut self, visible: bool) {
        set_class(&self.input, &self.hidden_class, !visible);
    }
}

/// Look up the configured elements in the current document, build the toggle
/// and route clicks on the two selectors into it. The listeners stay registered
/// for the lifetime of the page.
pub fn bind_document(config: &Config) -> anyhow::Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .context("no global `document`")?;
    let ids = &config.elements;
    let lookup = |id: &str| {
        document
            .get_element_by_id(id)
            .ok_or_else(|| UiError::MissingElement(id.to_owned()))
    };

    let one_way = lookup(ids.selector_id(TripMode::OneWay))?;
    let round_trip = lookup(ids.selector_id(TripMode::RoundTrip))?;
    let return_date = lookup(&ids.return_date)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| UiError::NotAnInput(ids.return_date.clone()))?;

    let toggle = Rc::new(RefCell::new(DomToggle::new(
        DomSelector {
            element: one_way.clone(),
            active_class: config.markers.active.clone(),
        },
        DomSelector {
            element: round_trip.clone(),
            active_class: config.markers.active.clone(),
        },
        DomField {
            input: return_date,
            hidden_class: config.markers.hidden.clone(),
        },
    )));

    register_click_handler(&one_way, toggle.clone(), DomToggle::select_one_way)?;
    register_click_handler(&round_trip, toggle, DomToggle::select_round_trip)?;
    info!("trip type toggle bound to #{} and #{}", ids.one_way, ids.round_trip);
    Ok(())
}

fn register_click_handler(
    target: &Element,
    toggle: Rc<RefCell<DomToggle>>,
    select: fn(&mut DomToggle),
) -> anyhow::Result<()> {
    let cb = Closure::<dyn FnMut()>::new(move || select(&mut toggle.borrow_mut()));
    target
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .map_err(|err| anyhow::anyhow!("{err:?}"))
        .with_context(|| format!("Failed to listen for clicks on #{}", target.id()))?;

    // Prevent the closure from being freed, so it lives for the full session
    cb.forget();
    Ok(())
}
