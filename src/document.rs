//! The desktop stand-in for the browser DOM: a flat list of form elements,
//! addressed by id, with classes and a disabled attribute.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::config::{Config, ElementIds, MarkerClasses};
use crate::error::UiError;
use crate::toggle::{DependentField, Selector, TripTypeToggle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Button,
    Input,
    DateInput,
}

impl ElementKind {
    pub fn is_input(self) -> bool {
        matches!(self, ElementKind::Input | ElementKind::DateInput)
    }
}

#[derive(Debug)]
pub struct Element {
    pub id: String,
    pub kind: ElementKind,
    /// i18n key of the caption or the input label
    pub label_key: &'static str,
    pub classes: BTreeSet<String>,
    pub disabled: bool,
    pub value: String,
}

impl Element {
    fn new(id: &str, kind: ElementKind, label_key: &'static str) -> Self {
        Self {
            id: id.to_owned(),
            kind,
            label_key,
            classes: BTreeSet::new(),
            disabled: false,
            value: String::new(),
        }
    }

    fn set_class(&mut self, class: &str, present: bool) {
        if present {
            self.classes.insert(class.to_owned());
        } else {
            self.classes.remove(class);
        }
    }
}

/// Shared reference to one element of a [`Document`]. The view reads through
/// it while the toggle writes through it, all on the UI thread.
#[derive(Debug, Clone)]
pub struct ElementHandle {
    element: Rc<RefCell<Element>>,
    markers: Rc<MarkerClasses>,
}

impl ElementHandle {
    pub fn id(&self) -> String {
        self.element.borrow().id.clone()
    }

    pub fn kind(&self) -> ElementKind {
        self.element.borrow().kind
    }

    pub fn label_key(&self) -> &'static str {
        self.element.borrow().label_key
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.element.borrow().classes.contains(class)
    }

    pub fn is_active(&self) -> bool {
        self.has_class(&self.markers.active)
    }

    pub fn is_hidden(&self) -> bool {
        self.has_class(&self.markers.hidden)
    }

    pub fn is_disabled(&self) -> bool {
        self.element.borrow().disabled
    }

    /// gives mutable access to the text of an input, e.g. for a text edit widget
    pub fn with_value_mut<R>(&self, f: impl FnOnce(&mut String) -> R) -> R {
        f(&mut self.element.borrow_mut().value)
    }
}

impl Selector for ElementHandle {
    fn set_active(&mut self, active: bool) {
        self.element
            .borrow_mut()
            .set_class(&self.markers.active, active);
    }
}

impl DependentField for ElementHandle {
    fn set_enabled(&mut self, enabled: bool) {
        self.element.borrow_mut().disabled = !enabled;
    }

    fn set_visible(&mut self, visible: bool) {
        self.element
            .borrow_mut()
            .set_class(&self.markers.hidden, !visible);
    }
}

pub struct Document {
    elements: Vec<ElementHandle>,
    by_id: HashMap<String, usize>,
}

impl Document {
    fn with_elements(elements: Vec<Element>, markers: MarkerClasses) -> Self {
        let markers = Rc::new(markers);
        let mut by_id = HashMap::new();
        let handles = elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| {
                // first one wins, like getElementById
                by_id.entry(element.id.clone()).or_insert(index);
                ElementHandle {
                    element: Rc::new(RefCell::new(element)),
                    markers: markers.clone(),
                }
            })
            .collect();
        Self {
            elements: handles,
            by_id,
        }
    }

    /// The flight search form: where from, where to, departure, trip type and return date.
    /// The trip type buttons and the return date carry the given ids.
    pub fn flight_search_form(ids: &ElementIds, markers: MarkerClasses) -> Self {
        Self::with_elements(
            vec![
                Element::new("from", ElementKind::Input, "form.from"),
                Element::new("to", ElementKind::Input, "form.to"),
                Element::new(&ids.one_way, ElementKind::Button, "form.trip_type.one_way"),
                Element::new(
                    &ids.round_trip,
                    ElementKind::Button,
                    "form.trip_type.round_trip",
                ),
                Element::new("depart", ElementKind::DateInput, "form.depart"),
                Element::new(&ids.return_date, ElementKind::DateInput, "form.return"),
            ],
            markers,
        )
    }

    pub fn get_element_by_id(&self, id: &str) -> Result<ElementHandle, UiError> {
        self.by_id
            .get(id)
            .map(|index| self.elements[*index].clone())
            .ok_or_else(|| UiError::MissingElement(id.to_owned()))
    }

    /// all elements in document order
    pub fn elements(&self) -> &[ElementHandle] {
        &self.elements
    }
}

/// Look up the configured elements and hand them to a new toggle.
pub fn bind_toggle(
    document: &Document,
    config: &Config,
) -> Result<TripTypeToggle<ElementHandle, ElementHandle>, UiError> {
    let ids = &config.elements;
    let one_way = document.get_element_by_id(&ids.one_way)?;
    let round_trip = document.get_element_by_id(&ids.round_trip)?;
    let return_date = document.get_element_by_id(&ids.return_date)?;
    if !return_date.kind().is_input() {
        return Err(UiError::NotAnInput(ids.return_date.clone()));
    }
    Ok(TripTypeToggle::new(one_way, round_trip, return_date))
}
