use log::debug;

use crate::mode::TripMode;

/// One of the two mutually exclusive trip type buttons.
pub trait Selector {
    fn set_active(&mut self, active: bool);
}

/// The control whose availability follows the selected trip type, i.e. the return date input.
pub trait DependentField {
    fn set_enabled(&mut self, enabled: bool);
    fn set_visible(&mut self, visible: bool);
}

/// Two state machine that keeps the trip type buttons and the return date in sync.
///
/// The UI bindings only forward clicks to [`TripTypeToggle::set_mode`], so the
/// whole behaviour can be exercised without a live UI tree.
pub struct TripTypeToggle<S, F> {
    one_way: S,
    round_trip: S,
    return_date: F,
    mode: TripMode,
}

impl<S: Selector, F: DependentField> TripTypeToggle<S, F> {
    /// Takes ownership of the three element handles. The return date starts out
    /// disabled and hidden, the selectors are left as they are: one way is only
    /// implicitly selected until the user clicks something.
    pub fn new(one_way: S, round_trip: S, mut return_date: F) -> Self {
        return_date.set_enabled(false);
        return_date.set_visible(false);
        Self {
            one_way,
            round_trip,
            return_date,
            mode: TripMode::OneWay,
        }
    }

    pub fn set_mode(&mut self, mode: TripMode) {
        let round_trip = mode.is_round_trip();
        self.one_way.set_active(!round_trip);
        self.round_trip.set_active(round_trip);
        self.return_date.set_enabled(round_trip);
        self.return_date.set_visible(round_trip);

        debug!("trip type {} -> {mode}", self.mode);
        self.mode = mode;
    }

    pub fn select_one_way(&mut self) {
        self.set_mode(TripMode::OneWay);
    }

    pub fn select_round_trip(&mut self) {
        self.set_mode(TripMode::RoundTrip);
    }

    /// the mode that was selected last
    pub fn mode(&self) -> TripMode {
        self.mode
    }
}
