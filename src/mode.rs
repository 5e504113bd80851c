use strum_macros::{Display, EnumIter};

/// The two trip types a flight search can be made for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum TripMode {
    #[default]
    #[strum(serialize = "one-way")]
    OneWay,
    #[strum(serialize = "round-trip")]
    RoundTrip,
}

impl TripMode {
    /// only a round trip needs a return date
    pub fn is_round_trip(self) -> bool {
        self == TripMode::RoundTrip
    }

    /// i18n key of the caption shown on the selector for this mode
    pub fn label_key(self) -> &'static str {
        match self {
            TripMode::OneWay => "form.trip_type.one_way",
            TripMode::RoundTrip => "form.trip_type.round_trip",
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::TripMode;

    impl quickcheck::Arbitrary for TripMode {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            *g.choose(&[TripMode::OneWay, TripMode::RoundTrip]).unwrap()
        }
    }

    #[test]
    fn default_is_one_way() {
        assert_eq!(TripMode::default(), TripMode::OneWay);
    }

    #[test]
    fn only_round_trip_needs_a_return_date() {
        let needs_return: Vec<bool> = TripMode::iter().map(TripMode::is_round_trip).collect();
        assert_eq!(needs_return, vec![false, true]);
    }

    #[test]
    fn display_uses_kebab_case() {
        assert_eq!(TripMode::OneWay.to_string(), "one-way");
        assert_eq!(TripMode::RoundTrip.to_string(), "round-trip");
    }
}
