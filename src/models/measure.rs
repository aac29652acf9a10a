/// The single quantity displayed in the wide table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Hours,
    PersonDays,
}

impl Measure {
    pub fn from_flag(person_days: bool) -> Self {
        if person_days {
            Measure::PersonDays
        } else {
            Measure::Hours
        }
    }

    /// Display name: the accumulated column itself, or "Person Days".
    pub fn display_name(&self, accumulate: &str) -> String {
        match self {
            Measure::Hours => accumulate.to_string(),
            Measure::PersonDays => "Person Days".to_string(),
        }
    }

    /// Convert an hour total into this measure.
    /// Person days are rounded to one decimal, ties to even (2h → 0.2).
    pub fn convert(&self, hours: f64, hours_per_day: f64) -> f64 {
        match self {
            Measure::Hours => hours,
            Measure::PersonDays => (hours / hours_per_day * 10.0).round_ties_even() / 10.0,
        }
    }
}
