//! Preset parameter sets.

use crate::model::ModelParameters;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Bacteria,
    City,
    Fish,
}

#[derive(Debug, Clone, Copy)]
struct Preset {
    r: f64,
    k: f64,
    p0: f64,
    t_max: f64,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Bacteria, Scenario::City, Scenario::Fish];

    pub const DT: f64 = 0.1;

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Bacteria => "bacteria",
            Scenario::City => "city",
            Scenario::Fish => "fish",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Scenario::Bacteria => "Bacterial culture growth",
            Scenario::City => "Urban population growth",
            Scenario::Fish => "Fish stock in a pond",
        }
    }

    fn preset(&self) -> Preset {
        match self {
            Scenario::Bacteria => Preset {
                r: 0.5,
                k: 1000.0,
                p0: 10.0,
                t_max: 50.0,
            },
            Scenario::City => Preset {
                r: 0.03,
                k: 100_000.0,
                p0: 5000.0,
                t_max: 200.0,
            },
            Scenario::Fish => Preset {
                r: 0.2,
                k: 500.0,
                p0: 20.0,
                t_max: 50.0,
            },
        }
    }

    pub fn params(&self) -> ModelParameters {
        let Preset { r, k, p0, t_max } = self.preset();
        match ModelParameters::new(r, k, p0, t_max, Self::DT) {
            Ok(params) => params,
            Err(err) => unreachable!("preset {} is invalid: {err}", self.name()),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let known: Vec<_> = Scenario::ALL.iter().map(Scenario::name).collect();
                format!("unknown scenario '{s}' (expected one of: {})", known.join(", "))
            })
    }
}
