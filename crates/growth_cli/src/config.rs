//! Parameter resolution for the `run` command.
//!
//! Values come from a preset scenario or a TOML file, then individual flags override them.
//! A TOML file used without overrides deserializes straight into `ModelParameters`.
//! Without a base every field has to be given on the command line.

use crate::cli::RunArgs;
use anyhow::{bail, Context, Result};
use growth_core::ModelParameters;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterFile {
    pub r: Option<f64>,
    pub k: Option<f64>,
    pub p0: Option<f64>,
    pub t_max: Option<f64>,
    pub dt: Option<f64>,
}

impl ParameterFile {
    pub fn parse(source: &str) -> Result<Self> {
        toml::from_str(source).context("Invalid parameter file")
    }

    fn from_params(params: &ModelParameters) -> Self {
        Self {
            r: Some(params.r()),
            k: Some(params.k()),
            p0: Some(params.p0()),
            t_max: Some(params.t_max()),
            dt: Some(params.dt()),
        }
    }

    fn overridden_by(self, other: ParameterFile) -> Self {
        Self {
            r: other.r.or(self.r),
            k: other.k.or(self.k),
            p0: other.p0.or(self.p0),
            t_max: other.t_max.or(self.t_max),
            dt: other.dt.or(self.dt),
        }
    }

    fn build(self) -> Result<ModelParameters> {
        let fields = [
            ("r", self.r),
            ("k", self.k),
            ("p0", self.p0),
            ("t_max", self.t_max),
            ("dt", self.dt),
        ];
        let missing: Vec<_> = fields
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            bail!(
                "Missing model parameters: {} (use --scenario, --config or the matching flags).",
                missing.join(", ")
            );
        }
        let [r, k, p0, t_max, dt] = fields.map(|(_, value)| value.unwrap_or_default());
        Ok(ModelParameters::new(r, k, p0, t_max, dt)?)
    }
}

/// Parses a complete parameter file, validating every field.
pub fn parse_parameters(source: &str) -> Result<ModelParameters> {
    toml::from_str(source).context("Invalid parameter file")
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read parameter file {}", path.display()))
}

pub fn resolve_parameters(args: &RunArgs) -> Result<ModelParameters> {
    let flags = ParameterFile {
        r: args.r,
        k: args.k,
        p0: args.p0,
        t_max: args.t_max,
        dt: args.dt,
    };
    let base = match (&args.scenario, &args.config) {
        (Some(scenario), _) => ParameterFile::from_params(&scenario.params()),
        (None, Some(path)) => {
            let source = read_source(path)?;
            let in_file = || format!("In {}", path.display());
            if flags == ParameterFile::default() {
                return parse_parameters(&source).with_context(in_file);
            }
            ParameterFile::parse(&source).with_context(in_file)?
        }
        (None, None) => ParameterFile::default(),
    };
    base.overridden_by(flags).build()
}
