//! The initialization-input container handed from host callers to the parser.

use mr_core::{Accel, Density, Length, Real, kgpm3, m, mps2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::InputConfig;
use crate::environment::{EnvScalar, Environment};
use crate::error::InputResult;
use crate::numbering::Numbering;
use crate::record::{RecordKind, RecordSequence};

/// Raw textual description of a mooring system plus global environment
/// constants, populated by the host before the model is parsed.
///
/// Population is append-only: there is no clear or reset, so a new run
/// needs a new container.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "InitInputRepr", into = "InitInputRepr")
)]
pub struct InitInput {
    config: InputConfig,
    cable_library: RecordSequence,
    nodes: RecordSequence,
    elements: RecordSequence,
    solver_options: RecordSequence,
    environment: Environment,
    numbering: Numbering,
    coupled: bool,
}

/// Stored form: plain line lists, with each collection's kind implied by
/// its field name.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct InitInputRepr {
    #[serde(default)]
    config: InputConfig,
    #[serde(default)]
    cable_library: Vec<String>,
    #[serde(default)]
    nodes: Vec<String>,
    #[serde(default)]
    elements: Vec<String>,
    #[serde(default)]
    solver_options: Vec<String>,
    #[serde(default)]
    environment: Environment,
    #[serde(default)]
    numbering: Numbering,
    #[serde(default)]
    coupled: bool,
}

#[cfg(feature = "serde")]
impl From<InitInputRepr> for InitInput {
    fn from(repr: InitInputRepr) -> Self {
        Self {
            config: repr.config,
            cable_library: RecordSequence::from_lines(
                RecordKind::CableLibrary,
                repr.cable_library,
            ),
            nodes: RecordSequence::from_lines(RecordKind::Node, repr.nodes),
            elements: RecordSequence::from_lines(RecordKind::Element, repr.elements),
            solver_options: RecordSequence::from_lines(
                RecordKind::SolverOption,
                repr.solver_options,
            ),
            environment: repr.environment,
            numbering: repr.numbering,
            coupled: repr.coupled,
        }
    }
}

#[cfg(feature = "serde")]
impl From<InitInput> for InitInputRepr {
    fn from(input: InitInput) -> Self {
        Self {
            config: input.config,
            cable_library: input.cable_library.into_lines(),
            nodes: input.nodes.into_lines(),
            elements: input.elements.into_lines(),
            solver_options: input.solver_options.into_lines(),
            environment: input.environment,
            numbering: input.numbering,
            coupled: input.coupled,
        }
    }
}

impl Default for InitInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InitInput {
    pub fn new() -> Self {
        Self::with_config(InputConfig::default())
    }

    pub fn with_config(config: InputConfig) -> Self {
        tracing::debug!(env_sync = ?config.env_sync, "new init input");
        Self {
            config,
            cable_library: RecordSequence::new(RecordKind::CableLibrary),
            nodes: RecordSequence::new(RecordKind::Node),
            elements: RecordSequence::new(RecordKind::Element),
            solver_options: RecordSequence::new(RecordKind::SolverOption),
            environment: Environment::default(),
            numbering: Numbering::default(),
            coupled: false,
        }
    }

    pub fn config(&self) -> InputConfig {
        self.config
    }

    // ---- record collections -------------------------------------------------

    pub fn records(&self, kind: RecordKind) -> &RecordSequence {
        match kind {
            RecordKind::CableLibrary => &self.cable_library,
            RecordKind::Node => &self.nodes,
            RecordKind::Element => &self.elements,
            RecordKind::SolverOption => &self.solver_options,
        }
    }

    fn records_mut(&mut self, kind: RecordKind) -> &mut RecordSequence {
        match kind {
            RecordKind::CableLibrary => &mut self.cable_library,
            RecordKind::Node => &mut self.nodes,
            RecordKind::Element => &mut self.elements,
            RecordKind::SolverOption => &mut self.solver_options,
        }
    }

    pub fn push(&mut self, kind: RecordKind, line: impl Into<String>) {
        self.records_mut(kind).push(line);
    }

    /// Append every line in order; same as pushing them one at a time.
    pub fn extend<I, S>(&mut self, kind: RecordKind, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.records_mut(kind)
            .extend(lines.into_iter().map(Into::into));
    }

    pub fn get(&self, kind: RecordKind, index: usize) -> InputResult<&str> {
        self.records(kind).get(index)
    }

    pub fn get_signed(&self, kind: RecordKind, index: i64) -> InputResult<&str> {
        self.records(kind).get_signed(index)
    }

    pub fn get_mut(&mut self, kind: RecordKind, index: usize) -> InputResult<&mut String> {
        self.records_mut(kind).get_mut(index)
    }

    /// Trim the stored line in place; see [`RecordSequence::normalize`].
    pub fn normalize(&mut self, kind: RecordKind, index: usize) -> InputResult<&str> {
        self.records_mut(kind).normalize(index)
    }

    pub fn len(&self, kind: RecordKind) -> usize {
        self.records(kind).len()
    }

    pub fn push_cable_library(&mut self, line: impl Into<String>) {
        self.cable_library.push(line);
    }

    pub fn push_node(&mut self, line: impl Into<String>) {
        self.nodes.push(line);
    }

    pub fn push_element(&mut self, line: impl Into<String>) {
        self.elements.push(line);
    }

    pub fn push_solver_option(&mut self, line: impl Into<String>) {
        self.solver_options.push(line);
    }

    pub fn cable_library(&self, index: usize) -> InputResult<&str> {
        self.cable_library.get(index)
    }

    pub fn node(&self, index: usize) -> InputResult<&str> {
        self.nodes.get(index)
    }

    pub fn element(&self, index: usize) -> InputResult<&str> {
        self.elements.get(index)
    }

    pub fn solver_option(&self, index: usize) -> InputResult<&str> {
        self.solver_options.get(index)
    }

    pub fn sizeof_cable_library(&self) -> usize {
        self.cable_library.len()
    }

    pub fn sizeof_node_data(&self) -> usize {
        self.nodes.len()
    }

    pub fn sizeof_element_data(&self) -> usize {
        self.elements.len()
    }

    pub fn sizeof_solver_options(&self) -> usize {
        self.solver_options.len()
    }

    // ---- environment --------------------------------------------------------

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn set_gravity(&mut self, text: impl Into<String>) {
        let sync = self.config.env_sync;
        self.environment.gravity.set_text(text, sync, "gravity");
    }

    pub fn set_sea_density(&mut self, text: impl Into<String>) {
        let sync = self.config.env_sync;
        self.environment
            .sea_density
            .set_text(text, sync, "sea density");
    }

    pub fn set_depth(&mut self, text: impl Into<String>) {
        let sync = self.config.env_sync;
        self.environment.depth.set_text(text, sync, "depth");
    }

    pub fn set_gravity_f64(&mut self, value: Real) {
        let sync = self.config.env_sync;
        self.environment.gravity.set_value(value, sync, "gravity");
    }

    pub fn set_sea_density_f64(&mut self, value: Real) {
        let sync = self.config.env_sync;
        self.environment
            .sea_density
            .set_value(value, sync, "sea density");
    }

    pub fn set_depth_f64(&mut self, value: Real) {
        let sync = self.config.env_sync;
        self.environment.depth.set_value(value, sync, "depth");
    }

    pub fn gravity(&self) -> &str {
        self.environment.gravity.text()
    }

    pub fn sea_density(&self) -> &str {
        self.environment.sea_density.text()
    }

    pub fn depth(&self) -> &str {
        self.environment.depth.text()
    }

    pub fn gravity_f64(&self) -> Real {
        self.environment.gravity.value()
    }

    pub fn sea_density_f64(&self) -> Real {
        self.environment.sea_density.value()
    }

    pub fn depth_f64(&self) -> Real {
        self.environment.depth.value()
    }

    /// Gravity as a typed quantity, `None` while the numeric form is unset.
    pub fn gravity_accel(&self) -> Option<Accel> {
        typed(&self.environment.gravity, mps2)
    }

    pub fn sea_density_typed(&self) -> Option<Density> {
        typed(&self.environment.sea_density, kgpm3)
    }

    pub fn depth_length(&self) -> Option<Length> {
        typed(&self.environment.depth, m)
    }

    // ---- coupling + numbering -----------------------------------------------

    pub fn set_coupled(&mut self, coupled: bool) {
        tracing::debug!(coupled, "set coupling flag");
        self.coupled = coupled;
    }

    pub fn is_coupled(&self) -> bool {
        self.coupled
    }

    pub fn numbering(&self) -> &Numbering {
        &self.numbering
    }

    /// Counters advanced by the parser while it consumes node and element lines.
    pub fn numbering_mut(&mut self) -> &mut Numbering {
        &mut self.numbering
    }
}

fn typed<Q>(scalar: &EnvScalar, ctor: fn(f64) -> Q) -> Option<Q> {
    scalar.is_set().then(|| ctor(scalar.value()))
}
