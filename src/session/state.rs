//! Tramming session: the center reference and the operator operations.

use crate::adjust::{evaluate, Adjustment};
use crate::config::units::Millimeters;
use crate::config::{validate_config, Target, TrammingConfig};
use crate::console::{respond, respond_rule, Console};
use crate::error::{PreconditionError, Result};
use crate::motion::Toolhead;
use crate::probe::{Probe, Sampler};

use super::command::Command;

/// Width of the banner and separator rules.
const RULE_WIDTH: usize = 50;

/// Adjustments from one full sweep, in visiting order.
pub type SweepReport = heapless::Vec<Adjustment, { Target::SCREWS.len() }>;

/// Stored center reference height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reference {
    /// No center probe has succeeded yet.
    #[default]
    Unset,
    /// Median center height from the most recent center probe.
    Set(Millimeters),
}

impl Reference {
    /// The stored height, if any.
    #[inline]
    pub fn height(self) -> Option<Millimeters> {
        match self {
            Reference::Unset => None,
            Reference::Set(z) => Some(z),
        }
    }

    /// Whether a reference has been recorded.
    #[inline]
    pub fn is_set(self) -> bool {
        matches!(self, Reference::Set(_))
    }
}

/// Output of a dispatched [`Command`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A new center reference was stored.
    Reference(Millimeters),
    /// One screw was evaluated.
    Screw(Adjustment),
    /// All screws were evaluated.
    Sweep(SweepReport),
}

/// Owns the collaborators and the single piece of session state.
///
/// `H` is the toolhead-plus-probe (see [`Machine`](crate::motion::Machine)
/// for pairing separate objects), `C` the operator console.
pub struct TrammingSession<H, C>
where
    H: Toolhead + Probe,
    C: Console,
{
    config: TrammingConfig,
    sampler: Sampler,
    reference: Reference,
    machine: H,
    console: C,
}

impl<H, C> TrammingSession<H, C>
where
    H: Toolhead + Probe,
    C: Console,
{
    /// Create a session with no reference recorded.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` fails validation.
    pub fn new(config: TrammingConfig, machine: H, console: C) -> Result<Self> {
        validate_config(&config)?;
        let sampler = Sampler::from_config(&config)?;
        Ok(Self {
            config,
            sampler,
            reference: Reference::Unset,
            machine,
            console,
        })
    }

    /// Active configuration.
    #[inline]
    pub fn config(&self) -> &TrammingConfig {
        &self.config
    }

    /// Current reference state.
    #[inline]
    pub fn reference(&self) -> Reference {
        self.reference
    }

    /// Borrow the machine.
    pub fn machine(&self) -> &H {
        &self.machine
    }

    /// Mutably borrow the machine.
    pub fn machine_mut(&mut self) -> &mut H {
        &mut self.machine
    }

    /// Borrow the console.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Tear the session down into its collaborators.
    pub fn into_parts(self) -> (H, C) {
        (self.machine, self.console)
    }

    /// Dispatch a named command.
    pub fn run(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::ProbeCenter => self.probe_center().map(Outcome::Reference),
            Command::ProbeScrew(target) => self.probe_screw(target).map(Outcome::Screw),
            Command::ProbeAllScrews => self.probe_all_screws().map(Outcome::Sweep),
        }
    }

    /// Probe the bed center and store the median as the reference.
    ///
    /// Replaces any earlier reference. On failure the earlier reference is kept.
    pub fn probe_center(&mut self) -> Result<Millimeters> {
        respond(&mut self.console, format_args!("Probing center reference point..."));

        let z = self.sample(Target::Center)?;
        self.reference = Reference::Set(z);
        info!("center reference set: {}", z.0);

        respond_rule(&mut self.console, '=', RULE_WIDTH);
        respond(&mut self.console, format_args!("Center reference set to Z={:.4}", z.0));
        respond(
            &mut self.console,
            format_args!("You can now probe individual screws or use PROBE_ALL_SCREWS"),
        );
        respond_rule(&mut self.console, '=', RULE_WIDTH);

        Ok(z)
    }

    /// Probe one target and report how to turn its screw.
    ///
    /// # Errors
    ///
    /// `PreconditionError::ReferenceNotSet` (before any motion) if the center
    /// has not been probed, or a hardware error from the sampler.
    pub fn probe_screw(&mut self, target: Target) -> Result<Adjustment> {
        let reference = self.require_reference()?;
        self.probe_and_report(target, reference)
    }

    /// Probe every screw in the fixed sweep order.
    ///
    /// The reference is checked once up front. A hardware failure at any
    /// screw ends the sweep and is returned; earlier results are discarded.
    pub fn probe_all_screws(&mut self) -> Result<SweepReport> {
        let reference = self.require_reference()?;

        respond_rule(&mut self.console, '=', RULE_WIDTH);
        respond(&mut self.console, format_args!("Probing all screw positions..."));
        respond_rule(&mut self.console, '=', RULE_WIDTH);

        let mut report = SweepReport::new();
        for target in Target::SCREWS {
            let adjustment = self.probe_and_report(target, reference)?;
            let pushed = report.push(adjustment);
            debug_assert!(pushed.is_ok(), "sweep report sized to SCREWS");
            respond_rule(&mut self.console, '-', RULE_WIDTH);
        }

        respond_rule(&mut self.console, '=', RULE_WIDTH);
        respond(
            &mut self.console,
            format_args!("All screws probed. Adjust as indicated and re-probe to verify."),
        );
        respond_rule(&mut self.console, '=', RULE_WIDTH);

        Ok(report)
    }

    fn require_reference(&self) -> Result<Millimeters> {
        self.reference.height().ok_or_else(|| {
            warn!("screw probe requested before center reference");
            PreconditionError::ReferenceNotSet.into()
        })
    }

    fn probe_and_report(&mut self, target: Target, reference: Millimeters) -> Result<Adjustment> {
        let z = self.sample(target)?;
        let position = self.config.target(target);
        let adjustment = evaluate(position.label.as_str(), z, reference, self.config.screw_pitch);
        debug!("{} delta {} turns {}", position.label.as_str(), adjustment.delta.0, adjustment.turns);
        adjustment.report(&mut self.console);
        Ok(adjustment)
    }

    fn sample(&mut self, target: Target) -> Result<Millimeters> {
        let position = self.config.target(target);
        self.sampler.sample(&mut self.machine, &mut self.console, position)
    }
}
