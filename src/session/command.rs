//! Operator command table.
//!
//! Hosts register these names with their own dispatcher and route each
//! invocation to [`TrammingSession::run`](super::TrammingSession::run).

use crate::config::Target;

/// A named, argument-free operator command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Probe the bed center and store it as the reference.
    ProbeCenter,
    /// Probe one screw and report its adjustment.
    ProbeScrew(Target),
    /// Probe every screw in sequence.
    ProbeAllScrews,
}

impl Command {
    /// Every command, in registration order.
    pub const ALL: [Command; 8] = [
        Command::ProbeCenter,
        Command::ProbeScrew(Target::FrontLeft),
        Command::ProbeScrew(Target::FrontRight),
        Command::ProbeScrew(Target::BackLeft),
        Command::ProbeScrew(Target::BackRight),
        Command::ProbeScrew(Target::LeftMiddle),
        Command::ProbeScrew(Target::RightMiddle),
        Command::ProbeAllScrews,
    ];

    /// Center compared against the stored reference; not registered by default.
    pub const CENTER_CHECK: Command = Command::ProbeScrew(Target::Center);

    /// Command name as typed by the operator.
    pub const fn name(self) -> &'static str {
        match self {
            Command::ProbeCenter => "PROBE_CENTER",
            Command::ProbeScrew(Target::Center) => "PROBE_SCREW_CENTER",
            Command::ProbeScrew(Target::FrontLeft) => "PROBE_SCREW_FL",
            Command::ProbeScrew(Target::FrontRight) => "PROBE_SCREW_FR",
            Command::ProbeScrew(Target::BackLeft) => "PROBE_SCREW_BL",
            Command::ProbeScrew(Target::BackRight) => "PROBE_SCREW_BR",
            Command::ProbeScrew(Target::LeftMiddle) => "PROBE_SCREW_LM",
            Command::ProbeScrew(Target::RightMiddle) => "PROBE_SCREW_RM",
            Command::ProbeAllScrews => "PROBE_ALL_SCREWS",
        }
    }

    /// One-line help text.
    pub const fn help(self) -> &'static str {
        match self {
            Command::ProbeCenter => "Probe bed center and store as reference",
            Command::ProbeScrew(Target::Center) => "Probe bed center and compare against the reference",
            Command::ProbeScrew(Target::FrontLeft) => "Probe front left screw",
            Command::ProbeScrew(Target::FrontRight) => "Probe front right screw",
            Command::ProbeScrew(Target::BackLeft) => "Probe back left screw",
            Command::ProbeScrew(Target::BackRight) => "Probe back right screw",
            Command::ProbeScrew(Target::LeftMiddle) => "Probe left middle screw",
            Command::ProbeScrew(Target::RightMiddle) => "Probe right middle screw",
            Command::ProbeAllScrews => "Probe all screw positions in sequence",
        }
    }

    /// Look up a command by name, ignoring ASCII case.
    ///
    /// Also resolves [`CENTER_CHECK`](Self::CENTER_CHECK), so every
    /// representable command round-trips through [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .chain(core::iter::once(Self::CENTER_CHECK))
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Whether the command needs a stored center reference.
    #[inline]
    pub const fn requires_reference(self) -> bool {
        !matches!(self, Command::ProbeCenter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_lookup() {
        for command in Command::ALL {
            assert_eq!(Command::from_name(command.name()), Some(command));
        }
        assert_eq!(
            Command::from_name("probe_screw_fl"),
            Some(Command::ProbeScrew(Target::FrontLeft))
        );
        assert_eq!(Command::from_name(" PROBE_ALL_SCREWS "), Some(Command::ProbeAllScrews));
        assert_eq!(Command::from_name("PROBE_SCREW_XX"), None);
    }

    #[test]
    fn test_every_command_name_round_trips() {
        for target in Target::ALL {
            let command = Command::ProbeScrew(target);
            assert_eq!(Command::from_name(command.name()), Some(command));
        }
        assert_eq!(Command::from_name(Command::ProbeCenter.name()), Some(Command::ProbeCenter));
        assert_eq!(Command::from_name(Command::ProbeAllScrews.name()), Some(Command::ProbeAllScrews));
    }

    #[test]
    fn test_center_check_is_distinct_from_center() {
        assert_ne!(Command::CENTER_CHECK.name(), Command::ProbeCenter.name());
        assert_eq!(Command::from_name("PROBE_CENTER"), Some(Command::ProbeCenter));
        assert_eq!(Command::from_name("probe_screw_center"), Some(Command::CENTER_CHECK));
        assert!(Command::CENTER_CHECK.requires_reference());
        assert!(!Command::ALL.contains(&Command::CENTER_CHECK));
    }

    #[test]
    fn test_center_is_the_only_unguarded_command() {
        let unguarded: Vec<_> = Command::ALL
            .iter()
            .filter(|c| !c.requires_reference())
            .collect();
        assert_eq!(unguarded, [&Command::ProbeCenter]);
    }

    #[test]
    fn test_every_screw_has_a_command() {
        for target in Target::SCREWS {
            assert!(Command::ALL.contains(&Command::ProbeScrew(target)));
        }
    }
}
