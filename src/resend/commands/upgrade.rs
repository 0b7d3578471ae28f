use super::{CmdMessage, CmdResult, UpdateStatus};
use crate::version_check::{is_newer, VersionSource, UPGRADE_COMMAND};

pub const REGISTRY_UNREACHABLE: &str =
    "Could not reach the registry. Check your network or try again later.";

/// `upgrade check`: always asks the registry, ignoring the startup throttle.
pub fn run(source: &dyn VersionSource, current: &str) -> CmdResult {
    let Some(latest) = source.latest_version() else {
        return CmdResult::default().with_message(CmdMessage::error(REGISTRY_UNREACHABLE));
    };

    let update_available = is_newer(&latest, current);
    let mut result = CmdResult::default();
    if update_available {
        result.add_message(CmdMessage::success(format!(
            "A new version ({latest}) is available."
        )));
        result.add_message(CmdMessage::info(format!("You are on {current}.")));
        result.add_message(CmdMessage::info(format!("Upgrade with: {UPGRADE_COMMAND}")));
    } else {
        result.add_message(CmdMessage::success("You're on the latest version."));
    }

    result.with_update(UpdateStatus {
        current: current.to_string(),
        latest,
        update_available,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::version_check::fixed::FixedVersion;

    #[test]
    fn newer_version_shows_upgrade_command() {
        let result = run(&FixedVersion::new(Some("1.0.0")), "0.3.2");

        assert_eq!(result.messages[0].content, "A new version (1.0.0) is available.");
        assert_eq!(result.messages[1].content, "You are on 0.3.2.");
        assert!(result.messages[2].content.contains("cargo install resend-cli"));
        assert!(result.update.unwrap().update_available);
    }

    #[test]
    fn up_to_date() {
        let result = run(&FixedVersion::new(Some("0.3.2")), "0.3.2");

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "You're on the latest version.");
        assert!(!result.update.unwrap().update_available);
    }

    #[test]
    fn unreachable_registry_is_an_error_message() {
        let result = run(&FixedVersion::new(None), "0.3.2");

        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert_eq!(result.update, None);
    }
}
