// ABOUTME: Builders for `lxc stop` and `lxc delete`.
// ABOUTME: Both accept one target or an ordered list of them.

use super::LxcCommand;
use crate::types::Targets;

/// `lxc stop <container> [<container>...]`
pub fn stop(targets: &Targets) -> LxcCommand {
    LxcCommand::new(["stop"]).args(targets.iter())
}

/// `lxc delete <container>[/<snapshot>] [...]`
pub fn delete(targets: &Targets) -> LxcCommand {
    LxcCommand::new(["delete"]).args(targets.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_single() {
        assert_eq!(stop(&"c1".into()).argv("lxc"), vec!["lxc", "stop", "c1"]);
    }

    #[test]
    fn stop_many_in_order() {
        let targets = Targets::from_vec(vec!["c3", "c1", "c2"]).unwrap();
        assert_eq!(stop(&targets).as_args(), ["stop", "c3", "c1", "c2"]);
    }

    #[test]
    fn delete_snapshot() {
        let targets = Targets::from_vec(vec!["c1/snap0", "r:c2"]).unwrap();
        assert_eq!(delete(&targets).as_args(), ["delete", "c1/snap0", "r:c2"]);
    }
}
