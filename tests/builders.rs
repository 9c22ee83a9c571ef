// ABOUTME: Property tests for the argument builders.
// ABOUTME: Checks minimal vectors and that optional flags append independently.

use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use simple_lxd::command::*;
use simple_lxd::types::{ExecMode, Targets};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

mod minimal_vectors {
    use super::*;

    #[test]
    fn every_builder_without_options() {
        let cases = [
            (launch("img", "c1", &LaunchOptions::default()), vec!["launch", "img", "c1"]),
            (file_pull("c1", "/a", "b"), vec!["file", "pull", "c1/a", "b"]),
            (
                file_push("c1", "a", "/b", &PushOptions::default()),
                vec!["file", "push", "a", "c1/b"],
            ),
            (stop(&"c1".into()), vec!["stop", "c1"]),
            (delete(&"c1".into()), vec!["delete", "c1"]),
            (
                execute("c1", &["true"], &ExecOptions::default()),
                vec!["exec", "c1", "--mode=non-interactive", "--", "true"],
            ),
            (profile_create("p", None), vec!["profile", "create", "p"]),
            (profile_copy("p", "q", None, None), vec!["profile", "copy", "p", "q"]),
            (profile_set("p", "k", "v", None), vec!["profile", "set", "p", "k", "v"]),
            (profile_delete("p", None), vec!["profile", "delete", "p"]),
        ];

        for (cmd, expected) in cases {
            assert_eq!(cmd.as_args(), strings(&expected).as_slice());
            assert_eq!(cmd.argv(DEFAULT_PROGRAM)[0], "lxc");
        }
    }

    #[test]
    fn documented_examples() {
        assert_eq!(
            launch("ubuntu:20.04", "c1", &LaunchOptions::new().ephemeral(true)).argv("lxc"),
            ["lxc", "launch", "ubuntu:20.04", "c1", "--ephemeral"]
        );
        assert_eq!(
            profile_set("web", "limits.cpu", "2", Some("r1")).argv("lxc"),
            ["lxc", "profile", "set", "r1:web", "limits.cpu", "2"]
        );
    }
}

fn name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,10}"
}

proptest! {
    #[test]
    fn launch_flags_append_independently(
        ephemeral in any::<bool>(),
        profiles in vec(name(), 0..3),
        config in vec("[a-z.]{1,8}=[0-9]{1,3}", 0..3),
        instance_type in option::of("[a-z0-9.]{1,8}"),
    ) {
        let options = LaunchOptions {
            ephemeral,
            profiles: profiles.clone(),
            config: config.clone(),
            instance_type: instance_type.clone(),
        };
        let cmd = launch("img", "c1", &options);

        let mut expected = strings(&["launch", "img", "c1"]);
        if ephemeral {
            expected.push("--ephemeral".into());
        }
        for p in &profiles {
            expected.extend(["--profile".to_string(), p.clone()]);
        }
        for c in &config {
            expected.extend(["--config".to_string(), c.clone()]);
        }
        if let Some(t) = &instance_type {
            expected.extend(["--type".to_string(), t.clone()]);
        }
        prop_assert_eq!(cmd.as_args(), expected.as_slice());
    }

    #[test]
    fn push_modifiers_append_independently(
        uid in option::of("[0-9]{1,5}"),
        gid in option::of("[0-9]{1,5}"),
        mode in option::of("0[0-7]{3}"),
    ) {
        let options = PushOptions { uid: uid.clone(), gid: gid.clone(), mode: mode.clone() };
        let cmd = file_push("c1", "src", "/dst", &options);

        let mut expected = strings(&["file", "push"]);
        for (flag, value) in [("--uid", &uid), ("--gid", &gid), ("--mode", &mode)] {
            if let Some(value) = value {
                expected.extend([flag.to_string(), value.clone()]);
            }
        }
        expected.extend(strings(&["src", "c1/dst"]));
        prop_assert_eq!(cmd.as_args(), expected.as_slice());
    }

    #[test]
    fn stop_and_delete_keep_every_target_in_order(targets in vec(name(), 1..8)) {
        let list = Targets::from_vec(targets.clone()).unwrap();

        let stopped = stop(&list);
        prop_assert_eq!(stopped.as_args().len(), targets.len() + 1);
        prop_assert_eq!(&stopped.as_args()[1..], targets.as_slice());

        let deleted = delete(&list);
        prop_assert_eq!(&deleted.as_args()[1..], targets.as_slice());
    }

    #[test]
    fn exec_command_tokens_follow_separator(
        tokens in vec("[ -~]{0,12}", 1..5),
        env in vec("[A-Z]{1,4}=[a-z]{0,4}", 0..3),
    ) {
        let options = ExecOptions { mode: ExecMode::NonInteractive, env: env.clone() };
        let cmd = execute("c1", &tokens, &options);
        let args = cmd.as_args();

        let separator = 3 + env.len() * 2;
        prop_assert_eq!(args[separator].as_str(), "--");
        prop_assert_eq!(&args[separator + 1..], tokens.as_slice());
    }

    #[test]
    fn remote_qualifies_profile_names(remote in option::of(name()), profile in name()) {
        let cmd = profile_delete(&profile, remote.as_deref());
        let expected = match &remote {
            Some(r) => format!("{r}:{profile}"),
            None => profile.clone(),
        };
        prop_assert_eq!(cmd.as_args()[2].as_str(), expected.as_str());
    }
}
