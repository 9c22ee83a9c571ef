// ABOUTME: Builders for `lxc profile` sub-commands.
// ABOUTME: Profile names can be qualified with a remote.

use super::{LxcCommand, qualify};

/// `lxc profile create [<remote>:]<profile>`
pub fn profile_create(name: &str, remote: Option<&str>) -> LxcCommand {
    LxcCommand::new(["profile", "create"]).arg(qualify(remote, name))
}

/// `lxc profile copy [<remote>:]<profile> [<remote>:]<profile>`
pub fn profile_copy(
    src_name: &str,
    dst_name: &str,
    src_remote: Option<&str>,
    dst_remote: Option<&str>,
) -> LxcCommand {
    LxcCommand::new(["profile", "copy"])
        .arg(qualify(src_remote, src_name))
        .arg(qualify(dst_remote, dst_name))
}

/// `lxc profile set [<remote>:]<profile> <key> <value>`
pub fn profile_set(name: &str, key: &str, value: &str, remote: Option<&str>) -> LxcCommand {
    LxcCommand::new(["profile", "set"])
        .arg(qualify(remote, name))
        .arg(key)
        .arg(value)
}

/// `lxc profile delete [<remote>:]<profile>`
pub fn profile_delete(name: &str, remote: Option<&str>) -> LxcCommand {
    LxcCommand::new(["profile", "delete"]).arg(qualify(remote, name))
}
