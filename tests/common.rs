use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Get a Command for rove
pub fn rove() -> Command {
    cargo_bin_cmd!("rove")
}
