//! Shell completion scripts.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

/// Write the `shell` completion script for the CLI described by `C`,
/// registered under the command's own name.
pub fn write_completion<C: CommandFactory>(shell: Shell, out: &mut dyn Write) {
    let mut cmd = C::command();
    let name = cmd.get_name().to_owned();
    generate(shell, &mut cmd, name, out);
}
