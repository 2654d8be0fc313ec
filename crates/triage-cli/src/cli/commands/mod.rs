pub mod categories;
pub mod screen;

use super::args::{Cli, Command};

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Screen(args) => screen::run(args).await,
        Command::Categories => categories::run(),
    }
}
