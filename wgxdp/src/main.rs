use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::Parser;
use colored::Colorize;
use log::error;
use wgxdp::{
    app::Application,
    cmd::{Cmd, SubCmd},
    config::Config,
    ebpf,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cmd = Cmd::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cmd.verbose))
        .init();

    match run(cmd).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cmd: Cmd) -> Result<()> {
    match cmd.sub_cmd {
        SubCmd::Check => {
            ebpf::load()?;
            println!(
                "{} {} passed the kernel verifier",
                "ok".bright_green(),
                ebpf::PROGRAM_NAME
            );
            Ok(())
        }
        SubCmd::Attach => {
            if cmd.ifaces.is_empty() {
                return Err(anyhow!("no iface given, use -i to name at least one"));
            }
            Application::new(cmd.ifaces, cmd.mode).run().await
        }
        SubCmd::Run(run) => {
            let config = Config::load_config_path(&run.config)?;
            Application::from(config).run().await
        }
    }
}
