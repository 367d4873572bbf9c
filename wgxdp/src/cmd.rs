use aya::programs::XdpFlags;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

#[derive(Parser)]
#[command(disable_help_subcommand = true)]
pub struct Cmd {
    /// Set the log verbose.
    #[arg(
        short = 'v',
        default_value = "info",
        value_name = "verbose",
        global = true,
        value_parser = ["debug","info","warn","error"]
    )]
    pub verbose: String,

    /// XDP attach mode
    #[arg(
        short = 'm',
        value_name = "MODE",
        default_value_t = Mode::Skb,
        value_enum,
        global = true,
    )]
    pub mode: Mode,

    /// One or more ifaces to attach. (e.g. --iface lo,eth0...)
    #[arg(
        short = 'i',
        long = "iface",
        value_name = "iface,",
        value_delimiter = ',',
        global = true
    )]
    pub ifaces: Vec<String>,

    #[command(subcommand)]
    pub sub_cmd: SubCmd,
}

#[derive(ValueEnum, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Generic XDP, runs after the driver hands the frame to the stack
    #[default]
    Skb,

    /// Native XDP in the NIC driver
    Drv,

    /// Offloaded to the NIC
    Hw,
}

impl From<Mode> for XdpFlags {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Skb => XdpFlags::SKB_MODE,
            Mode::Drv => XdpFlags::DRV_MODE,
            Mode::Hw => XdpFlags::HW_MODE,
        }
    }
}

#[derive(Subcommand, Clone)]
pub enum SubCmd {
    /// Check whether the wireguard filter passes the kernel verifier, without attaching it
    Check,

    /// Attach the wireguard filter to the given ifaces until interrupted
    Attach,

    /// Running the wireguard filter with ifaces and mode from a configuration file
    Run(Run),
}

#[derive(Parser, Clone)]
pub struct Run {
    /// Specify the configuration file to be loaded by wgxdp
    pub config: String,
}
