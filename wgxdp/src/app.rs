use anyhow::{Context, Result};
use log::info;
use tokio::signal;
use wgxdp_common::WIREGUARD_PORT;

use crate::{cmd::Mode, config::Config, ebpf, util};

pub struct Application {
    pub ifaces: Vec<String>,
    pub mode: Mode,
}

impl Application {
    pub fn new(ifaces: Vec<String>, mode: Mode) -> Self {
        Self { ifaces, mode }
    }

    /// Loads the filter, attaches it to every iface and holds it there until Ctrl-C.
    pub async fn run(&self) -> Result<()> {
        let sys = util::uname().context("failed to read the kernel release")?;
        info!(
            "start wireguard filter, port: {}, mode: {:?}, kernel: {} ({})",
            WIREGUARD_PORT, self.mode, sys.release, sys.machine
        );

        util::lookup_interface(self.ifaces.iter().map(String::as_str))?;

        let mut ebpf = ebpf::load()?;
        for iface in self.ifaces.iter() {
            ebpf::attach(&mut ebpf, iface, self.mode.into())?;
            info!(
                "success to attach the XDP program to the {} network interface!",
                iface
            );
        }

        signal::ctrl_c()
            .await
            .context("failed to listen for the ctrl-c signal")?;
        info!("detaching the XDP program from {} interface(s)", self.ifaces.len());
        drop(ebpf);

        Ok(())
    }
}

impl From<Config> for Application {
    fn from(config: Config) -> Self {
        Self::new(config.ifaces, config.mode)
    }
}
