use std::{collections::HashSet, fs::File, io, path::Path};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::cmd::Mode;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(rename(deserialize = "interfaces"))]
    pub ifaces: Vec<String>,

    #[serde(default)]
    pub mode: Mode,
}

impl Config {
    pub fn load_config_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::options()
            .read(true)
            .open(path)
            .with_context(|| format!("failed to open config file {}", path.display()))?;

        Self::load_config(file)
    }

    pub fn load_config<R>(reader: R) -> Result<Self>
    where
        R: io::Read,
    {
        let config: Self = serde_yaml::from_reader(reader)?;
        config.check()?;

        Ok(config)
    }

    pub fn check(&self) -> Result<()> {
        if self.ifaces.is_empty() {
            return Err(anyhow!("at least one interface must be configured"));
        }

        let mut seen = HashSet::with_capacity(self.ifaces.len());
        for iface in self.ifaces.iter() {
            if iface.trim().is_empty() {
                return Err(anyhow!("interface name must not be empty"));
            }
            // attaching twice to the same iface fails in the kernel
            if !seen.insert(iface.as_str()) {
                return Err(anyhow!("interface '{}' is listed more than once", iface));
            }
        }

        Ok(())
    }
}
