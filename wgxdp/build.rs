use std::{env, fs, path::PathBuf};

use anyhow::{anyhow, Context as _};
use aya_build::cargo_metadata;

fn main() -> anyhow::Result<()> {
    if which::which("bpf-linker").is_err() {
        // Host-only builds (and `cargo test` of the user space crates) still work;
        // the loader refuses to start with an empty object.
        let out_dir = PathBuf::from(env::var_os("OUT_DIR").context("OUT_DIR is not set")?);
        fs::write(out_dir.join(env!("CARGO_PKG_NAME")), b"")
            .context("failed to write the placeholder eBPF object")?;
        println!("cargo:warning=bpf-linker not found in PATH, embedding an empty eBPF object");
        println!("cargo:rerun-if-env-changed=PATH");
        return Ok(());
    }

    let cargo_metadata::Metadata { packages, .. } = cargo_metadata::MetadataCommand::new()
        .no_deps()
        .exec()
        .context("MetadataCommand::exec")?;
    let ebpf_package = packages
        .into_iter()
        .find(|cargo_metadata::Package { name, .. }| name == "wgxdp-ebpf")
        .ok_or_else(|| anyhow!("wgxdp-ebpf package not found"))?;

    aya_build::build_ebpf([ebpf_package])
}
