use anyhow::{anyhow, Context, Result};
use aya::{
    include_bytes_aligned,
    programs::{Xdp, XdpFlags},
    Ebpf, EbpfLoader,
};
use libc::{self, c_int};
use log::{debug, info};

/// Name of the `#[xdp]` function in the eBPF object.
pub const PROGRAM_NAME: &str = "wireguard_filter";

/// The eBPF object built by `build.rs`; empty when no `bpf-linker` was available.
pub fn bytecode() -> &'static [u8] {
    include_bytes_aligned!(concat!(env!("OUT_DIR"), "/", env!("CARGO_PKG_NAME")))
}

/// Parses the embedded object and loads the XDP program into the kernel.
///
/// Loading runs the verifier; the program is not attached anywhere yet.
pub fn load() -> Result<Ebpf> {
    let ret = set_rlimit();
    if ret != 0 {
        debug!("remove limit on locked memory failed, ret is: {}", ret);
    }

    let bytecode = bytecode();
    if bytecode.is_empty() {
        return Err(anyhow!(
            "the embedded eBPF object is empty, rebuild wgxdp with bpf-linker installed"
        ));
    }

    let mut ebpf = EbpfLoader::new()
        .load(bytecode)
        .context("failed to parse the eBPF object")?;
    program_mut(&mut ebpf)?
        .load()
        .context("failed to load the XDP program to the kernel")?;
    info!("loaded the XDP program {} into the kernel", PROGRAM_NAME);

    Ok(ebpf)
}

/// Attaches the loaded program to `iface`. It stays attached until `ebpf` is dropped.
pub fn attach(ebpf: &mut Ebpf, iface: &str, flags: XdpFlags) -> Result<()> {
    program_mut(ebpf)?.attach(iface, flags).with_context(|| {
        format!(
            "failed to attach the XDP program to the {} network interface",
            iface
        )
    })?;

    Ok(())
}

fn program_mut(ebpf: &mut Ebpf) -> Result<&mut Xdp> {
    let prog: &mut Xdp = ebpf
        .program_mut(PROGRAM_NAME)
        .ok_or_else(|| anyhow!("program {} not found in the eBPF object", PROGRAM_NAME))?
        .try_into()?;

    Ok(prog)
}

fn set_rlimit() -> c_int {
    let rlim = libc::rlimit {
        rlim_cur: libc::RLIM_INFINITY,
        rlim_max: libc::RLIM_INFINITY,
    };

    unsafe { libc::setrlimit(libc::RLIMIT_MEMLOCK, &rlim) }
}
