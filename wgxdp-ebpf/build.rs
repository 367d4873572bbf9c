use which::which;

/// Building this crate has an undeclared dependency on the `bpf-linker` binary. Rerun the
/// build script whenever the binary on `PATH` changes so a linker upgrade rebuilds the object.
fn main() {
    if let Ok(bpf_linker) = which("bpf-linker") {
        println!("cargo:rerun-if-changed={}", bpf_linker.display());
    }
}
