pub mod app;
pub mod cmd;
pub mod config;
pub mod ebpf;

pub mod util {
    use std::{
        ffi::{c_char, CStr, CString},
        io,
    };

    use anyhow::{anyhow, Result};

    pub fn uname() -> io::Result<SysInfo> {
        let mut buf = unsafe { std::mem::zeroed() };
        match unsafe { libc::uname(&mut buf) } {
            0 => Ok(SysInfo::from(buf)),
            _ => Err(io::Error::last_os_error()),
        }
    }

    #[derive(Debug)]
    pub struct SysInfo {
        pub sys_name: String,
        pub release: String,
        pub machine: String,
    }

    impl From<libc::utsname> for SysInfo {
        fn from(value: libc::utsname) -> Self {
            Self {
                sys_name: cstr(&value.sysname[..]).to_string_lossy().to_string(),
                release: cstr(&value.release[..]).to_string_lossy().to_string(),
                machine: cstr(&value.machine[..]).to_string_lossy().to_string(),
            }
        }
    }

    #[inline]
    fn cstr(buf: &[c_char]) -> &CStr {
        unsafe { CStr::from_ptr(buf.as_ptr()) }
    }

    /// Index of the named network interface, `None` if it does not exist.
    pub fn if_index(name: &str) -> Option<u32> {
        let name = CString::new(name).ok()?;
        match unsafe { libc::if_nametoindex(name.as_ptr()) } {
            0 => None,
            index => Some(index),
        }
    }

    /// Fails with every missing interface named, before anything is loaded.
    pub fn lookup_interface<'a, I>(ifaces: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let missing: Vec<&str> = ifaces
            .into_iter()
            .filter(|iface| if_index(iface).is_none())
            .collect();

        if !missing.is_empty() {
            return Err(anyhow!(
                "network interface not found: {}",
                missing.join(", ")
            ));
        }

        Ok(())
    }

}
