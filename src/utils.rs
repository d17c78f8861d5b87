use std::ffi::{ CStr, CString };
use std::env::split_paths;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use anyhow::Result;

use crate::error::Error;

pub fn get_environment (var: &str) -> Option<String> {
    let var = CString::new(var).ok()?;
    unsafe  {
        let ptr = libc::getenv(var.as_ptr());
        if !ptr.is_null() {
            let c_env = CStr::from_ptr(ptr);

            c_env.to_str().ok().map(str::to_string)
        } else {
            None
        }
    }
}

#[derive(Debug)]
pub struct DirIter {
    dir: *mut libc::DIR
}

impl DirIter {
    pub fn from_dir(dir: *mut libc::DIR) -> Self {
        Self { dir }
    }
}

impl Iterator for DirIter {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.dir.is_null() {
            return None;
        }

        unsafe {
            let entry = libc::readdir(self.dir);
            if entry.is_null() {
                libc::closedir(self.dir);
                self.dir = std::ptr::null_mut();
                None
            } else {
                let dname = (*entry).d_name.as_ptr();
                Some(CStr::from_ptr(dname).to_string_lossy().to_string())
            }
        }
    }
}

impl Drop for DirIter {
    fn drop(&mut self) {
        if !self.dir.is_null() {
            unsafe { libc::closedir(self.dir); }
        }
    }
}

pub fn open_file <T: AsRef<str>>(path: T) -> Result<i32> {
    use libc::{ O_RDWR, O_CREAT, O_APPEND };
    use libc::{ S_IRUSR, S_IWUSR, S_IRGRP, S_IROTH };
    let path = CString::new(path.as_ref())?;
    let fd = unsafe {
        libc::open(path.as_ptr(), O_RDWR | O_CREAT | O_APPEND, S_IRUSR | S_IWUSR | S_IRGRP | S_IROTH)
    };

    if fd < 0 {
        let err = std::io::Error::last_os_error();
        return Err(Error::History(format!("{:?}: {err}", path)).into());
    }

    Ok(fd)
}

/// Appends `line` and a newline to an open file descriptor.
pub fn append_line (fd: i32, line: &str) -> Result<()> {
    let mut buf = Vec::with_capacity(line.len() + 1);
    buf.extend_from_slice(line.as_bytes());
    buf.push(b'\n');

    let written = unsafe { libc::write(fd, buf.as_ptr().cast(), buf.len()) };
    if written == -1 {
        return Err(std::io::Error::last_os_error().into());
    }

    Ok(())
}

pub fn read_directory<P> (dirname: P) -> Result<DirIter>
where
    P: AsRef<Path>,
{
    let dirname = dirname.as_ref().as_os_str();
    let c_dirname = CString::new(dirname.as_bytes())?;

    unsafe {
        let dir = libc::opendir(c_dirname.as_ptr());
        if dir.is_null() {
            let err = Error::OpenDir(format!("{}: {}", dirname.to_string_lossy(), std::io::Error::last_os_error()));
            return Err(err.into());
        }

        Ok(DirIter::from_dir(dir))
    }
}

pub fn get_system_binaries () -> Vec<String> {
    let path = get_environment("PATH").unwrap_or_default();
    let dirs = split_paths(&path);
    let mut res = Vec::new();

    for dir in dirs {
        match read_directory(&dir) {
            Ok(iter) => {
                let mut executables: Vec<String> = iter.filter(|e| e != "." && e != "..").collect();

                res.append(&mut executables);
            }
            Err(error) => log::warn!("skipping {}: {error}", dir.display()),
        }
    }

    log::debug!("found {} binaries in PATH", res.len());
    res
}

/// Longest prefix shared by every completion, never shorter than `word`.
pub fn longest_common_prefix <T: AsRef<str>>(word: &str, completions: &[T]) -> String {
    let Some((first, rest)) = completions.split_first() else {
        return word.to_string();
    };

    let mut lcp = first.as_ref().to_string();

    for comp in rest {
        let len = lcp.chars()
            .zip(comp.as_ref().chars())
            .take_while(|(a, b)| a == b)
            .map(|(ch, _)| ch.len_utf8())
            .sum();

        lcp.truncate(len);
    }

    if lcp.len() < word.len() { word.to_string() } else { lcp }
}

pub fn enable_raw_mode (fd: i32) -> Result<libc::termios> {
    use libc::{ TCSANOW, VMIN, ECHO, ICANON, VTIME };

    unsafe {
        let mut term: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(fd, &mut term) != 0 {
            return Err(Error::Terminal(std::io::Error::last_os_error().to_string()).into());
        }

        let original = term;

        term.c_lflag &= !(ICANON | ECHO);
        term.c_cc[VMIN] = 1;
        term.c_cc[VTIME] = 0;

        if libc::tcsetattr(fd, TCSANOW, &term) != 0 {
            return Err(Error::Terminal(std::io::Error::last_os_error().to_string()).into());
        }

        Ok(original)
    }
}

pub fn disable_raw_mode(fd: i32, original: &libc::termios) {
    unsafe {
        libc::tcsetattr(fd, libc::TCSANOW, original);
    }
}
