use std::io::{self, BufRead, Write};
use std::io::{stdin, stdout};

use anyhow::Result;
use bytes::BufMut;

use crate::complete::Completer;
use crate::utils::{disable_raw_mode, enable_raw_mode};

const STDIN_D: i32 = 0;

pub struct Reader {
    completer: Completer
}

impl Reader {
    pub fn new (completer: Completer) -> Self {
        Self { completer }
    }

    /// Reads one line, in raw mode when stdin is a terminal. `None` once
    /// stdin is exhausted.
    pub fn read_line (&self, prompt: &str) -> Result<Option<String>> {
        if unsafe { libc::isatty(STDIN_D) } == 0 {
            log::debug!("stdin is not a terminal, reading without line editing");
            return Ok(Self::read_plain(&mut stdin().lock())?);
        }

        let original = enable_raw_mode(STDIN_D)?;
        let mut out = stdout();
        let res = self.read_raw(prompt, &mut out);
        disable_raw_mode(STDIN_D, &original);

        Ok(res?)
    }

    fn read_plain <R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn read_raw <W: Write>(&self, prompt: &str, out: &mut W) -> io::Result<Option<String>> {
        write!(out, "{prompt}")?;
        out.flush()?;

        let mut bell = false;

        let mut buf = [0u8; 1];
        let mut input = Vec::<u8>::new();

        loop {
            let n = unsafe { libc::read(STDIN_D, buf.as_mut_ptr().cast(), 1) };

            if n <= 0 {
                if input.is_empty() { return Ok(None); }
                break;
            }

            match buf[0] {
                b'\n' | b'\r' => {
                    writeln!(out)?;
                    break;
                }
                b'\t' => {
                    bell = self.tab(prompt, &mut input, bell, out)?;
                }
                byte => {
                    bell = false;
                    self.key(byte, &mut input, out)?;
                }
            }

            out.flush()?;
        }

        Ok(Some(String::from_utf8_lossy(&input).to_string()))
    }

    fn key <W: Write>(&self, byte: u8, input: &mut Vec<u8>, out: &mut W) -> io::Result<()> {
        match byte {
            0x7F => {
                if input.pop().is_some() {
                    write!(out, "\x08 \x08")?;
                }
            }
            byte => {
                input.push(byte);
                out.write_all(&[byte])?;
            }
        }

        Ok(())
    }

    /// Completes the live argument. Returns whether the next Tab should
    /// list the candidates instead of ringing the bell.
    fn tab <W: Write>(&self, prompt: &str, input: &mut Vec<u8>, bell: bool, out: &mut W) -> io::Result<bool> {
        let line = String::from_utf8_lossy(input).to_string();
        let completion = self.completer.complete(&line);

        if completion.is_unique() {
            let rest = completion.candidates[0].get(completion.word.len()..).unwrap_or("");
            input.put_slice(rest.as_bytes());
            input.push(b' ');

            write!(out, "{rest} ")?;
            return Ok(false);
        }

        if completion.candidates.is_empty() {
            write!(out, "\x07")?;
            return Ok(false);
        }

        if bell {
            writeln!(out)?;
            for comp in &completion.candidates {
                write!(out, "{comp}  ")?;
            }
            writeln!(out)?;

            write!(out, "{prompt}{line}")?;
            return Ok(true);
        }

        let rest = completion.insertion();
        if rest.is_empty() {
            write!(out, "\x07")?;
            Ok(true)
        } else {
            input.put_slice(rest.as_bytes());
            write!(out, "{rest}")?;
            Ok(false)
        }
    }
}
