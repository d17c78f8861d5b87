use anyhow::Result;

use argscan::config::Config;
use argscan::readline::Reader;
use argscan::{parse, utils, Arg, Completer};

fn describe (arg: &Arg) -> String {
    let flag = &arg.flag;
    let shape = if flag.is_invalid() {
        "invalid".to_string()
    } else if flag.has_flag() {
        format!("flag dashes={:?} name={:?} value={:?}", flag.dashes(), flag.name(), flag.has_value().then(|| flag.value()))
    } else {
        format!("value={:?}", flag.value())
    };

    format!("{:?} completed={} {shape}", arg.text, arg.completed)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("ARGSCAN_LOG", "warn")).init();

    let config = Config::from_env();
    log::debug!("{config:?}");

    let mut completer = Completer::new();
    completer.add_commands(&utils::get_system_binaries());
    completer.add_flags(&config.flags);

    let reader = Reader::new(completer);

    let history = match &config.history {
        Some(path) => match utils::open_file(path) {
            Ok(fd) => Some(fd),
            Err(error) => {
                log::warn!("history disabled: {error}");
                None
            }
        },
        None => None,
    };

    while let Some(input) = reader.read_line(&config.prompt)? {
        let args = parse(&input);
        if args.is_empty() { continue; }

        for arg in &args {
            println!("{}", describe(arg));
        }

        if let Some(fd) = history {
            if let Err(error) = utils::append_line(fd, &input) {
                log::warn!("failed to write history: {error}");
            }
        }
    }

    if let Some(fd) = history {
        unsafe { libc::close(fd); }
    }

    Ok(())
}
