use std::{
    env,
    fs::File,
    io::Write,
    sync::Mutex,
};

use env_logger::fmt::Formatter;
use log::{LevelFilter, Record};

/// Initializes the global logger. Set `LOG_TO_FILE=1` to tee every record
/// into `log.txt` in addition to stdout.
pub fn init_logger() {
    let mut builder = env_logger::Builder::new();

    if env::var("LOG_TO_FILE").unwrap_or_default() == "1" {
        let log_file = File::create("log.txt").expect("Unable to create log file");
        let log_file = Mutex::new(log_file);
        builder.format(move |buf: &mut Formatter, record: &Record| {
            writeln!(buf, "{}: {}", record.level(), record.args())?;
            if let Ok(mut file) = log_file.lock() {
                writeln!(file, "{}: {}", record.level(), record.args())?;
            }
            Ok(())
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()));
    }
    builder.filter(None, LevelFilter::Info).init();
}
