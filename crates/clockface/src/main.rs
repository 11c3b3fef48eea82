use clap::{Parser, Subcommand};
use clockface::angle::RingKind;
use clockface::ipc::{Command, SOCKET_PATH};
use clockface::time::{TimeMode, TimeText, TimeValue};
use clockface::{Picker, PickerOptions};
use std::io::Write;
use std::os::unix::net::UnixStream;

#[derive(Parser, Debug)]
#[command(name = "clockface", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Open the picker.
    Show,
    /// Close the picker
    Hide,
    /// Set the picker's time (HH:MM)
    Set { time: String },
    /// Print where a time sits on the clock face, without a running daemon
    Inspect {
        time: String,

        /// Face layout: 12 or 24
        #[arg(short = 'm', long, default_value = "24")]
        mode: TimeMode,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Show) => send_command(&Command::Show),
        Some(Commands::Hide) => send_command(&Command::Hide),
        Some(Commands::Set { time }) => {
            let time: TimeValue = time.parse()?;
            send_command(&Command::Set(TimeText::from(time)))
        }
        Some(Commands::Inspect { time, mode }) => inspect(&time, mode),
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

fn inspect(text: &str, mode: TimeMode) -> anyhow::Result<()> {
    let time: TimeValue = text.parse()?;
    let picker = Picker::new(PickerOptions {
        time: Some(TimeText::from(time)),
        time_mode: mode,
        ..Default::default()
    });
    let hour = time.display_hour(mode);

    println!("{}", picker.preview_text());
    println!(
        "hour   {:>2} -> {:>5.1}°",
        hour,
        mode.hour_ring().value_to_angle(hour)
    );
    println!(
        "minute {:>2} -> {:>5.1}°",
        time.minute(),
        RingKind::Minute.value_to_angle(time.minute())
    );
    Ok(())
}

fn send_command(cmd: &Command) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to clockpick daemon at {}: {}. Is clockpick running?",
            SOCKET_PATH,
            e
        )
    })?;

    log::debug!("Sending {:?}", cmd);
    writeln!(stream, "{}", cmd)?;
    Ok(())
}
