// FILE: crates/cli/src/main.rs

use anyhow::Result;
use clap::{Arg, Command};

mod commands;
mod console_speech;

fn build_cli() -> Command {
    Command::new("folio")
        .version("0.1.0")
        .about("Multi-format file viewer core: scan folders into galleries, convert RTF, read text aloud")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Path to the config file (defaults to the platform config directory)")
                .global(true),
        )
        .subcommand(
            Command::new("scan")
                .about("Scan a folder and print the ordered gallery listing")
                .arg(Arg::new("path").required(true).value_name("DIR").help("Folder (or single file) to scan"))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Emit the listing as JSON")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("max-depth")
                        .long("max-depth")
                        .value_name("N")
                        .help("Maximum scan depth below the selected folder"),
                ),
        )
        .subcommand(
            Command::new("info")
                .about("Classify a file name and show its MIME type")
                .arg(Arg::new("file").required(true).value_name("FILE").help("File name or path")),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert an RTF file to plain text on stdout")
                .arg(Arg::new("file").required(true).value_name("FILE").help("File to convert")),
        )
        .subcommand(
            Command::new("read")
                .about("Read a text file aloud, sentence by sentence")
                .arg(Arg::new("file").required(true).value_name("FILE").help("Text, markdown or RTF file"))
                .arg(Arg::new("rate").short('r').long("rate").value_name("RATE").help("Speech rate (0.5 - 3.0)"))
                .arg(Arg::new("language").short('l').long("language").value_name("TAG").help("Voice language tag, e.g. en-US"))
                .arg(Arg::new("limit").short('n').long("limit").value_name("COUNT").help("Stop after COUNT sentences"))
                .arg(
                    Arg::new("repeat")
                        .long("repeat")
                        .help("Repeat the current sentence instead of advancing")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(Arg::new("from").long("from").value_name("INDEX").help("Start from sentence INDEX (1-based)")),
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let matches = build_cli().get_matches();

    let config = commands::load_config(matches.get_one::<String>("config"))?;

    match matches.subcommand() {
        Some(("scan", sub_matches)) => commands::scan(sub_matches, &config).await,
        Some(("info", sub_matches)) => commands::info(sub_matches).await,
        Some(("convert", sub_matches)) => commands::convert(sub_matches).await,
        Some(("read", sub_matches)) => commands::read_aloud(sub_matches, &config).await,
        _ => {
            build_cli().print_help().ok();
            println!();
            Ok(())
        }
    }
}
