use clap::Parser;
use std::error::Error;
use std::fs;

mod cpu;
mod error;
mod machine;
mod mapper;
mod rom;
mod scheduler;

use machine::Machine;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = CommandLineArgs::parse();

    let rom_data = fs::read(&args.rom)?;
    let mut machine = match Machine::from_ines(&rom_data) {
        Ok(machine) => machine,
        Err(err) => {
            log::error!("failed to initialize from {}: {err}", args.rom);
            return Err(err.into());
        }
    };

    println!("mapped {} PRG bytes from {}", machine.mapped_prg_len(), args.rom);

    let mut frame: u64 = 0;
    while !machine.halted() {
        if let Some(limit) = args.frames {
            if frame >= limit {
                break;
            }
        }
        /* no controller wiring yet, so every frame reports an idle pad */
        machine.frame_timed(0);
        frame += 1;
    }

    Ok(())
}

#[derive(Parser, Debug)]
#[command(version = "0.1.0", about, long_about = None)]
struct CommandLineArgs {
    /// rom file
    rom: String,

    /// number of frames to run before exiting; runs until halt when omitted
    #[arg(short, long)]
    frames: Option<u64>,
}
