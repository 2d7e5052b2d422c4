// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};
use r3bl_convert::{Gate, Radix};

#[derive(Debug, Parser)]
#[command(bin_name = "conv")]
#[command(about = "🔢 Convert numbers, bytes, colors, and text between representations")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log debug output (conversion dispatch events) to stderr"
    )]
    pub enable_logging: bool,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(
        about = "Convert an integer of any magnitude between bases 2-36\n💡 Eg: `conv base FF --from 16 --to 10`"
    )]
    Base {
        #[arg(help = "Digits of the number in the source base; `0x` prefix ok for base 16")]
        input: String,

        #[arg(long, default_value_t = 10, help = "Source base (2-36)")]
        from: u32,

        #[arg(long, default_value_t = 16, help = "Target base (2-36)")]
        to: u32,
    },

    #[clap(
        about = "Show a byte (0-255) in hex, decimal, and binary\n💡 Eg: `conv byte C0 --radix hex`"
    )]
    Byte {
        input: String,

        #[arg(long, default_value = "dec", value_parser = parse_radix)]
        radix: Radix,
    },

    #[clap(
        about = "Apply a bitwise logic gate to 8-bit operands\n💡 Eg: `conv gate xor 170 85`"
    )]
    Gate {
        #[arg(value_parser = parse_gate, help = "AND, OR, XOR, NOT, NAND, NOR, or XNOR")]
        gate: Gate,

        a: String,

        #[arg(help = "Second operand; ignored by the unary NOT gate")]
        b: Option<String>,
    },

    #[clap(
        about = "Convert a color between #RRGGBB, rgb(...), and hsl(...)\n💡 Eg: `conv color 007BFF --format hex`"
    )]
    Color {
        input: String,

        #[arg(long, value_enum, default_value_t = ColorFormat::Hex)]
        format: ColorFormat,
    },

    #[clap(about = "Transcode text to per-character codes and back")]
    Ascii {
        #[command(subcommand)]
        command: AsciiSubcommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum AsciiSubcommand {
    #[clap(about = "Text → hex, decimal, and binary code sequences")]
    Encode { text: String },

    #[clap(
        about = "Whitespace-separated code sequence → text\n💡 Eg: `conv ascii decode \"48 69\" --radix hex`"
    )]
    Decode {
        codes: String,

        #[arg(long, default_value = "hex", value_parser = parse_radix)]
        radix: Radix,
    },
}

/// Which textual form the `color` subcommand's input is in.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
}

fn parse_radix(text: &str) -> Result<Radix, String> {
    Radix::from_str(text)
        .map_err(|_| format!("unknown radix {text:?}; expected hex, dec, or bin"))
}

fn parse_gate(text: &str) -> Result<Gate, String> {
    Gate::from_str(text).map_err(|_| {
        format!("unknown gate {text:?}; expected AND, OR, XOR, NOT, NAND, NOR, or XNOR")
    })
}
