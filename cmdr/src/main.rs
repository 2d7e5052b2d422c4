// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `conv`: multi-base numeric and color conversion in your terminal. This is a
//! thin shell over [`r3bl_convert`]; all parsing and conversion semantics live
//! in the library.

// Attach sources.
mod clap_config;

use clap::Parser;
use clap_config::{AsciiSubcommand, CLIArg, CLICommand, ColorFormat};
use r3bl_convert::{BigBaseOutcome, ByteDecode, TextDecode, big_base, byte_codec,
                   color_converter, gate_update, hsl_to_rgb, rgb_to_hsl, text_codec};

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    if cli_arg.global_options.enable_logging {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    match &cli_arg.command {
        CLICommand::Base { input, from, to } => {
            match big_base::convert(input, *from, *to)? {
                BigBaseOutcome::Empty => {}
                BigBaseOutcome::Value(value) => println!("{value}"),
            }
        }

        CLICommand::Byte { input, radix } => match byte_codec::decode(input, *radix)? {
            ByteDecode::Empty => {}
            ByteDecode::Value(value) => {
                let triplet = byte_codec::encode(value);
                println!("hex: {}", triplet.hex);
                println!("dec: {}", triplet.dec);
                println!("bin: {}", triplet.bin);
            }
        },

        CLICommand::Gate { gate, a, b } => {
            let update = gate_update(*gate, a, b.as_deref().unwrap_or(""));
            println!("dec: {}", update.output_dec);
            println!("bin: {}", update.output_bin);
        }

        CLICommand::Color { input, format } => {
            // HSL input echoes the parsed h/s/l instead of re-deriving it from
            // RGB, so rounding never drifts the user's own numbers.
            let (rgb, hsl) = match format {
                ColorFormat::Hex => {
                    let rgb = color_converter::parse_hex(input)?;
                    (rgb, rgb_to_hsl(rgb))
                }
                ColorFormat::Rgb => {
                    let rgb = color_converter::parse_rgb_triplet(input)?;
                    (rgb, rgb_to_hsl(rgb))
                }
                ColorFormat::Hsl => {
                    let hsl = color_converter::parse_hsl_triplet(input)?;
                    (hsl_to_rgb(hsl), hsl)
                }
            };
            println!("hex: {}", rgb.to_hex_string());
            println!("rgb: {}", rgb.to_rgb_string());
            println!("hsl: {}", hsl.to_hsl_string());
        }

        CLICommand::Ascii { command } => match command {
            AsciiSubcommand::Encode { text } => {
                let codes = text_codec::text_to_codes(text);
                println!("hex: {}", codes.hex);
                println!("dec: {}", codes.dec);
                println!("bin: {}", codes.bin);
            }
            AsciiSubcommand::Decode { codes, radix } => {
                match text_codec::codes_to_text(codes, *radix)? {
                    TextDecode::Empty => {}
                    TextDecode::Text(text) => println!("{text}"),
                }
            }
        },
    }

    Ok(())
}
