use std::path::PathBuf;

use clap::{Parser, Subcommand};

use bitviz::{
    BitFieldModel, BitwiseOperationModel, OperandSlot, Operation, VisualizerConfig,
    VisualizerError,
};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(
    about = "BITVIZ - 32-bit binary-to-decimal converter and bitwise operation visualizer"
)]
struct Cli {
    /// Print views as JSON
    #[arg(long, global = true)]
    json: bool,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Toggle bits of a 32-bit field and show its decimal value
    Convert {
        /// Bit indices to toggle, 0 = most significant (comma separated or repeated)
        #[arg(long = "set", value_delimiter = ',')]
        set: Vec<usize>,

        /// Start from this value instead of zero
        #[arg(long)]
        value: Option<u32>,
    },
    /// Apply a bitwise operation to operands A and B
    Op {
        /// Operation name (AND, OR, XOR, "NOT A", "Left Shift A", "Right Shift A", SHL, SHR)
        #[arg(long)]
        op: Option<String>,

        /// Operand A text; non-digits are stripped unless --strict
        #[arg(long, allow_hyphen_values = true)]
        a: Option<String>,

        /// Operand B text
        #[arg(long, allow_hyphen_values = true)]
        b: Option<String>,

        /// Shift count text, clamped into 0..=31
        #[arg(long, allow_hyphen_values = true)]
        shift: Option<String>,

        /// Reject operand text containing non-digits
        #[arg(long)]
        strict: bool,
    },
    /// List available operations
    List,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => VisualizerConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => VisualizerConfig::default(),
    };

    match cli.command {
        Commands::Convert { set, value } => handle_convert(&config, &set, value, cli.json)?,
        Commands::Op {
            op,
            a,
            b,
            shift,
            strict,
        } => {
            let config = if strict {
                config.with_strict_operands(true)
            } else {
                config
            };
            handle_op(config, op.as_deref(), a, b, shift, cli.json)?;
        }
        Commands::List => {
            for operation in Operation::ALL {
                println!("{:<15}{}", operation.name(), operation.explanation(1));
            }
        }
    }

    Ok(())
}

fn handle_convert(
    config: &VisualizerConfig,
    set: &[usize],
    value: Option<u32>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut model = BitFieldModel::with_config(config);
    if let Some(value) = value {
        model.set_value(value);
    }
    for &index in set {
        model.toggle_bit(index).map_err(VisualizerError::from)?;
    }

    let view = model.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{view}");
    }
    Ok(())
}

fn handle_op(
    config: VisualizerConfig,
    op: Option<&str>,
    a: Option<String>,
    b: Option<String>,
    shift: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut model = BitwiseOperationModel::with_config(config);

    if let Some(name) = op {
        model.select_operation(name).map_err(VisualizerError::from)?;
    }
    if let Some(text) = a {
        model
            .set_operand_text(OperandSlot::A, &text)
            .map_err(VisualizerError::from)?;
    }
    if let Some(text) = b {
        model
            .set_operand_text(OperandSlot::B, &text)
            .map_err(VisualizerError::from)?;
    }
    if let Some(text) = shift {
        model.set_shift_text(&text);
    }

    let view = model.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{view}");
    }
    Ok(())
}
