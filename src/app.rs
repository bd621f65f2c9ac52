use std::path::PathBuf;
use std::process::ExitCode;

use dialoguer::Select;

use crate::cli::Cli;
use crate::codec::CodecGateway;
use crate::core::{
    BatchRunner, ContinuationPolicy, Direction, LogDiagnostics, NoDisplay, Session, StatusDisplay,
};
use crate::error::{AppError, PickerError};
use crate::output::{
    LineDisplay, PanelDisplay, cancelled_json, panel_text, print_report, report_json,
};
use crate::picker::{PresetPicker, PromptPicker};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) codec: &'a dyn CodecGateway,
    pub(crate) policy: ContinuationPolicy,
    pub(crate) input_dir: PathBuf,
    pub(crate) output_dir: PathBuf,
}

impl CommandContext<'_> {
    fn new_session(&self) -> Session {
        Session::new(&self.input_dir, &self.output_dir)
    }
}

/// One-shot `compile` / `decompile`: inputs and output come from the command line
pub(crate) fn handle_batch(
    direction: Direction,
    inputs: &[PathBuf],
    ctx: &CommandContext<'_>,
) -> ExitCode {
    let picker = PresetPicker::new(inputs.to_vec(), ctx.cli.output.clone());
    let mut session = ctx.new_session();
    let mut diagnostics = LogDiagnostics;
    let mut runner = BatchRunner::new(ctx.codec, &mut diagnostics, ctx.policy);
    let mut display: Box<dyn StatusDisplay> = if ctx.cli.json || ctx.cli.quiet {
        Box::new(NoDisplay)
    } else {
        Box::new(LineDisplay)
    };

    let Some(report) = session.run_batch(direction, &picker, &mut runner, display.as_mut()) else {
        if ctx.cli.json
            && let Some(entry) = session.log.render().first()
        {
            println!("{}", cancelled_json(entry));
        }
        return ExitCode::SUCCESS;
    };

    if ctx.cli.json {
        println!("{}", report_json(&report));
    } else if !ctx.cli.quiet {
        println!();
        print_report(&report, ctx.cli.use_color());
    }

    if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

const MENU: [&str; 4] = ["Compile", "Decompile", "Show log", "Quit"];

/// Interactive loop: folders and the status log carry over between batches
pub(crate) fn run_shell(ctx: &CommandContext<'_>) -> Result<ExitCode, AppError> {
    let mut session = ctx.new_session();
    let mut diagnostics = LogDiagnostics;
    let picker = PromptPicker;
    let in_place = ctx.cli.use_color();
    log::info!("shell started");

    loop {
        let choice = Select::new()
            .with_prompt("DGR TOOLS")
            .items(&MENU[..])
            .default(0)
            .interact()
            .map_err(PickerError::from)?;

        let direction = match choice {
            0 => Direction::Compile,
            1 => Direction::Decompile,
            2 => {
                println!("{}", panel_text(&session.log));
                continue;
            }
            _ => break,
        };

        let mut runner = BatchRunner::new(ctx.codec, &mut diagnostics, ctx.policy);
        let mut display: Box<dyn StatusDisplay> = if ctx.cli.quiet {
            Box::new(NoDisplay)
        } else {
            Box::new(PanelDisplay::new(in_place))
        };
        if let Some(report) = session.run_batch(direction, &picker, &mut runner, display.as_mut()) {
            if ctx.cli.json {
                println!("{}", report_json(&report));
            } else if !ctx.cli.quiet {
                println!();
                print_report(&report, ctx.cli.use_color());
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
