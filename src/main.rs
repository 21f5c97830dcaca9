mod cli;
mod commands;
mod formatting;

use std::process::ExitCode;

use cli::Commands;
use commands::{run_presets, run_render};

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.verbose);

    match args.command {
        Commands::Render {
            input,
            output,
            copy,
            settings,
            proportion,
            custom_ratio,
            theme,
            padding,
            background,
            bg_color1,
            bg_color2,
            gradient_angle,
            radius,
            position,
            shadow,
            screenshot_border,
            image_border,
            format,
        } => run_render(
            args.verbose,
            input,
            output,
            copy,
            settings,
            proportion,
            custom_ratio,
            theme,
            padding,
            background,
            bg_color1,
            bg_color2,
            gradient_angle,
            radius,
            position,
            shadow,
            screenshot_border,
            image_border,
            format,
        ),
        Commands::Presets { catalog, format } => run_presets(catalog, format),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
