// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};

#[derive(Debug, Parser)]
#[command(bin_name = "tabline")]
#[command(about = "Line editor with unicode aware tab completion 🐕\nPress Tab twice to \
                   list candidates, type `help` for the commands")]
#[command(version)]
#[command(next_line_help = true)]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nUSAGE:\n  tabline [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n"
)]
pub struct CLIArg {
    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(long, short = 'p', default_value = "> ", help = "Prompt to display")]
    pub prompt: String,

    #[arg(
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        long,
        short = 'f',
        help = "Show the candidate list on the first Tab, instead of the second"
    )]
    pub list_on_first_tab: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let cli_arg = CLIArg::parse_from(["tabline"]);
        assert_eq!(cli_arg.global_options.prompt, "> ");
        assert!(!cli_arg.global_options.enable_logging);
        assert!(!cli_arg.global_options.list_on_first_tab);
    }

    #[test]
    fn test_all_options() {
        let cli_arg =
            CLIArg::parse_from(["tabline", "--prompt", "あ> ", "-l", "--list-on-first-tab"]);
        assert_eq!(cli_arg.global_options.prompt, "あ> ");
        assert!(cli_arg.global_options.enable_logging);
        assert!(cli_arg.global_options.list_on_first_tab);
    }

    #[test]
    fn test_clap_command_is_valid() {
        use clap::CommandFactory;
        CLIArg::command().debug_assert();
    }
}
