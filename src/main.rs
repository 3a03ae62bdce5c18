use clap::Parser;
use powerline_prompt::commands::execute_prompt;
use powerline_prompt::core::{
    config::{PromptConfig, DEFAULT_EXIT_CODE},
    print_error,
};

#[derive(Parser)]
#[command(name = "powerline-prompt")]
#[command(about = "Render a powerline-style shell prompt")]
#[command(version)]
struct Cli {
    /// Shell flavor to format escapes for (bash or zsh)
    #[arg(default_value = "bash")]
    shell: String,

    /// Exit code of the previous command
    #[arg(default_value = DEFAULT_EXIT_CODE, allow_hyphen_values = true)]
    exit_code: String,

    /// Anything past the exit code is accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the prompt
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = PromptConfig::resolve(&cli.shell, cli.exit_code);

    if let Err(e) = execute_prompt(&config) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
