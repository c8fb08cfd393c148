use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    zohmg-install completions --shell bash > ~/.bash_completion.d/zohmg-install\n\n\
                  Generate zsh completions:\n    zohmg-install completions --shell zsh > ~/.zfunc/_zohmg-install")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long, short = 's')]
    pub shell: String,
}
