/// `completions` command: print a shell completion script.
use crate::cli::args::CompletionsArgs;
use crate::cli::completions::script;

/// Run `scode completions <SHELL>`.
pub fn run(args: &CompletionsArgs) {
    print!("{}", script(args.shell));
}
