/// Shell completion scripts.
///
/// Each script asks `scode __complete <prefix>` for alias candidates, so
/// completion follows the live configuration without regenerating the script.
use super::args::Shell;

const BASH: &str = r#"_scode() {
    local cur="${COMP_WORDS[COMP_CWORD]}"
    if [ "$COMP_CWORD" -eq 1 ]; then
        COMPREPLY=( $(compgen -W "init edit completions" -- "$cur") $(scode __complete "$cur" 2>/dev/null) )
    fi
}
complete -F _scode scode
"#;

const ZSH: &str = r#"#compdef scode
_scode() {
    if (( CURRENT == 2 )); then
        local -a candidates
        candidates=(init edit completions ${(f)"$(scode __complete "${words[CURRENT]}" 2>/dev/null)"})
        compadd -a candidates
    fi
}
compdef _scode scode
"#;

const FISH: &str = r#"complete -c scode -f
complete -c scode -n "__fish_use_subcommand" -a "init edit completions"
complete -c scode -n "__fish_use_subcommand" -a "(scode __complete (commandline -ct) 2>/dev/null)"
"#;

/// The completion script for `shell`.
#[must_use]
pub fn script(shell: Shell) -> &'static str {
    match shell {
        Shell::Bash => BASH,
        Shell::Zsh => ZSH,
        Shell::Fish => FISH,
    }
}
