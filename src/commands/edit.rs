/// `edit` command: open the configuration document in the editor.
use super::Runtime;
use crate::errors::ScodeError;

/// Run `scode edit`.
///
/// The document is validated first, so a broken document has to be fixed by
/// other means.
///
/// # Errors
///
/// Returns `ScodeError` if the configuration fails to load or the editor fails.
pub fn run(rt: &Runtime<'_>) -> Result<(), ScodeError> {
    let (config, path) = rt.load_config()?;
    let args = vec![path.to_string_lossy().into_owned()];
    rt.launcher.launch(&config.editor_command, &args)?;
    Ok(())
}
