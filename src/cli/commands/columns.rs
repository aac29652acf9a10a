use crate::cli::parser::Cli;
use crate::errors::AppResult;
use crate::loader::list_columns;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use ansi_term::Colour;

/// Handle `--columns`: print the header row of the input file, nothing else.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = expand_tilde(&cli.file);
    let columns = list_columns(&path)?;

    success(format!(
        "The file has following columns: {}",
        Colour::Blue.paint(columns.join(", "))
    ));

    Ok(())
}
