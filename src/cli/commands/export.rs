use crate::cli::commands::parse_checkpoint;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        checkpoint,
        format,
        dir,
        force,
    } = cmd
    {
        let cp = parse_checkpoint(*checkpoint)?;

        let out_dir = match dir {
            Some(d) => expand_tilde(d),
            None => PathBuf::from("."),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let path = ExportLogic::export(&mut pool, cp, format, &out_dir, &cfg.export_prefix, *force)?;

        success(format!("Exported data to {}", path.display()));
    }
    Ok(())
}
