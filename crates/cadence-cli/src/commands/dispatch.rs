use crate::bootstrap;
use crate::cli::{Commands, ConfigCommands, GlobalFlags};
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
///
/// Configuration is loaded per arm: `config init` must run before a load,
/// which would create the file from defaults.
pub fn dispatch(command: Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Run(args) => {
            let loaded = bootstrap::load_config(flags);
            commands::run::handle(&args, loaded.config, flags)
        }
        Commands::Audit(args) => {
            let loaded = bootstrap::load_config(flags);
            commands::audit::handle(&args, &loaded.config, flags)
        }
        Commands::Config {
            action: ConfigCommands::Show,
        } => commands::config::show(bootstrap::load_config(flags), flags),
        Commands::Config {
            action: ConfigCommands::Init(args),
        } => commands::config::init(&args, flags),
    }
}
