use cadence_audit::audit_log;
use cadence_config::CadenceConfig;
use chrono::Utc;

use crate::cli::{AuditArgs, GlobalFlags};
use crate::output;

pub fn handle(args: &AuditArgs, config: &CadenceConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let log_file = args.log_file.as_ref().unwrap_or(&config.log_file);
    let offset = config.utc_offset();
    let now = Utc::now().with_timezone(&offset);

    let report = audit_log(log_file, offset, now, args.recent_days)?;
    output::output(&report, flags.format)
}
