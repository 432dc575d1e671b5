use debugger::application_impl::*;
use debugger::application_port::*;
use debugger::domain_model::*;
use debugger::logger::*;
use debugger::settings::*;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let build = BuildMode::current();

    let logger = Logger::new_bootstrap(build)?;

    let project_settings = parse_settings(cli.settings.as_deref())?;
    debug!(?project_settings, %build);
    let logger_config = LogConfig {
        filter: project_settings.log.filter.clone(),
    };
    logger.reload_from_config(&logger_config)?;

    let service = LogServiceImpl::new(project_settings.sink.try_build()?, build);

    let caller = Tag::new(cli.tag.clone());
    let (template, raw_args) = cli
        .message
        .split_first()
        .ok_or_else(|| anyhow::anyhow!("missing template"))?;
    let args: Vec<LogArg> = raw_args.iter().map(|raw| parse_arg(raw)).collect();

    if cli.debug {
        service.debug(&caller, Some(template.as_str()), &args)?;
    } else {
        service.info(&caller, Some(template.as_str()), &args)?;
    }

    Ok(())
}
