//! coolme's application entry point.
//! Parses arguments, resolves configuration and runs exactly one generator.

use std::path::Path;

use coolme::{
    cli::{get_args, Args, Command, CreateArgs, DepotArgs, LensArgs},
    config::{get_config, Config},
    depot::{DepotConfig, DepotGenerator},
    error::{default_error_handler, Result},
    ingestion::{IngestionGenerator, IngestionRequest},
    lens::LensGenerator,
    loader::LocalLoader,
    renderer::PlaceholderRenderer,
    reporter::{GenerationReport, LogReporter},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    match run(args) {
        Ok(report) if report.has_failures() => std::process::exit(1),
        Ok(_) => {}
        Err(err) => default_error_handler(err),
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads configuration from `--config` or the working directory
/// 2. Resolves the template root
/// 3. Dispatches to the generator named by the subcommand
/// 4. Prints the files that were written
fn run(args: Args) -> Result<GenerationReport> {
    let cwd = std::env::current_dir()?;
    let mut config = get_config(args.config.as_deref(), &cwd)?;
    if let Some(templates_dir) = args.templates_dir {
        config.templates_dir = templates_dir;
    }

    let reporter = LogReporter::new();
    let report = match args.command {
        Command::Create(create) => run_create(&config, &cwd, create, &reporter)?,
        Command::Depot(depot) => run_depot(&config, &cwd, depot, &reporter)?,
        Command::Lens(lens) => run_lens(&cwd, lens, &reporter)?,
        Command::Environments => {
            print_environments(&config);
            return Ok(GenerationReport::default());
        }
    };

    for path in &report.written {
        println!("Written: '{}'", path.display());
    }
    if report.has_failures() {
        eprintln!("Generation finished with {} failed file(s).", report.failed.len());
    } else {
        println!("Generation completed successfully.");
    }
    Ok(report)
}

fn run_create(
    config: &Config,
    cwd: &Path,
    args: CreateArgs,
    reporter: &LogReporter,
) -> Result<GenerationReport> {
    let environment = config.environment(&args.environment)?;
    let request = IngestionRequest {
        root: cwd.to_path_buf(),
        project: args.project_name,
        data_product: args.data_product,
        entities: args.entity,
        output_catalog: args.output_catalog.unwrap_or_else(|| environment.catalog.clone()),
        output_schema: args.output_schema.unwrap_or_else(|| environment.schema.clone()),
        output_tables: args.output_tables,
        template: args.template_path.unwrap_or_else(|| environment.template.clone()),
    };

    let loader = LocalLoader::new(&config.templates_dir);
    let renderer = PlaceholderRenderer::new();
    IngestionGenerator::new(&loader, &renderer, reporter).generate(&request)
}

fn run_depot(
    config: &Config,
    cwd: &Path,
    args: DepotArgs,
    reporter: &LogReporter,
) -> Result<GenerationReport> {
    let loader = LocalLoader::new(&config.templates_dir);
    let renderer = PlaceholderRenderer::new();
    let depot = DepotConfig::from(args.backend);
    DepotGenerator::new(&loader, &renderer, reporter).generate(
        cwd,
        &depot,
        args.template_path.as_deref(),
    )
}

fn run_lens(cwd: &Path, args: LensArgs, reporter: &LogReporter) -> Result<GenerationReport> {
    LensGenerator::new(reporter).generate(cwd.join(args.base_dir), &args.entity)
}

fn print_environments(config: &Config) {
    for (name, env) in &config.environments {
        println!("{name}: catalog={}, schema={}, template={}", env.catalog, env.schema, env.template);
    }
}
