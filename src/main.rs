use clap::{Parser, Subcommand};
use rentdesk::resource::FileKeyValueStore;
use rentdesk::types::default_base_name;
use rentdesk::{
    BrandingError, BrandingOptions, BrandingStore, ColorScheme, DocumentMetadata, ExportConfig,
    ExportError, ExportFormat, ExportOptions, ExporterBuilder, NewTemplate, Orientation,
    TabularRow, TemplateType,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "rentdesk", version, about = "Branded report exports for the rental back office")]
struct Cli {
    /// TOML configuration file; RENTDESK__* variables override it.
    #[arg(short, long, global = true, env = "RENTDESK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct DocumentArgs {
    /// Output file name without extension (default: export_<date>).
    #[arg(short = 'o', long)]
    file_name: Option<String>,

    /// Stamp the generation time on the last page.
    #[arg(long)]
    timestamp: bool,

    #[arg(long)]
    landscape: bool,

    /// Brand with this template id.
    #[arg(long, conflicts_with = "report_type")]
    template: Option<String>,

    /// Brand with the default template for this report type.
    #[arg(long)]
    report_type: Option<TemplateType>,

    /// Document title (PDF info, XLSX properties); also names the file
    /// when --file-name is absent.
    #[arg(long)]
    title: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Export a JSON array of objects as PDF, XLSX or CSV.
    Export {
        input: PathBuf,
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,
        #[command(flatten)]
        document: DocumentArgs,
    },
    /// Export a captured element snapshot as a paginated PDF.
    Capture {
        element_id: String,
        #[command(flatten)]
        document: DocumentArgs,
    },
    /// Manage branding templates.
    Templates {
        #[command(subcommand)]
        action: TemplateAction,
    },
}

#[derive(Subcommand)]
enum TemplateAction {
    List {
        /// Only templates usable for this report type (plus general ones).
        #[arg(long = "type")]
        template_type: Option<TemplateType>,
    },
    Add {
        name: String,
        #[arg(long = "type", default_value = "general")]
        template_type: TemplateType,
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long, default_value = "")]
        contact: String,
        #[arg(long, default_value = "default")]
        scheme: ColorScheme,
        #[arg(long)]
        logo: Option<String>,
        /// Footer template; {{page}}, {{pages}} and {{company}} are available.
        #[arg(long)]
        footer: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        default: bool,
    },
    SetDefault { id: String },
    Duplicate { id: String },
    Delete { id: String },
}

fn open_templates(config: &ExportConfig) -> BrandingStore {
    BrandingStore::load(Arc::new(FileKeyValueStore::new(&config.storage_dir)))
}

fn document_options(
    config: &ExportConfig,
    format: ExportFormat,
    args: DocumentArgs,
) -> Result<ExportOptions, ExportError> {
    let orientation = if args.landscape {
        Orientation::Landscape
    } else {
        config.orientation
    };
    let mut options = ExportOptions::new(format)
        .with_timestamp(args.timestamp)
        .with_page(config.page_size, orientation);
    let file_name = args.file_name.or_else(|| {
        args.title
            .as_deref()
            .map(|title| default_base_name(title, chrono::Local::now().date_naive()))
    });
    if let Some(name) = file_name {
        options = options.with_file_name(name);
    }
    if let Some(title) = args.title {
        options = options.with_metadata(DocumentMetadata {
            title: Some(title),
            ..Default::default()
        });
    }

    let branding: Option<BrandingOptions> = match (args.template, args.report_type) {
        (Some(id), _) => {
            let store = open_templates(config);
            let template = store
                .template_by_id(&id)
                .ok_or(BrandingError::NotFound(id))?;
            Some(template.branding.clone())
        }
        (None, Some(kind)) => Some(open_templates(config).default_template(kind).branding.clone()),
        (None, None) => None,
    };
    if let Some(branding) = branding {
        options = options.with_branding(branding);
    }
    Ok(options)
}

fn run_templates(config: &ExportConfig, action: TemplateAction) -> Result<(), ExportError> {
    let mut store = open_templates(config);
    match action {
        TemplateAction::List { template_type } => {
            for t in store.templates_by_type(template_type) {
                println!(
                    "{:<44} {:<11} {:<8} {}",
                    t.id,
                    t.template_type,
                    if t.is_default { "default" } else { "" },
                    t.name
                );
            }
        }
        TemplateAction::Add {
            name,
            template_type,
            company,
            contact,
            scheme,
            logo,
            footer,
            description,
            default,
        } => {
            let mut new = NewTemplate::new(name, template_type).with_branding(BrandingOptions {
                logo,
                company_name: company,
                contact_info: contact,
                color_scheme: scheme,
                footer,
                ..Default::default()
            });
            new.description = description.unwrap_or_default();
            if default {
                new = new.as_default();
            }
            let created = store.add_template(new)?;
            println!("Created template {}", created.id);
        }
        TemplateAction::SetDefault { id } => {
            let template = store.set_default_template(&id)?;
            println!("'{}' is now the {} default", template.name, template.template_type);
        }
        TemplateAction::Duplicate { id } => {
            let copy = store.duplicate_template(&id)?;
            println!("Created copy {}", copy.id);
        }
        TemplateAction::Delete { id } => {
            store.delete_template(&id)?;
            println!("Deleted template {}", id);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), ExportError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ExportConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Export {
            input,
            format,
            document,
        } => {
            let raw = tokio::fs::read_to_string(&input).await?;
            let rows = TabularRow::rows_from_json(&serde_json::from_str(&raw)?)?;
            let options = document_options(&config, format, document)?;
            let exporter = ExporterBuilder::from_config(&config).build()?;
            exporter.export_data(rows, options).await?;
        }
        Command::Capture {
            element_id,
            document,
        } => {
            let options = document_options(&config, ExportFormat::Pdf, document)?;
            let exporter = ExporterBuilder::from_config(&config).build()?;
            exporter.export_element_to_document(&element_id, options).await?;
        }
        Command::Templates { action } => run_templates(&config, action)?,
    }
    Ok(())
}
