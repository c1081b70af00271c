//! Process command - extract data from a single notice PDF.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info, warn};

use nlx_core::models::config::NlxConfig;
use nlx_core::notice::procedure;
use nlx_core::{ExtractionResult, Notice, NoticeParser, PdfExtractor, PdfProcessor};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input notice PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "edited")]
    format: OutputFormat,

    /// Validate extracted data
    #[arg(long)]
    validate: bool,

    /// Show the launch plan (procedure codes and due dates)
    #[arg(long)]
    plan: bool,

    /// Show extraction warnings
    #[arg(long)]
    warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Canonical editable text
    Edited,
    /// JSON output
    Json,
    /// CSV output (one row per line item)
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension for batch outputs.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Edited | OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        NlxConfig::from_file(std::path::Path::new(path))?
    } else {
        NlxConfig::default()
    };

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("processing file: {}", args.input.display());

    let data = fs::read(&args.input)?;
    let mut extractor = PdfExtractor::new();
    extractor.load(&data)?;

    let page_count = extractor.page_count();
    debug!("PDF has {} pages", page_count);

    let text = if config.pdf.max_pages > 0 && page_count as usize > config.pdf.max_pages {
        warn!(
            "reading only the first {} of {} pages",
            config.pdf.max_pages, page_count
        );
        (1..=config.pdf.max_pages as u32)
            .map(|page| extractor.extract_page_text(page).unwrap_or_default())
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        extractor.extract_text()?
    };

    if text.trim().is_empty() {
        anyhow::bail!("No text could be extracted from the PDF");
    }
    if text.len() < config.pdf.min_text_length {
        warn!("extracted text is suspiciously short ({} chars)", text.len());
    }

    let parser = NoticeParser::new().with_number_repair(config.extraction.repair_numbers);
    let result = parser.parse(&text);

    if args.warnings && !result.warnings.is_empty() {
        eprintln!("{}", style("Extraction warnings:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    if args.validate {
        let issues = result.notice.validate();
        if !issues.is_empty() {
            eprintln!("{}", style("Validation issues:").yellow());
            for issue in &issues {
                eprintln!("  - {}", issue);
            }
        }
    }

    let output = format_notice(&result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.plan {
        print_plan(&result.notice)?;
    }

    debug!("total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Render an extraction result in the requested format.
pub fn format_notice(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Edited => Ok(result.notice.to_edited_text()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result.notice)?),
        OutputFormat::Csv => format_csv(&result.notice),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(notice: &Notice) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "origin_process_id",
        "notice_number",
        "subject_id",
        "property_registration_id",
        "description",
        "amount_currency",
        "amount_units",
    ])?;

    for item in &notice.items {
        wtr.write_record([
            &notice.origin_process_id,
            &notice.notice_number,
            &notice.subject_id,
            &notice.property_registration_id,
            &item.description,
            &item.amount_currency,
            &item.amount_units,
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ExtractionResult) -> String {
    let notice = &result.notice;
    let mut output = String::new();

    output.push_str(&format!("Notice: {}\n", notice.notice_number));
    output.push_str(&format!("Process: {}\n", notice.origin_process_id));
    output.push_str(&format!("CGM: {}\n", notice.subject_id));
    output.push_str(&format!("Registration: {}\n", notice.property_registration_id));
    output.push('\n');

    output.push_str(&format!("Line items ({}):\n", notice.items.len()));
    for item in &notice.items {
        output.push_str(&format!(
            "  {} | {} | {}\n",
            item.description, item.amount_currency, item.amount_units
        ));
    }

    output
}

fn print_plan(notice: &Notice) -> anyhow::Result<()> {
    let today = chrono::Local::now().date_naive();

    println!();
    println!("{}", style("Launch plan:").bold());
    for item in &notice.items {
        let Some(code) = procedure::procedure_code(&item.description) else {
            anyhow::bail!("no procedure code for: {}", item.description);
        };
        let due = procedure::due_date(today, code);
        println!(
            "  {} -> code {}, amount {}, due {}",
            item.description,
            code,
            procedure::form_amount(&item.amount_currency),
            procedure::format_ddmmyyyy(due),
        );
    }

    Ok(())
}
