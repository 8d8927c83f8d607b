//! Batch classification tool: reads a comma-separated contacts file
//! (`phone,user_id,recorded_name` per line), classifies every record and
//! writes a CSV report. When a name classifies as undetermined but the
//! phone's country is known, the country's nationality is used instead.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use ethnos::{Classifier, Lexicon, Nationality, PhoneResolver};

#[derive(Parser)]
#[command(name = "ethnos", about = "Classify contact names by probable ethnonational group")]
struct Cli {
    /// Contacts file: one `phone,user_id,recorded_name` record per line
    #[arg(short, long, default_value = "alldata.txt")]
    contacts: PathBuf,

    /// Output CSV file
    #[arg(short, long, default_value = "output_results.csv")]
    output: PathBuf,

    /// Optional Islamic name list (one name per line)
    #[arg(long)]
    islam_names: Option<PathBuf>,

    /// Optional typical-names JSON seed file
    #[arg(long)]
    typical_names: Option<PathBuf>,

    /// Optional mobile region patterns CSV
    #[arg(long)]
    region_patterns: Option<PathBuf>,

    /// Stop after the first N records
    #[arg(long)]
    limit: Option<usize>,

    /// Print progress information
    #[arg(short, long, conflicts_with = "silent")]
    verbose: bool,

    /// Print nothing but errors
    #[arg(short, long)]
    silent: bool,
}

fn run(cli: &Cli) -> Result<usize, Box<dyn std::error::Error>> {
    let mut lexicon = Lexicon::builder();
    if let Some(path) = &cli.islam_names {
        lexicon = lexicon.islamic_names_file(path)?;
    }
    if let Some(path) = &cli.typical_names {
        lexicon = lexicon.typical_names_file(path)?;
    }
    let classifier = Classifier::builder().lexicon(lexicon.build()).build();

    let resolver = match &cli.region_patterns {
        Some(path) => PhoneResolver::with_patterns_file(path)?,
        None => PhoneResolver::new(),
    };

    let contacts = File::open(&cli.contacts)
        .map_err(|e| format!("cannot open {}: {e}", cli.contacts.display()))?;
    let output = File::create(&cli.output)
        .map_err(|e| format!("cannot create {}: {e}", cli.output.display()))?;
    let mut writer = BufWriter::new(output);

    writeln!(writer, "phone,user_id,region,recorded_name,nationality")?;

    let mut count = 0usize;
    for line in BufReader::new(contacts).lines() {
        if cli.limit.is_some_and(|limit| count >= limit) {
            break;
        }
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.splitn(3, ',').map(|f| f.trim().trim_matches('"')).collect();
        if fields.len() < 3 {
            continue;
        }
        let (phone, user_id, recorded) = (fields[0], fields[1], fields[2]);

        let region = resolver.resolve(phone);
        let mut nationality = classifier.classify(recorded);
        if nationality == Nationality::Undetermined {
            if let Some(region) = &region {
                nationality = region.nationality;
            }
        }
        let region_label = region
            .map(|r| r.label())
            .unwrap_or_else(|| "Не определено".to_string());

        writeln!(
            writer,
            "{phone},{user_id},{region_label},{},{nationality}",
            csv_escape(recorded)
        )?;
        count += 1;

        if cli.verbose && count % 1000 == 0 {
            eprintln!("processed {count} records");
        }
    }

    writer.flush()?;
    Ok(count)
}

fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(count) => {
            if !cli.silent {
                println!(
                    "Done: {count} records written to {}",
                    cli.output.display()
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
