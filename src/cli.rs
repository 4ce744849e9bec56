// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::app::App;
use crate::compare::Comparison;
use crate::config::options::AppOptions;
use crate::derive::{
    clubs_by_category, display_rate, format_currency, opportunities_by_type,
    relevant_opportunity_types, scholarship_type_counts, shows_pre_med_tips, total_annual_cost,
    TuitionTier,
};
use crate::file::DirDelivery;
use crate::fetch::GeminiSource;
use crate::heuristics::{extract_deadline, Highlighter};
use crate::identity::IdentityKey;
use crate::progress::Progress;
use crate::record::CollegeRecord;
use crate::store::{FileStore, KeyValueStore};

#[derive(Debug, Parser)]
#[command(name = "college_scout", version, about = "Research, save, compare and export colleges")]
pub struct Cli {
    /// Config file (default: ./college_scout.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch a college profile
    Search {
        name: String,
        #[arg(short, long)]
        major: Option<String>,
        /// Add the result to the saved list
        #[arg(long)]
        save: bool,
        /// Write the result as CSV
        #[arg(long)]
        export: bool,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// List saved searches
    List,
    /// Show a saved search (1-based index)
    Show { index: usize },
    /// Remove a saved search (1-based index)
    Remove { index: usize },
    /// Compare two saved searches side by side
    Compare { a: usize, b: usize },
    /// Export a saved search as CSV
    Export {
        index: usize,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Forget every saved search
    Clear,
}

/// Status lines on stderr.
struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, what: &str) {
        eprintln!("{what} ...");
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn finish(&mut self, ok: bool) {
        eprintln!("{}", if ok { "done" } else { "failed" });
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let opts = AppOptions::load(cli.config.as_deref())?;

    crate::log::init(&opts.store.dir, &opts.log_level)
        .wrap_err_with(|| format!("cannot open log in {}", opts.store.dir.display()))?;
    logd!("CLI: {:?}", cli.command);

    let mut app = App::new(FileStore::new(&opts.store.dir), &opts.store.key);
    let out_dir = |out: Option<PathBuf>| out.unwrap_or_else(|| opts.export.out_dir.clone());

    match cli.command {
        Command::Search { name, major, save, export, out } => {
            let source = GeminiSource::new(&opts.source)?;
            let mut cli_progress = CliProgress;
            let progress: &mut dyn Progress = &mut cli_progress;
            if !app.search(&source, &name, major.as_deref(), Some(progress)) {
                let msg = app.state().error.clone().unwrap_or_default();
                return Err(eyre!(msg));
            }
            let Some(record) = app.state().current.clone() else {
                return Ok(());
            };
            print_record(&record);
            if save {
                let added = app.save(record.clone());
                println!("\n{}", if added { "Saved." } else { "Already saved." });
            }
            if export {
                let path = app.export_csv(&record, &mut DirDelivery::new(out_dir(out)))?;
                println!("Exported to {}", path.display());
            }
        }
        Command::List => {
            if app.saved().is_empty() {
                println!("No saved searches.");
            }
            for (i, rec) in app.saved().iter().enumerate() {
                match rec.user_input_major.as_deref() {
                    Some(m) => println!("{:>3}. {} ({m})", i + 1, rec.college_name),
                    None => println!("{:>3}. {}", i + 1, rec.college_name),
                }
            }
        }
        Command::Show { index } => {
            let key = key_at(&app, index)?;
            app.load(&key);
            if let Some(record) = &app.state().current {
                print_record(record);
            }
        }
        Command::Remove { index } => {
            let key = key_at(&app, index)?;
            if let Some(rec) = app.remove(&key) {
                println!("Removed {}.", rec.college_name);
            }
        }
        Command::Compare { a, b } => {
            let (ka, kb) = (key_at(&app, a)?, key_at(&app, b)?);
            app.toggle_compare(ka);
            app.toggle_compare(kb);
            app.start_comparison()?;
            if let Some(cmp) = &app.state().comparing {
                print_comparison(cmp);
            }
        }
        Command::Export { index, out } => {
            let key = key_at(&app, index)?;
            let record = app
                .saved()
                .find(&key)
                .cloned()
                .ok_or_else(|| eyre!("no saved search at {index}"))?;
            let path = app.export_csv(&record, &mut DirDelivery::new(out_dir(out)))?;
            println!("Exported to {}", path.display());
        }
        Command::Clear => {
            app.clear_saved()?;
            println!("Saved searches cleared.");
        }
    }
    Ok(())
}

fn key_at<S: KeyValueStore>(app: &App<S>, index: usize) -> Result<IdentityKey> {
    index
        .checked_sub(1)
        .and_then(|ix| app.saved().get(ix))
        .map(CollegeRecord::identity)
        .ok_or_else(|| eyre!("no saved search at {index} (have {})", app.saved().len()))
}

/* ---------------- Rendering ---------------- */

fn print_record(r: &CollegeRecord) {
    let hl = Highlighter::default_vocabulary();

    println!("{}", r.college_name);
    if let Some(m) = &r.user_input_major {
        println!("Major interest: {m}");
    }
    println!("{} | {} | {}", r.location, r.school_type, r.setting);
    println!("{}", r.short_note);

    println!("\n== Key Metrics ==");
    println!("Acceptance rate:      {}", display_rate(r.acceptance_rate));
    println!("4-year graduation:    {}", display_rate(r.four_year_graduation_rate));
    println!("Avg. annual cost:     {}", format_currency(r.average_annual_cost()));
    println!("Student population:   {}", r.student_population);
    if let Some(o) = r.latest_career_outcome() {
        println!("Median salary ({}): {}", o.year, o.median_starting_salary);
    }

    println!("\n== Cost of Attendance ==");
    for tier in TuitionTier::ALL {
        println!(
            "{:<14} tuition {:>10}  total {:>10}",
            tier.label(),
            format_currency(tier.tuition(&r.cost_of_attendance)),
            format_currency(total_annual_cost(&r.cost_of_attendance, tier))
        );
    }

    if !r.scholarships.is_empty() {
        println!("\n== Scholarships ==");
        let counts: Vec<String> = scholarship_type_counts(&r.scholarships)
            .into_iter()
            .map(|(t, n)| format!("{t}: {n}"))
            .collect();
        println!("({})", counts.join(", "));
        for s in &r.scholarships {
            println!("- {} ({}, {})", s.name, s.amount, s.duration);
            println!("  {}", hl.mark(&s.description));
            if let Some(d) = extract_deadline(&s.description) {
                println!("  Deadline: {d}");
            }
        }
    }

    if !r.clubs.is_empty() {
        println!("\n== Clubs ==");
        for (category, clubs) in clubs_by_category(&r.clubs) {
            let names: Vec<&str> = clubs.iter().map(|c| c.name.as_str()).collect();
            println!("{category}: {}", names.join(", "));
        }
    }

    let relevant = relevant_opportunity_types(&r.student_opportunities);
    if !relevant.is_empty() {
        println!("\n== Student Opportunities ==");
        for (kind, opps) in opportunities_by_type(&r.student_opportunities) {
            if !relevant.contains(&kind) {
                continue;
            }
            for o in opps {
                println!("[{kind}] {} ({}) - {}", o.name, o.location, o.application_timeline);
            }
        }
    }

    if shows_pre_med_tips(r.user_input_major.as_deref()) {
        let info = crate::heuristics::pre_med_info(r);
        println!("\n== Pre-Med ==");
        println!("Track: {}", info.track);
        println!("MCAT:  {}", info.mcat_prep);
    }
}

fn print_comparison(cmp: &Comparison) {
    println!("{:<24} {:<32} {:<32}", "", cmp.left_name, cmp.right_name);
    for section in &cmp.sections {
        println!("\n== {} ==", section.title);
        for row in &section.rows {
            println!("{:<24} {:<32} {:<32}", row.label, row.left, row.right);
        }
    }
}
