use crate::infra::{load_catalog, read_answers, InMemoryAssessmentRepository};
use ayurmind::assessment::{
    AssessmentRequest, AssessmentService, DoshaAnalysis, PatternAnalysis, PatternAnalyzer,
    Recommendations,
};
use ayurmind::diseases::StatGroup;
use ayurmind::error::AppError;
use ayurmind::knowledge::DoshaPercentages;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file mapping question ids to selected option ids
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Score whatever is answered without requiring the full questionnaire
    #[arg(long)]
    pub(crate) quick: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// JSON file mapping pattern question ids to selected options
    #[arg(long)]
    pub(crate) answers: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DiseaseStatsArgs {
    /// Disease CSV merged over the bundled catalog before counting
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let answers = read_answers(&args.answers)?;
    let service = AssessmentService::new(Arc::new(InMemoryAssessmentRepository::default()));

    if args.quick {
        let quick = service.quick_assess(&answers)?;
        println!("Quick dosha assessment");
        render_analysis(&quick.analysis);
        println!("\n{}", quick.note);
        return Ok(());
    }

    let record = service.assess(AssessmentRequest::new(answers))?;
    println!("Dosha assessment {}", record.id);
    println!(
        "Assessed at: {}",
        record.assessed_at.format("%Y-%m-%d %H:%M UTC")
    );
    let prakriti = &record.results.prakriti;
    println!(
        "Constitution: {} (primary {}, secondary {})",
        prakriti.constitution, prakriti.primary_dosha, prakriti.secondary_dosha
    );
    println!(
        "Scores: vata {} / pitta {} / kapha {}",
        prakriti.scores.vata, prakriti.scores.pitta, prakriti.scores.kapha
    );
    println!("Percentages: {}", percentages_line(prakriti.percentages));
    println!("Confidence: {:.0}%", record.confidence_score);

    if !record.results.vikriti.symptoms.is_empty() {
        println!("\nReported symptoms");
        for symptom in &record.results.vikriti.symptoms {
            println!("- {}", symptom);
        }
    }

    render_recommendations(&record.results.recommendations);

    println!("\nClassical texts consulted");
    for usage in &record.classical_texts_used {
        println!("- {}", usage.text);
    }
    Ok(())
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let answers = read_answers(&args.answers)?;
    let analysis = PatternAnalyzer::new().analyze(&answers);
    render_pattern(&analysis);
    Ok(())
}

pub(crate) fn run_disease_stats(args: DiseaseStatsArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.csv.as_deref())?;
    let stats = catalog.stats()?;

    println!("Disease catalog overview");
    println!("Total diseases: {}", stats.total_diseases);
    render_groups("Categories", &stats.categories);
    render_groups("Doshas", &stats.doshas);
    render_groups("Sources", &stats.sources);
    Ok(())
}

fn percentages_line(percentages: Option<DoshaPercentages>) -> String {
    match percentages {
        Some(p) => format!("vata {}% / pitta {}% / kapha {}%", p.vata, p.pitta, p.kapha),
        None => "undefined (no answers matched)".to_string(),
    }
}

fn render_analysis(analysis: &DoshaAnalysis) {
    println!(
        "Constitution: {} (primary {}, secondary {})",
        analysis.constitution, analysis.primary_dosha, analysis.secondary_dosha
    );
    println!(
        "Scores: vata {} / pitta {} / kapha {}",
        analysis.scores.vata, analysis.scores.pitta, analysis.scores.kapha
    );
    println!("Percentages: {}", percentages_line(analysis.percentages));
    println!("Confidence: {:.0}%", analysis.confidence_score);
}

fn render_recommendations(recommendations: &Recommendations) {
    let sections = [
        ("Diet", recommendations.diet),
        ("Lifestyle", recommendations.lifestyle),
        ("Herbs", recommendations.herbs),
        ("Yoga", recommendations.yoga),
    ];
    for (title, blocks) in sections {
        println!("\n{}", title);
        for block in blocks {
            println!("  {}: {}", block.category, block.items.join(", "));
        }
    }
}

fn render_pattern(analysis: &PatternAnalysis) {
    println!("Pattern analysis");
    println!(
        "Constitution: {} (scores vata {} / pitta {} / kapha {})",
        analysis.constitution, analysis.scores.vata, analysis.scores.pitta, analysis.scores.kapha
    );
    println!("Percentages: {}", percentages_line(analysis.percentages));

    println!("\nSubtypes of {}", analysis.primary_dosha);
    for subtype in &analysis.subtypes {
        println!(
            "- {} ({}): {:?}",
            subtype.subtype, subtype.location, subtype.status
        );
    }

    match &analysis.vikriti {
        Some(vikriti) => {
            println!(
                "\nCurrent imbalance: {} ({:?})",
                vikriti.primary_imbalance, vikriti.severity
            );
            for symptom in &vikriti.symptoms {
                println!("- {}", symptom);
            }
        }
        None => println!("\nCurrent imbalance: none detected"),
    }

    if !analysis.subdosha.is_empty() {
        println!("\nAffected subdoshas: {}", analysis.subdosha.join(", "));
    }

    let diet = &analysis.recommendations.diet;
    println!("\nDiet: {}", diet.description);
    println!("  Favour: {}", diet.foods.join(", "));
    println!("  Avoid: {}", diet.avoid.join(", "));
}

fn render_groups(title: &str, groups: &[StatGroup]) {
    if groups.is_empty() {
        println!("\n{}: none", title);
        return;
    }
    println!("\n{}", title);
    for group in groups {
        println!("  {:<40} {}", group.name, group.count);
    }
}
