use api_shared::{
    CheckDosageReq, CheckInteractionsReq, CheckService, DosageReportRes, InteractionReportRes,
};
use clap::{Args, Parser, Subcommand};
use medguard_core::{
    classify_recommendation, config::knowledge_base_path_from_env_value,
    constants::KNOWLEDGE_BASE_ENV, CoreConfig, InteractionEngine, RecommendationKind,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "medguard")]
#[command(about = "MedGuard drug interaction and dosage checker")]
struct Cli {
    /// Knowledge base YAML file (defaults to $MEDGUARD_KNOWLEDGE_BASE, then the built-in dataset)
    #[arg(long, global = true)]
    knowledge_base: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct MedicineInput {
    /// Free-text prescription to extract medicines from
    #[arg(long)]
    text: Option<String>,
    /// Medicine names (take precedence over --text)
    medicines: Vec<String>,
    /// Print the JSON response instead of a summary
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check medicines for drug-drug interactions
    Interactions {
        #[command(flatten)]
        input: MedicineInput,
    },
    /// Age-banded dosage guidance and safer alternatives
    Dosage {
        #[command(flatten)]
        input: MedicineInput,
        /// Patient age in years
        #[arg(long)]
        age: Option<i64>,
    },
    /// Summarise the loaded knowledge base
    Knowledge,
}

impl MedicineInput {
    fn medicines(&self) -> Option<Vec<String>> {
        if self.medicines.is_empty() {
            None
        } else {
            Some(self.medicines.clone())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("knowledge=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use 'medguard --help' for commands");
        return Ok(());
    };

    let kb_path = cli
        .knowledge_base
        .or_else(|| knowledge_base_path_from_env_value(std::env::var(KNOWLEDGE_BASE_ENV).ok()));
    let kb = CoreConfig::new(kb_path)?.load_knowledge_base()?;
    let service = CheckService::with_defaults(InteractionEngine::new(Arc::new(kb)))?;

    match command {
        Commands::Interactions { input } => {
            let req = CheckInteractionsReq {
                prescription_text: input.text.clone(),
                medicines: input.medicines(),
            };
            let res = service.check_interactions(&req)?;
            if input.json {
                println!("{}", serde_json::to_string_pretty(&res)?);
            } else {
                print_interactions(&res);
            }
        }
        Commands::Dosage { input, age } => {
            let req = CheckDosageReq {
                prescription_text: input.text.clone(),
                medicines: input.medicines(),
                patient_age: age,
            };
            let res = service.check_dosage(&req)?;
            if input.json {
                println!("{}", serde_json::to_string_pretty(&res)?);
            } else {
                print_dosage(&res);
            }
        }
        Commands::Knowledge => {
            let summary = service.knowledge_summary();
            println!("Interactions:  {}", summary.interactions);
            println!("Dosage rules:  {}", summary.dosage_rules);
            println!("Alternatives:  {}", summary.alternatives);
            println!("Medicines:     {}", summary.medicines);
            let names: Vec<&str> = service
                .engine()
                .knowledge_base()
                .vocabulary()
                .iter()
                .map(|name| name.as_str())
                .collect();
            println!("\n{}", names.join(", "));
        }
    }

    Ok(())
}

fn print_medicines(medicines: &[String]) {
    if medicines.is_empty() {
        println!("No medicines found.");
    } else {
        println!("Medicines: {}", medicines.join(", "));
    }
}

fn print_interactions(res: &InteractionReportRes) {
    print_medicines(&res.extracted_medicines);
    println!("Interactions found: {}", res.total_interactions);

    for interaction in &res.interactions {
        println!(
            "\n[{}] {} + {}",
            interaction.severity, interaction.drug_a, interaction.drug_b
        );
        println!("  Mechanism:   {}", interaction.mechanism);
        println!("  Description: {}", interaction.description);
        println!("  Reference:   {}", interaction.reference);
    }

    for alert in &res.alerts {
        println!("\nALERT {}", alert.interaction_pair);
        println!("  {}", alert.alert_message);
        println!("  Recommendation: {}", alert.recommendation);
    }
}

fn print_dosage(res: &DosageReportRes) {
    print_medicines(&res.extracted_medicines);

    if res.dosage_recommendations.is_empty() {
        println!("No specific dosage recommendations.");
    }
    for rec in &res.dosage_recommendations {
        let kind = classify_recommendation(&rec.recommendation);
        let marker = match kind {
            RecommendationKind::DosageAdjustment => "v",
            RecommendationKind::Contraindication => "x",
            RecommendationKind::ClinicalNote => "i",
        };
        println!(
            "\n{} ({} patient)\n  [{}] {}: {}",
            rec.medicine, rec.age_group, marker, kind, rec.recommendation
        );
    }

    if !res.alternatives.is_empty() {
        println!("\nAlternatives:");
    }
    for alt in &res.alternatives {
        println!(
            "  {} -> {} ({}): {}",
            alt.original_drug, alt.alternative_drug, alt.dosage_form, alt.reason
        );
    }
}
