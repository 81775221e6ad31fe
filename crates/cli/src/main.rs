use anyhow::Context;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use ward_core::config::patient_data_dir_from_env_value;
use ward_core::{ClinicalTestService, CoreConfig, DocumentStore, EntityResolver, PatientService};

#[derive(Parser)]
#[command(name = "ward")]
#[command(about = "Ward patient and test record CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all patients
    List,
    /// Show one patient as JSON
    Show {
        /// Patient id
        id: String,
    },
    /// Show a patient's tests as JSON
    Tests {
        /// Patient id
        id: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cfg = CoreConfig::new(patient_data_dir_from_env_value(
        std::env::var("PATIENT_DATA_DIR").ok(),
    ))?;
    let store = Arc::new(DocumentStore::open(&cfg)?);

    match cli.command {
        Some(Commands::List) => {
            let patients = PatientService::new(store).list()?;
            if patients.is_empty() {
                println!("No patients found.");
            } else {
                for patient in patients {
                    println!(
                        "ID: {}, Name: {} {}, Room: {}, Condition: {}",
                        patient.id,
                        patient.name.first,
                        patient.name.last,
                        patient.room,
                        patient.condition
                    );
                }
            }
        }
        Some(Commands::Show { id }) => {
            let patient = EntityResolver::new(store)
                .patient(&id)
                .with_context(|| format!("cannot show patient {}", id))?;
            println!("{}", serde_json::to_string_pretty(&patient)?);
        }
        Some(Commands::Tests { id }) => {
            let tests = ClinicalTestService::new(store)
                .list_for_patient(&id)
                .with_context(|| format!("cannot list tests for patient {}", id))?;
            println!("{}", serde_json::to_string_pretty(&tests)?);
        }
        None => {
            println!("Use 'ward --help' for commands");
        }
    }

    Ok(())
}
