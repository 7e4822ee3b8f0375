use env_logger::Env;
use falcon::{configuration::get_configuration, startup::run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");
    let output_dir = configuration.output.directory.clone();

    let analysis = run(configuration).await?;

    log::info!("Analysis completed successfully");
    log::info!(
        "Found {} jobs from {} companies across {} countries",
        analysis.total_jobs(),
        analysis.unique_companies(),
        analysis.countries_covered()
    );
    log::info!("Check the {:?} folder for the generated data files", output_dir);

    Ok(())
}
