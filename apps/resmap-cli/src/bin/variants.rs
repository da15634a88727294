use resmap_core::config::Config;
use resmap_data::DatasetStore;
use resmap_scene::colors_for;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::load()?;
    let store = DatasetStore::load(&config)?;

    println!("resmap-variants\n===============");
    for name in store.variant_names() {
        let variant = store.variant(name)?;
        let colors = colors_for(variant);
        let bounds = variant
            .year_bounds()
            .map_or_else(|| "-".to_string(), |(lo, hi)| format!("{lo}-{hi}"));
        println!(
            "  {name}: {} documents, {} topics, years {bounds}",
            variant.documents.len(),
            colors.len()
        );
    }

    println!("\nResearchers: {}", store.researcher_names().len());
    println!("Departments: {}", store.department_names().len());
    Ok(())
}
