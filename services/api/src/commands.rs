use crate::infra::{InMemoryFavoritesStore, InMemoryPropertyRepository};
use clap::Args;
use estate_advisor::assistant::PropertyAssistant;
use estate_advisor::construction::CostEstimator;
use estate_advisor::error::AppError;
use estate_advisor::listings::{
    FavoritesStore, ListingImporter, ListingService, PropertyId, RepositoryError, UserId,
};
use std::path::PathBuf;
use std::sync::Arc;

const CLI_USER: &str = "cli";

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Covered area in square feet
    #[arg(long)]
    pub(crate) area: f64,
    /// Material grade id (standard, medium, premium, luxury)
    #[arg(long, default_value = "standard")]
    pub(crate) material: String,
    /// Labor grade id (basic, skilled, expert)
    #[arg(long, default_value = "basic")]
    pub(crate) labor: String,
    /// Construction duration in days
    #[arg(long)]
    pub(crate) duration_days: f64,
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Listing CSV export forming the candidate pool
    #[arg(long)]
    pub(crate) listings: PathBuf,
    /// Id of a favorited listing; repeat for several
    #[arg(long = "favorite", required = true)]
    pub(crate) favorites: Vec<String>,
}

#[derive(Args, Debug)]
pub(crate) struct AskArgs {
    /// Question for the property assistant
    #[arg(required = true, num_args = 1..)]
    pub(crate) query: Vec<String>,
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let estimator = CostEstimator::standard();
    let estimate = match estimator.estimate(
        args.area,
        &args.material,
        &args.labor,
        args.duration_days,
    ) {
        Ok(estimate) => estimate,
        Err(err) => {
            eprintln!("Material grades:");
            for grade in estimator.materials() {
                eprintln!(
                    "  - {} ({}): {:.0}/sq ft",
                    grade.id, grade.name, grade.cost_per_square_foot
                );
            }
            eprintln!("Labor grades:");
            for grade in estimator.labor() {
                eprintln!(
                    "  - {} ({}): {:.0}/day",
                    grade.id, grade.name, grade.rate_per_day
                );
            }
            return Err(err.into());
        }
    };

    let breakdown = &estimate.breakdown;
    println!(
        "Construction estimate: {} sq ft, {} materials, {} labor, {} days",
        args.area, args.material, args.labor, args.duration_days
    );
    println!("- Material cost:    {:>14.0}", breakdown.material_cost);
    println!(
        "- Labor cost:       {:>14.0} (crew of {:.0})",
        breakdown.labor_cost, estimate.crew_size
    );
    println!("- Additional costs: {:>14.0}", breakdown.additional_costs);
    println!("- Total:            {:>14.0}", breakdown.total_cost);
    println!("  {:.0} per sq ft", estimate.cost_per_square_foot);
    Ok(())
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let properties = Arc::new(InMemoryPropertyRepository::default());
    let favorites = Arc::new(InMemoryFavoritesStore::default());
    let listings = ListingImporter::from_path(&args.listings)?;
    let seeded = ListingImporter::seed(properties.as_ref(), listings)?;

    let user = UserId(CLI_USER.to_string());
    for id in args.favorites {
        match favorites.add(&user, PropertyId(id.clone())) {
            Ok(()) | Err(RepositoryError::Conflict) => {}
            Err(err) => return Err(err.into()),
        }
    }

    let service = ListingService::new(properties, favorites);
    let resolved = service.favorites(&user)?;
    let recommendations = service.recommendations(&user)?;

    println!(
        "Loaded {} listings from {}; {} favorites resolved",
        seeded,
        args.listings.display(),
        resolved.len()
    );
    if recommendations.is_empty() {
        println!("No similar listings found.");
        return Ok(());
    }

    println!("Recommended listings:");
    for (rank, scored) in recommendations.iter().enumerate() {
        let property = &scored.property;
        println!(
            "  {}. [{}] {} | {} {} | {}, {} | {:.0} (score {})",
            rank + 1,
            property.id,
            property.title,
            property.property_type.label(),
            property.status.label(),
            property.location.area,
            property.location.city,
            property.price,
            scored.score
        );
    }
    Ok(())
}

pub(crate) fn run_ask(args: AskArgs) -> Result<(), AppError> {
    let query = args.query.join(" ");
    let reply = PropertyAssistant::reply(&query);
    match reply.subtopic {
        Some(subtopic) => println!("[{} / {}]", reply.topic.label(), subtopic),
        None => println!("[{}]", reply.topic.label()),
    }
    println!("{}", reply.text);
    Ok(())
}
