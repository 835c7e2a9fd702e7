pub mod bracket;
pub mod config;
pub mod drafts;
pub mod error;
pub mod fake_predictions;
pub mod fixtures;
pub mod model;
pub mod prediction_store;
pub mod standings;
pub mod submission;
pub mod third_place;
pub mod third_place_matrix;
mod third_place_matrix_data;
pub mod tiebreakers;
pub mod tournament;

pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
