mod api;
mod batch;
mod lexicon;
mod sentiment;

use dotenv::dotenv;
use std::env;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(api::analyze_sentiment, api::health),
    components(
        schemas(
            batch::BatchSummary,
            batch::CommentResult,
            sentiment::Sentiment,
            api::ErrorResponse,
            api::HealthResponse
        )
    ),
    tags(
        (name = "sentiment", description = "Comment Sentiment Analysis API")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let app = api::router()
        .merge(SwaggerUi::new("/sentiment-swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(ServeDir::new("static")) // Serve landing page
        .layer(CorsLayer::permissive()); // Allow the frontend to call the API cross-origin

    let addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    println!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
