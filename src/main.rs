use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value as Json;
use tracing_subscriber::EnvFilter;
use url_shortener::{config::Config, handler};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    let cfg = Config::from_env();
    let ctx = handler::Ctx::new(&cfg).await;

    run(service_fn(move |event: LambdaEvent<Json>| {
        let ctx = ctx.clone();
        async move { Ok::<_, Error>(handler::handle(event.payload, &ctx).await) }
    }))
    .await
}
