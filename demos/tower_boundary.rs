//! Example: mapping service errors with a Tower layer

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use error_mapper::tower::ErrorMapperLayer;
use error_mapper::{CaughtError, Environment, ErrorMapperBuilder, ErrorOutput};
use tower::{Layer, Service, ServiceExt};

struct Inventory;

impl Service<u32> for Inventory {
    type Response = u32;
    type Error = CaughtError;
    type Future = Pin<Box<dyn Future<Output = Result<u32, CaughtError>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, sku: u32) -> Self::Future {
        Box::pin(async move {
            match sku {
                0 => Err(CaughtError::new("sku must be positive").with_code("E_INVALID_SKU")),
                1..=99 => Ok(sku * 3),
                _ => Err(CaughtError::new("warehouse db unreachable at 10.0.0.7")),
            }
        })
    }
}

#[tokio::main]
async fn main() {
    let mapper = ErrorMapperBuilder::from_env(&Environment::PRODUCTION)
        .register_mapping(|err| {
            (err.code().as_deref() == Some("E_INVALID_SKU")).then(|| ErrorOutput::new("Invalid SKU"))
        })
        .build();
    let layer = ErrorMapperLayer::new(mapper);

    for sku in [7, 0, 500] {
        match layer.layer(Inventory).oneshot(sku).await {
            Ok(stock) => println!("sku {}: {} in stock", sku, stock),
            Err(output) => match serde_json::to_string(&output) {
                Ok(body) => println!("sku {}: {}", sku, body),
                Err(e) => eprintln!("Failed to serialize error output: {}", e),
            },
        }
    }
}
